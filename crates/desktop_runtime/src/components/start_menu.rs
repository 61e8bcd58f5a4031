use leptos::*;
use system_ui::{IconName, MenuHeader, MenuItem, MenuSeparator, MenuSurface};

use super::{a11y::handle_menu_keydown, taskbar::START_MENU_ID, use_desktop_runtime};
use crate::{reducer::DesktopAction, taskbar::start_menu_user_label};

#[component]
pub(super) fn StartMenu(open: RwSignal<bool>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let host = runtime.host.get_value();
    let user_label = start_menu_user_label(host.current_user().as_ref());
    let alternate = host.alternate_presentation();
    let current = alternate.toggled();

    view! {
        <div on:keydown=move |ev: web_sys::KeyboardEvent| {
            handle_menu_keydown(&ev, START_MENU_ID);
        }>
            <MenuSurface
                id=START_MENU_ID
                aria_label="Start menu"
                on_pointerdown=Callback::new(|ev: web_sys::PointerEvent| ev.stop_propagation())
            >
                <MenuHeader icon=IconName::User>{user_label}</MenuHeader>
                <MenuSeparator />
                <MenuItem
                    icon=IconName::Monitor
                    on_click=Callback::new(move |_| {
                        open.set(false);
                        runtime.dispatch_action(DesktopAction::SwitchPresentation { mode: alternate });
                    })
                >
                    {current.switch_label()}
                </MenuItem>
                <MenuItem
                    icon=IconName::SignOut
                    on_click=Callback::new(move |_| {
                        open.set(false);
                        runtime.dispatch_action(DesktopAction::RequestSignOut);
                    })
                >
                    "Sign Out"
                </MenuItem>
            </MenuSurface>
        </div>
    }
}
