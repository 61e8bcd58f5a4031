//! Desktop shell UI composition and interaction surfaces.

mod a11y;
mod start_menu;
mod taskbar;
mod window;

use leptos::*;
use system_ui::{
    DesktopBackdrop, DesktopBanner, DesktopIconButton, DesktopIconGrid, DesktopRoot,
    DesktopWindowLayer,
};

use self::{taskbar::Taskbar, window::DesktopWindow};
use crate::{model::WindowId, reducer::DesktopAction};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Renders the desktop: notice banner, icon grid, open windows, and the taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let selected_icon = create_rw_signal(None::<WindowId>);
    let surface_ref = runtime.surface_ref;
    surface_ref.on_load(move |_| request_animation_frame(move || runtime.refresh_surface()));
    let banner = Signal::derive(move || runtime.config.with(|config| config.banner.clone()));

    let icons = runtime.registry.with_value(|registry| {
        registry
            .iter()
            .map(|descriptor| {
                let window_id = descriptor.id.clone();
                let select_id = window_id.clone();
                let selected_id = window_id.clone();
                view! {
                    <DesktopIconButton
                        icon=descriptor.icon
                        label=descriptor.title.clone()
                        selected=Signal::derive(move || {
                            selected_icon.with(|selected| selected.as_ref() == Some(&selected_id))
                        })
                        on_select=Callback::new(move |_| selected_icon.set(Some(select_id.clone())))
                        on_activate=Callback::new(move |_| {
                            runtime.dispatch_action(DesktopAction::Activate {
                                window_id: window_id.clone(),
                            });
                        })
                    />
                }
            })
            .collect_view()
    });

    view! {
        <DesktopRoot on_pointerdown=Callback::new(move |_| selected_icon.set(None))>
            <DesktopBackdrop surface_ref=surface_ref>
                <Show when=move || banner.with(Option::is_some) fallback=|| ()>
                    <DesktopBanner>{move || banner.get().unwrap_or_default()}</DesktopBanner>
                </Show>
                <DesktopIconGrid>{icons}</DesktopIconGrid>
                <DesktopWindowLayer>
                    <For each=move || state.get().open_ids key=|id| id.clone() let:window_id>
                        <DesktopWindow window_id=window_id />
                    </For>
                </DesktopWindowLayer>
            </DesktopBackdrop>
            <Taskbar />
        </DesktopRoot>
    }
}
