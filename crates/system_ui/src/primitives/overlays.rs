use super::*;

#[component]
/// Shared overlay surface for menus and popups.
pub fn MenuSurface(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-menu-surface", layout_class)
            id=id
            role="menu"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="menu-surface"
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
        >
            {children()}
        </div>
    }
}

#[component]
/// Non-interactive menu header, such as the signed-in user's name.
pub fn MenuHeader(
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-menu-header", layout_class)
            role="presentation"
            data-ui-primitive="true"
            data-ui-kind="menu-header"
        >
            {icon.map(|icon| view! { <Icon icon=icon size=IconSize::Md /> })}
            <span>{children()}</span>
        </div>
    }
}

#[component]
/// Shared overlay menu item primitive.
pub fn MenuItem(
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    on_click: Callback<MouseEvent>,
    children: Children,
) -> impl IntoView {
    match icon {
        Some(icon) => view! {
            <Button
                layout_class=layout_class.unwrap_or("")
                role="menuitem"
                disabled=disabled
                ui_slot="menu-item"
                variant=ButtonVariant::Quiet
                leading_icon=icon
                on_click=on_click
            >
                {children()}
            </Button>
        }
        .into_view(),
        None => view! {
            <Button
                layout_class=layout_class.unwrap_or("")
                role="menuitem"
                disabled=disabled
                ui_slot="menu-item"
                variant=ButtonVariant::Quiet
                on_click=on_click
            >
                {children()}
            </Button>
        }
        .into_view(),
    }
}

#[component]
/// Shared overlay menu separator.
pub fn MenuSeparator(#[prop(optional)] layout_class: Option<&'static str>) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-menu-separator", layout_class)
            role="separator"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="menu-separator"
        ></div>
    }
}
