use super::*;

#[component]
/// Root desktop shell primitive.
pub fn DesktopRoot(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("desktop-shell", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-root"
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
/// Desktop surface that hosts icons, the banner, and windows. Windows are bounded by it.
pub fn DesktopBackdrop(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] surface_ref: Option<NodeRef<html::Div>>,
    children: Children,
) -> impl IntoView {
    let surface_ref = surface_ref.unwrap_or_else(create_node_ref);
    view! {
        <div
            class=merge_layout_class("desktop-backdrop", layout_class)
            node_ref=surface_ref
            data-ui-primitive="true"
            data-ui-kind="desktop-backdrop"
        >
            {children()}
        </div>
    }
}

#[component]
/// Decorative announcement banner shown behind the windows.
pub fn DesktopBanner(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-desktop-banner", layout_class)
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="desktop-banner"
        >
            {children()}
        </div>
    }
}

#[component]
/// Desktop icon grid.
pub fn DesktopIconGrid(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-desktop-icon-grid", layout_class)
            role="list"
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-grid"
        >
            {children()}
        </div>
    }
}

#[component]
/// Desktop icon launcher.
///
/// Activation is a double click or Enter while focused; a single click only selects.
pub fn DesktopIconButton(
    icon: IconName,
    #[prop(into)] label: String,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_select: Option<Callback<()>>,
    on_activate: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            role="listitem"
            class=merge_layout_class("ui-desktop-icon-button", layout_class)
            title=label.clone()
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-button"
            data-ui-icon=icon.token()
            data-ui-selected=move || bool_token(selected.get())
            on:click=move |_| {
                if let Some(on_select) = on_select.as_ref() {
                    on_select.call(());
                }
            }
            on:dblclick=move |_: MouseEvent| on_activate.call(())
            on:keydown=move |ev: KeyboardEvent| {
                if ev.key() == "Enter" {
                    ev.prevent_default();
                    on_activate.call(());
                }
            }
        >
            <span class="ui-desktop-icon-glyph">
                <Icon icon=icon size=IconSize::Lg />
            </span>
            <span class="ui-desktop-icon-label">{label}</span>
        </button>
    }
}

#[component]
/// Window stack host.
pub fn DesktopWindowLayer(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-layer", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-window-layer"
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared window frame primitive.
pub fn WindowFrame(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] style: Signal<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] focused: MaybeSignal<bool>,
    #[prop(optional, into)] maximized: MaybeSignal<bool>,
    #[prop(optional, into)] dragging: MaybeSignal<bool>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("ui-window-frame", layout_class)
            style=move || style.get()
            role="dialog"
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="window-frame"
            data-ui-focused=move || bool_token(focused.get())
            data-ui-maximized=move || bool_token(maximized.get())
            data-ui-dragging=move || bool_token(dragging.get())
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
        >
            {children()}
        </section>
    }
}

#[component]
/// Shared window titlebar primitive. It doubles as the drag handle.
pub fn WindowTitleBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] draggable: MaybeSignal<bool>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    #[prop(optional)] on_dblclick: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class=merge_layout_class("ui-window-titlebar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-titlebar"
            data-ui-draggable=move || bool_token(draggable.get())
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
            on:dblclick=move |ev| {
                if let Some(on_dblclick) = on_dblclick.as_ref() {
                    on_dblclick.call(ev);
                }
            }
        >
            {children()}
        </header>
    }
}

#[component]
/// Icon and title text group inside the titlebar.
pub fn WindowTitle(
    icon: IconName,
    #[prop(into)] title: String,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-title", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-title"
        >
            <Icon icon=icon size=IconSize::Sm />
            <span class="ui-window-title-text">{title}</span>
        </div>
    }
}

#[component]
/// Shared titlebar controls row.
pub fn WindowControls(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-controls", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-controls"
        >
            {children()}
        </div>
    }
}

#[component]
/// Titlebar control button. Pointer presses never reach the titlebar drag handler.
pub fn WindowControlButton(
    #[prop(into)] icon: MaybeSignal<IconName>,
    #[prop(into)] aria_label: MaybeSignal<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    on_click: Callback<MouseEvent>,
) -> impl IntoView {
    view! {
        <Button
            layout_class=layout_class.unwrap_or("")
            aria_label=aria_label.clone()
            title=aria_label
            ui_slot="window-control"
            variant=ButtonVariant::Quiet
            size=ButtonSize::Sm
            on_pointerdown=Callback::new(|ev: web_sys::PointerEvent| ev.stop_propagation())
            on_click=Callback::new(move |ev: MouseEvent| {
                ev.stop_propagation();
                on_click.call(ev);
            })
        >
            {move || view! { <Icon icon=icon.get() size=IconSize::Xs /> }}
        </Button>
    }
}

#[component]
/// Shared window body primitive.
pub fn WindowBody(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] style: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-body", layout_class)
            style=move || style.get()
            data-ui-primitive="true"
            data-ui-kind="window-body"
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared taskbar root.
pub fn Taskbar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] height_px: Option<MaybeSignal<u32>>,
    children: Children,
) -> impl IntoView {
    view! {
        <footer
            class=merge_layout_class("ui-taskbar", layout_class)
            role="toolbar"
            aria-label=aria_label
            style=move || height_px.as_ref().map(|px| format!("height:{}px;", px.get()))
            data-ui-primitive="true"
            data-ui-kind="taskbar"
        >
            {children()}
        </footer>
    }
}

#[component]
/// Shared taskbar section.
pub fn TaskbarSection(
    ui_slot: &'static str,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-taskbar-section", layout_class)
            data-ui-primitive="true"
            data-ui-kind="taskbar-section"
            data-ui-slot=ui_slot
            aria-label=aria_label
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared taskbar button.
pub fn TaskbarButton(
    icon: IconName,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] ui_state: MaybeSignal<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] aria_controls: MaybeSignal<String>,
    #[prop(optional, into)] aria_haspopup: MaybeSignal<String>,
    #[prop(optional, into)] aria_expanded: MaybeSignal<bool>,
    #[prop(optional, into)] aria_pressed: MaybeSignal<bool>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    on_click: Callback<MouseEvent>,
    children: Children,
) -> impl IntoView {
    view! {
        <Button
            layout_class=layout_class.unwrap_or("")
            aria_label=aria_label
            aria_controls=aria_controls
            aria_haspopup=aria_haspopup
            aria_expanded=aria_expanded
            aria_pressed=aria_pressed
            title=title
            ui_slot=ui_slot.unwrap_or("taskbar-button")
            ui_state=ui_state
            leading_icon=icon
            variant=ButtonVariant::Quiet
            on_pointerdown=Callback::new(move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            })
            on_click=on_click
        >
            {children()}
        </Button>
    }
}

#[component]
/// Taskbar clock readout.
pub fn TaskbarClock(
    #[prop(into)] text: Signal<String>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-taskbar-clock", layout_class)
            role="timer"
            title=move || title.get()
            data-ui-primitive="true"
            data-ui-kind="taskbar-clock"
        >
            <time>{move || text.get()}</time>
        </div>
    }
}
