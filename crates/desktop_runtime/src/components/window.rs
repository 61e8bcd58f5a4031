use leptos::*;
use system_ui::{
    IconName, WindowBody, WindowControlButton, WindowControls, WindowFrame as WindowFrameView,
    WindowTitle, WindowTitleBar,
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use super::use_desktop_runtime;
use crate::{
    model::{Position, WindowId},
    reducer::DesktopAction,
    window_frame::WindowFrame,
};

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn pointer_position(ev: &web_sys::PointerEvent) -> Position {
    Position::new(ev.client_x(), ev.client_y())
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let Some(descriptor) = runtime
        .registry
        .with_value(|registry| registry.get(&window_id).cloned())
    else {
        logging::warn!("open window `{window_id}` has no registered content");
        return ().into_view();
    };

    // Geometry belongs to this window for as long as it stays open, minimized or not.
    let metrics = runtime.config.get_untracked().metrics;
    let initial_position = state
        .with_untracked(|desktop| desktop.initial_position(&window_id, &metrics))
        .unwrap_or(Position::ORIGIN);
    let frame = create_rw_signal(WindowFrame::new(
        initial_position,
        runtime.surface.get_untracked(),
        metrics,
    ));

    create_effect(move |_| {
        let parent = runtime.surface.get();
        let metrics = runtime.config.with(|config| config.metrics);
        frame.update(|frame| {
            frame.metrics = metrics;
            frame.set_parent_size(parent);
        });
    });

    let move_listener = window_event_listener(ev::pointermove, move |ev| {
        if !frame.with_untracked(WindowFrame::is_dragging) {
            return;
        }
        let mut next = frame.get_untracked();
        if next.drag_to(pointer_position(&ev)) {
            frame.set(next);
        }
    });
    on_cleanup(move || move_listener.remove());

    let end_drag = move || {
        if frame.with_untracked(WindowFrame::is_dragging) {
            let snap = runtime.config.with_untracked(|config| config.snap_on_release);
            frame.update(|frame| frame.end_drag(snap));
        }
    };
    let up_listener = window_event_listener(ev::pointerup, move |_| end_drag());
    on_cleanup(move || up_listener.remove());
    let cancel_listener = window_event_listener(ev::pointercancel, move |_| end_drag());
    on_cleanup(move || cancel_listener.remove());

    let focused = {
        let window_id = window_id.clone();
        Signal::derive(move || state.with(|desktop| desktop.is_focused(&window_id)))
    };
    let minimized = {
        let window_id = window_id.clone();
        Signal::derive(move || state.with(|desktop| desktop.is_minimized(&window_id)))
    };
    let stack_order = {
        let window_id = window_id.clone();
        Signal::derive(move || state.with(|desktop| desktop.stack_order(&window_id)))
    };
    let maximized = Signal::derive(move || frame.with(WindowFrame::is_maximized));
    let dragging = Signal::derive(move || frame.with(WindowFrame::is_dragging));
    let style = Signal::derive(move || {
        let mut style = frame.with(WindowFrame::style);
        style.push_str(&format!("z-index:{};", stack_order.get()));
        if minimized.get() {
            style.push_str("display:none;");
        }
        style
    });
    let body_style =
        Signal::derive(move || format!("height:{}px;", frame.with(WindowFrame::body_height)));

    let title = descriptor.title.clone();
    let frame_label = title.clone();
    let icon = descriptor.icon;
    let content = descriptor.render_content();

    let focus = {
        let window_id = window_id.clone();
        Callback::new(move |_: web_sys::PointerEvent| {
            if !focused.get_untracked() {
                runtime.dispatch_action(DesktopAction::Focus {
                    window_id: window_id.clone(),
                });
            }
        })
    };
    let begin_drag = Callback::new(move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 || !ev.is_primary() {
            return;
        }
        let started = frame
            .try_update(|frame| frame.begin_drag(pointer_position(&ev)))
            .unwrap_or(false);
        if started {
            try_set_pointer_capture(&ev);
            ev.prevent_default();
        }
    });
    let toggle_maximize = Callback::new(move |_: web_sys::MouseEvent| {
        frame.update(WindowFrame::toggle_maximize);
    });
    let minimize = {
        let window_id = window_id.clone();
        Callback::new(move |_: web_sys::MouseEvent| {
            runtime.dispatch_action(DesktopAction::Minimize {
                window_id: window_id.clone(),
            });
        })
    };
    let close = {
        let window_id = window_id.clone();
        Callback::new(move |_: web_sys::MouseEvent| {
            runtime.dispatch_action(DesktopAction::Close {
                window_id: window_id.clone(),
            });
        })
    };

    view! {
        <WindowFrameView
            style=style
            aria_label=frame_label
            focused=focused
            maximized=maximized
            dragging=dragging
            on_pointerdown=focus
        >
            <WindowTitleBar
                draggable=Signal::derive(move || !maximized.get())
                on_pointerdown=begin_drag
                on_dblclick=toggle_maximize
            >
                <WindowTitle icon=icon title=title />
                <WindowControls>
                    <WindowControlButton
                        icon=IconName::WindowMinimize
                        aria_label="Minimize window"
                        on_click=minimize
                    />
                    <WindowControlButton
                        icon=Signal::derive(move || {
                            if maximized.get() {
                                IconName::WindowRestore
                            } else {
                                IconName::WindowMaximize
                            }
                        })
                        aria_label=Signal::derive(move || {
                            if maximized.get() { "Restore window" } else { "Maximize window" }
                                .to_string()
                        })
                        on_click=toggle_maximize
                    />
                    <WindowControlButton
                        icon=IconName::Dismiss
                        aria_label="Close window"
                        on_click=close
                    />
                </WindowControls>
            </WindowTitleBar>
            <WindowBody style=body_style>{content}</WindowBody>
        </WindowFrameView>
    }
    .into_view()
}
