//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived window-manager state, the runtime effect queue, the loaded
//! shell configuration, and the measured desktop surface. UI composition stays in
//! [`crate::components`].

use leptos::*;
use platform_host::HostServices;

use crate::{
    apps::WindowRegistry,
    config::{load_shell_config, ShellConfig, WindowMetrics},
    effect_executor,
    host::DesktopHostContext,
    model::{DesktopState, SurfaceSize},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Registered content windows, in desktop icon order.
    pub registry: StoredValue<WindowRegistry>,
    /// Active shell configuration. Starts at the defaults and is replaced once the stored
    /// override has loaded.
    pub config: RwSignal<ShellConfig>,
    /// Open, focused, and minimized window ids.
    pub state: RwSignal<DesktopState>,
    /// Size of the surface windows are laid out in, taskbar excluded.
    pub surface: RwSignal<SurfaceSize>,
    /// Desktop element the surface size is measured from.
    pub surface_ref: NodeRef<html::Div>,
    /// Queue of runtime effects emitted by the reducer and processed by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Re-measures the desktop surface from its element.
    pub fn refresh_surface(&self) {
        self.measure_surface(&self.config.get_untracked().metrics);
    }

    fn measure_surface(&self, metrics: &WindowMetrics) {
        let measured = self
            .surface_ref
            .get_untracked()
            .map(|surface| (surface.client_width(), surface.client_height()));
        let next = self
            .host
            .get_value()
            .desktop_surface_size(metrics, measured);
        if self.surface.get_untracked() != next {
            self.surface.set(next);
        }
    }
}

fn install_runtime_orchestration(runtime: DesktopRuntimeContext) {
    let prefs = runtime.host.get_value().prefs_store();
    spawn_local(async move {
        let loaded = load_shell_config(&*prefs).await;
        if loaded != runtime.config.get_untracked() {
            logging::log!("applying stored shell config override");
            runtime.config.set(loaded);
        }
    });

    // Metrics feed the surface size, so a config change re-measures.
    create_effect(move |_| {
        let metrics = runtime.config.with(|config| config.metrics);
        runtime.measure_surface(&metrics);
    });

    let resize_listener = window_event_listener(ev::resize, move |_| runtime.refresh_surface());
    on_cleanup(move || resize_listener.remove());

    effect_executor::install(runtime);
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(
    /// Injected browser or in-memory host bundle assembled by the entry layer.
    host_services: HostServices,
    /// Content windows offered on the desktop.
    registry: WindowRegistry,
    children: Children,
) -> impl IntoView {
    let defaults = ShellConfig::default();
    let host = store_value(DesktopHostContext::new(
        host_services,
        defaults.sign_out_prompt.clone(),
    ));
    let surface = create_rw_signal(
        host.get_value()
            .desktop_surface_size(&defaults.metrics, None),
    );
    let surface_ref = create_node_ref::<html::Div>();
    let config = create_rw_signal(defaults);
    let registry = store_value(registry);
    let state = create_rw_signal(DesktopState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    // The sign-out prompt lives in config, so the host context follows it.
    create_effect(move |_| {
        let prompt = config.with(|config| config.sign_out_prompt.clone());
        host.update_value(|host| host.set_sign_out_prompt(prompt));
    });

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let previous = desktop.clone();
        let metrics = config.get_untracked().metrics;

        let result = registry
            .with_value(|registry| reduce_desktop(&mut desktop, registry, &metrics, action));
        match result {
            Ok(new_effects) => {
                if desktop != previous {
                    state.set(desktop);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        registry,
        config,
        state,
        surface,
        surface_ref,
        effects,
        dispatch,
    };

    provide_context(runtime);

    install_runtime_orchestration(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
