//! Drains reducer-emitted runtime effects into the host layer.

use leptos::*;

use crate::runtime_context::DesktopRuntimeContext;

/// Installs the executor that hands queued [`crate::RuntimeEffect`] values to the host in order.
pub fn install(runtime: DesktopRuntimeContext) {
    // Take the batch before running it so effects queued while it runs start a new batch.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        let host = runtime.host.get_value();
        for effect in queued {
            host.run_runtime_effect(effect);
        }
    });
}
