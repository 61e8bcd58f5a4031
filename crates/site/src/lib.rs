mod panels;
mod session_gate;
mod web_app;

pub use panels::window_registry;
pub use session_gate::SessionGate;
pub use web_app::{DesktopEntry, ModernPlaceholder, SiteApp};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
