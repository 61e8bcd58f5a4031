use platform_host::SessionUser;

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub use imp::AuthSubscription;

pub fn auth_current_user() -> Option<SessionUser> {
    imp::auth_current_user()
}

pub async fn auth_sign_in() -> Result<(), String> {
    imp::auth_sign_in().await
}

pub async fn auth_sign_out() -> Result<(), String> {
    imp::auth_sign_out().await
}

pub fn auth_subscribe(on_change: Box<dyn Fn(Option<SessionUser>)>) -> AuthSubscription {
    imp::auth_subscribe(on_change)
}

pub fn confirm(message: &str) -> bool {
    imp::confirm(message)
}

pub fn reload_page() -> Result<(), String> {
    imp::reload_page()
}
