use super::*;

fn unsupported() -> String {
    "Browser auth APIs are only available when compiled for wasm32".to_string()
}

#[derive(Debug)]
pub struct AuthSubscription;

impl AuthSubscription {
    pub fn unsubscribe(self) {}
}

pub fn auth_current_user() -> Option<SessionUser> {
    None
}

pub async fn auth_sign_in() -> Result<(), String> {
    Err(unsupported())
}

pub async fn auth_sign_out() -> Result<(), String> {
    Ok(())
}

pub fn auth_subscribe(_on_change: Box<dyn Fn(Option<SessionUser>)>) -> AuthSubscription {
    AuthSubscription
}

pub fn confirm(_message: &str) -> bool {
    false
}

pub fn reload_page() -> Result<(), String> {
    Ok(())
}
