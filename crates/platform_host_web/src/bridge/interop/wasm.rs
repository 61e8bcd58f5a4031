use super::*;
use js_sys::{Function, Promise};
use serde_wasm_bindgen::from_value;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen(inline_js = r#"
function provider() {
  const auth = globalThis.groupPlannerAuth;
  if (!auth) {
    throw new Error('groupPlannerAuth is not installed on this page');
  }
  return auth;
}

function normalizeUser(user) {
  if (!user) {
    return null;
  }
  return { uid: String(user.uid), displayName: user.displayName ?? null };
}

export function jsAuthCurrentUser() {
  const auth = globalThis.groupPlannerAuth;
  return auth ? normalizeUser(auth.currentUser) : null;
}

export async function jsAuthSignIn() {
  await provider().signIn();
}

export async function jsAuthSignOut() {
  await provider().signOut();
}

export function jsAuthSubscribe(callback) {
  const auth = globalThis.groupPlannerAuth;
  if (!auth) {
    callback(null);
    return () => {};
  }
  return auth.onAuthStateChanged((user) => callback(normalizeUser(user)));
}
"#)]
extern "C" {
    #[wasm_bindgen(js_name = jsAuthCurrentUser)]
    fn js_auth_current_user() -> JsValue;
    #[wasm_bindgen(js_name = jsAuthSignIn)]
    fn js_auth_sign_in() -> Promise;
    #[wasm_bindgen(js_name = jsAuthSignOut)]
    fn js_auth_sign_out() -> Promise;
    #[wasm_bindgen(js_name = jsAuthSubscribe)]
    fn js_auth_subscribe(callback: &Closure<dyn FnMut(JsValue)>) -> Function;
}

/// Live `onAuthStateChanged` registration. The closure must outlive the JS subscription.
pub struct AuthSubscription {
    unsubscribe: Function,
    _callback: Closure<dyn FnMut(JsValue)>,
}

impl AuthSubscription {
    pub fn unsubscribe(self) {
        let _ = self.unsubscribe.call0(&JsValue::NULL);
    }
}

fn js_error_to_string(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}

fn decode_user(value: JsValue) -> Option<SessionUser> {
    if value.is_null() || value.is_undefined() {
        return None;
    }
    from_value(value).ok()
}

async fn await_promise(promise: Promise) -> Result<JsValue, String> {
    JsFuture::from(promise).await.map_err(js_error_to_string)
}

pub fn auth_current_user() -> Option<SessionUser> {
    decode_user(js_auth_current_user())
}

pub async fn auth_sign_in() -> Result<(), String> {
    await_promise(js_auth_sign_in()).await.map(|_| ())
}

pub async fn auth_sign_out() -> Result<(), String> {
    await_promise(js_auth_sign_out()).await.map(|_| ())
}

pub fn auth_subscribe(on_change: Box<dyn Fn(Option<SessionUser>)>) -> AuthSubscription {
    let callback = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
        on_change(decode_user(value));
    });
    let unsubscribe = js_auth_subscribe(&callback);
    AuthSubscription {
        unsubscribe,
        _callback: callback,
    }
}

pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn reload_page() -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
    window.location().reload().map_err(js_error_to_string)
}
