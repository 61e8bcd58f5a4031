//! Browser bridge for the auth provider and the few `window` APIs the shell needs.
//!
//! The auth provider is installed by the host page as `globalThis.groupPlannerAuth` and exposes
//! `currentUser`, `signIn()`, `signOut()`, and `onAuthStateChanged(callback)`.

mod interop;

pub use interop::{
    auth_current_user, auth_sign_in, auth_sign_out, auth_subscribe, confirm, reload_page,
    AuthSubscription,
};
