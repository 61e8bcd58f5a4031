//! Authentication session contracts and an in-memory provider.
//!
//! The hosted auth backend is an external collaborator. The shell only needs to know whether a
//! user is present, to ask for sign-in/sign-out, and to hear about auth-state changes so the
//! whole desktop can be torn down or mounted.

use std::{cell::RefCell, fmt, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};

/// Object-safe boxed future used by [`SessionService`] async methods.
pub type SessionFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Callback invoked with the new user (or `None`) whenever the auth state changes.
pub type AuthListener = Rc<dyn Fn(Option<SessionUser>)>;

const FALLBACK_USER_LABEL: &str = "User";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// The signed-in user as reported by the auth provider.
pub struct SessionUser {
    /// Provider-assigned stable user id.
    pub uid: String,
    /// Optional human-readable display name.
    #[serde(default)]
    pub display_name: Option<String>,
}

impl SessionUser {
    /// Creates a user with only a provider id.
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            display_name: None,
        }
    }

    /// Returns a copy of this user with a display name attached.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Label shown in the start menu header. Blank names fall back to `"User"`.
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(FALLBACK_USER_LABEL)
    }
}

/// Subscription handle returned by [`SessionService::watch`].
///
/// Dropping the handle (or calling [`SessionWatch::cancel`]) unsubscribes the listener.
pub struct SessionWatch {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl SessionWatch {
    /// Wraps an unsubscribe callback.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Handle for providers that never emit changes.
    pub fn detached() -> Self {
        Self { cancel: None }
    }

    /// Unsubscribes immediately.
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for SessionWatch {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for SessionWatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionWatch")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// Host service for the authentication provider.
pub trait SessionService {
    /// Returns the currently signed-in user, if any.
    fn current_user(&self) -> Option<SessionUser>;

    /// Starts the provider's interactive sign-in flow.
    fn sign_in<'a>(&'a self) -> SessionFuture<'a, Result<(), String>>;

    /// Signs the current user out.
    fn sign_out<'a>(&'a self) -> SessionFuture<'a, Result<(), String>>;

    /// Subscribes to auth-state changes.
    fn watch(&self, listener: AuthListener) -> SessionWatch;
}

#[derive(Debug, Clone, Copy, Default)]
/// Session service for builds without an auth provider. Nobody is ever signed in.
pub struct NoopSessionService;

impl SessionService for NoopSessionService {
    fn current_user(&self) -> Option<SessionUser> {
        None
    }

    fn sign_in<'a>(&'a self) -> SessionFuture<'a, Result<(), String>> {
        Box::pin(async { Err("no auth provider configured".to_string()) })
    }

    fn sign_out<'a>(&'a self) -> SessionFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn watch(&self, _listener: AuthListener) -> SessionWatch {
        SessionWatch::detached()
    }
}

struct MemorySessionInner {
    user: Option<SessionUser>,
    sign_in_as: SessionUser,
    listeners: Vec<(u64, AuthListener)>,
    next_listener_id: u64,
    sign_out_count: usize,
}

#[derive(Clone)]
/// In-memory auth provider used by tests and local previews.
pub struct MemorySessionService {
    inner: Rc<RefCell<MemorySessionInner>>,
}

impl MemorySessionService {
    /// Creates a signed-out provider that signs in as `sign_in_as`.
    pub fn new(sign_in_as: SessionUser) -> Self {
        Self {
            inner: Rc::new(RefCell::new(MemorySessionInner {
                user: None,
                sign_in_as,
                listeners: Vec::new(),
                next_listener_id: 1,
                sign_out_count: 0,
            })),
        }
    }

    /// Creates a provider with `user` already signed in.
    pub fn signed_in(user: SessionUser) -> Self {
        let service = Self::new(user.clone());
        service.inner.borrow_mut().user = Some(user);
        service
    }

    /// Replaces the current user and notifies every listener.
    pub fn set_user(&self, user: Option<SessionUser>) {
        let listeners: Vec<AuthListener> = {
            let mut inner = self.inner.borrow_mut();
            inner.user = user.clone();
            inner
                .listeners
                .iter()
                .map(|(_, listener)| listener.clone())
                .collect()
        };
        for listener in listeners {
            listener(user.clone());
        }
    }

    /// Number of completed sign-out calls.
    pub fn sign_out_count(&self) -> usize {
        self.inner.borrow().sign_out_count
    }

    /// Number of live auth-state listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl fmt::Debug for MemorySessionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("MemorySessionService")
            .field("user", &inner.user)
            .field("listeners", &inner.listeners.len())
            .field("sign_out_count", &inner.sign_out_count)
            .finish()
    }
}

impl SessionService for MemorySessionService {
    fn current_user(&self) -> Option<SessionUser> {
        self.inner.borrow().user.clone()
    }

    fn sign_in<'a>(&'a self) -> SessionFuture<'a, Result<(), String>> {
        Box::pin(async move {
            let user = self.inner.borrow().sign_in_as.clone();
            self.set_user(Some(user));
            Ok(())
        })
    }

    fn sign_out<'a>(&'a self) -> SessionFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner.borrow_mut().sign_out_count += 1;
            self.set_user(None);
            Ok(())
        })
    }

    fn watch(&self, listener: AuthListener) -> SessionWatch {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_listener_id;
            inner.next_listener_id += 1;
            inner.listeners.push((id, listener));
            id
        };
        let inner = Rc::downgrade(&self.inner);
        SessionWatch::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner
                    .borrow_mut()
                    .listeners
                    .retain(|(listener_id, _)| *listener_id != id);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    fn recording_listener() -> (AuthListener, Rc<RefCell<Vec<Option<String>>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let listener: AuthListener =
            Rc::new(move |user: Option<SessionUser>| sink.borrow_mut().push(user.map(|u| u.uid)));
        (listener, seen)
    }

    #[test]
    fn label_falls_back_for_missing_or_blank_names() {
        assert_eq!(SessionUser::new("u1").label(), "User");
        assert_eq!(SessionUser::new("u1").with_display_name("  ").label(), "User");
        assert_eq!(
            SessionUser::new("u1").with_display_name("Mina").label(),
            "Mina"
        );
    }

    #[test]
    fn sign_in_and_out_notify_watchers() {
        let service = MemorySessionService::new(SessionUser::new("camper"));
        let (listener, seen) = recording_listener();
        let _watch = service.watch(listener);

        block_on(service.sign_in()).expect("sign in");
        assert_eq!(service.current_user().map(|u| u.uid), Some("camper".to_string()));

        block_on(service.sign_out()).expect("sign out");
        assert_eq!(service.current_user(), None);
        assert_eq!(service.sign_out_count(), 1);
        assert_eq!(*seen.borrow(), vec![Some("camper".to_string()), None]);
    }

    #[test]
    fn dropping_watch_unsubscribes() {
        let service = MemorySessionService::signed_in(SessionUser::new("camper"));
        let (listener, seen) = recording_listener();
        let watch = service.watch(listener);
        assert_eq!(service.listener_count(), 1);

        drop(watch);
        assert_eq!(service.listener_count(), 0);

        service.set_user(None);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn user_deserializes_from_provider_payload() {
        let user: SessionUser =
            serde_json::from_str(r#"{"uid":"abc","displayName":"Jo"}"#).expect("decode user");
        assert_eq!(user, SessionUser::new("abc").with_display_name("Jo"));

        let bare: SessionUser = serde_json::from_str(r#"{"uid":"abc"}"#).expect("decode bare");
        assert_eq!(bare.display_name, None);
    }
}
