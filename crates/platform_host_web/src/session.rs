//! Auth-provider adapter backed by the page-installed `groupPlannerAuth` bridge.

use std::{cell::RefCell, rc::Rc};

use platform_host::{AuthListener, SessionFuture, SessionService, SessionUser, SessionWatch};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser session service.
pub struct WebSessionService;

impl SessionService for WebSessionService {
    fn current_user(&self) -> Option<SessionUser> {
        bridge::auth_current_user()
    }

    fn sign_in<'a>(&'a self) -> SessionFuture<'a, Result<(), String>> {
        Box::pin(bridge::auth_sign_in())
    }

    fn sign_out<'a>(&'a self) -> SessionFuture<'a, Result<(), String>> {
        Box::pin(bridge::auth_sign_out())
    }

    fn watch(&self, listener: AuthListener) -> SessionWatch {
        let subscription = Rc::new(RefCell::new(Some(bridge::auth_subscribe(Box::new(
            move |user| listener(user),
        )))));
        SessionWatch::new(move || {
            if let Some(subscription) = subscription.borrow_mut().take() {
                subscription.unsubscribe();
            }
        })
    }
}
