use std::rc::Rc;

use crate::domain::services::traits::{AuthProvider, Navigate, Notifier};
use crate::shared::constants::{SIGN_OUT_ERROR_MESSAGE, SIGN_OUT_SUCCESS_MESSAGE};
use crate::shared::errors::{Result, ShellError};
use crate::shared::logging::{log_sign_out_error, log_sign_out_start, log_sign_out_success};

/// Sign out, tell the user, then leave for the login page.
///
/// Each `run` is independent; concurrent runs all end on the login page. On
/// failure nothing but the error toast happens: no navigation and no local
/// session change.
#[derive(Clone)]
pub struct SignOutFlow {
    auth: Rc<dyn AuthProvider>,
    router: Rc<dyn Navigate>,
    notifier: Rc<dyn Notifier>,
    login_path: String,
}

impl SignOutFlow {
    pub fn new(
        auth: Rc<dyn AuthProvider>,
        router: Rc<dyn Navigate>,
        notifier: Rc<dyn Notifier>,
        login_path: impl Into<String>,
    ) -> Self {
        Self {
            auth,
            router,
            notifier,
            login_path: login_path.into(),
        }
    }

    pub async fn run(&self) -> Result<()> {
        log_sign_out_start();

        match self.auth.sign_out().await {
            Ok(()) => {
                self.notifier.notify_success(SIGN_OUT_SUCCESS_MESSAGE);
                self.router.navigate(&self.login_path);
                log_sign_out_success(&self.login_path);
                Ok(())
            }
            Err(reason) => {
                log_sign_out_error(&reason);
                self.notifier.notify_error(SIGN_OUT_ERROR_MESSAGE);
                Err(ShellError::SignOutFailed(reason))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::cell::RefCell;

    struct FakeAuth {
        result: std::result::Result<(), String>,
        calls: RefCell<usize>,
    }

    #[async_trait(?Send)]
    impl AuthProvider for FakeAuth {
        async fn sign_out(&self) -> std::result::Result<(), String> {
            *self.calls.borrow_mut() += 1;
            // Suspend once so concurrent runs interleave
            tokio::task::yield_now().await;
            self.result.clone()
        }
    }

    #[derive(Default)]
    struct RecordingRouter {
        paths: RefCell<Vec<String>>,
    }

    impl Navigate for RecordingRouter {
        fn navigate(&self, path: &str) {
            self.paths.borrow_mut().push(path.to_string());
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        successes: RefCell<Vec<String>>,
        errors: RefCell<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify_success(&self, message: &str) {
            self.successes.borrow_mut().push(message.to_string());
        }

        fn notify_error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }
    }

    fn flow_with(
        result: std::result::Result<(), String>,
    ) -> (SignOutFlow, Rc<FakeAuth>, Rc<RecordingRouter>, Rc<RecordingNotifier>) {
        let auth = Rc::new(FakeAuth {
            result,
            calls: RefCell::new(0),
        });
        let router = Rc::new(RecordingRouter::default());
        let notifier = Rc::new(RecordingNotifier::default());
        let flow = SignOutFlow::new(auth.clone(), router.clone(), notifier.clone(), "/auth");
        (flow, auth, router, notifier)
    }

    #[tokio::test]
    async fn test_success_notifies_then_navigates_to_login() {
        let (flow, auth, router, notifier) = flow_with(Ok(()));

        flow.run().await.unwrap();

        assert_eq!(*auth.calls.borrow(), 1);
        assert_eq!(*notifier.successes.borrow(), vec!["Signed out successfully".to_string()]);
        assert!(notifier.errors.borrow().is_empty());
        assert_eq!(*router.paths.borrow(), vec!["/auth".to_string()]);
    }

    #[tokio::test]
    async fn test_failure_reports_and_stays_put() {
        let (flow, _auth, router, notifier) = flow_with(Err("network error".to_string()));

        let err = flow.run().await.unwrap_err();

        match err {
            ShellError::SignOutFailed(reason) => assert_eq!(reason, "network error"),
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(*notifier.errors.borrow(), vec!["Error signing out".to_string()]);
        assert!(notifier.successes.borrow().is_empty());
        assert!(router.paths.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_runs_both_land_on_login() {
        let (flow, auth, router, notifier) = flow_with(Ok(()));

        let (first, second) = futures::join!(flow.run(), flow.run());

        assert!(first.is_ok());
        assert!(second.is_ok());
        assert_eq!(*auth.calls.borrow(), 2);
        assert_eq!(notifier.successes.borrow().len(), 2);
        assert_eq!(*router.paths.borrow(), vec!["/auth".to_string(), "/auth".to_string()]);
    }
}
