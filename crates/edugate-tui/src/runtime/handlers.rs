//! Effect handlers for the TUI runtime.
//!
//! Handlers are async functions that perform I/O and return a `UiEvent`.
//! They never touch state; the runtime spawns them and delivers the result
//! to the inbox.

use edugate_core::api::{AuthApi, LoginRequest};

use crate::events::UiEvent;

/// Sends one login request and reports the outcome.
pub async fn submit_login<A: AuthApi>(api: A, request: LoginRequest) -> UiEvent {
    let result = api.login(&request).await;
    UiEvent::LoginFinished { request, result }
}

#[cfg(test)]
mod tests {
    use edugate_core::api::{LoginReply, TransportError};

    use super::*;

    struct Unreachable;

    impl AuthApi for Unreachable {
        async fn login(&self, _request: &LoginRequest) -> Result<LoginReply, TransportError> {
            Err(TransportError::connect("connection refused"))
        }
    }

    #[tokio::test]
    async fn test_submit_login_returns_request_with_result() {
        let request = LoginRequest::Faculty {
            email: "x@school.edu".to_string(),
            password: "pw".to_string(),
        };

        let event = submit_login(Unreachable, request.clone()).await;

        let UiEvent::LoginFinished {
            request: echoed,
            result,
        } = event
        else {
            panic!("expected LoginFinished");
        };
        assert_eq!(echoed, request);
        assert!(result.is_err());
    }
}
