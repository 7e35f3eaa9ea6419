//! Backend authentication API.
//!
//! - `types.rs`: request bodies and the validated `LoginReply`
//! - `errors.rs`: `TransportError` for failures below the JSON contract
//! - `client.rs`: reqwest implementation of `AuthApi`

mod client;
mod errors;
mod types;

use std::future::Future;

pub use client::HttpAuthClient;
pub use errors::{TransportError, TransportErrorKind};
pub use types::{LoginReply, LoginRequest, ServerUser};

/// Port for the login call, so the dialog can run against a test double.
pub trait AuthApi {
    /// Performs one login round-trip.
    fn login(
        &self,
        request: &LoginRequest,
    ) -> impl Future<Output = Result<LoginReply, TransportError>> + Send;
}
