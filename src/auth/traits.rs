//! Trait abstraction for the authentication backend to enable mocking in tests

use crate::state::{FieldValues, FlowKind, SubmitError};
use async_trait::async_trait;

/// Backend that receives a validated form snapshot.
///
/// `Ok` carries the success message shown to the user. Implementations only
/// ever fail with [`SubmitError::RemoteRejected`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthBackend: Send + Sync {
    async fn submit(&self, flow: FlowKind, values: FieldValues) -> Result<String, SubmitError>;
}
