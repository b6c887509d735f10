pub use tend_attention::caseload::BoxFuture;
use tend_core::models::command::ClientCommand;

use crate::error::ReviewError;

/// Carries out what the practitioner chose: delivers the message, saves the
/// observation, stores the snooze. Implemented outside the engine.
pub trait ActionExecutor: Send + Sync {
    /// Run `command` once. Failures come back as
    /// [`ReviewError::ActionFailed`]; retrying is up to the implementation.
    fn execute<'a>(&'a self, command: &'a ClientCommand) -> BoxFuture<'a, Result<(), ReviewError>>;
}
