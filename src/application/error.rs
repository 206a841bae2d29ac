use metrics::counter;
use thiserror::Error;
use tracing::error;

use crate::{
    application::remote::{RemoteError, RemoteOperation},
    config::LoadError,
    infra::error::InfraError,
    presentation::views::TemplateRenderError,
};

pub const REMOTE_FAILURE_COUNTER: &str = "postboard_remote_request_failed_total";

/// The only failure the board produces while running. It is reported and
/// dropped; the action that caused it is abandoned without touching state.
#[derive(Debug, Error)]
#[error("{operation} request failed: {cause}")]
pub struct RemoteRequestFailed {
    pub operation: RemoteOperation,
    #[source]
    pub cause: RemoteError,
}

impl RemoteRequestFailed {
    pub fn new(operation: RemoteOperation, cause: RemoteError) -> Self {
        Self { operation, cause }
    }

    /// Emit the failure on the diagnostic channel.
    pub fn report(&self) {
        error!(
            target = "application::error::RemoteRequestFailed",
            operation = self.operation.as_str(),
            error = %self.cause,
            "remote request failed"
        );
        counter!(REMOTE_FAILURE_COUNTER, "operation" => self.operation.as_str()).increment(1);
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error(transparent)]
    Config(#[from] LoadError),
    #[error(transparent)]
    Render(#[from] TemplateRenderError),
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl AppError {
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }

    /// Code location that raised the error, when it carries one.
    pub fn origin(&self) -> Option<&'static str> {
        match self {
            AppError::Render(err) => Some(err.origin()),
            _ => None,
        }
    }
}
