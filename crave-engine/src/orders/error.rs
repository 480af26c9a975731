//! Order lifecycle errors

use shared::error::{AppError, ErrorCode};
use shared::order::LifecyclePhase;
use thiserror::Error;

/// Errors surfaced to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// Recoverable, user-facing: nothing to order
    #[error("Cannot place an order with an empty cart")]
    EmptyCart,

    /// Cart edits and placement are only allowed while idle
    #[error("Cannot {action} while order is {phase}")]
    InvalidPhase {
        action: &'static str,
        phase: LifecyclePhase,
    },
}

impl OrderError {
    pub fn code(&self) -> ErrorCode {
        match self {
            OrderError::EmptyCart => ErrorCode::EmptyCart,
            OrderError::InvalidPhase { .. } => ErrorCode::InvalidOrderPhase,
        }
    }
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        let app = AppError::with_message(err.code(), err.to_string());
        match err {
            OrderError::EmptyCart => app,
            OrderError::InvalidPhase { action, phase } => app
                .with_detail("action", action)
                .with_detail("phase", phase.to_string()),
        }
    }
}
