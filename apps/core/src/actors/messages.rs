use serde::Serialize;
use tokio::sync::oneshot;

use crate::dashboard::{AnalysisReport, CommodityProbability, ExplorationInput, FeatureInputs};
use crate::models::QueryRecord;
use crate::qa::Answer;

/// Failures in actor messaging, independent of what the actor computes.
#[derive(Debug, thiserror::Error, Serialize, Clone)]
pub enum ActorError {
    /// The actor's mailbox or reply channel is closed.
    #[error("Actor channel closed: {0}")]
    Channel(String),
    /// The actor hit a bug or an unavailable backend.
    #[error("Actor failure: {0}")]
    Internal(String),
    /// No reply arrived within the request timeout.
    #[error("Actor timed out: {0}")]
    Timeout(String),
}

impl From<tokio::time::error::Elapsed> for ActorError {
    fn from(err: tokio::time::error::Elapsed) -> Self {
        ActorError::Timeout(err.to_string())
    }
}

impl From<oneshot::error::RecvError> for ActorError {
    fn from(err: oneshot::error::RecvError) -> Self {
        ActorError::Channel(format!("Reply dropped: {}", err))
    }
}

// Handles return AppError; re-exported for actor implementors
pub use crate::error::AppError;

/// Messages that can be sent to the `QaActor`.
#[derive(Debug)]
pub enum QaMessage {
    /// Answer a query after the simulated latency.
    Ask {
        query: String,
        responder: oneshot::Sender<Answer>,
    },
}

/// Messages that can be sent to the `PredictorActor`.
#[derive(Debug)]
pub enum PredictorMessage {
    /// Run the mock mineral predictor.
    Predict {
        inputs: FeatureInputs,
        responder: oneshot::Sender<Result<Vec<CommodityProbability>, AppError>>,
    },
    /// Run the mock prospect analysis.
    Analyze {
        input: ExplorationInput,
        responder: oneshot::Sender<Result<AnalysisReport, AppError>>,
    },
}

/// Messages that can be sent to the `SupervisorActor`.
#[derive(Debug)]
#[allow(clippy::large_enum_variant)]
pub enum SupervisorMessage {
    /// A question from the Q&A form.
    SubmitQuery {
        query: String,
        responder: oneshot::Sender<Result<QueryRecord, AppError>>,
    },
    PredictMineral {
        inputs: FeatureInputs,
        responder: oneshot::Sender<Result<Vec<CommodityProbability>, AppError>>,
    },
    RunAnalysis {
        input: ExplorationInput,
        responder: oneshot::Sender<Result<AnalysisReport, AppError>>,
    },
    /// Stop the supervisor loop.
    Shutdown,
}
