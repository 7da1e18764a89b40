use crate::actors::messages::AppError;
use crate::dashboard::{AnalysisReport, CommodityProbability, ExplorationInput, FeatureInputs};
use crate::qa::Answer;
use async_trait::async_trait;

/// Defines the public interface for the Q&A actor.
///
/// Answering never fails; errors only come from the actor plumbing.
#[async_trait]
pub trait QaActor: Send + Sync + 'static {
    async fn ask(&self, query: String) -> Result<Answer, AppError>;
}

/// Defines the public interface for the mock model actor.
#[async_trait]
pub trait PredictorActor: Send + Sync + 'static {
    async fn predict(&self, inputs: FeatureInputs) -> Result<Vec<CommodityProbability>, AppError>;

    async fn analyze(&self, input: ExplorationInput) -> Result<AnalysisReport, AppError>;
}
