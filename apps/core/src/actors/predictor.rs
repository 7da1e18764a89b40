use crate::actors::messages::{ActorError, AppError, PredictorMessage};
use crate::actors::traits::PredictorActor;
use crate::dashboard::{self, AnalysisReport, CommodityProbability, ExplorationInput, FeatureInputs};
use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::time::{sleep, timeout};
use tracing::{info, instrument, warn};

/// A handle to the `PredictorActor`, which serves the mock model results.
#[derive(Clone)]
pub struct PredictorActorHandle {
    sender: mpsc::Sender<PredictorMessage>,
    request_timeout: Duration,
}

impl PredictorActorHandle {
    pub fn new(delay: Duration, request_timeout: Duration) -> Self {
        let (sender, receiver) = mpsc::channel(32);
        let actor = PredictorActorRunner { receiver, delay };
        tokio::spawn(async move { actor.run().await });
        Self {
            sender,
            request_timeout,
        }
    }

    async fn call<T>(
        &self,
        msg: PredictorMessage,
        recv: oneshot::Receiver<Result<T, AppError>>,
    ) -> Result<T, AppError> {
        self.sender
            .send(msg)
            .await
            .map_err(|e| ActorError::Channel(e.to_string()))?;
        timeout(self.request_timeout, recv)
            .await
            .map_err(ActorError::from)?
            .map_err(ActorError::from)?
    }
}

#[async_trait]
impl PredictorActor for PredictorActorHandle {
    #[instrument(skip(self, inputs))]
    async fn predict(&self, inputs: FeatureInputs) -> Result<Vec<CommodityProbability>, AppError> {
        let (send, recv) = oneshot::channel();
        self.call(
            PredictorMessage::Predict {
                inputs,
                responder: send,
            },
            recv,
        )
        .await
    }

    #[instrument(skip(self, input), fields(deposit_type = %input.deposit_type))]
    async fn analyze(&self, input: ExplorationInput) -> Result<AnalysisReport, AppError> {
        let (send, recv) = oneshot::channel();
        self.call(
            PredictorMessage::Analyze {
                input,
                responder: send,
            },
            recv,
        )
        .await
    }
}

// --- Actor Runner ---
struct PredictorActorRunner {
    receiver: mpsc::Receiver<PredictorMessage>,
    delay: Duration,
}

impl PredictorActorRunner {
    async fn run(mut self) {
        info!("PredictorActor started");
        while let Some(msg) = self.receiver.recv().await {
            let delay = self.delay;
            tokio::spawn(async move {
                if !delay.is_zero() {
                    sleep(delay).await;
                }
                match msg {
                    PredictorMessage::Predict { inputs, responder } => {
                        let result = dashboard::predict(&inputs);
                        if let Err(e) = &result {
                            warn!("Prediction rejected: {}", e);
                        }
                        let _ = responder.send(result);
                    }
                    PredictorMessage::Analyze { input, responder } => {
                        let result = dashboard::simulate_analysis(input);
                        if let Err(e) = &result {
                            warn!("Analysis rejected: {}", e);
                        }
                        let _ = responder.send(result);
                    }
                }
            });
        }
        info!("PredictorActor stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::Commodity;

    #[tokio::test]
    async fn test_predict_through_actor() {
        let handle = PredictorActorHandle::new(Duration::ZERO, Duration::from_secs(5));
        let ranking = handle.predict(FeatureInputs::default()).await.unwrap();
        assert_eq!(ranking[1].commodity, Commodity::Copper);
    }

    #[tokio::test]
    async fn test_invalid_inputs_surface_as_validation() {
        let handle = PredictorActorHandle::new(Duration::ZERO, Duration::from_secs(5));
        let inputs = FeatureInputs {
            age: String::new(),
            ..Default::default()
        };
        let err = handle.predict(inputs).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_analyze_echoes_input() {
        let handle = PredictorActorHandle::new(Duration::ZERO, Duration::from_secs(5));
        let input = ExplorationInput {
            deposit_type: "Skarn".to_string(),
            ..Default::default()
        };
        let report = handle.analyze(input.clone()).await.unwrap();
        assert_eq!(report.input_data, input);
        assert_eq!(report.refined_predictions.deposit_type, "Skarn");
    }
}
