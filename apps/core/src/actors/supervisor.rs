use crate::actors::messages::{ActorError, AppError, SupervisorMessage};
use crate::actors::predictor::PredictorActorHandle;
use crate::actors::qa::QaActorHandle;
use crate::actors::traits::{PredictorActor, QaActor};
use crate::config::AppConfig;
use crate::dashboard::{AnalysisReport, CommodityProbability, ExplorationInput, FeatureInputs};
use crate::models::{QueryRecord, QuerySubmission};
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::time::timeout;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

/// A handle to the `SupervisorActor`.
///
/// This is the entry point for the dashboard front end. It validates form
/// submissions and delegates to the `QaActor` and the `PredictorActor`.
#[derive(Clone)]
pub struct SupervisorHandle {
    sender: mpsc::Sender<SupervisorMessage>,
    request_timeout: Duration,
}

impl SupervisorHandle {
    /// Spawns the supervisor and its child actors from the given configuration.
    pub fn new(config: &AppConfig) -> Self {
        // Children get the caller timeout plus their own latency so the
        // supervisor-side timeout is the one that fires first.
        let qa = QaActorHandle::new(config.qa_delay, config.request_timeout + config.qa_delay);
        let predictor = PredictorActorHandle::new(
            config.prediction_delay,
            config.request_timeout + config.prediction_delay,
        );
        Self::new_with_actors(config, Arc::new(qa), Arc::new(predictor))
    }

    /// Spawns a supervisor over arbitrary actor implementations.
    pub fn new_with_actors<Q, P>(config: &AppConfig, qa_actor: Arc<Q>, predictor_actor: Arc<P>) -> Self
    where
        Q: QaActor,
        P: PredictorActor,
    {
        let (sender, receiver) = mpsc::channel(32);
        let actor = SupervisorRunner {
            receiver,
            qa_actor,
            predictor_actor,
            max_query_len: config.max_query_len,
        };
        tokio::spawn(async move { actor.run().await });
        Self {
            sender,
            request_timeout: config.request_timeout,
        }
    }

    /// Submits a question from the Q&A form.
    ///
    /// Blank or oversized queries are rejected with `AppError::Validation`
    /// before reaching the responder.
    #[instrument(skip(self))]
    pub async fn submit_query(&self, query: String) -> Result<QueryRecord, AppError> {
        let (send, recv) = oneshot::channel();
        self.dispatch(
            SupervisorMessage::SubmitQuery {
                query,
                responder: send,
            },
            recv,
        )
        .await
    }

    #[instrument(skip(self, inputs))]
    pub async fn predict_mineral(&self, inputs: FeatureInputs) -> Result<Vec<CommodityProbability>, AppError> {
        let (send, recv) = oneshot::channel();
        self.dispatch(
            SupervisorMessage::PredictMineral {
                inputs,
                responder: send,
            },
            recv,
        )
        .await
    }

    #[instrument(skip(self, input))]
    pub async fn run_analysis(&self, input: ExplorationInput) -> Result<AnalysisReport, AppError> {
        let (send, recv) = oneshot::channel();
        self.dispatch(
            SupervisorMessage::RunAnalysis {
                input,
                responder: send,
            },
            recv,
        )
        .await
    }

    /// Stops the supervisor loop. Requests already in flight still complete.
    pub async fn shutdown(&self) -> Result<(), AppError> {
        self.sender
            .send(SupervisorMessage::Shutdown)
            .await
            .map_err(|e| ActorError::Channel(e.to_string()))?;
        Ok(())
    }

    async fn dispatch<T>(
        &self,
        msg: SupervisorMessage,
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

// --- Actor Runner ---
struct SupervisorRunner<Q, P>
where
    Q: QaActor,
    P: PredictorActor,
{
    receiver: mpsc::Receiver<SupervisorMessage>,
    qa_actor: Arc<Q>,
    predictor_actor: Arc<P>,
    max_query_len: usize,
}

impl<Q, P> SupervisorRunner<Q, P>
where
    Q: QaActor,
    P: PredictorActor,
{
    async fn run(mut self) {
        info!("Supervisor started");
        while let Some(msg) = self.receiver.recv().await {
            if matches!(msg, SupervisorMessage::Shutdown) {
                info!("Supervisor shutdown requested");
                break;
            }
            self.handle_message(msg);
        }
        info!("Supervisor stopped");
    }

    /// Spawns one task per request so a slow child never blocks the loop.
    fn handle_message(&self, msg: SupervisorMessage) {
        match msg {
            SupervisorMessage::SubmitQuery { query, responder } => {
                let submission = QuerySubmission::new(query);
                if let Err(e) = submission.check(self.max_query_len) {
                    warn!("Rejected query submission: {}", e);
                    let _ = responder.send(Err(e));
                    return;
                }
                let qa = Arc::clone(&self.qa_actor);
                tokio::spawn(async move {
                    let result = answer_submission(qa.as_ref(), submission).await;
                    if let Err(e) = &result {
                        error!("Error answering query: {:?}", e);
                    }
                    let _ = responder.send(result);
                });
            }
            SupervisorMessage::PredictMineral { inputs, responder } => {
                let predictor = Arc::clone(&self.predictor_actor);
                tokio::spawn(async move {
                    let _ = responder.send(predictor.predict(inputs).await);
                });
            }
            SupervisorMessage::RunAnalysis { input, responder } => {
                let predictor = Arc::clone(&self.predictor_actor);
                tokio::spawn(async move {
                    let _ = responder.send(predictor.analyze(input).await);
                });
            }
            SupervisorMessage::Shutdown => {}
        }
    }
}

async fn answer_submission<Q: QaActor>(qa: &Q, submission: QuerySubmission) -> Result<QueryRecord, AppError> {
    let submitted_at = Utc::now();
    let answer = qa.ask(submission.query.clone()).await?;
    info!(topic = %answer.topic, "Query answered");
    Ok(QueryRecord {
        id: Uuid::new_v4(),
        query: submission.query,
        answer,
        submitted_at,
        answered_at: Utc::now(),
    })
}
