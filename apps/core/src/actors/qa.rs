use crate::actors::messages::{ActorError, AppError, QaMessage};
use crate::actors::traits::QaActor;
use crate::qa::{Answer, GeochemResponder};
use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::time::{sleep, timeout};
use tracing::{debug, info, instrument};

/// A handle to the `QaActor`.
///
/// Cloneable; every clone talks to the same running actor.
#[derive(Clone)]
pub struct QaActorHandle {
    sender: mpsc::Sender<QaMessage>,
    request_timeout: Duration,
}

impl QaActorHandle {
    /// Spawns the actor on the current Tokio runtime.
    ///
    /// # Arguments
    ///
    /// * `delay` - Simulated latency applied to every answer.
    /// * `request_timeout` - How long `ask` waits for the reply.
    pub fn new(delay: Duration, request_timeout: Duration) -> Self {
        Self::with_responder(GeochemResponder::new(), delay, request_timeout)
    }

    pub fn with_responder(responder: GeochemResponder, delay: Duration, request_timeout: Duration) -> Self {
        let (sender, receiver) = mpsc::channel(32);
        let actor = QaActorRunner {
            receiver,
            responder,
            delay,
        };
        tokio::spawn(async move { actor.run().await });
        Self {
            sender,
            request_timeout,
        }
    }
}

#[async_trait]
impl QaActor for QaActorHandle {
    #[instrument(skip(self))]
    async fn ask(&self, query: String) -> Result<Answer, AppError> {
        let (send, recv) = oneshot::channel();
        self.sender
            .send(QaMessage::Ask {
                query,
                responder: send,
            })
            .await
            .map_err(|e| ActorError::Channel(e.to_string()))?;
        let answer = timeout(self.request_timeout, recv)
            .await
            .map_err(ActorError::from)?
            .map_err(ActorError::from)?;
        Ok(answer)
    }
}

// --- Actor Runner ---
struct QaActorRunner {
    receiver: mpsc::Receiver<QaMessage>,
    responder: GeochemResponder,
    delay: Duration,
}

impl QaActorRunner {
    async fn run(mut self) {
        info!("QaActor started");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                QaMessage::Ask { query, responder } => {
                    // Each submission gets its own timer, like the dashboard form.
                    let qa = self.responder;
                    let delay = self.delay;
                    tokio::spawn(async move {
                        if !delay.is_zero() {
                            sleep(delay).await;
                        }
                        let answer = qa.answer(&query);
                        debug!(topic = %answer.topic, "Answer ready");
                        let _ = responder.send(answer);
                    });
                }
            }
        }
        info!("QaActor stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qa::{Topic, DEFAULT_RESPONSE};

    #[tokio::test]
    async fn test_ask_returns_answer() {
        let handle = QaActorHandle::new(Duration::ZERO, Duration::from_secs(5));
        let answer = handle.ask("Mercury".to_string()).await.unwrap();
        assert_eq!(answer.topic, Topic::Mercury);
    }

    #[tokio::test]
    async fn test_ask_waits_for_delay() {
        let delay = Duration::from_millis(50);
        let handle = QaActorHandle::new(delay, Duration::from_secs(5));
        let start = tokio::time::Instant::now();
        let answer = handle.ask("banana".to_string()).await.unwrap();
        assert!(start.elapsed() >= delay);
        assert_eq!(answer.text, DEFAULT_RESPONSE);
    }

    #[tokio::test]
    async fn test_timeout_shorter_than_delay() {
        let handle = QaActorHandle::new(Duration::from_millis(200), Duration::from_millis(10));
        let err = handle.ask("lod".to_string()).await.unwrap_err();
        assert!(matches!(err, AppError::Actor(ActorError::Timeout(_))));
    }
}
