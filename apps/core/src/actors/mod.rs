//! Tokio actors behind the dashboard.
//!
//! Each actor is a runner task owning an `mpsc` mailbox plus a cloneable handle
//! that sends messages and awaits a `oneshot` reply under a timeout.

pub mod messages;
pub mod predictor;
pub mod qa;
pub mod supervisor;
pub mod traits;
