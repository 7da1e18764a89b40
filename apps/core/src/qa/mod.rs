//! # Geochemical Q&A
//!
//! Canned answers about geochemical laboratory methods.
//!
//! ## Components
//! - `knowledge`: methods dictionary, embedded and parsed once
//! - `rules`: ordered trigger/reply table and the canned texts
//! - `responder`: first-match evaluation with default fallback

pub mod knowledge;
pub mod responder;
pub mod rules;

pub use knowledge::{ElementLimits, ElementReport, KnowledgeBase, Method, Term};
pub use responder::{respond, Answer, GeochemResponder};
pub use rules::{Topic, DEFAULT_RESPONSE};
