//! Test Module
//!
//! Test suite for the EarthScience.AI core.
//!
//! ## Test Categories
//! - `qa_tests`: Keyword responder answers, rule precedence, totality
//! - `dashboard_tests`: Map fixtures, commodity filter, prediction and analysis
//! - `actor_tests`: Supervisor orchestration with real and mock actors

pub mod qa_tests;
