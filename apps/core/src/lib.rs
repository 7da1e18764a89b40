//! EarthScience.AI core: geochemical Q&A and the exploration dashboard data.

pub mod actors;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod logging;
pub mod models;
pub mod qa;

pub use error::AppError;

#[cfg(test)]
mod tests;
