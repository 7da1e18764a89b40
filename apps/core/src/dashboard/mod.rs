//! # Dashboard
//!
//! Data behind the exploration dashboard views: map sites, analytics charts,
//! the mineral prediction form and the prospect analysis.

pub mod analysis;
pub mod fixtures;
pub mod prediction;

pub use analysis::{simulate_analysis, AnalysisReport, ExplorationInput, Location};
pub use fixtures::{
    commodity_distribution, feature_importance, filter_sites, geological_sites, heatmap, Commodity,
    CommodityFilter, CommodityShare, FeatureImportance, GeologicalSite, HeatmapCell,
};
pub use prediction::{predict, CommodityProbability, FeatureInputs};
