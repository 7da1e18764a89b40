//! Mock mineral-occurrence predictor.
//!
//! Stands in for the gradient-boosted model behind the "Mineral Prediction" tab.
//! Inputs are validated but do not influence the output ranking.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::fixtures::Commodity;
use crate::error::AppError;

/// Model features as entered in the prediction form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct FeatureInputs {
    #[serde(rename = "Age")]
    #[validate(length(min = 1))]
    pub age: String,
    #[serde(rename = "Lithologic_litho")]
    #[validate(length(min = 1))]
    pub lithology: String,
    #[serde(rename = "Stratigraphy")]
    #[validate(length(min = 1))]
    pub stratigraphy: String,
    #[serde(rename = "SuperGroup_geo")]
    pub super_group: String,
    #[serde(rename = "GroupName_geo")]
    pub group_name: String,
    #[serde(rename = "Avg_grav_0.005")]
    pub avg_grav_0_005: f64,
    #[serde(rename = "Avg_grav_0.075")]
    pub avg_grav_0_075: f64,
    #[serde(rename = "Avg_grav_2.2")]
    pub avg_grav_2_2: f64,
    #[serde(rename = "Avg_mag_0.005")]
    pub avg_mag_0_005: f64,
    #[serde(rename = "Avg_mag_0.075")]
    pub avg_mag_0_075: f64,
    #[serde(rename = "Avg_mag_2.2")]
    pub avg_mag_2_2: f64,
    /// Distance to the nearest mapped fault, in km
    #[validate(range(min = 0.0))]
    pub nearest_distance_fault: f64,
}

impl Default for FeatureInputs {
    fn default() -> Self {
        Self {
            age: "Cenozoic".to_string(),
            lithology: "Granite".to_string(),
            stratigraphy: "Igneous".to_string(),
            super_group: "Magmatic".to_string(),
            group_name: "Intrusive".to_string(),
            avg_grav_0_005: 5.2,
            avg_grav_0_075: 4.8,
            avg_grav_2_2: 3.5,
            avg_mag_0_005: 12.3,
            avg_mag_0_075: 10.5,
            avg_mag_2_2: 8.2,
            nearest_distance_fault: 0.75,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CommodityProbability {
    pub commodity: Commodity,
    pub probability: f64,
}

/// Ranked commodity probabilities for the given features.
pub fn predict(inputs: &FeatureInputs) -> Result<Vec<CommodityProbability>, AppError> {
    inputs.validate()?;

    Ok(vec![
        CommodityProbability {
            commodity: Commodity::Gold,
            probability: 0.65,
        },
        CommodityProbability {
            commodity: Commodity::Copper,
            probability: 0.25,
        },
        CommodityProbability {
            commodity: Commodity::Silver,
            probability: 0.10,
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_inputs_predict() {
        let ranking = predict(&FeatureInputs::default()).unwrap();
        assert_eq!(ranking.len(), 3);
        assert_eq!(ranking[0].commodity, Commodity::Gold);
        let total: f64 = ranking.iter().map(|p| p.probability).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_fault_distance_rejected() {
        let inputs = FeatureInputs {
            nearest_distance_fault: -1.0,
            ..Default::default()
        };
        assert!(matches!(predict(&inputs), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_form_field_names() {
        let json = serde_json::to_value(FeatureInputs::default()).unwrap();
        assert_eq!(json["Lithologic_litho"], "Granite");
        assert_eq!(json["Avg_mag_0.005"], 12.3);
        assert_eq!(json["nearest_distance_fault"], 0.75);
    }
}
