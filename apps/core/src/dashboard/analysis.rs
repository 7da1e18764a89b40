//! Mock exploration analysis for a described prospect.
//!
//! Produces the fixed refined-prediction report of the "Agentic System" view.
//! Only the input echo and the deposit type depend on the request.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

use crate::error::AppError;

const DEFAULT_DEPOSIT_TYPE: &str = "Porphyry";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct Location {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl FromStr for Location {
    type Err = AppError;

    /// Parses the form's `"lat, lon"` text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| AppError::Validation(format!("Expected 'lat, lon', got '{}'", s)))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<f64>()
                .map_err(|e| AppError::Validation(format!("Invalid coordinate '{}': {}", v.trim(), e)))
        };
        Ok(Location {
            latitude: parse(lat)?,
            longitude: parse(lon)?,
        })
    }
}

/// Geological description of a prospect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ExplorationInput {
    pub host_rocks: Vec<String>,
    pub geological_features: Vec<String>,
    pub deposit_type: String,
    pub mineralogy: Vec<String>,
    #[validate(nested)]
    pub location: Location,
    pub age: String,
    /// Grade in percent
    #[validate(range(min = 0.0))]
    pub grade: f64,
    /// Tonnage in Mt
    #[validate(range(min = 0.0))]
    pub tonnage: f64,
}

impl Default for ExplorationInput {
    fn default() -> Self {
        Self {
            host_rocks: vec!["Granodiorite intruded by quartz monzonite porphyry".to_string()],
            geological_features: vec![
                "Stockwork quartz veining with potassic alteration grading outward to phyllic and propylitic alteration".to_string(),
            ],
            deposit_type: DEFAULT_DEPOSIT_TYPE.to_string(),
            mineralogy: ["Chalcopyrite", "bornite", "molybdenite", "pyrite"]
                .iter()
                .map(|m| m.to_string())
                .collect(),
            location: Location {
                latitude: 34.5,
                longitude: -106.3,
            },
            age: "Late Cretaceous".to_string(),
            grade: 0.5,
            tonnage: 300.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositTypeProbability {
    #[serde(rename = "type")]
    pub deposit_type: String,
    pub probability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MineralProbability {
    pub mineral: String,
    pub probability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommodityLikelihood {
    pub commodity: String,
    pub probability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeEstimate {
    pub low: f64,
    pub average: f64,
    pub high: f64,
    pub unit: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeEstimates {
    pub copper: GradeEstimate,
    pub molybdenum: GradeEstimate,
    pub gold: GradeEstimate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TonnageRange {
    pub low: f64,
    pub high: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceEstimate {
    pub size_category: String,
    pub estimated_tonnage: f64,
    pub unit: String,
    pub range: TonnageRange,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceFactors {
    pub data_completeness: f64,
    pub deposit_type_confidence: f64,
    pub mineralization_evidence: f64,
    pub knowledge_support: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceAssessment {
    pub overall_confidence: f64,
    pub factors: ConfidenceFactors,
    pub confidence_level: String,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorationStrategy {
    pub recommended_actions: Vec<String>,
    pub risk_factors: Vec<String>,
    pub timeline: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefinedPredictions {
    pub deposit_type: String,
    pub deposit_type_confidence: f64,
    pub alternative_deposit_types: Vec<DepositTypeProbability>,
    pub mineral_types: Vec<MineralProbability>,
    pub commodities: Vec<CommodityLikelihood>,
    pub grade_estimates: GradeEstimates,
    pub resource_estimates: ResourceEstimate,
    pub confidence_assessment: ConfidenceAssessment,
    pub exploration_strategy: ExplorationStrategy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalogDeposit {
    pub name: String,
    pub location: String,
    pub similarity_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedKnowledge {
    pub deposit_type: String,
    pub confidence: f64,
    pub explanation: String,
    pub relevant_deposits: Vec<AnalogDeposit>,
}

/// Complete analysis report for one prospect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub input_data: ExplorationInput,
    pub refined_predictions: RefinedPredictions,
    pub decision_explanation: String,
    pub retrieved_knowledge: RetrievedKnowledge,
}

fn grade(low: f64, average: f64, high: f64, unit: &str, confidence: f64) -> GradeEstimate {
    GradeEstimate {
        low,
        average,
        high,
        unit: unit.to_string(),
        confidence,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Run the mock analysis.
///
/// A blank deposit type is reported as `Porphyry`.
pub fn simulate_analysis(input: ExplorationInput) -> Result<AnalysisReport, AppError> {
    input.validate()?;

    let deposit_type = if input.deposit_type.trim().is_empty() {
        DEFAULT_DEPOSIT_TYPE.to_string()
    } else {
        input.deposit_type.clone()
    };

    let refined_predictions = RefinedPredictions {
        deposit_type,
        deposit_type_confidence: 0.85,
        alternative_deposit_types: vec![
            DepositTypeProbability {
                deposit_type: "Skarn".to_string(),
                probability: 0.45,
            },
            DepositTypeProbability {
                deposit_type: "IOCG".to_string(),
                probability: 0.30,
            },
        ],
        mineral_types: [
            ("Chalcopyrite", 0.92),
            ("Bornite", 0.78),
            ("Molybdenite", 0.86),
            ("Pyrite", 0.95),
        ]
        .iter()
        .map(|(mineral, probability)| MineralProbability {
            mineral: mineral.to_string(),
            probability: *probability,
        })
        .collect(),
        commodities: [("Copper", 0.94), ("Molybdenum", 0.88), ("Gold", 0.76)]
            .iter()
            .map(|(commodity, probability)| CommodityLikelihood {
                commodity: commodity.to_string(),
                probability: *probability,
            })
            .collect(),
        grade_estimates: GradeEstimates {
            copper: grade(0.3, 0.5, 0.8, "%", 0.75),
            molybdenum: grade(0.01, 0.02, 0.05, "%", 0.7),
            gold: grade(0.2, 0.4, 0.8, "g/t", 0.65),
        },
        resource_estimates: ResourceEstimate {
            size_category: "large".to_string(),
            estimated_tonnage: 300.0,
            unit: "Mt".to_string(),
            range: TonnageRange {
                low: 150.0,
                high: 450.0,
            },
            confidence: 0.7,
        },
        confidence_assessment: ConfidenceAssessment {
            overall_confidence: 0.72,
            factors: ConfidenceFactors {
                data_completeness: 0.8,
                deposit_type_confidence: 0.85,
                mineralization_evidence: 0.75,
                knowledge_support: 0.65,
            },
            confidence_level: "High".to_string(),
            explanation: "The input data is reasonably complete, supporting reliable analysis. There is good evidence supporting the deposit type classification.".to_string(),
        },
        exploration_strategy: ExplorationStrategy {
            recommended_actions: strings(&["Drill at 100-200m spacing", "Conduct geophysical surveys"]),
            risk_factors: strings(&["Geological complexity", "Economic uncertainty"]),
            timeline: "2-3 years".to_string(),
        },
    };

    let retrieved_knowledge = RetrievedKnowledge {
        deposit_type: DEFAULT_DEPOSIT_TYPE.to_string(),
        confidence: 0.85,
        explanation: "Based on the geological features and mineralogy, this deposit shows strong characteristics of a porphyry copper deposit.".to_string(),
        relevant_deposits: [
            ("Bingham Canyon", "Utah, USA", 0.85),
            ("El Teniente", "Chile", 0.82),
            ("Grasberg", "Indonesia", 0.78),
        ]
        .iter()
        .map(|(name, location, score)| AnalogDeposit {
            name: name.to_string(),
            location: location.to_string(),
            similarity_score: *score,
        })
        .collect(),
    };

    Ok(AnalysisReport {
        input_data: input,
        refined_predictions,
        decision_explanation: "The geological context suggests a porphyry deposit type with high confidence, based on the host rocks matching typical host rocks for porphyry. Primary economic commodities would be copper, molybdenum, gold.".to_string(),
        retrieved_knowledge,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_parse() {
        let loc: Location = "34.5, -106.3".parse().unwrap();
        assert_eq!(loc.latitude, 34.5);
        assert_eq!(loc.longitude, -106.3);
        assert!("34.5".parse::<Location>().is_err());
        assert!("north, west".parse::<Location>().is_err());
    }

    #[test]
    fn test_blank_deposit_type_defaults() {
        let input = ExplorationInput {
            deposit_type: "  ".to_string(),
            ..Default::default()
        };
        let report = simulate_analysis(input).unwrap();
        assert_eq!(report.refined_predictions.deposit_type, "Porphyry");
    }

    #[test]
    fn test_out_of_range_latitude_rejected() {
        let input = ExplorationInput {
            location: Location {
                latitude: 120.0,
                longitude: 0.0,
            },
            ..Default::default()
        };
        assert!(matches!(simulate_analysis(input), Err(AppError::Validation(_))));
    }
}
