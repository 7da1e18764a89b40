//! Static mock data shown by the exploration dashboard.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Commodities tracked by the dashboard, in legend order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Commodity {
    Gold,
    Copper,
    Silver,
    Iron,
    Lead,
    Zinc,
    Nickel,
    Uranium,
    Manganese,
    Chromium,
}

impl Commodity {
    pub const ALL: [Commodity; 10] = [
        Commodity::Gold,
        Commodity::Copper,
        Commodity::Silver,
        Commodity::Iron,
        Commodity::Lead,
        Commodity::Zinc,
        Commodity::Nickel,
        Commodity::Uranium,
        Commodity::Manganese,
        Commodity::Chromium,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Commodity::Gold => "Gold",
            Commodity::Copper => "Copper",
            Commodity::Silver => "Silver",
            Commodity::Iron => "Iron",
            Commodity::Lead => "Lead",
            Commodity::Zinc => "Zinc",
            Commodity::Nickel => "Nickel",
            Commodity::Uranium => "Uranium",
            Commodity::Manganese => "Manganese",
            Commodity::Chromium => "Chromium",
        }
    }

    /// Map/legend color as a hex string.
    pub fn color(&self) -> &'static str {
        match self {
            Commodity::Gold => "#FFD700",
            Commodity::Copper => "#B87333",
            Commodity::Silver => "#C0C0C0",
            Commodity::Iron => "#A52A2A",
            Commodity::Lead => "#778899",
            Commodity::Zinc => "#D3D3D3",
            Commodity::Nickel => "#8FBC8F",
            Commodity::Uranium => "#32CD32",
            Commodity::Manganese => "#800080",
            Commodity::Chromium => "#4682B4",
        }
    }
}

impl fmt::Display for Commodity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Commodity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Commodity::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AppError::Validation(format!("Unknown commodity: {}", wanted)))
    }
}

/// Map filter: everything, or a single commodity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommodityFilter {
    #[default]
    All,
    Only(Commodity),
}

impl CommodityFilter {
    pub fn accepts(&self, commodity: Commodity) -> bool {
        match self {
            CommodityFilter::All => true,
            CommodityFilter::Only(wanted) => *wanted == commodity,
        }
    }
}

impl FromStr for CommodityFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CommodityFilter::All)
        } else {
            s.parse().map(CommodityFilter::Only)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeologicalSite {
    pub id: u32,
    pub commodity: Commodity,
    pub lat: f64,
    pub lng: f64,
    /// Mock occurrence probability (0.0 - 1.0)
    pub probability: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub x: u8,
    pub y: u8,
    pub value: f64,
    pub commodity: Commodity,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureImportance {
    pub feature: &'static str,
    pub importance: f64,
}

/// Share of known occurrences, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CommodityShare {
    pub name: Commodity,
    pub value: u32,
}

const fn site(id: u32, commodity: Commodity, lat: f64, lng: f64, probability: f64) -> GeologicalSite {
    GeologicalSite {
        id,
        commodity,
        lat,
        lng,
        probability,
    }
}

const fn cell(x: u8, y: u8, value: f64, commodity: Commodity) -> HeatmapCell {
    HeatmapCell {
        x,
        y,
        value,
        commodity,
    }
}

static GEOLOGICAL_SITES: [GeologicalSite; 10] = [
    site(1, Commodity::Gold, 34.5, -117.2, 0.85),
    site(2, Commodity::Copper, 34.7, -117.5, 0.92),
    site(3, Commodity::Silver, 34.3, -117.1, 0.67),
    site(4, Commodity::Iron, 34.6, -117.3, 0.78),
    site(5, Commodity::Gold, 34.8, -117.4, 0.71),
    site(6, Commodity::Copper, 34.4, -117.0, 0.88),
    site(7, Commodity::Lead, 34.9, -117.6, 0.63),
    site(8, Commodity::Zinc, 34.2, -117.8, 0.59),
    site(9, Commodity::Gold, 34.1, -117.7, 0.93),
    site(10, Commodity::Iron, 34.0, -117.9, 0.81),
];

static HEATMAP: [HeatmapCell; 9] = [
    cell(0, 0, 0.2, Commodity::Gold),
    cell(0, 1, 0.5, Commodity::Gold),
    cell(0, 2, 0.8, Commodity::Gold),
    cell(1, 0, 0.3, Commodity::Copper),
    cell(1, 1, 0.9, Commodity::Copper),
    cell(1, 2, 0.6, Commodity::Copper),
    cell(2, 0, 0.7, Commodity::Silver),
    cell(2, 1, 0.4, Commodity::Silver),
    cell(2, 2, 0.1, Commodity::Silver),
];

static FEATURE_IMPORTANCE: [FeatureImportance; 11] = [
    FeatureImportance { feature: "nearest_distance_fault", importance: 0.24 },
    FeatureImportance { feature: "Avg_mag_0.005", importance: 0.18 },
    FeatureImportance { feature: "Lithologic_litho", importance: 0.15 },
    FeatureImportance { feature: "Avg_grav_0.005", importance: 0.12 },
    FeatureImportance { feature: "Age", importance: 0.09 },
    FeatureImportance { feature: "Stratigraphy", importance: 0.08 },
    FeatureImportance { feature: "Avg_mag_2.2", importance: 0.06 },
    FeatureImportance { feature: "SuperGroup_geo", importance: 0.04 },
    FeatureImportance { feature: "GroupName_geo", importance: 0.02 },
    FeatureImportance { feature: "Avg_grav_2.2", importance: 0.01 },
    FeatureImportance { feature: "Avg_grav_0.075", importance: 0.01 },
];

static COMMODITY_DISTRIBUTION: [CommodityShare; 10] = [
    CommodityShare { name: Commodity::Gold, value: 35 },
    CommodityShare { name: Commodity::Copper, value: 25 },
    CommodityShare { name: Commodity::Silver, value: 15 },
    CommodityShare { name: Commodity::Iron, value: 10 },
    CommodityShare { name: Commodity::Lead, value: 5 },
    CommodityShare { name: Commodity::Zinc, value: 3 },
    CommodityShare { name: Commodity::Nickel, value: 3 },
    CommodityShare { name: Commodity::Uranium, value: 2 },
    CommodityShare { name: Commodity::Manganese, value: 1 },
    CommodityShare { name: Commodity::Chromium, value: 1 },
];

pub fn geological_sites() -> &'static [GeologicalSite] {
    &GEOLOGICAL_SITES
}

/// Sites passing the filter, in id order.
pub fn filter_sites(filter: CommodityFilter) -> Vec<GeologicalSite> {
    GEOLOGICAL_SITES
        .iter()
        .filter(|s| filter.accepts(s.commodity))
        .copied()
        .collect()
}

pub fn heatmap() -> &'static [HeatmapCell] {
    &HEATMAP
}

/// Feature importance, highest first.
pub fn feature_importance() -> &'static [FeatureImportance] {
    &FEATURE_IMPORTANCE
}

pub fn commodity_distribution() -> &'static [CommodityShare] {
    &COMMODITY_DISTRIBUTION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commodity_parse() {
        assert_eq!("gold".parse::<Commodity>().unwrap(), Commodity::Gold);
        assert_eq!(" Chromium ".parse::<Commodity>().unwrap(), Commodity::Chromium);
        assert!("Platinum".parse::<Commodity>().is_err());
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("ALL".parse::<CommodityFilter>().unwrap(), CommodityFilter::All);
        assert_eq!(
            "copper".parse::<CommodityFilter>().unwrap(),
            CommodityFilter::Only(Commodity::Copper)
        );
    }

    #[test]
    fn test_feature_importance_sorted() {
        let values: Vec<f64> = feature_importance().iter().map(|f| f.importance).collect();
        assert!(values.windows(2).all(|w| w[0] >= w[1]));
    }
}
