//! Ordered matching rules for the geochemical Q&A responder.
//!
//! Rules are evaluated top to bottom against the lower-cased query and the first
//! satisfied trigger wins. Triggers overlap (`cu` vs `methods`, `gold` vs `lod`),
//! so the order of [`RULES`] is part of the observable behavior.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::knowledge::Term;

/// Topic answered by a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    LimitOfDetection,
    LowerLimitOfDetermination,
    UpperReportingLimit,
    GoldAnalysis,
    SilverDetectionLimits,
    SamplePreparation,
    IcpMsElements,
    Mercury,
    Copper,
    MethodsOverview,
    /// No rule matched
    Fallback,
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Topic {
    pub fn label(&self) -> &'static str {
        match self {
            Topic::LimitOfDetection => "limit_of_detection",
            Topic::LowerLimitOfDetermination => "lower_limit_of_determination",
            Topic::UpperReportingLimit => "upper_reporting_limit",
            Topic::GoldAnalysis => "gold_analysis",
            Topic::SilverDetectionLimits => "silver_detection_limits",
            Topic::SamplePreparation => "sample_preparation",
            Topic::IcpMsElements => "icp_ms_elements",
            Topic::Mercury => "mercury",
            Topic::Copper => "copper",
            Topic::MethodsOverview => "methods_overview",
            Topic::Fallback => "fallback",
        }
    }
}

/// Substring predicate over an already lower-cased query.
#[derive(Debug)]
pub enum Trigger {
    /// At least one phrase is contained in the query
    Any(&'static [&'static str]),
    /// Every nested trigger holds
    All(&'static [Trigger]),
}

impl Trigger {
    /// Returns the phrases that satisfied the trigger, or `None` if it does not hold.
    ///
    /// For `Any`, only the first contained phrase is reported.
    pub fn matches(&self, normalized: &str) -> Option<Vec<&'static str>> {
        match self {
            Trigger::Any(phrases) => phrases
                .iter()
                .find(|phrase| normalized.contains(**phrase))
                .map(|phrase| vec![*phrase]),
            Trigger::All(triggers) => {
                let mut matched = Vec::new();
                for trigger in *triggers {
                    matched.extend(trigger.matches(normalized)?);
                }
                Some(matched)
            }
        }
    }
}

/// What a rule answers with.
#[derive(Debug)]
pub enum Reply {
    /// Definition looked up in the knowledge base
    Term(Term),
    /// Fixed text
    Canned(&'static str),
}

#[derive(Debug)]
pub struct Rule {
    pub topic: Topic,
    pub trigger: Trigger,
    pub reply: Reply,
}

pub const GOLD_ANALYSIS: &str = concat!(
    "Gold is analyzed using multiple methods including:\n\n",
    "1. Lead Fusion (Au_FA): Gold is determined by Inductively Coupled Plasma-Optical Emission Spectroscopy following sample decomposition by lead fusion. A 30g sample is used, with a detection limit (LLD) of 1 ppb and upper reporting limit (URL) of 10,000 ppb.\n\n",
    "2. Fire Assay with ICP-MS (Au_FA_MS): Gold is determined by inductively coupled plasma-mass spectroscopy following decomposition by lead fusion fire assay. A 15g sample is used, with the same detection limits as the lead fusion method.\n\n",
    "3. Aqua Regia Digestion: Gold can also be analyzed following aqua regia digestion with a detection limit of 0.005 ppm (5 ppb) and URL of 10 ppm.\n\n",
    "Quality control criteria require ±20% recovery at five times the LLD and the calculated RSD of duplicate samples must not exceed 20%."
);

pub const SILVER_DETECTION_LIMITS: &str = concat!(
    "Silver (Ag) has different detection limits depending on the method used:\n\n",
    "1. With ICP-MS following sodium peroxide decomposition (Ag_MS_ST): LLD = 1 ppm, URL = 1000 ppm\n\n",
    "2. With ICP-MS following aqua regia digestion (Ag_MS_AR_P): LLD = 0.01 ppm, URL = 100 ppm\n\n",
    "3. With ICP-MS following 4-acid digestion (Ag_MS_HF): LLD = 0.01 ppm, URL = 100 ppm\n\n",
    "The method chosen depends on the sample type and the concentration range expected."
);

pub const SAMPLE_PREPARATION: &str = concat!(
    "Sample Preparation Methods:\n\n",
    "1. Sodium Peroxide Fusion: 0.5g sample is fused at 750°C with sodium peroxide and dissolved in dilute nitric acid.\n\n",
    "2. Aqua Regia: 2g sample is digested with nitric acid (HNO3) and hydrochloric acid (HCl) and heated in a water bath for 1.5 hours at 85°C.\n\n",
    "3. 4-Acid Digestion: 0.5g sample is decomposed using a mixture of hydrochloric, nitric, perchloric, and hydrofluoric acids at low temperature.\n\n",
    "4. Lithium Metaborate Fusion: Sample is fused with lithium metaborate and dissolved using dilute HNO3 in a graphite crucible.\n\n",
    "5. Lead Fusion (for precious metals): 30g sample is mixed with fluxing agents, melted, and separated from waste materials.\n\n",
    "6. Mercury Analysis: 0.5g sample is digested using a mixture of sulfuric and nitric acids with potassium permanganate and potassium persulfate."
);

pub const ICP_MS_ELEMENTS: &str = concat!(
    "Elements typically analyzed by ICP-MS include:\n\n",
    "Ag (Silver), As (Arsenic), B (Boron), Bi (Bismuth), Cd (Cadmium), Ce (Cerium), Co (Cobalt), Cs (Cesium), Dy (Dysprosium), Er (Erbium), Eu (Europium), Ga (Gallium), Gd (Gadolinium), Ge (Germanium), Hf (Hafnium), Ho (Holmium), In (Indium), La (Lanthanum), Lu (Lutetium), Mo (Molybdenum), Nb (Niobium), Nd (Neodymium), Pb (Lead), Pr (Praseodymium), Rb (Rubidium), Sb (Antimony), Se (Selenium), Sm (Samarium), Sn (Tin), Ta (Tantalum), Tb (Terbium), Te (Tellurium), Th (Thorium), Tl (Thallium), Tm (Thulium), U (Uranium), W (Tungsten), Y (Yttrium), Yb (Ytterbium), and others depending on the decomposition method used.\n\n",
    "Elements with higher concentrations are typically analyzed by ICP-OES instead."
);

pub const MERCURY: &str = concat!(
    "Mercury is analyzed by Cold Vapor Atomic Absorption Spectrometry (Hg_CVAAS).\n\n",
    "A 0.5g sample is digested using a mixture of sulfuric and nitric acids, with potassium permanganate and potassium persulfate in a water bath. Excess potassium permanganate is reduced using hydroxylamine sulfate solution. Mercury (II) is reduced by a solution of Tin (II) chloride (stannous chloride), and mercury vapor is separated and measured with a FIMS 100 Mercury Analysis System.\n\n",
    "The detection limit (LLD) is 1 ppb with an upper reporting limit (URL) of 100,000 ppb.\n\n",
    "Quality control requires that data is acceptable if recovery of mercury is ±20% at five times the LLD and the calculated RSD of duplicate samples doesn't exceed 20%."
);

pub const COPPER: &str = concat!(
    "Copper (Cu) analysis methods and detection limits:\n\n",
    "1. Sodium Peroxide Fusion (Cu_AES_ST): LLD = 5 ppm, URL = 5%, analyzed by ICP-OES\n\n",
    "2. Aqua Regia Digestion (Cu_AES_AR_P): LLD = 0.5 ppm, URL = 1%\n\n",
    "3. 4-Acid Digestion (Cu_AES_HF): LLD = 0.5 ppm, URL = 1%, analyzed by ICP-OES\n\n",
    "Copper is typically analyzed using ICP-OES rather than ICP-MS due to its generally higher concentration in geological samples."
);

pub const METHODS_OVERVIEW: &str = concat!(
    "Geochemical Analysis Methods Overview:\n\n",
    "1. Sodium Peroxide Fusion: Elements determined by ICP-OES/ICP-MS after fusing sample with sodium peroxide at 750°C\n\n",
    "2. Aqua Regia Digestion: Elements determined by ICP-OES/ICP-MS after digestion with nitric and hydrochloric acids\n\n",
    "3. 4-Acid Digestion: Elements determined by ICP-OES/ICP-MS after decomposition using hydrochloric, nitric, perchloric, and hydrofluoric acids\n\n",
    "4. Lithium Metaborate Fusion: Major oxides determined by ICP-OES after fusion with lithium metaborate\n\n",
    "5. Lead Fusion: Gold, palladium and platinum determined by ICP-OES after lead fusion\n\n",
    "6. Cold Vapor AAS: Specifically for mercury analysis\n\n",
    "7. Fire Assay with ICP-MS: Gold analyzed by ICP-MS following lead fusion fire assay\n\n",
    "Each method has specific detection limits and is appropriate for different elements and concentration ranges."
);

/// Returned when no rule matches.
pub const DEFAULT_RESPONSE: &str = concat!(
    "I couldn't find specific information about that query in the geochemical methods document. Try asking about:\n",
    "- Specific analytical methods (e.g., sodium peroxide fusion, aqua regia, 4-acid digestion)\n",
    "- Detection limits for specific elements (gold, silver, copper, etc.)\n",
    "- Sample preparation techniques\n",
    "- Definitions of terms like LOD, LLD, URL\n",
    "- Elements analyzed by different methods"
);

/// The rule table, in evaluation order.
pub static RULES: &[Rule] = &[
    Rule {
        topic: Topic::LimitOfDetection,
        trigger: Trigger::Any(&["lod", "limit of detection"]),
        reply: Reply::Term(Term::Lod),
    },
    Rule {
        topic: Topic::LowerLimitOfDetermination,
        trigger: Trigger::Any(&["lld", "lower limit"]),
        reply: Reply::Term(Term::Lld),
    },
    Rule {
        topic: Topic::UpperReportingLimit,
        trigger: Trigger::Any(&["url", "upper reporting limit"]),
        reply: Reply::Term(Term::Url),
    },
    Rule {
        topic: Topic::GoldAnalysis,
        trigger: Trigger::All(&[Trigger::Any(&["gold"]), Trigger::Any(&["analysis"])]),
        reply: Reply::Canned(GOLD_ANALYSIS),
    },
    Rule {
        topic: Topic::SilverDetectionLimits,
        trigger: Trigger::All(&[Trigger::Any(&["silver"]), Trigger::Any(&["detection limit"])]),
        reply: Reply::Canned(SILVER_DETECTION_LIMITS),
    },
    Rule {
        topic: Topic::SamplePreparation,
        trigger: Trigger::All(&[
            Trigger::Any(&["sample"]),
            Trigger::Any(&["preparation", "prepared"]),
        ]),
        reply: Reply::Canned(SAMPLE_PREPARATION),
    },
    Rule {
        topic: Topic::IcpMsElements,
        trigger: Trigger::Any(&["icp-ms", "mass spectroscopy"]),
        reply: Reply::Canned(ICP_MS_ELEMENTS),
    },
    Rule {
        topic: Topic::Mercury,
        trigger: Trigger::Any(&["mercury", "hg"]),
        reply: Reply::Canned(MERCURY),
    },
    Rule {
        topic: Topic::Copper,
        trigger: Trigger::Any(&["copper", "cu"]),
        reply: Reply::Canned(COPPER),
    },
    Rule {
        topic: Topic::MethodsOverview,
        trigger: Trigger::Any(&["methods", "techniques", "analysis types"]),
        reply: Reply::Canned(METHODS_OVERVIEW),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_reports_first_contained_phrase() {
        let trigger = Trigger::Any(&["lod", "limit of detection"]);
        assert_eq!(
            trigger.matches("what is the limit of detection (lod)?"),
            Some(vec!["lod"])
        );
        assert_eq!(trigger.matches("banana"), None);
    }

    #[test]
    fn test_all_requires_every_branch() {
        let trigger = Trigger::All(&[
            Trigger::Any(&["sample"]),
            Trigger::Any(&["preparation", "prepared"]),
        ]);
        assert_eq!(
            trigger.matches("how is a sample prepared"),
            Some(vec!["sample", "prepared"])
        );
        assert_eq!(trigger.matches("sample digestion"), None);
        assert_eq!(trigger.matches("preparation only"), None);
    }

    #[test]
    fn test_rule_order_is_fixed() {
        let topics: Vec<Topic> = RULES.iter().map(|r| r.topic).collect();
        assert_eq!(
            topics,
            vec![
                Topic::LimitOfDetection,
                Topic::LowerLimitOfDetermination,
                Topic::UpperReportingLimit,
                Topic::GoldAnalysis,
                Topic::SilverDetectionLimits,
                Topic::SamplePreparation,
                Topic::IcpMsElements,
                Topic::Mercury,
                Topic::Copper,
                Topic::MethodsOverview,
            ]
        );
    }

    #[test]
    fn test_phrases_are_lowercase() {
        fn check(trigger: &Trigger) {
            match trigger {
                Trigger::Any(phrases) => {
                    for phrase in *phrases {
                        assert_eq!(*phrase, phrase.to_lowercase());
                    }
                }
                Trigger::All(triggers) => triggers.iter().for_each(check),
            }
        }
        RULES.iter().for_each(|r| check(&r.trigger));
    }
}
