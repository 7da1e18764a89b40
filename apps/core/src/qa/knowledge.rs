//! Geochemical methods knowledge base.
//!
//! The dictionary is embedded at compile time from `data/geochemical_methods.json`
//! and parsed once per process. It is never mutated after load.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::error::AppError;

const EMBEDDED_METHODS: &str = include_str!("../../data/geochemical_methods.json");

// NOTE: expect() is acceptable here: the document is compiled into the binary and
// covered by `test_embedded_document_parses`.
static KNOWLEDGE: LazyLock<KnowledgeBase> = LazyLock::new(|| {
    KnowledgeBase::from_json(EMBEDDED_METHODS).expect("Invalid embedded geochemical methods document")
});

/// Glossary terms with a canned definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Term {
    /// Limit of Detection
    Lod,
    /// Lower Limit of Determination
    Lld,
    /// Upper Reporting Limit
    Url,
}

impl Term {
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Term::Lod => "LOD",
            Term::Lld => "LLD",
            Term::Url => "URL",
        }
    }
}

/// Reporting limits of one element (or oxide) under one method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementLimits {
    /// Element symbol or oxide formula (e.g. `Au`, `Al2O3`)
    pub symbol: String,
    /// Element name, absent for oxides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Lower Limit of Determination
    pub lld: String,
    /// Upper Reporting Limit
    pub url: String,
    /// Instrument used, when the method splits elements between instruments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument: Option<String>,
}

/// A laboratory decomposition/analysis method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Method {
    pub key: String,
    pub name: String,
    pub column_heading: String,
    pub description: String,
    pub quality_control: String,
    pub elements: Vec<ElementLimits>,
}

/// Limits for one element together with the method that reports them.
#[derive(Debug, Clone, Serialize)]
pub struct ElementReport<'a> {
    pub method_key: &'a str,
    pub column_heading: &'a str,
    pub limits: &'a ElementLimits,
}

/// The full methods dictionary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBase {
    terms: BTreeMap<Term, String>,
    methods: Vec<Method>,
}

impl KnowledgeBase {
    /// Process-wide instance parsed from the embedded document.
    pub fn global() -> &'static KnowledgeBase {
        &KNOWLEDGE
    }

    /// Parse a methods document.
    ///
    /// Every [`Term`] must carry a definition and method keys must be unique.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let kb: KnowledgeBase =
            serde_json::from_str(json).map_err(|e| AppError::Knowledge(e.to_string()))?;

        for term in [Term::Lod, Term::Lld, Term::Url] {
            match kb.terms.get(&term) {
                Some(text) if !text.trim().is_empty() => {}
                _ => {
                    return Err(AppError::Knowledge(format!(
                        "Missing definition for term {}",
                        term.abbreviation()
                    )))
                }
            }
        }

        let mut seen = std::collections::HashSet::new();
        for method in &kb.methods {
            if !seen.insert(method.key.as_str()) {
                return Err(AppError::Knowledge(format!(
                    "Duplicate method key: {}",
                    method.key
                )));
            }
        }

        Ok(kb)
    }

    /// Definition text for a glossary term.
    pub fn term(&self, term: Term) -> &str {
        // from_json guarantees presence
        self.terms.get(&term).map(String::as_str).unwrap_or_default()
    }

    /// Methods in document order.
    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn method(&self, key: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.key == key)
    }

    /// Every method reporting the given element symbol (case-insensitive).
    pub fn element_limits(&self, symbol: &str) -> Vec<ElementReport<'_>> {
        self.methods
            .iter()
            .flat_map(|method| {
                method
                    .elements
                    .iter()
                    .filter(|e| e.symbol.eq_ignore_ascii_case(symbol))
                    .map(move |limits| ElementReport {
                        method_key: &method.key,
                        column_heading: &method.column_heading,
                        limits,
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_document_parses() {
        let kb = KnowledgeBase::from_json(EMBEDDED_METHODS).expect("embedded document");
        assert_eq!(kb.methods().len(), 7);
        assert!(kb.term(Term::Lod).starts_with("Limit of detection (LOD"));
    }

    #[test]
    fn test_methods_keep_document_order() {
        let keys: Vec<&str> = KnowledgeBase::global()
            .methods()
            .iter()
            .map(|m| m.key.as_str())
            .collect();
        assert_eq!(
            keys,
            vec![
                "sodium_peroxide_fusion",
                "aqua_regia",
                "four_acid_digestion",
                "lead_fusion",
                "cold_vapor_aas",
                "gold_fire_assay_ms",
                "lithium_metaborate_fusion",
            ]
        );
    }

    #[test]
    fn test_element_lookup_is_case_insensitive() {
        let reports = KnowledgeBase::global().element_limits("au");
        let methods: Vec<&str> = reports.iter().map(|r| r.method_key).collect();
        assert_eq!(methods, vec!["aqua_regia", "lead_fusion", "gold_fire_assay_ms"]);
        assert_eq!(reports[0].limits.lld, "0.005 ppm");
    }

    #[test]
    fn test_oxides_have_no_name() {
        let method = KnowledgeBase::global()
            .method("lithium_metaborate_fusion")
            .expect("method");
        assert!(method.elements.iter().all(|e| e.name.is_none()));
    }

    #[test]
    fn test_missing_term_is_rejected() {
        let json = r#"{"terms": {"LOD": "x", "LLD": "y"}, "methods": []}"#;
        let err = KnowledgeBase::from_json(json).unwrap_err();
        assert!(err.to_string().contains("URL"));
    }

    #[test]
    fn test_duplicate_method_is_rejected() {
        let method = r#"{"key": "a", "name": "n", "column_heading": "c", "description": "d", "quality_control": "q", "elements": []}"#;
        let json = format!(
            r#"{{"terms": {{"LOD": "x", "LLD": "y", "URL": "z"}}, "methods": [{m}, {m}]}}"#,
            m = method
        );
        let err = KnowledgeBase::from_json(&json).unwrap_err();
        assert!(matches!(err, AppError::Knowledge(_)));
    }
}
