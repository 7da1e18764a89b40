//! Q&A Module Tests
//!
//! Keyword responder behavior: verbatim answers per topic, rule precedence,
//! and totality over arbitrary input.

use crate::qa::rules::{
    COPPER, GOLD_ANALYSIS, ICP_MS_ELEMENTS, MERCURY, METHODS_OVERVIEW, SAMPLE_PREPARATION,
    SILVER_DETECTION_LIMITS,
};
use crate::qa::{respond, GeochemResponder, KnowledgeBase, Term, Topic, DEFAULT_RESPONSE};

#[cfg(test)]
mod topic_tests {
    use super::*;

    #[test]
    fn test_lod_queries() {
        let lod = KnowledgeBase::global().term(Term::Lod);
        for query in ["lod", "What is the LOD?", "explain LIMIT OF DETECTION please"] {
            assert_eq!(respond(query), lod, "Expected LOD for '{}'", query);
        }
    }

    #[test]
    fn test_lld_queries() {
        let lld = KnowledgeBase::global().term(Term::Lld);
        for query in ["LLD", "what is the lower limit of determination"] {
            assert_eq!(respond(query), lld, "Expected LLD for '{}'", query);
        }
    }

    #[test]
    fn test_url_queries() {
        let url = KnowledgeBase::global().term(Term::Url);
        for query in ["URL?", "Define upper reporting limit"] {
            assert_eq!(respond(query), url, "Expected URL for '{}'", query);
        }
    }

    #[test]
    fn test_gold_analysis_summary() {
        assert_eq!(respond("How does gold analysis work?"), GOLD_ANALYSIS);
        // "gold" alone is not enough
        assert_eq!(respond("gold"), DEFAULT_RESPONSE);
    }

    #[test]
    fn test_silver_detection_limits() {
        assert_eq!(respond("What is the detection limit for silver?"), SILVER_DETECTION_LIMITS);
    }

    #[test]
    fn test_sample_preparation() {
        assert_eq!(respond("Sample preparation steps"), SAMPLE_PREPARATION);
        assert_eq!(respond("How is each sample prepared?"), SAMPLE_PREPARATION);
    }

    #[test]
    fn test_icp_ms_elements() {
        assert_eq!(respond("Which elements go on the ICP-MS?"), ICP_MS_ELEMENTS);
        assert_eq!(respond("mass spectroscopy"), ICP_MS_ELEMENTS);
    }

    #[test]
    fn test_mercury_or_hg() {
        assert_eq!(respond("Mercury"), MERCURY);
        assert_eq!(respond("HG results"), MERCURY);
    }

    #[test]
    fn test_copper() {
        assert_eq!(respond("copper"), COPPER);
        assert_eq!(respond("Cu"), COPPER);
    }

    #[test]
    fn test_methods_overview() {
        assert_eq!(respond("list all methods"), METHODS_OVERVIEW);
        assert_eq!(respond("what techniques exist"), METHODS_OVERVIEW);
        assert_eq!(respond("analysis types"), METHODS_OVERVIEW);
    }

    #[test]
    fn test_no_keywords_returns_default() {
        assert_eq!(respond("banana"), DEFAULT_RESPONSE);
        assert_eq!(respond(""), DEFAULT_RESPONSE);
    }
}

#[cfg(test)]
mod precedence_tests {
    use super::*;

    fn topic(query: &str) -> Topic {
        GeochemResponder::new().answer(query).topic
    }

    #[test]
    fn test_term_rules_beat_element_rules() {
        assert_eq!(topic("gold analysis lod"), Topic::LimitOfDetection);
        assert_eq!(topic("mercury lld"), Topic::LowerLimitOfDetermination);
    }

    #[test]
    fn test_lod_declared_before_lld() {
        assert_eq!(topic("lld and lod"), Topic::LimitOfDetection);
    }

    #[test]
    fn test_gold_analysis_beats_silver_detection_limit() {
        assert_eq!(topic("gold analysis vs silver detection limit"), Topic::GoldAnalysis);
    }

    #[test]
    fn test_sample_preparation_beats_copper() {
        assert_eq!(topic("how are copper samples prepared"), Topic::SamplePreparation);
    }

    #[test]
    fn test_icp_ms_beats_mercury() {
        assert_eq!(topic("icp-ms for mercury"), Topic::IcpMsElements);
    }

    #[test]
    fn test_copper_beats_methods() {
        assert_eq!(topic("copper methods"), Topic::Copper);
    }

    #[test]
    fn test_substring_artifacts_are_preserved() {
        // plain substring containment, no word boundaries
        assert_eq!(topic("accurate"), Topic::Copper);
        assert_eq!(topic("explode"), Topic::LimitOfDetection);
        assert_eq!(topic("Fishguard"), Topic::Mercury);
    }
}

#[cfg(test)]
mod totality_tests {
    use super::*;

    #[test]
    fn test_every_input_gets_non_empty_answer() {
        let long = "a very long query ".repeat(500);
        let inputs = [
            "",
            " ",
            "\n\t",
            "?",
            "ÉLÉMENTS ANALYSÉS",
            "金",
            "🙂 gold analysis 🙂",
            long.as_str(),
        ];
        let responder = GeochemResponder::new();
        for input in inputs {
            let answer = responder.answer(input);
            assert!(!answer.text.is_empty(), "Empty answer for {:?}", input);
        }
    }

    #[test]
    fn test_fallback_has_no_matched_phrases() {
        let answer = GeochemResponder::new().answer("banana");
        assert_eq!(answer.topic, Topic::Fallback);
        assert!(answer.matched_phrases.is_empty());
    }

    #[test]
    fn test_responder_is_stateless() {
        let responder = GeochemResponder::new();
        let first = responder.answer("copper");
        responder.answer("banana");
        assert_eq!(responder.answer("copper"), first);
    }
}
