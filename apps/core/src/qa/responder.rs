//! Keyword responder for geochemical lab-method questions.
//!
//! Lower-cases the query and returns the reply of the first rule whose trigger
//! holds, or the default guidance text. Pure and total: every string gets
//! exactly one non-empty answer.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::knowledge::KnowledgeBase;
use super::rules::{Reply, Rule, Topic, DEFAULT_RESPONSE, RULES};

/// Structured outcome of answering one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    /// Topic of the matched rule, `Fallback` when none matched
    pub topic: Topic,
    /// Trigger phrases that made the rule fire
    pub matched_phrases: Vec<String>,
    /// Text shown to the user, with embedded newlines
    pub text: String,
}

impl Answer {
    pub fn is_fallback(&self) -> bool {
        self.topic == Topic::Fallback
    }
}

/// Rule-table responder over a knowledge base.
#[derive(Clone, Copy)]
pub struct GeochemResponder {
    knowledge: &'static KnowledgeBase,
    rules: &'static [Rule],
}

impl Default for GeochemResponder {
    fn default() -> Self {
        Self::new()
    }
}

impl GeochemResponder {
    /// Responder over the embedded knowledge base and the built-in rule table.
    pub fn new() -> Self {
        Self::with_parts(KnowledgeBase::global(), RULES)
    }

    pub fn with_parts(knowledge: &'static KnowledgeBase, rules: &'static [Rule]) -> Self {
        Self { knowledge, rules }
    }

    /// Answer a query with topic and matched phrases.
    pub fn answer(&self, query: &str) -> Answer {
        let normalized = query.to_lowercase();

        for rule in self.rules {
            if let Some(phrases) = rule.trigger.matches(&normalized) {
                debug!(topic = %rule.topic, ?phrases, "Q&A rule matched");
                return Answer {
                    topic: rule.topic,
                    matched_phrases: phrases.into_iter().map(str::to_string).collect(),
                    text: self.render(&rule.reply),
                };
            }
        }

        debug!("No Q&A rule matched, using default response");
        Answer {
            topic: Topic::Fallback,
            matched_phrases: vec![],
            text: DEFAULT_RESPONSE.to_string(),
        }
    }

    /// Answer a query, returning only the text.
    pub fn respond(&self, query: &str) -> String {
        self.answer(query).text
    }

    fn render(&self, reply: &Reply) -> String {
        match reply {
            Reply::Term(term) => self.knowledge.term(*term).to_string(),
            Reply::Canned(text) => (*text).to_string(),
        }
    }
}

/// Answer a query with the built-in rule table.
pub fn respond(query: &str) -> String {
    GeochemResponder::new().respond(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qa::knowledge::Term;
    use crate::qa::rules::{Trigger, COPPER, GOLD_ANALYSIS, MERCURY};

    #[test]
    fn test_lod_definition_verbatim() {
        let kb = KnowledgeBase::global();
        assert_eq!(respond("What is LOD?"), kb.term(Term::Lod));
        assert_eq!(respond("Define the Limit Of Detection"), kb.term(Term::Lod));
    }

    #[test]
    fn test_gold_analysis() {
        let answer = GeochemResponder::new().answer("Tell me about Gold Analysis");
        assert_eq!(answer.topic, Topic::GoldAnalysis);
        assert_eq!(answer.matched_phrases, vec!["gold", "analysis"]);
        assert_eq!(answer.text, GOLD_ANALYSIS);
    }

    #[test]
    fn test_hg_matches_mercury() {
        assert_eq!(respond("Hg limits"), MERCURY);
    }

    #[test]
    fn test_earlier_rule_wins() {
        // mercury is declared before copper
        assert_eq!(respond("mercury and copper"), MERCURY);
        assert_eq!(respond("copper methods"), COPPER);
    }

    #[test]
    fn test_empty_query_falls_back() {
        let answer = GeochemResponder::new().answer("");
        assert!(answer.is_fallback());
        assert!(answer.matched_phrases.is_empty());
        assert_eq!(answer.text, DEFAULT_RESPONSE);
    }

    #[test]
    fn test_custom_rule_table() {
        static ONLY_GOLD: &[Rule] = &[Rule {
            topic: Topic::GoldAnalysis,
            trigger: Trigger::Any(&["gold"]),
            reply: Reply::Canned("au"),
        }];
        let responder = GeochemResponder::with_parts(KnowledgeBase::global(), ONLY_GOLD);
        assert_eq!(responder.respond("GOLD"), "au");
        assert_eq!(responder.respond("lod"), DEFAULT_RESPONSE);
    }
}
