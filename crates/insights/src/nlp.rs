//! Optional NLP capabilities and their heuristic fallbacks.
//!
//! A real deployment would put a transformer behind these traits. Here the
//! bundled implementations are deterministic heuristics, and the chatbot
//! degrades to canned replies whenever a capability is absent or returns
//! nothing. Capability selection happens once at startup.

use std::sync::Arc;

use serde::Serialize;

use aerosense_core::derive_index;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

pub trait SentimentAnalyzer: Send + Sync {
    fn classify(&self, text: &str) -> Sentiment;
}

/// Text generation contract: return the prompt followed by a continuation
/// of at most `max_chars` characters. An empty return signals the
/// generator had nothing to add and callers should fall back.
pub trait TextGenerator: Send + Sync {
    fn complete(&self, prompt: &str, max_chars: usize) -> String;
}

/// Generation capability selected once at startup.
#[derive(Clone)]
pub enum GenerationCapability {
    Available(Arc<dyn TextGenerator>),
    Unavailable,
}

/// Keyword-count sentiment heuristic; the always-available classifier.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconSentiment;

const POSITIVE_WORDS: [&str; 6] = ["great", "good", "thanks", "thank", "love", "excellent"];
const NEGATIVE_WORDS: [&str; 8] = [
    "bad", "terrible", "awful", "lost", "angry", "delayed", "worst", "missed",
];

impl SentimentAnalyzer for LexiconSentiment {
    fn classify(&self, text: &str) -> Sentiment {
        let lower = text.to_lowercase();
        let positives = POSITIVE_WORDS.iter().filter(|w| lower.contains(**w)).count();
        let negatives = NEGATIVE_WORDS.iter().filter(|w| lower.contains(**w)).count();

        match positives.cmp(&negatives) {
            std::cmp::Ordering::Greater => Sentiment::Positive,
            std::cmp::Ordering::Less => Sentiment::Negative,
            std::cmp::Ordering::Equal => Sentiment::Neutral,
        }
    }
}

/// Deterministic phrase-template generator, the bundled "available"
/// text-generation variant. The continuation is picked from a small set
/// by seed so the same prompt always completes the same way.
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateCompleter;

const CONTINUATIONS: [&str; 4] = [
    "is something I can help with. Could you share your flight number?",
    "sounds important. The nearest information desk is by the Terminal 1 fountain.",
    "comes up a lot at this airport. Any staffed help point can take it further.",
    "is noted. I have forwarded the request to the right team.",
];

impl TextGenerator for TemplateCompleter {
    fn complete(&self, prompt: &str, max_chars: usize) -> String {
        let trimmed = prompt.trim();
        if trimmed.is_empty() {
            return String::new();
        }
        let pick = derive_index(trimmed, CONTINUATIONS.len() as u64) as usize;
        let continuation: String = CONTINUATIONS[pick].chars().take(max_chars).collect();
        format!("{trimmed} {continuation}")
    }
}
