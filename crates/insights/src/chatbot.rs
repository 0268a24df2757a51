//! Passenger-facing assistant replies.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::nlp::{GenerationCapability, Sentiment, SentimentAnalyzer};

pub const MODEL: &str = "distilbert-sentiment + dialoGPT-small";

/// Upper bound on generated continuations, in characters.
const MAX_CONTINUATION_CHARS: usize = 160;

const FLIGHT_REPLY: &str =
    "I can help with flight inquiries. Your flight to London (BA123) is currently on time at Gate B4.";
const GATE_REPLY: &str =
    "Please provide your flight number, and I'll give you the fastest route to your gate.";
const STATUS_REPLY: &str =
    "All terminals are operating normally today. Check-in queues are under ten minutes.";
const DINING_REPLY: &str =
    "There are several great options! I recommend 'The Cloud Bistro' in Terminal 2 for local cuisine.";

const EMPATHY_PREFIX: &str = "I'm sorry to hear that. ";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatReply {
    pub response: String,
    pub sentiment: Sentiment,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub timestamp: DateTime<Utc>,
    pub model: &'static str,
}

/// Answer a passenger query.
///
/// Keyword intents short-circuit to informative canned replies; everything
/// else goes through the text-generation capability when one is installed,
/// with a canned assistant reply as the last resort. Negative sentiment
/// prepends an empathetic phrase in every path.
pub fn respond(
    sentiment: &dyn SentimentAnalyzer,
    generation: &GenerationCapability,
    query: &str,
    user_id: &str,
    now: DateTime<Utc>,
) -> ChatReply {
    let mood = sentiment.classify(query);
    let lower = query.to_lowercase();

    let mut response = if lower.contains("flight") {
        FLIGHT_REPLY.to_string()
    } else if lower.contains("gate") {
        GATE_REPLY.to_string()
    } else if lower.contains("status") {
        STATUS_REPLY.to_string()
    } else if lower.contains("restaurant") || lower.contains("food") {
        DINING_REPLY.to_string()
    } else {
        generated_or_canned(generation, query)
    };

    if mood == Sentiment::Negative {
        response = format!("{EMPATHY_PREFIX}{response}");
    }

    ChatReply {
        response,
        sentiment: mood,
        user_id: user_id.to_string(),
        timestamp: now,
        model: MODEL,
    }
}

fn generated_or_canned(generation: &GenerationCapability, query: &str) -> String {
    if let GenerationCapability::Available(generator) = generation {
        let raw = generator.complete(query, MAX_CONTINUATION_CHARS);
        let continuation = raw
            .strip_prefix(query.trim())
            .unwrap_or(raw.as_str())
            .trim();
        if !continuation.is_empty() {
            return continuation.chars().take(MAX_CONTINUATION_CHARS).collect();
        }
    }
    canned_fallback(query)
}

fn canned_fallback(query: &str) -> String {
    format!("I'm your smart airport assistant, here to help with your journey. You said: '{query}'")
}
