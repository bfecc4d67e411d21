//! Keyword-based burnout classification.
//!
//! This is the deterministic path: it runs when no LLM provider is
//! configured and whenever a provider call fails or returns output that
//! cannot be parsed. Matching is case-insensitive substring matching
//! against fixed keyword tables.

use crate::analysis::{Assessment, BurnoutLevel, MoodState, Sentiment};

/// Confidence reported for keyword-derived assessments.
pub const FALLBACK_CONFIDENCE: u8 = 60;

/// Classify journal text with the keyword tables.
pub fn classify(text: &str) -> Assessment {
    let lower = text.to_lowercase();

    // Check in order of precedence: positive signals outrank burnout signals
    let (burnout_level, sentiment, mood_state, stress_indicators) =
        if contains_positive_keywords(&lower) {
            (
                BurnoutLevel::None,
                Sentiment::Positive,
                MoodState::Happy,
                Vec::new(),
            )
        } else if contains_high_keywords(&lower) {
            (
                BurnoutLevel::High,
                Sentiment::Negative,
                MoodState::Exhausted,
                vec!["Severe stress indicators detected".to_string()],
            )
        } else if contains_medium_keywords(&lower) {
            (
                BurnoutLevel::Medium,
                Sentiment::Negative,
                MoodState::Stressed,
                vec!["Moderate stress indicators detected".to_string()],
            )
        } else if contains_low_keywords(&lower) {
            (
                BurnoutLevel::Low,
                Sentiment::Positive,
                MoodState::Content,
                Vec::new(),
            )
        } else {
            (
                BurnoutLevel::Low,
                Sentiment::Neutral,
                MoodState::Content,
                Vec::new(),
            )
        };

    Assessment {
        burnout_level,
        sentiment,
        mood_state: Some(mood_state),
        key_topics: extract_topics(&lower),
        stress_indicators,
        confidence: FALLBACK_CONFIDENCE,
        reasoning: Some("Fallback keyword-based analysis".to_string()),
    }
}

/// Pull life-area topics out of journal text.
pub fn extract_topics(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let rules: [(&str, [&str; 3]); 4] = [
        ("work", ["work", "job", "career"]),
        ("sleep", ["sleep", "tired", "rest"]),
        ("relationships", ["relationship", "family", "friends"]),
        ("exercise", ["exercise", "gym", "fitness"]),
    ];

    let mut topics = Vec::new();
    for (topic, cues) in rules {
        if cues.iter().any(|kw| lower.contains(kw)) {
            topics.push(topic.to_string());
        }
    }
    topics
}

fn contains_positive_keywords(text: &str) -> bool {
    let keywords = [
        "happy",
        "joyful",
        "excited",
        "thrilled",
        "amazing",
        "wonderful",
        "fantastic",
        "great",
        "excellent",
        "perfect",
        "love",
        "energetic",
        "motivated",
        "inspired",
        "fulfilled",
        "satisfied",
        "content",
        "peaceful",
        "calm",
        "relaxed",
        "balanced",
    ];
    keywords.iter().any(|kw| text.contains(kw))
}

fn contains_high_keywords(text: &str) -> bool {
    let keywords = [
        "exhausted",
        "overwhelmed",
        "burnout",
        "completely drained",
        "cannot cope",
        "mental breakdown",
        "extreme stress",
        "constantly tired",
        "losing motivation",
        "depressed",
        "anxious",
        "panic attacks",
        "insomnia",
        "chronic fatigue",
    ];
    keywords.iter().any(|kw| text.contains(kw))
}

fn contains_medium_keywords(text: &str) -> bool {
    let keywords = [
        "stressed",
        "tired",
        "overworked",
        "losing interest",
        "difficulty concentrating",
        "irritable",
        "sleep problems",
        "lack of energy",
        "feeling detached",
        "procrastinating",
        "cynical",
        "reduced productivity",
    ];
    keywords.iter().any(|kw| text.contains(kw))
}

fn contains_low_keywords(text: &str) -> bool {
    let keywords = [
        "managing",
        "coping",
        "okay",
        "fine",
        "good",
        "energetic",
        "motivated",
        "balanced",
        "handling stress",
        "sleeping well",
        "focused",
    ];
    keywords.iter().any(|kw| text.contains(kw))
}
