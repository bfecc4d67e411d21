//! Core domain types for burnout analysis.
//!
//! An [`Assessment`] is what an analyzer produces from journal text; the
//! HTTP layer pairs it with recommendations and ships it as an
//! [`AnalysisResponse`] in the camelCase wire shape browser clients expect.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Burnout severity, ordered from healthiest to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BurnoutLevel {
    None,
    Low,
    Medium,
    High,
}

impl BurnoutLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            BurnoutLevel::None => "none",
            BurnoutLevel::Low => "low",
            BurnoutLevel::Medium => "medium",
            BurnoutLevel::High => "high",
        }
    }
}

impl fmt::Display for BurnoutLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BurnoutLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(BurnoutLevel::None),
            "low" => Ok(BurnoutLevel::Low),
            "medium" => Ok(BurnoutLevel::Medium),
            "high" => Ok(BurnoutLevel::High),
            _ => Err(()),
        }
    }
}

/// Overall sentiment of the journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dominant mood read from the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodState {
    Happy,
    Content,
    Stressed,
    Exhausted,
    Overwhelmed,
    Anxious,
}

impl MoodState {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoodState::Happy => "happy",
            MoodState::Content => "content",
            MoodState::Stressed => "stressed",
            MoodState::Exhausted => "exhausted",
            MoodState::Overwhelmed => "overwhelmed",
            MoodState::Anxious => "anxious",
        }
    }
}

impl fmt::Display for MoodState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Analyzer output before recommendations are attached.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub burnout_level: BurnoutLevel,
    pub sentiment: Sentiment,
    /// Absent when the provider did not name a mood.
    pub mood_state: Option<MoodState>,
    pub key_topics: Vec<String>,
    pub stress_indicators: Vec<String>,
    /// 0..=100 scale.
    pub confidence: u8,
    pub reasoning: Option<String>,
}

/// Wire response for `POST /api/analyze`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub burnout_level: BurnoutLevel,
    pub sentiment: Sentiment,
    pub stress_indicators: Vec<String>,
    pub recommendations: Vec<String>,
    pub confidence: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood_state: Option<MoodState>,
    pub key_topics: Vec<String>,
}

impl AnalysisResponse {
    pub fn new(assessment: Assessment, recommendations: Vec<String>) -> Self {
        Self {
            burnout_level: assessment.burnout_level,
            sentiment: assessment.sentiment,
            stress_indicators: assessment.stress_indicators,
            recommendations,
            confidence: assessment.confidence.min(100),
            mood_state: assessment.mood_state,
            key_topics: assessment.key_topics,
        }
    }
}
