//! Recommendation assembly for burnout assessments.
//!
//! Recommendations are built from a fixed decision table: a base set
//! everyone receives, one branch keyed on burnout level or mood, topic
//! add-ons within that branch, then text-driven extras. Duplicates keep
//! their first occurrence.

use crate::analysis::{Assessment, BurnoutLevel, MoodState};
use std::collections::HashSet;

const BASE_RECOMMENDATIONS: [&str; 3] = [
    "Practice mindfulness for 5 minutes daily",
    "Stay hydrated throughout the day",
    "Take regular movement breaks",
];

/// Build the recommendation list for an assessment of `text`.
pub fn recommend(assessment: &Assessment, text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let has_topic = |topic: &str| assessment.key_topics.iter().any(|t| t == topic);
    let mood = assessment.mood_state;
    let mut extras: Vec<&str> = Vec::new();

    if assessment.burnout_level == BurnoutLevel::None || mood == Some(MoodState::Happy) {
        extras.extend_from_slice(&[
            "Continue your positive habits and routines",
            "Share your positive energy with others",
            "Consider mentoring or helping someone who might be struggling",
            "Keep a gratitude journal to maintain your positive outlook",
            "Set new goals to channel your positive energy",
        ]);
        if has_topic("work") {
            extras.push("Leverage your current motivation to take on inspiring projects");
        }
        if has_topic("relationships") {
            extras.push("Nurture your positive social connections");
        }
    } else if assessment.burnout_level == BurnoutLevel::Low || mood == Some(MoodState::Content) {
        extras.extend_from_slice(&[
            "Maintain your current work-life balance",
            "Continue regular exercise and healthy sleep habits",
            "Practice stress management techniques proactively",
        ]);
        if has_topic("work") {
            extras.push("Set clear boundaries around work hours");
        }
        if has_topic("sleep") {
            extras.push("Maintain consistent sleep schedule");
        }
    } else if assessment.burnout_level == BurnoutLevel::Medium || mood == Some(MoodState::Stressed)
    {
        extras.extend_from_slice(&[
            "Reduce workload and delegate tasks when possible",
            "Practice the 4-7-8 breathing technique when stressed",
            "Take short walks during breaks to clear your mind",
            "Consider talking to a trusted friend or colleague",
        ]);
        if has_topic("work") {
            extras.push("Speak with your manager about workload concerns");
        }
        if has_topic("sleep") {
            extras.push("Establish a relaxing bedtime routine");
        }
        if has_topic("relationships") {
            extras.push("Don't isolate yourself - reach out to loved ones");
        }
    } else if assessment.burnout_level == BurnoutLevel::High
        || matches!(
            mood,
            Some(MoodState::Exhausted) | Some(MoodState::Overwhelmed) | Some(MoodState::Anxious)
        )
    {
        extras.extend_from_slice(&[
            "Consider taking time off work to recover",
            "Seek professional support from a mental health provider",
            "Practice progressive muscle relaxation daily",
            "Limit screen time, especially before bed",
            "Focus on basic needs: sleep, nutrition, and gentle movement",
        ]);
        if has_topic("work") {
            extras.push("Immediate reduction of work responsibilities is crucial");
        }
        if has_topic("sleep") {
            extras.push("Prioritize sleep - consider sleep hygiene consultation");
        }
    }

    if lower.contains("deadline") || lower.contains("pressure") {
        extras.push("Break large tasks into smaller, manageable steps");
    }
    if lower.contains("team") || lower.contains("colleagues") {
        extras.push("Communicate openly with your team about capacity");
    }
    if lower.contains("energy") || lower.contains("fatigue") {
        extras.push("Consider a energy audit of your daily activities");
    }

    // Base first, then branch extras, first occurrence wins
    let mut seen = HashSet::new();
    let mut recommendations = Vec::with_capacity(BASE_RECOMMENDATIONS.len() + extras.len());
    for rec in BASE_RECOMMENDATIONS.iter().chain(extras.iter()) {
        if seen.insert(*rec) {
            recommendations.push((*rec).to_string());
        }
    }
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Sentiment;

    fn assessment(level: BurnoutLevel, mood: Option<MoodState>, topics: &[&str]) -> Assessment {
        Assessment {
            burnout_level: level,
            sentiment: Sentiment::Neutral,
            mood_state: mood,
            key_topics: topics.iter().map(|t| t.to_string()).collect(),
            stress_indicators: vec![],
            confidence: 60,
            reasoning: None,
        }
    }

    #[test]
    fn test_base_recommendations_come_first() {
        let recs = recommend(&assessment(BurnoutLevel::Low, None, &[]), "nothing new");
        assert_eq!(recs[0], "Practice mindfulness for 5 minutes daily");
        assert_eq!(recs[1], "Stay hydrated throughout the day");
        assert_eq!(recs[2], "Take regular movement breaks");
    }

    #[test]
    fn test_positive_branch_with_work_topic() {
        let a = assessment(BurnoutLevel::None, Some(MoodState::Happy), &["work"]);
        let recs = recommend(&a, "I love my work right now");
        assert!(recs.contains(&"Continue your positive habits and routines".to_string()));
        assert!(recs.contains(
            &"Leverage your current motivation to take on inspiring projects".to_string()
        ));
        assert!(!recs.contains(&"Consider taking time off work to recover".to_string()));
    }

    #[test]
    fn test_medium_branch_topic_addons() {
        let a = assessment(
            BurnoutLevel::Medium,
            Some(MoodState::Stressed),
            &["work", "sleep", "relationships"],
        );
        let recs = recommend(&a, "stressed about everything");
        assert!(recs.contains(&"Speak with your manager about workload concerns".to_string()));
        assert!(recs.contains(&"Establish a relaxing bedtime routine".to_string()));
        assert!(recs.contains(&"Don't isolate yourself - reach out to loved ones".to_string()));
    }

    #[test]
    fn test_high_branch() {
        let a = assessment(BurnoutLevel::High, Some(MoodState::Exhausted), &["sleep"]);
        let recs = recommend(&a, "cannot go on like this");
        assert!(recs.contains(&"Seek professional support from a mental health provider".to_string()));
        assert!(recs.contains(&"Prioritize sleep - consider sleep hygiene consultation".to_string()));
        // Branches are exclusive
        assert!(!recs.contains(&"Reduce workload and delegate tasks when possible".to_string()));
    }

    #[test]
    fn test_happy_mood_overrides_level() {
        // Mood alone selects the positive branch even at medium burnout
        let a = assessment(BurnoutLevel::Medium, Some(MoodState::Happy), &[]);
        let recs = recommend(&a, "odd mix of a day");
        assert!(recs.contains(&"Continue your positive habits and routines".to_string()));
        assert!(!recs.contains(&"Reduce workload and delegate tasks when possible".to_string()));
    }

    #[test]
    fn test_text_driven_extras_ignore_case() {
        let a = assessment(BurnoutLevel::Low, None, &[]);
        let recs = recommend(&a, "DEADLINE PRESSURE with the TEAM, no energy left");
        assert!(recs.contains(&"Break large tasks into smaller, manageable steps".to_string()));
        assert!(recs.contains(&"Communicate openly with your team about capacity".to_string()));
        assert!(recs.contains(&"Consider a energy audit of your daily activities".to_string()));
    }

    #[test]
    fn test_no_duplicates() {
        let a = assessment(
            BurnoutLevel::Medium,
            Some(MoodState::Stressed),
            &["work", "sleep", "relationships"],
        );
        let recs = recommend(&a, "deadline pressure, team fatigue, low energy");
        let mut unique = HashSet::new();
        for rec in &recs {
            assert!(unique.insert(rec.clone()), "duplicate recommendation: {rec}");
        }
    }
}
