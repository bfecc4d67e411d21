//! Decision-table coverage for recommendation assembly

use steady_mind::analysis::{Assessment, BurnoutLevel, MoodState, Sentiment};
use steady_mind::recommend::recommend;

fn assessment(level: BurnoutLevel, mood: Option<MoodState>, topics: &[&str]) -> Assessment {
    Assessment {
        burnout_level: level,
        sentiment: Sentiment::Neutral,
        mood_state: mood,
        key_topics: topics.iter().map(|t| t.to_string()).collect(),
        stress_indicators: vec![],
        confidence: 75,
        reasoning: None,
    }
}

#[test]
fn none_level_without_mood_selects_positive_branch() {
    let recs = recommend(&assessment(BurnoutLevel::None, None, &[]), "quiet evening");
    assert!(recs.contains(&"Set new goals to channel your positive energy".to_string()));
    assert!(!recs.contains(&"Maintain your current work-life balance".to_string()));
}

#[test]
fn medium_without_topics_gets_branch_and_base_only() {
    let recs = recommend(&assessment(BurnoutLevel::Medium, None, &[]), "rough patch");
    // 3 base entries plus the 4 medium-branch entries, nothing else
    assert_eq!(recs.len(), 7);
    assert!(recs.contains(&"Practice the 4-7-8 breathing technique when stressed".to_string()));
    assert!(!recs.contains(&"Speak with your manager about workload concerns".to_string()));
}

#[test]
fn high_with_topics_gets_both_addons() {
    let a = assessment(
        BurnoutLevel::High,
        Some(MoodState::Overwhelmed),
        &["work", "sleep"],
    );
    let recs = recommend(&a, "too much of everything");
    assert!(recs.contains(&"Immediate reduction of work responsibilities is crucial".to_string()));
    assert!(recs.contains(&"Prioritize sleep - consider sleep hygiene consultation".to_string()));
}

#[test]
fn happy_mood_takes_priority_over_high_level() {
    let a = assessment(BurnoutLevel::High, Some(MoodState::Happy), &[]);
    let recs = recommend(&a, "strange but good day");
    assert!(recs.contains(&"Share your positive energy with others".to_string()));
    assert!(!recs.contains(&"Consider taking time off work to recover".to_string()));
}

#[test]
fn text_cues_apply_regardless_of_branch() {
    let a = assessment(BurnoutLevel::None, None, &[]);
    let recs = recommend(&a, "My colleagues keep asking for help");
    assert!(recs.contains(&"Communicate openly with your team about capacity".to_string()));
}

#[test]
fn unknown_topics_are_ignored() {
    let a = assessment(BurnoutLevel::Low, None, &["finances", "weather"]);
    let with_unknown = recommend(&a, "steady week");
    let without = recommend(&assessment(BurnoutLevel::Low, None, &[]), "steady week");
    assert_eq!(with_unknown, without);
}
