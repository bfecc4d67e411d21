//! Static wellness content checks

use std::collections::HashSet;
use steady_mind::analysis::BurnoutLevel;
use steady_mind::wellness::{breathing_technique, detox_schedule, wellness_for};

const ALL_LEVELS: [BurnoutLevel; 4] = [
    BurnoutLevel::None,
    BurnoutLevel::Low,
    BurnoutLevel::Medium,
    BurnoutLevel::High,
];

#[test]
fn each_level_gets_a_distinct_schedule() {
    let first_activities: HashSet<&str> = ALL_LEVELS
        .iter()
        .map(|level| detox_schedule(*level)[0].activity)
        .collect();
    assert_eq!(first_activities.len(), 4);
}

#[test]
fn schedules_escalate_morning_duration() {
    assert_eq!(detox_schedule(BurnoutLevel::None)[0].duration, "15 min");
    assert_eq!(detox_schedule(BurnoutLevel::Low)[0].duration, "30 min");
    assert_eq!(detox_schedule(BurnoutLevel::Medium)[0].duration, "1 hour");
    assert_eq!(detox_schedule(BurnoutLevel::High)[0].duration, "2 hours");
}

#[test]
fn breathing_cycle_totals_nineteen_seconds() {
    let technique = breathing_technique();
    let total: u32 = technique.phases.iter().map(|p| p.seconds).sum();
    assert_eq!(total, 19);
    assert_eq!(technique.cycles, 5);
}

#[test]
fn wellness_payload_serializes_for_browser_clients() {
    for level in ALL_LEVELS {
        let value = serde_json::to_value(wellness_for(level)).unwrap();
        assert_eq!(value["burnoutLevel"], level.as_str());
        assert_eq!(value["detoxSchedule"].as_array().unwrap().len(), 4);
        assert_eq!(value["breathing"]["name"], "4-7-8");
        assert!(value["detoxSchedule"][0]["time"].is_string());
    }
}
