//! Static wellness content: digital detox schedules and breathing timing.
//!
//! Detox schedules are keyed by burnout level so clients can show a plan
//! matched to the latest assessment. The breathing data carries the phase
//! timings a client needs to drive its own countdown.

use crate::analysis::BurnoutLevel;
use once_cell::sync::Lazy;
use serde::Serialize;

/// One block of a digital detox plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DetoxBlock {
    pub time: &'static str,
    pub duration: &'static str,
    pub activity: &'static str,
}

const DETOX_NONE: [DetoxBlock; 4] = [
    DetoxBlock {
        time: "Morning",
        duration: "15 min",
        activity: "Gratitude journaling",
    },
    DetoxBlock {
        time: "Midday",
        duration: "10 min",
        activity: "Mindful walk or stretch",
    },
    DetoxBlock {
        time: "Evening",
        duration: "20 min",
        activity: "Digital sunset - screen-free wind down",
    },
    DetoxBlock {
        time: "Weekly",
        duration: "2 hours",
        activity: "Nature time or hobby immersion",
    },
];

const DETOX_LOW: [DetoxBlock; 4] = [
    DetoxBlock {
        time: "Morning",
        duration: "30 min",
        activity: "Mindful morning routine",
    },
    DetoxBlock {
        time: "Lunch",
        duration: "15 min",
        activity: "Screen-free lunch",
    },
    DetoxBlock {
        time: "Evening",
        duration: "1 hour",
        activity: "Wind down without screens",
    },
    DetoxBlock {
        time: "Weekly",
        duration: "3 hours",
        activity: "Weekly digital reset",
    },
];

const DETOX_MEDIUM: [DetoxBlock; 4] = [
    DetoxBlock {
        time: "Morning",
        duration: "1 hour",
        activity: "No screens during breakfast",
    },
    DetoxBlock {
        time: "Lunch",
        duration: "30 min",
        activity: "Device-free lunch break",
    },
    DetoxBlock {
        time: "Evening",
        duration: "2 hours",
        activity: "No screens 1 hour before bed",
    },
    DetoxBlock {
        time: "Weekend",
        duration: "2 hours",
        activity: "Sunday digital detox",
    },
];

const DETOX_HIGH: [DetoxBlock; 4] = [
    DetoxBlock {
        time: "Morning",
        duration: "2 hours",
        activity: "No screens before 10 AM",
    },
    DetoxBlock {
        time: "Lunch",
        duration: "1 hour",
        activity: "Device-free meals",
    },
    DetoxBlock {
        time: "Evening",
        duration: "3 hours",
        activity: "Digital sunset after 8 PM",
    },
    DetoxBlock {
        time: "Weekend",
        duration: "4 hours",
        activity: "Screen-free Saturday morning",
    },
];

/// Detox schedule for a burnout level.
pub fn detox_schedule(level: BurnoutLevel) -> &'static [DetoxBlock] {
    match level {
        BurnoutLevel::None => &DETOX_NONE,
        BurnoutLevel::Low => &DETOX_LOW,
        BurnoutLevel::Medium => &DETOX_MEDIUM,
        BurnoutLevel::High => &DETOX_HIGH,
    }
}

/// One timed phase of a breathing exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BreathingPhase {
    pub phase: &'static str,
    pub seconds: u32,
}

/// A breathing exercise with the timings a client countdown needs.
#[derive(Debug, Clone, Serialize)]
pub struct BreathingTechnique {
    pub name: &'static str,
    pub description: &'static str,
    pub phases: Vec<BreathingPhase>,
    pub cycles: u32,
}

static BREATHING: Lazy<BreathingTechnique> = Lazy::new(|| BreathingTechnique {
    name: "4-7-8",
    description: "4-7-8 breathing technique for stress relief",
    phases: vec![
        BreathingPhase {
            phase: "inhale",
            seconds: 4,
        },
        BreathingPhase {
            phase: "hold",
            seconds: 7,
        },
        BreathingPhase {
            phase: "exhale",
            seconds: 8,
        },
    ],
    cycles: 5,
});

/// The 4-7-8 breathing exercise.
pub fn breathing_technique() -> &'static BreathingTechnique {
    &BREATHING
}

/// Wire response for `GET /api/wellness`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WellnessResponse {
    pub burnout_level: BurnoutLevel,
    pub detox_schedule: &'static [DetoxBlock],
    pub breathing: &'static BreathingTechnique,
}

/// Assemble the wellness payload for a burnout level.
pub fn wellness_for(level: BurnoutLevel) -> WellnessResponse {
    WellnessResponse {
        burnout_level: level,
        detox_schedule: detox_schedule(level),
        breathing: breathing_technique(),
    }
}
