//! Recommended next steps shown beside the screening result.
//!
//! Deliberately separate from the copilot's "What to do next" list: the two
//! surfaces have their own published wording.

use crate::domain::triage::RiskTier;

pub const NEXT_STEPS_LOW: [&str; 3] = [
    "Monitor for changes over the next 48–72 hours.",
    "Avoid scratching and keep the area clean and dry.",
    "If it persists beyond 1–2 weeks, consider a clinic visit.",
];

pub const NEXT_STEPS_MEDIUM: [&str; 3] = [
    "Consider consulting a pharmacist or GP within the next few days.",
    "Avoid new skincare products; use gentle cleanser and moisturiser.",
    "If spreading or worsening, seek medical assessment sooner.",
];

pub const NEXT_STEPS_HIGH: [&str; 3] = [
    "Seek medical assessment soon (same day / within 24 hours if possible).",
    "If severe pain, fever, fast spread, or facial swelling: seek urgent care.",
    "Avoid applying unknown creams; keep the area protected and clean.",
];

/// Panel items for a tier, in display order.
pub fn next_steps(tier: RiskTier) -> &'static [&'static str; 3] {
    match tier {
        RiskTier::Low => &NEXT_STEPS_LOW,
        RiskTier::Medium => &NEXT_STEPS_MEDIUM,
        RiskTier::High => &NEXT_STEPS_HIGH,
    }
}
