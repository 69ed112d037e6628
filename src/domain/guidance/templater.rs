//! Guidance Templater - deterministic copilot replies.
//!
//! Every reply has the same four sections. Only the tier selects content; the
//! user's question is echoed back but never changes the advice.

use serde::Serialize;

use crate::domain::triage::RiskTier;

use super::errors::GuidanceError;

const MEANING: &str =
    "This is not a diagnosis. The categories are AI-assisted screening signals and may be inaccurate.";

/// Copilot "What to do next" items for a High tier.
pub const COPILOT_TODO_HIGH: [&str; 3] = [
    "Seek medical assessment soon (same day / within 24 hours if possible).",
    "Avoid applying unknown creams; keep the area clean and protected.",
    "If symptoms worsen quickly, seek urgent care.",
];

/// Copilot "What to do next" items for a Medium tier.
pub const COPILOT_TODO_MEDIUM: [&str; 3] = [
    "Monitor closely and consider seeing a GP/pharmacist within a few days.",
    "Avoid new skincare products; use gentle cleanser/moisturiser.",
    "If spreading or persistent beyond 1–2 weeks, get checked.",
];

/// Copilot "What to do next" items for a Low tier.
pub const COPILOT_TODO_LOW: [&str; 3] = [
    "Monitor for changes over 48–72 hours.",
    "Avoid scratching; keep the area clean and dry.",
    "If it persists or worsens, consider a clinic visit.",
];

const WHEN_TO_ACT_HIGH: &str =
    "Act soon: severe pain, fever, fast spread, facial swelling, or pus → urgent care.";
const WHEN_TO_ACT_DEFAULT: &str =
    "If pain increases, it spreads rapidly, or you feel unwell → seek medical help.";

/// A structured advisory reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuidanceMessage {
    pub detected: String,
    pub meaning: String,
    pub todo: Vec<String>,
    pub when_to_act: String,
    pub echo: Option<String>,
}

impl GuidanceMessage {
    /// Renders the reply as the chat panel shows it.
    pub fn to_markdown(&self) -> String {
        let bullets = self
            .todo
            .iter()
            .map(|item| format!("- {}", item))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "**What we detected**\n{}\n\n\
             **What it could mean (not diagnosis)**\n{}\n\n\
             **What to do next**\n{}\n\n\
             **When to act**\n{}",
            self.detected, self.meaning, bullets, self.when_to_act
        )
    }
}

/// Stateless reply composer.
pub struct GuidanceTemplater;

impl GuidanceTemplater {
    /// Composes the reply for a tier and an optional user question.
    pub fn respond(tier: RiskTier, user_text: Option<&str>) -> GuidanceMessage {
        GuidanceMessage {
            detected: format!(
                "Based on your screening flow, your current risk level is: {}.",
                tier
            ),
            meaning: MEANING.to_string(),
            todo: Self::todo(tier).iter().map(|s| s.to_string()).collect(),
            when_to_act: Self::when_to_act(tier).to_string(),
            echo: Self::echo(user_text),
        }
    }

    /// Like [`respond`](Self::respond) but takes the tier as a wire label.
    ///
    /// # Errors
    ///
    /// - `UnknownRiskTier` for anything other than `Low`, `Medium` or `High`
    pub fn respond_to_label(
        tier_label: &str,
        user_text: Option<&str>,
    ) -> Result<GuidanceMessage, GuidanceError> {
        let tier: RiskTier = tier_label.parse()?;
        Ok(Self::respond(tier, user_text))
    }

    pub fn todo(tier: RiskTier) -> &'static [&'static str; 3] {
        match tier {
            RiskTier::High => &COPILOT_TODO_HIGH,
            RiskTier::Medium => &COPILOT_TODO_MEDIUM,
            RiskTier::Low => &COPILOT_TODO_LOW,
        }
    }

    pub fn when_to_act(tier: RiskTier) -> &'static str {
        match tier {
            RiskTier::High => WHEN_TO_ACT_HIGH,
            RiskTier::Medium | RiskTier::Low => WHEN_TO_ACT_DEFAULT,
        }
    }

    fn echo(user_text: Option<&str>) -> Option<String> {
        user_text
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(|text| format!("You asked: \"{}\"", text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detected_interpolates_tier_name() {
        let reply = GuidanceTemplater::respond(RiskTier::Medium, None);
        assert_eq!(
            reply.detected,
            "Based on your screening flow, your current risk level is: Medium."
        );
    }

    #[test]
    fn meaning_is_tier_independent() {
        let meanings: Vec<_> = RiskTier::ALL
            .into_iter()
            .map(|tier| GuidanceTemplater::respond(tier, None).meaning)
            .collect();
        assert!(meanings.iter().all(|m| m == MEANING));
    }

    #[test]
    fn high_tier_todo_matches_copy() {
        let reply = GuidanceTemplater::respond(RiskTier::High, None);
        assert_eq!(
            reply.todo,
            vec![
                "Seek medical assessment soon (same day / within 24 hours if possible).",
                "Avoid applying unknown creams; keep the area clean and protected.",
                "If symptoms worsen quickly, seek urgent care.",
            ]
        );
    }

    #[test]
    fn medium_tier_todo_matches_copy() {
        let reply = GuidanceTemplater::respond(RiskTier::Medium, None);
        assert_eq!(
            reply.todo,
            vec![
                "Monitor closely and consider seeing a GP/pharmacist within a few days.",
                "Avoid new skincare products; use gentle cleanser/moisturiser.",
                "If spreading or persistent beyond 1–2 weeks, get checked.",
            ]
        );
    }

    #[test]
    fn low_tier_todo_matches_copy() {
        let reply = GuidanceTemplater::respond(RiskTier::Low, None);
        assert_eq!(
            reply.todo,
            vec![
                "Monitor for changes over 48–72 hours.",
                "Avoid scratching; keep the area clean and dry.",
                "If it persists or worsens, consider a clinic visit.",
            ]
        );
    }

    #[test]
    fn when_to_act_escalates_only_for_high() {
        assert_eq!(GuidanceTemplater::when_to_act(RiskTier::High), WHEN_TO_ACT_HIGH);
        assert_eq!(GuidanceTemplater::when_to_act(RiskTier::Medium), WHEN_TO_ACT_DEFAULT);
        assert_eq!(GuidanceTemplater::when_to_act(RiskTier::Low), WHEN_TO_ACT_DEFAULT);
    }

    #[test]
    fn echo_absent_for_empty_or_blank_text() {
        assert_eq!(GuidanceTemplater::respond(RiskTier::High, Some("")).echo, None);
        assert_eq!(GuidanceTemplater::respond(RiskTier::High, Some("  ")).echo, None);
        assert_eq!(GuidanceTemplater::respond(RiskTier::High, None).echo, None);
    }

    #[test]
    fn echo_wraps_trimmed_text() {
        let reply = GuidanceTemplater::respond(RiskTier::Low, Some("  hi "));
        assert_eq!(reply.echo.as_deref(), Some("You asked: \"hi\""));
    }

    #[test]
    fn same_input_gives_same_reply() {
        let a = GuidanceTemplater::respond(RiskTier::High, Some("Is this urgent?"));
        let b = GuidanceTemplater::respond(RiskTier::High, Some("Is this urgent?"));
        assert_eq!(a, b);
    }

    #[test]
    fn respond_to_label_rejects_unknown_tier() {
        let err = GuidanceTemplater::respond_to_label("Unknown", Some("hi")).unwrap_err();
        assert!(matches!(err, GuidanceError::UnknownRiskTier(_)));
    }

    #[test]
    fn respond_to_label_accepts_known_tiers() {
        let reply = GuidanceTemplater::respond_to_label("Low", None).unwrap();
        assert_eq!(reply, GuidanceTemplater::respond(RiskTier::Low, None));
    }

    #[test]
    fn markdown_contains_all_sections_and_bullets() {
        let text = GuidanceTemplater::respond(RiskTier::High, None).to_markdown();

        assert!(text.starts_with("**What we detected**\nBased on your screening flow"));
        assert!(text.contains("**What it could mean (not diagnosis)**\nThis is not a diagnosis."));
        assert!(text.contains("**What to do next**\n- Seek medical assessment soon"));
        assert!(text.contains("\n- If symptoms worsen quickly, seek urgent care.\n\n"));
        assert!(text.ends_with(&format!("**When to act**\n{}", WHEN_TO_ACT_HIGH)));
    }
}
