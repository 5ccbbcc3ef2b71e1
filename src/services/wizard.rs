//! Onboarding wizard progress as an explicit state value.
//!
//! The client holds the current [`OnboardingProgress`] and posts it back with
//! an [`OnboardingEvent`]; [`OnboardingProgress::apply`] returns the next
//! state or the reason the transition is not allowed.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::services::taxonomy::IndustryKey;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnboardingStep {
    #[default]
    Industry,
    Setup,
    Branch,
    Complete,
}

impl OnboardingStep {
    const ORDER: [OnboardingStep; 4] = [
        OnboardingStep::Industry,
        OnboardingStep::Setup,
        OnboardingStep::Branch,
        OnboardingStep::Complete,
    ];

    /// 1-based position in the wizard.
    pub fn number(self) -> usize {
        Self::ORDER.iter().position(|s| *s == self).map_or(1, |i| i + 1)
    }

    fn next(self) -> Option<Self> {
        Self::ORDER.get(self.number()).copied()
    }

    fn previous(self) -> Option<Self> {
        self.number().checked_sub(2).and_then(|i| Self::ORDER.get(i).copied())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "industry", rename_all = "snake_case")]
pub enum OnboardingEvent {
    SelectIndustry(IndustryKey),
    /// Seeding created something, or an import finished or was skipped.
    SetupFinished,
    BranchCreated,
    Next,
    Back,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("step {0:?} must be completed before continuing")]
    StepIncomplete(OnboardingStep),
    #[error("already at the first step")]
    AtFirstStep,
    #[error("onboarding is already complete")]
    Finished,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingProgress {
    pub step: OnboardingStep,
    #[serde(default)]
    pub completed_steps: BTreeSet<OnboardingStep>,
    #[serde(default)]
    pub industry: Option<IndustryKey>,
}

impl OnboardingProgress {
    pub fn is_completed(&self, step: OnboardingStep) -> bool {
        self.completed_steps.contains(&step)
    }

    pub fn percent(&self) -> u8 {
        let total = OnboardingStep::ORDER.len() as f64;
        ((self.step.number() as f64 / total) * 100.0).round() as u8
    }

    pub fn apply(&self, event: OnboardingEvent) -> Result<Self, TransitionError> {
        if self.step == OnboardingStep::Complete {
            return Err(TransitionError::Finished);
        }
        let mut next = self.clone();
        match event {
            OnboardingEvent::SelectIndustry(industry) => {
                next.industry = Some(industry);
                next.completed_steps.insert(OnboardingStep::Industry);
            }
            OnboardingEvent::SetupFinished => {
                next.completed_steps.insert(OnboardingStep::Setup);
            }
            OnboardingEvent::BranchCreated => {
                next.completed_steps.insert(OnboardingStep::Branch);
            }
            OnboardingEvent::Next => {
                if !self.is_completed(self.step) {
                    return Err(TransitionError::StepIncomplete(self.step));
                }
                if let Some(step) = self.step.next() {
                    next.step = step;
                }
            }
            OnboardingEvent::Back => {
                next.step = self.step.previous().ok_or(TransitionError::AtFirstStep)?;
            }
        }
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_reaches_complete() {
        let p = OnboardingProgress::default();
        assert_eq!(p.percent(), 25);

        let p = p.apply(OnboardingEvent::SelectIndustry(IndustryKey::Grocery)).unwrap();
        let p = p.apply(OnboardingEvent::Next).unwrap();
        assert_eq!(p.step, OnboardingStep::Setup);
        assert_eq!(p.industry, Some(IndustryKey::Grocery));

        let p = p.apply(OnboardingEvent::SetupFinished).unwrap();
        let p = p.apply(OnboardingEvent::Next).unwrap();
        let p = p.apply(OnboardingEvent::BranchCreated).unwrap();
        let p = p.apply(OnboardingEvent::Next).unwrap();
        assert_eq!(p.step, OnboardingStep::Complete);
        assert_eq!(p.percent(), 100);
        assert_eq!(p.apply(OnboardingEvent::Back), Err(TransitionError::Finished));
    }

    #[test]
    fn next_requires_current_step_completed() {
        let p = OnboardingProgress::default();
        assert_eq!(
            p.apply(OnboardingEvent::Next),
            Err(TransitionError::StepIncomplete(OnboardingStep::Industry))
        );
    }

    #[test]
    fn back_from_first_step_is_rejected() {
        let p = OnboardingProgress::default();
        assert_eq!(p.apply(OnboardingEvent::Back), Err(TransitionError::AtFirstStep));

        let p = OnboardingProgress { step: OnboardingStep::Branch, ..Default::default() };
        assert_eq!(p.apply(OnboardingEvent::Back).unwrap().step, OnboardingStep::Setup);
    }

    #[test]
    fn events_deserialize_from_tagged_json() {
        let e: OnboardingEvent =
            serde_json::from_str(r#"{"type":"select_industry","industry":"retail"}"#).unwrap();
        assert_eq!(e, OnboardingEvent::SelectIndustry(IndustryKey::Retail));
        let e: OnboardingEvent = serde_json::from_str(r#"{"type":"next"}"#).unwrap();
        assert_eq!(e, OnboardingEvent::Next);
    }
}
