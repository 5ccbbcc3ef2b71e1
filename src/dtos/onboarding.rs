// src/dtos/onboarding.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::services::taxonomy::{CategorySuggestion, IndustryKey};
use crate::services::wizard::{OnboardingEvent, OnboardingProgress};

#[derive(Debug, Deserialize)]
pub struct SeedRequest {
    /// Industry key; unknown values seed nothing.
    pub industry: String,
    pub branch_id: Uuid,
    /// Suggested category names to keep; all suggestions when absent.
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    #[serde(default)]
    pub custom_categories: Vec<String>,
    #[serde(default)]
    pub industry_specification: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CustomCategoriesRequest {
    pub names: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub industry: IndustryKey,
    pub label: &'static str,
    pub categories: &'static [CategorySuggestion],
}

#[derive(Debug, Deserialize)]
pub struct ProgressRequest {
    #[serde(default)]
    pub progress: OnboardingProgress,
    pub event: OnboardingEvent,
}

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub step_number: usize,
    pub percent: u8,
    pub progress: OnboardingProgress,
}

impl From<OnboardingProgress> for ProgressResponse {
    fn from(progress: OnboardingProgress) -> Self {
        Self {
            step_number: progress.step.number(),
            percent: progress.percent(),
            progress,
        }
    }
}
