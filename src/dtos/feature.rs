// src/dtos/feature.rs
use serde::{Deserialize, Serialize};

use crate::models::feature::{FeatureCategory, FeaturePriority, FeatureStatus};
use crate::services::feature_board::FeatureSort;

#[derive(Debug, Default, Deserialize)]
pub struct FeatureListQuery {
    /// A category name, or "all".
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub sort_by: FeatureSort,
}

fn default_icon() -> String {
    "dashboard".to_string()
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateFeatureRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: FeatureCategory,
    #[serde(default = "default_status")]
    pub status: FeatureStatus,
    #[serde(default = "default_priority")]
    pub priority: FeaturePriority,
    #[serde(default)]
    pub estimated_release: Option<String>,
    #[serde(default = "default_icon")]
    pub icon: String,
}

fn default_status() -> FeatureStatus {
    FeatureStatus::Planned
}

fn default_priority() -> FeaturePriority {
    FeaturePriority::Medium
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UpdateFeatureRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<FeatureCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<FeatureStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<FeaturePriority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_release: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}
