use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureCategory {
    Optimization,
    Premium,
    Analytics,
    Integration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureStatus {
    Planned,
    InDevelopment,
    Released,
}

impl FeatureStatus {
    /// Board weight: work in progress first, shipped work last.
    pub fn rank(self) -> u8 {
        match self {
            FeatureStatus::InDevelopment => 3,
            FeatureStatus::Planned => 2,
            FeatureStatus::Released => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeaturePriority {
    Low,
    Medium,
    High,
}

impl FeaturePriority {
    pub fn rank(self) -> u8 {
        match self {
            FeaturePriority::High => 3,
            FeaturePriority::Medium => 2,
            FeaturePriority::Low => 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: FeatureCategory,
    pub status: FeatureStatus,
    pub priority: FeaturePriority,
    #[serde(default)]
    pub estimated_release: Option<String>,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureVote {
    pub feature_id: Uuid,
    #[serde(default)]
    pub user_id: Option<Uuid>,
    pub voted: bool,
}
