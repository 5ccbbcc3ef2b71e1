// src/dtos/module.rs
use serde::{Deserialize, Serialize};

use crate::models::module::{ModuleCategory, ModuleStatus};

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateModuleRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: ModuleCategory,
    pub status: ModuleStatus,
    #[serde(default)]
    pub price_monthly: f64,
    #[serde(default)]
    pub price_yearly: f64,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UpdateModuleRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ModuleCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ModuleStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_monthly: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_yearly: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}
