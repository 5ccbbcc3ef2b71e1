use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleCategory {
    Analytics,
    Automation,
    Integration,
    Premium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleStatus {
    Available,
    ComingSoon,
    Beta,
}

/// Purchasable add-on listed on the pricing pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: ModuleCategory,
    pub status: ModuleStatus,
    #[serde(default)]
    pub price_monthly: f64,
    #[serde(default)]
    pub price_yearly: f64,
    #[serde(default, deserialize_with = "string_list_or_empty")]
    pub features: Vec<String>,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

// Rows written by older admin screens hold `features` as a string or null.
fn string_list_or_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn module_json(features: Value) -> Value {
        json!({
            "id": Uuid::new_v4(),
            "title": "Forecasting",
            "category": "analytics",
            "status": "coming-soon",
            "price_monthly": 9.99,
            "price_yearly": 99.0,
            "features": features,
            "icon": "forecast"
        })
    }

    #[test]
    fn non_array_features_read_as_empty() {
        for raw in [json!(null), json!("a,b"), json!({ "a": 1 })] {
            let m: Module = serde_json::from_value(module_json(raw)).unwrap();
            assert!(m.features.is_empty());
        }
    }

    #[test]
    fn array_features_are_kept() {
        let m: Module = serde_json::from_value(module_json(json!(["Demand", "Trends"]))).unwrap();
        assert_eq!(m.features, ["Demand", "Trends"]);
        assert_eq!(m.status, ModuleStatus::ComingSoon);
    }
}
