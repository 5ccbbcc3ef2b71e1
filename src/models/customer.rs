use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub municipality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl CustomerAddress {
    /// Reads an address stored either as a JSON object or as a string holding
    /// encoded JSON. Anything unreadable yields `None`.
    pub fn parse(raw: &Value) -> Option<Self> {
        match raw {
            Value::Object(_) => serde_json::from_value(raw.clone()).ok(),
            Value::String(s) => serde_json::from_str(s).ok(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    #[serde(default)]
    pub user_id: Option<Uuid>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub legal_name: Option<String>,
    #[serde(default)]
    pub commercial_name: Option<String>,
    #[serde(default)]
    pub company_number: Option<String>,
    #[serde(default)]
    pub municipality: Option<String>,
    #[serde(default)]
    pub billing_address: Option<Value>,
    #[serde(default)]
    pub delivery_address: Option<Value>,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Customer {
    pub fn billing(&self) -> Option<CustomerAddress> {
        self.billing_address.as_ref().and_then(CustomerAddress::parse)
    }

    /// Explicit municipality, else the one from the billing address.
    pub fn municipality(&self) -> String {
        if let Some(m) = self.municipality.as_deref().filter(|m| !m.is_empty()) {
            return m.to_string();
        }
        self.billing()
            .and_then(|a| a.municipality)
            .unwrap_or_default()
    }

    /// `"{postal_code} {municipality}"` when both are known, else whichever is.
    pub fn postal_code_and_municipality(&self) -> String {
        let municipality = self.municipality();
        let postal = self
            .billing()
            .and_then(|a| a.postal_code)
            .filter(|p| !p.is_empty());
        match postal {
            Some(p) if !municipality.is_empty() => format!("{p} {municipality}"),
            _ => municipality,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn customer(municipality: Option<&str>, billing: Option<Value>) -> Customer {
        Customer {
            id: Uuid::new_v4(),
            user_id: None,
            name: "Acme".into(),
            email: "info@acme.be".into(),
            phone: None,
            mobile: None,
            legal_name: None,
            commercial_name: None,
            company_number: None,
            municipality: municipality.map(str::to_string),
            billing_address: billing,
            delivery_address: None,
            comments: None,
            created_at: None,
        }
    }

    #[test]
    fn municipality_prefers_explicit_field() {
        let c = customer(Some("Gent"), Some(json!({ "municipality": "Brugge" })));
        assert_eq!(c.municipality(), "Gent");
    }

    #[test]
    fn municipality_reads_string_encoded_address() {
        let c = customer(None, Some(json!(r#"{"postal_code":"9000","municipality":"Gent"}"#)));
        assert_eq!(c.municipality(), "Gent");
        assert_eq!(c.postal_code_and_municipality(), "9000 Gent");
    }

    #[test]
    fn broken_address_yields_empty() {
        let c = customer(None, Some(json!("{not json")));
        assert_eq!(c.municipality(), "");
        assert_eq!(c.postal_code_and_municipality(), "");
    }

    #[test]
    fn null_name_and_email_decode_as_empty() {
        let c: Customer = serde_json::from_value(json!({
            "id": Uuid::new_v4(),
            "name": null,
            "email": null,
        }))
        .unwrap();
        assert_eq!(c.name, "");
        assert_eq!(c.email, "");
    }

    #[test]
    fn postal_code_joins_explicit_municipality() {
        let c = customer(Some("Antwerpen"), Some(json!({ "postal_code": "2000" })));
        assert_eq!(c.postal_code_and_municipality(), "2000 Antwerpen");

        let c = customer(Some("Antwerpen"), None);
        assert_eq!(c.postal_code_and_municipality(), "Antwerpen");
    }
}
