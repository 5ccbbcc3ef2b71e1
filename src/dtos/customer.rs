// src/dtos/customer.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::customer::{Customer, CustomerAddress};
use crate::services::customer_view::{SortDirection, SortKey};

pub const DEFAULT_PAGE_SIZE: usize = 12;

#[derive(Debug, Default, Deserialize)]
pub struct CustomerListQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub sort: SortKey,
    #[serde(default)]
    pub direction: SortDirection,
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub page_size: Option<usize>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateCustomerRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub legal_name: Option<String>,
    #[serde(default)]
    pub commercial_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub company_number: Option<String>,
    #[serde(default)]
    pub municipality: Option<String>,
    #[serde(default)]
    pub billing_address: Option<CustomerAddress>,
    #[serde(default)]
    pub delivery_address: Option<CustomerAddress>,
    #[serde(default, skip_serializing)]
    pub same_as_billing: bool,
    #[serde(default)]
    pub comments: Option<String>,
}

impl CreateCustomerRequest {
    /// Display name, falling back to the legal then the commercial name.
    pub fn resolved_name(&self) -> Option<String> {
        [&self.name, &self.legal_name, &self.commercial_name]
            .into_iter()
            .flatten()
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
            .map(str::to_string)
    }
}

/// Partial update; absent fields are left untouched.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UpdateCustomerRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commercial_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub municipality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<CustomerAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<CustomerAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    #[serde(flatten)]
    pub customer: Customer,
    pub location: String,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            location: customer.postal_code_and_municipality(),
            customer,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CustomerPageResponse {
    pub rows: Vec<CustomerResponse>,
    pub total_pages: usize,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub id: Uuid,
    pub deleted: bool,
}
