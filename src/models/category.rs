use serde::Serialize;
use uuid::Uuid;

/// Row written when a category is created.
#[derive(Debug, Serialize)]
pub struct NewCategory<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub user_id: Uuid,
}
