use serde::Deserialize;

use crate::categories::repo::FinanceType;

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
    #[serde(rename = "type")]
    pub kind: FinanceType,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditCategoryRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<FinanceType>,
    pub keywords: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

/// Query string filters for the list endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryFilter {
    #[serde(rename = "type")]
    pub kind: Option<FinanceType>,
    pub is_active: Option<bool>,
}
