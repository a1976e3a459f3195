use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::categories::repo::{Category, FinanceType};
use crate::transactions::repo::Transaction;

#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    pub amount: f64,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: FinanceType,
    /// Category id; the association is optional.
    pub category: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct EditTransactionRequest {
    pub amount: Option<f64>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<FinanceType>,
    pub category: Option<Uuid>,
}

/// Transaction with its category details embedded, the shape the read
/// endpoints return.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount: f64,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: FinanceType,
    pub category: Option<Category>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl TransactionResponse {
    pub fn from_parts(t: Transaction, category: Option<Category>) -> Self {
        Self {
            id: t.id,
            user_id: t.user_id,
            amount: t.amount,
            description: t.description,
            kind: t.kind,
            category,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_patch_leaves_absent_fields_unset() {
        let patch: EditTransactionRequest =
            serde_json::from_value(serde_json::json!({ "amount": 12.5 })).unwrap();
        assert_eq!(patch.amount, Some(12.5));
        assert!(patch.description.is_none());
        assert!(patch.kind.is_none());
        assert!(patch.category.is_none());
    }

    #[test]
    fn category_field_takes_an_id() {
        let id = Uuid::new_v4();
        let patch: EditTransactionRequest =
            serde_json::from_value(serde_json::json!({ "category": id })).unwrap();
        assert_eq!(patch.category, Some(id));
    }
}
