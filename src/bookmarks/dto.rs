use serde::Deserialize;

/// Owner is never client-supplied; it is forced from the authenticated
/// identity on insert.
#[derive(Debug, Deserialize)]
pub struct CreateBookmarkRequest {
    pub title: String,
    pub description: Option<String>,
    pub link: String,
}

/// Patch with named optional fields; absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct EditBookmarkRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_fields_default_to_absent() {
        let patch: EditBookmarkRequest =
            serde_json::from_value(serde_json::json!({ "title": "Updated" })).unwrap();
        assert_eq!(patch.title.as_deref(), Some("Updated"));
        assert!(patch.description.is_none());
        assert!(patch.link.is_none());
    }

    #[test]
    fn create_ignores_client_supplied_owner() {
        // userId in the body has no field to land in.
        let req: CreateBookmarkRequest = serde_json::from_value(serde_json::json!({
            "title": "X",
            "link": "https://example.com",
            "userId": "2f4df7a2-3c7a-4b62-9d2f-0a8f4a1f2b11",
        }))
        .unwrap();
        assert_eq!(req.title, "X");
    }
}
