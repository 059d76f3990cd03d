//! Demo inventory seeded into a freshly created index.

use search_admin_shared::Document;

/// The demo documents written after a new index is created.
///
/// Three small inventory records covering every scalar type the document
/// model supports, so the verification read exercises strings, integers
/// and booleans.
pub fn demo_inventory() -> Vec<Document> {
    vec![
        Document::new("dummy_1")
            .with_field("item", "Laptop")
            .with_field("brand", "XYZ")
            .with_field("price", 1200i64)
            .with_field("in_stock", true),
        Document::new("dummy_2")
            .with_field("item", "Mouse")
            .with_field("brand", "ABC")
            .with_field("price", 25i64)
            .with_field("in_stock", false),
        Document::new("dummy_3")
            .with_field("item", "Keyboard")
            .with_field("brand", "PQR")
            .with_field("price", 75i64)
            .with_field("in_stock", true),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use search_admin_shared::FieldValue;
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn test_demo_inventory_ids_are_unique() {
        let documents = demo_inventory();
        let ids: HashSet<&str> = documents.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids.len(), documents.len());
    }

    #[test]
    fn test_demo_inventory_field_types() {
        let documents = demo_inventory();
        assert_eq!(documents.len(), 3);

        let laptop = &documents[0];
        assert_eq!(laptop.id, "dummy_1");
        assert_eq!(laptop.field("price"), Some(&FieldValue::Integer(1200)));
        assert_eq!(laptop.field("in_stock"), Some(&FieldValue::Bool(true)));
        assert_eq!(
            laptop.to_source(),
            json!({"item": "Laptop", "brand": "XYZ", "price": 1200, "in_stock": true})
        );
    }
}
