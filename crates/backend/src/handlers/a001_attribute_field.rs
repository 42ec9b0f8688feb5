use axum::Json;
use contracts::domain::a001_attribute_field::{self, AttributeField};

/// GET /api/taxonomy/fields
pub async fn list_all() -> Json<&'static [AttributeField]> {
    Json(a001_attribute_field::all_fields())
}
