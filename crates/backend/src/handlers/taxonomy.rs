use axum::extract::{Query, State};
use axum::Json;
use contracts::shared::taxonomy::{ResolveQuery, ResolveResponse};

use crate::shared::taxonomy::{field_specs, resolve};
use crate::system::state::AppState;

/// GET /api/taxonomy/resolve?category=...
///
/// Форма характеристик для произвольного названия категории: найденное
/// определение (если есть), домен и набор полей с ограничениями.
pub async fn resolve_category(
    State(state): State<AppState>,
    Query(query): Query<ResolveQuery>,
) -> Json<ResolveResponse> {
    let store = state.categories.read().await;
    let resolution = resolve(&store, &query.category);
    let fields = field_specs(resolution.domain, resolution.definition.as_ref());

    Json(ResolveResponse {
        category: query.category,
        form_title: resolution.domain.display_name(),
        domain: resolution.domain,
        definition: resolution.definition,
        fields,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_category::store::tests::test_store;
    use crate::shared::data::kv_store::memory::MemoryKeyValueStore;
    use contracts::enums::specification_domain::SpecificationDomain;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_resolve_curated_category() {
        let state = AppState::new(test_store(Arc::new(MemoryKeyValueStore::new())).await);

        let Json(response) = resolve_category(
            State(state),
            Query(ResolveQuery {
                category: "WATCHES".into(),
            }),
        )
        .await;

        assert_eq!(response.domain, SpecificationDomain::Watch);
        assert_eq!(response.definition.map(|d| d.name).as_deref(), Some("Watches"));
        let keys: Vec<_> = response.fields.iter().map(|f| f.key).collect();
        assert_eq!(keys, vec!["movement", "bandMaterial"]);
        assert!(response.fields[0].required);
    }

    #[tokio::test]
    async fn test_resolve_serializes_for_ui() {
        let state = AppState::new(test_store(Arc::new(MemoryKeyValueStore::new())).await);

        let Json(response) = resolve_category(
            State(state),
            Query(ResolveQuery {
                category: "Yoga Mats & Fitness".into(),
            }),
        )
        .await;
        let body = serde_json::to_value(&response).unwrap();

        assert_eq!(body["domain"], "sports");
        assert_eq!(body["formTitle"], "Sports Specifications");
        assert!(body["definition"].is_null());
        assert_eq!(body["fields"][0]["key"], "sportType");
        assert_eq!(body["fields"][0]["input"]["kind"], "text");
    }
}
