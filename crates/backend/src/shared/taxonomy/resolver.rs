use contracts::domain::a002_category::CategoryDefinition;
use contracts::enums::specification_domain::SpecificationDomain;
use contracts::shared::taxonomy::infer_domain;

use crate::domain::a002_category::CategoryStore;

/// Результат разрешения названия категории
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Определение из таксономии, если название совпало точно (без учета регистра)
    pub definition: Option<CategoryDefinition>,
    /// Домен всегда выводится из текста, независимо от найденного определения
    pub domain: SpecificationDomain,
}

/// Разрешить произвольный текст категории. Никогда не завершается ошибкой.
pub fn resolve(store: &CategoryStore, category_text: &str) -> Resolution {
    let definition = store
        .iter()
        .find(|def| def.matches_name(category_text))
        .cloned();
    let domain = infer_domain(category_text);

    if definition.is_none() && !category_text.trim().is_empty() {
        tracing::debug!(
            "Category '{}' is not in the taxonomy, domain inferred as {}",
            category_text,
            domain
        );
    }

    Resolution { definition, domain }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_category::store::tests::test_store;
    use crate::shared::data::kv_store::memory::MemoryKeyValueStore;
    use contracts::domain::a002_category::CategoryDto;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_exact_match_ignores_case() {
        let store = test_store(Arc::new(MemoryKeyValueStore::new())).await;

        let resolution = resolve(&store, "watches");

        assert_eq!(resolution.definition.unwrap().name, "Watches");
        assert_eq!(resolution.domain, SpecificationDomain::Watch);
    }

    #[tokio::test]
    async fn test_domain_is_independent_of_definition() {
        let mut store = test_store(Arc::new(MemoryKeyValueStore::new())).await;
        store
            .add(CategoryDto {
                name: "Home Watches Accessories".into(),
                fields: vec!["material".into()],
                ..Default::default()
            })
            .await
            .unwrap();

        let resolution = resolve(&store, "Home Watches Accessories");

        assert_eq!(
            resolution.definition.map(|d| d.name).as_deref(),
            Some("Home Watches Accessories")
        );
        assert_eq!(resolution.domain, SpecificationDomain::Watch);
    }

    #[tokio::test]
    async fn test_unknown_category() {
        let store = test_store(Arc::new(MemoryKeyValueStore::new())).await;

        let resolution = resolve(&store, "Home Watches");
        assert_eq!(resolution.definition, None);
        assert_eq!(resolution.domain, SpecificationDomain::Watch);

        let resolution = resolve(&store, "Garden Gnomes");
        assert_eq!(resolution.definition, None);
        assert_eq!(resolution.domain, SpecificationDomain::General);
    }

    #[tokio::test]
    async fn test_partial_name_is_not_a_match() {
        let store = test_store(Arc::new(MemoryKeyValueStore::new())).await;

        let resolution = resolve(&store, "Electronics & Gadgets");

        assert_eq!(resolution.definition, None);
        assert_eq!(resolution.domain, SpecificationDomain::Electronics);
    }
}
