use contracts::domain::a002_category::{CategoryDefinition, CategoryDto};
use serde_json::Value;

use crate::shared::data::kv_store::KeyValueStore;

/// Содержимое хранилища: распознанные записи и нераспознанные в исходном виде
///
/// Нераспознанные записи не попадают в таксономию, но пишутся обратно при
/// каждом сохранении, чтобы чужие или устаревшие данные не терялись.
#[derive(Debug, Default)]
pub struct StoredCategories {
    pub records: Vec<(CategoryDto, Value)>,
    pub unreadable: Vec<Value>,
}

/// Прочитать сохраненный список пользовательских категорий
///
/// Отсутствующий ключ - пустой список. Каждая запись разбирается отдельно:
/// испорченная запись не скрывает остальные.
pub async fn load_custom(kv: &dyn KeyValueStore, key: &str) -> anyhow::Result<StoredCategories> {
    let Some(raw) = kv.get(key).await? else {
        tracing::info!("No custom categories stored under '{}'", key);
        return Ok(StoredCategories::default());
    };

    let items = match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Array(items)) => items,
        Ok(other) => {
            tracing::warn!("Stored custom categories under '{}' are not a JSON array", key);
            vec![other]
        }
        Err(e) => {
            tracing::warn!(
                "Stored custom categories under '{}' are not valid JSON, keeping raw text: {}",
                key,
                e
            );
            vec![Value::String(raw)]
        }
    };

    let mut stored = StoredCategories::default();
    for item in items {
        match serde_json::from_value::<CategoryDto>(item.clone()) {
            Ok(dto) => stored.records.push((dto, item)),
            Err(e) => {
                tracing::warn!("Unreadable custom category record kept as is: {}", e);
                stored.unreadable.push(item);
            }
        }
    }
    Ok(stored)
}

/// Перезаписать весь список: категории, затем отложенные записи без изменений
pub async fn save_custom(
    kv: &dyn KeyValueStore,
    key: &str,
    items: &[CategoryDefinition],
    retained: &[Value],
) -> anyhow::Result<()> {
    let mut records = Vec::with_capacity(items.len() + retained.len());
    for item in items {
        records.push(serde_json::to_value(item.to_dto())?);
    }
    records.extend(retained.iter().cloned());
    let json = serde_json::to_string(&records)?;
    kv.put(key, &json).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::kv_store::memory::MemoryKeyValueStore;
    use contracts::domain::common::Origin;
    use serde_json::json;

    #[tokio::test]
    async fn test_missing_key_is_empty() {
        let kv = MemoryKeyValueStore::new();
        let stored = load_custom(&kv, "customCategories").await.unwrap();
        assert!(stored.records.is_empty());
        assert!(stored.unreadable.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_json_kept_as_raw_text() {
        let kv = MemoryKeyValueStore::with_entry("customCategories", "{not json");
        let stored = load_custom(&kv, "customCategories").await.unwrap();

        assert!(stored.records.is_empty());
        assert_eq!(stored.unreadable, vec![Value::String("{not json".into())]);
    }

    #[tokio::test]
    async fn test_bad_record_does_not_hide_others() {
        let kv = MemoryKeyValueStore::with_entry(
            "customCategories",
            r#"[{"name":"Furniture","fields":["material"]},{"name":5}]"#,
        );
        let stored = load_custom(&kv, "customCategories").await.unwrap();

        assert_eq!(stored.records.len(), 1);
        assert_eq!(stored.records[0].0.name, "Furniture");
        assert_eq!(stored.unreadable, vec![json!({ "name": 5 })]);
    }

    #[tokio::test]
    async fn test_save_appends_retained_records() {
        let kv = MemoryKeyValueStore::new();
        let def = CategoryDefinition::from_dto(
            CategoryDto {
                name: "Toys".into(),
                ..Default::default()
            },
            Origin::Custom,
        );

        save_custom(&kv, "customCategories", &[def], &[json!({ "name": 5 })])
            .await
            .unwrap();
        let raw: Value = serde_json::from_str(&kv.raw("customCategories").unwrap()).unwrap();

        assert_eq!(raw[0]["name"], "Toys");
        assert_eq!(raw[1], json!({ "name": 5 }));
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let kv = MemoryKeyValueStore::new();
        let def = CategoryDefinition::from_dto(
            CategoryDto {
                name: "Furniture".into(),
                subcategories: vec!["Sofas".into()],
                brands: vec!["IKEA".into()],
                fields: vec!["material".into()],
            },
            Origin::Custom,
        );

        save_custom(&kv, "customCategories", &[def.clone()], &[]).await.unwrap();
        let loaded = load_custom(&kv, "customCategories").await.unwrap();

        let dtos: Vec<CategoryDto> = loaded.records.into_iter().map(|(dto, _)| dto).collect();
        assert_eq!(dtos, vec![def.to_dto()]);
    }

    #[tokio::test]
    async fn test_records_without_lists_load() {
        let kv = MemoryKeyValueStore::with_entry("customCategories", r#"[{"name":"Toys"}]"#);
        let loaded = load_custom(&kv, "customCategories").await.unwrap().records;

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].0.name, "Toys");
        assert!(loaded[0].0.fields.is_empty());
    }
}
