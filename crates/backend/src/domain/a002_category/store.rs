use std::sync::Arc;

use contracts::domain::a002_category::{builtin_categories, CategoryDefinition, CategoryDto};
use contracts::domain::common::Origin;
use serde_json::Value;

use super::error::CategoryError;
use super::repository;
use crate::shared::data::kv_store::KeyValueStore;

/// Хранилище определений категорий: встроенные + пользовательские
///
/// Пользовательский список целиком лежит под одним ключом key-value store и
/// перезаписывается при каждом изменении. Несколько процессов над одной базой
/// не синхронизируются: побеждает последний записавший.
/// Записи, которые не удалось принять при загрузке, хранятся в `retained`
/// и сохраняются обратно без изменений.
pub struct CategoryStore {
    builtins: Vec<CategoryDefinition>,
    customs: Vec<CategoryDefinition>,
    retained: Vec<Value>,
    kv: Arc<dyn KeyValueStore>,
    storage_key: String,
}

impl CategoryStore {
    /// Инициализация со встроенной таксономией приложения
    pub async fn load(
        kv: Arc<dyn KeyValueStore>,
        storage_key: impl Into<String>,
    ) -> anyhow::Result<Self> {
        Self::load_with_builtins(builtin_categories(), kv, storage_key).await
    }

    /// Инициализация с произвольным набором встроенных категорий
    pub async fn load_with_builtins(
        builtins: Vec<CategoryDefinition>,
        kv: Arc<dyn KeyValueStore>,
        storage_key: impl Into<String>,
    ) -> anyhow::Result<Self> {
        let builtins = builtins
            .into_iter()
            .map(|mut def| {
                def.origin = Origin::Builtin;
                def
            })
            .collect();

        let mut store = Self {
            builtins,
            customs: Vec::new(),
            retained: Vec::new(),
            kv,
            storage_key: storage_key.into(),
        };
        store.reload().await?;
        Ok(store)
    }

    /// Перечитать пользовательские категории из хранилища
    ///
    /// Записи, нарушающие инварианты (дубликат имени, неизвестный ключ поля),
    /// пропускаются с предупреждением, но остаются в хранилище.
    pub async fn reload(&mut self) -> anyhow::Result<usize> {
        let stored = repository::load_custom(self.kv.as_ref(), &self.storage_key).await?;

        self.customs.clear();
        self.retained = stored.unreadable;
        for (record, raw) in stored.records {
            match self.validate_new(record) {
                Ok(def) => self.customs.push(def),
                Err(e) => {
                    tracing::warn!("Skipping stored custom category: {}", e);
                    self.retained.push(raw);
                }
            }
        }

        tracing::info!(
            "Category store loaded: {} builtin, {} custom, {} retained",
            self.builtins.len(),
            self.customs.len(),
            self.retained.len()
        );
        Ok(self.customs.len())
    }

    /// Встроенные в объявленном порядке, затем пользовательские в порядке добавления
    pub fn iter(&self) -> impl Iterator<Item = &CategoryDefinition> {
        self.builtins.iter().chain(self.customs.iter())
    }

    pub fn list_all(&self) -> Vec<CategoryDefinition> {
        self.iter().cloned().collect()
    }

    pub fn get_by_exact_name(&self, name: &str) -> Option<&CategoryDefinition> {
        self.iter().find(|def| def.name == name)
    }

    #[cfg(test)]
    pub fn custom_count(&self) -> usize {
        self.customs.len()
    }

    /// Добавить пользовательскую категорию и сохранить весь список
    ///
    /// Имя уникально без учета регистра и крайних пробелов: "watches" отклоняется
    /// рядом со встроенной "Watches". При ошибке записи состояние в памяти не меняется.
    pub async fn add(&mut self, dto: CategoryDto) -> Result<CategoryDefinition, CategoryError> {
        let def = self.validate_new(dto)?;

        let mut next = self.customs.clone();
        next.push(def.clone());
        self.persist(&next).await?;
        self.customs = next;

        tracing::info!(
            "Custom category '{}' added ({} fields, {} subcategories, {} brands)",
            def.name,
            def.fields.len(),
            def.subcategories.len(),
            def.brands.len()
        );
        Ok(def)
    }

    /// Удалить пользовательскую категорию; встроенные не удаляются
    pub async fn remove(&mut self, name: &str) -> Result<CategoryDefinition, CategoryError> {
        if self.builtins.iter().any(|def| def.name == name) {
            return Err(CategoryError::BuiltinCategoryImmutable(name.to_string()));
        }
        let position = self
            .customs
            .iter()
            .position(|def| def.name == name)
            .ok_or_else(|| CategoryError::CategoryNotFound(name.to_string()))?;

        let mut next = self.customs.clone();
        let removed = next.remove(position);
        self.persist(&next).await?;
        self.customs = next;

        tracing::info!("Custom category '{}' removed", removed.name);
        Ok(removed)
    }

    fn validate_new(&self, dto: CategoryDto) -> Result<CategoryDefinition, CategoryError> {
        let def = CategoryDefinition::from_dto(dto, Origin::Custom);

        if def.name.is_empty() {
            return Err(CategoryError::EmptyCategoryName);
        }
        if self.iter().any(|existing| existing.matches_name(&def.name)) {
            return Err(CategoryError::DuplicateCategoryName(def.name));
        }
        if let Some(key) = def.first_unknown_field() {
            return Err(CategoryError::UnknownFieldKey(key.to_string()));
        }
        Ok(def)
    }

    async fn persist(&self, customs: &[CategoryDefinition]) -> Result<(), CategoryError> {
        repository::save_custom(self.kv.as_ref(), &self.storage_key, customs, &self.retained)
            .await
            .map_err(|e| {
                tracing::error!("Failed to persist custom categories: {:#}", e);
                CategoryError::PersistenceWriteFailed(format!("{:#}", e))
            })
    }
}
