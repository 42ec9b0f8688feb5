use crate::domain::a001_attribute_field;
use crate::domain::common::Origin;
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Определение категории товаров: подкатегории, бренды и набор атрибутов
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDefinition {
    pub name: String,
    #[serde(default)]
    pub subcategories: Vec<String>,
    #[serde(default)]
    pub brands: Vec<String>,
    /// Ключи атрибутов из реестра; пустой список означает "по умолчанию для домена"
    #[serde(default)]
    pub fields: Vec<String>,
    pub origin: Origin,
}

impl CategoryDefinition {
    /// Собрать определение из DTO, приведя списки к каноническому виду
    pub fn from_dto(dto: CategoryDto, origin: Origin) -> Self {
        let dto = dto.normalized();
        Self {
            name: dto.name,
            subcategories: dto.subcategories,
            brands: dto.brands,
            fields: dto.fields,
            origin,
        }
    }

    /// Запись для сохранения в хранилище (без origin)
    pub fn to_dto(&self) -> CategoryDto {
        CategoryDto {
            name: self.name.clone(),
            subcategories: self.subcategories.clone(),
            brands: self.brands.clone(),
            fields: self.fields.clone(),
        }
    }

    pub fn has_fields(&self) -> bool {
        !self.fields.is_empty()
    }

    pub fn is_builtin(&self) -> bool {
        self.origin == Origin::Builtin
    }

    /// Совпадение имени без учета регистра и крайних пробелов
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }

    /// Первый ключ, отсутствующий в реестре атрибутов
    pub fn first_unknown_field(&self) -> Option<&str> {
        self.fields
            .iter()
            .map(String::as_str)
            .find(|key| !a001_attribute_field::is_valid_key(key))
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Запрос на создание пользовательской категории; тот же формат хранится в key-value store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub name: String,
    #[serde(default)]
    pub subcategories: Vec<String>,
    #[serde(default)]
    pub brands: Vec<String>,
    #[serde(default)]
    pub fields: Vec<String>,
}

impl CategoryDto {
    /// Обрезать пробелы, убрать пустые строки и повторы
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            subcategories: clean_entries(self.subcategories),
            brands: clean_entries(self.brands),
            fields: clean_entries(self.fields),
        }
    }
}

/// Trim entries, drop blanks and later duplicates, keep first-seen order.
pub fn clean_entries(entries: Vec<String>) -> Vec<String> {
    let mut result: Vec<String> = Vec::with_capacity(entries.len());
    for entry in entries {
        let entry = entry.trim();
        if entry.is_empty() || result.iter().any(|e| e == entry) {
            continue;
        }
        result.push(entry.to_string());
    }
    result
}
