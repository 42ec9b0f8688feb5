use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Черновик товара, который оператор заполняет в форме
///
/// Живет от открытия формы до успешной отправки или отмены.
/// Поля, не относящиеся к таксономии (цена, остатки, медиа), лежат в `extra`
/// и проходят через сборку payload без изменений.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub sub_category: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ProductDraft {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            ..Default::default()
        }
    }

    pub fn with_sub_category(mut self, sub_category: impl Into<String>) -> Self {
        self.sub_category = sub_category.into();
        self
    }

    /// Установить значение атрибута (каждое нажатие клавиши в форме)
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(key, value);
        self
    }

    pub fn clear_attribute(&mut self, key: &str) {
        self.attributes.remove(key);
    }
}

/// Итоговое тело запроса к Product API после очистки атрибутов
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub category: String,
    pub sub_category: String,
    pub attributes: BTreeMap<String, String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
