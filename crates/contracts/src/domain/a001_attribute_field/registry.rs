use serde::Serialize;

/// Способ ввода и ограничения значения атрибута
///
/// Один дескриптор на ключ заменяет отдельные формы под каждый домен:
/// UI рисует редактор по `kind`, сервер проверяет значение через [`AttributeInput::accepts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AttributeInput {
    /// Свободный текст
    Text,
    /// Число, опционально с единицей измерения ("45 mm", "100ml")
    Number { unit: Option<&'static str> },
    /// Одно значение из закрытого списка
    Select { options: &'static [&'static str] },
}

impl AttributeInput {
    /// Проверить, что значение допустимо для этого поля
    pub fn accepts(&self, value: &str) -> bool {
        let value = value.trim();
        match self {
            AttributeInput::Text => true,
            AttributeInput::Number { unit } => {
                let number = unit
                    .and_then(|u| value.strip_suffix(u))
                    .unwrap_or(value)
                    .trim()
                    .replace(',', ".");
                number.parse::<f64>().map_or(false, |n| n.is_finite())
            }
            AttributeInput::Select { options } => {
                options.iter().any(|o| o.eq_ignore_ascii_case(value))
            }
        }
    }
}

/// Атрибут товара из закрытого каталога
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttributeField {
    pub key: &'static str,
    pub label: &'static str,
    pub input: AttributeInput,
}

const fn text(key: &'static str, label: &'static str) -> AttributeField {
    AttributeField {
        key,
        label,
        input: AttributeInput::Text,
    }
}

const fn number(key: &'static str, label: &'static str, unit: &'static str) -> AttributeField {
    AttributeField {
        key,
        label,
        input: AttributeInput::Number { unit: Some(unit) },
    }
}

const fn select(
    key: &'static str,
    label: &'static str,
    options: &'static [&'static str],
) -> AttributeField {
    AttributeField {
        key,
        label,
        input: AttributeInput::Select { options },
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Все известные системе атрибуты. Набор версионируется вместе с кодом,
/// операторы расширяют только привязку полей к категориям.
static FIELDS: &[AttributeField] = &[
    // общие
    text("size", "Size"),
    text("color", "Color"),
    text("material", "Material"),
    text("dimensions", "Dimensions"),
    number("weight", "Weight", "g"),
    text("warranty", "Warranty"),
    select("gender", "Gender", &["Men", "Women", "Unisex", "Kids"]),
    // часы
    select(
        "movement",
        "Movement",
        &["Automatic", "Quartz", "Mechanical", "Solar", "Smart"],
    ),
    text("bandMaterial", "Band Material"),
    text("caseStyle", "Case Style"),
    text("waterResistance", "Water Resistance"),
    // электроника
    text("processor", "Processor"),
    text("ram", "RAM"),
    text("storage", "Storage"),
    number("screenSize", "Screen Size", "in"),
    text("battery", "Battery"),
    text("connectivity", "Connectivity"),
    text("operatingSystem", "Operating System"),
    // одежда
    select("fit", "Fit", &["Slim", "Regular", "Relaxed", "Oversized"]),
    text("careInstructions", "Care Instructions"),
    // техника для дома
    number("power", "Power", "W"),
    text("capacity", "Capacity"),
    select(
        "energyRating",
        "Energy Rating",
        &["A+++", "A++", "A+", "A", "B", "C", "D"],
    ),
    // красота
    select(
        "skinType",
        "Skin Type",
        &["All", "Normal", "Dry", "Oily", "Combination", "Sensitive"],
    ),
    select(
        "hairType",
        "Hair Type",
        &["All", "Straight", "Wavy", "Curly", "Coily"],
    ),
    number("volume", "Volume", "ml"),
    text("ingredients", "Ingredients"),
    // парфюмерия
    select(
        "concentration",
        "Concentration",
        &[
            "Parfum",
            "Eau de Parfum",
            "Eau de Toilette",
            "Eau de Cologne",
            "Attar",
        ],
    ),
    text("fragranceNotes", "Fragrance Notes"),
    text("longevity", "Longevity"),
    // спорт
    text("sportType", "Sport Type"),
    select("ageGroup", "Age Group", &["Adult", "Teen", "Kids"]),
];

/// Все атрибуты в порядке объявления
pub fn all_fields() -> &'static [AttributeField] {
    FIELDS
}

pub fn is_valid_key(key: &str) -> bool {
    get(key).is_some()
}

/// Найти атрибут по ключу
pub fn get(key: &str) -> Option<&'static AttributeField> {
    FIELDS.iter().find(|f| f.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique() {
        let keys: HashSet<_> = all_fields().iter().map(|f| f.key).collect();
        assert_eq!(keys.len(), all_fields().len());
    }

    #[test]
    fn test_every_registered_key_is_valid() {
        for field in all_fields() {
            assert!(is_valid_key(field.key), "{} must be valid", field.key);
        }
    }

    #[test]
    fn test_unknown_keys_are_invalid() {
        assert!(!is_valid_key("not_a_real_field"));
        assert!(!is_valid_key(""));
        // ключи чувствительны к регистру
        assert!(!is_valid_key("Movement"));
        assert!(!is_valid_key("bandmaterial"));
    }

    #[test]
    fn test_get_returns_label() {
        let field = get("waterResistance").unwrap();
        assert_eq!(field.label, "Water Resistance");
        assert_eq!(field.input, AttributeInput::Text);
    }

    #[test]
    fn test_number_input_accepts_unit_suffix() {
        let volume = get("volume").unwrap().input;
        assert!(volume.accepts("100"));
        assert!(volume.accepts("100ml"));
        assert!(volume.accepts(" 7,5 ml "));
        assert!(!volume.accepts("a lot"));
        assert!(!volume.accepts(""));
    }

    #[test]
    fn test_select_input_ignores_case() {
        let movement = get("movement").unwrap().input;
        assert!(movement.accepts("automatic"));
        assert!(movement.accepts("Quartz"));
        assert!(!movement.accepts("Kinetic"));
    }

    #[test]
    fn test_text_input_accepts_anything() {
        assert!(AttributeInput::Text.accepts("Stainless steel 316L"));
    }
}
