//! Domain router: which attribute fields a category form offers.
//!
//! Operator-curated fields on a definition always win; otherwise the
//! compiled-in defaults of the inferred domain apply.

use contracts::domain::a001_attribute_field;
use contracts::domain::a002_category::CategoryDefinition;
use contracts::enums::specification_domain::SpecificationDomain;
use contracts::shared::taxonomy::{default_fields, required_fields, FieldSpec};

/// Ключи атрибутов, предлагаемые для категории
pub fn fields_for(
    domain: SpecificationDomain,
    definition: Option<&CategoryDefinition>,
) -> Vec<String> {
    match definition {
        Some(def) if def.has_fields() => def.fields.clone(),
        _ => default_fields(domain).iter().map(|k| k.to_string()).collect(),
    }
}

/// Поля формы с подписью, способом ввода и признаком обязательности
pub fn field_specs(
    domain: SpecificationDomain,
    definition: Option<&CategoryDefinition>,
) -> Vec<FieldSpec> {
    let required = required_fields(domain);
    fields_for(domain, definition)
        .iter()
        .filter_map(|key| a001_attribute_field::get(key))
        .map(|field| FieldSpec {
            key: field.key,
            label: field.label,
            required: required.contains(&field.key),
            input: field.input,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::Origin;

    fn definition(fields: &[&str]) -> CategoryDefinition {
        CategoryDefinition {
            name: "Watches".into(),
            subcategories: Vec::new(),
            brands: Vec::new(),
            fields: fields.iter().map(|s| s.to_string()).collect(),
            origin: Origin::Builtin,
        }
    }

    #[test]
    fn test_curated_fields_are_verbatim() {
        let def = definition(&["bandMaterial", "movement"]);
        assert_eq!(
            fields_for(SpecificationDomain::Watch, Some(&def)),
            vec!["bandMaterial", "movement"]
        );
    }

    #[test]
    fn test_empty_curated_fields_fall_back_to_defaults() {
        let def = definition(&[]);
        assert_eq!(
            fields_for(SpecificationDomain::Watch, Some(&def)),
            fields_for(SpecificationDomain::Watch, None)
        );
        assert_eq!(fields_for(SpecificationDomain::Watch, None).len(), 8);
    }

    #[test]
    fn test_general_has_no_fields() {
        assert!(fields_for(SpecificationDomain::General, None).is_empty());
        assert!(field_specs(SpecificationDomain::General, None).is_empty());
    }

    #[test]
    fn test_field_specs_mark_required() {
        let specs = field_specs(SpecificationDomain::Perfume, None);
        let required: Vec<_> = specs.iter().filter(|s| s.required).map(|s| s.key).collect();

        assert_eq!(required, vec!["concentration", "volume"]);
        assert_eq!(specs[0].label, "Concentration");
    }

    #[test]
    fn test_required_only_for_offered_fields() {
        // movement is required for watches but not offered here
        let def = definition(&["bandMaterial"]);
        let specs = field_specs(SpecificationDomain::Watch, Some(&def));

        assert_eq!(specs.len(), 1);
        assert!(!specs[0].required);
    }

    #[test]
    fn test_required_follows_inferred_domain() {
        // a curated watch-like field set under a clothing name uses clothing requirements
        let def = definition(&["size", "movement"]);
        let specs = field_specs(SpecificationDomain::Clothing, Some(&def));

        assert!(specs.iter().find(|s| s.key == "size").unwrap().required);
        assert!(!specs.iter().find(|s| s.key == "movement").unwrap().required);
    }
}
