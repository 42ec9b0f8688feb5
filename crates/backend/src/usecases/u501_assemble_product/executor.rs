use std::collections::BTreeMap;

use contracts::domain::a003_product::{ProductDraft, ProductPayload};
use contracts::shared::taxonomy::{AssembleResponse, DraftReview};

use crate::domain::a002_category::CategoryStore;
use crate::shared::taxonomy::{field_specs, fields_for, resolve, Resolution};

/// Ключи, которые payload может содержать
///
/// Пока категория не найдена в таксономии, разрешенный набор пуст: поля
/// домена по умолчанию предлагаются форме, но в payload не попадают.
fn allowed_fields(resolution: &Resolution) -> Vec<String> {
    match &resolution.definition {
        Some(def) => fields_for(resolution.domain, Some(def)),
        None => Vec::new(),
    }
}

/// Собрать payload для Product API: оставить только атрибуты категории
///
/// Ключи вне разрешенного набора и пустые значения молча отбрасываются.
/// Черновик с неизвестной категорией дает payload без атрибутов, это не ошибка.
pub fn assemble(store: &CategoryStore, draft: ProductDraft) -> ProductPayload {
    let resolution = resolve(store, &draft.category);
    let allowed = allowed_fields(&resolution);

    let attributes: BTreeMap<String, String> = draft
        .attributes
        .into_iter()
        .filter(|(key, _)| allowed.contains(key))
        .filter_map(|(key, value)| {
            let value = value.trim();
            (!value.is_empty()).then(|| (key, value.to_string()))
        })
        .collect();

    ProductPayload {
        category: draft.category,
        sub_category: draft.sub_category,
        attributes,
        extra: draft.extra,
    }
}

/// Замечания по черновику: незаполненные обязательные поля и недопустимые значения
pub fn review(store: &CategoryStore, draft: &ProductDraft) -> DraftReview {
    let resolution = resolve(store, &draft.category);
    let allowed = allowed_fields(&resolution);
    let specs: Vec<_> = field_specs(resolution.domain, resolution.definition.as_ref())
        .into_iter()
        .filter(|spec| allowed.iter().any(|key| key == spec.key))
        .collect();

    let value_of = |key: &str| {
        draft
            .attributes
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    };

    let missing_required = specs
        .iter()
        .filter(|spec| spec.required && value_of(spec.key).is_none())
        .map(|spec| spec.key.to_string())
        .collect();

    let invalid_values = specs
        .iter()
        .filter(|spec| value_of(spec.key).map_or(false, |v| !spec.input.accepts(v)))
        .map(|spec| spec.key.to_string())
        .collect();

    DraftReview {
        domain: Some(resolution.domain),
        category_matched: resolution.definition.is_some(),
        missing_required,
        invalid_values,
    }
}

/// Проверка и сборка одного черновика
pub fn assemble_with_review(store: &CategoryStore, draft: ProductDraft) -> AssembleResponse {
    let review = review(store, &draft);
    let payload = assemble(store, draft);
    AssembleResponse { payload, review }
}

/// Пакетная сборка для импорта товаров; все черновики видят одно состояние таксономии
pub fn assemble_batch(store: &CategoryStore, drafts: Vec<ProductDraft>) -> Vec<AssembleResponse> {
    let total = drafts.len();
    let items: Vec<AssembleResponse> = drafts
        .into_iter()
        .map(|draft| assemble_with_review(store, draft))
        .collect();

    let unmatched = items.iter().filter(|i| !i.review.category_matched).count();
    tracing::info!(
        "Assembled {} imported drafts ({} with unknown category)",
        total,
        unmatched
    );
    if unmatched > 0 {
        let known: Vec<&str> = store.iter().map(|d| d.name.as_str()).collect();
        tracing::debug!("Known categories: {}", known.join(", "));
    }
    items
}
