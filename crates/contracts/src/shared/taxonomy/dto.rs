use crate::domain::a001_attribute_field::AttributeInput;
use crate::domain::a002_category::CategoryDefinition;
use crate::domain::a003_product::{ProductDraft, ProductPayload};
use crate::enums::specification_domain::SpecificationDomain;
use serde::{Deserialize, Serialize};

/// Поле формы характеристик, как его видит UI
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub input: AttributeInput,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResolveQuery {
    #[serde(default)]
    pub category: String,
}

/// GET /api/taxonomy/resolve
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveResponse {
    pub category: String,
    pub definition: Option<CategoryDefinition>,
    pub domain: SpecificationDomain,
    pub form_title: &'static str,
    pub fields: Vec<FieldSpec>,
}

/// Замечания к черновику; не блокируют сборку payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftReview {
    pub domain: Option<SpecificationDomain>,
    pub category_matched: bool,
    pub missing_required: Vec<String>,
    pub invalid_values: Vec<String>,
}

impl DraftReview {
    pub fn is_clean(&self) -> bool {
        self.missing_required.is_empty() && self.invalid_values.is_empty()
    }
}

/// POST /api/products/assemble
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssembleResponse {
    pub payload: ProductPayload,
    pub review: DraftReview,
}

/// POST /api/products/import/assemble
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportAssembleRequest {
    pub drafts: Vec<ProductDraft>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportAssembleResponse {
    pub items: Vec<AssembleResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
