use axum::extract::State;
use axum::Json;
use contracts::domain::a003_product::ProductDraft;
use contracts::shared::taxonomy::{AssembleResponse, ImportAssembleRequest, ImportAssembleResponse};

use crate::system::state::AppState;
use crate::usecases::u501_assemble_product::{self, executor};

/// POST /api/products/assemble
pub async fn assemble(
    State(state): State<AppState>,
    Json(draft): Json<ProductDraft>,
) -> Json<AssembleResponse> {
    let store = state.categories.read().await;
    Json(executor::assemble_with_review(&store, draft))
}

/// POST /api/products/import/assemble
pub async fn assemble_import(
    State(state): State<AppState>,
    Json(request): Json<ImportAssembleRequest>,
) -> Json<ImportAssembleResponse> {
    let store = state.categories.read().await;
    let items = u501_assemble_product::assemble_batch(&store, request.drafts);
    Json(ImportAssembleResponse { items })
}
