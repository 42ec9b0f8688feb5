use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::a002_category::CategoryStore;

/// Общее состояние сервиса, передается обработчикам через axum `State`
///
/// Изменения таксономии идут под write-блокировкой, поэтому запись
/// пользовательского списка внутри процесса всегда последовательна.
#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<RwLock<CategoryStore>>,
}

impl AppState {
    pub fn new(store: CategoryStore) -> Self {
        Self {
            categories: Arc::new(RwLock::new(store)),
        }
    }
}
