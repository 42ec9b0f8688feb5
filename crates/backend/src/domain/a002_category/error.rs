use thiserror::Error;

/// Ошибки изменения таксономии. Все локальные и восстановимые, повтор делает оператор.
#[derive(Debug, Error)]
pub enum CategoryError {
    #[error("Category name must not be empty")]
    EmptyCategoryName,

    #[error("Category \"{0}\" already exists")]
    DuplicateCategoryName(String),

    #[error("Unknown attribute field key: {0}")]
    UnknownFieldKey(String),

    #[error("Builtin category \"{0}\" cannot be changed")]
    BuiltinCategoryImmutable(String),

    #[error("Category \"{0}\" not found")]
    CategoryNotFound(String),

    #[error("Failed to persist custom categories: {0}")]
    PersistenceWriteFailed(String),
}

impl CategoryError {
    /// Машинно-читаемый вид ошибки для ответа API
    pub fn kind(&self) -> &'static str {
        match self {
            CategoryError::EmptyCategoryName => "EmptyCategoryName",
            CategoryError::DuplicateCategoryName(_) => "DuplicateCategoryName",
            CategoryError::UnknownFieldKey(_) => "UnknownFieldKey",
            CategoryError::BuiltinCategoryImmutable(_) => "BuiltinCategoryImmutable",
            CategoryError::CategoryNotFound(_) => "CategoryNotFound",
            CategoryError::PersistenceWriteFailed(_) => "PersistenceWriteFailed",
        }
    }
}
