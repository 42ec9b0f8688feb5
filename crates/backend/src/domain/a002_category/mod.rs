pub mod error;
pub mod repository;
pub mod store;

pub use error::CategoryError;
pub use store::CategoryStore;
