pub mod aggregate;
pub mod builtin;

pub use aggregate::{clean_entries, CategoryDefinition, CategoryDto};
pub use builtin::builtin_categories;
