pub mod registry;

pub use registry::{all_fields, get, is_valid_key, AttributeField, AttributeInput};
