pub mod domain_router;
pub mod resolver;

pub use domain_router::{field_specs, fields_for};
pub use resolver::{resolve, Resolution};
