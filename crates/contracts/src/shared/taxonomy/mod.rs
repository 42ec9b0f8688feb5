pub mod domain_fields;
pub mod domain_rules;
pub mod dto;

pub use domain_fields::{default_fields, required_fields};
pub use domain_rules::{infer_domain, DomainRule, DOMAIN_RULES};
pub use dto::*;
