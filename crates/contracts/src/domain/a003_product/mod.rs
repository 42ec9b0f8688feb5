pub mod aggregate;

pub use aggregate::{ProductDraft, ProductPayload};
