pub mod executor;

pub use executor::{assemble, assemble_batch, review};
