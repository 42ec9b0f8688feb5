//! Common types shared by the taxonomy aggregates

pub mod origin;

pub use origin::Origin;
