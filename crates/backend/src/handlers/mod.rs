pub mod a001_attribute_field;
pub mod a002_category;
pub mod error;
pub mod taxonomy;
pub mod u501_assemble_product;
