pub mod a001_attribute_field;
pub mod a002_category;
pub mod a003_product;
pub mod common;
