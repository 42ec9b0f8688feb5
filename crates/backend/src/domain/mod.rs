pub mod a002_category;
