pub mod db;
pub mod kv_store;
