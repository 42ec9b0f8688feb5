pub mod specification_domain;
