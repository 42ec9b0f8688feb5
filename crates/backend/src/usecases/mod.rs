pub mod u501_assemble_product;
