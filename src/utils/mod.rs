pub mod excel;
pub mod table;
