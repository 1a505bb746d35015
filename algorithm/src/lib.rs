pub mod string;
pub mod data_structure;
pub mod prelude;
