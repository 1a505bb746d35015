pub mod semantic_model;
pub mod table;
pub mod ontology;
