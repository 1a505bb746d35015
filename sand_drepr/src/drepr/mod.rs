pub mod model;
pub mod sm;
pub mod engine;
pub mod lang;

pub use self::model::*;
pub use self::engine::{MappingEngine, OutputFormat, ResourceData};
