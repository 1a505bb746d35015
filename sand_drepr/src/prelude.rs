pub use crate::errors::*;
pub use crate::settings::AppConfig;
pub use crate::models::semantic_model::*;
pub use crate::models::table::*;
pub use crate::models::ontology::*;
pub use crate::namespace::{KnowledgeGraphNamespace, NamespaceService, PrefixNamespace};
pub use crate::drepr::{DRepr, MappingEngine, OutputFormat, ResourceData};
pub use crate::export::{CsvResourceBuilder, DreprExport, ResourceBuilder, TransformCatalog};
pub use crate::view::{serialize_graph, OntologyLabels};
