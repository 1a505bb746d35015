//! Export the data of a table to RDF through D-REPR.
use std::collections::{BTreeMap, HashSet};
use crate::drepr::{DRepr, MappingEngine, OutputFormat, ResourceData};
use crate::errors::*;
use crate::models::ontology::PropertyStore;
use crate::models::semantic_model::SemanticModel;
use crate::models::table::{Table, TableRow};
use crate::namespace::NamespaceService;
use crate::settings::AppConfig;

pub mod naming;
pub mod transformation;
pub mod semantic_model;
pub mod resources;
pub mod builder;
pub mod post_processing;

pub use self::builder::{ENTITY_RESOURCE_ID, TABLE_RESOURCE_ID};
pub use self::naming::AttrNamer;
pub use self::post_processing::post_processing;
pub use self::resources::{CsvResourceBuilder, ResourceBuilder};
pub use self::transformation::TransformCatalog;

/// Everything an export needs. The collaborators are borrowed, so a context can be created
/// for each request.
pub struct DreprExport<'a> {
    pub appcfg: &'a AppConfig,
    pub namespace: &'a NamespaceService,
    pub ontprops: &'a dyn PropertyStore,
    pub transforms: &'a TransformCatalog,
    pub resources: &'a dyn ResourceBuilder,
    pub engine: &'a dyn MappingEngine,
}

impl<'a> DreprExport<'a> {
    #[inline]
    fn ident_props(&self) -> &HashSet<String> {
        &self.appcfg.semantic_model.identifiers_set
    }

    /// Convert the rows of a table to RDF in the given format
    pub fn export_data(&self, table: &Table, rows: &[TableRow], sm: &SemanticModel, format: OutputFormat) -> Result<Vec<u8>> {
        if table.n_columns() == 0 {
            debug!("Table {} has no column, nothing to export", table.id);
            return Ok(Vec::new());
        }

        let repr = self.export_drepr_model(table, sm)?;
        let resources = self.build_resources(table, rows, sm)?;

        info!("Convert table {} ({} rows) to {}", table.id, rows.len(), format);
        let content = self.engine.convert(&repr, &resources, format)
            .chain_err(|| format!("Cannot convert table {}", table.id))?;
        let content = String::from_utf8(content)?;

        Ok(post_processing(sm, &content, format, self.namespace.prefixes())?.into_bytes())
    }

    /// The D-REPR model of a table, in JSON (`model.json`) and in the D-REPR language (`model.yml`)
    pub fn export_data_model(&self, table: &Table, sm: &SemanticModel) -> Result<BTreeMap<String, String>> {
        let repr = self.export_drepr_model(table, sm)?;

        let mut files = BTreeMap::new();
        files.insert("model.json".to_owned(), repr.to_json()?);
        files.insert("model.yml".to_owned(), repr.to_lang_yml()?);
        Ok(files)
    }

    /// Resources needed by the D-REPR model besides the table itself
    pub fn export_extra_resources(&self, table: &Table, rows: &[TableRow], sm: &SemanticModel) -> Result<BTreeMap<String, String>> {
        let mut files = BTreeMap::new();
        if table.n_columns() == 0 {
            return Ok(files);
        }

        let ent = self.entity_resource(table, rows, sm)?;
        files.insert(ENTITY_RESOURCE_ID.to_owned(), ent.value);
        Ok(files)
    }

    pub fn export_drepr_model(&self, table: &Table, sm: &SemanticModel) -> Result<DRepr> {
        builder::build_drepr_model(table, sm, self.namespace, self.ontprops, self.ident_props(), self.transforms)
    }

    fn entity_resource(&self, table: &Table, rows: &[TableRow], sm: &SemanticModel) -> Result<ResourceData> {
        let ent_columns = builder::get_entity_columns(sm, self.ident_props())
            .into_iter()
            .collect::<HashSet<_>>();
        self.resources.entity_resource(self.namespace, table, rows, &ent_columns)
    }

    fn build_resources(&self, table: &Table, rows: &[TableRow], sm: &SemanticModel) -> Result<BTreeMap<String, ResourceData>> {
        let mut resources = BTreeMap::new();
        resources.insert(TABLE_RESOURCE_ID.to_owned(), self.resources.table_resource(table, rows)?);
        resources.insert(ENTITY_RESOURCE_ID.to_owned(), self.entity_resource(table, rows, sm)?);
        Ok(resources)
    }
}
