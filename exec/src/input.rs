use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::collections::HashMap;
use serde_json;
use sand_drepr::prelude::*;

/// What the annotation tool sends us for one table
#[derive(Deserialize)]
pub struct ExportInput {
    pub table: Table,
    #[serde(default)]
    pub rows: Vec<TableRow>,
    pub semantic_model: SemanticModel,
    /// ontology properties used by the semantic model
    #[serde(default)]
    pub ontology_properties: Vec<OntProperty>,
}

impl ExportInput {
    pub fn from_file(finput: &Path) -> Result<ExportInput> {
        let file = File::open(finput).chain_err(|| format!("Cannot open input file: {:?}", finput))?;
        let input = serde_json::from_reader(BufReader::new(file))
            .chain_err(|| format!("Invalid input file: {:?}", finput))?;
        Ok(input)
    }

    /// Ontology properties keyed by id, together with the default properties of the application
    pub fn get_ontprops(&self, appcfg: &AppConfig) -> HashMap<String, OntProperty> {
        appcfg.default_properties.iter()
            .chain(self.ontology_properties.iter())
            .map(|p| (p.id.clone(), p.clone()))
            .collect()
    }
}
