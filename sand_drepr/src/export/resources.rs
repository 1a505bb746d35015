//! Resources that D-REPR reads when generating RDF: the table itself and the URIs of the
//! entities linked to its cells.
use std::collections::HashSet;
use csv::WriterBuilder;
use crate::drepr::ResourceData;
use crate::errors::*;
use crate::models::table::{Table, TableRow};
use crate::namespace::NamespaceService;

pub trait ResourceBuilder {
    /// The cells of the table, one record per row
    fn table_resource(&self, table: &Table, rows: &[TableRow]) -> Result<ResourceData>;

    /// Same shape as the table resource: the URI of the first entity linked to each cell of an
    /// entity column, empty elsewhere
    fn entity_resource(&self, namespace: &NamespaceService, table: &Table, rows: &[TableRow], ent_columns: &HashSet<usize>) -> Result<ResourceData>;
}

/// Write resources as CSV without header
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvResourceBuilder;

impl CsvResourceBuilder {
    fn write_records<I>(&self, records: I) -> Result<ResourceData>
        where I: IntoIterator<Item=Vec<String>> {

        let mut writer = WriterBuilder::new().has_headers(false).from_writer(vec![]);
        for record in records {
            writer.write_record(&record)?;
        }

        let content = writer.into_inner()
            .map_err(|e| Error::from(e.into_error()))
            .chain_err(|| "Cannot flush the CSV resource")?;
        Ok(ResourceData { value: String::from_utf8(content)? })
    }
}

impl ResourceBuilder for CsvResourceBuilder {
    fn table_resource(&self, table: &Table, rows: &[TableRow]) -> Result<ResourceData> {
        let n_columns = table.n_columns();
        self.write_records(rows.iter().map(|row| {
            (0..n_columns).map(|ci| row.cell_text(ci)).collect::<Vec<_>>()
        }))
    }

    fn entity_resource(&self, namespace: &NamespaceService, table: &Table, rows: &[TableRow], ent_columns: &HashSet<usize>) -> Result<ResourceData> {
        let n_columns = table.n_columns();
        self.write_records(rows.iter().map(|row| {
            (0..n_columns)
                .map(|ci| {
                    if !ent_columns.contains(&ci) {
                        return String::new();
                    }
                    match row.first_entity_id(ci) {
                        Some(ent_id) => namespace.id_to_uri(ent_id),
                        None => String::new(),
                    }
                })
                .collect::<Vec<_>>()
        }))
    }
}
