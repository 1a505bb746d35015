use fnv::FnvHashMap;
use algorithm::string::{slugify, strip_digit_prefix};
use crate::models::table::Table;

/// Derive ids of D-REPR attributes from the column names of a table.
///
/// Names are memoized: the first name given to a column is the one it keeps for the rest of
/// the export, and a name is owned by at most one column.
pub struct AttrNamer {
    names: Vec<String>,
    owners: FnvHashMap<String, usize>,
    assigned: FnvHashMap<usize, String>,
}

impl AttrNamer {
    pub fn new(table: &Table) -> AttrNamer {
        AttrNamer {
            names: table.columns.iter().map(|c| base_name(c)).collect(),
            owners: FnvHashMap::default(),
            assigned: FnvHashMap::default(),
        }
    }

    #[inline]
    pub fn n_columns(&self) -> usize {
        self.names.len()
    }

    /// Id of the attribute of the column `ci`, the column must be in the table.
    pub fn attr_id(&mut self, ci: usize) -> String {
        if let Some(name) = self.assigned.get(&ci) {
            return name.clone();
        }

        let base = &self.names[ci];
        let mut name = base.clone();
        if self.owners.contains_key(&name) {
            name = format!("{}_{}", base, ci);
            let mut k = 1;
            while self.owners.contains_key(&name) {
                name = format!("{}_{}_{}", base, ci, k);
                k += 1;
            }
        }

        self.owners.insert(name.clone(), ci);
        self.assigned.insert(ci, name.clone());
        name
    }

    /// Id of the attribute holding the entity URIs of the column `ci`.
    ///
    /// Slugs never contain `__`, so it cannot clash with ids of `attr_id`.
    pub fn ent_attr_id(&mut self, ci: usize) -> String {
        format!("{}__ent", self.attr_id(ci))
    }
}

fn base_name(column: &str) -> String {
    let slug = slugify(column);
    let name = strip_digit_prefix(&slug);
    if name.is_empty() {
        "column".to_owned()
    } else {
        name.to_owned()
    }
}
