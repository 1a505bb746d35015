use fnv::FnvHashMap;
use crate::models::ontology::OntPropertyDataType;
use crate::settings::AppConfig;

/// Clean up URLs: a value without scheme & authority is not a URL and becomes an empty string,
/// which is then treated as a missing value.
pub const URL_TRANSFORMATION: &str = r#"from urllib.parse import urlparse

value = str(value).strip()
parsedurl = urlparse(value)
if parsedurl.scheme == "" and parsedurl.netloc == "":
    return ""
return value"#;

/// Code of the value transformations that D-REPR applies to columns of a datatype
#[derive(Debug, Clone)]
pub struct TransformCatalog {
    transformations: FnvHashMap<OntPropertyDataType, String>,
}

impl TransformCatalog {
    pub fn new(transformations: FnvHashMap<OntPropertyDataType, String>) -> TransformCatalog {
        TransformCatalog { transformations }
    }

    /// The default transformations extended (or overridden) by the ones in the settings
    pub fn from_config(appcfg: &AppConfig) -> TransformCatalog {
        let mut catalog = TransformCatalog::default();
        for (datatype, code) in &appcfg.transformations {
            catalog.transformations.insert(*datatype, code.clone());
        }
        catalog
    }

    #[inline]
    pub fn has_transformation(&self, datatype: OntPropertyDataType) -> bool {
        self.transformations.contains_key(&datatype)
    }

    #[inline]
    pub fn get_transformation(&self, datatype: OntPropertyDataType) -> Option<&str> {
        self.transformations.get(&datatype).map(|code| code.as_str())
    }
}

impl Default for TransformCatalog {
    fn default() -> TransformCatalog {
        let mut transformations = FnvHashMap::default();
        transformations.insert(OntPropertyDataType::Url, URL_TRANSFORMATION.to_owned());
        TransformCatalog { transformations }
    }
}
