//! Create the Error, ErrorKind, ResultExt, and Result types of the crate.
error_chain! {
    foreign_links {
        Io(::std::io::Error);
        Json(::serde_json::Error);
        Yaml(::serde_yaml::Error);
        Csv(::csv::Error);
        TurtleParse(::oxttl::TurtleParseError);
        Iri(::oxrdf::IriParseError);
        Utf8(::std::string::FromUtf8Error);
    }

    errors {
        DuplicatedUri(uri: String) {
            description("duplicated uri in the default resources")
            display("uri `{}` is declared by more than one default resource", uri)
        }
        AmbiguousEntityColumn(node_id: usize, n_edges: usize) {
            description("entity column must have exactly one identifier edge")
            display("data node {} has {} incoming identifier edges, expect exactly one", node_id, n_edges)
        }
        UnsupportedFormat(format: String) {
            description("unsupported output format")
            display("post-processing only supports turtle output, got `{}`", format)
        }
        UnknownProperty(uri: String) {
            description("unknown ontology property")
            display("ontology property `{}` does not exist", uri)
        }
        InvalidEdge(source: usize, target: usize) {
            description("edge refers to a missing node")
            display("edge {} -> {} refers to a node that is not in the semantic model", source, target)
        }
        InvalidColumnIndex(col_index: usize, n_columns: usize) {
            description("column index out of range")
            display("column index {} is out of range, the table has {} columns", col_index, n_columns)
        }
        InvalidLiteralLink(source: usize, target: usize) {
            description("literal node links to a non-class node")
            display("literal node {} links to node {} which is not a class node", source, target)
        }
        InvalidModel(msg: String) {
            description("invalid semantic model")
            display("invalid semantic model: {}", msg)
        }
        Engine(msg: String) {
            description("mapping engine failure")
            display("mapping engine failed: {}", msg)
        }
    }
}
