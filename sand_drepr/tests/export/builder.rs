use sand_drepr::prelude::*;
use sand_drepr::drepr::{Alignment, Preprocessing, ResourceType, Step};
use sand_drepr::export::transformation::URL_TRANSFORMATION;
use crate::helper::*;

fn build(table: &Table, sm: &SemanticModel) -> Result<DRepr> {
    let ctx = Context::new();
    let engine = MockEngine::new("");
    ctx.exporter(&CsvResourceBuilder, &engine).export_drepr_model(table, sm)
}

fn alignments(repr: &DRepr) -> Vec<(String, String)> {
    repr.aligns.iter()
        .map(|a| match a {
            Alignment::Range(ra) => (ra.source.clone(), ra.target.clone()),
        })
        .collect()
}

#[test]
fn test_people_model() {
    let (table, _) = people();
    let repr = build(&table, &people_sm()).unwrap();

    assert_eq!(repr.resources.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(), vec!["table", "entity"]);
    assert!(repr.resources.iter().all(|r| r.resource_type == ResourceType::Csv));

    let table_attrs = repr.attrs.iter().filter(|a| a.resource_id == "table").collect::<Vec<_>>();
    let entity_attrs = repr.attrs.iter().filter(|a| a.resource_id == "entity").collect::<Vec<_>>();
    assert_eq!(table_attrs.iter().map(|a| a.id.as_str()).collect::<Vec<_>>(), vec!["name", "date_of_birth"]);
    assert_eq!(entity_attrs.iter().map(|a| a.id.as_str()).collect::<Vec<_>>(), vec!["name__ent"]);

    assert_eq!(alignments(&repr), vec![
        ("name".to_owned(), "date_of_birth".to_owned()),
        ("name".to_owned(), "name__ent".to_owned()),
    ]);
    for align in &repr.aligns {
        match align {
            Alignment::Range(ra) => {
                assert_eq!(ra.aligned_steps.len(), 1);
                assert_eq!((ra.aligned_steps[0].source_idx, ra.aligned_steps[0].target_idx), (0, 0));
            }
        }
    }

    // no transformation for strings & dates
    assert!(repr.preprocessing.is_empty());
    // every attribute of the semantic model is declared
    assert!(repr.get_attr_by_id("name__ent").is_some());
}

#[test]
fn test_attribute_paths() {
    let (table, _) = people();
    let repr = build(&table, &people_sm()).unwrap();

    let attr = repr.get_attr_by_id("date_of_birth").unwrap();
    assert_eq!(attr.path.to_string(), "$[0:3:1][1]");
    assert_eq!(attr.missing_values, vec!["".to_owned()]);
    match &attr.path.steps[0] {
        Step::Range(r) => assert_eq!((r.start, r.end, r.step), (0, Some(3), 1)),
        step => panic!("unexpected step: {:?}", step),
    }
    assert_eq!(repr.get_attr_by_id("name__ent").unwrap().path.to_string(), "$[0:3:1][0]");
}

#[test]
fn test_url_columns_are_cleaned() {
    let table = Table::new("companies", vec!["Company".to_owned(), "Website".to_owned()], 5);
    let mut sm = SemanticModel::new("companies".to_owned());
    let company = sm.add_node(SmNode::class_node(&wd("Q783794"), "wd:Q783794"));
    let name = sm.add_node(SmNode::data_node(0, "Company"));
    let website = sm.add_node(SmNode::data_node(1, "Website"));
    sm.add_edge(company, name, rdfs_label()).unwrap();
    sm.add_edge(company, website, prop("P856")).unwrap();

    let repr = build(&table, &sm).unwrap();
    assert_eq!(repr.preprocessing.len(), 1);
    match &repr.preprocessing[0] {
        Preprocessing::PMap(pmap) => {
            assert_eq!(pmap.resource_id, "table");
            assert_eq!(pmap.path.to_string(), "$[0:5:1][1]");
            assert_eq!(pmap.code, URL_TRANSFORMATION);
            assert!(!pmap.change_structure);
            assert_eq!(pmap.output, None);
        }
    }
}

#[test]
fn test_table_without_columns() {
    let table = Table::new("empty", vec![], 0);
    let repr = build(&table, &people_sm()).unwrap();

    assert_eq!(repr.resources.len(), 2);
    assert!(repr.attrs.is_empty());
    assert!(repr.aligns.is_empty());
    assert!(repr.preprocessing.is_empty());
    assert!(repr.sm.nodes.is_empty());
    assert!(repr.sm.edges.is_empty());
}

#[test]
fn test_column_out_of_range() {
    let table = Table::new("tbl", vec!["Name".to_owned()], 3);
    match build(&table, &people_sm()) {
        Err(Error(ErrorKind::InvalidColumnIndex(1, 1), _)) => {},
        Err(e) => panic!("unexpected error: {}", e),
        Ok(_) => panic!("column 1 does not exist"),
    }
}

#[test]
fn test_model_files() {
    let (table, _) = people();
    let ctx = Context::new();
    let engine = MockEngine::new("");
    let files = ctx.exporter(&CsvResourceBuilder, &engine).export_data_model(&table, &people_sm()).unwrap();

    assert_eq!(files.keys().map(|k| k.as_str()).collect::<Vec<_>>(), vec!["model.json", "model.yml"]);
    let repr: DRepr = serde_json::from_str(&files["model.json"]).unwrap();
    assert_eq!(repr, build(&table, &people_sm()).unwrap());

    let yml: serde_yaml::Value = serde_yaml::from_str(&files["model.yml"]).unwrap();
    let human = &yml["semantic_model"]["wd:Q5:0"];
    assert_eq!(human["properties"][0][1].as_str(), Some("name"));
    assert_eq!(human["properties"][2][0].as_str(), Some("drepr:uri"));
    assert_eq!(human["properties"][2][1].as_str(), Some("name__ent"));
    assert_eq!(engine.n_calls.get(), 0);
}
