use std::collections::BTreeMap;
use oxrdf::{Graph, NamedNode, Subject, Term, Triple};
use oxttl::TurtleParser;
use sand_drepr::prelude::*;
use sand_drepr::export::post_processing;
use crate::helper::*;

fn parse(content: &str) -> Graph {
    let mut graph = Graph::new();
    for triple in TurtleParser::new().for_reader(content.as_bytes()) {
        graph.insert(&triple.unwrap());
    }
    graph
}

fn named(uri: &str) -> NamedNode {
    NamedNode::new(uri).unwrap()
}

/// A literal entity `http://x/1` linked to the class `http://schema/Foo` by `http://p/type`
fn literal_link_sm() -> SemanticModel {
    let mut sm = SemanticModel::new("tbl".to_owned());
    let foo = sm.add_node(SmNode::class_node("http://schema/Foo", "schema:Foo"));
    let name = sm.add_node(SmNode::data_node(0, "name"));
    let lit = sm.add_node(SmNode::literal_node("http://x/1", LiteralNodeDataType::Entity));
    sm.add_edge(foo, name, rdfs_label()).unwrap();
    sm.add_edge(lit, foo, SmEdge::new("http://p/type", "p:type")).unwrap();
    sm
}

#[test]
fn test_nothing_to_repair() {
    let mut sm = people_sm();
    // a literal node without outgoing edge does not need to be repaired
    let usa = sm.add_node(SmNode::literal_node(&wd("Q30"), LiteralNodeDataType::Entity));
    sm.add_edge(0, usa, prop("P27")).unwrap();

    let content = "<http://x/2>   a <http://schema/Foo>.\n# comment\n";
    let output = post_processing(&sm, content, OutputFormat::Turtle, &BTreeMap::new()).unwrap();
    assert_eq!(output, content);
}

#[test]
fn test_link_from_literal() {
    let content = "<http://x/2> a <http://schema/Foo> .\n";
    let output = post_processing(&literal_link_sm(), content, OutputFormat::Turtle, &BTreeMap::new()).unwrap();

    let graph = parse(&output);
    assert_eq!(graph.len(), 2);
    assert!(graph.contains(&Triple::new(named("http://x/1"), named("http://p/type"), named("http://x/2"))));
    assert!(graph.contains(&Triple::new(
        named("http://x/2"),
        named("http://www.w3.org/1999/02/22-rdf-syntax-ns#type"),
        named("http://schema/Foo"),
    )));
}

#[test]
fn test_first_resource_by_id() {
    let content = r#"
<http://x/9> a <http://schema/Foo> .
<http://x/3> a <http://schema/Bar>, <http://schema/Foo> .
<http://x/5> a <http://schema/Foo> .
"#;
    let output = post_processing(&literal_link_sm(), content, OutputFormat::Turtle, &BTreeMap::new()).unwrap();

    let graph = parse(&output);
    let objects = graph.objects_for_subject_predicate(&named("http://x/1"), &named("http://p/type"))
        .map(|o| o.into_owned())
        .collect::<Vec<_>>();
    assert_eq!(objects, vec![Term::NamedNode(named("http://x/3"))]);
}

#[test]
fn test_link_to_blank_node() {
    let content = "_:b0 a <http://schema/Foo> .\n";
    let output = post_processing(&literal_link_sm(), content, OutputFormat::Turtle, &BTreeMap::new()).unwrap();

    let graph = parse(&output);
    let triple = graph.triples_for_subject(&named("http://x/1")).next().unwrap().into_owned();
    match triple.object {
        Term::BlankNode(_) => {},
        obj => panic!("expect a blank node, get: {}", obj),
    }
    // the blank node is the typed resource
    let subjects = graph.iter().map(|t| t.subject.into_owned()).filter(|s| match s {
        Subject::BlankNode(_) => true,
        _ => false,
    }).count();
    assert_eq!(subjects, 1);
}

/// Value of `http://schema/name` of the resource linked from the literal entity
fn linked_name(output: &str) -> String {
    let graph = parse(output);
    let target = graph.objects_for_subject_predicate(&named("http://x/1"), &named("http://p/type"))
        .map(|o| o.into_owned())
        .collect::<Vec<_>>();
    assert_eq!(target.len(), 1);
    let subject = match &target[0] {
        Term::BlankNode(b) => Subject::BlankNode(b.clone()),
        Term::NamedNode(n) => Subject::NamedNode(n.clone()),
        obj => panic!("unexpected object: {}", obj),
    };
    match graph.object_for_subject_predicate(&subject, &named("http://schema/name")) {
        Some(oxrdf::TermRef::Literal(l)) => l.value().to_owned(),
        obj => panic!("unexpected name: {:?}", obj),
    }
}

#[test]
fn test_anonymous_resources_in_document_order() {
    let content = r#"
[ a <http://schema/Foo> ; <http://schema/name> "A" ] .
[ a <http://schema/Foo> ; <http://schema/name> "B" ] .
"#;
    for _ in 0..10 {
        let output = post_processing(&literal_link_sm(), content, OutputFormat::Turtle, &BTreeMap::new()).unwrap();
        assert_eq!(linked_name(&output), "A");
    }
}

#[test]
fn test_named_resources_before_blank_nodes() {
    let content = r#"
[ a <http://schema/Foo> ; <http://schema/name> "A" ] .
<http://x/9> a <http://schema/Foo> ; <http://schema/name> "C" .
"#;
    let output = post_processing(&literal_link_sm(), content, OutputFormat::Turtle, &BTreeMap::new()).unwrap();
    assert_eq!(linked_name(&output), "C");
}

#[test]
fn test_no_resource_of_the_class() {
    let content = "<http://x/2> a <http://schema/Bar> .\n";
    let output = post_processing(&literal_link_sm(), content, OutputFormat::Turtle, &BTreeMap::new()).unwrap();
    assert_eq!(parse(&output).len(), 1);
}

#[test]
fn test_repair_only_turtle() {
    let err = post_processing(&literal_link_sm(), "{}", OutputFormat::JsonLd, &BTreeMap::new()).unwrap_err();
    assert_eq!(err.to_string(), "post-processing only supports turtle output, got `jsonld`");
}

#[test]
fn test_invalid_turtle() {
    let err = post_processing(&literal_link_sm(), "<http://x/2> a", OutputFormat::Turtle, &BTreeMap::new()).unwrap_err();
    match err.kind() {
        ErrorKind::TurtleParse(_) => {},
        kind => panic!("unexpected error: {}", kind),
    }
}

#[test]
fn test_export_with_literal_links() {
    let ctx = Context::new();
    let engine = MockEngine::new(r#"
<http://www.wikidata.org/entity/Q91> a <http://www.wikidata.org/entity/Q5> ;
    <http://www.w3.org/2000/01/rdf-schema#label> "Abraham Lincoln" .
"#);
    let exporter = ctx.exporter(&CsvResourceBuilder, &engine);

    let (table, rows) = people();
    let mut sm = people_sm();
    let event = sm.add_node(SmNode::literal_node(&wd("Q11696"), LiteralNodeDataType::Entity));
    sm.add_edge(event, 0, prop("P1344")).unwrap();

    let output = exporter.export_data(&table, &rows, &sm, OutputFormat::Turtle).unwrap();
    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("@prefix wd: <http://www.wikidata.org/entity/>"));

    let graph = parse(&output);
    assert_eq!(graph.len(), 3);
    assert!(graph.contains(&Triple::new(named(&wd("Q11696")), named(&wdt("P1344")), named(&wd("Q91")))));
}
