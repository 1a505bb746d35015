use sand_drepr::export::AttrNamer;
use sand_drepr::models::table::Table;

fn table(columns: &[&str]) -> Table {
    Table::new("tbl", columns.iter().map(|c| c.to_string()).collect(), 10)
}

#[test]
fn test_names_are_stable() {
    let tbl = table(&["Name", "Name", "3d_model", "Population (2019)"]);
    let mut namer = AttrNamer::new(&tbl);
    let names = (0..4).map(|ci| namer.attr_id(ci)).collect::<Vec<_>>();
    let names_again = (0..4).rev().map(|ci| namer.attr_id(ci)).rev().collect::<Vec<_>>();
    assert_eq!(names, names_again);
    assert_eq!(names, vec!["name", "name_1", "d_model", "population_2019"]);
}

#[test]
fn test_first_encountered_column_keeps_the_name() {
    let tbl = table(&["Date of birth", "date-of-birth"]);
    let mut namer = AttrNamer::new(&tbl);
    assert_eq!(namer.attr_id(1), "date_of_birth");
    assert_eq!(namer.attr_id(0), "date_of_birth_0");
}

#[test]
fn test_no_leading_digit() {
    let tbl = table(&["3d_model", "1. name", "42", "3 2d", "1 2 3", "2019-20 season"]);
    let mut namer = AttrNamer::new(&tbl);
    for ci in 0..6 {
        let name = namer.attr_id(ci);
        assert!(!name.is_empty());
        assert!(!name.starts_with(|c: char| c.is_ascii_digit()), "{}", name);
    }
    assert_eq!(namer.attr_id(1), "name");
    assert_eq!(namer.attr_id(3), "d");
    assert_eq!(namer.attr_id(4), "column_4");
    assert_eq!(namer.attr_id(5), "season");
}

#[test]
fn test_entity_ids_never_clash() {
    let tbl = table(&["Name", "Name ent", "name__ent"]);
    let mut namer = AttrNamer::new(&tbl);
    let ent_id = namer.ent_attr_id(0);
    assert_eq!(ent_id, "name__ent");
    for ci in 0..3 {
        assert_ne!(namer.attr_id(ci), ent_id);
    }
}
