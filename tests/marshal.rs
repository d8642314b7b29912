//! End-to-end coverage across the three codecs, driven through the
//! facade exports.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde_json::json;
use triform::{Pair, ini, json as json_codec, marshal_enum, marshal_record, marshal_sum, xml};

#[derive(Clone, Debug, Default, PartialEq)]
struct Person {
    name: String,
    age: i32,
    skills: Vec<String>,
}

marshal_record!(Person { name, age, skills });

#[derive(Clone, Debug, Default, PartialEq)]
struct Group {
    group_name: String,
    leader: Person,
    members: Vec<Person>,
}

marshal_record!(Group {
    group_name,
    leader,
    members,
});

#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum Color {
    #[default]
    Red,
    Green,
    Blue,
}

marshal_enum!(Color { Red, Green, Blue });

enum Shape {
    Sides(u32),
    Radius(f64),
}

marshal_sum!(Shape { Sides, Radius });

fn alice() -> Person {
    Person {
        name: "Alice".to_owned(),
        age: 30,
        skills: vec!["C++".to_owned(), "Qt".to_owned()],
    }
}

fn team() -> Group {
    Group {
        group_name: "compilers".to_owned(),
        leader: alice(),
        members: vec![
            alice(),
            Person {
                name: "Bob".to_owned(),
                age: 25,
                skills: vec!["Rust".to_owned()],
            },
        ],
    }
}

// --------------------------------------------------------------------
// JSON
// --------------------------------------------------------------------

#[test]
fn json_scalar_literal() {
    assert_eq!(json_codec::stringify(&42_i32), "42");
    assert_eq!(json_codec::parse::<i32>("42").unwrap(), 42);
}

#[test]
fn json_null_round_trip() {
    let empty: Option<i32> = None;
    let text = json_codec::stringify(&empty);
    assert_eq!(text, "null");
    assert_eq!(json_codec::parse::<Option<i32>>(&text).unwrap(), None);
    assert_eq!(json_codec::parse::<Option<i32>>("5").unwrap(), Some(5));
}

#[test]
fn json_record_round_trip() {
    let person = alice();
    let text = json_codec::stringify(&person);
    let tree: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        tree,
        json!({"name": "Alice", "age": 30, "skills": ["C++", "Qt"]})
    );
    assert_eq!(json_codec::parse::<Person>(&text).unwrap(), person);
}

#[test]
fn json_nested_record_round_trip() {
    let group = team();
    let text = json_codec::stringify(&group);
    assert_eq!(json_codec::parse::<Group>(&text).unwrap(), group);
}

#[test]
fn json_missing_and_unknown_members_are_skipped() {
    let person =
        json_codec::parse::<Person>(r#"{"name": "Eve", "height": 170, "skills": 3}"#).unwrap();
    assert_eq!(person.name, "Eve");
    assert_eq!(person.age, 0);
    assert!(person.skills.is_empty());
}

#[test]
fn json_enum_travels_as_ordinal() {
    assert_eq!(json_codec::stringify(&Color::Blue), "2");
    assert_eq!(json_codec::parse::<Color>("1").unwrap(), Color::Green);
    // An unknown ordinal leaves the default in place.
    assert_eq!(json_codec::parse::<Color>("9").unwrap(), Color::Red);
}

#[test]
fn json_sum_encodes_active_alternative_bare() {
    assert_eq!(json_codec::stringify(&Shape::Sides(4)), "4");
    assert_eq!(json_codec::stringify(&Shape::Radius(2.5)), "2.5");
}

#[test]
fn json_map_with_integer_keys() {
    let map = BTreeMap::from([(1_i64, "one".to_owned()), (2, "two".to_owned())]);
    let text = json_codec::stringify(&map);
    let tree: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(tree, json!({"1": "one", "2": "two"}));
    assert_eq!(json_codec::parse::<BTreeMap<i64, String>>(&text).unwrap(), map);
}

#[test]
fn json_set_round_trip_ignores_order() {
    let set = HashSet::from([3_i32, 1, 4]);
    let text = json_codec::stringify(&set);
    assert_eq!(json_codec::parse::<HashSet<i32>>(&text).unwrap(), set);
}

#[test]
fn json_pair_and_tuple() {
    let pair = Pair::new(1_i32, "one".to_owned());
    let text = json_codec::stringify(&pair);
    let tree: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(tree, json!({"first": 1, "second": "one"}));
    assert_eq!(
        json_codec::parse::<Pair<i32, String>>(&text).unwrap(),
        pair
    );

    let tuple = (7_i32, "seven".to_owned(), false);
    let text = json_codec::stringify(&tuple);
    assert_eq!(text, r#"[7,"seven",false]"#);
    assert_eq!(
        json_codec::parse::<(i32, String, bool)>(&text).unwrap(),
        tuple
    );
}

#[test]
fn json_boxed_optional_record() {
    let boxed: Option<Box<Person>> = Some(Box::new(alice()));
    let text = json_codec::stringify(&boxed);
    assert_eq!(
        json_codec::parse::<Option<Box<Person>>>(&text).unwrap(),
        boxed
    );
}

#[test]
fn json_decode_is_idempotent() {
    let text = json_codec::stringify(&team());
    let once = json_codec::parse::<Group>(&text).unwrap();
    let twice = json_codec::parse::<Group>(&json_codec::stringify(&once)).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn json_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("person.json");
    json_codec::to_file(&alice(), &path).unwrap();
    assert_eq!(json_codec::from_file::<Person>(&path).unwrap(), alice());
}

// --------------------------------------------------------------------
// XML
// --------------------------------------------------------------------

#[test]
fn xml_sequence_layout() {
    let text = xml::stringify(&vec![1_i32, 2, 3], "list");
    assert_eq!(
        text,
        "<list><item>1</item><item>2</item><item>3</item></list>"
    );
    assert_eq!(xml::parse::<Vec<i32>>(&text, "list").unwrap(), [1, 2, 3]);
}

#[test]
fn xml_record_round_trip() {
    let group = team();
    let text = xml::stringify(&group, "group");
    assert_eq!(xml::parse::<Group>(&text, "group").unwrap(), group);
}

#[test]
fn xml_empty_element_is_none() {
    let text = xml::stringify(&None::<Person>, "opt");
    assert_eq!(xml::parse::<Option<Person>>(&text, "opt").unwrap(), None);

    let full = Some(alice());
    let text = xml::stringify(&full, "opt");
    assert_eq!(xml::parse::<Option<Person>>(&text, "opt").unwrap(), full);
}

#[test]
fn xml_bool_accepts_one() {
    assert_eq!(xml::parse::<bool>("<b>1</b>", "b").unwrap(), true);
    assert_eq!(xml::parse::<bool>("<b>true</b>", "b").unwrap(), true);
    assert_eq!(xml::parse::<bool>("<b>0</b>", "b").unwrap(), false);
}

#[test]
fn xml_map_decode_takes_any_child_as_entry() {
    // A record-shaped document decodes into a string map, one entry
    // per field, because map decoding keys off child names alone.
    #[derive(Debug, Default, PartialEq)]
    struct Tags {
        env: String,
        tier: String,
    }
    marshal_record!(Tags { env, tier });

    let tags = Tags {
        env: "prod".to_owned(),
        tier: "web".to_owned(),
    };
    let text = xml::stringify(&tags, "tags");
    let map = xml::parse::<HashMap<String, String>>(&text, "tags").unwrap();
    assert_eq!(
        map,
        HashMap::from([
            ("env".to_owned(), "prod".to_owned()),
            ("tier".to_owned(), "web".to_owned()),
        ])
    );
}

#[test]
fn xml_enum_travels_as_ordinal() {
    assert_eq!(xml::stringify(&Color::Blue, "c"), "<c>2</c>");
    assert_eq!(xml::parse::<Color>("<c>1</c>", "c").unwrap(), Color::Green);
    // An unknown ordinal leaves the default in place.
    assert_eq!(xml::parse::<Color>("<c>9</c>", "c").unwrap(), Color::Red);
}

#[test]
fn xml_boxed_optional_record() {
    let boxed: Option<Box<Person>> = Some(Box::new(alice()));
    let text = xml::stringify(&boxed, "person");
    assert_eq!(
        xml::parse::<Option<Box<Person>>>(&text, "person").unwrap(),
        boxed
    );

    let empty = xml::stringify(&None::<Box<Person>>, "person");
    assert_eq!(
        xml::parse::<Option<Box<Person>>>(&empty, "person").unwrap(),
        None
    );
}

#[test]
fn xml_wrong_root_is_an_error() {
    assert!(xml::parse::<i32>("<n>1</n>", "count").is_err());
}

#[test]
fn xml_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("group.xml");
    xml::to_file(&team(), &path, "group").unwrap();
    assert_eq!(xml::from_file::<Group>(&path, "group").unwrap(), team());
}

// --------------------------------------------------------------------
// INI
// --------------------------------------------------------------------

#[test]
fn ini_scalar_under_value_key() {
    let text = ini::stringify(&42_i32, "n");
    assert!(text.contains("[n]"));
    assert!(text.contains("value=42"));
    assert_eq!(ini::parse::<i32>(&text, "n").unwrap(), 42);
}

#[test]
fn ini_map_section_round_trip() {
    let map = BTreeMap::from([("a".to_owned(), 1_i32), ("b".to_owned(), 2)]);
    let text = ini::stringify(&map, "m");
    assert!(text.contains("a=1"));
    assert!(text.contains("b=2"));
    assert_eq!(ini::parse::<BTreeMap<String, i32>>(&text, "m").unwrap(), map);
}

#[test]
fn ini_record_flattens_fields() {
    let person = alice();
    let text = ini::stringify(&person, "person");
    assert!(text.contains("name=Alice"));
    assert!(text.contains("age=30"));
    assert!(text.contains("skills=C++,Qt"));
    assert_eq!(ini::parse::<Person>(&text, "person").unwrap(), person);
}

#[test]
fn ini_nested_map_degrades_to_placeholder() {
    #[derive(Debug, Default, PartialEq)]
    struct Index {
        title: String,
        counts: BTreeMap<String, i32>,
    }
    marshal_record!(Index { title, counts });

    let index = Index {
        title: "fruit".to_owned(),
        counts: BTreeMap::from([("apple".to_owned(), 3)]),
    };
    let text = ini::stringify(&index, "index");
    assert!(text.contains("counts=Map(...)"));

    // The placeholder carries no entries, so the map decodes empty.
    let decoded = ini::parse::<Index>(&text, "index").unwrap();
    assert_eq!(decoded.title, "fruit");
    assert!(decoded.counts.is_empty());
}

#[test]
fn ini_sequence_items_and_nested_join() {
    let text = ini::stringify(&vec![10_i32, 20], "seq");
    assert!(text.contains("item0=10"));
    assert!(text.contains("item1=20"));

    let nested = vec![vec![1_i32, 2], vec![3]];
    let text = ini::stringify(&nested, "grid");
    assert_eq!(ini::parse::<Vec<Vec<i32>>>(&text, "grid").unwrap(), nested);
}

#[test]
fn ini_enum_travels_as_ordinal() {
    let text = ini::stringify(&Color::Blue, "c");
    assert!(text.contains("value=2"));
    assert_eq!(ini::parse::<Color>(&text, "c").unwrap(), Color::Blue);
    assert_eq!(ini::parse::<Color>("[c]\nvalue=9\n", "c").unwrap(), Color::Red);
}

#[test]
fn ini_missing_section_is_an_error() {
    assert!(ini::parse::<i32>("[other]\nvalue=1\n", "n").is_err());
}

#[test]
fn ini_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("person.ini");
    ini::to_file(&alice(), &path, "person").unwrap();
    assert_eq!(ini::from_file::<Person>(&path, "person").unwrap(), alice());
}
