use crate::{
    doc,
    document::{Document, DocumentAccess, FieldPath, FieldPresence, PathError},
    value::Value,
};

fn path(s: &str) -> FieldPath {
    FieldPath::new(s).expect("test path should be valid")
}

fn sample() -> Document {
    doc! {
        "name" => "ada",
        "age" => 36_i32,
        "address" => doc! { "city" => "London", "zip" => Value::Null },
        "tags" => vec![Value::from("math"), Value::from(doc! { "kind" => "engine" })],
    }
}

// ---- paths -------------------------------------------------------------

#[test]
fn empty_path_is_rejected() {
    assert_eq!(FieldPath::new(""), Err(PathError::Empty));
}

#[test]
fn empty_segments_are_rejected() {
    for (raw, index) in [(".a", 0), ("a.", 1), ("a..b", 1)] {
        assert_eq!(
            FieldPath::new(raw),
            Err(PathError::EmptySegment {
                path: raw.to_string(),
                index,
            }),
            "path {raw:?}",
        );
    }
}

#[test]
fn segments_split_on_dots() {
    let p = path("address.city");

    assert_eq!(p.segments().collect::<Vec<_>>(), vec!["address", "city"]);
    assert_eq!(p.to_string(), "address.city");
    assert_eq!(p.len(), "address.city".len());
}

// ---- lookup ------------------------------------------------------------

#[test]
fn find_top_level_field() {
    let doc = sample();

    assert_eq!(doc.find(&path("name")), Some(&Value::from("ada")));
    assert_eq!(doc.find(&path("age")), Some(&Value::Int32(36)));
}

#[test]
fn find_nested_document_field() {
    let doc = sample();

    assert_eq!(doc.find(&path("address.city")), Some(&Value::from("London")));
    assert_eq!(doc.find(&path("address.zip")), Some(&Value::Null));
    assert_eq!(doc.find(&path("address.country")), None);
}

#[test]
fn find_descends_into_arrays_by_position() {
    let doc = sample();

    assert_eq!(doc.find(&path("tags.0")), Some(&Value::from("math")));
    assert_eq!(doc.find(&path("tags.1.kind")), Some(&Value::from("engine")));
    assert_eq!(doc.find(&path("tags.2")), None);
    assert_eq!(doc.find(&path("tags.01")), None);
    assert_eq!(doc.find(&path("tags.first")), None);
}

#[test]
fn find_through_scalar_is_missing() {
    let doc = sample();

    assert_eq!(doc.find(&path("name.first")), None);
    assert_eq!(doc.find(&path("age.0")), None);
}

#[test]
fn dotted_key_is_not_a_direct_child() {
    let doc = doc! { "a.b" => 1 };

    assert_eq!(doc.get("a.b"), Some(&Value::Int32(1)));
    assert_eq!(doc.find(&path("a.b")), None);
}

#[test]
fn access_trait_reports_presence() {
    let doc = sample();

    assert_eq!(
        doc.field(&path("address.zip")),
        FieldPresence::Present(&Value::Null)
    );
    assert_eq!(doc.field(&path("missing")), FieldPresence::Missing);
    assert!(!doc.field(&path("missing")).is_present());
}

// ---- construction ------------------------------------------------------

#[test]
fn insert_replaces_in_place() {
    let mut doc = doc! { "a" => 1, "b" => 2 };
    doc.insert("a", 10);

    assert_eq!(doc.len(), 2);
    assert_eq!(doc.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(doc.get("a"), Some(&Value::Int32(10)));
}

#[test]
fn from_iterator_preserves_order() {
    let doc: Document = [("z", 1), ("a", 2), ("m", 3)].into_iter().collect();

    assert_eq!(doc.keys().collect::<Vec<_>>(), vec!["z", "a", "m"]);
    assert!(!doc.is_empty());
    assert!(Document::new().is_empty());
}

#[test]
fn serializes_as_ordered_json_object() {
    let doc = doc! { "b" => 1, "a" => doc! { "c" => true } };
    let json = serde_json::to_string(&doc).expect("document should serialize");

    assert_eq!(json, r#"{"b":1,"a":{"c":true}}"#);
}
