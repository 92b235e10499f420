use crate::{
    doc,
    value::{Value, ValueError, ValueTag},
};
use std::cmp::Ordering;

// ---- tags --------------------------------------------------------------

#[test]
fn tags_round_trip_through_codes() {
    for tag in ValueTag::ALL {
        assert_eq!(ValueTag::from_code(tag.code()), Some(tag), "tag {tag}");
    }

    assert_eq!(ValueTag::from_code(0), None);
    assert_eq!(ValueTag::from_code(17), None);
}

#[test]
fn tag_codes_are_wire_stable() {
    assert_eq!(ValueTag::Double.code(), 1);
    assert_eq!(ValueTag::Utf8.code(), 2);
    assert_eq!(ValueTag::Bool.code(), 8);
    assert_eq!(ValueTag::Null.code(), 10);
    assert_eq!(ValueTag::Int32.code(), 16);
    assert_eq!(ValueTag::Int64.code(), 18);
}

#[test]
fn value_reports_its_tag() {
    let cases = [
        (Value::Double(1.5), ValueTag::Double),
        (Value::from("x"), ValueTag::Utf8),
        (Value::from(doc! {}), ValueTag::Document),
        (Value::Array(vec![]), ValueTag::Array),
        (Value::Binary(vec![1]), ValueTag::Binary),
        (Value::Undefined, ValueTag::Undefined),
        (Value::ObjectId([0; 12]), ValueTag::ObjectId),
        (Value::Bool(true), ValueTag::Bool),
        (Value::DateTime(0), ValueTag::DateTime),
        (Value::Null, ValueTag::Null),
        (Value::Int32(1), ValueTag::Int32),
        (Value::Int64(1), ValueTag::Int64),
    ];

    for (value, tag) in cases {
        assert_eq!(value.tag(), tag, "value {value:?}");
    }
}

// ---- typed readers -----------------------------------------------------

#[test]
fn typed_readers_return_native_values() {
    assert_eq!(Value::Double(2.5).as_f64(), Ok(2.5));
    assert_eq!(Value::Bool(true).as_bool(), Ok(true));
    assert_eq!(Value::Int32(-3).as_i32(), Ok(-3));
    assert_eq!(Value::Int64(1 << 40).as_i64(), Ok(1 << 40));
    assert_eq!(Value::from("héllo").as_utf8().map(str::len), Ok(6));
}

#[test]
fn typed_readers_report_mismatch() {
    assert_eq!(
        Value::Int32(5).as_f64(),
        Err(ValueError::TypeMismatch {
            expected: ValueTag::Double,
            found: ValueTag::Int32,
        })
    );
    assert_eq!(
        Value::Null.as_utf8(),
        Err(ValueError::TypeMismatch {
            expected: ValueTag::Utf8,
            found: ValueTag::Null,
        })
    );

    let err = Value::Bool(false).as_i64().unwrap_err();
    assert_eq!(err.to_string(), "expected Int64 value, found Bool");
}

#[test]
fn option_converts_none_to_null() {
    assert_eq!(Value::from(None::<i32>), Value::Null);
    assert_eq!(Value::from(Some(7_i64)), Value::Int64(7));
}

// ---- numeric promotion -------------------------------------------------

#[test]
fn numeric_promotion_widens_to_larger_side() {
    assert_eq!(
        Value::Int32(5).cmp_numeric(&Value::Double(5.0)),
        Some(Ordering::Equal)
    );
    assert_eq!(
        Value::Int64(i64::from(i32::MAX) + 1).cmp_numeric(&Value::Int32(i32::MAX)),
        Some(Ordering::Greater)
    );
    assert_eq!(
        Value::Double(0.5).cmp_numeric(&Value::Bool(true)),
        Some(Ordering::Less)
    );
    assert_eq!(
        Value::Bool(true).cmp_numeric(&Value::Int32(1)),
        Some(Ordering::Equal)
    );
}

#[test]
fn numeric_promotion_rejects_non_numeric_and_nan() {
    assert_eq!(Value::Int32(5).cmp_numeric(&Value::from("5")), None);
    assert_eq!(Value::Null.cmp_numeric(&Value::Int32(0)), None);
    assert_eq!(Value::Double(f64::NAN).cmp_numeric(&Value::Int32(0)), None);
}

// ---- serialize ---------------------------------------------------------

#[test]
fn serializes_extended_forms() {
    let value = Value::from(doc! {
        "id" => Value::ObjectId([0xab; 12]),
        "at" => Value::DateTime(1000),
        "bin" => Value::Binary(vec![0x01, 0xff]),
        "u" => Value::Undefined,
        "n" => Value::Null,
    });

    let json = serde_json::to_value(&value).expect("value should serialize");

    assert_eq!(
        json,
        serde_json::json!({
            "id": { "$oid": "abababababababababababab" },
            "at": { "$date": 1000 },
            "bin": { "$binary": "01ff" },
            "u": { "$undefined": true },
            "n": null,
        })
    );
}

#[test]
fn nesting_depth_counts_container_levels() {
    assert_eq!(Value::Int32(1).nesting_depth(), 0);
    assert_eq!(Value::Array(Vec::new()).nesting_depth(), 1);
    assert_eq!(Value::Array(vec![Value::Null]).nesting_depth(), 1);

    let value = Value::from(doc! {
        "flat" => 1_i32,
        "deep" => vec![Value::from(doc! { "k" => vec![Value::Int32(2)] })],
    });
    assert_eq!(value.nesting_depth(), 4);
}
