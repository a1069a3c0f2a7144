use crate::error::{ErrorKind, Result};
use crate::{Compound, List, Tag, TagType};

fn level() -> Compound {
    let mut inner = Compound::new();
    inner.insert("a", 1i32);

    let mut c = Compound::new();
    c.insert("byte", 1u8);
    c.insert("short", 2i16);
    c.insert("int", 3i32);
    c.insert("long", 4i64);
    c.insert("float", 5f32);
    c.insert("double", 6f64);
    c.insert("bytes", vec![7u8]);
    c.insert("string", "eight");
    c.insert("list", List::from(vec![9i32]));
    c.insert("compound", inner);
    c.insert("ints", vec![11i32]);
    c
}

#[test]
fn typed_getters() -> Result<()> {
    let c = level();

    assert_eq!(c.get_byte("byte")?, 1);
    assert_eq!(c.get_short("short")?, 2);
    assert_eq!(c.get_int("int")?, 3);
    assert_eq!(c.get_long("long")?, 4);
    assert_eq!(c.get_float("float")?, 5.0);
    assert_eq!(c.get_double("double")?, 6.0);
    assert_eq!(c.get_byte_array("bytes")?, &[7]);
    assert_eq!(c.get_string("string")?, "eight");
    assert_eq!(c.get_list("list")?.as_ints()?, &[9]);
    assert_eq!(c.get_compound("compound")?.get_int("a")?, 1);
    assert_eq!(c.get_int_array("ints")?, &[11]);
    Ok(())
}

#[test]
fn missing_key() {
    let c = level();
    let err = c.get_int("nope").unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::KeyNotFound("nope".to_owned()));

    let err = Compound::new().get_compound("").unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::KeyNotFound("".to_owned()));
}

#[test]
fn wrong_type() {
    let c = level();

    let err = c.get_short("string").unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::TypeMismatch {
            expected: TagType::Short,
            found: TagType::String
        }
    );

    // No widening of numbers either.
    let err = c.get_long("int").unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::TypeMismatch {
            expected: TagType::Long,
            found: TagType::Int
        }
    );
}

#[test]
fn getters_do_not_mutate() {
    let c = level();
    let before = c.clone();

    let _ = c.get_int("missing");
    let _ = c.get_int("string");
    let _ = c.get_string("string");

    assert_eq!(c, before);
}

#[test]
fn get_typed() -> Result<()> {
    let c = level();
    assert_eq!(c.get_typed("int", TagType::Int)?, &Tag::Int(3));
    assert!(c.get_typed("int", TagType::Long).is_err());
    assert!(c.get_typed("missing", TagType::Int).is_err());
    Ok(())
}

#[test]
fn map_operations() {
    let mut c = Compound::new();
    assert!(c.is_empty());

    assert_eq!(c.insert("a", 1i32), None);
    assert_eq!(c.insert("a", 2i32), Some(Tag::Int(1)));
    assert_eq!(c.len(), 1);
    assert!(c.contains_key("a"));

    if let Some(Tag::Int(v)) = c.get_mut("a") {
        *v += 1;
    }
    assert_eq!(c.get("a"), Some(&Tag::Int(3)));

    assert_eq!(c.remove("a"), Some(Tag::Int(3)));
    assert!(!c.contains_key("a"));
    assert!(c.get("a").is_none());
}

#[test]
fn collect_and_iterate() {
    let c: Compound = vec![("x", 1i32), ("y", 2i32)].into_iter().collect();
    assert_eq!(c.len(), 2);

    let mut keys: Vec<_> = c.keys().cloned().collect();
    keys.sort();
    assert_eq!(keys, ["x", "y"]);

    let mut total = 0;
    for (_, tag) in &c {
        total += tag.as_int().unwrap();
    }
    assert_eq!(total, 3);

    let mut extended = c.clone();
    extended.extend(vec![("z", 3i32)]);
    assert_eq!(extended.len(), 3);

    let mut owned: Vec<(String, Tag)> = c.into_iter().collect();
    owned.sort_by(|a, b| a.0.cmp(&b.0));
    assert_eq!(owned[0], ("x".to_owned(), Tag::Int(1)));
}

#[test]
fn equality_ignores_insertion_order() {
    let a: Compound = vec![("x", 1i32), ("y", 2i32)].into_iter().collect();
    let b: Compound = vec![("y", 2i32), ("x", 1i32)].into_iter().collect();
    assert_eq!(a, b);
}
