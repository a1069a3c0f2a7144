use crate::error::{ErrorKind, Result};
use crate::{Compound, List, Tag, TagType};

fn mismatch(expected: TagType, found: TagType) -> ErrorKind {
    ErrorKind::TypeMismatch { expected, found }
}

#[test]
fn tag_type_matches_variant() {
    assert_eq!(Tag::End.tag_type(), TagType::End);
    assert_eq!(Tag::from(1u8).tag_type(), TagType::Byte);
    assert_eq!(Tag::from(1i16).tag_type(), TagType::Short);
    assert_eq!(Tag::from(1i32).tag_type(), TagType::Int);
    assert_eq!(Tag::from(1i64).tag_type(), TagType::Long);
    assert_eq!(Tag::from(1f32).tag_type(), TagType::Float);
    assert_eq!(Tag::from(1f64).tag_type(), TagType::Double);
    assert_eq!(Tag::from(vec![1u8]).tag_type(), TagType::ByteArray);
    assert_eq!(Tag::from("s").tag_type(), TagType::String);
    assert_eq!(Tag::from(List::End).tag_type(), TagType::List);
    assert_eq!(Tag::from(Compound::new()).tag_type(), TagType::Compound);
    assert_eq!(Tag::from(vec![1i32]).tag_type(), TagType::IntArray);
}

#[test]
fn convenience_constructors() {
    assert_eq!(Tag::from(true), Tag::Byte(1));
    assert_eq!(Tag::from(false), Tag::Byte(0));
    assert_eq!(Tag::from(-1i8), Tag::Byte(255));
    assert_eq!(Tag::from("abc"), Tag::String("abc".to_owned()));
    assert_eq!(Tag::from(&[1u8, 2][..]), Tag::ByteArray(vec![1, 2]));
    assert_eq!(Tag::from(&[1i32, 2][..]), Tag::IntArray(vec![1, 2]));
}

#[test]
fn extract_scalars() -> Result<()> {
    assert_eq!(Tag::Byte(7).as_byte()?, 7);
    assert_eq!(Tag::Short(7).as_short()?, 7);
    assert_eq!(Tag::Int(7).as_int()?, 7);
    assert_eq!(Tag::Long(7).as_long()?, 7);
    assert_eq!(Tag::Float(7.5).as_float()?, 7.5);
    assert_eq!(Tag::Double(7.5).as_double()?, 7.5);
    Ok(())
}

#[test]
fn extract_wrong_type_does_not_coerce() {
    let err = Tag::Byte(7).as_int().unwrap_err();
    assert_eq!(err.kind(), &mismatch(TagType::Int, TagType::Byte));

    let err = Tag::Int(7).as_long().unwrap_err();
    assert_eq!(err.kind(), &mismatch(TagType::Long, TagType::Int));

    let err = Tag::Float(1.0).as_double().unwrap_err();
    assert_eq!(err.kind(), &mismatch(TagType::Double, TagType::Float));

    let err = Tag::End.as_compound().unwrap_err();
    assert_eq!(err.kind(), &mismatch(TagType::Compound, TagType::End));

    let err = Tag::IntArray(vec![]).as_byte_array().unwrap_err();
    assert_eq!(err.kind(), &mismatch(TagType::ByteArray, TagType::IntArray));
}

#[test]
fn extract_containers() -> Result<()> {
    let tag = Tag::String("hi".to_owned());
    assert_eq!(tag.as_str()?, "hi");
    assert_eq!(tag.into_string()?, "hi");

    let tag = Tag::ByteArray(vec![1, 2]);
    assert_eq!(tag.as_byte_array()?, &[1, 2]);
    assert_eq!(tag.into_byte_array()?, vec![1, 2]);

    let tag = Tag::IntArray(vec![3]);
    assert_eq!(tag.as_int_array()?, &[3]);

    let err = Tag::Int(1).into_list().unwrap_err();
    assert_eq!(err.kind(), &mismatch(TagType::List, TagType::Int));
    Ok(())
}

#[test]
fn mutate_through_tag() -> Result<()> {
    let mut tag = Tag::Compound(Compound::new());
    tag.as_compound_mut()?.insert("a", 1i32);
    assert_eq!(tag.as_compound()?.get_int("a")?, 1);

    let mut tag = Tag::List(List::new(TagType::Int));
    tag.as_list_mut()?.push(Tag::Int(1))?;
    assert_eq!(tag.as_list()?.as_ints()?, &[1]);

    assert!(Tag::Int(1).as_list_mut().is_err());
    Ok(())
}

#[test]
fn new_list_is_empty_with_type() {
    for tag_type in [TagType::End, TagType::Byte, TagType::Compound, TagType::IntArray] {
        let list = List::new(tag_type);
        assert_eq!(list.element_type(), tag_type);
        assert!(list.is_empty());
    }
}

#[test]
fn push_checks_element_type() -> Result<()> {
    let mut list = List::new(TagType::Int);
    list.push(Tag::Int(1))?;

    let err = list.push(Tag::String("no".to_owned())).unwrap_err();
    assert_eq!(err.kind(), &mismatch(TagType::Int, TagType::String));

    // The failed push leaves the list alone.
    assert_eq!(list, List::Int(vec![1]));
    Ok(())
}

#[test]
fn nothing_can_be_pushed_to_end_list() {
    let mut list = List::End;
    let err = list.push(Tag::Byte(1)).unwrap_err();
    assert_eq!(err.kind(), &mismatch(TagType::End, TagType::Byte));

    let err = list.push(Tag::End).unwrap_err();
    assert_eq!(err.kind(), &mismatch(TagType::End, TagType::End));
}

#[test]
fn from_tags_builds_homogeneous_list() -> Result<()> {
    let list = List::from_tags(TagType::Long, vec![Tag::Long(1), Tag::Long(2)])?;
    assert_eq!(list, List::Long(vec![1, 2]));

    let err = List::from_tags(TagType::Int, vec![Tag::Int(1), Tag::String("x".into())])
        .unwrap_err();
    assert_eq!(err.kind(), &mismatch(TagType::Int, TagType::String));
    Ok(())
}

#[test]
fn list_elements_as_tags() {
    let list = List::from(vec!["a".to_owned(), "b".to_owned()]);
    assert_eq!(list.get(1), Some(Tag::String("b".to_owned())));
    assert_eq!(list.get(2), None);
    assert_eq!(List::End.get(0), None);

    assert_eq!(
        list.into_tags(),
        vec![Tag::String("a".to_owned()), Tag::String("b".to_owned())]
    );
}

#[test]
fn typed_list_views() -> Result<()> {
    let list = List::from(vec![1.5f64]);
    assert_eq!(list.as_doubles()?, &[1.5]);

    let err = list.as_floats().unwrap_err();
    assert_eq!(err.kind(), &mismatch(TagType::Float, TagType::Double));

    // An End list is an empty list of anything.
    assert!(List::End.as_compounds()?.is_empty());
    Ok(())
}

#[test]
fn serialize_to_json() {
    let mut c = Compound::new();
    c.insert("bytes", vec![1u8, 2]);
    c.insert("list", List::from(vec![1i16, 2]));
    c.insert("empty", List::End);
    c.insert("name", "x");

    let json = serde_json::to_value(&Tag::Compound(c)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "bytes": [1, 2],
            "list": [1, 2],
            "empty": [],
            "name": "x",
        })
    );
}
