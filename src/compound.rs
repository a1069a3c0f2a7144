use std::borrow::Borrow;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::{List, Tag, TagType};

#[cfg(not(feature = "preserve-order"))]
type Map = std::collections::HashMap<String, Tag>;

#[cfg(feature = "preserve-order")]
type Map = indexmap::IndexMap<String, Tag>;

/// The payload of a compound tag: a mapping of unique names to tags.
///
/// The order of entries is not part of the NBT format. With the
/// `preserve-order` feature entries are kept, and written, in insertion
/// order.
///
/// The typed `get_*` accessors fail with [`ErrorKind::KeyNotFound`] when the
/// name is absent and [`ErrorKind::TypeMismatch`] when it holds another type.
///
/// [`ErrorKind::KeyNotFound`]: crate::error::ErrorKind::KeyNotFound
/// [`ErrorKind::TypeMismatch`]: crate::error::ErrorKind::TypeMismatch
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Compound(Map);

macro_rules! get_copy {
    ($fn:ident, $as:ident, $type:ty) => {
        pub fn $fn(&self, name: &str) -> Result<$type> {
            self.get_tag(name)?.$as()
        }
    };
}

macro_rules! get_ref {
    ($fn:ident, $as:ident, $type:ty) => {
        pub fn $fn(&self, name: &str) -> Result<&$type> {
            self.get_tag(name)?.$as()
        }
    };
}

impl Compound {
    pub fn new() -> Self {
        Self(Map::default())
    }

    /// Insert a tag, returning the tag previously stored under `name`.
    pub fn insert(&mut self, name: impl Into<String>, tag: impl Into<Tag>) -> Option<Tag> {
        self.0.insert(name.into(), tag.into())
    }

    pub fn get<Q>(&self, name: &Q) -> Option<&Tag>
    where
        String: Borrow<Q>,
        Q: std::hash::Hash + Eq + ?Sized,
    {
        self.0.get(name)
    }

    pub fn get_mut<Q>(&mut self, name: &Q) -> Option<&mut Tag>
    where
        String: Borrow<Q>,
        Q: std::hash::Hash + Eq + ?Sized,
    {
        self.0.get_mut(name)
    }

    pub fn remove<Q>(&mut self, name: &Q) -> Option<Tag>
    where
        String: Borrow<Q>,
        Q: std::hash::Hash + Eq + ?Sized,
    {
        self.0.remove(name)
    }

    pub fn contains_key<Q>(&self, name: &Q) -> bool
    where
        String: Borrow<Q>,
        Q: std::hash::Hash + Eq + ?Sized,
    {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Tag)> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// Get the tag stored under `name`, failing if it is absent.
    pub fn get_tag(&self, name: &str) -> Result<&Tag> {
        self.0.get(name).ok_or_else(|| Error::key_not_found(name))
    }

    get_copy!(get_byte, as_byte, u8);
    get_copy!(get_short, as_short, i16);
    get_copy!(get_int, as_int, i32);
    get_copy!(get_long, as_long, i64);
    get_copy!(get_float, as_float, f32);
    get_copy!(get_double, as_double, f64);

    get_ref!(get_byte_array, as_byte_array, [u8]);
    get_ref!(get_string, as_str, str);
    get_ref!(get_list, as_list, List);
    get_ref!(get_compound, as_compound, Compound);
    get_ref!(get_int_array, as_int_array, [i32]);

    /// Like [`get_tag`][`Compound::get_tag`] but also checks the type,
    /// useful when the payload itself isn't needed.
    pub fn get_typed(&self, name: &str, expected: TagType) -> Result<&Tag> {
        let tag = self.get_tag(name)?;
        if tag.tag_type() != expected {
            return Err(Error::type_mismatch(expected, tag.tag_type()));
        }
        Ok(tag)
    }
}

impl<K: Into<String>, V: Into<Tag>> FromIterator<(K, V)> for Compound {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<Tag>> Extend<(K, V)> for Compound {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        self.0
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl IntoIterator for Compound {
    type Item = (String, Tag);
    type IntoIter = <Map as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = (&'a String, &'a Tag);
    type IntoIter = <&'a Map as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
