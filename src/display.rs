//! Indented, human readable rendering of a tag tree for diagnostics. This is
//! not a stable format and can't be parsed back.

use std::fmt;

use crate::Tag;

/// A tag along with its name, displayed the same way compound entries are.
///
/// ```
/// # use nbtcodec::{Compound, NamedTag, Tag};
/// let mut compound = Compound::new();
/// compound.insert("shortTest", 32767i16);
/// let tag = Tag::Compound(compound);
///
/// assert_eq!(
///     NamedTag::new("Level", &tag).to_string(),
///     "\"Level\": TAG_Compound: 1 entries\n  \"shortTest\": TAG_Short: 32767"
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NamedTag<'a> {
    name: &'a str,
    tag: &'a Tag,
}

impl<'a> NamedTag<'a> {
    pub fn new(name: &'a str, tag: &'a Tag) -> Self {
        Self { name, tag }
    }
}

impl fmt::Display for NamedTag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: ", self.name)?;
        write_tag(f, self.tag, 0)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tag(f, self, 0)
    }
}

fn newline(f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
    write!(f, "\n{:indent$}", "", indent = indent)
}

fn write_tag(f: &mut fmt::Formatter<'_>, tag: &Tag, indent: usize) -> fmt::Result {
    write!(f, "{}", tag.tag_type())?;
    match tag {
        Tag::End => Ok(()),
        Tag::Byte(v) => write!(f, ": {:#04x}", v),
        Tag::Short(v) => write!(f, ": {}", v),
        Tag::Int(v) => write!(f, ": {}", v),
        Tag::Long(v) => write!(f, ": {}", v),
        Tag::Float(v) => write!(f, ": {:?}", v),
        Tag::Double(v) => write!(f, ": {:?}", v),
        Tag::String(v) => write!(f, ": {:?}", v),
        Tag::IntArray(v) => write!(f, ": {:?}", v),
        Tag::ByteArray(v) => {
            write!(f, ": {} bytes", v.len())?;
            for (i, row) in v.chunks(16).enumerate() {
                newline(f, indent + 2)?;
                write!(f, "{:04x} ", i * 16)?;
                for b in row {
                    write!(f, " {:02x}", b)?;
                }
            }
            Ok(())
        }
        Tag::List(list) => {
            write!(f, " of {}: {} entries", list.element_type(), list.len())?;
            for i in 0..list.len() {
                if let Some(el) = list.get(i) {
                    newline(f, indent + 2)?;
                    write_tag(f, &el, indent + 2)?;
                }
            }
            Ok(())
        }
        Tag::Compound(compound) => {
            write!(f, ": {} entries", compound.len())?;

            // Map order is arbitrary, sort so output is repeatable.
            let mut entries: Vec<_> = compound.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            for (name, child) in entries {
                newline(f, indent + 2)?;
                write!(f, "{:?}: ", name)?;
                write_tag(f, child, indent + 2)?;
            }
            Ok(())
        }
    }
}
