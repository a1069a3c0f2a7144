//! Contains the Error and Result type used by the decoder and encoder.
use std::fmt::Display;

use crate::TagType;

/// Various errors that can occur while reading, writing or inspecting NBT.
#[derive(Debug)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
    source: Option<std::io::Error>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The input ended part way through some NBT value. For a compound this
    /// includes running out of input before its End tag.
    UnexpectedEof,

    /// A length prefix of a string, array or list was negative.
    MalformedLength(i32),

    /// A tag type byte was outside of the known range.
    UnknownTagType(u8),

    /// A tag or list was asked for a payload of a different type than the one
    /// it holds.
    TypeMismatch { expected: TagType, found: TagType },

    /// A compound accessor was given a name that is not in the compound.
    KeyNotFound(String),

    /// A string was neither UTF-8 nor Java's modified UTF-8. Contained bytes
    /// are the invalid data.
    Nonunicode(Vec<u8>),

    /// A list with element type End claimed to have elements.
    InvalidList(usize),

    /// An End tag was found where a value was required.
    InvalidEnd,

    /// A compound contained the same name twice and duplicates were
    /// configured to be rejected.
    DuplicateKey(String),

    /// Compounds and lists were nested deeper than the configured maximum.
    DepthLimit(usize),

    /// A length was larger than the configured maximum, or too large to fit
    /// in its length prefix.
    LengthLimit(usize),

    /// Any other IO error from the underlying reader or writer.
    Io,
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.kind, ErrorKind::UnexpectedEof)
    }

    fn new(kind: ErrorKind, msg: impl Display) -> Self {
        Self {
            msg: msg.to_string(),
            kind,
            source: None,
        }
    }

    pub(crate) fn unexpected_eof() -> Self {
        Self::new(ErrorKind::UnexpectedEof, "eof: unexpectedly ran out of input")
    }

    pub(crate) fn malformed_length(len: i32) -> Self {
        Self::new(
            ErrorKind::MalformedLength(len),
            format!("invalid nbt: negative length prefix {}", len),
        )
    }

    pub(crate) fn unknown_tag_type(tag: u8) -> Self {
        Self::new(
            ErrorKind::UnknownTagType(tag),
            format!("invalid nbt tag value: {}", tag),
        )
    }

    pub(crate) fn type_mismatch(expected: TagType, found: TagType) -> Self {
        Self::new(
            ErrorKind::TypeMismatch { expected, found },
            format!("type mismatch: expected {}, found {}", expected, found),
        )
    }

    pub(crate) fn key_not_found(key: &str) -> Self {
        Self::new(
            ErrorKind::KeyNotFound(key.to_owned()),
            format!("key not found in compound: {:?}", key),
        )
    }

    pub(crate) fn nonunicode(data: Vec<u8>) -> Self {
        let msg = format!(
            "invalid nbt string: nonunicode: {}",
            String::from_utf8_lossy(&data)
        );
        Self::new(ErrorKind::Nonunicode(data), msg)
    }

    pub(crate) fn invalid_list(len: usize) -> Self {
        Self::new(
            ErrorKind::InvalidList(len),
            format!("invalid nbt: list of TAG_End with {} elements", len),
        )
    }

    pub(crate) fn invalid_end() -> Self {
        Self::new(ErrorKind::InvalidEnd, "invalid nbt: unexpected TAG_End")
    }

    pub(crate) fn duplicate_key(key: &str) -> Self {
        Self::new(
            ErrorKind::DuplicateKey(key.to_owned()),
            format!("invalid nbt: duplicate key in compound: {:?}", key),
        )
    }

    pub(crate) fn depth_limit(max: usize) -> Self {
        Self::new(
            ErrorKind::DepthLimit(max),
            format!("nbt nested deeper than the limit of {}", max),
        )
    }

    pub(crate) fn length_limit(len: usize) -> Self {
        Self::new(
            ErrorKind::LengthLimit(len),
            format!("length {} exceeds the allowed maximum", len),
        )
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Self {
                msg: e.to_string(),
                kind: ErrorKind::UnexpectedEof,
                source: Some(e),
            },
            _ => Self {
                msg: format!("io error: {}", e),
                kind: ErrorKind::Io,
                source: Some(e),
            },
        }
    }
}
