//! Errors returned by queries to the node. A query either fails in the
//! transport, in which case the transport's own error is handed back
//! untouched, or the node's response could not be decoded into the expected
//! record.
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Shape of a JSON value as it appears on the wire.
#[derive(Copy, Clone, Debug, PartialEq, Eq, derive_more::Display)]
pub enum WireType {
    #[display(fmt = "null")]
    Null,
    #[display(fmt = "boolean")]
    Bool,
    #[display(fmt = "number")]
    Number,
    #[display(fmt = "string")]
    String,
    #[display(fmt = "array")]
    Array,
    #[display(fmt = "object")]
    Object,
}

impl From<&Value> for WireType {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => WireType::Null,
            Value::Bool(_) => WireType::Bool,
            Value::Number(_) => WireType::Number,
            Value::String(_) => WireType::String,
            Value::Array(_) => WireType::Array,
            Value::Object(_) => WireType::Object,
        }
    }
}

/// One step of a [`FieldPath`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathSegment {
    /// A key of a JSON object.
    Key(String),
    /// A position in a JSON array.
    Index(usize),
}

/// Location of a field inside a response, starting at the top-level result.
/// Displayed as e.g. `transactions[2].amount`. The empty path denotes the
/// result itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// The path of the top-level result.
    pub fn root() -> Self { Self::default() }

    /// A path consisting of a single object key.
    pub fn key(key: impl Into<String>) -> Self {
        Self {
            segments: vec![PathSegment::Key(key.into())],
        }
    }

    pub fn segments(&self) -> &[PathSegment] { &self.segments }

    pub fn is_root(&self) -> bool { self.segments.is_empty() }

    /// Prefix the path with the given segment. Decoders of nested values
    /// produce paths relative to the nested value, and the caller that
    /// descended into it prefixes the step it took.
    pub fn prefixed(mut self, segment: PathSegment) -> Self {
        self.segments.insert(0, segment);
        self
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("<result>");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i == 0 => f.write_str(key)?,
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(idx) => write!(f, "[{idx}]")?,
            }
        }
        Ok(())
    }
}

/// What went wrong when decoding a single field.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// The expected key is absent.
    #[error("field is missing")]
    FieldMissing,
    /// The key is present but its value has the wrong shape.
    #[error("expected a JSON {expected}, found a JSON {found}")]
    FieldTypeMismatch { expected: WireType, found: WireType },
    /// A numeric value is fractional, not finite, or does not fit the
    /// integer type of the field.
    #[error("`{value}` is not an integer in the range of the field")]
    NumericFormat { value: String },
    /// The response contradicts the request, e.g. the node echoed a different
    /// account than the one asked for.
    #[error("expected `{expected}`, the node returned `{actual}`")]
    Consistency { expected: String, actual: String },
}

/// A decoding failure located inside a response, not yet attributed to the
/// method that produced the response.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("{kind} (at `{path}`)")]
pub struct FieldError {
    pub path: FieldPath,
    pub kind: DecodeErrorKind,
}

impl FieldError {
    pub fn new(path: FieldPath, kind: DecodeErrorKind) -> Self { Self { path, kind } }

    pub(crate) fn missing(key: &str) -> Self {
        Self::new(FieldPath::key(key), DecodeErrorKind::FieldMissing)
    }

    pub(crate) fn mismatch(path: FieldPath, expected: WireType, found: &Value) -> Self {
        Self::new(path, DecodeErrorKind::FieldTypeMismatch {
            expected,
            found: found.into(),
        })
    }

    pub(crate) fn numeric(path: FieldPath, value: impl ToString) -> Self {
        Self::new(path, DecodeErrorKind::NumericFormat {
            value: value.to_string(),
        })
    }

    /// Record that the error happened inside the value under `key`.
    pub fn within_key(mut self, key: &str) -> Self {
        self.path = self.path.prefixed(PathSegment::Key(key.to_owned()));
        self
    }

    /// Record that the error happened inside the array element at `idx`.
    pub fn within_index(mut self, idx: usize) -> Self {
        self.path = self.path.prefixed(PathSegment::Index(idx));
        self
    }

    /// Attribute the error to the RPC method whose response was decoded.
    pub fn in_method(self, method: &'static str) -> DecodeError {
        DecodeError {
            method,
            path: self.path,
            kind: self.kind,
        }
    }
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("Unexpected response to {method}: {kind} (at `{path}`)")]
/// The node's response to a method could not be decoded into the expected
/// record.
pub struct DecodeError {
    /// The RPC method that produced the response.
    pub method: &'static str,
    /// Location of the offending field.
    pub path:   FieldPath,
    pub kind:   DecodeErrorKind,
}

impl DecodeError {
    /// Whether the response was well formed but contradicted the request.
    pub fn is_consistency(&self) -> bool {
        matches!(self.kind, DecodeErrorKind::Consistency { .. })
    }
}

#[derive(Error, Debug)]
/// Errors that can occur when making queries. Either the transport failed,
/// or the node's response did not have the expected shape.
pub enum QueryError<E> {
    /// The transport failed. The error is the transport's own, unchanged.
    #[error(transparent)]
    Transport(E),
    /// The response could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl<E> QueryError<E> {
    /// Whether the failure happened in the transport.
    pub fn is_transport(&self) -> bool { matches!(self, QueryError::Transport(_)) }

    /// The decoding failure, if the transport call itself succeeded.
    pub fn decode_error(&self) -> Option<&DecodeError> {
        match self {
            QueryError::Transport(_) => None,
            QueryError::Decode(e) => Some(e),
        }
    }

    /// Recover the transport's error, if that is what failed.
    pub fn into_transport(self) -> Option<E> {
        match self {
            QueryError::Transport(e) => Some(e),
            QueryError::Decode(_) => None,
        }
    }
}

/// Result of a query. This is a simple alias for
/// [std::Result](https://doc.rust-lang.org/std/result/enum.Result.html) that
/// fixes the error type to be [`QueryError`] over the transport error `E`.
pub type QueryResult<A, E> = Result<A, QueryError<E>>;

/// Result of decoding a value nested somewhere in a response.
pub type FieldResult<A> = Result<A, FieldError>;
