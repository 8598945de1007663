use crate::validation::Kind;
use thiserror::Error;

/// Schema-authoring fault raised while building validators.
///
/// These are bugs in the schema definition, not problems with the data being
/// validated, so they never travel through an [`ErrorSink`](crate::ErrorSink).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("field `{name}` is already registered on this validator")]
    DuplicateField { name: String },

    #[error("cannot attach {attachment} to {kind} validator")]
    NotAnObject { kind: Kind, attachment: &'static str },

    #[error("invalid string pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}
