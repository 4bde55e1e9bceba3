//! Errors produced while reading a scene description.

use thiserror::Error;

use crate::scene::ObjectKind;

/// Errors that can occur while parsing a scene.
///
/// Line numbers are 1-based and refer to the input stream.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Empty input file")]
    EmptyInput,

    #[error("line {line}: first object in input file was '{found}', should be 'camera'")]
    MissingCamera { line: usize, found: String },

    #[error("line {line}: invalid camera property or value '{token}'")]
    UnknownCameraProperty { line: usize, token: String },

    #[error("line {line}: camera value '{value}' does not follow a width or height property")]
    InvalidCameraValue { line: usize, value: String },

    #[error("line {line}: objects can only be type sphere, plane, or light, found '{found}'")]
    UnknownObjectType { line: usize, found: String },

    #[error("line {line}: property '{property}' is not allowed for a {kind}")]
    PropertyNotAllowedForType {
        line: usize,
        property: &'static str,
        kind: ObjectKind,
    },

    #[error("line {line}: invalid value or property '{token}'")]
    UnknownProperty { line: usize, token: String },

    #[error("line {line}: vector property '{property}' should include 3 numbers, found {found}")]
    VectorPropertyMalformed {
        line: usize,
        property: &'static str,
        found: usize,
    },

    #[error("line {line}: property '{property}' has no value")]
    MissingPropertyValue { line: usize, property: &'static str },

    #[error("line {line}: values for the '{property}' property must be positive numbers, found '{value}'")]
    PropertyValueOutOfRange {
        line: usize,
        property: &'static str,
        value: String,
    },

    #[error("line {line}: values for the '{property}' property must be numbers, found '{value}'")]
    PropertyValueNotNumeric {
        line: usize,
        property: &'static str,
        value: String,
    },

    /// `kind` is `None` for a line with no tokens at all.
    #[error(
        "line {line}: {} must have between {min} and {max} properties, found {count}",
        describe_kind(.kind)
    )]
    PropertyCountOutOfRange {
        line: usize,
        kind: Option<ObjectKind>,
        count: usize,
        min: usize,
        max: usize,
    },

    #[error("line {line}: more than {max} objects in input file")]
    TooManyObjects { line: usize, max: usize },
}

impl SceneError {
    /// Line of the input the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            SceneError::Io(_) | SceneError::EmptyInput => None,
            SceneError::MissingCamera { line, .. }
            | SceneError::UnknownCameraProperty { line, .. }
            | SceneError::InvalidCameraValue { line, .. }
            | SceneError::UnknownObjectType { line, .. }
            | SceneError::PropertyNotAllowedForType { line, .. }
            | SceneError::UnknownProperty { line, .. }
            | SceneError::VectorPropertyMalformed { line, .. }
            | SceneError::MissingPropertyValue { line, .. }
            | SceneError::PropertyValueOutOfRange { line, .. }
            | SceneError::PropertyValueNotNumeric { line, .. }
            | SceneError::PropertyCountOutOfRange { line, .. }
            | SceneError::TooManyObjects { line, .. } => Some(*line),
        }
    }
}

fn describe_kind(kind: &Option<ObjectKind>) -> String {
    match kind {
        Some(kind) => format!("a {}", kind),
        None => "an object line".to_string(),
    }
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;
