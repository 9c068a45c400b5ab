//! Error types for FHIR models

use crate::shape::ShapeKind;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Shape already registered: {0}")]
    DuplicateShape(String),

    #[error("Shape {name} is a {actual:?} shape, expected {expected:?}")]
    WrongShapeKind {
        name: String,
        expected: ShapeKind,
        actual: ShapeKind,
    },

    #[error("Invalid decimal: {0}")]
    InvalidDecimal(String),

    #[error("Invalid {expected} value: {value}")]
    InvalidPrimitive {
        expected: &'static str,
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
