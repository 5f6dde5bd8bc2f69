//! Error types for shadervec

use thiserror::Error;

/// Main error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Vector error: {0}")]
    Vector(#[from] VectorError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// Errors raised by vector accessors and swizzle selectors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    #[error("Component index {index} out of range for a {len}-component vector")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid swizzle component: '{0}'")]
    InvalidComponent(char),

    #[error("Swizzle mixes xyz and rgb names: {0}")]
    MixedNaming(String),

    #[error("Swizzle selects {found} components, expected {expected}")]
    SelectorLength { expected: usize, found: usize },

    #[error("Swizzle {0} repeats a component and cannot be written")]
    RepeatedComponent(String),
}

/// Result type alias for shadervec operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VectorError::IndexOutOfRange { index: 3, len: 3 };
        assert_eq!(
            format!("{}", err),
            "Component index 3 out of range for a 3-component vector"
        );

        let err = VectorError::SelectorLength { expected: 2, found: 4 };
        assert_eq!(format!("{}", err), "Swizzle selects 4 components, expected 2");

        let err = VectorError::RepeatedComponent("xxy".to_string());
        assert_eq!(
            format!("{}", err),
            "Swizzle xxy repeats a component and cannot be written"
        );
    }

    #[test]
    fn test_error_conversion() {
        let vec_err = VectorError::InvalidComponent('q');
        let err: Error = vec_err.into();
        assert!(matches!(err, Error::Vector(VectorError::InvalidComponent('q'))));
        assert_eq!(format!("{}", err), "Vector error: Invalid swizzle component: 'q'");
    }
}
