//! Error types for the dammgen library.
//!
//! This module provides comprehensive error handling using the `thiserror` crate,
//! with specific error variants for Galois field arithmetic, quasigroup
//! construction, alphabet validation, and oracle certification.

use thiserror::Error;

/// The main error type for the dammgen library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ============ Galois Field Errors ============
    /// A value passed to field or quasigroup arithmetic is outside `0..order`.
    #[error("element {value} is out of range for order {order}, must be in 0..{order}")]
    ElementOutOfRange {
        /// The invalid element value.
        value: u32,
        /// The order of the structure.
        order: u32,
    },

    /// No multiplicative inverse exists for the element.
    ///
    /// For fields this is the zero element; for quasigroups an exhausted
    /// inverse search indicates a broken Latin-square invariant.
    #[error("no inverse exists for element {value} in order {order}")]
    NoInverse {
        /// The element with no inverse.
        value: u32,
        /// The order of the structure.
        order: u32,
    },

    /// No irreducible polynomial is known for the requested field degree.
    #[error("no irreducible polynomial available for GF(2^{0})")]
    NoIrreduciblePolynomial(u32),

    // ============ Construction Errors ============
    /// The requested quasigroup order is provably unconstructible or invalid.
    #[error("no weakly totally anti-symmetric quasigroup of order {order}: {reason}")]
    UnsupportedOrder {
        /// The requested order.
        order: u32,
        /// Why no construction is available.
        reason: &'static str,
    },

    // ============ Alphabet Errors ============
    /// An input string contains a character absent from the configured alphabet.
    #[error("character {0:?} is not part of the configured alphabet")]
    ForeignCharacter(char),

    /// The supplied alphabet is empty or contains duplicate symbols.
    #[error("invalid alphabet: {message}")]
    InvalidAlphabet {
        /// Description of what is invalid.
        message: String,
    },

    // ============ Verification Errors ============
    /// Oracle certification of an algebraic property failed.
    #[error("verification failed: {message}")]
    VerificationFailed {
        /// Description of what verification failed.
        message: String,
    },
}

/// A specialized `Result` type for dammgen operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Create a new `InvalidAlphabet` error.
    #[must_use]
    pub fn invalid_alphabet(message: impl Into<String>) -> Self {
        Self::InvalidAlphabet {
            message: message.into(),
        }
    }

    /// Create a new `VerificationFailed` error.
    #[must_use]
    pub fn verification_failed(message: impl Into<String>) -> Self {
        Self::VerificationFailed {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::ElementOutOfRange { value: 9, order: 8 };
        assert!(err.to_string().contains("9"));
        assert!(err.to_string().contains("out of range"));

        let err = Error::NoInverse { value: 0, order: 16 };
        assert!(err.to_string().contains("no inverse"));
        assert!(err.to_string().contains("16"));

        let err = Error::UnsupportedOrder {
            order: 6,
            reason: "proven impossibility",
        };
        assert!(err.to_string().contains("6"));
        assert!(err.to_string().contains("proven impossibility"));

        let err = Error::ForeignCharacter('x');
        assert!(err.to_string().contains("'x'"));
    }

    #[test]
    fn test_error_equality() {
        let err1 = Error::NoIrreduciblePolynomial(40);
        let err2 = Error::NoIrreduciblePolynomial(40);
        let err3 = Error::NoIrreduciblePolynomial(17);

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }
}
