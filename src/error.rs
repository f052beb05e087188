use thiserror::Error;

/// The two recoverable failure modes of the envelope protocol.
///
/// Both are hard rejects: there is no partial-success case. On either error,
/// any plaintext already written to a caller-provided buffer must be treated
/// as unspecified — see [`crate::ecies`] for exactly which operations can
/// produce which error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EciesError {
    /// A public key, or an ephemeral point recovered from a stream prefix,
    /// failed validation: off-curve, the identity, too large for the field,
    /// or (after cofactor multiplication) collapsing to the identity.
    #[error("invalid point")]
    InvalidPoint,
    /// A chunk's CBC-MAC did not match the trailing tag.
    #[error("MAC verification failed")]
    MacFailure,
}
