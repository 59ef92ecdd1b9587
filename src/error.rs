use thiserror::Error;

/// Errors raised by the evaluation kernels.
///
/// Every error is detected before any output is written, so a failed call
/// never hands back a partially filled buffer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KernelError {
    /// An input array is not one-dimensional, or paired inputs differ in length.
    #[error("shape error: {0}")]
    Shape(String),

    /// A mode token (`order` / `axis`) was not recognized.
    #[error("argument error: {0}")]
    Argument(String),

    /// A value lies outside the numeric domain the kernels are defined on.
    #[error("domain error: {0}")]
    Domain(String),
}

pub type Result<T> = std::result::Result<T, KernelError>;

impl KernelError {
    pub(crate) fn shape(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        log::debug!("rejecting input: {}", msg);
        KernelError::Shape(msg)
    }

    pub(crate) fn argument(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        log::debug!("rejecting input: {}", msg);
        KernelError::Argument(msg)
    }

    pub(crate) fn domain(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        log::debug!("rejecting input: {}", msg);
        KernelError::Domain(msg)
    }
}
