use core::ops::Range;

use thiserror::Error;

/// The ways parsing input can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ErrorKind {
    #[error("not an integer or integer overflow `{0}`")]
    NotInteger(&'static str),
    #[error("not utf-8")]
    NotUtf8,
    #[error("bad array; expected {0} elements, but got {1}")]
    BadArray(usize, usize),
    #[error("expected line")]
    ExpectedLine,
    #[error("expected tuple of length `{0}`")]
    ExpectedTuple(usize),
    #[error("expected split on `{0:?}`")]
    ExpectedSplit(char),
    #[error("unexpected eof")]
    UnexpectedEof,
}

/// Error raised while processing input.
///
/// The span points at the offending bytes of the original input; it is
/// turned into a `path:line:col` rendering when the error surfaces (see
/// [crate::cli::error_context]).
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct InputError {
    span: Range<usize>,
    kind: ErrorKind,
}

impl InputError {
    #[inline]
    pub(crate) fn new(span: Range<usize>, kind: ErrorKind) -> Self {
        Self { span, kind }
    }

    /// The kind of error raised.
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Byte range of the original input the error refers to.
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}
