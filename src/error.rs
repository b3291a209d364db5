use std::backtrace::Backtrace;
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised when a problem definition violates the caller contract.
///
/// Note that an unsatisfiable problem is *not* an error: the engine reports
/// it as a normal negative result. These variants only cover malformed input.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("constraint references undeclared variable {0}")]
    UndeclaredVariable(String),
    #[error("domain for variable {0} contains duplicate value {1}")]
    DuplicateDomainValue(String, String),
    #[error("{0}")]
    Custom(String),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Inner: {inner}\n{backtrace}")]
    Inner {
        inner: Box<SolverError>,
        backtrace: Box<Backtrace>,
    },
}

impl From<SolverError> for Error {
    fn from(inner: SolverError) -> Self {
        Error::Inner {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}
