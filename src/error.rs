/// Errors returned by the calculator operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("division by zero")]
    DivisionByZero,
}

impl Error {
    /// Every calculator error is caused by a bad argument.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Error::DivisionByZero => true,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
