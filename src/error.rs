use crate::Strategy;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Unowned reference outlived the object it points to.
    #[error("unowned reference was accessed after its object was dropped")]
    Deallocated,
    #[error("cannot capture an absent object as {strategy}")]
    MissingObject { strategy: Strategy },
    #[error("unknown capture strategy `{0}`, expected one of `weak`, `strong` or `unowned`")]
    UnknownStrategy(String),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
