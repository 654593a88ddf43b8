use thiserror::Error;

/// The error returned when requesting the extrema of a tree containing no
/// keys.
///
/// Looking up or removing an absent key is a normal negative result and is
/// never reported through this type.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("cannot take the minimum or maximum of an empty tree")]
pub struct EmptyTreeError;
