use std::num::ParseIntError;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FindError {
    #[error("value {token:?} at position {position} is not a 32-bit integer: {source}")]
    InvalidInput {
        position: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("search was cancelled before the sweep completed")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, FindError>;
