//! Enumerates the distinct zero-sum triples of an integer sequence.

pub mod cancel;
pub mod error;
pub mod input;
pub mod sweep;
pub mod triple;

pub use cancel::CancellationToken;
pub use error::FindError;
pub use sweep::{find_zero_sum_triples, find_zero_sum_triples_until, to_nested};
pub use triple::Triple;
