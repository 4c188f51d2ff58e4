//! Pipeline trait.
use crate::error::Error;

/// This trait must be implemented for each Pipeline,
/// and is generic over the return type so that
/// pipelines can hand their result back to the caller
/// on top of persisting it.
pub trait Pipeline<T> {
    fn version() -> &'static str;
    fn run(&self) -> Result<T, Error>;
}
