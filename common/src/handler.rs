//! [`Handler`] abstractions.

use std::future::Future;

/// Asynchronous handler of an operation described by `Args`.
///
/// Commands, queries and infrastructure operations are all expressed as
/// [`Handler`] implementations, so a caller depends only on the operations it
/// actually performs.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    fn execute(
        &self,
        args: Args,
    ) -> impl Future<Output = Result<Self::Ok, Self::Err>>;
}
