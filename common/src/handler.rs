//! [`Handler`] abstractions.

/// Executable handler.
///
/// Execution is synchronous: every operation completes within a single call,
/// so the caller may drive it straight from an input event.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    ///
    /// # Errors
    ///
    /// Errors if the execution fails. See [`Handler::Err`] of the concrete
    /// implementation.
    fn execute(&mut self, args: Args) -> Result<Self::Ok, Self::Err>;
}
