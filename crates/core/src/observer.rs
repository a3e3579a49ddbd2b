/// Receives integration events as they are produced.
///
/// Observers let callers monitor an integration without changing its API,
/// enabling logging, recording, or progress reporting. Fixed-step runs always
/// complete every requested step, so observers cannot steer the integrator.
///
/// Closures automatically implement `Observer`, and a built-in impl for `()`
/// provides a no-op observer.
pub trait Observer<E> {
    /// Observes an integration event.
    fn observe(&mut self, event: &E);
}

/// Blanket implementation for observer closures.
impl<E, F> Observer<E> for F
where
    F: FnMut(&E),
{
    fn observe(&mut self, event: &E) {
        self(event);
    }
}

/// A no-op observer.
impl<E> Observer<E> for () {
    fn observe(&mut self, _event: &E) {}
}
