/// Trait for defining ordering strategies
///
/// Implement this trait to plug a new ordering behavior into a
/// [`Context`](crate::Context). Implementations should be stateless:
/// the output depends only on the input sequence.
pub trait OrderStrategy: Send + Sync {
    /// Get the strategy name for logging and identification
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Reorder the sequence
    ///
    /// The sequence is handed over by value, so implementations are free to
    /// reorder it in place and return it.
    fn order(&self, data: Vec<String>) -> Vec<String>;
}

impl<S: OrderStrategy + ?Sized> OrderStrategy for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn order(&self, data: Vec<String>) -> Vec<String> {
        (**self).order(data)
    }
}
