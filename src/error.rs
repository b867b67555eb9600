use thiserror::Error;

/// Error type for BoundedQueue
#[derive(Debug, Error)]
pub enum QueueError<T> {
    /// Queue is at capacity. The rejected value is handed back to the caller.
    #[error("Queue is full.")]
    QueueFull(T),
}
