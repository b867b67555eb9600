mod error;
mod queue;
mod sync;
mod worker;

pub use crate::error::QueueError;
pub use crate::queue::BoundedQueue;
pub use crate::sync::Alarm;
pub use crate::worker::{Consumer, Producer};
