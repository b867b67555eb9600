use std::sync::Arc;

use ecluse::{Alarm, BoundedQueue, Consumer, Producer};

const PRODUCERS: u32 = 3;
const CONSUMERS: u32 = 2;

pub fn main() {
    env_logger::init();

    // Reference configuration: queue sized to the total worker count.
    let queue = Arc::new(BoundedQueue::new((PRODUCERS + CONSUMERS) as usize));

    // The alarm is never rung, so the workers run until the process is killed.
    let alarm = Alarm::new();

    let mut workers = Vec::with_capacity((PRODUCERS + CONSUMERS) as usize);

    for id in 1..=PRODUCERS {
        workers.push(Producer::new(id, queue.clone()).spawn(alarm.clone()));
    }
    for id in 1..=CONSUMERS {
        workers.push(Consumer::new(id, queue.clone()).spawn(alarm.clone()));
    }

    // Block on the worker threads instead of spinning; none of them returns.
    for worker in workers {
        let _ = worker.join();
    }
}
