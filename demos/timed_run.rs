use std::sync::Arc;
use std::thread;
use std::time::Duration;

use ecluse::{Alarm, BoundedQueue, Consumer, Producer};

const PRODUCERS: u32 = 3;
const CONSUMERS: u32 = 2;

/// Same pipeline as the main binary, but time-boxed: the alarm rings after a
/// second and the demo reports what each side got through.
pub fn main() {
    env_logger::init();

    let queue = Arc::new(BoundedQueue::new((PRODUCERS + CONSUMERS) as usize));
    let alarm = Alarm::new();

    let producers: Vec<_> = (1..=PRODUCERS)
        .map(|id| Producer::new(id, queue.clone()).spawn(alarm.clone()))
        .collect();
    let consumers: Vec<_> = (1..=CONSUMERS)
        .map(|id| Consumer::new(id, queue.clone()).spawn(alarm.clone()))
        .collect();

    thread::sleep(Duration::from_secs(1));

    // Ring the bell!
    alarm.ring();

    // Producers parked in push need room to notice the alarm.
    while producers.iter().any(|h| !h.is_finished()) {
        let _ = queue.try_pop();
        thread::yield_now();
    }

    for (id, p) in producers.into_iter().enumerate() {
        println!("> P{} pushed {} values", id + 1, p.join().unwrap());
    }

    // Consumers parked in pop need a last value to notice it.
    while consumers.iter().any(|h| !h.is_finished()) {
        let _ = queue.try_push(0);
        thread::yield_now();
    }

    for (id, c) in consumers.into_iter().enumerate() {
        println!("> C{} popped {} values", id + 1, c.join().unwrap());
    }
}
