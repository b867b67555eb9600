//! Producer and consumer workers around a shared `BoundedQueue`.

use std::sync::Arc;
use std::thread;

use log::trace;
use rand::Rng;

use crate::sync::Alarm;
use crate::BoundedQueue;

/// A Producer draws pseudo-random integers in [0,100) and pushes them on a
/// shared queue, reporting each value on stdout once the push went through.
///
/// It owns nothing beyond its id and a handle on the queue. It runs until its
/// alarm rings, which by default is never.
#[derive(Debug)]
pub struct Producer {
    id: u32,
    queue: Arc<BoundedQueue<i32>>,
}

impl Producer {
    pub fn new(id: u32, queue: Arc<BoundedQueue<i32>>) -> Producer {
        Producer { id, queue }
    }

    /// Produce values until the alarm rings.
    ///
    /// The alarm is checked once per iteration, before drawing the next value.
    /// Returns the number of values pushed, for callers that do ring it.
    pub fn run(self, alarm: Alarm) -> u64 {
        trace!("> producer {}: starting", self.id);

        let mut rng = rand::thread_rng();
        let mut count = 0;

        while !alarm.rung() {
            let value = rng.gen_range(0..100);

            self.queue.push(value);
            println!("P{} produced {}", self.id, value);

            count += 1;
        }

        trace!("> producer {}: alarm rung, {} values pushed", self.id, count);

        count
    }

    /// Spawn the producer on its own thread.
    pub fn spawn(self, alarm: Alarm) -> thread::JoinHandle<u64> {
        thread::spawn(move || self.run(alarm))
    }
}

/// A Consumer pops values off a shared queue and reports each one on stdout.
///
/// Consumer lines are indented so the two sides can be told apart in the
/// interleaved output. Like the producer, it runs until its alarm rings.
#[derive(Debug)]
pub struct Consumer {
    id: u32,
    queue: Arc<BoundedQueue<i32>>,
}

impl Consumer {
    pub fn new(id: u32, queue: Arc<BoundedQueue<i32>>) -> Consumer {
        Consumer { id, queue }
    }

    /// Consume values until the alarm rings.
    ///
    /// The alarm is checked once per iteration, before popping. A consumer
    /// parked in `pop` does not observe the alarm until a push wakes it.
    /// Returns the number of values popped.
    pub fn run(self, alarm: Alarm) -> u64 {
        trace!("> consumer {}: starting", self.id);

        let mut count = 0;

        while !alarm.rung() {
            let value = self.queue.pop();
            println!("                C{} consumed {}", self.id, value);

            count += 1;
        }

        trace!("> consumer {}: alarm rung, {} values popped", self.id, count);

        count
    }

    /// Spawn the consumer on its own thread.
    pub fn spawn(self, alarm: Alarm) -> thread::JoinHandle<u64> {
        thread::spawn(move || self.run(alarm))
    }
}
