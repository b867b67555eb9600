//! This module contains the implementation of the `BoundedQueue` type.

use std::collections::VecDeque;

use log::trace;
use parking_lot::{Condvar, Mutex};

use crate::QueueError;

/// A BoundedQueue is a fixed-capacity, first-in first-out queue shared by any
/// number of producer and consumer threads.
///
/// It is a wrapper around a `VecDeque` guarded by a mutex and a pair of
/// condition variables, and is thread-safe.
///
/// A BoundedQueue's primary use case is to hand values from producer threads
/// over to consumer threads while bounding the amount of in-flight data:
/// `push` suspends its caller while the queue is full, and `pop` suspends its
/// caller while the queue is empty. Neither operation can fail, and the queue
/// has no close or shutdown state.
///
/// All values pushed on the queue come back out in push order, and each value
/// is returned by exactly one `pop`. Which thread's value lands at a given
/// position, and which thread receives it, is decided by lock contention.
///
/// # Examples
/// ```
/// use ecluse::BoundedQueue;
///
/// let queue: BoundedQueue<u64> = BoundedQueue::new(2);
/// queue.push(1);
/// queue.push(2);
///
/// assert_eq!(queue.len(), 2);
/// assert!(queue.is_full());
///
/// assert_eq!(queue.pop(), 1);
/// assert_eq!(queue.pop(), 2);
/// assert!(queue.is_empty());
/// ```
#[derive(Debug)]
pub struct BoundedQueue<T> {
    inner: Mutex<VecDeque<T>>,
    capacity: usize,
    not_full: Condvar,
    not_empty: Condvar,
}

impl<T> BoundedQueue<T> {
    /// Create a new empty queue holding at most `capacity` items.
    /// If `capacity` is 0, the queue will be created with a capacity of 1.
    ///
    /// # Examples
    /// ```
    /// use ecluse::BoundedQueue;
    ///
    /// let queue: BoundedQueue<u64> = BoundedQueue::new(5);
    /// ```
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);

        Self {
            inner: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
            not_full: Condvar::new(),
            not_empty: Condvar::new(),
        }
    }

    /// Get the current length of the queue.
    ///
    /// This is the number of items currently held, always between 0 and the
    /// capacity. Another thread may change it at any time, so the returned
    /// value is only a snapshot.
    ///
    /// # Examples
    /// ```
    /// use ecluse::BoundedQueue;
    ///
    /// let queue: BoundedQueue<u64> = BoundedQueue::new(5);
    /// queue.push(1);
    ///
    /// assert_eq!(queue.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Get the capacity of the queue.
    ///
    /// # Examples
    /// ```
    /// use ecluse::BoundedQueue;
    ///
    /// let queue: BoundedQueue<u64> = BoundedQueue::new(5);
    ///
    /// assert_eq!(queue.capacity(), 5);
    /// ```
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Is the queue empty ?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Is the queue at capacity ?
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity
    }

    /// Append an item at the tail of the queue.
    ///
    /// If the queue is at capacity, the calling thread is suspended until a
    /// consumer makes room. Once the item is in place, one thread blocked in
    /// `pop` is woken, if any. This operation cannot fail.
    ///
    /// # Arguments
    /// * `value` - The item to append.
    ///
    /// # Examples
    /// ```
    /// use ecluse::BoundedQueue;
    ///
    /// let queue: BoundedQueue<u64> = BoundedQueue::new(5);
    /// queue.push(1);
    ///
    /// assert_eq!(queue.pop(), 1);
    /// ```
    pub fn push(&self, value: T) {
        let mut queue = self.inner.lock();

        loop {
            // INVARIANT: the queue never grows past its capacity.
            if queue.len() < self.capacity {
                queue.push_back(value);
                self.not_empty.notify_one();

                return;
            }

            trace!("> queue full ({}), waiting for a pop...", self.capacity);
            self.not_full.wait(&mut queue);
        }
    }

    /// Remove and return the item at the head of the queue.
    ///
    /// If the queue is empty, the calling thread is suspended until a producer
    /// pushes an item. Once an item is taken, one thread blocked in `push` is
    /// woken, if any. This operation cannot fail.
    ///
    /// # Examples
    /// ```
    /// use ecluse::BoundedQueue;
    ///
    /// let queue: BoundedQueue<u64> = BoundedQueue::new(5);
    /// queue.push(1);
    /// queue.push(2);
    ///
    /// assert_eq!(queue.pop(), 1);
    /// assert_eq!(queue.pop(), 2);
    /// ```
    pub fn pop(&self) -> T {
        let mut queue = self.inner.lock();

        loop {
            if let Some(value) = queue.pop_front() {
                self.not_full.notify_one();

                return value;
            }

            trace!("> queue empty, waiting for a push...");
            self.not_empty.wait(&mut queue);
        }
    }

    /// Append an item at the tail of the queue, without blocking.
    ///
    /// If the queue is at capacity, the item is not appended and an error
    /// containing it is returned instead.
    ///
    /// # Arguments
    /// * `value` - The item to append.
    ///
    /// # Returns
    /// `Ok(())`, or an error containing the item if the queue is full.
    ///
    /// # Examples
    /// ```
    /// use ecluse::BoundedQueue;
    ///
    /// let queue: BoundedQueue<u64> = BoundedQueue::new(1);
    /// assert!(queue.try_push(1).is_ok());
    /// assert!(queue.try_push(2).is_err());
    /// ```
    pub fn try_push(&self, value: T) -> Result<(), QueueError<T>> {
        let mut queue = self.inner.lock();

        if queue.len() == self.capacity {
            return Err(QueueError::QueueFull(value));
        }

        queue.push_back(value);
        self.not_empty.notify_one();

        Ok(())
    }

    /// Remove and return the item at the head of the queue, without blocking.
    ///
    /// # Returns
    /// The head item, or `None` if the queue is empty.
    ///
    /// # Examples
    /// ```
    /// use ecluse::BoundedQueue;
    ///
    /// let queue: BoundedQueue<u64> = BoundedQueue::new(1);
    /// queue.push(1);
    ///
    /// assert_eq!(queue.try_pop(), Some(1));
    /// assert_eq!(queue.try_pop(), None);
    /// ```
    pub fn try_pop(&self) -> Option<T> {
        let mut queue = self.inner.lock();

        let value = queue.pop_front();

        if value.is_some() {
            self.not_full.notify_one();
        }

        value
    }
}
