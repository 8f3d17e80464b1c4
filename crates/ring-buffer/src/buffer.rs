//! Bounded FIFO Ring Buffer

use crate::RingBufferError;

/// Fixed-capacity FIFO buffer that overwrites its oldest element when full
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    /// Backing storage, grows up to `capacity` and is then reused in place
    storage: Vec<T>,
    /// Capacity of the buffer
    capacity: usize,
    /// Slot of the oldest element once the buffer is full (next overwrite target)
    head: usize,
    /// Total values pushed (for statistics)
    total_written: usize,
}

impl<T> RingBuffer<T> {
    /// Create a new ring buffer with given capacity
    pub fn new(capacity: usize) -> Result<Self, RingBufferError> {
        if capacity == 0 {
            return Err(RingBufferError::ZeroCapacity);
        }
        Ok(Self {
            storage: Vec::with_capacity(capacity),
            capacity,
            head: 0,
            total_written: 0,
        })
    }

    /// Push a value, returning the evicted oldest value if the buffer was full
    pub fn push(&mut self, value: T) -> Option<T> {
        self.total_written += 1;

        if self.storage.len() < self.capacity {
            self.storage.push(value);
            return None;
        }

        let evicted = std::mem::replace(&mut self.storage[self.head], value);
        self.head = (self.head + 1) % self.capacity;
        Some(evicted)
    }

    /// Get the number of values currently in the buffer
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Check if buffer is full
    pub fn is_full(&self) -> bool {
        self.storage.len() == self.capacity
    }

    /// Get the buffer capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get fill ratio (0.0 to 1.0)
    pub fn fill_ratio(&self) -> f64 {
        self.len() as f64 / self.capacity as f64
    }

    /// Iterate from the oldest to the newest value
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let (newer, older) = self.storage.split_at(self.head);
        older.iter().chain(newer.iter())
    }

    /// Oldest retained value
    pub fn oldest(&self) -> Option<&T> {
        self.iter().next()
    }

    /// Most recently pushed value
    pub fn newest(&self) -> Option<&T> {
        if self.storage.is_empty() {
            return None;
        }
        let idx = if self.head == 0 {
            self.storage.len() - 1
        } else {
            self.head - 1
        };
        self.storage.get(idx)
    }

    /// Get total values pushed (for statistics)
    pub fn total_written(&self) -> usize {
        self.total_written
    }

    /// Clear the buffer
    pub fn clear(&mut self) {
        self.storage.clear();
        self.head = 0;
    }
}

impl<T: Clone> RingBuffer<T> {
    /// Copy the contents out, oldest first
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}
