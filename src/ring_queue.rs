use crate::error::SearchError;

/// Fixed-capacity circular FIFO used as the breadth-first frontier.
///
/// Unlike a plain circular buffer it refuses to overwrite entries that have not been popped yet:
/// [push_back](RingQueue::push_back) fails with [SearchError::CapacityExceeded] once all slots
/// are live.
#[derive(Clone, Debug)]
pub struct RingQueue<T> {
    slots: Vec<Option<T>>,
    head: usize,
    len: usize,
}

impl<T> RingQueue<T> {
    pub fn with_capacity(capacity: usize) -> RingQueue<T> {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        RingQueue {
            slots,
            head: 0,
            len: 0,
        }
    }
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }
    pub fn push_back(&mut self, item: T) -> Result<(), SearchError> {
        if self.is_full() {
            return Err(SearchError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }
        let tail = (self.head + self.len) % self.capacity();
        self.slots[tail] = Some(item);
        self.len += 1;
        Ok(())
    }
    /// The oldest entry, left in place.
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            self.slots[self.head].as_ref()
        }
    }
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.slots[self.head].take();
        self.head = (self.head + 1) % self.capacity();
        self.len -= 1;
        item
    }
}
