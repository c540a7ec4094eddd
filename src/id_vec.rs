//! A generational slot arena that remembers insertion order.
//!
//! Keys stay valid until the entry they name is removed.  Removed slots are
//! recycled through a free list, and each reuse bumps the slot's generation so
//! that a stale key never aliases a newer entry.  Live entries are threaded on
//! a doubly linked list so iteration is in insertion order in either
//! direction.

use std::fmt::{self, Debug};

/// A stable key into an [`IdVec`].
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct IdVecKey {
    index: u32,
    generation: u32,
}

impl IdVecKey {
    /// The zero-based slot index.  Only unique among live entries.
    pub fn index(self) -> usize {
        self.index as usize
    }
}

enum SlotEntry<T> {
    Occupied {
        value: T,
        prev: Option<u32>,
        next: Option<u32>,
    },
    Free {
        next_free: Option<u32>,
    },
}

struct Slot<T> {
    generation: u32,
    entry: SlotEntry<T>,
}

pub struct IdVec<T> {
    slots: Vec<Slot<T>>,
    head: Option<u32>,
    tail: Option<u32>,
    free_head: Option<u32>,
    len: usize,
}

impl<T> Default for IdVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IdVec<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            tail: None,
            free_head: None,
            len: 0,
        }
    }

    /// Returns the number of live entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends a value at the end of the insertion order and returns its key.
    pub fn insert(&mut self, value: T) -> IdVecKey {
        let occupied = SlotEntry::Occupied {
            value,
            prev: self.tail,
            next: None,
        };
        let index = match self.free_head {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                let SlotEntry::Free { next_free } = slot.entry else {
                    panic!("corrupted free list at slot {index}");
                };
                self.free_head = next_free;
                slot.entry = occupied;
                index
            }
            None => {
                let index = u32::try_from(self.slots.len()).expect("IdVec index overflow");
                self.slots.push(Slot {
                    generation: 0,
                    entry: occupied,
                });
                index
            }
        };
        match self.tail {
            Some(tail) => self.set_next(tail, Some(index)),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.len += 1;
        IdVecKey {
            index,
            generation: self.slots[index as usize].generation,
        }
    }

    pub fn contains_key(&self, key: IdVecKey) -> bool {
        self.get(key).is_some()
    }

    pub fn get(&self, key: IdVecKey) -> Option<&T> {
        match self.slots.get(key.index as usize) {
            Some(Slot {
                generation,
                entry: SlotEntry::Occupied { value, .. },
            }) if *generation == key.generation => Some(value),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, key: IdVecKey) -> Option<&mut T> {
        match self.slots.get_mut(key.index as usize) {
            Some(Slot {
                generation,
                entry: SlotEntry::Occupied { value, .. },
            }) if *generation == key.generation => Some(value),
            _ => None,
        }
    }

    /// Removes the entry for `key`, returning its value, or `None` if the key
    /// is stale.
    pub fn remove(&mut self, key: IdVecKey) -> Option<T> {
        if !self.contains_key(key) {
            return None;
        }
        let index = key.index;
        let slot = &mut self.slots[index as usize];
        let entry = std::mem::replace(
            &mut slot.entry,
            SlotEntry::Free {
                next_free: self.free_head,
            },
        );
        slot.generation = slot.generation.wrapping_add(1);
        self.free_head = Some(index);
        self.len -= 1;

        let SlotEntry::Occupied { value, prev, next } = entry else {
            unreachable!("slot {index} was checked to be occupied");
        };
        match prev {
            Some(prev) => self.set_next(prev, next),
            None => self.head = next,
        }
        match next {
            Some(next) => self.set_prev(next, prev),
            None => self.tail = prev,
        }
        Some(value)
    }

    /// Removes every entry.  Keys issued before the call are invalidated.
    pub fn clear(&mut self) {
        let mut next_free = None;
        for (index, slot) in self.slots.iter_mut().enumerate().rev() {
            if matches!(slot.entry, SlotEntry::Occupied { .. }) {
                slot.generation = slot.generation.wrapping_add(1);
            }
            slot.entry = SlotEntry::Free { next_free };
            next_free = Some(index as u32);
        }
        self.free_head = next_free;
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Iterates over live entries in insertion order.  The iterator is
    /// double-ended, so `.rev()` walks from the newest entry.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            vec: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (IdVecKey, &mut T)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(index, slot)| match &mut slot.entry {
                SlotEntry::Occupied { value, .. } => Some((
                    IdVecKey {
                        index: index as u32,
                        generation: slot.generation,
                    },
                    value,
                )),
                SlotEntry::Free { .. } => None,
            })
    }

    fn links(&self, index: u32) -> (Option<u32>, Option<u32>) {
        match self.slots[index as usize].entry {
            SlotEntry::Occupied { prev, next, .. } => (prev, next),
            SlotEntry::Free { .. } => panic!("IdVec order list reaches free slot {index}"),
        }
    }

    fn set_next(&mut self, index: u32, new_next: Option<u32>) {
        if let SlotEntry::Occupied { next, .. } = &mut self.slots[index as usize].entry {
            *next = new_next;
        }
    }

    fn set_prev(&mut self, index: u32, new_prev: Option<u32>) {
        if let SlotEntry::Occupied { prev, .. } = &mut self.slots[index as usize].entry {
            *prev = new_prev;
        }
    }

    fn key_at(&self, index: u32) -> IdVecKey {
        IdVecKey {
            index,
            generation: self.slots[index as usize].generation,
        }
    }

    fn value_at(&self, index: u32) -> &T {
        match &self.slots[index as usize].entry {
            SlotEntry::Occupied { value, .. } => value,
            SlotEntry::Free { .. } => panic!("IdVec order list reaches free slot {index}"),
        }
    }
}

impl<T: Debug> Debug for IdVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Insertion-order iterator over an [`IdVec`].
pub struct Iter<'a, T> {
    vec: &'a IdVec<T>,
    front: Option<u32>,
    back: Option<u32>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (IdVecKey, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.front?;
        self.front = self.vec.links(index).1;
        self.remaining -= 1;
        Some((self.vec.key_at(index), self.vec.value_at(index)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.back?;
        self.back = self.vec.links(index).0;
        self.remaining -= 1;
        Some((self.vec.key_at(index), self.vec.value_at(index)))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
