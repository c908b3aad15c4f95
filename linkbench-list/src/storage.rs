//! Growable slot arena with stable keys and slot reuse.
//!
//! Nodes of linked structures live here instead of in individually boxed
//! allocations. A slot is either occupied or vacant; vacant slots chain into
//! an intrusive free list, so removal is O(1) and freed slots are reused
//! (LIFO) by later insertions. A key stays valid until its slot is removed —
//! after that it can at worst observe a vacant slot, never a dangling
//! pointer.

use crate::Key;

/// Growable storage with stable keys.
///
/// Backed by a `Vec` of slots. Insertion pops the free list if a vacant slot
/// exists, otherwise appends (amortized O(1)). Capacity is bounded by the
/// key type's sentinel.
///
/// # Example
///
/// ```
/// use linkbench_list::SlotArena;
///
/// let mut arena: SlotArena<u64> = SlotArena::new();
/// let a = arena.insert(1);
/// let b = arena.insert(2);
///
/// assert_eq!(arena.remove(a), Some(1));
/// assert_eq!(arena.get(a), None);
/// assert_eq!(arena.get(b), Some(&2));
///
/// // The freed slot is reused
/// let c = arena.insert(3);
/// assert_eq!(c, a);
/// ```
#[derive(Debug, Clone)]
pub struct SlotArena<T, K: Key = u32> {
    slots: Vec<Slot<T, K>>,
    /// Head of the free list, `K::NONE` when no slot is vacant.
    free: K,
    occupied: usize,
}

#[derive(Debug, Clone)]
enum Slot<T, K: Key> {
    Occupied(T),
    Vacant { next_free: K },
}

impl<T, K: Key> Default for SlotArena<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K: Key> SlotArena<T, K> {
    /// Creates an empty arena.
    #[inline]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: K::NONE,
            occupied: 0,
        }
    }

    /// Creates an empty arena with room for `capacity` slots before
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: K::NONE,
            occupied: 0,
        }
    }

    /// Returns the number of slots the arena can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Returns the number of occupied slots.
    #[inline]
    pub const fn len(&self) -> usize {
        self.occupied
    }

    /// Returns `true` if no slots are occupied.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Inserts a value, returning its stable key.
    ///
    /// Reuses the most recently freed slot if one exists.
    ///
    /// # Panics
    ///
    /// Panics if the arena would grow past the key type's maximum.
    #[inline]
    pub fn insert(&mut self, value: T) -> K {
        let key = if self.free.is_some() {
            let key = self.free;
            let slot = std::mem::replace(&mut self.slots[key.as_usize()], Slot::Occupied(value));
            match slot {
                Slot::Vacant { next_free } => self.free = next_free,
                Slot::Occupied(_) => unreachable!("free list references an occupied slot"),
            }
            key
        } else {
            let index = self.slots.len();
            assert!(
                index < K::NONE.as_usize(),
                "arena size exceeds key type maximum"
            );
            self.slots.push(Slot::Occupied(value));
            K::from_usize(index)
        };

        self.occupied += 1;
        key
    }

    /// Removes and returns the value at `key`, if the slot is occupied.
    ///
    /// The slot joins the free list and will be reused by a later insert.
    #[inline]
    pub fn remove(&mut self, key: K) -> Option<T> {
        let index = key.as_usize();
        if !matches!(self.slots.get(index), Some(Slot::Occupied(_))) {
            return None;
        }

        let next_free = self.free;
        let Slot::Occupied(value) = std::mem::replace(&mut self.slots[index], Slot::Vacant { next_free })
        else {
            unreachable!("occupancy checked above")
        };

        self.free = key;
        self.occupied -= 1;
        Some(value)
    }

    /// Returns a reference to the value at `key`, if the slot is occupied.
    #[inline]
    pub fn get(&self, key: K) -> Option<&T> {
        match self.slots.get(key.as_usize()) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to the value at `key`, if the slot is
    /// occupied.
    #[inline]
    pub fn get_mut(&mut self, key: K) -> Option<&mut T> {
        match self.slots.get_mut(key.as_usize()) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns `true` if `key` addresses an occupied slot.
    #[inline]
    pub fn contains(&self, key: K) -> bool {
        matches!(self.slots.get(key.as_usize()), Some(Slot::Occupied(_)))
    }

    /// Removes all values.
    ///
    /// Drops every occupied slot and resets the free list. Allocated
    /// capacity is retained.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = K::NONE;
        self.occupied = 0;
    }
}
