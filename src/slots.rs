//! Fixed-capacity entity slot storage
//!
//! The world holds entities in bounded slot arrays (objects, NPCs, enemies)
//! where an empty slot is a perfectly normal state, not an error. This type
//! encapsulates the absence checks so iteration logic elsewhere only ever
//! sees live entities, in ascending slot order.

/// Stable identifier for a slot within one `SlotArray`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotId(usize);

impl SlotId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A bounded array of optional entities with stable slot ids.
pub struct SlotArray<T> {
    slots: Vec<Option<T>>,
}

impl<T> SlotArray<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        SlotArray { slots }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Place an entity in the first free slot. Returns `None` when full.
    pub fn insert(&mut self, value: T) -> Option<SlotId> {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.is_none() {
                *slot = Some(value);
                return Some(SlotId(index));
            }
        }
        None
    }

    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        self.slots.get_mut(id.0).and_then(|slot| slot.take())
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.slots.get(id.0).and_then(|slot| slot.as_ref())
    }

    /// Number of occupied slots.
    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Iterate live entities in ascending slot order.
    pub fn iter_live(&self) -> impl Iterator<Item = (SlotId, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|value| (SlotId(index), value)))
    }

    /// Mutable variant of [`iter_live`](Self::iter_live), same order.
    pub fn iter_live_mut(&mut self) -> impl Iterator<Item = (SlotId, &mut T)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_mut().map(|value| (SlotId(index), value)))
    }
}
