//! Generic slot+generation handle table for FFI lifetime management.
//!
//! Prevents use-after-free across the C boundary: released handles have
//! stale generation counters and safely return `None` instead of causing UB.
//! Double-release is a safe no-op (returns `None`).
//!
//! Generations start at 1, so `0` is never a live handle and can serve as
//! the C-side null handle.

/// Generation given to a freshly pushed slot.
const FIRST_GENERATION: u32 = 1;

/// Handle encoding: upper 32 bits = slot index, lower 32 bits = generation.
fn encode(slot: u32, generation: u32) -> u64 {
    ((slot as u64) << 32) | (generation as u64)
}

fn decode(handle: u64) -> (u32, u32) {
    let slot = (handle >> 32) as u32;
    let generation = handle as u32;
    (slot, generation)
}

struct Slot<T> {
    generation: u32,
    data: Option<T>,
}

/// A slot+generation handle table mapping `u64` handles to owned values.
///
/// Reuses slots via a free list. Generation counters increment on removal,
/// making stale handles detectable without UB. Tracks how many values are
/// live so hosts can check for leaks.
pub(crate) struct HandleTable<T> {
    slots: Vec<Slot<T>>,
    free_list: Vec<u32>,
    live: usize,
}

impl<T> HandleTable<T> {
    /// Create an empty handle table.
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            live: 0,
        }
    }

    /// Insert a value and return its handle. Never returns 0.
    pub fn insert(&mut self, value: T) -> u64 {
        self.live += 1;
        if let Some(slot_idx) = self.free_list.pop() {
            let slot = &mut self.slots[slot_idx as usize];
            slot.data = Some(value);
            encode(slot_idx, slot.generation)
        } else {
            let slot_idx = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: FIRST_GENERATION,
                data: Some(value),
            });
            encode(slot_idx, FIRST_GENERATION)
        }
    }

    /// Get an immutable reference to the value behind a handle.
    ///
    /// Returns `None` if the handle is stale (wrong generation) or was never valid.
    pub fn get(&self, handle: u64) -> Option<&T> {
        let (slot_idx, generation) = decode(handle);
        let slot = self.slots.get(slot_idx as usize)?;
        if slot.generation != generation {
            return None;
        }
        slot.data.as_ref()
    }

    /// Get a mutable reference to the value behind a handle.
    ///
    /// Returns `None` if the handle is stale or invalid.
    pub fn get_mut(&mut self, handle: u64) -> Option<&mut T> {
        let (slot_idx, generation) = decode(handle);
        let slot = self.slots.get_mut(slot_idx as usize)?;
        if slot.generation != generation {
            return None;
        }
        slot.data.as_mut()
    }

    /// Remove the value behind a handle, returning it.
    ///
    /// Increments the generation counter and adds the slot to the free list.
    /// If the generation has reached `u32::MAX`, the slot is permanently retired
    /// (not returned to the free list) to prevent ABA handle resurrection after
    /// wraparound.
    /// Returns `None` if the handle is stale (double-remove is safe).
    pub fn remove(&mut self, handle: u64) -> Option<T> {
        let (slot_idx, generation) = decode(handle);
        let slot = self.slots.get_mut(slot_idx as usize)?;
        if slot.generation != generation {
            return None;
        }
        let value = slot.data.take()?;
        self.live -= 1;
        slot.generation = slot.generation.wrapping_add(1);
        // Only recycle the slot if the generation hasn't wrapped back to 0.
        // Generation 0 is never issued, so a wrapped slot would hand out the
        // null handle for slot 0 and collide with stale handles for others.
        if slot.generation != 0 {
            self.free_list.push(slot_idx);
        }
        Some(value)
    }

    /// Number of values currently owned through a live handle.
    pub fn len(&self) -> usize {
        self.live
    }
}
