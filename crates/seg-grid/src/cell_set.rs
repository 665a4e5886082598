//! `CellSet`: a set of grid coordinates with O(1) insert, remove,
//! membership, and uniform random choice.
//!
//! Members live in a dense `Vec<Coord>`; a slot table indexed by
//! row-major cell index records each member's position in that vector
//! (`NO_SLOT` when absent).  Removal is swap-remove, so the member order is
//! a permutation that shifts as cells come and go.  It is never sorted.
//!
//! Coordinates outside the `width × height` rectangle are never members:
//! `insert` and `remove` reject them and `contains` reports `false`.

use seg_core::{Coord, SimRng};

const NO_SLOT: u32 = u32::MAX;

#[derive(Clone, Debug)]
pub struct CellSet {
    width:   u32,
    height:  u32,
    members: Vec<Coord>,
    slots:   Vec<u32>,
}

impl CellSet {
    /// An empty set over a `width × height` grid.
    pub fn new(width: u32, height: u32) -> Self {
        let cells = width as usize * height as usize;
        Self {
            width,
            height,
            members: Vec::new(),
            slots:   vec![NO_SLOT; cells],
        }
    }

    /// Build from `coords` in iteration order.  Duplicates and
    /// out-of-range coordinates are ignored.
    pub fn from_coords<I>(width: u32, height: u32, coords: I) -> Self
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut set = Self::new(width, height);
        for c in coords {
            set.insert(c);
        }
        set
    }

    #[inline]
    fn in_bounds(&self, c: Coord) -> bool {
        c.in_bounds(self.width, self.height)
    }

    #[inline]
    fn slot_index(&self, c: Coord) -> usize {
        c.row as usize * self.width as usize + c.col as usize
    }

    /// Add `c`; returns `false` if it was already present or lies outside
    /// the grid.
    pub fn insert(&mut self, c: Coord) -> bool {
        if !self.in_bounds(c) {
            return false;
        }
        let i = self.slot_index(c);
        if self.slots[i] != NO_SLOT {
            return false;
        }
        self.slots[i] = self.members.len() as u32;
        self.members.push(c);
        true
    }

    /// Remove `c`; returns `false` if it was not present.
    pub fn remove(&mut self, c: Coord) -> bool {
        if !self.in_bounds(c) {
            return false;
        }
        let i = self.slot_index(c);
        let slot = self.slots[i];
        if slot == NO_SLOT {
            return false;
        }
        self.members.swap_remove(slot as usize);
        if let Some(&moved) = self.members.get(slot as usize) {
            let j = self.slot_index(moved);
            self.slots[j] = slot;
        }
        self.slots[i] = NO_SLOT;
        true
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.in_bounds(c) && self.slots[self.slot_index(c)] != NO_SLOT
    }

    /// Uniformly random member, or `None` if the set is empty.
    #[inline]
    pub fn choose(&self, rng: &mut SimRng) -> Option<Coord> {
        rng.choose(&self.members).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in current (unsorted) order.
    #[inline]
    pub fn as_slice(&self) -> &[Coord] {
        &self.members
    }

    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.members.iter().copied()
    }

    /// Check that the slot table and the member list agree.
    pub(crate) fn is_consistent(&self) -> bool {
        let indexed = self.slots.iter().filter(|&&s| s != NO_SLOT).count();
        indexed == self.members.len()
            && self
                .members
                .iter()
                .enumerate()
                .all(|(pos, &c)| self.slots[self.slot_index(c)] == pos as u32)
    }
}
