use std::cmp::Ordering;
use std::fmt::Write;

use crate::error::CapacityError;

// Must be even so a split yields two equal halves.
const MIN_CAPACITY: usize = 4;

/// A sorted list keeping its elements in a two-level ragged array: a directory
/// of blocks, each block a fixed-capacity ascending run.
///
/// Duplicates are allowed; a new element is placed after every element that
/// compares equal to it. Elements are never removed (`clear` resets the whole
/// list). Both levels stay near sqrt(N): a full block doubles its capacity
/// while it is small, and splits into a new directory entry once its capacity
/// has caught up with the directory's.
pub struct SortedBlockList<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    comparator: C,
    blocks: Vec<Block<T>>,
    dir_capacity: usize,
    num_elements: usize,
}

struct Block<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> Block<T> {
    fn new(capacity: usize) -> Block<T> {
        Block {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    fn used(&self) -> usize {
        self.items.len()
    }

    fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }
}

// A logical position: directory index plus slot index. `slot` may equal the
// block's used count only on the last block, which is the end sentinel.
// Ordered lexicographically, matching element order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
struct Cursor {
    block: usize,
    slot: usize,
}

const START: Cursor = Cursor { block: 0, slot: 0 };

impl<T, C> SortedBlockList<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty list ordered by `comparator`.
    ///
    /// The directory always holds at least one block, even while empty.
    pub fn new(comparator: C) -> SortedBlockList<T, C> {
        let mut blocks = Vec::with_capacity(MIN_CAPACITY);
        blocks.push(Block::new(MIN_CAPACITY));
        SortedBlockList {
            comparator,
            blocks,
            dir_capacity: MIN_CAPACITY,
            num_elements: 0,
        }
    }

    /// Returns the number of stored elements.
    pub fn len(&self) -> usize {
        self.num_elements
    }

    pub fn is_empty(&self) -> bool {
        self.num_elements == 0
    }

    /// Drops every element, keeping the first block and the directory
    /// allocation for reuse.
    pub fn clear(&mut self) {
        self.blocks.truncate(1);
        self.blocks[0].items.clear();
        self.num_elements = 0;
    }

    /// Insert a value, after any elements comparing equal to it.
    ///
    /// Always succeeds; duplicates are allowed.
    pub fn add(&mut self, item: T) -> bool {
        let loc = self.find_back(&item);

        {
            let block = &mut self.blocks[loc.block];
            block.items.insert(loc.slot, item);
            self.num_elements += 1;

            if !block.is_full() {
                return true;
            }

            // Full block: while its capacity lags behind the directory's,
            // growing in place is cheaper than adding directory entries.
            if block.capacity < self.dir_capacity {
                block.capacity *= 2;
                let grown = block.capacity - block.items.len();
                block.items.reserve_exact(grown);
                return true;
            }
        }

        // Split into two half-full blocks of the original capacity and slot
        // the new one into the directory right after the old one.
        let capacity = self.blocks[loc.block].capacity;
        let half = capacity / 2;
        let mut tail = Vec::with_capacity(capacity);
        tail.extend(self.blocks[loc.block].items.drain(half..));
        self.blocks.insert(
            loc.block + 1,
            Block {
                items: tail,
                capacity,
            },
        );

        if self.blocks.len() == self.dir_capacity {
            self.dir_capacity *= 2;
            let grown = self.dir_capacity - self.blocks.len();
            self.blocks.reserve_exact(grown);
        }

        true
    }

    /// Check whether some stored element compares equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        let loc = self.find_front(item);
        let block = &self.blocks[loc.block];
        if loc.slot >= block.used() {
            return false;
        }
        (self.comparator)(&block.items[loc.slot], item) == Ordering::Equal
    }

    /// Returns a lazy iterator over the elements in ascending order.
    ///
    /// Every call starts a fresh pass from the beginning; concurrent
    /// iterators over the same list are independent.
    pub fn iter(&self) -> Iter<'_, T, C> {
        Iter {
            list: self,
            loc: START,
            remaining: self.num_elements,
        }
    }

    // First slot holding an element >= item, or the end sentinel. Scans the
    // directory forward against each block's last element, then the selected
    // block forward.
    fn find_front(&self, item: &T) -> Cursor {
        if self.num_elements == 0 {
            return START;
        }

        for (i, block) in self.blocks.iter().enumerate() {
            let last = &block.items[block.used() - 1];
            if (self.comparator)(item, last) != Ordering::Greater {
                let mut slot = 0;
                while (self.comparator)(item, &block.items[slot]) == Ordering::Greater {
                    slot += 1;
                }
                return Cursor { block: i, slot };
            }
        }

        // Past every stored element: one slot beyond the last block's run.
        let last = self.blocks.len() - 1;
        Cursor {
            block: last,
            slot: self.blocks[last].used(),
        }
    }

    // Slot just after the last element <= item; this is the insertion
    // position keeping duplicates in arrival order. Scans the directory
    // backward against each block's first element, then the selected block
    // backward.
    fn find_back(&self, item: &T) -> Cursor {
        if self.num_elements == 0 {
            return START;
        }

        for i in (0..self.blocks.len()).rev() {
            let block = &self.blocks[i];
            if (self.comparator)(item, &block.items[0]) != Ordering::Less {
                for slot in (0..block.used()).rev() {
                    if (self.comparator)(item, &block.items[slot]) != Ordering::Less {
                        return Cursor {
                            block: i,
                            slot: slot + 1,
                        };
                    }
                }
                // item >= the block's first element, so the backward scan
                // must stop inside the block for any total order.
                unreachable!(
                    "back-boundary search missed inside its block; comparator is not a total order"
                );
            }
        }

        START
    }

    // The single movement primitive shared by the iterator and `sub_list`.
    // Leaves the cursor at the end sentinel when no further block exists.
    fn advance(&self, loc: Cursor) -> Cursor {
        let mut loc = loc;
        loc.slot += 1;
        if loc.slot >= self.blocks[loc.block].used() && loc.block + 1 < self.blocks.len() {
            loc.block += 1;
            loc.slot = 0;
        }
        loc
    }

    /// Number of active directory entries.
    pub fn get_num_blocks(&self) -> usize {
        self.blocks.len()
    }

    /// Number of allocated directory entries.
    pub fn get_dir_capacity(&self) -> usize {
        self.dir_capacity
    }

    /// Smallest number of elements held by any block.
    pub fn get_block_fill_min(&self) -> usize {
        self.blocks.iter().map(|block| block.used()).min().unwrap_or(0)
    }

    /// Largest number of elements held by any block.
    pub fn get_block_fill_max(&self) -> usize {
        self.blocks.iter().map(|block| block.used()).max().unwrap_or(0)
    }

    /// Average number of elements per block. The directory is never empty,
    /// so this is well defined even for an empty list.
    pub fn get_block_fill_avg(&self) -> f64 {
        self.num_elements as f64 / self.blocks.len() as f64
    }
}

impl<T, C> SortedBlockList<T, C>
where
    C: Fn(&T, &T) -> Ordering,
    T: Clone,
{
    /// Collect the elements into a vector, in ascending order.
    pub fn collect(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Copy every element into the front of `dest`, in ascending order.
    ///
    /// Returns the filled prefix. Fails without writing anything when `dest`
    /// is too small to hold all elements.
    pub fn copy_into<'a>(&self, dest: &'a mut [T]) -> Result<&'a mut [T], CapacityError> {
        if dest.len() < self.num_elements {
            return Err(CapacityError {
                required: self.num_elements,
                capacity: dest.len(),
            });
        }
        for (slot, item) in dest.iter_mut().zip(self.iter()) {
            *slot = item.clone();
        }
        Ok(&mut dest[..self.num_elements])
    }
}

impl<T, C> SortedBlockList<T, C>
where
    C: Fn(&T, &T) -> Ordering + Clone,
    T: Clone,
{
    /// Returns a new, fully independent list holding the elements in
    /// `[from, to)` per the comparator.
    ///
    /// The copy is built by re-adding each element through `add`, so it
    /// shares no storage with the source; mutating either list never
    /// affects the other.
    pub fn sub_list(&self, from: &T, to: &T) -> SortedBlockList<T, C> {
        let mut loc = self.find_front(from);
        let hi = self.find_front(to);
        let mut result = SortedBlockList::new(self.comparator.clone());
        // An inverted range (`to` before `from`) selects nothing.
        if hi <= loc {
            return result;
        }
        while loc != hi && loc.slot < self.blocks[loc.block].used() {
            result.add(self.blocks[loc.block].items[loc.slot].clone());
            loc = self.advance(loc);
        }
        result
    }
}

impl<T, C> SortedBlockList<T, C>
where
    C: Fn(&T, &T) -> Ordering,
    T: std::fmt::Debug,
{
    /// Render the full two-level structure, one line per allocated directory
    /// slot, with unused element slots and unallocated directory entries
    /// visible. Intended for tooling and small examples.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for i in 0..self.dir_capacity {
            let _ = write!(out, "[{}] -> ", i);
            match self.blocks.get(i) {
                Some(block) => {
                    for slot in 0..block.capacity {
                        match block.items.get(slot) {
                            Some(item) => {
                                let _ = write!(out, "[{:?}]", item);
                            }
                            None => out.push_str("[ ]"),
                        }
                    }
                }
                None => out.push('-'),
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
impl<T, C> SortedBlockList<T, C>
where
    C: Fn(&T, &T) -> Ordering,
    T: Clone,
{
    fn block_contents(&self) -> Vec<Vec<T>> {
        self.blocks.iter().map(|block| block.items.clone()).collect()
    }

    fn block_capacities(&self) -> Vec<usize> {
        self.blocks.iter().map(|block| block.capacity).collect()
    }
}

/// Forward iterator over a [`SortedBlockList`], yielding elements in
/// ascending order.
pub struct Iter<'a, T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    list: &'a SortedBlockList<T, C>,
    loc: Cursor,
    remaining: usize,
}

impl<'a, T, C> Iterator for Iter<'a, T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let item = &self.list.blocks[self.loc.block].items[self.loc.slot];
        self.loc = self.list.advance(self.loc);
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, C> ExactSizeIterator for Iter<'a, T, C> where C: Fn(&T, &T) -> Ordering {}

impl<'a, T, C> IntoIterator for &'a SortedBlockList<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, C>;

    fn into_iter(self) -> Iter<'a, T, C> {
        self.iter()
    }
}
