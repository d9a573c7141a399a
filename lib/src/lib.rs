//!
//! This crate provides [`SortedBlockList`](./struct.SortedBlockList.html), a sorted,
//! duplicate-keeping list backed by a two-level "ragged" array structure: a directory
//! of blocks, each block holding a contiguous ascending run of elements.
//!
//! Both levels stay close to sqrt(N) in length through a doubling/splitting growth
//! policy, so search and insertion cost O(sqrt N) comparisons without any linked
//! nodes or tree balancing.
//!
//! # Example
//!
//! ```
//! use block_list::SortedBlockList;
//!
//! fn comparator(a: &i32, b: &i32) -> std::cmp::Ordering {
//!     a.cmp(b)
//! }
//!
//! let mut list = SortedBlockList::new(comparator);
//!
//! list.add(2);
//! list.add(3);
//! list.add(1);
//! list.add(2);
//!
//! assert_eq!(list.collect(), vec![1, 2, 2, 3]);
//! assert!(list.contains(&3));
//! ```
//!

mod block_list;
mod counting;
mod error;

pub use crate::block_list::{Iter, SortedBlockList};
pub use crate::counting::{counting, CmpCounter};
pub use crate::error::CapacityError;
