//! An AVL-balanced interval tree keyed by intervals over totally-ordered
//! temporal points.
//!
//! A [`TemporalTree`] maps [`Interval`] keys to opaque payloads. Intervals are
//! ordered by their start point, tie-broken by their end point, and that total
//! order (not overlap) is the tree's key space, so intervals that overlap or
//! share an endpoint coexist as distinct entries.
//!
//! The point type is anything totally ordered: a calendar date, a date-time,
//! a plain integer. The tree never inspects a point beyond comparing it:
//!
//! ```
//! use temporavl::{Interval, TemporalTree};
//!
//! let mut calendar = TemporalTree::default();
//!
//! calendar.insert(Interval::new(5, 10)?, "standup");
//! calendar.insert(Interval::new(12, 14)?, "lunch");
//!
//! assert_eq!(calendar.get(&Interval::new(12, 14)?), Some(&"lunch"));
//!
//! // In-order traversal yields entries sorted by (start, end).
//! let names = calendar.iter().map(|(_, v)| *v).collect::<Vec<_>>();
//! assert_eq!(names, ["standup", "lunch"]);
//! # Ok::<(), temporavl::InvalidInterval>(())
//! ```
//!
//! Lookups ([`TemporalTree::get`]) match exact interval endpoints only.
//! Overlap queries go through [`TemporalTree::select`] or
//! [`TemporalTree::overlaps`], which visit the full tree and filter by
//! predicate.
//!
//! The tree is a plain single-threaded structure: no locking, no I/O, no
//! suspension points. Callers requiring shared access serialise it externally.

#![warn(missing_debug_implementations, rust_2018_idioms, unused_must_use)]

mod interval;
mod iter;
mod node;
mod tree;

pub use interval::{Interval, InvalidInterval};
pub use iter::OwnedIter;
pub use tree::{TemporalTree, Traversal};
