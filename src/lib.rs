//! An in-memory ordered index built on a [`skip list`], the structure a
//! memtable sits on.
//!
//! ```
//! use cesium_skiplist::{
//!     RngSource,
//!     SkipList,
//! };
//!
//! let mut list = SkipList::new(RngSource::from_entropy(), 0.5).unwrap();
//! list.insert(3, "test3");
//! list.insert(1, "test1");
//!
//! assert_eq!(list.get(&3), Some(&"test3"));
//! assert!(list.search(&9).is_none());
//! ```
//!
//! [`skip list`]: https://en.wikipedia.org/wiki/Skip_list

/// Tunables for height sampling.
pub mod config;
pub mod errs;
/// Pluggable randomness for height sampling.
pub mod random;
pub mod skiplist;

pub use config::SkipListConfig;
pub use errs::SkipListError;
pub use random::{
    RandomSource,
    RngSource,
    SequenceSource,
};
pub use skiplist::{
    LevelGenerator,
    Node,
    SkipList,
};
