/// Errors reported by fallible constructors
pub mod errs;

/// A probabilistic ordered map built on a multi-level [`skip list`]
///
/// [`skip list`]: https://en.wikipedia.org/wiki/Skip_list
pub mod skiplist;

pub use skiplist::{
    GeometricalLevelGenerator,
    LevelGenerator,
    SkipList,
};
