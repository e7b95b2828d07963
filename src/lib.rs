#![deny(missing_docs)]

//! The **partitions** crate enumerates three families of combinatorial objects
//! built from a positive integer `n`:
//!
//! * all integer partitions of `n`, with `IntegerPartitions`,
//! * all integer partitions of `n` into exactly `m` parts, with `FixedPartitions`,
//! * all partitions of an `n`-element set into nonempty blocks, with `SetPartitions`
//!   (or `ArrayVecSetPartitions` / `SmallSetPartitions` to avoid heap allocation).
//!
//! Every generator starts on its first object, and moves in place to the next
//! one each time `increment`() is called, without rebuilding the object.
//! When `increment`() returns `false` the enumeration is over and the
//! generator is back on its first object. Use `get`() to look at the current
//! object; the view stays valid until the next call to `increment`() or `reset`().
//!
//! The orders are fixed:
//!
//! * integer partitions go from `[n]` down to `[1, 1, ..., 1]` in reverse
//!   lexicographic order of their parts, largest part first;
//! * partitions into `m` parts go from `[n - m + 1, 1, ..., 1]` to the most
//!   balanced one in colexicographic order: read from the last part backwards,
//!   each partition is lexicographically larger than the previous one
//!   (TAoCP 7.2.1.4, algorithm H);
//! * set partitions are restricted growth strings in lexicographic order, from
//!   a single block to one block per element (TAoCP 7.2.1.5, algorithm H).
//!
//! ```
//! use partitions::FixedPartitions;
//!
//! let mut p = FixedPartitions::new(8, 3).unwrap();
//! let mut all = Vec::new();
//! loop {
//!     all.push(p.get().to_vec());
//!     if !p.increment() {break;}
//! }
//! assert_eq!(all, [[6, 1, 1], [5, 2, 1], [4, 3, 1], [4, 2, 2], [3, 3, 2]]);
//! ```
//!
//! The `listing` and `cli` modules implement the `part` command line program
//! on top of the generators.

/// Module for the Incrementable, Label and Enumeration traits
pub mod traits
{
    use num_traits::{AsPrimitive, Bounded, One};
    use std::ops::{Add, AddAssign};

    /// Trait for things that can be incremented, like numbers
    pub trait Incrementable
    {
        /// Increment self by mutable reference
        fn increment(&mut self);

        /// Increment self and return it
        fn incremented(mut self) -> Self
            where Self: Sized
        {
            self.increment();
            self
        }
    }

    impl<T> Incrementable for T
        where T: One + Add<T, Output = T> + AddAssign<T>
    {
        fn increment(&mut self) {
            *self += One::one();
        }

        fn incremented(self) -> T {
            self + <T as One>::one()
        }
    }

    /// Block labels of a set partition.
    ///
    /// Implemented for every primitive integer type; labels start at
    /// `Default::default()` and grow with `increment`().
    pub trait Label: Copy + Default + PartialOrd + Incrementable + Bounded + AsPrimitive<usize> {}

    impl<T> Label for T
        where T: Copy + Default + PartialOrd + Incrementable + Bounded + AsPrimitive<usize> {}

    /// The iteration shape shared by all generators.
    pub trait Enumeration
    {
        /// The current object, as seen by callers
        type Object: ?Sized;

        /// Go back to the first object
        fn reset(&mut self);

        /// Move to the next object, returning `true`, or back to the first
        /// object when the current one was the last, returning `false`.
        fn increment(&mut self) -> bool;

        /// Returns the current object
        fn get(&self) -> &Self::Object;
    }
}

mod error;
pub mod cli;
pub mod fixed;
pub mod integer;
pub mod listing;
pub mod set;

pub use crate::error::Error;
pub use crate::fixed::{FixedPartitions, Parts};
pub use crate::integer::{IntegerPartitions, Multiplicities};
pub use crate::set::{ArrayVecSetPartitions, SetPartitions, SmallSetPartitions};
pub use crate::traits::Enumeration;
