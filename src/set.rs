//! Partitions of the set `{0, 1, ..., n - 1}` into nonempty blocks.
//!
//! Set partitions are represented as restricted growth strings: one label per
//! element, such that two elements have the same label iff they are in the same
//! block, the first label is `Default::default()`, and every label is at most one
//! more than the largest label before it.
//!
//! See <http://www-cs-faculty.stanford.edu/~uno/fasc3b.ps.gz> page 27 for the
//! algorithm used to enumerate them.

use arrayvec::ArrayVec;
use num_traits::AsPrimitive;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, Index};
use std::slice;

use crate::error::Error;
use crate::traits::{Enumeration, Incrementable, Label};

// largest `n` whose labels `0..n` all fit in `T`
fn max_len<T: Label>() -> usize {
    T::max_value().as_().saturating_add(1)
}

fn check_len<T: Label>(n: usize, capacity: usize) -> Result<(), Error> {
    if n == 0 {
        return Err(Error::EmptySet);
    }
    let max = max_len::<T>().min(capacity);
    if n > max {
        return Err(Error::TooLarge {n, max});
    }
    Ok(())
}

/// Checks if a sequence is a restricted growth string.
pub fn is_restricted_growth<T: Label>(labels: &[T]) -> bool {
    let mut m = T::default();
    for ai in labels {
        if !(*ai <= m) {
            return false;
        }
        let ai1 = ai.incremented();
        if ai1 > m {
            m = ai1;
        }
    }
    true
}

macro_rules! impl_set_partitions {
    ($SP:ty, {$($impl:tt)*}, {$($impl_a:tt)*}) => {
        $($impl)* $SP {
            /// Returns the restricted growth string of the current set partition
            pub fn get(&self) -> &[T] {
                &self.a
            }

            /// Returns the size of the set being partitioned
            pub fn len(&self) -> usize {
                self.a.len()
            }

            /// Returns the number of blocks in the current set partition
            pub fn num_blocks(&self) -> usize {
                self.blocks
            }

            /// Returns the blocks of the current set partition, each one listing its
            /// elements in increasing order, blocks ordered by their smallest element
            pub fn blocks(&self) -> Vec<Vec<usize>> {
                let mut r = vec![Vec::new(); self.blocks];
                for (i, ai) in self.a.iter().enumerate() {
                    r[ai.as_()].push(i);
                }
                r
            }

            /// Reset to the set partition with a single block
            pub fn reset(&mut self) {
                let one = T::default().incremented();
                for ai in self.a.iter_mut() {
                    *ai = T::default();
                }
                for bi in self.b.iter_mut() {
                    *bi = one;
                }
                self.m = if self.a.len() > 1 {one} else {T::default()};
                self.blocks = 1;
            }

            /// Move to the next set partition in lexicographic order of sequences,
            /// returning `true`, or to the single block partition, returning `false`.
            #[inline]
            pub fn increment(&mut self) -> bool {
                let n = self.a.len();
                if n < 2 {
                    return false;
                }

                let al = &mut self.a[n - 1];
                if *al != self.m {
                    al.increment();
                    if *al == self.m {
                        self.blocks += 1;
                    }
                    debug_assert!(self.is_consistent());
                    return true;
                }

                self.increment_slowpath()
            }

            fn increment_slowpath(&mut self) -> bool {
                let n = self.a.len();

                // b[0] = 1 != a[0] stops the scan
                let mut j = n - 2;
                while self.a[j] == self.b[j] {
                    j -= 1;
                }
                if j == 0 {
                    self.reset();
                    return false;
                }

                self.a[j].increment();
                let bj = self.b[j];
                let m = if self.a[j] == bj {bj.incremented()} else {bj};
                for ak in &mut self.a[(j + 1)..] {
                    *ak = T::default();
                }
                for bk in &mut self.b[(j + 1)..] {
                    *bk = m;
                }
                self.m = m;
                self.blocks = m.as_();

                debug_assert!(self.is_consistent());
                true
            }

            fn is_consistent(&self) -> bool {
                let max = self.a.iter().map(|ai| ai.as_()).max().unwrap_or(0);
                is_restricted_growth(&self.a) && self.blocks == max + 1
            }
        }

        $($impl)* Enumeration for $SP {
            type Object = [T];

            fn reset(&mut self) {
                Self::reset(self);
            }

            fn increment(&mut self) -> bool {
                Self::increment(self)
            }

            fn get(&self) -> &[T] {
                Self::get(self)
            }
        }

        $($impl)* PartialEq<$SP> for $SP {
            fn eq(&self, other: &Self) -> bool {
                self.a[..].eq(&other.a[..])
            }
        }

        $($impl)* Eq for $SP {}

        $($impl)* Hash for $SP
            where T: Hash {
            fn hash<HH: Hasher>(&self, state: &mut HH) {
                self.a[..].hash(state);
            }
        }

        $($impl)* Deref for $SP {
            type Target = [T];

            fn deref(&self) -> &Self::Target {
                self.get()
            }
        }

        $($impl)* AsRef<[T]> for $SP {
            fn as_ref(&self) -> &[T] {
                self.get()
            }
        }

        $($impl)* Index<usize> for $SP {
            type Output = T;

            fn index(&self, index: usize) -> &T {
                &self.get()[index]
            }
        }

        $($impl_a)* IntoIterator for &'a $SP {
            type Item = &'a T;
            type IntoIter = slice::Iter<'a, T>;

            fn into_iter(self) -> slice::Iter<'a, T> {
                self.a.iter()
            }
        }

        /// Writes the blocks with 1-based elements, e.g. `{1, 3} {2}`
        $($impl)* fmt::Display for $SP {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                for (i, block) in self.blocks().iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{{")?;
                    for (k, x) in block.iter().enumerate() {
                        if k > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", x + 1)?;
                    }
                    write!(f, "}}")?;
                }
                Ok(())
            }
        }
    }
}

/// Enumerates set partitions, stored in a `Vec`
///
/// For sizes up to 16, `SmallSetPartitions` avoids the heap allocation.
#[derive(Debug, Clone)]
pub struct SetPartitions<T = usize>
{
    a: Vec<T>,
    // b[j] is the largest label a[j] may take
    b: Vec<T>,
    // same, for the last position
    m: T,
    blocks: usize
}

impl<T: Label> SetPartitions<T>
{
    /// Create the generator for a set of size `n`, positioned on the single block partition
    pub fn new(n: usize) -> Result<Self, Error> {
        check_len::<T>(n, usize::MAX)?;
        let mut r = SetPartitions {a: vec![T::default(); n], b: vec![T::default(); n - 1], m: T::default(), blocks: 1};
        r.reset();
        Ok(r)
    }

    /// Returns the largest set size this label type supports
    pub fn max_len() -> usize {
        max_len::<T>()
    }
}

impl_set_partitions!(SetPartitions<T>, {impl<T: Label>}, {impl<'a, T: Label>});

/// Enumerates set partitions of at most `N` elements, stored in `ArrayVec`s
#[derive(Debug, Clone)]
pub struct ArrayVecSetPartitions<T, const N: usize>
{
    a: ArrayVec<T, N>,
    b: ArrayVec<T, N>,
    m: T,
    blocks: usize
}

impl<T: Label, const N: usize> ArrayVecSetPartitions<T, N>
{
    /// Create the generator for a set of size `n`, positioned on the single block partition
    pub fn new(n: usize) -> Result<Self, Error> {
        check_len::<T>(n, N)?;
        let mut r = ArrayVecSetPartitions {
            a: (0..n).map(|_| T::default()).collect(),
            b: (1..n).map(|_| T::default()).collect(),
            m: T::default(),
            blocks: 1
        };
        r.reset();
        Ok(r)
    }

    /// Returns the largest set size supported by this type
    pub fn max_len() -> usize {
        max_len::<T>().min(N)
    }
}

impl_set_partitions!(ArrayVecSetPartitions<T, N>, {impl<T: Label, const N: usize>}, {impl<'a, T: Label, const N: usize>});

/// Set partitions of up to 16 elements with `u8` labels, without heap allocation
///
/// More than 16 elements give more than 2^32 set partitions.
pub type SmallSetPartitions = ArrayVecSetPartitions<u8, 16>;
