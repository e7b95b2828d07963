//! Integer partitions of `n` into exactly `m` parts.

use std::fmt;
use std::ops::Deref;
use std::slice;

use crate::error::Error;
use crate::traits::Enumeration;

/// An integer partition of `n` into `m` parts, stored as a non-increasing
/// sequence of positive integers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parts
{
    d: Vec<usize>,
    n: usize
}

impl Parts
{
    /// Returns the integer being partitioned
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the parts, largest first
    pub fn as_slice(&self) -> &[usize] {
        &self.d
    }

    /// Checks that the parts are positive, non-increasing, and add up to `n`
    pub fn is_valid(&self) -> bool {
        self.d.iter().all(|&x| x > 0)
            && self.d.windows(2).all(|w| w[0] >= w[1])
            && self.d.iter().sum::<usize>() == self.n
    }
}

impl Deref for Parts
{
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        self.as_slice()
    }
}

impl AsRef<[usize]> for Parts
{
    fn as_ref(&self) -> &[usize] {
        self.as_slice()
    }
}

impl<'a> IntoIterator for &'a Parts
{
    type Item = &'a usize;
    type IntoIter = slice::Iter<'a, usize>;

    fn into_iter(self) -> slice::Iter<'a, usize> {
        self.d.iter()
    }
}

impl fmt::Display for Parts
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, x) in self.d.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", x)?;
        }
        Ok(())
    }
}

/// Enumerates the partitions of `n` into exactly `m` parts.
///
/// Partitions come in colexicographic order: compared from the last part
/// backwards, each one is larger than the previous. The enumeration starts at
/// `[n - m + 1, 1, ..., 1]` and ends on the most balanced partition.
///
/// See TAoCP 7.2.1.4, algorithm H.
#[derive(Debug, Clone)]
pub struct FixedPartitions
{
    d: Parts
}

impl FixedPartitions
{
    /// Create the generator, positioned on `[n - m + 1, 1, ..., 1]`
    pub fn new(n: usize, m: usize) -> Result<Self, Error> {
        if n == 0 {
            return Err(Error::EmptySet);
        }
        if m == 0 || m > n {
            return Err(Error::PartsOutOfRange {n, m});
        }
        let mut r = FixedPartitions {d: Parts {d: vec![1; m], n}};
        r.reset();
        Ok(r)
    }

    /// Returns the integer being partitioned
    pub fn n(&self) -> usize {
        self.d.n
    }

    /// Returns the number of parts
    pub fn len(&self) -> usize {
        self.d.d.len()
    }

    /// Returns the current partition
    pub fn get(&self) -> &Parts {
        &self.d
    }

    /// Reset to `[n - m + 1, 1, ..., 1]`
    pub fn reset(&mut self) {
        let m = self.len();
        let d = &mut self.d.d;
        d[0] = self.d.n + 1 - m;
        for x in d[1..].iter_mut() {
            *x = 1;
        }
    }

    /// Move to the next partition, returning `true`, or back to the first one
    /// after the last, returning `false`.
    pub fn increment(&mut self) -> bool {
        let m = self.len();
        if m < 2 {
            return false;
        }

        let d = &mut self.d.d;
        if d[1] + 1 < d[0] {
            d[0] -= 1;
            d[1] += 1;
            debug_assert!(self.d.is_valid());
            return true;
        }

        // leftmost j >= 2 that can still grow, s collects what d[0..j] hold minus one
        let mut j = 2;
        let mut s = d[0] + d[1] - 1;
        while j < m && d[j] + 1 >= d[0] {
            s += d[j];
            j += 1;
        }
        if j == m {
            self.reset();
            return false;
        }

        let x = d[j] + 1;
        d[j] = x;
        for k in (1..j).rev() {
            d[k] = x;
            s -= x;
        }
        d[0] = s;

        debug_assert!(self.d.is_valid());
        true
    }
}

impl fmt::Display for FixedPartitions
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self.get(), f)
    }
}

impl Enumeration for FixedPartitions
{
    type Object = Parts;

    fn reset(&mut self) {
        Self::reset(self);
    }

    fn increment(&mut self) -> bool {
        Self::increment(self)
    }

    fn get(&self) -> &Parts {
        Self::get(self)
    }
}
