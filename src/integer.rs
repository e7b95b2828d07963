//! Integer partitions of `n` with any number of parts.

use std::fmt;
use std::iter;
use std::ops::Index;

use crate::error::Error;
use crate::traits::Enumeration;

/// An integer partition of `n` stored by multiplicity.
///
/// `multiplicity(k)` is the number of parts equal to `k`, for `k` in `1..=n`,
/// so that the sum of `k * multiplicity(k)` is always `n`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Multiplicities
{
    // c[0] is unused
    c: Vec<usize>,
    num_parts: usize
}

impl Multiplicities
{
    fn single_part(n: usize) -> Self {
        let mut c = vec![0; n + 1];
        c[n] = 1;
        Multiplicities {c, num_parts: 1}
    }

    /// Returns the integer being partitioned
    pub fn n(&self) -> usize {
        self.c.len() - 1
    }

    /// Returns how many parts are equal to `k`
    pub fn multiplicity(&self, k: usize) -> usize {
        if k == 0 {
            return 0;
        }
        self.c.get(k).copied().unwrap_or(0)
    }

    /// Returns the number of parts
    pub fn num_parts(&self) -> usize {
        self.num_parts
    }

    /// Iterates over `(part, multiplicity)` for the part sizes present, largest first
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.c.iter()
            .enumerate()
            .skip(1)
            .rev()
            .filter(|&(_, &c)| c > 0)
            .map(|(k, &c)| (k, c))
    }

    /// Iterates over the parts, largest first, repeating each part by its multiplicity
    pub fn parts(&self) -> impl Iterator<Item = usize> + '_ {
        self.iter().flat_map(|(k, c)| iter::repeat(k).take(c))
    }

    /// Checks that the multiplicities add up to `n` and agree with the part count
    pub fn is_valid(&self) -> bool {
        let sum: usize = self.iter().map(|(k, c)| k * c).sum();
        let parts: usize = self.iter().map(|(_, c)| c).sum();
        sum == self.n() && parts == self.num_parts
    }
}

impl Index<usize> for Multiplicities
{
    type Output = usize;

    fn index(&self, k: usize) -> &usize {
        &self.c[k]
    }
}

impl fmt::Display for Multiplicities
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, k) in self.parts().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", k)?;
        }
        Ok(())
    }
}

/// Enumerates the integer partitions of `n` in reverse lexicographic order.
///
/// The first partition is `[n]`, the last one is `[1, 1, ..., 1]`.
/// Each call to `increment`() takes constant time.
#[derive(Debug, Clone)]
pub struct IntegerPartitions
{
    c: Multiplicities,
    // distinct part sizes greater than 1, smallest on top
    s: Vec<usize>
}

impl IntegerPartitions
{
    /// Create the generator, positioned on the partition `[n]`
    pub fn new(n: usize) -> Result<Self, Error> {
        if n == 0 {
            return Err(Error::EmptySet);
        }
        let mut r = IntegerPartitions {c: Multiplicities::single_part(n), s: Vec::with_capacity(n)};
        r.reset();
        Ok(r)
    }

    /// Returns the integer being partitioned
    pub fn n(&self) -> usize {
        self.c.n()
    }

    /// Returns the current partition
    pub fn get(&self) -> &Multiplicities {
        &self.c
    }

    /// Reset to the partition `[n]`
    pub fn reset(&mut self) {
        let n = self.n();
        for ci in self.c.c.iter_mut() {
            *ci = 0;
        }
        self.c.c[n] = 1;
        self.c.num_parts = 1;
        self.s.clear();
        if n > 1 {
            self.s.push(n);
        }
    }

    /// Move to the next partition, returning `true`, or back to `[n]` after
    /// `[1, 1, ..., 1]`, returning `false`.
    pub fn increment(&mut self) -> bool {
        let k = match self.s.last() {
            Some(&k) => k,
            None => {
                self.reset();
                return false;
            }
        };

        // take one part k and all the ones, refill with parts k - 1 and a remainder
        let c = &mut self.c.c;
        c[k] -= 1;
        if c[k] == 0 {
            self.s.pop();
        }
        let ones = c[1];
        c[1] = 0;
        let freed = k + ones;
        let d = k - 1;
        let q = freed / d;
        let r = freed % d;
        c[d] += q;
        if r > 0 {
            c[r] += 1;
        }

        if d > 1 {
            self.s.push(d);
        }
        if r > 1 {
            self.s.push(r);
        }
        self.c.num_parts = self.c.num_parts + q + usize::from(r > 0) - ones - 1;

        debug_assert!(self.c.is_valid());
        true
    }
}

impl fmt::Display for IntegerPartitions
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self.get(), f)
    }
}

impl Enumeration for IntegerPartitions
{
    type Object = Multiplicities;

    fn reset(&mut self) {
        Self::reset(self);
    }

    fn increment(&mut self) -> bool {
        Self::increment(self)
    }

    fn get(&self) -> &Multiplicities {
        Self::get(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle;

    fn collect(n: usize) -> Vec<Vec<usize>> {
        let mut p = IntegerPartitions::new(n).unwrap();
        let mut all = Vec::new();
        loop {
            all.push(p.get().parts().collect());
            if !p.increment() {break;}
        }
        all
    }

    #[test]
    fn zero() {
        assert_eq!(IntegerPartitions::new(0).unwrap_err(), Error::EmptySet);
    }

    #[test]
    fn one() {
        let mut p = IntegerPartitions::new(1).unwrap();
        assert_eq!(p.get().parts().collect::<Vec<_>>(), [1]);
        assert!(!p.increment());
        assert_eq!(p.get().parts().collect::<Vec<_>>(), [1]);
    }

    #[test]
    fn five() {
        assert_eq!(collect(5), vec![
            vec![5],
            vec![4, 1],
            vec![3, 2],
            vec![3, 1, 1],
            vec![2, 2, 1],
            vec![2, 1, 1, 1],
            vec![1, 1, 1, 1, 1],
        ]);
    }

    #[test]
    fn all() {
        for n in 1..=30 {
            assert_eq!(collect(n).len() as u64, oracle::partitions(n), "n = {}", n);
        }
    }

    #[test]
    fn reverse_lexicographic() {
        for n in 1..=20 {
            let all = collect(n);
            for w in all.windows(2) {
                assert!(w[0] > w[1]);
            }
            assert_eq!(all.first().unwrap(), &vec![n]);
            assert_eq!(all.last().unwrap(), &vec![1; n]);
        }
    }

    #[test]
    fn sums_and_counts() {
        for n in 1..=20 {
            let mut p = IntegerPartitions::new(n).unwrap();
            loop {
                let c = p.get();
                assert!(c.is_valid());
                assert_eq!(c.parts().sum::<usize>(), n);
                assert_eq!(c.parts().count(), c.num_parts());
                assert!(c.parts().zip(c.parts().skip(1)).all(|(a, b)| a >= b));
                if !p.increment() {break;}
            }
        }
    }

    #[test]
    fn reset() {
        for n in 1..=12 {
            let mut p = IntegerPartitions::new(n).unwrap();
            let first = collect(n);
            for _ in 0..3 {
                p.increment();
            }
            p.reset();
            let mut again = Vec::new();
            loop {
                again.push(p.get().parts().collect::<Vec<_>>());
                if !p.increment() {break;}
            }
            assert_eq!(first, again);
            // exhaustion rewinds to [n]
            assert_eq!(p.get(), IntegerPartitions::new(n).unwrap().get());
        }
    }

    #[test]
    fn multiplicities() {
        let mut p = IntegerPartitions::new(6).unwrap();
        // [6], [5, 1], [4, 2], [4, 1, 1], [3, 3], [3, 2, 1]
        for _ in 0..5 {
            p.increment();
        }
        let c = p.get();
        assert_eq!((c[1], c[2], c[3], c[4]), (1, 1, 1, 0));
        assert_eq!(c.multiplicity(0), 0);
        assert_eq!(c.multiplicity(7), 0);
        assert_eq!(c.iter().collect::<Vec<_>>(), [(3, 1), (2, 1), (1, 1)]);
        assert_eq!(c.to_string(), "3 2 1");
    }
}
