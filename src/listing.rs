//! Writing enumerations as text, with an output cap and a block-count filter.
//!
//! This is what the `part` program prints: one object per line, each followed
//! by an empty line, and `output limit reached` when the cap cut the listing short.

use log::debug;
use std::fmt;
use std::io::{self, Write};

use crate::error::Error;
use crate::fixed::FixedPartitions;
use crate::integer::IntegerPartitions;
use crate::set::SetPartitions;
use crate::traits::Enumeration;

/// Line written when the output cap stops the enumeration
pub const LIMIT_REACHED: &str = "output limit reached";

/// Which family of objects to list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Integer partitions of `n`
    Integer,
    /// Partitions of the set `{1, ..., n}`
    Set,
}

/// A validated listing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Size of the integer or the set
    pub n: usize,
    /// Exact number of parts or blocks, if restricted
    pub parts: Option<usize>,
    /// Largest number of objects to write, `None` for all of them
    pub limit: Option<u64>,
    /// Family of objects
    pub kind: Kind,
}

/// What a listing wrote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listing {
    /// Number of objects written
    pub written: u64,
    /// Whether the output cap stopped the enumeration
    pub truncated: bool,
}

/// Errors while writing a listing
#[derive(Debug)]
pub enum ListingError {
    /// The request does not describe a valid generator
    Partition(Error),
    /// Writing the output failed
    Io(io::Error),
}

impl fmt::Display for ListingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ListingError::Partition(why) => write!(f, "invalid request: {}", why),
            ListingError::Io(why) => write!(f, "IO error: {}", why),
        }
    }
}

impl std::error::Error for ListingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ListingError::Partition(why) => Some(why),
            ListingError::Io(why) => Some(why),
        }
    }
}

impl From<Error> for ListingError {
    fn from(err: Error) -> ListingError {
        ListingError::Partition(err)
    }
}

impl From<io::Error> for ListingError {
    fn from(err: io::Error) -> ListingError {
        ListingError::Io(err)
    }
}

/// Writes the objects selected by `request` to `out`.
///
/// Integer partitions restricted to `m` parts are enumerated directly; set
/// partitions restricted to `m` blocks are filtered out of the full enumeration.
pub fn write_listing<W: Write>(request: &Request, out: &mut W) -> Result<Listing, ListingError> {
    debug!("listing {:?}", request);
    let listing = match (request.kind, request.parts) {
        (Kind::Integer, None) => {
            let mut p = IntegerPartitions::new(request.n)?;
            write_capped(&mut p, request.limit, |_| true, out)?
        }
        (Kind::Integer, Some(m)) => {
            let mut p = FixedPartitions::new(request.n, m)?;
            write_capped(&mut p, request.limit, |_| true, out)?
        }
        (Kind::Set, parts) => {
            let mut s = SetPartitions::<usize>::new(request.n)?;
            if let Some(m) = parts {
                if m == 0 || m > request.n {
                    return Err(Error::PartsOutOfRange {n: request.n, m}.into());
                }
            }
            write_capped(&mut s, request.limit, |s| parts.map_or(true, |m| s.num_blocks() == m), out)?
        }
    };
    debug!("wrote {} objects{}", listing.written, if listing.truncated {", limit reached"} else {""});
    Ok(listing)
}

/// Drives `e` from its current object to the end, writing every object
/// accepted by `keep`, until `limit` objects have been written.
///
/// Each written object is followed by an empty line. If another accepted
/// object comes after the limit was hit, `LIMIT_REACHED` is written as the
/// last line instead.
pub fn write_capped<E, F, W>(e: &mut E, limit: Option<u64>, mut keep: F, out: &mut W) -> io::Result<Listing>
    where E: Enumeration + fmt::Display, F: FnMut(&E) -> bool, W: Write
{
    let mut written = 0;
    loop {
        if keep(e) {
            if limit.map_or(false, |l| written >= l) {
                writeln!(out, "{}", LIMIT_REACHED)?;
                return Ok(Listing {written, truncated: true});
            }
            writeln!(out, "{}", e)?;
            writeln!(out)?;
            written += 1;
        }
        if !e.increment() {break;}
    }
    Ok(Listing {written, truncated: false})
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle;

    fn run(n: usize, parts: Option<usize>, limit: Option<u64>, kind: Kind) -> (String, Listing) {
        let mut out = Vec::new();
        let listing = write_listing(&Request {n, parts, limit, kind}, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), listing)
    }

    fn objects(text: &str) -> Vec<&str> {
        text.lines().filter(|l| !l.is_empty() && *l != LIMIT_REACHED).collect()
    }

    #[test]
    fn integer() {
        let (text, listing) = run(4, None, None, Kind::Integer);
        assert_eq!(text, "4\n\n3 1\n\n2 2\n\n2 1 1\n\n1 1 1 1\n\n");
        assert_eq!(listing, Listing {written: 5, truncated: false});
    }

    #[test]
    fn fixed() {
        let (text, listing) = run(8, Some(3), None, Kind::Integer);
        assert_eq!(objects(&text), ["6 1 1", "5 2 1", "4 3 1", "4 2 2", "3 3 2"]);
        assert_eq!(listing.written, 5);
    }

    #[test]
    fn set() {
        let (text, listing) = run(3, None, None, Kind::Set);
        assert_eq!(objects(&text), ["{1, 2, 3}", "{1, 2} {3}", "{1, 3} {2}", "{1} {2, 3}", "{1} {2} {3}"]);
        assert_eq!(listing.written, 5);
        let (_, listing) = run(5, None, None, Kind::Set);
        assert_eq!(listing.written, 52);
    }

    #[test]
    fn capped() {
        for (kind, parts, total) in [(Kind::Integer, None, 22), (Kind::Integer, Some(3), 5), (Kind::Set, None, 4140), (Kind::Set, Some(2), 127)] {
            for limit in [0, 1, total - 1] {
                let (text, listing) = run(8, parts, Some(limit), kind);
                assert_eq!(listing, Listing {written: limit, truncated: true});
                assert_eq!(objects(&text).len() as u64, limit);
                assert_eq!(text.lines().last(), Some(LIMIT_REACHED));
            }
            for limit in [total, total + 1] {
                let (text, listing) = run(8, parts, Some(limit), kind);
                assert_eq!(listing, Listing {written: total, truncated: false});
                assert!(!text.contains(LIMIT_REACHED));
            }
        }
    }

    #[test]
    fn zero_limit() {
        let (text, listing) = run(1, None, Some(0), Kind::Integer);
        assert_eq!(text, "output limit reached\n");
        assert_eq!(listing.written, 0);
    }

    #[test]
    fn one() {
        for kind in [Kind::Integer, Kind::Set] {
            let (text, listing) = run(1, None, None, kind);
            assert_eq!(listing.written, 1);
            assert_eq!(objects(&text).len(), 1);
        }
        let (text, _) = run(1, Some(1), None, Kind::Integer);
        assert_eq!(text, "1\n\n");
    }

    #[test]
    fn block_filter_covers_everything() {
        let n = 6;
        let (all, _) = run(n, None, None, Kind::Set);
        let all = objects(&all);
        let mut union = Vec::new();
        for m in 1..=n {
            let (text, listing) = run(n, Some(m), None, Kind::Set);
            assert_eq!(listing.written, oracle::stirling2(n, m));
            union.extend(objects(&text).into_iter().map(String::from));
        }
        let mut all: Vec<String> = all.into_iter().map(String::from).collect();
        all.sort();
        union.sort();
        assert_eq!(all, union);
        let mut dedup = union.clone();
        dedup.dedup();
        assert_eq!(dedup.len(), union.len());
    }

    #[test]
    fn invalid() {
        let mut out = Vec::new();
        let request = Request {n: 3, parts: Some(4), limit: None, kind: Kind::Set};
        match write_listing(&request, &mut out) {
            Err(ListingError::Partition(Error::PartsOutOfRange {n: 3, m: 4})) => {}
            other => panic!("unexpected {:?}", other),
        }
        let request = Request {n: 0, parts: None, limit: None, kind: Kind::Integer};
        assert!(matches!(write_listing(&request, &mut out), Err(ListingError::Partition(Error::EmptySet))));
    }
}
