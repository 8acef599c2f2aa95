//! Search configuration
use std::convert::TryFrom;
use std::num::NonZeroUsize;

/// Upper bound on the number of solutions a search reports.
///
/// Only strictly positive values limit the search. Zero, negative numbers
/// and `None` all mean "no limit", so every solution is enumerated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Limit(Option<NonZeroUsize>);

impl Limit {
    /// No limit, find everything.
    pub const NONE: Limit = Limit(None);

    /// The limit as a number, `None` when unlimited.
    #[inline]
    pub fn get(self) -> Option<usize> {
        self.0.map(NonZeroUsize::get)
    }

    /// Whether a search that has found `found` solutions must stop.
    #[inline]
    pub fn is_reached(self, found: usize) -> bool {
        match self.0 {
            Some(limit) => found >= limit.get(),
            None => false,
        }
    }
}

impl From<usize> for Limit {
    fn from(limit: usize) -> Self {
        Limit(NonZeroUsize::new(limit))
    }
}

impl From<Option<usize>> for Limit {
    fn from(limit: Option<usize>) -> Self {
        Limit(limit.and_then(NonZeroUsize::new))
    }
}

impl From<i64> for Limit {
    fn from(limit: i64) -> Self {
        if limit <= 0 {
            return Limit::NONE;
        }
        // saturates on 32 bit targets, which is as good as unlimited
        Limit::from(usize::try_from(limit).unwrap_or(usize::MAX))
    }
}

impl From<i32> for Limit {
    fn from(limit: i32) -> Self {
        Limit::from(i64::from(limit))
    }
}

/// How [`solve`](crate::solve) and [`Problem::solve_with`](crate::Problem::solve_with) search.
///
/// ```
/// use exact_cover::Options;
///
/// let options = Options::new().limit(1).randomize(true).preseed(vec!["D"]);
/// assert_eq!(options.limit.get(), Some(1));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Options<R> {
    /// Stop after this many solutions
    pub limit: Limit,
    /// Visit subsets in a random order, so that solutions are found in random order
    pub randomize: bool,
    /// Subsets forced into every solution. Duplicates are ignored.
    pub preseed: Vec<R>,
    /// Only count solutions instead of collecting them
    pub count: bool,
}

impl<R> Default for Options<R> {
    fn default() -> Self {
        Options {
            limit: Limit::NONE,
            randomize: false,
            preseed: Vec::new(),
            count: false,
        }
    }
}

impl<R> Options<R> {
    /// Deterministic enumeration of all solutions
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the solution limit. Non-positive values disable the limit.
    pub fn limit(mut self, limit: impl Into<Limit>) -> Self {
        self.limit = limit.into();
        self
    }

    /// Randomize the order in which solutions are discovered.
    pub fn randomize(mut self, randomize: bool) -> Self {
        self.randomize = randomize;
        self
    }

    /// Force the given subsets into the solution before searching.
    pub fn preseed(mut self, preseed: impl IntoIterator<Item = R>) -> Self {
        self.preseed = preseed.into_iter().collect();
        self
    }

    /// Count solutions instead of listing them.
    pub fn count(mut self, count: bool) -> Self {
        self.count = count;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_limits_are_unlimited() {
        assert_eq!(Limit::from(0usize), Limit::NONE);
        assert_eq!(Limit::from(0i64), Limit::NONE);
        assert_eq!(Limit::from(-1i32), Limit::NONE);
        assert_eq!(Limit::from(None), Limit::NONE);
        assert!(!Limit::NONE.is_reached(usize::MAX));
    }

    #[test]
    fn positive_limit_is_reached() {
        let limit = Limit::from(2i32);
        assert_eq!(limit.get(), Some(2));
        assert!(!limit.is_reached(1));
        assert!(limit.is_reached(2));
    }

    #[test]
    fn builder() {
        let options = Options::new().limit(3usize).count(true).preseed(vec!['a', 'b']);
        assert_eq!(options.limit.get(), Some(3));
        assert!(options.count);
        assert!(!options.randomize);
        assert_eq!(options.preseed, vec!['a', 'b']);
    }
}
