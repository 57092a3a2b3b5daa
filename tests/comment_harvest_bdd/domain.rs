//! Domain wrapper types for the comment harvest BDD tests.

use std::str::FromStr;

/// Pull request number as written in a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PullRequestNumber(u64);

impl PullRequestNumber {
    pub(crate) const fn value(self) -> u64 {
        self.0
    }
}

impl FromStr for PullRequestNumber {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}

/// Number of review comments on a pull request or in a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CommentCount(usize);

impl CommentCount {
    pub(crate) const fn value(self) -> usize {
        self.0
    }
}

impl FromStr for CommentCount {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<usize>().map(Self)
    }
}

/// Number of merged pull requests a harvest asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PullRequestCount(usize);

impl PullRequestCount {
    pub(crate) const fn value(self) -> usize {
        self.0
    }
}

impl FromStr for PullRequestCount {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<usize>().map(Self)
    }
}

/// HTTP status returned by the mock server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HttpStatus(u16);

impl HttpStatus {
    pub(crate) const fn value(self) -> u16 {
        self.0
    }
}

impl FromStr for HttpStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().parse::<u16>().map_err(|error| error.to_string())?;
        if !(100..=599).contains(&value) {
            return Err(format!("{value} is not an HTTP status"));
        }
        Ok(Self(value))
    }
}

/// Closed pull requests on one listing page, e.g. `12 merged, 10 closed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ClosedListing(Vec<(u64, bool)>);

impl ClosedListing {
    /// `(number, merged)` pairs in listing order.
    pub(crate) fn entries(&self) -> &[(u64, bool)] {
        &self.0
    }
}

impl FromStr for ClosedListing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(|entry| {
                let mut words = entry.split_whitespace();
                let number = words
                    .next()
                    .ok_or_else(|| format!("missing pull request number in `{entry}`"))?
                    .parse::<u64>()
                    .map_err(|error| error.to_string())?;
                match words.next() {
                    Some("merged") => Ok((number, true)),
                    Some("closed") => Ok((number, false)),
                    other => Err(format!("expected merged or closed, got {other:?}")),
                }
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

/// Ordered pull request numbers, e.g. `7, 5, 5`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PullRequestOrder(Vec<u64>);

impl PullRequestOrder {
    pub(crate) fn numbers(&self) -> &[u64] {
        &self.0
    }
}

impl FromStr for PullRequestOrder {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(|number| number.trim().parse::<u64>())
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}
