//! Synthetic engagement metadata.
//!
//! The catalog source has no likes, comments or dates, so ingestion invents
//! them. [`MetadataSource`] is the seam; [`RandomMetadata`] is the runtime
//! implementation backed by a seedable [`StdRng`].

use crate::detail::CommentSeeder;
use crate::domain::Category;
use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Exclusive upper bound for generated like counts.
const MAX_LIKES: u32 = 1000;

/// Exclusive upper bound for generated comment counts.
const MAX_COMMENTS: u32 = 20;

/// Generated creation times fall within this many milliseconds before now (30 days).
const MAX_AGE_MILLIS: i64 = 30 * 24 * 60 * 60 * 1000;

/// Exclusive upper bound for the numeric suffix of generated usernames.
const MAX_USERNAME_SUFFIX: u32 = 1000;

/// Exclusive upper bound for the "hours ago" of generated comments.
const MAX_COMMENT_HOURS: u32 = 24;

/// Source of the synthetic fields attached to each ingested item.
pub trait MetadataSource {
    /// Like count, 0-999.
    fn likes(&mut self) -> u32;

    /// Comment count, 0-19.
    fn comments(&mut self) -> u32;

    /// Creation time within the 30 days before `now`.
    fn created_at(&mut self, now: DateTime<Utc>) -> DateTime<Utc>;

    /// Uniformly chosen category.
    fn category(&mut self) -> Category;
}

/// [`MetadataSource`] drawing from a seedable random generator.
///
/// # Example
///
/// ```
/// use memeverse::catalog::{MetadataSource, RandomMetadata};
///
/// let mut a = RandomMetadata::from_seed(7);
/// let mut b = RandomMetadata::from_seed(7);
/// assert_eq!(a.likes(), b.likes());
/// assert_eq!(a.category(), b.category());
/// ```
#[derive(Debug, Clone)]
pub struct RandomMetadata {
    rng: StdRng,
}

impl RandomMetadata {
    /// Deterministic generator for tests and reproducible sessions.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generator seeded from the operating system, one per fetch.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Uniform index below `len`; zero for an empty collection.
    pub fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            0
        } else {
            self.rng.gen_range(0..len)
        }
    }
}

impl MetadataSource for RandomMetadata {
    fn likes(&mut self) -> u32 {
        self.rng.gen_range(0..MAX_LIKES)
    }

    fn comments(&mut self) -> u32 {
        self.rng.gen_range(0..MAX_COMMENTS)
    }

    fn created_at(&mut self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::milliseconds(self.rng.gen_range(0..MAX_AGE_MILLIS))
    }

    fn category(&mut self) -> Category {
        Category::ALL[self.rng.gen_range(0..Category::ALL.len())]
    }
}

impl CommentSeeder for RandomMetadata {
    fn username_suffix(&mut self) -> u32 {
        self.rng.gen_range(0..MAX_USERNAME_SUFFIX)
    }

    fn hours_ago(&mut self) -> u32 {
        self.rng.gen_range(0..MAX_COMMENT_HOURS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_stay_in_range() {
        let mut source = RandomMetadata::from_seed(42);
        let now = Utc::now();
        for _ in 0..500 {
            assert!(source.likes() < MAX_LIKES);
            assert!(source.comments() < MAX_COMMENTS);
            let created = source.created_at(now);
            assert!(created <= now);
            assert!(now - created < Duration::days(30));
            assert!(source.username_suffix() < MAX_USERNAME_SUFFIX);
            assert!(source.hours_ago() < MAX_COMMENT_HOURS);
        }
    }

    #[test]
    fn every_category_is_reachable() {
        let mut source = RandomMetadata::from_seed(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(source.category());
        }
        assert_eq!(seen.len(), Category::ALL.len());
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = RandomMetadata::from_seed(99);
        let mut b = RandomMetadata::from_seed(99);
        let now = Utc::now();
        for _ in 0..20 {
            assert_eq!(a.likes(), b.likes());
            assert_eq!(a.created_at(now), b.created_at(now));
        }
    }
}
