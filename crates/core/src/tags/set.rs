//! Tag Set
//!
//! A sorted, deduplicated `SmallVec<[String; 5]>` of tags. Keeping the tags
//! ordered lets membership, intersection and union run as linear merges.

use std::{
    cmp::Ordering,
    ops::{BitOr, BitOrAssign},
};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A sorted, deduplicated set of string tags.
///
/// Serializes as a plain array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TagSet {
    tags: SmallVec<[String; 5]>,
}

impl TagSet {
    /// Create an empty tag set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tag set from string slices.
    pub fn from_strs(tags: &[&str]) -> Self {
        tags.iter().copied().collect()
    }

    /// Check whether `tag` is in the set.
    pub fn contains(&self, tag: &str) -> bool {
        self.tags
            .binary_search_by(|probe| probe.as_str().cmp(tag))
            .is_ok()
    }

    /// Check whether the two sets share at least one tag.
    pub fn intersects(&self, other: &Self) -> bool {
        let mut left = self.tags.iter();
        let mut right = other.tags.iter();
        let mut left_tag = left.next();
        let mut right_tag = right.next();

        while let (Some(left_ref), Some(right_ref)) = (left_tag, right_tag) {
            match left_ref.cmp(right_ref) {
                Ordering::Equal => return true,
                Ordering::Less => left_tag = left.next(),
                Ordering::Greater => right_tag = right.next(),
            }
        }

        false
    }

    /// Insert a tag, keeping the set ordered. Returns `false` if it was already present.
    pub fn insert(&mut self, tag: &str) -> bool {
        match self.tags.binary_search_by(|probe| probe.as_str().cmp(tag)) {
            Ok(_) => false,
            Err(position) => {
                self.tags.insert(position, tag.to_string());
                true
            }
        }
    }

    /// Remove a tag. Returns `false` if it was not present.
    pub fn remove(&mut self, tag: &str) -> bool {
        match self.tags.binary_search_by(|probe| probe.as_str().cmp(tag)) {
            Ok(position) => {
                self.tags.remove(position);
                true
            }
            Err(_) => false,
        }
    }

    /// Add `tag` if absent, remove it if present.
    pub fn toggle(&mut self, tag: &str) {
        if !self.remove(tag) {
            self.insert(tag);
        }
    }

    /// Iterate over the tags in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Number of tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Check whether the set has no tags.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl From<Vec<String>> for TagSet {
    fn from(mut tags: Vec<String>) -> Self {
        tags.sort();
        tags.dedup();

        Self {
            tags: SmallVec::from_vec(tags),
        }
    }
}

impl From<TagSet> for Vec<String> {
    fn from(set: TagSet) -> Self {
        set.tags.into_vec()
    }
}

impl<'a> FromIterator<&'a str> for TagSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .into()
    }
}

impl BitOr for TagSet {
    type Output = Self;

    fn bitor(mut self, rhs: Self) -> Self::Output {
        self |= rhs;
        self
    }
}

impl BitOrAssign for TagSet {
    fn bitor_assign(&mut self, rhs: Self) {
        let capacity = self.tags.len().saturating_add(rhs.tags.len());
        let mut merged = SmallVec::with_capacity(capacity);
        let mut left = std::mem::take(&mut self.tags).into_iter().peekable();
        let mut right = rhs.tags.into_iter().peekable();

        while let (Some(left_tag), Some(right_tag)) = (left.peek(), right.peek()) {
            match left_tag.cmp(right_tag) {
                Ordering::Less => merged.extend(left.next()),
                Ordering::Greater => merged.extend(right.next()),
                Ordering::Equal => {
                    merged.extend(left.next());
                    right.next();
                }
            }
        }

        merged.extend(left);
        merged.extend(right);

        self.tags = merged;
    }
}
