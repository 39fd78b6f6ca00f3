//! Tags
//!
//! Products carry a small, sorted set of free-form string tags used for
//! catalog filtering.

pub mod set;

pub use set::TagSet;
