//! Merge and compact ordered ranges.
//!
//! ## What merging does
//! Given a collection of closed `(start, end)` ranges, merging produces the
//! **minimal equivalent collection**: overlapping and touching ranges are
//! fused, and the result is an ascending list of disjoint, non-touching
//! ranges covering exactly the same keys.
//!
//! Ranges can also carry an **attribute** (a label, an owner, a group).
//! Ranges with differing attributes never fuse; instead, where they collide,
//! the range taking precedence claims the contested keys and the other keeps
//! whatever remains on either side (see
//! [`merge_with_policy`] for the precedence rule).
//!
//! Two facades reuse the same engine for IP networking data:
//! [`merge_ip_ranges`] merges address-literal ranges, and
//! [`merge_cidr_ranges`] merges CIDR blocks by expanding them to address
//! ranges, merging those, and decomposing the result back into the minimal
//! covering blocks.
//!
//! ## Examples
//! ```rust
//! use range_merge::{merge, merge_with_attributes};
//!
//! // Merge / compact plain ranges.
//! let ranges = vec![(1, 5), (3, 8), (10, 15)];
//! assert_eq!(merge(&ranges), vec![(1, 8), (10, 15)]);
//!
//! // Merge / compact ranges carrying an attribute.
//! let ranges = vec![(1, 10, "foo"), (3, 8, "bar")];
//! assert_eq!(
//!     merge_with_attributes(&ranges),
//!     vec![(1, 2, "foo"), (3, 8, "bar"), (9, 10, "foo")]
//! );
//! ```
//!
//! Compacting CIDR blocks works the same way, attribute included:
//!
//! ```rust
//! use range_merge::merge_cidr_ranges_with_attributes;
//!
//! let blocks = [("192.0.2.0/26", "dmz"), ("192.0.2.64/26", "dmz")];
//! let merged = merge_cidr_ranges_with_attributes(&blocks)
//!     .expect("literals are valid CIDR blocks");
//!
//! assert_eq!(merged.len(), 1);
//! assert_eq!(merged[0].0.to_string(), "192.0.2.0/25");
//! assert_eq!(merged[0].1, "dmz");
//! ```
//!
//! Custom element types plug in through the [`MergePolicy`] trait, and custom
//! key domains (anything totally ordered with discrete neighbour steps)
//! through [`MergeKey`].

pub mod error;
mod cidr;
mod ip;
mod key;
mod merge;
mod policy;
mod span_map;

#[cfg(test)]
pub mod test_utilities;

pub use cidr::*;
pub use ip::*;
pub use key::*;
pub use merge::*;
pub use policy::*;
