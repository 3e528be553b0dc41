#![forbid(unsafe_code)]
//! Materialized-path codes for tree structures stored as sortable strings.
//!
//! A code is a sequence of fixed-width zero-padded decimal segments joined by
//! `.` (e.g. `"00001.00002.00003"`), one segment per tree depth, so that
//! lexicographic order on codes matches depth-first order on the tree. This
//! crate is the codec only: it constructs, merges, decomposes, and advances
//! codes (and their human-readable "full name" counterparts) but owns no
//! nodes and performs no storage. The embedding tree layer decides when to
//! compute or rewrite a code.

pub mod codec;
pub mod error;
pub mod full_name;

pub use codec::{depth, is_ancestor_of, PathCodec, CODE_SEPARATOR};
pub use error::{Error, Result};
pub use full_name::{
    merge_full_name, remove_parent_full_name, remove_parent_full_name_by_level,
};
