//! Small browser helpers.

pub mod page_meta;
