//! Shared utilities for tennis master crates.
//!
//! Every table in the pipeline is a Polars `DataFrame` of nullable string
//! columns. This crate holds the helpers that read, build and reshape such
//! frames.

pub mod frame;
pub mod polars;

pub use frame::{
    constant_column, empty_frame, frame_from_columns, has_column, replace_with_columns,
    select_present, set_string_column, string_column, string_values, union_frames,
};
pub use polars::{any_to_string, format_numeric};
