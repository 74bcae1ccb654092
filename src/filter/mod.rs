//! Line selection and highlighting
//!
//! Two kinds of filter compose here:
//!
//! - count filters (`--first`, `--last`) bound which lines are eligible by
//!   position in the stream,
//! - content filters (`--timestamps`, `--ipv4`, `--ipv6`) keep a line when
//!   at least one enabled pattern matches somewhere in it.
//!
//! Count filters run first; content filters narrow within the count slice.
//! Matched IPv4/IPv6 addresses are highlighted in the output with a color
//! derived from the address itself, so repeated addresses are easy to spot.

pub mod engine;
pub mod matcher;
pub mod palette;

pub use engine::{FilterOptions, filter_lines};
pub use matcher::LineMatcher;
