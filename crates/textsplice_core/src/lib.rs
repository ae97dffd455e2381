//! # textsplice_core
//!
//! Structural find-and-replace over hast trees.
//!
//! This crate provides:
//! - Rule normalization from tuples, mappings or JSON
//! - Subtree exclusion by element test
//! - The per-rule traversal that splices replacements into text leaves
//! - Configuration loading
//!
//! ## Example
//!
//! ```rust
//! use textsplice_ast::Node;
//! use textsplice_core::{Options, Schema, find_and_replace};
//!
//! let mut tree = Node::element("p", vec![
//!     Node::text("Some code, "),
//!     Node::element("code", vec![Node::text("code")]),
//! ]);
//!
//! find_and_replace(
//!     &mut tree,
//!     Schema::map([("code", "hacks")]),
//!     &Options::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(tree.text_content(), "Some hacks, hacks");
//! ```

mod config;
mod error;
mod find_and_replace;
mod ignore;
mod pattern;
mod replacement;
mod scanner;
mod schema;
mod splice;

pub use config::Config;
pub use error::ReplaceError;
pub use find_and_replace::{Options, find_and_replace};
pub use ignore::{DEFAULT_IGNORE, Ignore};
pub use pattern::{Find, Pattern};
pub use replacement::{RegExpMatch, Replacement};
pub use schema::{Pair, Replace, ReplaceFn, Schema};
