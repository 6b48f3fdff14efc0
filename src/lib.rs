//! # wordswap
//!
//! Fetch a web page and return a copy in which every visible occurrence of a
//! target word is replaced by a substitute word. Replacement preserves the
//! case pattern of each occurrence, while URLs, attribute values, and markup
//! structure are left untouched.
//!
//! ## Quick Start
//!
//! ```
//! use wordswap::{rewrite, Rule};
//!
//! let rule = Rule::new("yale", "fale");
//! let result = rewrite("<p>Welcome to Yale University</p>", &rule);
//!
//! assert!(result.changed);
//! assert!(result.html.contains("Welcome to Fale University"));
//! ```
//!
//! ## Pipeline
//!
//! [`Fetcher`] retrieves the raw page text (the only async step), then
//! [`rewrite`] parses it into a [`dom::Document`], mutates eligible text
//! nodes in place, and serializes the tree back out. Each invocation works on
//! its own freshly parsed tree, so concurrent rewrites need no locking.

pub mod dom;
pub mod envelope;
pub mod error;
pub mod fetch;
pub mod rewrite;

pub use error::{Error, Result};
pub use fetch::Fetcher;
pub use rewrite::{rewrite, RewriteResult, Rule};
