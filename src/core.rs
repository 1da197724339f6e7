//! View-tree value model and serialization helpers.
//!
//! # Examples
//!
//! ```rust
//! use vnode_ssr::core::escape::{Escape, escape_html};
//!
//! assert_eq!(escape_html("\"'", Escape::Quotes), "&quot;&#39;");
//! assert_eq!(escape_html("\"'", Escape::NoQuotes), "\"'");
//! ```

pub use vnode_ssr_core::*;
