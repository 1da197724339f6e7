//! Async rendering of view trees to HTML.
//!
//! # Examples
//!
//! ```rust
//! use vnode_ssr::core::Vnode;
//! use vnode_ssr::ssr::{RenderOptions, render};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let html = render(Vnode::element("input"), RenderOptions::new().strict(true))
//!     .await
//!     .unwrap();
//! assert_eq!(html, "<input/>");
//! # }
//! ```

pub use vnode_ssr_render::*;
