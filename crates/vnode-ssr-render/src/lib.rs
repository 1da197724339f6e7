//! vnode-ssr renderer
//!
//! Renders a view tree built from [`vnode_ssr_core`] values into an HTML
//! string, running component lifecycle hooks along the way.
//!
//! ## Features
//!
//! - **Components**: value, class and factory components, classified by shape
//! - **Lifecycle**: `oninit` awaited before children render, `onremove` run
//!   after the node's subtree has rendered
//! - **Concurrency**: sequence children render concurrently and are joined in
//!   order
//! - **Strict mode**: self-closing output for every empty element
//!
//! ## Example
//!
//! ```
//! use vnode_ssr_core::value::{Function, Object, Value};
//! use vnode_ssr_core::vnode::Vnode;
//! use vnode_ssr_render::render_to_string;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let greeting = Object::new().with(
//!     "view",
//!     Function::new(|_| Ok(Value::from(Vnode::element("h1").child("hello")))),
//! );
//! let html = render_to_string(Vnode::component(greeting)).await.unwrap();
//! assert_eq!(html, "<h1>hello</h1>");
//! # }
//! ```

pub mod error;
pub mod lifecycle;
pub mod options;
pub mod renderer;

pub use error::{ComponentStage, HookKind, RenderError};
pub use lifecycle::{HookQueue, Lifecycle};
pub use options::RenderOptions;
pub use renderer::{render, render_to_string};
