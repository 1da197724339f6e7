//! # vnode-ssr
//!
//! Server-side rendering of component view trees to HTML strings.
//!
//! A view tree is made of sequences, primitives and structured nodes whose tag
//! is either an element name or a component. Rendering walks the tree,
//! instantiates components, runs their `oninit`/`onremove` hooks in
//! subtree order and serializes the result.
//!
//! ## Feature Flags
//!
//! - `core` - Value model, component classification, escaping and attributes
//! - `render` (default) - The async renderer
//!
//! ## Quick Example
//!
//! ```rust
//! use vnode_ssr::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), RenderError> {
//! let counter = Object::new().with("count", 3).with(
//!     "view",
//!     Function::new(|invocation| {
//!         let count = invocation
//!             .this_object()
//!             .map(|state| state.get("count"))
//!             .unwrap_or_default();
//!         Ok(Value::from(Vnode::element("span").attr("className", "count").child(count)))
//!     }),
//! );
//!
//! let html = render_to_string(Vnode::component(counter)).await?;
//! assert_eq!(html, "<span class=\"count\">3</span>");
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "core")]
pub mod core;
#[cfg(feature = "render")]
pub mod ssr;

#[cfg(feature = "core")]
pub use vnode_ssr_core::{Function, Invocation, Object, Symbol, Value, Vnode};
#[cfg(feature = "render")]
pub use vnode_ssr_render::{RenderError, RenderOptions, render, render_to_string};

/// Commonly used types.
pub mod prelude {
	#[cfg(feature = "core")]
	pub use crate::core::{
		Escape, Function, Invocation, Object, Symbol, Tag, Value, Vnode, escape_html,
	};
	#[cfg(feature = "render")]
	pub use crate::ssr::{HookQueue, RenderError, RenderOptions, render, render_to_string};
}
