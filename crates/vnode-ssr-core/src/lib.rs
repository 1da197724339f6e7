//! vnode-ssr core types
//!
//! The building blocks shared by the renderer:
//!
//! - [`value`]: the dynamic [`Value`] model (objects, functions, symbols, nodes)
//! - [`vnode`]: structured view nodes and their builder
//! - [`classify`]: structural classification of component references
//! - [`escape`]: HTML escaping with configurable quote handling
//! - [`attrs`]: attribute and inline-style serialization
//!
//! ## Example
//!
//! ```
//! use vnode_ssr_core::attrs::create_attr_string;
//! use vnode_ssr_core::vnode::Vnode;
//!
//! let node = Vnode::element("span").attr("className", "badge");
//! assert_eq!(create_attr_string("span", node.attr_map()), "class=\"badge\"");
//! ```

pub mod attrs;
pub mod classify;
pub mod escape;
pub mod value;
pub mod vnode;

pub use attrs::create_attr_string;
pub use classify::{
	ComponentKind, classify, is_class_component, is_component, is_component_type,
	is_factory_component,
};
pub use escape::{Escape, EscapeMap, EscapeRule, escape_html, escape_html_with};
pub use value::{BoxError, CallResult, Function, Invocation, Object, Symbol, Value};
pub use vnode::{FRAGMENT, TEXT, TRUSTED, Tag, VOID_TAGS, Vnode, is_void_element};
