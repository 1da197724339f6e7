//! Structured view nodes.
//!
//! A [`Vnode`] is either an element-like node whose tag is a string (an HTML
//! element name or one of the reserved discriminators [`FRAGMENT`],
//! [`TRUSTED`] and [`TEXT`]) or a component node whose tag is any other value.
//!
//! ## Example
//!
//! ```
//! use vnode_ssr_core::vnode::Vnode;
//!
//! let node = Vnode::element("div")
//! 	.attr("data-foo", "bar")
//! 	.attr("selected", true)
//! 	.child("content");
//! assert_eq!(node.tag().as_element(), Some("div"));
//! ```

use crate::value::{Object, Value};
use std::borrow::Cow;

/// Tag of a fragment node: children are rendered without a wrapping element.
pub const FRAGMENT: &str = "[";

/// Tag of a trusted markup node: children are emitted verbatim.
pub const TRUSTED: &str = "<";

/// Tag of a text node: text or children are escaped, no wrapping element.
pub const TEXT: &str = "#";

/// Elements that never have content and are emitted without a closing tag.
pub const VOID_TAGS: &[&str] = &[
	"!doctype", "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen",
	"link", "meta", "param", "source", "track", "wbr",
];

/// Checks whether `tag` names a void element, ignoring ASCII case.
pub fn is_void_element(tag: &str) -> bool {
	VOID_TAGS.iter().any(|void| void.eq_ignore_ascii_case(tag))
}

/// The tag of a structured node.
#[derive(Debug, Clone)]
pub enum Tag {
	/// A string tag: an element name or a reserved discriminator.
	Element(Cow<'static, str>),
	/// A component reference, classified at render time.
	Component(Value),
}

impl Tag {
	/// Returns the string tag, if this is not a component tag.
	pub fn as_element(&self) -> Option<&str> {
		match self {
			Tag::Element(name) => Some(name),
			Tag::Component(_) => None,
		}
	}

	/// Returns the component reference, if this is a component tag.
	pub fn as_component(&self) -> Option<&Value> {
		match self {
			Tag::Element(_) => None,
			Tag::Component(component) => Some(component),
		}
	}
}

impl From<&'static str> for Tag {
	fn from(name: &'static str) -> Self {
		Tag::Element(Cow::Borrowed(name))
	}
}

impl From<String> for Tag {
	fn from(name: String) -> Self {
		Tag::Element(Cow::Owned(name))
	}
}

/// A structured node of the view tree.
#[derive(Debug, Clone)]
pub struct Vnode {
	tag: Tag,
	attrs: Object,
	children: Value,
	text: Option<String>,
	state: Option<Object>,
}

impl Vnode {
	/// Creates a node with the given tag and no attributes or children.
	pub fn new(tag: impl Into<Tag>) -> Self {
		Self {
			tag: tag.into(),
			attrs: Object::new(),
			children: Value::Undefined,
			text: None,
			state: None,
		}
	}

	/// Creates an HTML element node.
	pub fn element(name: impl Into<Cow<'static, str>>) -> Self {
		Self::new(Tag::Element(name.into()))
	}

	/// Creates a fragment node.
	pub fn fragment(children: impl Into<Value>) -> Self {
		Self::new(FRAGMENT).children(children)
	}

	/// Creates a trusted markup node whose content is emitted unescaped.
	pub fn trusted(html: impl Into<Value>) -> Self {
		Self::new(TRUSTED).children(html)
	}

	/// Creates a text node.
	pub fn text_node(text: impl Into<Value>) -> Self {
		Self::new(TEXT).children(text)
	}

	/// Creates a component node.
	pub fn component(component: impl Into<Value>) -> Self {
		Self::new(Tag::Component(component.into()))
	}

	/// Sets an attribute.
	pub fn attr(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.attrs.set(name, value);
		self
	}

	/// Replaces the attribute mapping.
	pub fn attrs(mut self, attrs: Object) -> Self {
		self.attrs = attrs;
		self
	}

	/// Appends a child.
	pub fn child(mut self, child: impl Into<Value>) -> Self {
		let child = child.into();
		self.children = match std::mem::take(&mut self.children) {
			Value::Array(mut items) => {
				items.push(child);
				Value::Array(items)
			}
			Value::Undefined | Value::Null => Value::Array(vec![child]),
			existing => Value::Array(vec![existing, child]),
		};
		self
	}

	/// Replaces the children.
	pub fn children(mut self, children: impl Into<Value>) -> Self {
		self.children = children.into();
		self
	}

	/// Sets the literal text override.
	pub fn text(mut self, text: impl Into<String>) -> Self {
		self.text = Some(text.into());
		self
	}

	/// Returns a copy of this node carrying `state`.
	///
	/// The renderer gives every node it renders a fresh state this way; the
	/// original node is left untouched so trees can be rendered repeatedly.
	pub fn with_state(&self, state: Object) -> Self {
		Self {
			state: Some(state),
			..self.clone()
		}
	}

	/// Returns a copy of this node with its attribute mapping replaced.
	pub fn with_attrs(&self, attrs: Object) -> Self {
		Self {
			attrs,
			..self.clone()
		}
	}

	/// The node's tag.
	pub fn tag(&self) -> &Tag {
		&self.tag
	}

	/// The attribute mapping.
	pub fn attr_map(&self) -> &Object {
		&self.attrs
	}

	/// The children.
	pub fn child_value(&self) -> &Value {
		&self.children
	}

	/// The literal text override, if set.
	pub fn text_override(&self) -> Option<&str> {
		self.text.as_deref()
	}

	/// The per-render state, present on nodes handed out by the renderer.
	pub fn state(&self) -> Option<&Object> {
		self.state.as_ref()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("br", true)]
	#[case("input", true)]
	#[case("HR", true)]
	#[case("!DOCTYPE", true)]
	#[case("keygen", true)]
	#[case("div", false)]
	#[case("span", false)]
	#[case("", false)]
	fn test_void_element_detection(#[case] tag: &str, #[case] expected: bool) {
		assert_eq!(is_void_element(tag), expected);
	}

	#[rstest]
	fn test_child_appends_in_order() {
		let node = Vnode::element("ul").child("a").child(1).child(Vnode::element("li"));
		let children = node.child_value().as_array().unwrap();
		assert_eq!(children.len(), 3);
		assert_eq!(children[0], Value::from("a"));
		assert_eq!(children[1], Value::from(1));
		assert!(children[2].as_node().is_some());
	}

	#[rstest]
	fn test_child_after_single_children_value() {
		let node = Vnode::element("p").children("first").child("second");
		assert_eq!(
			node.child_value(),
			&Value::from(vec![Value::from("first"), Value::from("second")])
		);
	}

	#[rstest]
	fn test_attrs_preserve_order() {
		let node = Vnode::element("div").attr("b", 1).attr("a", 2);
		assert_eq!(node.attr_map().keys(), vec!["b", "a"]);
	}

	#[rstest]
	fn test_with_state_leaves_original_untouched() {
		let node = Vnode::element("div");
		let state = Object::new();
		let rendered = node.with_state(state.clone());
		assert!(node.state().is_none());
		assert!(rendered.state().unwrap().ptr_eq(&state));
		assert!(rendered.attr_map().ptr_eq(node.attr_map()));
	}

	#[rstest]
	fn test_reserved_constructors() {
		assert_eq!(Vnode::fragment(Value::Null).tag().as_element(), Some(FRAGMENT));
		assert_eq!(Vnode::trusted("<b>").tag().as_element(), Some(TRUSTED));
		assert_eq!(Vnode::text_node("x").tag().as_element(), Some(TEXT));
		let component = Vnode::component(Object::new());
		assert!(component.tag().as_element().is_none());
		assert!(component.tag().as_component().is_some());
	}
}
