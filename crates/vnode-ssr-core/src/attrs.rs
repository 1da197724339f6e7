//! Attribute serialization.
//!
//! Turns a node's attribute mapping into the `name="value"` list placed
//! inside an opening tag.

use crate::escape::{Escape, escape_html};
use crate::value::{Object, Value};
use std::borrow::Cow;
use tracing::trace;

/// Converts a camelCase style property to its dashed CSS form.
///
/// Runs of non-word characters become a single `-`, a lowercase letter or
/// digit followed by an uppercase letter gets a `-` in between, and the result
/// is lowercased.
///
/// ```
/// use vnode_ssr_core::attrs::camel_to_dash;
///
/// assert_eq!(camel_to_dash("paddingLeft"), "padding-left");
/// assert_eq!(camel_to_dash("WebkitTransition"), "webkit-transition");
/// ```
pub fn camel_to_dash(property: &str) -> String {
	let mut dashed = String::with_capacity(property.len() + 4);
	let mut in_separator = false;
	for c in property.chars() {
		if c.is_ascii_alphanumeric() || c == '_' {
			in_separator = false;
			dashed.push(c);
		} else if !in_separator {
			in_separator = true;
			dashed.push('-');
		}
	}

	let mut result = String::with_capacity(dashed.len() + 4);
	let mut prev: Option<char> = None;
	for c in dashed.chars() {
		if c.is_ascii_uppercase()
			&& prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit())
		{
			result.push('-');
		}
		result.push(c);
		prev = Some(c);
	}
	result.to_lowercase()
}

/// Builds the CSS declaration list for a style mapping.
///
/// Properties whose value is empty or absent are dropped; the rest are joined
/// as `property:value` pairs separated by `;`, in declaration order.
pub fn style_string(styles: &Object) -> String {
	styles
		.entries()
		.into_iter()
		.filter_map(|(property, value)| {
			let value = value.primitive_text()?;
			if value.is_empty() {
				return None;
			}
			Some(format!("{}:{}", camel_to_dash(&property), value))
		})
		.collect::<Vec<_>>()
		.join(";")
}

/// Serializes one attribute, or returns `None` when it must be omitted.
fn attribute(tag: &str, name: &str, value: &Value) -> Option<String> {
	match value {
		Value::Undefined | Value::Null | Value::Function(_) => return None,
		Value::Bool(true) => return Some(name.to_string()),
		Value::Bool(false) => return None,
		_ => {}
	}

	if name == "style" {
		if !value.is_truthy() {
			return None;
		}
		let styles = match value {
			Value::Object(styles) => Cow::Owned(style_string(styles)),
			other => other.primitive_text()?,
		};
		if styles.is_empty() {
			return None;
		}
		return Some(format!("style=\"{}\"", escape_html(&styles, Escape::Quotes)));
	}

	let Some(text) = value.primitive_text() else {
		trace!(
			attribute = name,
			kind = value.kind(),
			"skipping attribute with non-primitive value"
		);
		return None;
	};
	let escaped = escape_html(&text, Escape::Quotes);

	if name == "href" && tag == "use" {
		return Some(format!("xlink:href=\"{escaped}\""));
	}

	let name = if name == "className" { "class" } else { name };
	Some(format!("{name}=\"{escaped}\""))
}

/// Builds the attribute string of an element.
///
/// Attributes are emitted in mapping order, separated by single spaces.
/// Absent values, functions and `false` are omitted; `true` emits the bare
/// name.
///
/// ```
/// use vnode_ssr_core::attrs::create_attr_string;
/// use vnode_ssr_core::value::Object;
///
/// let attrs = Object::new().with("data-foo", "bar").with("selected", true);
/// assert_eq!(create_attr_string("div", &attrs), "data-foo=\"bar\" selected");
/// ```
pub fn create_attr_string(tag: &str, attrs: &Object) -> String {
	attrs
		.entries()
		.iter()
		.filter_map(|(name, value)| attribute(tag, name, value))
		.collect::<Vec<_>>()
		.join(" ")
		.trim()
		.to_string()
}
