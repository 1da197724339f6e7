//! Structural classification of component references.
//!
//! A component is recognised by what it can do, not by how it was built:
//!
//! - an object with a callable `view` property is a value component;
//! - a function whose prototype is a value component is a class component;
//! - any other function is a factory component.
//!
//! Everything else (primitives, absent values, arrays, symbols, nodes) is not a
//! component.

use crate::value::{Function, Object, Value};

/// The component variant a value represents.
#[derive(Debug, Clone)]
pub enum ComponentKind {
	/// An object exposing `view`; used directly as the node's state.
	Value(Object),
	/// A constructible function whose prototype exposes `view`.
	Class(Function),
	/// A function returning an object that exposes `view`.
	Factory(Function),
	/// Not a component.
	NotComponent,
}

impl ComponentKind {
	/// Returns `true` unless this is [`ComponentKind::NotComponent`].
	pub fn is_component_type(&self) -> bool {
		!matches!(self, ComponentKind::NotComponent)
	}
}

fn exposes_view(object: &Object) -> bool {
	matches!(object.get("view"), Value::Function(_))
}

/// Classifies an arbitrary value.
pub fn classify(value: &Value) -> ComponentKind {
	match value {
		Value::Object(object) if exposes_view(object) => ComponentKind::Value(object.clone()),
		Value::Function(function) => {
			if function.prototype().is_some_and(exposes_view) {
				ComponentKind::Class(function.clone())
			} else {
				ComponentKind::Factory(function.clone())
			}
		}
		_ => ComponentKind::NotComponent,
	}
}

/// Returns `true` for an object exposing a callable `view`.
pub fn is_component(value: &Value) -> bool {
	matches!(classify(value), ComponentKind::Value(_))
}

/// Returns `true` for a function whose prototype exposes a callable `view`.
pub fn is_class_component(value: &Value) -> bool {
	matches!(classify(value), ComponentKind::Class(_))
}

/// Returns `true` for a function that is not a class component.
pub fn is_factory_component(value: &Value) -> bool {
	matches!(classify(value), ComponentKind::Factory(_))
}

/// Returns `true` for any of the three component variants.
pub fn is_component_type(value: &Value) -> bool {
	classify(value).is_component_type()
}
