//! Dynamic values flowing through a view tree.
//!
//! A view tree carries values of very different shapes: text, numbers,
//! attribute maps, component objects, callables and nested nodes. [`Value`]
//! is the single type for all of them, so that classification and rendering
//! can be decided from the capabilities a value exposes rather than from a
//! declared type.
//!
//! ## Example
//!
//! ```
//! use vnode_ssr_core::value::{Function, Object, Value};
//!
//! let component = Object::new().with(
//! 	"view",
//! 	Function::new(|_| Ok(Value::from("Hello"))),
//! );
//! assert!(component.get("view").as_function().is_some());
//! ```

use crate::vnode::Vnode;
use futures::future::{BoxFuture, FutureExt};
use parking_lot::RwLock;
use std::borrow::Cow;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Error type returned by user-supplied functions (hooks, views, factories).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result of invoking a [`Function`].
pub type CallResult = Result<Value, BoxError>;

type CallFn = Arc<dyn Fn(Invocation) -> BoxFuture<'static, CallResult> + Send + Sync>;

/// A dynamically shaped value.
#[derive(Debug, Clone, Default)]
pub enum Value {
	/// No value at all.
	#[default]
	Undefined,
	/// An explicit empty value.
	Null,
	/// A boolean.
	Bool(bool),
	/// A number. Integers are stored as `f64` as well.
	Number(f64),
	/// A string.
	String(Cow<'static, str>),
	/// A unique, opaque token.
	Symbol(Symbol),
	/// An ordered sequence of values.
	Array(Vec<Value>),
	/// A shared, mutable property map.
	Object(Object),
	/// A callable, optionally carrying a prototype.
	Function(Function),
	/// A structured view node.
	Node(Arc<Vnode>),
}

impl Value {
	/// Returns `true` for [`Value::Undefined`] and [`Value::Null`].
	pub fn is_absent(&self) -> bool {
		matches!(self, Value::Undefined | Value::Null)
	}

	/// Truthiness: absent, `false`, `0`, `NaN` and `""` are falsy.
	pub fn is_truthy(&self) -> bool {
		match self {
			Value::Undefined | Value::Null => false,
			Value::Bool(b) => *b,
			Value::Number(n) => *n != 0.0 && !n.is_nan(),
			Value::String(s) => !s.is_empty(),
			_ => true,
		}
	}

	/// Short name of the value's shape, used in diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Value::Undefined => "undefined",
			Value::Null => "null",
			Value::Bool(_) => "boolean",
			Value::Number(_) => "number",
			Value::String(_) => "string",
			Value::Symbol(_) => "symbol",
			Value::Array(_) => "array",
			Value::Object(_) => "object",
			Value::Function(_) => "function",
			Value::Node(_) => "node",
		}
	}

	/// Returns the string slice if this is a string.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::String(s) => Some(s),
			_ => None,
		}
	}

	/// Returns the number if this is a number.
	pub fn as_number(&self) -> Option<f64> {
		match self {
			Value::Number(n) => Some(*n),
			_ => None,
		}
	}

	/// Returns the boolean if this is a boolean.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Value::Bool(b) => Some(*b),
			_ => None,
		}
	}

	/// Returns the object if this is an object.
	pub fn as_object(&self) -> Option<&Object> {
		match self {
			Value::Object(o) => Some(o),
			_ => None,
		}
	}

	/// Returns the function if this is a function.
	pub fn as_function(&self) -> Option<&Function> {
		match self {
			Value::Function(f) => Some(f),
			_ => None,
		}
	}

	/// Returns the node if this is a structured node.
	pub fn as_node(&self) -> Option<&Arc<Vnode>> {
		match self {
			Value::Node(n) => Some(n),
			_ => None,
		}
	}

	/// Returns the elements if this is an array.
	pub fn as_array(&self) -> Option<&[Value]> {
		match self {
			Value::Array(items) => Some(items),
			_ => None,
		}
	}

	/// String form of a primitive.
	///
	/// Strings, numbers and booleans convert; every other shape returns `None`.
	pub fn primitive_text(&self) -> Option<Cow<'_, str>> {
		match self {
			Value::String(s) => Some(Cow::Borrowed(s.as_ref())),
			Value::Number(n) => Some(Cow::Owned(format_number(*n))),
			Value::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
			_ => None,
		}
	}

	/// Concatenated text of a value used as raw content.
	///
	/// Arrays contribute each element's primitive text in order; absent values
	/// and non-primitive shapes contribute nothing.
	pub fn joined_text(&self) -> String {
		match self {
			Value::Array(items) => items
				.iter()
				.filter_map(Value::primitive_text)
				.collect::<Vec<_>>()
				.concat(),
			other => other
				.primitive_text()
				.map(Cow::into_owned)
				.unwrap_or_default(),
		}
	}
}

/// Formats a number the way view text expects it.
///
/// Whole numbers print without a fractional part, non-finite values print as
/// `NaN`, `Infinity` and `-Infinity`, and negative zero prints as `0`.
/// Magnitudes of `1e21` and above or below `1e-6` use exponent notation with
/// an explicit sign (`1e+21`, `1.5e-7`).
pub fn format_number(n: f64) -> String {
	if n.is_nan() {
		"NaN".to_string()
	} else if n.is_infinite() {
		if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
	} else if n == 0.0 {
		"0".to_string()
	} else if n.abs() >= 1e21 || n.abs() < 1e-6 {
		let formatted = format!("{n:e}");
		match formatted.split_once('e') {
			Some((mantissa, exponent)) if !exponent.starts_with('-') => {
				format!("{mantissa}e+{exponent}")
			}
			_ => formatted,
		}
	} else {
		n.to_string()
	}
}

impl PartialEq for Value {
	/// Primitives compare by value; objects, functions and nodes by identity.
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
			(Value::Bool(a), Value::Bool(b)) => a == b,
			(Value::Number(a), Value::Number(b)) => a == b,
			(Value::String(a), Value::String(b)) => a == b,
			(Value::Symbol(a), Value::Symbol(b)) => a == b,
			(Value::Array(a), Value::Array(b)) => a == b,
			(Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
			(Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
			(Value::Node(a), Value::Node(b)) => Arc::ptr_eq(a, b),
			_ => false,
		}
	}
}

impl From<&'static str> for Value {
	fn from(s: &'static str) -> Self {
		Value::String(Cow::Borrowed(s))
	}
}

impl From<String> for Value {
	fn from(s: String) -> Self {
		Value::String(Cow::Owned(s))
	}
}

impl From<Cow<'static, str>> for Value {
	fn from(s: Cow<'static, str>) -> Self {
		Value::String(s)
	}
}

impl From<bool> for Value {
	fn from(b: bool) -> Self {
		Value::Bool(b)
	}
}

macro_rules! impl_from_number {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for Value {
				fn from(n: $ty) -> Self {
					Value::Number(n as f64)
				}
			}
		)*
	};
}

impl_from_number!(f64, f32, i32, i64, u32, u64, usize);

impl<T: Into<Value>> From<Vec<T>> for Value {
	fn from(items: Vec<T>) -> Self {
		Value::Array(items.into_iter().map(Into::into).collect())
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map_or(Value::Undefined, Into::into)
	}
}

impl From<()> for Value {
	fn from(_: ()) -> Self {
		Value::Undefined
	}
}

impl From<Symbol> for Value {
	fn from(s: Symbol) -> Self {
		Value::Symbol(s)
	}
}

impl From<Object> for Value {
	fn from(o: Object) -> Self {
		Value::Object(o)
	}
}

impl From<Function> for Value {
	fn from(f: Function) -> Self {
		Value::Function(f)
	}
}

impl From<Vnode> for Value {
	fn from(node: Vnode) -> Self {
		Value::Node(Arc::new(node))
	}
}

impl From<Arc<Vnode>> for Value {
	fn from(node: Arc<Vnode>) -> Self {
		Value::Node(node)
	}
}

static NEXT_SYMBOL_ID: AtomicU64 = AtomicU64::new(0);

/// A unique token; two symbols are equal only if one is a clone of the other.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
	id: u64,
	description: Option<Arc<str>>,
}

impl Symbol {
	/// Creates a new unique symbol.
	pub fn new(description: Option<&str>) -> Self {
		Self {
			id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
			description: description.map(Arc::from),
		}
	}

	/// Returns the symbol's description.
	pub fn description(&self) -> Option<&str> {
		self.description.as_deref()
	}
}

impl fmt::Display for Symbol {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Symbol({})", self.description().unwrap_or_default())
	}
}

/// A shared, insertion-ordered property map.
///
/// Cloning an `Object` yields another handle to the same properties; use
/// [`Object::ptr_eq`] to test identity.
#[derive(Clone, Default)]
pub struct Object {
	props: Arc<RwLock<Vec<(String, Value)>>>,
}

impl Object {
	/// Creates an empty object.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets a property and returns the object (builder form of [`Object::set`]).
	pub fn with(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.set(key, value);
		self
	}

	/// Returns the property value, or [`Value::Undefined`] when missing.
	pub fn get(&self, key: &str) -> Value {
		self.props
			.read()
			.iter()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v.clone())
			.unwrap_or_default()
	}

	/// Returns `true` if the property exists, even if its value is absent.
	pub fn has(&self, key: &str) -> bool {
		self.props.read().iter().any(|(k, _)| k == key)
	}

	/// Sets a property, keeping its original position when it already exists.
	pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) {
		let key = key.into();
		let value = value.into();
		let mut props = self.props.write();
		match props.iter_mut().find(|(k, _)| *k == key) {
			Some((_, slot)) => *slot = value,
			None => props.push((key, value)),
		}
	}

	/// Removes a property and returns its previous value.
	pub fn remove(&self, key: &str) -> Value {
		let mut props = self.props.write();
		match props.iter().position(|(k, _)| k == key) {
			Some(index) => props.remove(index).1,
			None => Value::Undefined,
		}
	}

	/// Copies every property of `source` onto this object, in source order.
	pub fn assign(&self, source: &Object) {
		for (key, value) in source.entries() {
			self.set(key, value);
		}
	}

	/// Snapshot of all properties in insertion order.
	pub fn entries(&self) -> Vec<(String, Value)> {
		self.props.read().clone()
	}

	/// Snapshot of all property names in insertion order.
	pub fn keys(&self) -> Vec<String> {
		self.props.read().iter().map(|(k, _)| k.clone()).collect()
	}

	/// Number of properties.
	pub fn len(&self) -> usize {
		self.props.read().len()
	}

	/// Returns `true` if the object has no properties.
	pub fn is_empty(&self) -> bool {
		self.props.read().is_empty()
	}

	/// Returns `true` if both handles point to the same object.
	pub fn ptr_eq(&self, other: &Object) -> bool {
		Arc::ptr_eq(&self.props, &other.props)
	}
}

impl fmt::Debug for Object {
	// Only keys: objects may reference themselves.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Object").field("keys", &self.keys()).finish()
	}
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let object = Object::new();
		for (key, value) in iter {
			object.set(key, value);
		}
		object
	}
}

/// Arguments of a [`Function`] call.
#[derive(Debug, Clone, Default)]
pub struct Invocation {
	/// The receiver the function was invoked on.
	pub this: Value,
	/// Positional arguments.
	pub args: Vec<Value>,
}

impl Invocation {
	/// Creates an invocation.
	pub fn new(this: Value, args: Vec<Value>) -> Self {
		Self { this, args }
	}

	/// The receiver, if it is an object.
	pub fn this_object(&self) -> Option<&Object> {
		self.this.as_object()
	}

	/// The argument at `index`, or [`Value::Undefined`].
	pub fn arg(&self, index: usize) -> Value {
		self.args.get(index).cloned().unwrap_or_default()
	}

	/// The first argument, if it is a view node.
	///
	/// Lifecycle hooks, views, factories and class constructors all receive
	/// the node being rendered as their first argument.
	pub fn vnode(&self) -> Option<&Arc<Vnode>> {
		self.args.first().and_then(Value::as_node)
	}
}

/// A callable value.
///
/// Every call yields a future; synchronous bodies created with
/// [`Function::new`] run immediately when called and return a ready future.
/// A function carrying a prototype that exposes `view` is a class component.
#[derive(Clone)]
pub struct Function {
	call: CallFn,
	prototype: Option<Object>,
}

impl Function {
	/// Creates a function from a synchronous body.
	pub fn new<F>(body: F) -> Self
	where
		F: Fn(Invocation) -> CallResult + Send + Sync + 'static,
	{
		Self {
			call: Arc::new(move |invocation| {
				let result = body(invocation);
				async move { result }.boxed()
			}),
			prototype: None,
		}
	}

	/// Creates a function from an asynchronous body.
	pub fn new_async<F, Fut>(body: F) -> Self
	where
		F: Fn(Invocation) -> Fut + Send + Sync + 'static,
		Fut: Future<Output = CallResult> + Send + 'static,
	{
		Self {
			call: Arc::new(move |invocation| body(invocation).boxed()),
			prototype: None,
		}
	}

	/// Creates a class whose constructor does nothing.
	///
	/// Instances receive the prototype's properties as defaults.
	pub fn class(prototype: Object) -> Self {
		Self::new(|_| Ok(Value::Undefined)).with_prototype(prototype)
	}

	/// Creates a class with a constructor.
	///
	/// The constructor is invoked with a fresh instance object as receiver and
	/// the node as its only argument; properties it sets on the receiver
	/// override the prototype's defaults.
	pub fn class_with<F>(prototype: Object, constructor: F) -> Self
	where
		F: Fn(Invocation) -> CallResult + Send + Sync + 'static,
	{
		Self::new(constructor).with_prototype(prototype)
	}

	/// Attaches a prototype object.
	pub fn with_prototype(mut self, prototype: Object) -> Self {
		self.prototype = Some(prototype);
		self
	}

	/// The prototype object, if any.
	pub fn prototype(&self) -> Option<&Object> {
		self.prototype.as_ref()
	}

	/// Invokes the function with `this` as receiver.
	pub fn call(&self, this: Value, args: Vec<Value>) -> BoxFuture<'static, CallResult> {
		(self.call)(Invocation::new(this, args))
	}

	/// Returns `true` if both handles refer to the same function.
	pub fn ptr_eq(&self, other: &Function) -> bool {
		Arc::ptr_eq(&self.call, &other.call)
	}
}

impl fmt::Debug for Function {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Function")
			.field("body", &"<closure>")
			.field("prototype", &self.prototype)
			.finish()
	}
}
