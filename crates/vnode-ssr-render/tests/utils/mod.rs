//! Shared helpers for renderer integration tests
//!
//! [`CallLog`] hands out spy functions that record their name when invoked,
//! so tests can assert on call counts and relative ordering of hooks.

#![allow(dead_code)]

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use vnode_ssr_core::value::{Function, Invocation, Object, Value};

/// Ordered record of spy invocations.
#[derive(Clone, Default)]
pub struct CallLog {
	calls: Arc<Mutex<Vec<&'static str>>>,
}

impl CallLog {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records `name`.
	pub fn record(&self, name: &'static str) {
		self.calls.lock().push(name);
	}

	/// A synchronous spy returning `Undefined`.
	pub fn spy(&self, name: &'static str) -> Function {
		let log = self.clone();
		Function::new(move |_| {
			log.record(name);
			Ok(Value::Undefined)
		})
	}

	/// A spy that sleeps for `millis` before recording and returning.
	pub fn delayed_spy(&self, name: &'static str, millis: u64) -> Function {
		let log = self.clone();
		Function::new_async(move |_| {
			let log = log.clone();
			async move {
				tokio::time::sleep(Duration::from_millis(millis)).await;
				log.record(name);
				Ok(Value::Undefined)
			}
		})
	}

	/// A spy that records `name` and asserts its receiver is the node's state.
	pub fn receiver_spy(&self, name: &'static str) -> Function {
		let log = self.clone();
		Function::new(move |invocation| {
			assert!(receiver_is_state(&invocation), "{name}: receiver is not the state");
			log.record(name);
			Ok(Value::Undefined)
		})
	}

	/// A view spy that records `name` and returns the node's children.
	pub fn children_view(&self, name: &'static str) -> Function {
		let log = self.clone();
		Function::new(move |invocation| {
			log.record(name);
			Ok(invocation
				.vnode()
				.map(|node| node.child_value().clone())
				.unwrap_or_default())
		})
	}

	pub fn calls(&self) -> Vec<&'static str> {
		self.calls.lock().clone()
	}

	pub fn count(&self, name: &str) -> usize {
		self.calls.lock().iter().filter(|call| **call == name).count()
	}

	pub fn position(&self, name: &str) -> usize {
		self.calls
			.lock()
			.iter()
			.position(|call| *call == name)
			.unwrap_or_else(|| panic!("{name} was not called"))
	}

	/// Returns `true` if `first` was recorded before `second`.
	pub fn called_before(&self, first: &str, second: &str) -> bool {
		self.position(first) < self.position(second)
	}
}

/// Returns `true` when the invocation's receiver is the state of its node.
pub fn receiver_is_state(invocation: &Invocation) -> bool {
	match (
		invocation.this_object(),
		invocation.vnode().and_then(|node| node.state()),
	) {
		(Some(receiver), Some(state)) => receiver.ptr_eq(state),
		_ => false,
	}
}

/// A value component whose `view` returns `output`.
pub fn static_component(output: impl Into<Value>) -> Object {
	let output = output.into();
	Object::new().with("view", Function::new(move |_| Ok(output.clone())))
}
