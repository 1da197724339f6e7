//! Render options.

use crate::lifecycle::HookQueue;
use vnode_ssr_core::value::Object;

/// Options for a render call.
#[derive(Debug, Default)]
pub struct RenderOptions {
	/// Self-close every element whose rendered content is empty.
	pub strict: bool,
	/// Attributes given to a component passed as the bare root view.
	///
	/// Bare components found deeper in the tree receive the same mapping.
	pub attrs: Object,
	/// Teardown hooks drained after the root invocation completes.
	pub hooks: HookQueue,
}

impl RenderOptions {
	/// Creates new default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets strict mode.
	pub fn strict(mut self, strict: bool) -> Self {
		self.strict = strict;
		self
	}

	/// Sets the root component attributes.
	pub fn attrs(mut self, attrs: Object) -> Self {
		self.attrs = attrs;
		self
	}

	/// Pre-seeds the teardown queue.
	pub fn hooks(mut self, hooks: HookQueue) -> Self {
		self.hooks = hooks;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_defaults() {
		let options = RenderOptions::new();
		assert!(!options.strict);
		assert!(options.attrs.is_empty());
		assert!(options.hooks.is_empty());
	}

	#[rstest]
	fn test_builder() {
		let mut hooks = HookQueue::new();
		hooks.push(|| async { Ok(()) });
		let options = RenderOptions::new()
			.strict(true)
			.attrs(Object::new().with("text", "attr"))
			.hooks(hooks);
		assert!(options.strict);
		assert_eq!(options.attrs.get("text").as_str(), Some("attr"));
		assert_eq!(options.hooks.len(), 1);
	}
}
