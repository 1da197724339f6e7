//! Render errors.

use std::fmt;
use vnode_ssr_core::value::BoxError;

/// Lifecycle hook names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookKind {
	/// `oninit`, awaited before a node's children render.
	Init,
	/// `onremove`, deferred until a node's subtree has rendered.
	Remove,
}

impl HookKind {
	/// The property name the hook is resolved from.
	pub fn name(self) -> &'static str {
		match self {
			HookKind::Init => "oninit",
			HookKind::Remove => "onremove",
		}
	}
}

impl fmt::Display for HookKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Component code that can fail while a component is instantiated or viewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentStage {
	/// A class component's constructor.
	Construct,
	/// A factory component's invocation.
	Factory,
	/// The `view` operation.
	View,
}

impl fmt::Display for ComponentStage {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ComponentStage::Construct => write!(f, "constructor"),
			ComponentStage::Factory => write!(f, "factory"),
			ComponentStage::View => write!(f, "view"),
		}
	}
}

/// Errors that abort a render.
///
/// No error is recovered internally: the first failure surfaces to the caller
/// of [`render`](crate::render) and any partial output is discarded.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
	/// A value that is neither a node nor a component reached the renderer.
	#[error("unknown component: '{0}'")]
	UnknownComponent(String),

	/// A node's tag is not a string and classifies as no component variant.
	#[error("unknown component type: '{0}'")]
	UnknownComponentType(String),

	/// A lifecycle hook failed.
	#[error("{hook} hook failed: {source}")]
	Hook {
		/// The failing hook.
		hook: HookKind,
		/// The error returned by the hook.
		#[source]
		source: BoxError,
	},

	/// Component code failed.
	#[error("component {stage} failed: {source}")]
	Component {
		/// Where the failure happened.
		stage: ComponentStage,
		/// The error returned by the component.
		#[source]
		source: BoxError,
	},
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_display_messages() {
		assert_eq!(
			RenderError::UnknownComponent("symbol".into()).to_string(),
			"unknown component: 'symbol'"
		);
		assert_eq!(
			RenderError::UnknownComponentType("number".into()).to_string(),
			"unknown component type: 'number'"
		);
		let error = RenderError::Hook {
			hook: HookKind::Init,
			source: "boom".into(),
		};
		assert_eq!(error.to_string(), "oninit hook failed: boom");
		let error = RenderError::Component {
			stage: ComponentStage::View,
			source: "bad view".into(),
		};
		assert_eq!(error.to_string(), "component view failed: bad view");
	}

	#[rstest]
	fn test_source_is_preserved() {
		use std::error::Error;

		let error = RenderError::Hook {
			hook: HookKind::Remove,
			source: "teardown".into(),
		};
		assert_eq!(error.source().map(ToString::to_string).as_deref(), Some("teardown"));
	}
}
