//! Lifecycle hook resolution and ordering.
//!
//! Every structured node may declare `oninit` and `onremove`, either in its
//! attributes or on its state. Attributes take precedence; the two sources are
//! never merged. Hooks are invoked with the node's state as receiver and the
//! node as their only argument.
//!
//! - `oninit` is awaited before the node's children start rendering.
//! - `onremove` is pushed onto the [`HookQueue`] of the current render
//!   invocation and runs once that invocation's subtree has completed.
//!
//! Each awaited hook yields to the executor once, as does every render
//! invocation, so concurrently rendered siblings interleave by depth.

use crate::error::{HookKind, RenderError};
use futures::future::{BoxFuture, FutureExt};
use std::fmt;
use std::sync::Arc;
use tracing::trace;
use vnode_ssr_core::value::{Function, Value};
use vnode_ssr_core::vnode::Vnode;

type Hook = Box<dyn FnOnce() -> BoxFuture<'static, Result<(), RenderError>> + Send>;

/// Deferred teardown hooks of one render invocation.
///
/// Hooks run in the order they were pushed when the queue is drained.
#[derive(Default)]
pub struct HookQueue {
	hooks: Vec<Hook>,
}

impl HookQueue {
	/// Creates an empty queue.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a hook.
	pub fn push<F, Fut>(&mut self, hook: F)
	where
		F: FnOnce() -> Fut + Send + 'static,
		Fut: Future<Output = Result<(), RenderError>> + Send + 'static,
	{
		self.hooks.push(Box::new(move || hook().boxed()));
	}

	/// Number of pending hooks.
	pub fn len(&self) -> usize {
		self.hooks.len()
	}

	/// Returns `true` if no hook is pending.
	pub fn is_empty(&self) -> bool {
		self.hooks.is_empty()
	}

	/// Runs every hook in queue order, stopping at the first failure.
	pub async fn drain(self) -> Result<(), RenderError> {
		for hook in self.hooks {
			hook().await?;
		}
		Ok(())
	}
}

impl fmt::Debug for HookQueue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("HookQueue")
			.field("pending", &self.hooks.len())
			.finish()
	}
}

/// The effective lifecycle hooks of a node.
#[derive(Debug, Clone, Default)]
pub struct Lifecycle {
	/// Hook awaited before the node's children render.
	pub oninit: Option<Function>,
	/// Hook run after the node's subtree has rendered.
	pub onremove: Option<Function>,
}

impl Lifecycle {
	/// Resolves hooks from the node's attributes, falling back to its state.
	pub fn resolve(node: &Vnode) -> Self {
		Self {
			oninit: resolve_hook(node, HookKind::Init),
			onremove: resolve_hook(node, HookKind::Remove),
		}
	}

	/// Awaits `oninit`, if any.
	pub async fn run_init(&self, node: &Arc<Vnode>) -> Result<(), RenderError> {
		if let Some(oninit) = &self.oninit {
			invoke(oninit, node, HookKind::Init).await?;
		}
		Ok(())
	}

	/// Queues `onremove`, if any.
	pub fn schedule_remove(&self, node: &Arc<Vnode>, queue: &mut HookQueue) {
		if let Some(onremove) = self.onremove.clone() {
			let node = Arc::clone(node);
			queue.push(move || async move { invoke(&onremove, &node, HookKind::Remove).await });
		}
	}
}

fn resolve_hook(node: &Vnode, kind: HookKind) -> Option<Function> {
	let from_attrs = node.attr_map().get(kind.name());
	let hook = if from_attrs.is_truthy() {
		from_attrs
	} else {
		node.state()
			.map(|state| state.get(kind.name()))
			.unwrap_or_default()
	};
	hook.as_function().cloned()
}

async fn invoke(hook: &Function, node: &Arc<Vnode>, kind: HookKind) -> Result<(), RenderError> {
	trace!(hook = %kind, "invoking lifecycle hook");
	let receiver = node.state().cloned().map_or(Value::Undefined, Value::Object);
	hook.call(receiver, vec![Value::Node(Arc::clone(node))])
		.await
		.map_err(|source| RenderError::Hook { hook: kind, source })?;
	tokio::task::yield_now().await;
	Ok(())
}

/// Runs `oninit` and queues `onremove` for `node`.
pub async fn attach(node: &Arc<Vnode>, queue: &mut HookQueue) -> Result<(), RenderError> {
	let lifecycle = Lifecycle::resolve(node);
	lifecycle.run_init(node).await?;
	lifecycle.schedule_remove(node, queue);
	Ok(())
}
