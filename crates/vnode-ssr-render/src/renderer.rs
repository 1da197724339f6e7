//! Recursive view-tree renderer.

use crate::error::{ComponentStage, RenderError};
use crate::lifecycle::{self, HookQueue};
use crate::options::RenderOptions;
use futures::future::{BoxFuture, FutureExt, try_join_all};
use std::sync::Arc;
use tracing::{debug, trace};
use vnode_ssr_core::attrs::create_attr_string;
use vnode_ssr_core::classify::{ComponentKind, classify};
use vnode_ssr_core::escape::{Escape, escape_html};
use vnode_ssr_core::value::{Object, Value, format_number};
use vnode_ssr_core::vnode::{FRAGMENT, TEXT, TRUSTED, Tag, Vnode, is_void_element};

/// Renders a view tree to an HTML string.
///
/// Every structured node's `oninit` hook completes before its children start
/// rendering, and its `onremove` hook runs once its subtree has rendered.
/// Sequence elements render concurrently; the output keeps sequence order.
///
/// # Example
///
/// ```
/// use vnode_ssr_core::vnode::Vnode;
/// use vnode_ssr_render::{RenderOptions, render};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let view = Vnode::element("div")
///     .attr("data-foo", "bar")
///     .attr("selected", true)
///     .child("content");
/// let html = render(view, RenderOptions::new()).await.unwrap();
/// assert_eq!(html, "<div data-foo=\"bar\" selected>content</div>");
/// # }
/// ```
pub async fn render(
	view: impl Into<Value>,
	options: RenderOptions,
) -> Result<String, RenderError> {
	let RenderOptions {
		strict,
		attrs,
		hooks,
	} = options;
	let renderer = Renderer { strict, attrs };

	debug!(strict, "rendering view tree");
	match renderer.render_value(view.into(), hooks).await {
		Ok(html) => {
			debug!(bytes = html.len(), "render finished");
			Ok(html)
		}
		Err(error) => {
			debug!(%error, "render failed");
			Err(error)
		}
	}
}

/// Renders a view tree with default options.
pub async fn render_to_string(view: impl Into<Value>) -> Result<String, RenderError> {
	render(view, RenderOptions::default()).await
}

/// Settings shared by every invocation of one render call.
struct Renderer {
	strict: bool,
	attrs: Object,
}

impl Renderer {
	/// Renders `view`, then drains the invocation's own hook queue.
	///
	/// Every invocation yields once before dispatching, so each level of
	/// nesting is a suspension point and shallow siblings finish first.
	fn render_value<'a>(
		&'a self,
		view: Value,
		mut hooks: HookQueue,
	) -> BoxFuture<'a, Result<String, RenderError>> {
		async move {
			tokio::task::yield_now().await;
			let html = self.dispatch(view, &mut hooks).await?;
			hooks.drain().await?;
			Ok(html)
		}
		.boxed()
	}

	fn render_child<'a>(&'a self, view: Value) -> BoxFuture<'a, Result<String, RenderError>> {
		self.render_value(view, HookQueue::new())
	}

	async fn dispatch(&self, view: Value, hooks: &mut HookQueue) -> Result<String, RenderError> {
		trace!(kind = view.kind(), "dispatching view");
		match view {
			Value::Array(items) => {
				let rendered = try_join_all(items.into_iter().map(|item| self.render_child(item))).await?;
				Ok(rendered.concat())
			}
			Value::String(text) => Ok(escape_html(&text, Escape::NoQuotes).into_owned()),
			Value::Number(n) => Ok(escape_html(&format_number(n), Escape::NoQuotes).into_owned()),
			Value::Bool(_) | Value::Undefined | Value::Null => Ok(String::new()),
			Value::Node(node) => self.render_node(node, hooks).await,
			other => {
				if !classify(&other).is_component_type() {
					return Err(RenderError::UnknownComponent(other.kind().to_string()));
				}
				let node = Arc::new(Vnode::component(other.clone()).attrs(self.attrs.clone()));
				self.render_component(other, node, hooks).await
			}
		}
	}

	async fn render_node(&self, node: Arc<Vnode>, hooks: &mut HookQueue) -> Result<String, RenderError> {
		match node.tag() {
			Tag::Element(name) => {
				let name = name.clone();
				let node = Arc::new(node.with_state(Object::new()));
				self.render_element(&name, node, hooks).await
			}
			Tag::Component(component) => {
				let component = component.clone();
				self.render_component(component, node, hooks).await
			}
		}
	}

	async fn render_element(
		&self,
		name: &str,
		node: Arc<Vnode>,
		hooks: &mut HookQueue,
	) -> Result<String, RenderError> {
		lifecycle::attach(&node, hooks).await?;

		let html = match name {
			FRAGMENT => self.render_child(node.child_value().clone()).await?,
			TRUSTED => node.child_value().joined_text(),
			TEXT => {
				let text = match node.text_override() {
					Some(text) if !text.is_empty() => text.to_string(),
					_ => node.child_value().joined_text(),
				};
				escape_html(&text, Escape::Quotes).into_owned()
			}
			_ => {
				let content = match node.text_override() {
					Some(text) if !text.is_empty() => Value::from(text.to_string()),
					_ => node.child_value().clone(),
				};
				let children = self.render_child(content).await?;
				let attributes = create_attr_string(name, node.attr_map());
				let open = if attributes.is_empty() {
					format!("<{name}")
				} else {
					format!("<{name} {attributes}")
				};

				if children.is_empty() && (self.strict || is_void_element(name)) {
					if self.strict {
						format!("{open}/>")
					} else {
						format!("{open}>")
					}
				} else {
					format!("{open}>{children}</{name}>")
				}
			}
		};
		Ok(html)
	}

	async fn render_component(
		&self,
		component: Value,
		node: Arc<Vnode>,
		hooks: &mut HookQueue,
	) -> Result<String, RenderError> {
		let state = instantiate(&component, &node).await?;
		let node = Arc::new(node.with_state(state.clone()));
		lifecycle::attach(&node, hooks).await?;

		let view = state.get("view");
		let Some(view) = view.as_function() else {
			trace!("component instance has no view");
			return Ok(String::new());
		};
		let output = view
			.call(Value::Object(state.clone()), vec![Value::Node(Arc::clone(&node))])
			.await
			.map_err(|source| RenderError::Component {
				stage: ComponentStage::View,
				source,
			})?;
		self.render_child(output).await
	}
}

/// Produces the per-render state of a component node.
async fn instantiate(component: &Value, node: &Arc<Vnode>) -> Result<Object, RenderError> {
	match classify(component) {
		ComponentKind::Value(object) => Ok(object),
		ComponentKind::Class(class) => {
			// Prototype defaults first; the constructor overwrites them on `this`.
			let instance: Object = class
				.prototype()
				.map(|prototype| prototype.entries().into_iter().collect())
				.unwrap_or_default();
			let returned = class
				.call(Value::Object(instance.clone()), vec![Value::Node(Arc::clone(node))])
				.await
				.map_err(|source| RenderError::Component {
					stage: ComponentStage::Construct,
					source,
				})?;
			match returned {
				Value::Object(object) if !object.ptr_eq(&instance) => {
					if let Some(prototype) = class.prototype() {
						let own: Object = object.entries().into_iter().collect();
						object.assign(prototype);
						object.assign(&own);
					}
					Ok(object)
				}
				_ => Ok(instance),
			}
		}
		ComponentKind::Factory(factory) => {
			let returned = factory
				.call(Value::Undefined, vec![Value::Node(Arc::clone(node))])
				.await
				.map_err(|source| RenderError::Component {
					stage: ComponentStage::Factory,
					source,
				})?;
			match returned {
				Value::Object(object) => Ok(object),
				other => {
					trace!(kind = other.kind(), "factory returned a non-object instance");
					Ok(Object::new())
				}
			}
		}
		ComponentKind::NotComponent => {
			Err(RenderError::UnknownComponentType(component.kind().to_string()))
		}
	}
}
