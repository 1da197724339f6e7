//! Property-based tests for HTML escaping and attribute serialization
//!
//! Uses proptest to verify properties that should hold for all inputs.

use proptest::prelude::*;
use proptest::proptest;
use vnode_ssr_core::attrs::{camel_to_dash, create_attr_string};
use vnode_ssr_core::escape::{Escape, escape_html};
use vnode_ssr_core::value::{Object, Value};

fn any_flag() -> impl Strategy<Value = Escape> {
	prop_oneof![
		Just(Escape::NoQuotes),
		Just(Escape::QuotesSingle),
		Just(Escape::QuotesDouble),
		Just(Escape::Quotes),
	]
}

proptest! {
	/// Property: escaped output never contains a raw `<` or `>`
	#[test]
	fn prop_no_raw_angle_brackets(text in ".*", flag in any_flag()) {
		let escaped = escape_html(&text, flag);
		prop_assert!(!escaped.contains('<'));
		prop_assert!(!escaped.contains('>'));
	}

	/// Property: with both quote flags, output contains no raw quotes
	#[test]
	fn prop_quotes_mode_removes_quotes(text in ".*") {
		let escaped = escape_html(&text, Escape::Quotes);
		prop_assert!(!escaped.contains('"'));
		prop_assert!(!escaped.contains('\''));
	}

	/// Property: with no-quotes mode, quote counts are preserved
	#[test]
	fn prop_no_quotes_mode_keeps_quotes(text in ".*") {
		let escaped = escape_html(&text, Escape::NoQuotes);
		prop_assert_eq!(
			escaped.matches('"').count(),
			text.matches('"').count()
		);
		prop_assert_eq!(
			escaped.matches('\'').count(),
			text.matches('\'').count()
		);
	}

	/// Property: text without reserved characters is returned unchanged
	#[test]
	fn prop_plain_text_unchanged(text in "[a-zA-Z0-9 .,;:!?/=-]*", flag in any_flag()) {
		let escaped = escape_html(&text, flag);
		prop_assert_eq!(escaped.as_ref(), text.as_str());
	}

	/// Property: every `&` in the output starts an entity
	#[test]
	fn prop_ampersands_start_entities(text in ".*") {
		let escaped = escape_html(&text, Escape::Quotes);
		for (index, _) in escaped.match_indices('&') {
			let rest = &escaped[index..];
			prop_assert!(
				rest.starts_with("&amp;")
					|| rest.starts_with("&lt;")
					|| rest.starts_with("&gt;")
					|| rest.starts_with("&quot;")
					|| rest.starts_with("&#39;")
			);
		}
	}

	/// Property: dashed style properties are lowercase
	#[test]
	fn prop_camel_to_dash_is_lowercase(property in "[a-zA-Z][a-zA-Z0-9]{0,20}") {
		let dashed = camel_to_dash(&property);
		prop_assert_eq!(dashed.to_lowercase(), dashed.clone());
		prop_assert_eq!(dashed.replace('-', ""), property.to_lowercase());
	}

	/// Property: a string attribute value can never break out of its quotes
	#[test]
	fn prop_attribute_value_stays_quoted(value in ".*") {
		let attrs = Object::new().with("title", Value::from(value));
		let serialized = create_attr_string("div", &attrs);
		prop_assert!(serialized.starts_with("title=\""));
		prop_assert!(serialized.ends_with('"'));
		prop_assert_eq!(serialized.matches('"').count(), 2);
	}
}
