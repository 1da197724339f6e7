//! HTML escaping for text and attribute contexts.
//!
//! `&`, `<` and `>` are always escaped. Quotes are escaped according to an
//! [`Escape`] flag: attribute values use [`Escape::Quotes`] (the default),
//! primitive text uses [`Escape::NoQuotes`].
//!
//! ```
//! use vnode_ssr_core::escape::{Escape, escape_html};
//!
//! assert_eq!(escape_html("\"'", Escape::Quotes), "&quot;&#39;");
//! assert_eq!(escape_html("\"'", Escape::NoQuotes), "\"'");
//! ```

use std::borrow::Cow;

/// Which quote characters to escape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Escape {
	/// Leave both quote characters as they are.
	NoQuotes,
	/// Escape `'` only.
	QuotesSingle,
	/// Escape `"` only.
	QuotesDouble,
	/// Escape both `"` and `'`.
	#[default]
	Quotes,
}

impl Escape {
	fn single(self) -> bool {
		matches!(self, Escape::QuotesSingle | Escape::Quotes)
	}

	fn double(self) -> bool {
		matches!(self, Escape::QuotesDouble | Escape::Quotes)
	}
}

/// How a reserved character is replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EscapeRule {
	/// Replace with the given entity.
	Replace(Cow<'static, str>),
	/// Replace with a numeric character reference (`&#N;`).
	Numeric,
	/// Leave the character unescaped.
	Skip,
}

static NUMERIC: EscapeRule = EscapeRule::Numeric;

const fn replace(entity: &'static str) -> EscapeRule {
	EscapeRule::Replace(Cow::Borrowed(entity))
}

/// Character-to-rule table used by [`escape_html_with`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EscapeMap {
	rules: Vec<(char, EscapeRule)>,
}

impl EscapeMap {
	/// Creates an empty map; nothing is escaped until rules are added.
	pub fn new() -> Self {
		Self::default()
	}

	/// The default map for a quote flag.
	pub fn for_flag(flag: Escape) -> Self {
		Self::new()
			.rule(
				'"',
				if flag.double() {
					replace("&quot;")
				} else {
					EscapeRule::Skip
				},
			)
			.rule('&', replace("&amp;"))
			.rule(
				'\'',
				if flag.single() {
					replace("&#39;")
				} else {
					EscapeRule::Skip
				},
			)
			.rule('<', replace("&lt;"))
			.rule('>', replace("&gt;"))
	}

	/// Adds or replaces the rule for `ch`.
	pub fn rule(mut self, ch: char, rule: EscapeRule) -> Self {
		match self.rules.iter_mut().find(|(c, _)| *c == ch) {
			Some((_, existing)) => *existing = rule,
			None => self.rules.push((ch, rule)),
		}
		self
	}

	/// Finds the rule applied to `ch`.
	///
	/// Keys match ASCII case-insensitively. A character matched only through
	/// another case of a key falls back to [`EscapeRule::Numeric`].
	fn lookup(&self, ch: char) -> Option<&EscapeRule> {
		let mut folded = None;
		for (c, rule) in &self.rules {
			if *rule == EscapeRule::Skip {
				continue;
			}
			if *c == ch {
				return Some(rule);
			}
			if folded.is_none() && c.eq_ignore_ascii_case(&ch) {
				folded = Some(&NUMERIC);
			}
		}
		folded
	}
}

/// Escapes `text` with the default rules for `flag`.
///
/// Returns a borrowed reference if no escaping is needed.
pub fn escape_html(text: &str, flag: Escape) -> Cow<'_, str> {
	escape_html_with(text, &EscapeMap::for_flag(flag))
}

/// Escapes `text` with a custom rule table.
///
/// Characters mapped to [`EscapeRule::Skip`] and unmapped characters are left
/// untouched. A letter key also matches its other ASCII case, which is escaped
/// as a numeric reference. Already-escaped input is escaped again.
pub fn escape_html_with<'a>(text: &'a str, map: &EscapeMap) -> Cow<'a, str> {
	let Some(first) = text.find(|c| map.lookup(c).is_some()) else {
		return Cow::Borrowed(text);
	};

	let mut escaped = String::with_capacity(text.len() + 8);
	escaped.push_str(&text[..first]);
	for c in text[first..].chars() {
		match map.lookup(c) {
			Some(EscapeRule::Replace(entity)) => escaped.push_str(entity),
			Some(EscapeRule::Numeric) => {
				escaped.push_str("&#");
				escaped.push_str(&u32::from(c).to_string());
				escaped.push(';');
			}
			Some(EscapeRule::Skip) | None => escaped.push(c),
		}
	}
	Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_no_special_chars_borrows() {
		assert!(matches!(
			escape_html("Hello World", Escape::Quotes),
			Cow::Borrowed("Hello World")
		));
	}

	#[rstest]
	#[case(Escape::Quotes, "&quot;&#39;")]
	#[case(Escape::QuotesDouble, "&quot;'")]
	#[case(Escape::QuotesSingle, "\"&#39;")]
	#[case(Escape::NoQuotes, "\"'")]
	fn test_quote_flags(#[case] flag: Escape, #[case] expected: &str) {
		assert_eq!(escape_html("\"'", flag), expected);
	}

	#[rstest]
	#[case(Escape::Quotes)]
	#[case(Escape::NoQuotes)]
	fn test_reserved_chars_always_escaped(#[case] flag: Escape) {
		assert_eq!(
			escape_html("<a href=x>&</a>", flag),
			"&lt;a href=x&gt;&amp;&lt;/a&gt;"
		);
	}

	#[rstest]
	fn test_double_escaping_is_not_detected() {
		assert_eq!(escape_html("&amp;", Escape::Quotes), "&amp;amp;");
	}

	#[rstest]
	fn test_numeric_fallback() {
		let map = EscapeMap::new().rule('é', EscapeRule::Numeric).rule('<', replace("&lt;"));
		assert_eq!(escape_html_with("café <", &map), "caf&#233; &lt;");
	}

	#[rstest]
	fn test_letter_keys_match_either_case() {
		let map = EscapeMap::new().rule('a', replace("[a]"));
		assert_eq!(escape_html_with("aAb", &map), "[a]&#65;b");
	}

	#[rstest]
	fn test_skipped_letter_key_does_not_match_other_case() {
		let map = EscapeMap::new().rule('a', EscapeRule::Skip);
		assert!(matches!(escape_html_with("aA", &map), Cow::Borrowed("aA")));
	}

	#[rstest]
	fn test_skip_rule_leaves_reserved_char() {
		let map = EscapeMap::for_flag(Escape::Quotes).rule('&', EscapeRule::Skip);
		assert_eq!(escape_html_with("a & <b>", &map), "a & &lt;b&gt;");
	}

	#[rstest]
	fn test_multibyte_text_around_escapes() {
		assert_eq!(escape_html("日本<語>", Escape::NoQuotes), "日本&lt;語&gt;");
	}
}
