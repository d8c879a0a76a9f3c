//! Rewriting of internal validation messages into user-facing form.
//!
//! Setter errors reference fields in angle brackets (`<some_field>`). The
//! synopsis shows the same fields uppercased, so every bracketed token is
//! rewritten to its uppercase, bracket-free form before the message reaches
//! the user.

use std::sync::OnceLock;

use regex::Regex;

/// Matches a field reference of the form `<field_name>`.
const FIELD_REF_REGEX: &str = r"<[^>]+>";

fn field_ref() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(FIELD_REF_REGEX).expect("field reference regex is valid"))
}

/// Rewrite every `<token>` in `message` to `TOKEN`, matching the names
/// printed in the synopsis. Messages without bracketed tokens pass through
/// unchanged.
pub fn rewrite_field_refs(message: &str) -> String {
    field_ref()
        .replace_all(message, |captures: &regex::Captures<'_>| {
            let token = &captures[0];
            token[1..token.len() - 1].to_uppercase()
        })
        .into_owned()
}
