//! Column-list normalization.
//!
//! Table statements exported from older clusters can contain
//! `substring(col, ...)` and `substr(col, ...)` fragments. Their inner comma and
//! parentheses would break the comma split, so each fragment is collapsed to
//! the bare column name before splitting.
//!
//! Only those two call shapes are rewritten. A type with its own comma, such
//! as `decimal(10,2)`, is left untouched and still splits incorrectly.

/// Collapse `substring(<word>, ...)` and then `substr(<word>, ...)` to `<word>`.
pub fn normalize_body(body: &str) -> String {
    let body = collapse_calls(body, "substring(");
    collapse_calls(&body, "substr(")
}

/// Replace every `<opener><word>,<anything up to the first ')'>` with `<word>`.
///
/// `<word>` is one or more ASCII letters, digits or underscores directly
/// followed by a comma. Occurrences that do not fit this shape are copied
/// through unchanged.
fn collapse_calls(body: &str, opener: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut rest = body;

    while let Some(pos) = rest.find(opener) {
        let args = &rest[pos + opener.len()..];
        match match_call_args(args) {
            Some((word, consumed)) => {
                out.push_str(&rest[..pos]);
                out.push_str(word);
                rest = &args[consumed..];
            }
            None => {
                out.push_str(&rest[..pos + opener.len()]);
                rest = args;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Match `<word>,<tail>)` at the start of `args`.
///
/// Returns the word and the number of bytes consumed including the `)`.
fn match_call_args(args: &str) -> Option<(&str, usize)> {
    let word_len = args
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(args.len());
    if word_len == 0 || !args[word_len..].starts_with(',') {
        return None;
    }

    let tail = &args[word_len + 1..];
    let close = tail.find(')')?;

    Some((&args[..word_len], word_len + 1 + close + 1))
}
