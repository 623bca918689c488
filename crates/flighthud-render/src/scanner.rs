//! Single-pass `<Token>` scanner.
//!
//! The scanner walks a template left to right exactly once. Everything that
//! is not a well-formed, recognized token span is copied verbatim, so the
//! worst a malformed template can do is render itself.

/// Scans `template`, replacing every `<name>` span for which `lookup`
/// returns a value and copying everything else through unchanged.
///
/// Rules, in order, at each position:
///
/// - `<` with a later `>`: the text strictly between them (possibly empty)
///   is the candidate token name. A `Some` from `lookup` is appended in
///   place of the span; `None` appends the span literally, delimiters
///   included, so unknown or future tokens degrade instead of vanishing.
/// - `<` with no `>` anywhere after it: an ordinary literal character.
/// - Anything else: copied as-is.
///
/// Token boundaries are "first `>` wins": there is no nested-bracket
/// matching, so `<A<B>>` looks up the name `A<B` and leaves the trailing
/// `>` literal. Kept for compatibility with existing user templates.
pub fn scan<F>(template: &str, mut lookup: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    let mut output = String::with_capacity(template.len());
    let bytes = template.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'<' {
            if let Some(end) = template[i + 1..].find('>') {
                let name = &template[i + 1..i + 1 + end];
                match lookup(name) {
                    Some(value) => output.push_str(&value),
                    None => {
                        output.push('<');
                        output.push_str(name);
                        output.push('>');
                    }
                }
                i += name.len() + 2;
                continue;
            }
            // Unterminated: the '<' is literal text
            output.push('<');
            i += 1;
        } else {
            // Copy one whole character (the byte cursor must not split a
            // multi-byte scalar)
            let ch = template[i..].chars().next().unwrap_or('\u{fffd}');
            output.push(ch);
            i += ch.len_utf8();
        }
    }

    output
}
