//! Instruction markup stripping.

/// Remove every `<…>` tag from `raw`, keeping the text between tags.
///
/// Tags are matched non-greedily and never span a line break: each `<` pairs
/// with the next `>` on the same line.  A `<` with no such `>` is kept
/// verbatim.
pub fn strip_markup(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(open) = rest.find('<') {
        let after = &rest[open + 1..];
        match after.find(['>', '\n']) {
            Some(i) if after.as_bytes()[i] == b'>' => {
                out.push_str(&rest[..open]);
                rest = &after[i + 1..];
            }
            _ => {
                out.push_str(&rest[..=open]);
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
