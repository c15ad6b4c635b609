/// Strip one level of GraphQL wrapper notation from a display type name.
///
/// A trailing `!` (non-null) is dropped first; if the remainder is
/// bracketed (list), the brackets are dropped too. One level per call:
/// `"String!"` becomes `"String"`, `"[User]"` becomes `"User"`, and
/// `"[ID!]"` becomes `"ID!"`. Anything else passes through unchanged.
/// A name that does not match the type map after stripping is simply a
/// lookup miss for the caller.
pub fn strip_wrappers(raw: &str) -> &str {
    let name = raw.strip_suffix('!').unwrap_or(raw);
    match name.strip_prefix('[').and_then(|inner| inner.strip_suffix(']')) {
        Some(inner) => inner,
        None => name,
    }
}
