//! Context-aware escaping for generated source
//!
//! Raw keys and values come straight from user documents, so every place
//! they land in output (string literal, doc comment, identifier) has its own
//! escaping rule.

use crate::domain::value_objects::Identifier;

/// Escape a string for a C# `"..."` literal
///
/// Escapes: backslash, double quotes, newlines, carriage returns, tabs, NUL,
/// and other control characters as `\uXXXX`.
pub fn escape_csharp_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Escape a string for a Rust `"..."` literal
pub fn escape_rust_string(s: &str) -> String {
    s.escape_debug().to_string()
}

/// Escape text for an XML doc comment
///
/// Escapes: ampersand, angle brackets
pub fn escape_xml_doc(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Characters either target language treats as the end of a line
///
/// C# also ends a line at U+0085, U+2028 and U+2029, and Rust rejects a bare
/// CR inside a doc comment, so none of them may survive into a `///` line.
fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}')
}

/// Split a value into doc comment lines
///
/// Breaks on every line terminator (`\r\n` counts once). A trailing
/// terminator does not start an extra line. Always yields at least one
/// (possibly empty) line.
pub fn doc_lines(s: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = s.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&s[start..i]);
        start = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                chars.next();
                start = j + 1;
            }
        }
    }
    if start < s.len() || lines.is_empty() {
        lines.push(&s[start..]);
    }
    lines
}

const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

const RUST_KEYWORDS: &[&str] = &[
    "as", "break", "const", "continue", "else", "enum", "extern", "false", "fn", "for", "if",
    "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return",
    "static", "struct", "trait", "true", "type", "unsafe", "use", "where", "while", "async",
    "await", "dyn", "abstract", "become", "box", "do", "final", "macro", "override", "priv",
    "typeof", "unsized", "virtual", "yield", "try", "gen",
];

/// Keywords that cannot be written as raw identifiers
const RUST_PATH_KEYWORDS: &[&str] = &["self", "Self", "super", "crate"];

/// Make an identifier usable as a C# member name (`class` → `@class`)
pub fn csharp_identifier(ident: &str) -> String {
    if CSHARP_KEYWORDS.contains(&ident) {
        format!("@{}", ident)
    } else {
        ident.to_string()
    }
}

/// Sanitize a dotted C# namespace (`Contoso-Web.1st` → `Contoso_Web._1st`)
///
/// Each segment is derived like a field name and keyword-escaped. Empty
/// segments are dropped; `None` when nothing remains.
pub fn csharp_namespace(ns: &str) -> Option<String> {
    let segments: Vec<String> = ns
        .split('.')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| csharp_identifier(Identifier::derive(segment).as_str()))
        .collect();
    if segments.is_empty() {
        None
    } else {
        Some(segments.join("."))
    }
}

/// Make an identifier usable as a Rust item name (`type` → `r#type`)
pub fn rust_identifier(ident: &str) -> String {
    if ident == "_" || RUST_PATH_KEYWORDS.contains(&ident) {
        format!("{}_", ident)
    } else if RUST_KEYWORDS.contains(&ident) {
        format!("r#{}", ident)
    } else {
        ident.to_string()
    }
}
