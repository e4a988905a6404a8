//! Rust renderer
//!
//! Emits a unit struct with one associated `&str` constant per key.
//! Identifiers keep their derived spelling, so naming lints are allowed.

use std::fmt::Write;

use super::escaping::{doc_lines, escape_rust_string, rust_identifier};
use crate::domain::entities::KeyEntry;
use crate::domain::ports::{ClassRenderer, RenderContext};
use crate::domain::value_objects::{Identifier, TargetLanguage};

const HEADER: &str = "// @generated by keymirror. Do not edit by hand.\n";

/// Rust struct renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct RustRenderer;

impl RustRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ClassRenderer for RustRenderer {
    fn language(&self) -> TargetLanguage {
        TargetLanguage::Rust
    }

    fn render(&self, ctx: &RenderContext<'_>, fields: &[(Identifier, &KeyEntry)]) -> String {
        let class_name = rust_identifier(ctx.class_name.as_str());

        let mut out = String::from(HEADER);
        out.push('\n');
        if let Some(doc) = ctx.namespace {
            write_doc(&mut out, "", doc);
        }
        out.push_str("#[allow(non_camel_case_types, dead_code)]\n");
        let _ = writeln!(out, "pub struct {};\n", class_name);
        out.push_str("#[allow(non_upper_case_globals, dead_code)]\n");
        let _ = writeln!(out, "impl {} {{", class_name);

        for (i, (ident, entry)) in fields.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            write_doc(&mut out, "    ", entry.value());
            let _ = writeln!(
                out,
                "    pub const {}: &str = \"{}\";",
                rust_identifier(ident.as_str()),
                escape_rust_string(entry.key())
            );
        }

        out.push_str("}\n");
        out
    }
}

fn write_doc(out: &mut String, indent: &str, text: &str) {
    for line in doc_lines(text) {
        if line.is_empty() {
            let _ = writeln!(out, "{indent}///");
        } else {
            let _ = writeln!(out, "{indent}/// {}", line);
        }
    }
}
