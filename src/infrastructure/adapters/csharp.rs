//! C# renderer
//!
//! Emits a `public static class` with one `public const string` per key.
//! The raw value goes into the field's `<summary>` doc comment; the raw key is
//! the constant's value.

use std::fmt::Write;

use super::escaping::{
    csharp_identifier, csharp_namespace, doc_lines, escape_csharp_string, escape_xml_doc,
};
use crate::domain::entities::KeyEntry;
use crate::domain::ports::{ClassRenderer, RenderContext};
use crate::domain::value_objects::{Identifier, TargetLanguage};

const HEADER: &str = "\
// <auto-generated>
//     This code was generated by keymirror.
//     Changes to this file will be lost when the code is regenerated.
// </auto-generated>
";

const INDENT: &str = "    ";

/// C# class renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpRenderer;

impl CSharpRenderer {
    pub fn new() -> Self {
        Self
    }

    fn write_field(out: &mut String, indent: &str, ident: &Identifier, entry: &KeyEntry) {
        let lines = doc_lines(entry.value());
        if lines.len() == 1 {
            let _ = writeln!(
                out,
                "{indent}/// <summary>{}</summary>",
                escape_xml_doc(lines[0])
            );
        } else {
            let _ = writeln!(out, "{indent}/// <summary>");
            for line in lines {
                let _ = writeln!(out, "{indent}/// {}", escape_xml_doc(line));
            }
            let _ = writeln!(out, "{indent}/// </summary>");
        }
        let _ = writeln!(
            out,
            "{indent}public const string {} = \"{}\";",
            csharp_identifier(ident.as_str()),
            escape_csharp_string(entry.key())
        );
    }
}

impl ClassRenderer for CSharpRenderer {
    fn language(&self) -> TargetLanguage {
        TargetLanguage::CSharp
    }

    fn render(&self, ctx: &RenderContext<'_>, fields: &[(Identifier, &KeyEntry)]) -> String {
        let mut out = String::from(HEADER);
        out.push('\n');

        let namespace = ctx.namespace.and_then(csharp_namespace);
        let outer = if let Some(ns) = &namespace {
            let _ = writeln!(out, "namespace {}\n{{", ns);
            INDENT
        } else {
            ""
        };
        let inner = format!("{outer}{INDENT}");

        let _ = writeln!(
            out,
            "{outer}public static class {}\n{outer}{{",
            csharp_identifier(ctx.class_name.as_str())
        );

        for (i, (ident, entry)) in fields.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            Self::write_field(&mut out, &inner, ident, entry);
        }

        let _ = writeln!(out, "{outer}}}");
        if namespace.is_some() {
            out.push_str("}\n");
        }
        out
    }
}
