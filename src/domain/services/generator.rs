//! Code Generator Domain Service
//!
//! Renders a snapshot as a class file. Identifier derivation happens here;
//! syntax is delegated to the language's `ClassRenderer`.

use crate::domain::entities::KeySnapshot;
use crate::domain::ports::{ClassRenderer, RenderContext};
use crate::domain::value_objects::{Identifier, TargetLanguage};
use crate::infrastructure::adapters::get_renderer;

/// Options that shape the generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub language: TargetLanguage,
    /// Class name; derived into an identifier before use
    pub class_name: String,
    /// C# namespace (ignored by renderers that have none)
    pub namespace: Option<String>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            language: TargetLanguage::default(),
            class_name: "AppSettings".to_string(),
            namespace: None,
        }
    }
}

impl GeneratorOptions {
    pub fn with_language(mut self, language: TargetLanguage) -> Self {
        self.language = language;
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn with_namespace(mut self, namespace: Option<String>) -> Self {
        self.namespace = namespace;
        self
    }
}

/// Generates class definitions from snapshots
pub struct CodeGenerator {
    options: GeneratorOptions,
    renderer: Box<dyn ClassRenderer>,
}

impl std::fmt::Debug for CodeGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodeGenerator")
            .field("options", &self.options)
            .field("renderer", &self.renderer.language())
            .finish()
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new(GeneratorOptions::default())
    }
}

impl CodeGenerator {
    /// Generator using the built-in renderer for `options.language`
    pub fn new(options: GeneratorOptions) -> Self {
        let renderer = get_renderer(options.language);
        Self { options, renderer }
    }

    /// Generator with a custom renderer
    pub fn with_renderer(options: GeneratorOptions, renderer: Box<dyn ClassRenderer>) -> Self {
        Self { options, renderer }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    pub fn language(&self) -> TargetLanguage {
        self.renderer.language()
    }

    /// Render the class for `snapshot`
    ///
    /// Pure: identical snapshots produce byte-identical output.
    pub fn generate(&self, snapshot: &KeySnapshot) -> String {
        let class_name = Identifier::derive(&self.options.class_name);
        let ctx = RenderContext {
            class_name: &class_name,
            namespace: self.options.namespace.as_deref().filter(|ns| !ns.is_empty()),
        };

        let fields: Vec<_> = snapshot
            .entries()
            .iter()
            .map(|entry| (Identifier::derive(entry.key()), entry))
            .collect();

        self.renderer.render(&ctx, &fields)
    }
}
