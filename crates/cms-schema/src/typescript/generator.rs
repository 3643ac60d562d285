//! Schema to TypeScript text.

use crate::error::{ConfigurationError, Result};
use crate::field::{Field, FieldNode, Schema, Shape};

use super::converter::shape_members;
use super::to_text::{declaration_to_text, members_to_text, TAB};
use super::types::TsDeclaration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Indentation unit per nesting level.
    pub indent: String,
    /// Emit each field's label as a doc comment above its property.
    pub comments: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            indent: TAB.to_string(),
            comments: false,
        }
    }
}

/// Projects a schema onto TypeScript-like type text.
///
/// Output is a pure function of the schema and the options: the same tree
/// always renders to the same text.
#[derive(Debug, Clone, Default)]
pub struct TypeGenerator {
    opts: GeneratorOptions,
}

impl TypeGenerator {
    pub fn new(opts: GeneratorOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.opts
    }

    /// Renders the top-level types of a schema node, one
    /// `name: { ... };` block per type.
    pub fn generate(&self, node: &FieldNode) -> Result<String> {
        match node {
            FieldNode::Schema(schema) => Ok(self.generate_schema(schema)),
            other => Err(ConfigurationError::NotASchema {
                kind: other.kind().to_string(),
            }),
        }
    }

    pub fn generate_schema(&self, schema: &Schema) -> String {
        tracing::debug!(types = schema.shape().len(), "generating type text");
        self.render_shape(schema.shape())
    }

    /// Renders each top-level type as an `export interface`, separated by
    /// blank lines.
    pub fn generate_declarations(&self, schema: &Schema) -> String {
        tracing::debug!(types = schema.shape().len(), "generating interfaces");
        schema
            .types()
            .map(|(name, object)| {
                let decl = TsDeclaration::Interface {
                    name: name.to_string(),
                    members: shape_members(object.shape(), self.opts.comments),
                    comment: self.opts.comments.then(|| object.label().to_string()),
                };
                declaration_to_text(&decl, "", &self.opts.indent)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_shape(&self, shape: &Shape) -> String {
        let members = shape_members(shape, self.opts.comments);
        members_to_text(&members, "", &self.opts.indent)
    }
}
