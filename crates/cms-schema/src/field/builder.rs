//! Entry point of a field chain.

use crate::error::Result;

use super::{
    ArrayField, BooleanField, DateField, Field, NumberField, ObjectField, RelationField,
    RichTextField, Shape, StringField,
};

/// Starts a field chain. The kind methods hand back the typed field seeded
/// with this name and label.
#[derive(Debug, Clone)]
pub struct FieldBuilder {
    name: String,
    label: String,
}

/// Begins declaring a content field.
pub fn field(name: impl Into<String>, label: impl Into<String>) -> FieldBuilder {
    FieldBuilder {
        name: name.into(),
        label: label.into(),
    }
}

impl FieldBuilder {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn string(self) -> StringField {
        StringField::new(self.name, self.label)
    }

    pub fn number(self) -> NumberField {
        NumberField::new(self.name, self.label)
    }

    pub fn boolean(self) -> BooleanField {
        BooleanField::new(self.name, self.label)
    }

    pub fn date(self, coerce: bool) -> DateField {
        DateField::new(self.name, self.label, coerce)
    }

    pub fn object(self, shape: Shape) -> ObjectField {
        ObjectField::new(self.name, self.label, shape)
    }

    pub fn array(self) -> ArrayField {
        ArrayField::new(self.name, self.label)
    }

    pub fn rich_text(self) -> RichTextField {
        RichTextField::new(self.name, self.label)
    }

    /// A single reference to other top-level types.
    pub fn relates_to<I, S>(self, names: I) -> Result<RelationField>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RelationField::new(self.name, self.label).set_relations(names)
    }
}
