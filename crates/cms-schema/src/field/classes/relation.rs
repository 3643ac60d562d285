use crate::field::base::FieldBase;
use crate::field::FieldKind;

/// A single reference to another top-level type of the schema.
///
/// Relations only shape the generated types; the referenced value is not
/// checked beyond chained validators such as `required`.
#[derive(Debug, Clone)]
pub struct RelationField {
    pub(crate) base: FieldBase,
}

impl RelationField {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            base: FieldBase::new(name, label, FieldKind::Relation),
        }
    }

    /// The first related type, used when projecting types.
    pub fn target(&self) -> Option<&str> {
        self.base.relations().first().map(String::as_str)
    }
}
