//! Ordered mapping of child fields under an object or schema.

use indexmap::IndexMap;

use super::FieldNode;

/// Child fields keyed by output key, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Shape {
    fields: IndexMap<String, FieldNode>,
}

impl Shape {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, field: impl Into<FieldNode>) -> Self {
        self.insert(key, field);
        self
    }

    /// Inserts a child; a repeated key replaces the earlier declaration in
    /// place and returns it.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        field: impl Into<FieldNode>,
    ) -> Option<FieldNode> {
        self.fields.insert(key.into(), field.into())
    }

    pub fn get(&self, key: &str) -> Option<&FieldNode> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.fields.keys()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, FieldNode> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<'a> IntoIterator for &'a Shape {
    type Item = (&'a String, &'a FieldNode);
    type IntoIter = indexmap::map::Iter<'a, String, FieldNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl IntoIterator for Shape {
    type Item = (String, FieldNode);
    type IntoIter = indexmap::map::IntoIter<String, FieldNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<K: Into<String>> FromIterator<(K, FieldNode)> for Shape {
    fn from_iter<T: IntoIterator<Item = (K, FieldNode)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Builds a [`Shape`] from `key => field` pairs.
///
/// ```
/// use cms_schema::prelude::*;
///
/// let post = field("post", "Post").object(shape! {
///     "title" => field("title", "Title").string(),
///     "views" => field("views", "Views").number(),
/// });
/// assert_eq!(post.shape().len(), 2);
/// ```
#[macro_export]
macro_rules! shape {
    ($($key:expr => $field:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut shape = $crate::field::Shape::new();
        $( shape.insert($key, $field); )*
        shape
    }};
}
