//! Tree validator: runs each field's validator chain and descends into
//! object shapes and array elements, tracking the path of every failure.

use crate::error::{PathStep, ValidationError, ValidationErrors};
use crate::field::{Field, FieldBase, FieldNode, ObjectField, Shape};
use crate::value::Value;

use super::types::{ErrorMode, ValidateOptions};

/// What a node has below it.
enum Children<'a> {
    None,
    Shape(&'a Shape),
    Element(&'a FieldNode),
}

fn children_of(node: &FieldNode) -> Children<'_> {
    match node {
        FieldNode::Object(o) => Children::Shape(o.shape()),
        FieldNode::Schema(s) => Children::Shape(s.shape()),
        FieldNode::Array(a) => match a.element_field() {
            Some(element) => Children::Element(element),
            None => Children::None,
        },
        _ => Children::None,
    }
}

struct Walker<'a> {
    opts: &'a ValidateOptions,
    path: Vec<PathStep>,
    errors: Vec<ValidationError>,
}

impl Walker<'_> {
    fn done(&self) -> bool {
        self.opts.errors == ErrorMode::FailFast && !self.errors.is_empty()
    }

    fn visit(&mut self, value: &Value, base: &FieldBase, children: Children<'_>) {
        let own: Vec<ValidationError> = match self.opts.errors {
            ErrorMode::FailFast => base.validate(value).err().into_iter().collect(),
            ErrorMode::Collect => base.validate_all(value),
        };
        if !own.is_empty() {
            let path = self.path.clone();
            self.errors.extend(own.into_iter().map(|e| e.at(&path)));
            return;
        }
        match children {
            Children::None => {}
            Children::Shape(shape) => self.visit_shape(value, shape),
            Children::Element(element) => self.visit_elements(value, element),
        }
    }

    fn visit_node(&mut self, value: &Value, node: &FieldNode) {
        self.visit(value, node.base(), children_of(node));
    }

    fn visit_shape(&mut self, value: &Value, shape: &Shape) {
        let Some(obj) = value.as_object() else {
            return;
        };
        for (key, child) in shape {
            self.path.push(key.clone());
            match obj.get(key) {
                Some(member) => self.visit_node(member, child),
                None if child.is_required() => {
                    if let Some(err) = child.base().run_validator("required", &Value::Null) {
                        self.errors.push(err.at(&self.path));
                    }
                }
                None => {}
            }
            self.path.pop();
            if self.done() {
                return;
            }
        }
    }

    fn visit_elements(&mut self, value: &Value, element: &FieldNode) {
        let Some(items) = value.as_array() else {
            return;
        };
        for (i, item) in items.iter().enumerate() {
            self.path.push(i.to_string());
            self.visit_node(item, element);
            self.path.pop();
            if self.done() {
                return;
            }
        }
    }

    fn finish(self) -> Result<(), ValidationErrors> {
        match ValidationErrors::from_vec(self.errors) {
            Some(errors) => {
                tracing::debug!(count = errors.len(), "validation failed");
                Err(errors)
            }
            None => Ok(()),
        }
    }
}

/// Validates `value` against a field tree.
///
/// Missing object members are only reported when the child field is
/// required; nodes whose own checks fail are not descended into.
pub fn validate(
    value: &Value,
    node: &FieldNode,
    opts: &ValidateOptions,
) -> Result<(), ValidationErrors> {
    let mut walker = Walker {
        opts,
        path: Vec::new(),
        errors: Vec::new(),
    };
    walker.visit_node(value, node);
    walker.finish()
}

/// [`validate`] for a standalone object field.
pub fn validate_object(
    value: &Value,
    object: &ObjectField,
    opts: &ValidateOptions,
) -> Result<(), ValidationErrors> {
    let mut walker = Walker {
        opts,
        path: Vec::new(),
        errors: Vec::new(),
    };
    walker.visit(value, object.base(), Children::Shape(object.shape()));
    walker.finish()
}
