//! Projects field nodes onto the TypeScript AST.

use super::types::{TsMember, TsType};
use crate::field::{Field, FieldNode, Shape};

fn reference(name: &str) -> TsType {
    TsType::TypeReference {
        name: name.to_string(),
    }
}

/// Converts one field to its TypeScript type.
///
/// Arrays project to their first relation (`author[]`) or to `any[]`; the
/// element field does not take part.
pub fn to_typescript_ast(node: &FieldNode) -> TsType {
    match node {
        FieldNode::String(_) | FieldNode::RichText(_) => TsType::String,
        FieldNode::Number(_) => TsType::Number,
        FieldNode::Boolean(_) => TsType::Boolean,
        FieldNode::Date(_) => reference("Date"),
        FieldNode::Array(a) => {
            let element = match a.relations().first() {
                Some(related) => reference(related),
                None => TsType::Any,
            };
            TsType::Array(Box::new(element))
        }
        FieldNode::Relation(r) => match r.target() {
            Some(related) => reference(related),
            None => TsType::Any,
        },
        FieldNode::Object(o) => TsType::TypeLiteral {
            members: shape_members(o.shape(), false),
        },
        FieldNode::Schema(s) => TsType::TypeLiteral {
            members: shape_members(s.shape(), false),
        },
    }
}

/// One property per shape entry, in declaration order. With `comments`,
/// each property carries its field label.
pub fn shape_members(shape: &Shape, comments: bool) -> Vec<TsMember> {
    shape
        .iter()
        .map(|(key, node)| TsMember::Property {
            name: key.clone(),
            type_: with_comments(to_typescript_ast(node), node, comments),
            optional: false,
            comment: comments.then(|| node.label().to_string()),
        })
        .collect()
}

fn with_comments(type_: TsType, node: &FieldNode, comments: bool) -> TsType {
    match (type_, node.shape()) {
        (TsType::TypeLiteral { .. }, Some(shape)) if comments => TsType::TypeLiteral {
            members: shape_members(shape, true),
        },
        (type_, _) => type_,
    }
}
