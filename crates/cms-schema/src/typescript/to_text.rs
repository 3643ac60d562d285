//! Renders the TypeScript AST as source text.
//!
//! Every function takes the current `indent` plus the `tab` unit added per
//! nesting level.

use super::types::{TsDeclaration, TsMember, TsType};

pub(crate) const TAB: &str = "  ";

fn format_comment(comment: &str, indent: &str) -> String {
    let mut out = format!("{}/**\n", indent);
    for line in comment.lines() {
        out.push_str(&format!("{} * {}\n", indent, line));
    }
    out.push_str(&format!("{} */\n", indent));
    out
}

fn is_simple_type(t: &TsType) -> bool {
    matches!(
        t,
        TsType::Any
            | TsType::Boolean
            | TsType::Number
            | TsType::String
            | TsType::TypeReference { .. }
    )
}

fn needs_quotes(name: &str) -> bool {
    name.is_empty()
        || name
            .chars()
            .any(|c| !c.is_alphanumeric() && c != '_' && c != '$')
        || name
            .chars()
            .next()
            .map(|c| c.is_ascii_digit())
            .unwrap_or(false)
}

fn normalize_key(name: &str) -> String {
    if needs_quotes(name) {
        format!("\"{}\"", name.replace('"', "\\\""))
    } else {
        name.to_string()
    }
}

/// Type names cannot be quoted: characters outside identifiers become `_`
/// and a leading digit gets a `_` prefix.
fn type_name(name: &str) -> String {
    let mut out: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c == '$' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if out.is_empty() || out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

pub fn ts_type_to_text(t: &TsType, indent: &str, tab: &str) -> String {
    match t {
        TsType::Any => "any".into(),
        TsType::Boolean => "boolean".into(),
        TsType::Number => "number".into(),
        TsType::String => "string".into(),
        TsType::TypeReference { name } => type_name(name),
        TsType::Array(elem) => {
            let inner = ts_type_to_text(elem, indent, tab);
            if is_simple_type(elem) {
                format!("{}[]", inner)
            } else {
                format!("Array<{}>", inner)
            }
        }
        TsType::TypeLiteral { members } => {
            if members.is_empty() {
                return "{}".into();
            }
            let inner_indent = format!("{}{}", indent, tab);
            let mut out = String::from("{\n");
            out.push_str(&members_to_text(members, &inner_indent, tab));
            out.push_str(&format!("{}}}", indent));
            out
        }
    }
}

fn member_to_text(member: &TsMember, indent: &str, tab: &str) -> String {
    match member {
        TsMember::Property {
            name,
            type_,
            optional,
            comment,
        } => {
            let mut out = String::new();
            if let Some(c) = comment {
                out.push_str(&format_comment(c, indent));
            }
            let opt = if *optional { "?" } else { "" };
            out.push_str(&format!(
                "{}{}{}: {};\n",
                indent,
                normalize_key(name),
                opt,
                ts_type_to_text(type_, indent, tab)
            ));
            out
        }
    }
}

/// One `key: type;` line per member, each at `indent`.
pub fn members_to_text(members: &[TsMember], indent: &str, tab: &str) -> String {
    members
        .iter()
        .map(|m| member_to_text(m, indent, tab))
        .collect()
}

pub fn declaration_to_text(decl: &TsDeclaration, indent: &str, tab: &str) -> String {
    match decl {
        TsDeclaration::Interface {
            name,
            members,
            comment,
        } => {
            let inner_indent = format!("{}{}", indent, tab);
            let mut out = String::new();
            if let Some(c) = comment {
                out.push_str(&format_comment(c, indent));
            }
            out.push_str(&format!(
                "{}export interface {} {{\n",
                indent,
                type_name(name)
            ));
            out.push_str(&members_to_text(members, &inner_indent, tab));
            out.push_str(&format!("{}}}\n", indent));
            out
        }
    }
}
