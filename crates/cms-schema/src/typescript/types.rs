//! Minimal TypeScript AST for generated content types.

#[derive(Debug, Clone, PartialEq)]
pub enum TsType {
    Any,
    Boolean,
    Number,
    String,
    Array(Box<TsType>),
    TypeLiteral { members: Vec<TsMember> },
    /// A named type: `Date` or another top-level content type.
    TypeReference { name: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum TsMember {
    Property {
        name: String,
        type_: TsType,
        optional: bool,
        comment: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum TsDeclaration {
    Interface {
        name: String,
        members: Vec<TsMember>,
        comment: Option<String>,
    },
}
