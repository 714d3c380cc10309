pub mod ast;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use ast::{MemberHandle, ParseId, SwiftAst, SyntaxMemberDeclaration};

/// Structural kind of a type member.
///
/// The declaration order doubles as the default ordering policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    TypeAlias,
    AssociatedType,
    Initializer,
    TypeProperty,
    InstanceProperty,
    NestedType,
    TypeMethod,
    InstanceMethod,
    Subscript,
    Deinitializer,
}

impl MemberKind {
    pub const ALL: [MemberKind; 10] = [
        MemberKind::TypeAlias,
        MemberKind::AssociatedType,
        MemberKind::Initializer,
        MemberKind::TypeProperty,
        MemberKind::InstanceProperty,
        MemberKind::NestedType,
        MemberKind::TypeMethod,
        MemberKind::InstanceMethod,
        MemberKind::Subscript,
        MemberKind::Deinitializer,
    ];

    /// Parse a configuration identifier, accepting the common aliases.
    pub fn from_identifier(ident: &str) -> Option<Self> {
        static IDENTIFIER_MAP: &[(&[&str], MemberKind)] = &[
            (&["type_alias", "typealias"], MemberKind::TypeAlias),
            (&["associated_type", "associatedtype"], MemberKind::AssociatedType),
            (&["initializer", "init"], MemberKind::Initializer),
            (&["type_property", "static_property"], MemberKind::TypeProperty),
            (&["instance_property"], MemberKind::InstanceProperty),
            (&["nested_type", "subtype"], MemberKind::NestedType),
            (&["type_method", "static_method"], MemberKind::TypeMethod),
            (&["instance_method"], MemberKind::InstanceMethod),
            (&["subscript"], MemberKind::Subscript),
            (&["deinitializer", "deinit"], MemberKind::Deinitializer),
        ];

        let normalized = ident.trim().to_ascii_lowercase().replace('-', "_");
        IDENTIFIER_MAP
            .iter()
            .find(|(idents, _)| idents.contains(&normalized.as_str()))
            .map(|(_, kind)| *kind)
    }

    /// Canonical configuration identifier.
    pub fn identifier(&self) -> &'static str {
        match self {
            MemberKind::TypeAlias => "type_alias",
            MemberKind::AssociatedType => "associated_type",
            MemberKind::Initializer => "initializer",
            MemberKind::TypeProperty => "type_property",
            MemberKind::InstanceProperty => "instance_property",
            MemberKind::NestedType => "nested_type",
            MemberKind::TypeMethod => "type_method",
            MemberKind::InstanceMethod => "instance_method",
            MemberKind::Subscript => "subscript",
            MemberKind::Deinitializer => "deinitializer",
        }
    }

    pub fn is_property(&self) -> bool {
        matches!(self, MemberKind::TypeProperty | MemberKind::InstanceProperty)
    }

    pub fn is_method(&self) -> bool {
        matches!(self, MemberKind::TypeMethod | MemberKind::InstanceMethod)
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MemberKind::TypeAlias => "type alias",
            MemberKind::AssociatedType => "associated type",
            MemberKind::Initializer => "initializer",
            MemberKind::TypeProperty => "type property",
            MemberKind::InstanceProperty => "instance property",
            MemberKind::NestedType => "nested type",
            MemberKind::TypeMethod => "type method",
            MemberKind::InstanceMethod => "instance method",
            MemberKind::Subscript => "subscript",
            MemberKind::Deinitializer => "deinitializer",
        };
        write!(f, "{}", label)
    }
}

/// Access level of a member.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Open,
    Public,
    #[default]
    Internal,
    FilePrivate,
    Private,
}

impl Visibility {
    /// Parse a Swift access keyword. A setter restriction such as
    /// `private(set)` resolves to its base keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let base = keyword
            .trim()
            .split(|c: char| !c.is_ascii_alphabetic())
            .next()
            .unwrap_or_default();
        match base {
            "open" => Some(Visibility::Open),
            "public" => Some(Visibility::Public),
            "internal" => Some(Visibility::Internal),
            "fileprivate" => Some(Visibility::FilePrivate),
            "private" => Some(Visibility::Private),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Visibility::Open => "open",
            Visibility::Public => "public",
            Visibility::Internal => "internal",
            Visibility::FilePrivate => "fileprivate",
            Visibility::Private => "private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// One classified member of a type body.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberDeclaration {
    pub name: String,
    pub kind: MemberKind,
    pub line: usize,
    pub visibility: Visibility,
    pub is_annotated: bool,
}

impl MemberDeclaration {
    pub fn new(name: impl Into<String>, kind: MemberKind, line: usize) -> Self {
        Self {
            name: name.into(),
            kind,
            line,
            visibility: Visibility::Internal,
            is_annotated: false,
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn annotated(mut self, is_annotated: bool) -> Self {
        self.is_annotated = is_annotated;
        self
    }
}

/// Anything the reorder engine can sort.
pub trait Classified {
    fn declaration(&self) -> &MemberDeclaration;
}

impl Classified for MemberDeclaration {
    fn declaration(&self) -> &MemberDeclaration {
        self
    }
}

impl<T: Classified> Classified for &T {
    fn declaration(&self) -> &MemberDeclaration {
        (*self).declaration()
    }
}

/// Declaration forms whose bodies get reordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Class,
    Struct,
    Enum,
    Actor,
    Protocol,
}

impl TypeKind {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "class" => Some(TypeKind::Class),
            "struct" => Some(TypeKind::Struct),
            "enum" => Some(TypeKind::Enum),
            "actor" => Some(TypeKind::Actor),
            "protocol" => Some(TypeKind::Protocol),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Struct => "struct",
            TypeKind::Enum => "enum",
            TypeKind::Actor => "actor",
            TypeKind::Protocol => "protocol",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// A type declaration found in a source file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    pub name: String,
    pub kind: TypeKind,
    pub line: usize,
    /// Number of enclosing type declarations.
    pub depth: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_kind_identifiers_round_trip() {
        for kind in MemberKind::ALL {
            assert_eq!(MemberKind::from_identifier(kind.identifier()), Some(kind));
        }
    }

    #[test]
    fn test_member_kind_aliases() {
        assert_eq!(
            MemberKind::from_identifier("typealias"),
            Some(MemberKind::TypeAlias)
        );
        assert_eq!(
            MemberKind::from_identifier("static-method"),
            Some(MemberKind::TypeMethod)
        );
        assert_eq!(
            MemberKind::from_identifier("Subtype"),
            Some(MemberKind::NestedType)
        );
        assert_eq!(MemberKind::from_identifier("enum_case"), None);
    }

    #[test]
    fn test_visibility_from_keyword() {
        assert_eq!(Visibility::from_keyword("open"), Some(Visibility::Open));
        assert_eq!(
            Visibility::from_keyword("fileprivate"),
            Some(Visibility::FilePrivate)
        );
        assert_eq!(
            Visibility::from_keyword("private(set)"),
            Some(Visibility::Private)
        );
        assert_eq!(Visibility::from_keyword("package"), None);
        assert_eq!(Visibility::default(), Visibility::Internal);
    }

    #[test]
    fn test_member_declaration_defaults() {
        let member = MemberDeclaration::new("value", MemberKind::InstanceProperty, 3);
        assert_eq!(member.visibility, Visibility::Internal);
        assert!(!member.is_annotated);
    }
}
