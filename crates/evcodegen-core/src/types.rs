//! Core type definitions

use serde::Serialize;

/// Value a family member is defined with
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MemberValue {
    /// Numeric literal exactly as written in the header (`0x1e`, `12`)
    Literal(String),
    /// Identifier of another member of the same family
    Alias(String),
}

/// One member of a family, e.g. `kLeftCtrl` of `Key`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    /// Member identifier (`kLeftCtrl`)
    pub ident: String,
    /// How the member is defined
    pub value: MemberValue,
}

impl Member {
    /// Create a member backed by a numeric literal
    pub fn literal(ident: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            ident: ident.into(),
            value: MemberValue::Literal(value.into()),
        }
    }

    /// Create a member that refers to another member of its family
    pub fn alias(ident: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            ident: ident.into(),
            value: MemberValue::Alias(target.into()),
        }
    }

    /// Whether this member contributes an entry to the reverse lookup
    pub fn has_map_entry(&self) -> bool {
        matches!(self.value, MemberValue::Literal(_))
    }
}

/// All members discovered for one family, in first-discovery order
///
/// Declarations and definitions are rendered one per member, so they can
/// never fall out of step. Reverse-lookup entries are rendered only for
/// literal members; aliases resolve to their target's entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilyDescriptor {
    /// Generated wrapper type name (`Key`, `AbsoluteAxis`)
    pub type_name: &'static str,
    /// Members in discovery order
    pub members: Vec<Member>,
}

impl FamilyDescriptor {
    /// Create an empty descriptor
    pub fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            members: Vec::new(),
        }
    }

    /// Append a member
    pub fn push(&mut self, member: Member) {
        self.members.push(member);
    }

    /// Members that feed the reverse lookup, in insertion order
    pub fn map_entries(&self) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(|m| m.has_map_entry())
    }

    /// Look up a member by identifier
    pub fn member(&self, ident: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.ident == ident)
    }

    /// Display string used by the reverse lookup (`Key::kLeftCtrl`)
    pub fn display_name(&self, ident: &str) -> String {
        format!("{}::{}", self.type_name, ident)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_members_have_no_map_entry() {
        let mut family = FamilyDescriptor::new("Key");
        family.push(Member::literal("kA", "30"));
        family.push(Member::alias("kB", "kA"));
        family.push(Member::literal("kC", "0x2e"));

        let entries: Vec<_> = family.map_entries().map(|m| m.ident.as_str()).collect();
        assert_eq!(entries, vec!["kA", "kC"]);
        assert_eq!(family.members.len(), 3);
    }

    #[test]
    fn test_display_name() {
        let family = FamilyDescriptor::new("AbsoluteAxis");
        assert_eq!(family.display_name("kX"), "AbsoluteAxis::kX");
    }
}
