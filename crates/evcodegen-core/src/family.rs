//! Event-code family table
//!
//! The closed set of macro prefixes found in `linux/input-event-codes.h`
//! and friends, each mapped to the wrapper type generated for it. The order
//! of [`FAMILIES`] is the order families appear in the generated files.

use crate::error::{Error, Result};
use crate::types::FamilyDescriptor;

/// A macro prefix and the wrapper type its constants are collected into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamilySpec {
    /// Macro prefix without the joining underscore (`KEY`, `UI_FF`)
    pub prefix: &'static str,
    /// Generated type name
    pub type_name: &'static str,
}

impl FamilySpec {
    const fn new(prefix: &'static str, type_name: &'static str) -> Self {
        Self { prefix, type_name }
    }
}

/// Every recognized family, in output order
pub const FAMILIES: &[FamilySpec] = &[
    FamilySpec::new("KEY", "Key"),
    FamilySpec::new("ABS", "AbsoluteAxis"),
    FamilySpec::new("REL", "RelativeAxis"),
    FamilySpec::new("SW", "Switch"),
    FamilySpec::new("MSC", "Misc"),
    FamilySpec::new("LED", "LED"),
    FamilySpec::new("BTN", "Button"),
    FamilySpec::new("REP", "Autorepeat"),
    FamilySpec::new("SND", "Sound"),
    FamilySpec::new("ID", "ID"),
    FamilySpec::new("EV", "EventType"),
    FamilySpec::new("BUS", "BusType"),
    FamilySpec::new("SYN", "Synch"),
    FamilySpec::new("FF", "ForceFeedback"),
    FamilySpec::new("UI_FF", "UIForceFeedback"),
    FamilySpec::new("INPUT_PROP", "Property"),
];

/// Family descriptors for one generator run, keyed by prefix
///
/// Created with an empty descriptor for every entry of [`FAMILIES`]; the
/// scanner fills them in and the emitter reads them back in table order.
#[derive(Debug, Clone)]
pub struct FamilyRegistry {
    families: Vec<(&'static str, FamilyDescriptor)>,
}

impl FamilyRegistry {
    /// Create a registry with no members
    pub fn new() -> Self {
        Self {
            families: FAMILIES
                .iter()
                .map(|spec| (spec.prefix, FamilyDescriptor::new(spec.type_name)))
                .collect(),
        }
    }

    /// Get the descriptor for a prefix
    pub fn get(&self, prefix: &str) -> Result<&FamilyDescriptor> {
        self.families
            .iter()
            .find(|(p, _)| *p == prefix)
            .map(|(_, family)| family)
            .ok_or_else(|| Error::UnknownFamily(prefix.to_string()))
    }

    /// Get the mutable descriptor for a prefix
    pub fn get_mut(&mut self, prefix: &str) -> Result<&mut FamilyDescriptor> {
        self.families
            .iter_mut()
            .find(|(p, _)| *p == prefix)
            .map(|(_, family)| family)
            .ok_or_else(|| Error::UnknownFamily(prefix.to_string()))
    }

    /// Iterate (prefix, descriptor) pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FamilyDescriptor)> {
        self.families.iter().map(|(prefix, family)| (*prefix, family))
    }

    /// Recognized prefixes in table order
    pub fn prefixes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.families.iter().map(|(prefix, _)| *prefix)
    }

    /// Total number of members across all families
    pub fn member_count(&self) -> usize {
        self.families.iter().map(|(_, f)| f.members.len()).sum()
    }
}

impl Default for FamilyRegistry {
    fn default() -> Self {
        Self::new()
    }
}
