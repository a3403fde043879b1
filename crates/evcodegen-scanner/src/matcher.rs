//! Macro matcher
//!
//! Classifies one header line as a family value macro
//! (`#define KEY_ESC 1`), a same-family alias macro
//! (`#define KEY_HANGUEL KEY_HANGEUL`), or nothing of interest.
//!
//! The value pattern is tried first. Its right-hand side must be a numeric
//! literal, which can never look like `PREFIX_NAME`, so a line matches at
//! most one of the two shapes.

use evcodegen_core::{DeniedMacro, Error, FamilyRegistry, GeneratorConfig, Result};
use regex::{Captures, Regex};

/// `#define PREFIX_NAME 0x1f`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueMacro<'l> {
    pub prefix: &'l str,
    pub suffix: &'l str,
    /// Literal as written, not parsed
    pub value: &'l str,
}

/// `#define PREFIX_NAME PREFIX_OTHER`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasMacro<'l> {
    pub prefix: &'l str,
    pub suffix: &'l str,
    /// Suffix of the aliased macro, same prefix
    pub target_suffix: &'l str,
}

/// Why a line shaped like a family macro was not accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The (prefix, suffix) pair is on the denylist
    Denylisted,
    /// Alias whose target belongs to another family
    CrossFamilyAlias,
}

/// Classification of one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMatch<'l> {
    NoMatch,
    Value(ValueMacro<'l>),
    Alias(AliasMacro<'l>),
    Rejected(Rejection),
}

/// Compiled family macro patterns
pub struct MacroMatcher {
    value_pattern: Regex,
    alias_pattern: Regex,
    denylist: Vec<DeniedMacro>,
}

impl MacroMatcher {
    /// Compile patterns for every prefix in the registry
    pub fn new(registry: &FamilyRegistry, denylist: &[DeniedMacro]) -> Result<Self> {
        let prefixes = registry
            .prefixes()
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join("|");

        let value_pattern = compile(&format!(
            r"#define\s+({prefixes})_(\w+)\s+([xa-fA-F0-9]+)(?:\s|$)"
        ))?;
        let alias_pattern = compile(&format!(
            r"#define\s+({prefixes})_(\w+)\s+({prefixes})_(\w+)(?:\s|$)"
        ))?;

        Ok(Self {
            value_pattern,
            alias_pattern,
            denylist: denylist.to_vec(),
        })
    }

    /// Compile patterns using the denylist from a generator config
    pub fn from_config(registry: &FamilyRegistry, config: &GeneratorConfig) -> Result<Self> {
        Self::new(registry, &config.denylist)
    }

    /// Classify a single line
    pub fn classify<'l>(&self, line: &'l str) -> LineMatch<'l> {
        if let Some(caps) = self.value_pattern.captures(line) {
            let (prefix, suffix) = (group(&caps, 1), group(&caps, 2));
            if self.is_denied(prefix, suffix) {
                return LineMatch::Rejected(Rejection::Denylisted);
            }
            return LineMatch::Value(ValueMacro {
                prefix,
                suffix,
                value: group(&caps, 3),
            });
        }

        if let Some(caps) = self.alias_pattern.captures(line) {
            let (prefix, suffix) = (group(&caps, 1), group(&caps, 2));
            if self.is_denied(prefix, suffix) {
                return LineMatch::Rejected(Rejection::Denylisted);
            }
            if group(&caps, 3) != prefix {
                return LineMatch::Rejected(Rejection::CrossFamilyAlias);
            }
            return LineMatch::Alias(AliasMacro {
                prefix,
                suffix,
                target_suffix: group(&caps, 4),
            });
        }

        LineMatch::NoMatch
    }

    fn is_denied(&self, prefix: &str, suffix: &str) -> bool {
        self.denylist
            .iter()
            .any(|d| d.prefix == prefix && d.suffix == suffix)
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::Pattern(e.to_string()))
}

// Every group in both patterns is mandatory, so a successful match always
// fills it.
fn group<'l>(caps: &Captures<'l>, index: usize) -> &'l str {
    caps.get(index).map_or("", |m| m.as_str())
}
