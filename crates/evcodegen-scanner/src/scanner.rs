//! Header scanner
//!
//! Reads header files line by line, strictly in the order given, and feeds
//! every recognized family macro into the [`FamilyRegistry`]. The first
//! definition of a member name wins across all files; later redefinitions
//! are dropped even when their value differs.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use evcodegen_core::{to_member_identifier, Error, FamilyRegistry, Member, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::matcher::{LineMatch, MacroMatcher, Rejection};

/// Counters collected over a scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    /// Files opened and read
    pub files_scanned: usize,
    /// Files that could not be opened
    pub files_skipped: usize,
    /// Lines read across all files
    pub lines_read: usize,
    /// Members added from literal values
    pub value_members: usize,
    /// Members added from same-family aliases
    pub alias_members: usize,
    /// Macros dropped because the member already existed
    pub duplicates: usize,
    /// Macros dropped by the denylist
    pub denylisted: usize,
    /// Aliases dropped because their target is in another family
    pub cross_family_aliases: usize,
}

impl ScanStats {
    /// Members added in total
    pub fn members(&self) -> usize {
        self.value_members + self.alias_members
    }
}

/// Stateful scanner over any number of headers
pub struct HeaderScanner {
    matcher: MacroMatcher,
    /// (type name, member identifier) pairs already emitted
    seen: HashSet<(&'static str, String)>,
    stats: ScanStats,
}

impl HeaderScanner {
    /// Create a scanner using the given matcher
    pub fn new(matcher: MacroMatcher) -> Self {
        Self {
            matcher,
            seen: HashSet::new(),
            stats: ScanStats::default(),
        }
    }

    /// Scan headers in order, skipping any that cannot be opened
    pub fn scan_files<P: AsRef<Path>>(
        &mut self,
        paths: &[P],
        registry: &mut FamilyRegistry,
    ) -> Result<()> {
        for path in paths {
            let path = path.as_ref();
            let file = match File::open(path) {
                Ok(file) => file,
                Err(e) => {
                    debug!("Skipping {}: {}", path.display(), e);
                    self.stats.files_skipped += 1;
                    continue;
                }
            };

            let before = self.stats.members();
            match self.scan_reader(BufReader::new(file), registry) {
                Ok(lines) => {
                    info!(
                        "Scanned {} ({} lines, {} new members)",
                        path.display(),
                        lines,
                        self.stats.members() - before
                    );
                }
                // Keep whatever was read before the failure.
                Err(Error::Io(e)) => {
                    warn!("Stopped reading {} early: {}", path.display(), e);
                }
                Err(e) => return Err(e),
            }
            self.stats.files_scanned += 1;
        }

        Ok(())
    }

    /// Scan every line of a reader, returning the number of lines read
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    pub fn scan_reader<R: BufRead>(
        &mut self,
        mut reader: R,
        registry: &mut FamilyRegistry,
    ) -> Result<usize> {
        let mut buf = Vec::new();
        let mut lines = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            lines += 1;
            self.stats.lines_read += 1;
            let line = String::from_utf8_lossy(&buf);
            self.scan_line(&line, registry)?;
        }

        Ok(lines)
    }

    /// Scan header text held in memory
    pub fn scan_source(&mut self, source: &str, registry: &mut FamilyRegistry) -> Result<usize> {
        self.scan_reader(source.as_bytes(), registry)
    }

    /// Classify one line and record the member it defines, if any
    pub fn scan_line(&mut self, line: &str, registry: &mut FamilyRegistry) -> Result<()> {
        match self.matcher.classify(line) {
            LineMatch::NoMatch => {}
            LineMatch::Rejected(Rejection::Denylisted) => {
                debug!("Denylisted macro: {}", line.trim_end());
                self.stats.denylisted += 1;
            }
            LineMatch::Rejected(Rejection::CrossFamilyAlias) => {
                debug!("Cross-family alias: {}", line.trim_end());
                self.stats.cross_family_aliases += 1;
            }
            LineMatch::Value(m) => {
                let family = registry.get_mut(m.prefix)?;
                let ident = to_member_identifier(m.suffix);
                if !self.seen.insert((family.type_name, ident.clone())) {
                    debug!("Duplicate {}::{} ignored", family.type_name, ident);
                    self.stats.duplicates += 1;
                    return Ok(());
                }
                family.push(Member::literal(ident, m.value));
                self.stats.value_members += 1;
            }
            LineMatch::Alias(m) => {
                let family = registry.get_mut(m.prefix)?;
                let ident = to_member_identifier(m.suffix);
                if !self.seen.insert((family.type_name, ident.clone())) {
                    debug!("Duplicate {}::{} ignored", family.type_name, ident);
                    self.stats.duplicates += 1;
                    return Ok(());
                }
                family.push(Member::alias(ident, to_member_identifier(m.target_suffix)));
                self.stats.alias_members += 1;
            }
        }

        Ok(())
    }

    /// Counters so far
    pub fn stats(&self) -> &ScanStats {
        &self.stats
    }

    /// Consume the scanner, returning its counters
    pub fn into_stats(self) -> ScanStats {
        self.stats
    }
}
