//! Fragment renderer
//!
//! Turns a populated [`FamilyRegistry`] into the text of the declaration
//! (header) and definition (source) files. Rendering is a pure function of
//! the registry and [`RenderOptions`]; the same input always produces
//! byte-identical output.

use std::path::Path;

use evcodegen_core::{FamilyDescriptor, FamilyRegistry, MemberValue, RenderOptions};
use tracing::debug;

use crate::templates::{
    fill, DECLARATION_FILE, DEFINITION_FILE, FAMILY_DECLARATION, FAMILY_DEFINITION,
    GENERATED_MARKER, MAP_ENTRY, MEMBER_ALIAS_DEFINITION, MEMBER_DECLARATION,
    MEMBER_VALUE_DEFINITION, UNKNOWN_NAME,
};

/// The two generated files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifacts {
    /// Header with the wrapper type declarations
    pub declaration: String,
    /// Source with member definitions and reverse lookups
    pub definition: String,
}

/// Render both files for every family in registry order
///
/// `declaration_path` only contributes its file name, which names the
/// include guard and the definition file's `#include`.
pub fn render(
    registry: &FamilyRegistry,
    options: &RenderOptions,
    declaration_path: &Path,
) -> RenderedArtifacts {
    let file_name = declaration_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| declaration_path.to_string_lossy().into_owned());
    let guard = include_guard(&options.guard_prefix, &file_name);
    let include = if options.include_dir.is_empty() {
        file_name.clone()
    } else {
        format!("{}/{}", options.include_dir.trim_end_matches('/'), file_name)
    };

    let (declarations, definitions): (Vec<_>, Vec<_>) = registry
        .iter()
        .map(|(_, family)| {
            (
                render_family_declaration(family),
                render_family_definition(family),
            )
        })
        .unzip();
    debug!(
        "Rendered {} families with {} members",
        declarations.len(),
        registry.member_count()
    );

    let declaration = fill(
        DECLARATION_FILE,
        &[
            ("marker", GENERATED_MARKER),
            ("guard", guard.as_str()),
            ("namespace", options.namespace.as_str()),
            ("families", declarations.join("\n").as_str()),
        ],
    );
    let definition = fill(
        DEFINITION_FILE,
        &[
            ("marker", GENERATED_MARKER),
            ("include", include.as_str()),
            ("namespace", options.namespace.as_str()),
            ("families", definitions.join("\n").as_str()),
        ],
    );

    RenderedArtifacts {
        declaration,
        definition,
    }
}

/// Include guard for a header file name, e.g. `EVDEVPP_EVDEVPP_ECODES_H_`
pub fn include_guard(prefix: &str, file_name: &str) -> String {
    let name: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{prefix}{name}_")
}

/// One `static const T kX;` line per member
pub fn member_declarations(family: &FamilyDescriptor) -> Vec<String> {
    family
        .members
        .iter()
        .map(|member| {
            fill(
                MEMBER_DECLARATION,
                &[("type_name", family.type_name), ("ident", member.ident.as_str())],
            )
        })
        .collect()
}

/// One definition line per member, aligned with [`member_declarations`]
pub fn member_definitions(family: &FamilyDescriptor) -> Vec<String> {
    family
        .members
        .iter()
        .map(|member| match &member.value {
            MemberValue::Literal(value) => fill(
                MEMBER_VALUE_DEFINITION,
                &[
                    ("type_name", family.type_name),
                    ("ident", member.ident.as_str()),
                    ("value", value.as_str()),
                ],
            ),
            MemberValue::Alias(target) => fill(
                MEMBER_ALIAS_DEFINITION,
                &[
                    ("type_name", family.type_name),
                    ("ident", member.ident.as_str()),
                    ("target", target.as_str()),
                ],
            ),
        })
        .collect()
}

/// Reverse-lookup entries, literal members only
pub fn map_entries(family: &FamilyDescriptor) -> Vec<String> {
    family
        .map_entries()
        .map(|member| {
            fill(
                MAP_ENTRY,
                &[
                    ("ident", member.ident.as_str()),
                    ("display_name", family.display_name(&member.ident).as_str()),
                ],
            )
        })
        .collect()
}

/// Wrapper struct declaration for one family
pub fn render_family_declaration(family: &FamilyDescriptor) -> String {
    fill(
        FAMILY_DECLARATION,
        &[
            ("type_name", family.type_name),
            ("member_declarations", member_declarations(family).join("\n").as_str()),
            ("unknown", UNKNOWN_NAME),
        ],
    )
}

/// Member definitions and `CodeToString()` for one family
pub fn render_family_definition(family: &FamilyDescriptor) -> String {
    fill(
        FAMILY_DEFINITION,
        &[
            ("type_name", family.type_name),
            ("member_definitions", member_definitions(family).join("\n").as_str()),
            ("map_entries", map_entries(family).join("\n").as_str()),
        ],
    )
}
