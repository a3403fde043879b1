//! C++ templates for the generated files
//!
//! Placeholders are written `{{name}}` and filled by [`fill`]. C++ braces
//! never appear doubled in these templates, so no escaping is needed.

/// Marker line at the top of both generated files
pub const GENERATED_MARKER: &str = "// Automatically generated by evcodegen. DO NOT EDIT.";

/// `static const Key kEsc;`
pub const MEMBER_DECLARATION: &str = "  static const {{type_name}} {{ident}};";

/// `const Key Key::kEsc = 1;`
pub const MEMBER_VALUE_DEFINITION: &str =
    "const {{type_name}} {{type_name}}::{{ident}} = {{value}};";

/// `const Key Key::kHanguel = Key::kHangeul;`
pub const MEMBER_ALIAS_DEFINITION: &str =
    "const {{type_name}} {{type_name}}::{{ident}} = {{type_name}}::{{target}};";

/// Reverse-lookup entry. `try_emplace` keeps the first name registered for a
/// value shared by several members.
pub const MAP_ENTRY: &str = r#"    result.try_emplace({{ident}}, "{{display_name}}");"#;

/// Wrapper type declaration for one family
pub const FAMILY_DECLARATION: &str = r#"
struct {{type_name}} {
  std::uint16_t code = 0;
  // NOLINTNEXTLINE(google-explicit-constructor)
  constexpr {{type_name}}(std::uint16_t init_code = 0) : code(init_code) {}
  // NOLINTNEXTLINE(google-explicit-constructor)
  constexpr operator std::uint16_t() const { return code; }
{{member_declarations}}
  static const absl::flat_hash_map<std::uint16_t, const char*>& CodeToString();
  [[nodiscard]] const char* ToString() const {
    const auto& m = CodeToString();
    auto it = m.find(code);
    if (it == m.end()) {
      return "{{unknown}}";
    }
    return it->second;
  }
  static constexpr const char* kClassName = "{{type_name}}";
};"#;

/// Member definitions and reverse lookup for one family
pub const FAMILY_DEFINITION: &str = r#"
{{member_definitions}}

const absl::flat_hash_map<std::uint16_t, const char*>& {{type_name}}::CodeToString() {
  static const auto* code_to_str = new absl::flat_hash_map<std::uint16_t, const char*>{[]() {
    absl::flat_hash_map<std::uint16_t, const char*> result;
{{map_entries}}
    return result;
  }()};
  return *code_to_str;
}"#;

/// Declaration file wrapper
pub const DECLARATION_FILE: &str = r#"{{marker}}
#ifndef {{guard}}
#define {{guard}}

#include <cstdint>
#include <string_view>

#include "absl/container/flat_hash_map.h"

namespace {{namespace}} {
{{families}}

}  // namespace {{namespace}}

#endif  // {{guard}}
"#;

/// Definition file wrapper
pub const DEFINITION_FILE: &str = r#"{{marker}}
#include "{{include}}"

#include <cstdint>

#include "absl/container/flat_hash_map.h"

namespace {{namespace}} {
{{families}}

}  // namespace {{namespace}}
"#;

/// Name reported by `ToString()` for values with no member
pub const UNKNOWN_NAME: &str = "UNKNOWN";

/// Substitute `{{name}}` placeholders in a single pass
///
/// Substituted text is never rescanned. Unknown placeholders are left as
/// they are.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };

        let key = &after[..end];
        match values.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_replaces_every_occurrence() {
        let filled = fill(
            MEMBER_ALIAS_DEFINITION,
            &[
                ("type_name", "Key"),
                ("ident", "kHanguel"),
                ("target", "kHangeul"),
            ],
        );
        assert_eq!(filled, "const Key Key::kHanguel = Key::kHangeul;");
    }

    #[test]
    fn test_fill_does_not_rescan_values() {
        let filled = fill("{{a}}-{{b}}", &[("a", "{{b}}"), ("b", "x")]);
        assert_eq!(filled, "{{b}}-x");
    }

    #[test]
    fn test_fill_leaves_unknown_and_unterminated() {
        assert_eq!(fill("{{nope}} {{a}}", &[("a", "1")]), "{{nope}} 1");
        assert_eq!(fill("x {{a", &[("a", "1")]), "x {{a");
    }

    #[test]
    fn test_map_entry() {
        let filled = fill(MAP_ENTRY, &[("ident", "kEsc"), ("display_name", "Key::kEsc")]);
        assert_eq!(filled, r#"    result.try_emplace(kEsc, "Key::kEsc");"#);
    }
}
