//! Member naming
//!
//! Turns an upper-snake macro suffix into the `k`-prefixed camel-case
//! identifier used for generated members. Value macros, alias names and alias
//! targets all go through the same function, so an alias always refers to
//! exactly the identifier its target was declared with.

/// Convert a macro suffix into a member identifier
///
/// `LEFT_CTRL` becomes `kLeftCtrl`, `F1` becomes `kF1`. Empty segments from
/// doubled or trailing underscores are dropped.
pub fn to_member_identifier(suffix: &str) -> String {
    let mut ident = String::with_capacity(suffix.len() + 1);
    ident.push('k');

    for segment in suffix.split('_') {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            ident.extend(first.to_uppercase());
            ident.extend(chars.flat_map(char::to_lowercase));
        }
    }

    ident
}
