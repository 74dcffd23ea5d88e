//! Naming conventions shared by the parser and the generators.
//!
//! Every generated name is a pure function of a raw identifier, so the entity,
//! the interfaces and the tests of one table always agree on spelling.

/// Convert a raw table identifier to a class name (e.g., "user_account" -> "UserAccount").
///
/// Each `_`-separated token is capitalized and the remainder lower-cased.
/// Empty tokens (consecutive underscores) contribute nothing.
pub fn to_class_name(raw: &str) -> String {
    raw.split('_')
        .map(|token| {
            let mut chars = token.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
            }
        })
        .collect()
}

/// Lower-case the first character of a class name (e.g., "UserAccount" -> "userAccount").
pub fn to_instance_name(class_name: &str) -> String {
    let mut chars = class_name.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a raw column name to a field name.
///
/// The name is lower-cased and every `-` and `&` is removed outright.
/// Distinct raw names may collapse to the same field name.
pub fn to_field_name(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '-' | '&'))
        .collect()
}

/// Upper-case the first character of a field name (e.g., "unitPrice" -> "UnitPrice").
pub fn to_accessor_suffix(field_name: &str) -> String {
    let mut chars = field_name.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Getter method name for a field (e.g., "color" -> "getColor").
pub fn getter_name(field_name: &str) -> String {
    format!("get{}", to_accessor_suffix(field_name))
}

/// Setter method name for a field (e.g., "color" -> "setColor").
pub fn setter_name(field_name: &str) -> String {
    format!("set{}", to_accessor_suffix(field_name))
}

/// Column annotation label: the raw column name upper-cased.
///
/// Independent from [`to_field_name`]; the label keeps `-` and `&`.
pub fn to_column_label(raw: &str) -> String {
    raw.to_uppercase()
}
