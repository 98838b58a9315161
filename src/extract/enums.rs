// src/extract/enums.rs
// =============================================================================
// Resolves the options of an enum setting.
//
// Two sources, in order:
// 1. PREDEFINED_ENUMS, a fixed table for enum types whose declaration is not
//    in the module file (shared enums such as ShapeMode, or nested types
//    referenced as `Outer.Inner`). Entries here always win.
// 2. An `enum Name { ... }` declaration anywhere in the module text.
//
// Constant lists can carry constructor arguments:
//
//   enum Mode { Fast(1, "fast"), Slow(2, "slow"); private final int id; ... }
//
// so the list is cut at the first ';' and split on commas that are not
// inside parentheses.
// =============================================================================

use regex::Regex;

/// Enum types that cannot be resolved from the module text.
pub const PREDEFINED_ENUMS: &[(&str, &[&str])] = &[
    ("Safety", &["Safe", "Suicide"]),
    (
        "SortPriority",
        &[
            "LowestDistance",
            "HighestDistance",
            "LowestHealth",
            "HighestHealth",
            "ClosestAngle",
        ],
    ),
    ("ShapeMode", &["Lines", "Sides", "Both"]),
    ("Hand", &["MainHand", "OffHand"]),
    ("Target", &["Head", "Body", "Feet"]),
    // Nested in Nuker and not picked up from the file body
    ("Nuker.Mode", &["All", "Flatten", "Smash"]),
    ("Nuker.SortMode", &["None", "Closest", "Furthest", "TopDown"]),
];

/// Looks up an enum type in the predefined table.
pub fn predefined_options(enum_type: &str) -> Option<Vec<String>> {
    PREDEFINED_ENUMS
        .iter()
        .find(|(name, _)| *name == enum_type)
        .map(|(_, options)| options.iter().map(|o| o.to_string()).collect())
}

/// Resolves the options for `enum_type`, or None if neither the table nor
/// the module text knows the type.
pub fn resolve_options(enum_type: &str, source: &str) -> Option<Vec<String>> {
    predefined_options(enum_type).or_else(|| options_from_source(enum_type, source))
}

/// Finds `enum <enum_type> { ... }` in the source and returns its constant
/// names in declaration order.
pub fn options_from_source(enum_type: &str, source: &str) -> Option<Vec<String>> {
    let pattern = format!(r"enum\s+{}\s*\{{([\s\S]*?)\}}", regex::escape(enum_type));
    let re = Regex::new(&pattern).ok()?;
    let body = re.captures(source)?.get(1)?.as_str();

    // Constants come before the first ';', fields and methods after it
    let constants_part = body.split(';').next().unwrap_or("");

    let options = split_enum_constants(constants_part)
        .iter()
        .map(|constant| constant_name(constant))
        .collect();

    Some(options)
}

/// Splits an enum constant list on top-level commas.
///
/// Commas inside parentheses belong to constructor arguments and do not
/// start a new constant. Each piece is trimmed; an empty trailing piece
/// (from a trailing comma) is dropped.
pub fn split_enum_constants(list: &str) -> Vec<String> {
    let mut constants = Vec::new();
    let mut current = String::new();
    let mut depth: i32 = 0;

    for c in list.chars() {
        match c {
            '(' => {
                depth += 1;
                current.push(c);
            }
            ')' => {
                depth -= 1;
                current.push(c);
            }
            ',' if depth == 0 => {
                constants.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }

    let last = current.trim();
    if !last.is_empty() {
        constants.push(last.to_string());
    }

    constants
}

/// `Fast(1, "fast")` -> `Fast`
fn constant_name(constant: &str) -> String {
    constant.split('(').next().unwrap_or("").trim().to_string()
}
