// src/extract/settings.rs
// =============================================================================
// Turns the text of one module into Setting records.
//
// A setting in the source looks like:
//
//   private final Setting<Boolean> rotate = sgGeneral.add(new BoolSetting.Builder()
//       .name("rotate")
//       .description("Faces the target.")
//       .defaultValue(true)
//       .build()
//   );
//
// Steps:
// 1. Resolve group identifiers to display names (groups.rs)
// 2. Discover (type, variable, group) triples with a non-greedy pattern
// 3. Re-locate each setting's builder block by variable and group
// 4. Pull name / description / default out of the block
// 5. Classify the builder, then resolve enum options or numeric bounds
//
// Every sub-extraction is optional. A miss becomes a placeholder value,
// never an error.
// =============================================================================

use super::bounds::extract_bounds;
use super::enums::resolve_options;
use super::groups::GroupNames;
use crate::model::{BuilderType, Setting};
use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Display name used when a block has no `.name("...")`.
pub const UNNAMED_SETTING: &str = "Unnamed Setting";

struct FieldPatterns {
    declaration: Regex,
    name: Regex,
    description: Regex,
    default_value: Regex,
}

fn patterns() -> &'static FieldPatterns {
    static PATTERNS: OnceLock<FieldPatterns> = OnceLock::new();
    // Constant patterns, known to compile
    PATTERNS.get_or_init(|| FieldPatterns {
        declaration: Regex::new(
            r"(?:public|private|protected)\s+final\s+Setting<([^>]+)>\s+(\w+)\s*=\s*(\w+)\s*\.\s*add\(\s*(?:new\s+[\w<>.]+\.Builder[\s\S]+?\.build\(\))\s*\);",
        )
        .unwrap(),
        name: Regex::new(r#"\.name\(\s*"([^"]+)"\s*\)"#).unwrap(),
        description: Regex::new(r#"\.description\(\s*"([^"]+)"\s*\)"#).unwrap(),
        default_value: Regex::new(r"\.defaultValue\(\s*([^)]+?)\s*\)").unwrap(),
    })
}

/// A setting declaration found by the discovery pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub setting_type: String,
    pub variable: String,
    pub group: String,
}

/// Extracts every setting declared in a module, in source order.
///
/// A module without settings yields an empty Vec.
pub fn parse_settings(source: &str) -> Vec<Setting> {
    let groups = GroupNames::resolve(source);

    discover_declarations(source)
        .into_iter()
        .map(|declaration| build_setting(source, &groups, declaration))
        .collect()
}

/// Finds the (type, variable, group) triple of each setting declaration.
pub fn discover_declarations(source: &str) -> Vec<Declaration> {
    patterns()
        .declaration
        .captures_iter(source)
        .map(|caps| Declaration {
            setting_type: caps[1].to_string(),
            variable: caps[2].to_string(),
            group: caps[3].to_string(),
        })
        .collect()
}

/// Locates the builder expression passed to `group.add(...)` for a variable.
///
/// The block runs from after `add(` up to the first `);`.
pub fn isolate_block<'a>(source: &'a str, variable: &str, group: &str) -> Option<&'a str> {
    let pattern = format!(
        r"\b{}\s*=\s*{}\s*\.\s*add\(\s*([\s\S]+?)\);",
        regex::escape(variable),
        regex::escape(group)
    );
    let re = Regex::new(&pattern).ok()?;
    re.captures(source)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// First builder marker contained in the block wins.
pub fn classify_builder(block: &str) -> BuilderType {
    BuilderType::MARKERS
        .iter()
        .find(|(_, marker)| block.contains(marker))
        .map(|(builder, _)| *builder)
        .unwrap_or(BuilderType::Unknown)
}

fn build_setting(source: &str, groups: &GroupNames, declaration: Declaration) -> Setting {
    let Declaration {
        setting_type,
        variable,
        group,
    } = declaration;

    let block = isolate_block(source, &variable, &group).unwrap_or("");
    let p = patterns();

    let display_name =
        capture(&p.name, block).unwrap_or_else(|| UNNAMED_SETTING.to_string());
    let description = capture(&p.description, block).unwrap_or_default();
    let default_value = capture(&p.default_value, block)
        .map(|value| value.trim().trim_matches('"').to_string())
        .unwrap_or_default();

    let builder_type = classify_builder(block);

    let options = if builder_type == BuilderType::Enum {
        match resolve_options(&setting_type, source) {
            Some(options) => options,
            None => {
                warn!(
                    enum_type = %setting_type,
                    setting = %variable,
                    "Enum type not found in module or predefined table"
                );
                Vec::new()
            }
        }
    } else {
        Vec::new()
    };

    let bounds = extract_bounds(block, builder_type);

    debug!(
        setting = %variable,
        builder = %builder_type,
        group = %group,
        "Extracted setting"
    );

    Setting {
        variable_name: variable,
        display_name,
        description,
        default_value,
        setting_type,
        builder_type,
        options,
        group_name: groups.display_name(&group),
        min: bounds.min,
        max: bounds.max,
        step: bounds.step,
    }
}

fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text).map(|caps| caps[1].to_string())
}
