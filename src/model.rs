// src/model.rs
// =============================================================================
// The records that make up the output document.
//
// The document is a tree built in a single pass:
//   Category -> Module -> Setting
// Nothing is shared between branches and nothing is mutated once a
// record has been pushed into its parent.
//
// Field names are fixed by the consumers of the document (camelCase), so
// every struct carries #[serde(rename_all = "camelCase")].
// =============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// A remote directory of modules, e.g. "combat" or "render".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub modules: Vec<Module>,
}

/// One source file, named after the file without its extension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub name: String,
    pub settings: Vec<Setting>,
}

/// One configurable field extracted from a module.
///
/// `min`, `max` and `step` are kept as the literal source text (they may be
/// expressions such as `Integer.MAX_VALUE`) and serialize as `null` when
/// absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Setting {
    pub variable_name: String,
    pub display_name: String,
    pub description: String,
    pub default_value: String,
    #[serde(rename = "type")]
    pub setting_type: String,
    pub builder_type: BuilderType,
    pub options: Vec<String>,
    pub group_name: String,
    pub min: Option<String>,
    pub max: Option<String>,
    pub step: Option<String>,
}

/// The kind of builder a setting was constructed with.
///
/// The order of the variants is the order in which they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuilderType {
    Enum,
    Boolean,
    Integer,
    Double,
    Color,
    Keybind,
    Unknown,
}

impl BuilderType {
    /// Every recognised builder paired with the source text that identifies it.
    pub const MARKERS: [(BuilderType, &'static str); 6] = [
        (BuilderType::Enum, "new EnumSetting.Builder"),
        (BuilderType::Boolean, "new BoolSetting.Builder"),
        (BuilderType::Integer, "new IntSetting.Builder"),
        (BuilderType::Double, "new DoubleSetting.Builder"),
        (BuilderType::Color, "new ColorSetting.Builder"),
        (BuilderType::Keybind, "new KeybindSetting.Builder"),
    ];

    /// Numeric builders are the only ones that carry min/max/step.
    pub fn is_numeric(self) -> bool {
        matches!(self, BuilderType::Integer | BuilderType::Double)
    }
}

impl fmt::Display for BuilderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BuilderType::Enum => "Enum",
            BuilderType::Boolean => "Boolean",
            BuilderType::Integer => "Integer",
            BuilderType::Double => "Double",
            BuilderType::Color => "Color",
            BuilderType::Keybind => "Keybind",
            BuilderType::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}
