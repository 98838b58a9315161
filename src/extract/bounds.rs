// src/extract/bounds.rs
// =============================================================================
// Extracts min / max / step for Integer and Double settings.
//
// Values are kept as source text: bounds are often expressions such as
// `Integer.MAX_VALUE` or `Math.PI`, which we do not evaluate.
//
// Resolution order:
//   min, max: `.range(a, b)`, otherwise `.min(x)` and `.max(x)` (falling
//             back to `.sliderMax(x)`) independently
//   step:     `.step(x)` or `.slider(x)`, otherwise (Double only) derived
//             from `.decimalPlaces(p)`, otherwise 0.1 (Double only)
// =============================================================================

use crate::model::BuilderType;
use regex::Regex;
use std::sync::OnceLock;

/// Step used by Double settings that declare neither a step nor decimal places.
pub const DEFAULT_DOUBLE_STEP: &str = "0.1";

/// Larger `.decimalPlaces(p)` values are treated like unparseable ones.
pub const MAX_DECIMAL_PLACES: u32 = 32;

struct BoundPatterns {
    range: Regex,
    min: Regex,
    max: Regex,
    slider_max: Regex,
    step: Regex,
    decimal_places: Regex,
}

fn patterns() -> &'static BoundPatterns {
    static PATTERNS: OnceLock<BoundPatterns> = OnceLock::new();
    // Constant patterns, known to compile
    PATTERNS.get_or_init(|| BoundPatterns {
        range: Regex::new(r"\.range\(\s*([^\s,]+)\s*,\s*([^)]+)\s*\)").unwrap(),
        min: Regex::new(r"\.min\(\s*([^)]+?)\s*\)").unwrap(),
        max: Regex::new(r"\.max\(\s*([^)]+?)\s*\)").unwrap(),
        slider_max: Regex::new(r"\.sliderMax\(\s*([^)]+?)\s*\)").unwrap(),
        step: Regex::new(r"\.(?:step|slider)\(\s*([^)]+?)\s*\)").unwrap(),
        decimal_places: Regex::new(r"\.decimalPlaces\(\s*(\d+)\s*\)").unwrap(),
    })
}

/// Numeric constraints of a setting; each one independently optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumericBounds {
    pub min: Option<String>,
    pub max: Option<String>,
    pub step: Option<String>,
}

/// Extracts bounds from a setting block. Non-numeric builders get none.
pub fn extract_bounds(block: &str, builder: BuilderType) -> NumericBounds {
    if !builder.is_numeric() {
        return NumericBounds::default();
    }

    let p = patterns();
    let mut bounds = NumericBounds::default();

    if let Some(caps) = p.range.captures(block) {
        bounds.min = Some(caps[1].trim().to_string());
        bounds.max = Some(caps[2].trim().to_string());
    } else {
        bounds.min = first_capture(&p.min, block);
        bounds.max = first_capture(&p.max, block).or_else(|| first_capture(&p.slider_max, block));
    }

    bounds.step = match first_capture(&p.step, block) {
        Some(step) => Some(step),
        None if builder == BuilderType::Double => double_step(block),
        None => None,
    };

    bounds
}

/// Step for a Double setting without an explicit step.
fn double_step(block: &str) -> Option<String> {
    match first_capture(&patterns().decimal_places, block) {
        Some(places) => match places.parse::<u32>() {
            Ok(places) if places <= MAX_DECIMAL_PLACES => step_from_decimal_places(places),
            _ => Some(DEFAULT_DOUBLE_STEP.to_string()),
        },
        None => Some(DEFAULT_DOUBLE_STEP.to_string()),
    }
}

/// 1 -> "0.1", 2 -> "0.01", 3 -> "0.001"; 0 (and anything past
/// MAX_DECIMAL_PLACES) has no step.
pub fn step_from_decimal_places(places: u32) -> Option<String> {
    if places == 0 || places > MAX_DECIMAL_PLACES {
        return None;
    }
    Some(format!("0.{}1", "0".repeat(places as usize - 1)))
}

fn first_capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text).map(|caps| caps[1].trim().to_string())
}
