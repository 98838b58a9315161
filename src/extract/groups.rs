// src/extract/groups.rs
// =============================================================================
// Resolves setting groups declared in a module.
//
// A module declares its groups as fields:
//
//   private final SettingGroup sgGeneral = settings.getDefaultGroup();
//   private final SettingGroup sgRender = settings.createGroup("Render");
//
// Settings then refer to the field (`sgRender.add(...)`), so we build a
// map from the field identifier to the name a user would see.
// =============================================================================

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Name used for the default group and for groups without a usable name.
pub const DEFAULT_GROUP: &str = "Default";

fn group_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Constant pattern, known to compile
    RE.get_or_init(|| {
        Regex::new(
            r#"(?:private|protected)\s+final\s+SettingGroup\s+(\w+)\s*=\s*settings\.(?:getDefaultGroup\(\)|createGroup\(\s*"([^"]+)"\s*\));"#,
        )
        .unwrap()
    })
}

/// Maps group field identifiers to their display names.
#[derive(Debug, Default, Clone)]
pub struct GroupNames {
    names: HashMap<String, String>,
}

impl GroupNames {
    /// Scans the whole module text for group declarations.
    ///
    /// `getDefaultGroup()` maps to "Default", `createGroup("X")` maps to X.
    /// A later declaration of the same identifier wins.
    pub fn resolve(source: &str) -> Self {
        let mut names = HashMap::new();

        for caps in group_regex().captures_iter(source) {
            let identifier = caps[1].to_string();
            let display = caps
                .get(2)
                .map(|m| m.as_str().to_string())
                .unwrap_or_else(|| DEFAULT_GROUP.to_string());
            names.insert(identifier, display);
        }

        GroupNames { names }
    }

    /// Display name for a group identifier.
    ///
    /// Identifiers that were never declared in the module (inherited
    /// fields, for example) are reported as-is.
    pub fn display_name(&self, identifier: &str) -> String {
        let name = self
            .names
            .get(identifier)
            .map(String::as_str)
            .unwrap_or(identifier);

        if name.is_empty() {
            DEFAULT_GROUP.to_string()
        } else {
            name.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_and_named_groups() {
        let source = r#"
    private final SettingGroup sgGeneral = settings.getDefaultGroup();
    private final SettingGroup sgRender = settings.createGroup("Render");
    protected final SettingGroup sgTargeting = settings.createGroup( "Targeting" );
"#;
        let groups = GroupNames::resolve(source);
        assert_eq!(groups.display_name("sgGeneral"), "Default");
        assert_eq!(groups.display_name("sgRender"), "Render");
        assert_eq!(groups.display_name("sgTargeting"), "Targeting");
    }

    #[test]
    fn test_undeclared_group_falls_back_to_identifier() {
        let groups = GroupNames::resolve("class Empty {}");
        assert_eq!(groups.display_name("sgInherited"), "sgInherited");
    }

    #[test]
    fn test_empty_identifier_is_default() {
        let groups = GroupNames::resolve("");
        assert_eq!(groups.display_name(""), "Default");
    }

    #[test]
    fn test_public_group_is_not_matched() {
        let source = r#"public final SettingGroup sgOpen = settings.createGroup("Open");"#;
        let groups = GroupNames::resolve(source);
        assert_eq!(groups.display_name("sgOpen"), "sgOpen");
    }
}
