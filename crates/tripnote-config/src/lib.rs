use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tripnote_engine::rules::{IconRule, RuleSet, SectionHeaderRule};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// On-disk configuration: where memos live, plus user rules appended
/// below the built-in tables.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub memos_path: PathBuf,
    #[serde(default)]
    pub icon_rules: Vec<IconRule>,
    #[serde(default)]
    pub header_rules: Vec<SectionHeaderRule>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded memos path
        config.memos_path = Self::expand_path(&config.memos_path).unwrap_or(config.memos_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/tripnote");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Built-in rule tables with this config's rules appended after
    /// them, so built-ins keep lookup priority.
    pub fn rule_set(&self) -> RuleSet {
        RuleSet::builtin()
            .with_icon_rules(self.icon_rules.clone())
            .with_header_rules(self.header_rules.clone())
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;
    use tripnote_engine::rules::{ColorKey, IconId};

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        // Should contain the expected config file name
        assert!(path_str.ends_with(".config/tripnote/config.toml"));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            memos_path: PathBuf::from("/tmp/test-memos"),
            icon_rules: vec![IconRule::new(&["환전"], IconId::Coins, ColorKey::Warning)],
            header_rules: vec![SectionHeaderRule::new(
                "🎁",
                &["선물"],
                IconId::Gift,
                ColorKey::Success,
            )],
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original.memos_path, deserialized.memos_path);
        assert_eq!(original.icon_rules, deserialized.icon_rules);
        assert_eq!(original.header_rules, deserialized.header_rules);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path);

        assert!(expanded.is_some());
        let expanded = expanded.unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("TEST_VAR", "/test/env/path");
        }

        let path = PathBuf::from("$TEST_VAR/subdir");
        let expanded = Config::expand_path(&path);

        assert!(expanded.is_some());
        let expanded = expanded.unwrap();
        assert_eq!(expanded, PathBuf::from("/test/env/path/subdir"));

        unsafe {
            env::remove_var("TEST_VAR");
        }
    }

    #[test]
    fn test_expand_path_with_absolute_path() {
        let path = PathBuf::from("/absolute/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, path);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        let test_config = Config {
            memos_path: PathBuf::from("/tmp/test-memos"),
            icon_rules: Vec::new(),
            header_rules: Vec::new(),
        };

        // Test saving
        test_config.save_to_path(&config_file).unwrap();

        // Test loading
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config.memos_path, test_config.memos_path);
    }

    #[test]
    fn test_config_with_tilde_in_toml() {
        let config_content = r#"
memos_path = "~/test/memos"
"#;

        let mut config: Config = toml::from_str(config_content).unwrap();
        config.memos_path = Config::expand_path(&config.memos_path).unwrap_or(config.memos_path);

        let expanded_path = config.memos_path.to_string_lossy();
        assert!(!expanded_path.starts_with('~'));
        assert!(expanded_path.contains("test/memos"));
    }

    #[test]
    fn test_rule_tables_default_to_empty() {
        let config_content = r#"
memos_path = "/tmp/memos"
"#;

        let config: Config = toml::from_str(config_content).unwrap();

        assert!(config.icon_rules.is_empty());
        assert!(config.header_rules.is_empty());
    }

    #[test]
    fn test_user_rules_parse_from_toml() {
        let config_content = r#"
memos_path = "/tmp/memos"

[[icon_rules]]
keywords = ["환전", "환율"]
icon = "coins"
color = "warning"

[[header_rules]]
emoji = "🎁"
keywords = ["선물", "기프트"]
icon = "gift"
color = "success"
"#;

        let config: Config = toml::from_str(config_content).unwrap();

        assert_eq!(config.icon_rules.len(), 1);
        assert_eq!(config.icon_rules[0].icon, IconId::Coins);
        assert_eq!(config.icon_rules[0].color, ColorKey::Warning);
        assert_eq!(config.header_rules.len(), 1);
        assert_eq!(config.header_rules[0].emoji, "🎁");
        assert_eq!(config.header_rules[0].icon, IconId::Gift);
    }

    #[test]
    fn test_rule_set_appends_user_rules_after_builtins() {
        let config = Config {
            memos_path: PathBuf::from("/tmp/memos"),
            icon_rules: vec![IconRule::new(
                &["주소", "환전"],
                IconId::Coins,
                ColorKey::Warning,
            )],
            header_rules: Vec::new(),
        };

        let rules = config.rule_set();

        // Builtin still claims 주소; the appended rule catches 환전.
        assert_eq!(rules.match_icon_rule("주소").unwrap().icon, IconId::MapPin);
        assert_eq!(rules.match_icon_rule("환전").unwrap().icon, IconId::Coins);
    }

    #[test]
    fn test_unknown_icon_in_toml_is_a_parse_error() {
        let config_content = r#"
memos_path = "/tmp/memos"

[[icon_rules]]
keywords = ["환전"]
icon = "sparkles"
color = "warning"
"#;

        let result: Result<Config, _> = toml::from_str(config_content);

        assert!(result.is_err());
    }
}
