//! Default configuration values

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "ccgen.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "ccgen.yaml";

/// Changelog read when none is configured
pub const DEFAULT_CHANGELOG_FILE: &str = "CHANGELOG.asciidoc";

/// Document holding the EOL table
pub const DEFAULT_EOL_DOC: &str = "docs/upgrading.asciidoc";

/// 18 months
pub const DEFAULT_SUPPORT_DAYS: i64 = 540;

/// GitHub REST API
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Token fallback
pub const DEFAULT_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".ccgen.toml",
        ".ccgen.yaml",
    ]
}
