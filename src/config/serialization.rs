//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

/// Quote and escape a value as a TOML string
fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

impl Config {
    /// Serialize the seed roster as `[[persons]]` entries
    pub(super) fn persons_to_toml(&self) -> String {
        let mut output = String::new();
        for seed in &self.persons {
            output.push_str("[[persons]]\n");
            output.push_str(&format!("name = {}\n", toml_string(&seed.name)));
            output.push_str(&format!("age = {}\n\n", seed.age));
        }
        output
    }

    /// Render the full config file
    pub fn to_toml(&self) -> String {
        format!(
            r#"# person-cards configuration

# Show the card list on startup
show_persons = {show}

# Theme: classic, mono
theme = {theme}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = {log_level}
# File logging (in addition to the logs panel)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir}
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = {log_file_prefix}

# People shown on startup. Ids are generated on every start.
{persons}"#,
            show = self.show_persons,
            theme = toml_string(&self.theme),
            log_level = toml_string(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = toml_string(&self.logging.file_dir.display().to_string()),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = toml_string(&self.logging.file_prefix),
            persons = self.persons_to_toml(),
        )
    }
}
