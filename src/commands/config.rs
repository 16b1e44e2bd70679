use std::path::Path;

use crate::cli::ConfigAction;
use crate::config::{self, AppConfig};
use crate::error::{GitxError, Result};
use crate::ui;

pub fn run(action: Option<ConfigAction>, config_file: Option<&Path>, colored: bool) -> Result<()> {
    // 默认行为：show
    match action.unwrap_or(ConfigAction::Show) {
        ConfigAction::Show => show(config_file),
        ConfigAction::Validate => validate(config_file, colored),
        ConfigAction::Path => path(config_file, colored),
    }
}

/// Print the effective configuration (defaults + file + environment).
fn show(config_file: Option<&Path>) -> Result<()> {
    let config = config::load_config_from(config_file)?;
    print!("{}", render_toml(&config)?);
    Ok(())
}

fn validate(config_file: Option<&Path>, colored: bool) -> Result<()> {
    let config = config::load_config_from(config_file)?;
    ui::success("Configuration is valid", colored);

    let prefixes: Vec<&str> = config.format.prefixes.iter().map(|p| p.as_str()).collect();
    println!(
        "{}",
        ui::info(
            &format!(
                "default mode: {}, prefixes: {}",
                config.format.default_mode,
                prefixes.join(", ")
            ),
            colored
        )
    );
    Ok(())
}

fn path(config_file: Option<&Path>, colored: bool) -> Result<()> {
    let path = match config_file {
        Some(path) => path.to_path_buf(),
        None => config::get_config_path().ok_or_else(|| {
            GitxError::Config("Failed to determine config directory".to_string())
        })?,
    };
    println!("{}", path.display());
    if !path.exists() {
        ui::warning("File does not exist yet", colored);
    }
    Ok(())
}

fn render_toml(config: &AppConfig) -> Result<String> {
    Ok(toml::to_string_pretty(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default_config() {
        let rendered = render_toml(&AppConfig::default()).unwrap();
        assert!(rendered.contains("[format]"));
        assert!(rendered.contains("default_mode = \"default\""));
        assert!(rendered.contains("\"refactor\""));
        assert!(rendered.contains("colored = true"));
    }

    #[test]
    fn test_rendered_config_parses_back() {
        let mut config = AppConfig::default();
        config.format.prefixes = vec![crate::message::PrefixToken::Fix];
        let rendered = render_toml(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }
}
