//! 集成测试
//!
//! 配置 → formatter → 命令输出 的完整流程

use std::io::Write;

use gitx::commands::format_message::{FormatResult, shell_command_line};
use gitx::commands::json::{ErrorJson, error_to_code};
use gitx::config::{AppConfig, load_config_from};
use gitx::error::GitxError;
use gitx::message::{MessageMode, PrefixToken};
use pretty_assertions::assert_eq;
use serial_test::serial;

/// 测试默认配置值正确
#[test]
fn test_config_default_values() {
    let config = AppConfig::default();

    assert_eq!(config.format.default_mode, MessageMode::Default);
    assert_eq!(config.format.prefixes, PrefixToken::ALL.to_vec());
    assert!(config.ui.colored);
    assert!(config.validate().is_ok());
}

/// 配置文件限制前缀词表后，formatter 跟随生效
#[test]
#[serial]
fn test_configured_vocabulary_drives_formatting() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[format]
default_mode = "default"
prefixes = ["fix", "chore"]
"#
    )
    .unwrap();

    let config = load_config_from(Some(file.path())).unwrap();
    let formatted = config
        .formatter()
        .format("feat: new api\nchore: bump\nchore: lockfile", config.format.default_mode)
        .unwrap();

    assert_eq!(formatted.dominant(), Some(PrefixToken::Chore));
    assert_eq!(
        shell_command_line(&formatted),
        "git commit -m 'chore: feat: new api' -m bump -m lockfile"
    );
}

#[test]
fn test_format_result_json_shape() {
    let formatted = AppConfig::default()
        .formatter()
        .format("Title\nbody text", MessageMode::Github)
        .unwrap();
    let value = serde_json::to_value(FormatResult::new(MessageMode::Github, &formatted)).unwrap();

    assert_eq!(value["mode"], "github");
    assert!(value["dominant_prefix"].is_null());
    assert_eq!(
        value["args"],
        serde_json::json!(["commit", "-m", "Title", "-m", "body text"])
    );
}

#[test]
fn test_error_json_for_missing_prefix() {
    let err = AppConfig::default()
        .formatter()
        .format("nothing conventional here", MessageMode::Default)
        .unwrap_err();

    assert_eq!(error_to_code(&err), "NO_PREFIX_FOUND");
    let json = ErrorJson::from_error(&err);
    assert!(json.suggestion.is_some());
    assert!(matches!(err, GitxError::NoPrefixFound));
}
