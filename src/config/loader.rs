// 配置加载逻辑
//
// 此文件负责从文件和环境变量加载配置。

use config::{Config, Environment, File, FileFormat};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

use super::structs::AppConfig;
use crate::error::{GitxError, Result};

/// 加载应用配置
///
/// 配置加载优先级（从高到低）：
/// 1. 环境变量（GITX__* 前缀，双下划线表示嵌套）
///    - 例如：`GITX__FORMAT__DEFAULT_MODE=github`
///    - 例如：`GITX__FORMAT__PREFIXES=feat,fix`
/// 2. 配置文件（~/.config/gitx/config.toml）
/// 3. 默认值（来自 structs.rs 的 Default trait 和 serde(default) 属性）
pub fn load_config() -> Result<AppConfig> {
    load_config_from(None)
}

/// Loads configuration, reading `path` instead of the default file when given.
///
/// An explicit path must exist; the default file is optional.
pub fn load_config_from(path: Option<&Path>) -> Result<AppConfig> {
    let mut builder = Config::builder();

    match path {
        Some(path) => {
            if !path.exists() {
                return Err(GitxError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }
        None => {
            if let Some(config_path) = get_config_path()
                && config_path.exists()
            {
                builder = builder.add_source(File::from(config_path).format(FileFormat::Toml));
            }
        }
    }

    // GITX__FORMAT__PREFIXES -> format.prefixes
    builder = builder.add_source(
        Environment::with_prefix("GITX")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("format.prefixes")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let app_config: AppConfig = config.try_deserialize()?;
    app_config.validate()?;

    tracing::debug!(
        "Configuration loaded: mode={}, {} prefixes",
        app_config.format.default_mode,
        app_config.format.prefixes.len()
    );

    Ok(app_config)
}

/// 获取配置文件路径
///
/// 返回 ~/.config/gitx/config.toml
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.toml"))
}

/// 获取配置目录路径
pub fn get_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "gitx").map(|dirs| dirs.config_dir().to_path_buf())
}
