use serde::Serialize;

use crate::error::{GitxError, Result};

/// JSON 错误输出结构（统一）
#[derive(Debug, Serialize)]
pub struct ErrorJson {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ErrorJson {
    /// 从 GitxError 创建 ErrorJson
    pub fn from_error(err: &GitxError) -> Self {
        Self {
            code: error_to_code(err),
            message: err.to_string(),
            suggestion: err.suggestion().map(String::from),
        }
    }
}

/// 通用的 JSON 输出结构
#[derive(Debug, Serialize)]
pub struct JsonOutput<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorJson>,
}

/// Print a successful result as pretty JSON.
pub fn output_json<T: Serialize>(data: T) -> Result<()> {
    let output = JsonOutput {
        success: true,
        data: Some(data),
        error: None,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// 输出 JSON 格式的错误（通用函数）
///
/// # 示例
/// ```no_run
/// use gitx::commands::json;
/// use gitx::error::GitxError;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// json::output_json_error::<String>(&GitxError::NoPrefixFound)?;
/// # Ok(())
/// # }
/// ```
pub fn output_json_error<T: Serialize>(err: &GitxError) -> Result<()> {
    let output = JsonOutput::<T> {
        success: false,
        data: None,
        error: Some(ErrorJson::from_error(err)),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// 将错误类型映射为 code 字符串
pub fn error_to_code(err: &GitxError) -> String {
    match err {
        GitxError::NoPrefixFound => "NO_PREFIX_FOUND",
        GitxError::EmptyMessage => "EMPTY_MESSAGE",
        GitxError::GitNotFound => "GIT_NOT_FOUND",
        GitxError::GitCommand(_) => "GIT_ERROR",
        GitxError::Config(_) | GitxError::ConfigParse(_) => "CONFIG_ERROR",
        GitxError::InvalidInput(_) => "INVALID_INPUT",
        GitxError::TomlSerialize(_) => "CONFIG_ERROR",
        GitxError::Serde(_) => "SERIALIZATION_ERROR",
        GitxError::Io(_) => "IO_ERROR",
    }
    .to_string()
}
