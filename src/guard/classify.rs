//! Map raw failures to user-facing categories with remediation suggestions.

use std::fmt;

/// Failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    File,
    Network,
    Permission,
    Validation,
    Unknown,
}

impl ErrorKind {
    /// Machine-readable category name (snake_case).
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Network => "network",
            Self::Permission => "permission",
            Self::Validation => "validation",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified failure: category, localized headline, and remediation
/// suggestions ordered by likelihood (first entry is the most likely fix).
///
/// Invariant: `suggestions` is never empty - `Unknown` carries generic ones.
#[derive(Debug, Clone)]
pub struct ClassifiedError {
    pub kind: ErrorKind,
    pub message: String,
    pub suggestions: Vec<&'static str>,
}

/// Classify a failure by its message text. Total: never fails, every input
/// lands in exactly one category.
///
/// Matching is a case-insensitive substring test against the lowered message,
/// checked as a strict if/else-if chain: a message matching several rules is
/// classified by the earliest one only.
///
/// Known limitation: this relies on message wording, not structured codes.
/// If an upstream message changes wording, classification silently degrades
/// to [`ErrorKind::Unknown`].
pub fn classify(error: &anyhow::Error) -> ClassifiedError {
    let raw = error.to_string();
    let message = raw.to_lowercase();

    if message.contains("enoent") || message.contains("not found") {
        ClassifiedError {
            kind: ErrorKind::File,
            message: "文件或目录不存在".to_string(),
            suggestions: vec!["检查文件路径是否正确", "确认文件是否存在", "使用绝对路径重试"],
        }
    } else if message.contains("eacces") || message.contains("permission") {
        ClassifiedError {
            kind: ErrorKind::Permission,
            message: "权限不足".to_string(),
            suggestions: vec!["检查文件权限设置", "使用管理员权限运行", "确认对目录有写入权限"],
        }
    } else if message.contains("network") || message.contains("fetch") || message.contains("timeout")
    {
        ClassifiedError {
            kind: ErrorKind::Network,
            message: "网络连接问题".to_string(),
            suggestions: vec!["检查网络连接", "稍后重试", "确认代理设置"],
        }
    } else if message.contains("invalid") || message.contains("parse") || message.contains("syntax")
    {
        ClassifiedError {
            kind: ErrorKind::Validation,
            message: "数据格式错误".to_string(),
            suggestions: vec!["检查输入数据格式", "验证文件内容", "参考文档示例"],
        }
    } else {
        ClassifiedError {
            kind: ErrorKind::Unknown,
            message: if raw.is_empty() {
                "未知错误".to_string()
            } else {
                raw
            },
            suggestions: vec!["查看详细日志信息", "使用 --verbose 获取更多信息", "检查项目文档"],
        }
    }
}
