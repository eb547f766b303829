//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically. All formatters
//! are pure; emission happens at the call site through the `Console`
//! capability.

use colored::Colorize;

use crate::cli::deps::{ClassifyFn, DiagnosticsFn};
use crate::types::StarterResult;

/// Crate version, emitted verbatim by the `version` command.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Welcome block shown before a verbose run. Pure and deterministic.
pub fn format_welcome() -> String {
    [
        format!("\n{}", "🚀 rsstart".cyan().bold()),
        "Rust Library Development Tool".dimmed().to_string(),
        format!("版本: {VERSION}\n").yellow().to_string(),
    ]
    .join("\n")
}

/// Display strings for a run outcome. `details` is present iff the result
/// carried a message.
#[derive(Debug, Clone)]
pub struct RunResultOutput {
    pub headline: String,
    pub details: Option<String>,
}

pub fn format_run_result(result: &StarterResult) -> RunResultOutput {
    if result.success {
        RunResultOutput {
            headline: "✅ 操作成功完成".green().to_string(),
            details: result.message.as_ref().map(|m| m.dimmed().to_string()),
        }
    } else {
        RunResultOutput {
            headline: "❌ 操作失败".red().to_string(),
            details: result.message.as_ref().map(|m| m.yellow().to_string()),
        }
    }
}

/// Three-part fatal-error block: headline, ranked suggestions, and (in
/// diagnostics mode only) a raw error dump.
#[derive(Debug, Clone)]
pub struct FailureOutput {
    pub message: String,
    pub suggestions: Option<String>,
    pub debug_info: Option<String>,
}

pub fn format_failure(
    error: &anyhow::Error,
    classify: ClassifyFn,
    diagnostics: DiagnosticsFn,
) -> FailureOutput {
    let classified = classify(error);

    let message = format!(
        "{}\n{}",
        "\n💥 操作失败".red(),
        format!("📋 {}", classified.message).yellow()
    );

    let suggestions = if classified.suggestions.is_empty() {
        None
    } else {
        let mut lines = vec!["\n💡 建议解决方案:".blue().to_string()];
        lines.extend(
            classified
                .suggestions
                .iter()
                .map(|s| format!("  • {s}").dimmed().to_string()),
        );
        Some(lines.join("\n"))
    };

    let debug_info = diagnostics().then(|| {
        [
            "\n🔍 调试信息:".dimmed().to_string(),
            format!("{error:?}").dimmed().to_string(),
        ]
        .join("\n")
    });

    FailureOutput {
        message,
        suggestions,
        debug_info,
    }
}

/// General help block shown for bare invocations, the `help` argument, and
/// `-h/--help`. Pure and deterministic.
pub fn format_general_help() -> String {
    [
        format!(
            "{}",
            "\n🚀 rsstart - Rust Library Development Tool".cyan().bold()
        ),
        format!("版本: {VERSION}\n").dimmed().to_string(),
        "用法:".bold().to_string(),
        "  rsstart [input] [options]".to_string(),
        "  rsstart help\n".to_string(),
        "参数:".bold().to_string(),
        "  input              输入文件或路径（可选）\n".to_string(),
        "选项:".bold().to_string(),
        "  -o, --output <path>    输出目录 (默认: \".\")".to_string(),
        "  --verbose              显示详细输出".to_string(),
        "  --dry-run              预览模式".to_string(),
        "  -v, --version          显示版本号".to_string(),
        "  -h, --help             显示帮助信息\n".to_string(),
        "示例:".bold().to_string(),
        "  rsstart                          # 使用默认选项".dimmed().to_string(),
        "  rsstart ./src --output ./dist    # 指定输入和输出".dimmed().to_string(),
        "  rsstart --verbose                # 显示详细信息".dimmed().to_string(),
        "  rsstart --dry-run                # 预览模式\n".dimmed().to_string(),
        "获取更多帮助:".bold().to_string(),
        "  • 查看项目文档: README.md".dimmed().to_string(),
        "  • 提交问题: GitHub Issues".dimmed().to_string(),
        "  • 参与讨论: GitHub Discussions".dimmed().to_string(),
    ]
    .join("\n")
}

/// Print the general help block to stdout.
pub fn print_general_help() {
    println!("{}", format_general_help());
}
