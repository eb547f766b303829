//! CLI argument definitions using clap

use clap::Parser;

use crate::cli::error::CliError;
use crate::cli::output::print_general_help;
use crate::types::StarterOptions;

/// The routed command. Options travel only with `Run` - the other commands
/// carry none by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    Run(StarterOptions),
    Version,
    Help,
}

/// Library/CLI starter scaffold
#[derive(Parser, Debug)]
#[command(name = "rsstart")]
#[command(author, about, disable_version_flag = true)]
pub struct Cli {
    /// 输入文件或路径（可选）
    pub input: Option<String>,

    /// 输出目录
    #[arg(short, long, default_value = ".")]
    pub output: String,

    /// 显示详细输出
    #[arg(long)]
    pub verbose: bool,

    /// 预览模式，显示将要执行的操作但不实际执行
    #[arg(long)]
    pub dry_run: bool,

    /// 显示版本号
    #[arg(short = 'v', long = "version")]
    pub version: bool,
}

/// Parse argv into a [`ParsedCommand`].
///
/// Help text is emitted here, during parsing - a bare invocation, a literal
/// `help` argument, and `-h/--help` all print it and route to `Help`.
/// Malformed input yields [`CliError::InvalidArgs`].
pub fn parse_args(argv: &[String]) -> Result<ParsedCommand, CliError> {
    if argv.len() <= 1 || argv.get(1).map(String::as_str) == Some("help") {
        print_general_help();
        return Ok(ParsedCommand::Help);
    }

    let cli = match Cli::try_parse_from(argv) {
        Ok(cli) => cli,
        Err(e) if e.kind() == clap::error::ErrorKind::DisplayHelp => {
            let _ = e.print();
            return Ok(ParsedCommand::Help);
        }
        Err(e) => return Err(CliError::InvalidArgs(e.to_string())),
    };

    if cli.version {
        return Ok(ParsedCommand::Version);
    }

    Ok(ParsedCommand::Run(StarterOptions {
        input: cli.input,
        output: cli.output,
        verbose: cli.verbose,
        dry_run: cli.dry_run,
    }))
}
