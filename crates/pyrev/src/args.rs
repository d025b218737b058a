use crate::logging::LogLevel;
use crate::output_format::OutputFormat;
use clap::builder::styling::{AnsiColor, Effects};
use clap::builder::Styles;
use clap::{Parser, Subcommand};

// Configures Clap v3-style help menu colors
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser)]
#[command(
    author,
    name = "pyrev",
    about = "pyrev: a Python code reviewer",
    after_help = "For help with a specific command, see: `pyrev help <command>`."
)]
#[command(version)]
#[command(styles = STYLES)]
pub struct Args {
    #[command(subcommand)]
    pub(crate) command: Command,
    #[clap(flatten)]
    pub(crate) global_options: GlobalOptions,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Check a set of files or directories
    Check(CheckCommand),
}

#[derive(Clone, Debug, Parser)]
#[command(arg_required_else_help(true))]
pub struct CheckCommand {
    #[arg(
        required = true,
        help = "List of files or directories to check, for example `pyrev check .`."
    )]
    pub files: Vec<String>,
    #[arg(
        short,
        long,
        default_value = "",
        help = "Names of rules to run, separated by a comma (no spaces). Defaults to the full rule set."
    )]
    pub select: String,
    #[arg(
        short,
        long,
        default_value = "false",
        help = "Show the time taken by the analysis."
    )]
    pub with_timing: bool,
    #[arg(
        long,
        value_enum,
        default_value_t = OutputFormat::default(),
        help = "Output serialization format for findings."
    )]
    pub output_format: OutputFormat,
}

#[derive(Clone, Debug, Parser)]
pub(crate) struct GlobalOptions {
    #[arg(
        global = true,
        long,
        help_heading = "Global options",
        help = "The log level. One of: `error`, `warn`, `info`, `debug`, or `trace`. Defaults to `warn`"
    )]
    pub(crate) log_level: Option<LogLevel>,

    #[arg(
        global = true,
        long,
        help_heading = "Global options",
        help = "Disable colored output. Colors are also disabled when the `NO_COLOR` environment variable is set"
    )]
    pub(crate) no_color: bool,
}
