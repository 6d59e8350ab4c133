use std::path::PathBuf;

use clap::{Parser, ValueEnum};

pub fn parse() -> Cli {
    Cli::parse()
}

#[derive(Parser)]
#[command(
    author,
    version,
    about,
    max_term_width = 100,
    help_template = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}"
)]
pub struct Cli {
    /// What kind of output is being rendered
    #[arg(value_enum)]
    pub mode: Mode,
    /// File to read. Reads from stdin when omitted
    pub file: Option<PathBuf>,
    /// Output a complete HTML document, not just a `<pre>`
    #[arg(short, long)]
    pub doc: bool,
    /// Set the color theme of the document [default: dark]
    #[arg(short, long)]
    pub theme: Option<Theme>,
    /// Name of the user's source file in compiler diagnostics [default: main.pony]
    #[arg(long)]
    pub source_name: Option<String>,
    /// Directory holding the versioned standard library installs [default: /usr/local/lib/pony]
    #[arg(long)]
    pub stdlib_dir: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Program or compiler output containing ANSI colors
    Ansi,
    /// Pygments HTML of an assembly listing
    Asm,
    /// Pygments HTML of LLVM IR
    LlvmIr,
    /// Compiler diagnostics, with links to locations in the source file
    Compiler,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Theme {
    Light,
    Dark,
}
