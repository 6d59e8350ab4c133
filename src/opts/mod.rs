//! Handles all of the configuration for `playground-render`
//!
//! `playground-render` can be configured either through CLI flags or through a config file.
//! Options passed on the command line take priority over those set in the config file when
//! merging
//!
//! The flow is represented by `cli::Cli` and `config::Config` being consolidated into the final
//! `Opts` that is used through the rest of the application

use std::path::PathBuf;

use playground_html::CompilerOutput;

mod cli;
mod config;

pub use cli::Mode;

#[derive(Debug)]
pub struct Opts {
    pub mode: Mode,
    pub file: Option<PathBuf>,
    pub doc: bool,
    pub theme: Theme,
    pub compiler: CompilerOutput,
}

impl Opts {
    pub fn load() -> Result<Self, crate::StdError> {
        let config::Config {
            output:
                config::Output {
                    full_document: config_doc,
                    theme: config_theme,
                },
            compiler:
                config::Compiler {
                    source_name: config_source_name,
                    stdlib_dir: config_stdlib_dir,
                },
        } = config::load()?;

        let cli::Cli {
            mode,
            file,
            doc: cli_doc,
            theme,
            source_name: cli_source_name,
            stdlib_dir: cli_stdlib_dir,
        } = cli::parse();

        let mut compiler = CompilerOutput::new();
        if let Some(source_name) = cli_source_name.or(config_source_name) {
            compiler = compiler.source_name(source_name);
        }
        if let Some(stdlib_dir) = cli_stdlib_dir.or(config_stdlib_dir) {
            compiler = compiler.stdlib_dir(stdlib_dir);
        }

        Ok(Self {
            mode,
            file,
            doc: cli_doc || config_doc,
            theme: theme.map(Into::into).unwrap_or(config_theme.into()),
            compiler,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl From<cli::Theme> for Theme {
    fn from(value: cli::Theme) -> Self {
        match value {
            cli::Theme::Light => Theme::Light,
            cli::Theme::Dark => Theme::Dark,
        }
    }
}

impl From<config::Theme> for Theme {
    fn from(value: config::Theme) -> Self {
        match value {
            config::Theme::Light => Theme::Light,
            config::Theme::Dark => Theme::Dark,
        }
    }
}
