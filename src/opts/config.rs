use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed detecting configuration directory")]
    ConfigDetection,
    #[error("I/O error while trying to read config file: {0}")]
    Io(#[from] io::Error),
    #[error("Config file {0} has invalid format: {1}")]
    Parsing(PathBuf, toml::de::Error),
}

pub fn load() -> Result<Config, Error> {
    let config_file = dirs_next::config_dir()
        .ok_or(Error::ConfigDetection)?
        .join("playground-render")
        .join("config.toml");

    load_from(&config_file)
}

pub fn load_from(path: &Path) -> Result<Config, Error> {
    match fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => Ok(config),
            Err(e) => Err(Error::Parsing(path.to_owned(), e)),
        },
        Err(e) => match e.kind() {
            io::ErrorKind::NotFound => Ok(Config::default()),
            _ => Err(e.into()),
        },
    }
}

#[derive(Deserialize, Default, Debug)]
pub struct Config {
    #[serde(default)]
    pub output: Output,
    #[serde(default)]
    pub compiler: Compiler,
}

#[derive(Deserialize, Default, Debug)]
pub struct Output {
    #[serde(default)]
    pub full_document: bool,
    #[serde(default)]
    pub theme: Theme,
}

#[derive(Deserialize, Default, Debug)]
pub struct Compiler {
    pub source_name: Option<String>,
    pub stdlib_dir: Option<String>,
}

#[derive(Deserialize, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}
