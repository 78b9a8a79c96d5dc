// Copyright (c) 2026, Anthony DeDominic <adedomin@gmail.com>
//
// Permission to use, copy, modify, and/or distribute this software for any
// purpose with or without fee is hereby granted, provided that the above
// copyright notice and this permission notice appear in all copies.
//
// THE SOFTWARE IS PROVIDED "AS IS" AND THE AUTHOR DISCLAIMS ALL WARRANTIES
// WITH REGARD TO THIS SOFTWARE INCLUDING ALL IMPLIED WARRANTIES OF
// MERCHANTABILITY AND FITNESS. IN NO EVENT SHALL THE AUTHOR BE LIABLE FOR
// ANY SPECIAL, DIRECT, INDIRECT, OR CONSEQUENTIAL DAMAGES OR ANY DAMAGES
// WHATSOEVER RESULTING FROM LOSS OF USE, DATA OR PROFITS, WHETHER IN AN
// ACTION OF CONTRACT, NEGLIGENCE OR OTHER TORTIOUS ACTION, ARISING OUT OF
// OR IN CONNECTION WITH THE USE OR PERFORMANCE OF THIS SOFTWARE.
use std::{
    ffi::OsString,
    io::{self, ErrorKind},
    path::{Path, PathBuf},
};

use mime_detect::{ClassifyError, MimeType, mime_by_extension, read_mime};
use serde::Deserialize;

use crate::config::env_vars::config;

#[cfg(unix)]
mod env_vars {
    pub mod config {
        pub const BASE: &str = "CONFIGURATION_DIRECTORY";
        pub const USER: &str = "XDG_CONFIG_HOME";
        pub const FALLBACK: &str = "/etc";
    }
}

#[cfg(windows)]
mod env_vars {
    pub mod config {
        pub const BASE: &str = "MIME_DETECT_HOME";
        pub const USER: &str = "AppData";
        pub const FALLBACK: &str = r"C:\ProgramData";
    }
}

/// It's assumed the package name is the "Above Path" in the XDG and fallback case.
fn find_systemd_or_xdg_path(systemd: &str, xdg: &str, fallback: &str, dest: &str) -> PathBuf {
    let mut base = std::env::var_os(systemd)
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var_os(xdg).map(|p| {
                let mut p = PathBuf::from(p);
                p.push(env!("CARGO_PKG_NAME"));
                p
            })
        })
        .unwrap_or_else(|| {
            let mut p = PathBuf::from(fallback);
            p.push(env!("CARGO_PKG_NAME"));
            p
        });
    base.push(dest);
    base
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O Error: {0}")]
    IoErr(#[from] io::Error),
    #[error("Failed to deserialize config: {0}")]
    DeserConfig(#[from] serde_json::Error),
    #[error("Config file not found at {0:?} - see example config below:\n\n{EXAMPLE_CONFIG}")]
    NoConfig(PathBuf),
    #[error("Missing argument for {0}")]
    MissingArg(String),
    #[error("No files given")]
    NoFiles,
}

#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Read the file header.
    #[default]
    Content,
    /// Only look at the file name.
    Extension,
    /// Header first, file name if the header is inconclusive.
    Both,
}

#[derive(Deserialize, Debug, Default)]
pub struct Config {
    #[serde(default)]
    pub strategy: Strategy,
    pub fallback: Option<MimeType>,
    #[serde(default)]
    pub fail_fast: bool,
}

impl Config {
    pub fn classify<T: AsRef<Path>>(&self, path: T) -> Result<MimeType, ClassifyError> {
        let path = path.as_ref();
        let mime = match self.strategy {
            Strategy::Content => read_mime(path)?,
            Strategy::Extension => mime_by_extension(path),
            Strategy::Both => read_mime(path)?.or(mime_by_extension(path)),
        };
        Ok(self.fallback.map_or(mime, |fallback| mime.or(fallback)))
    }
}

/// `path` was named explicitly; a missing file is an error rather than defaults.
pub fn open_and_parse<T>(config_path: T, explicit: bool) -> Result<Config, ConfigError>
where
    T: std::fmt::Debug + AsRef<Path>,
{
    match std::fs::File::open(&config_path) {
        Ok(file) => {
            let file = std::io::BufReader::new(file);
            Ok(serde_json::from_reader(file)?)
        }
        Err(e) if e.kind() == ErrorKind::NotFound && explicit => {
            Err(ConfigError::NoConfig(config_path.as_ref().to_path_buf()))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("no config at {config_path:?}, using defaults");
            Ok(Config::default())
        }
        Err(e) => Err(e.into()),
    }
}

/// Defaults when the usual config location is missing or can't be read.
fn open_default<T>(config_path: T) -> Result<Config, ConfigError>
where
    T: std::fmt::Debug + AsRef<Path>,
{
    if config_path.as_ref().is_dir() {
        log::warn!("{config_path:?} is a directory, using default config");
        return Ok(Config::default());
    }
    match open_and_parse(&config_path, false) {
        Err(ConfigError::IoErr(e)) => {
            log::warn!("could not read {config_path:?}: {e}, using default config");
            Ok(Config::default())
        }
        other => other,
    }
}

/// Splits `[ -c config.json ] [ -- ] FILE...` into a config path and files.
fn parse_args<I>(args: I) -> Result<(Option<PathBuf>, Vec<PathBuf>), ConfigError>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let mut config = None;
    let mut files = Vec::new();
    while let Some(arg) = args.next() {
        if arg == "-c" || arg == "--config" {
            let path = args
                .next()
                .ok_or_else(|| ConfigError::MissingArg(arg.to_string_lossy().into_owned()))?;
            config = Some(PathBuf::from(path));
        } else if arg == "--" {
            files.extend(args.by_ref().map(PathBuf::from));
        } else {
            files.push(PathBuf::from(arg));
        }
    }
    if files.is_empty() {
        return Err(ConfigError::NoFiles);
    }
    Ok((config, files))
}

pub fn get_config() -> Result<(Config, Vec<PathBuf>), ConfigError> {
    let (config_path, files) = parse_args(std::env::args_os().skip(1))?;
    let config = match config_path {
        Some(path) => open_and_parse(path, true)?,
        None => open_default(find_systemd_or_xdg_path(
            config::BASE,
            config::USER,
            config::FALLBACK,
            "config.json",
        ))?,
    };
    Ok((config, files))
}

const EXAMPLE_CONFIG: &str = r###"
{ "//": "How to classify: content (read the header), extension, or both."
, "//": "both reads the header first and falls back to the extension."
, "strategy": "content"
, "//": "Reported instead of unknown. default: print unknown."
, "fallback": "text/plain"
, "//": "Stop at the first file that can't be read. default: false."
, "fail_fast": false
}
"###;

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn args(v: &[&str]) -> Vec<OsString> {
        v.iter().map(OsString::from).collect()
    }

    #[test]
    fn parses_config_flag_and_files() {
        let (config, files) = parse_args(args(&["-c", "cfg.json", "a.png", "b"])).unwrap();
        assert_eq!(config, Some(PathBuf::from("cfg.json")));
        assert_eq!(files, vec![PathBuf::from("a.png"), PathBuf::from("b")]);
    }

    #[test]
    fn double_dash_ends_flags() {
        let (config, files) = parse_args(args(&["--", "-c"])).unwrap();
        assert_eq!(config, None);
        assert_eq!(files, vec![PathBuf::from("-c")]);
    }

    #[test]
    fn usage_errors() {
        assert!(matches!(
            parse_args(args(&["a", "-c"])),
            Err(ConfigError::MissingArg(_))
        ));
        assert!(matches!(parse_args(args(&[])), Err(ConfigError::NoFiles)));
    }

    #[test]
    fn example_config_parses() {
        let config: Config = serde_json::from_str(EXAMPLE_CONFIG).unwrap();
        assert_eq!(config.strategy, Strategy::Content);
        assert_eq!(config.fallback, Some(MimeType::TextPlain));
        assert!(!config.fail_fast);
    }

    #[test]
    fn rejects_unrecognized_fallback() {
        assert!(serde_json::from_str::<Config>(r#"{ "fallback": "image/webp" }"#).is_err());
    }

    #[test]
    fn missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        assert!(matches!(
            open_and_parse(&path, true),
            Err(ConfigError::NoConfig(_))
        ));
        let config = open_and_parse(&path, false).unwrap();
        assert_eq!(config.strategy, Strategy::Content);
        assert_eq!(config.fallback, None);
    }

    #[test]
    fn unreadable_default_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = open_default(dir.path()).unwrap();
        assert_eq!(config.strategy, Strategy::Content);
        assert!(open_default(dir.path().join("config.json")).is_ok());

        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            open_default(&path),
            Err(ConfigError::DeserConfig(_))
        ));
    }

    #[test]
    fn both_strategy_falls_back_to_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.TXT");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"plain words")
            .unwrap();

        let mut config = Config::default();
        assert_eq!(config.classify(&path).unwrap(), MimeType::Unknown);
        config.strategy = Strategy::Both;
        assert_eq!(config.classify(&path).unwrap(), MimeType::TextPlain);
        config.strategy = Strategy::Content;
        config.fallback = Some(MimeType::ImageBmp);
        assert_eq!(config.classify(&path).unwrap(), MimeType::ImageBmp);
        config.fallback = Some(MimeType::FALLBACK);
        assert_eq!(config.classify(&path).unwrap(), MimeType::Unknown);
    }

    #[test]
    fn extension_strategy_skips_io() {
        let config = Config {
            strategy: Strategy::Extension,
            ..Config::default()
        };
        assert_eq!(
            config.classify("/does/not/exist.gif").unwrap(),
            MimeType::ImageGif
        );
    }
}
