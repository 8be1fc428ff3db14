use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};

#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute directory where the entries blob lives.
    pub data_dir: PathBuf,
    /// Preferred editor name/binary (e.g. hx for Helix). Optional; the CLI will fall back to $VISUAL/$EDITOR.
    pub editor: Option<String>,
    /// chrono format string used when printing entry timestamps.
    /// Default is "%d %b %Y, %H:%M" (e.g. 15 Aug 2025, 09:30).
    pub date_format: String,
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    data_dir: Option<PathBuf>,
    editor: Option<String>,
    date_format: Option<String>,
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native)
    /// and apply defaults for anything missing.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or_else(|_| FileConfig {
            data_dir: None,
            editor: None,
            date_format: None,
        });

        let date_format = file_config
            .date_format
            .unwrap_or_else(|| "%d %b %Y, %H:%M".to_string());

        let data_dir = file_config.data_dir.unwrap_or_else(Self::default_data_dir);

        Ok(Self {
            data_dir,
            editor: file_config.editor,
            date_format,
        })
    }

    /// Default blob root: `{data_dir}/inktrace`
    /// - macOS:   `~/Library/Application Support/inktrace`
    /// - Linux:   `$XDG_DATA_HOME/inktrace` or `~/.local/share/inktrace`
    /// - Windows: `%APPDATA%\inktrace`
    fn default_data_dir() -> PathBuf {
        if let Some(base) = BaseDirs::new() {
            let mut p = base.data_dir().to_path_buf();
            p.push("inktrace");
            p
        } else {
            PathBuf::from("./inktrace")
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("inktrace")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("inktrace").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig {
            data_dir: None,
            editor: None,
            date_format: None,
        })
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}
