//! Defaults read from a TOML file, used for any option left off the command line.
//!
//! ```toml
//! header = "../firebird/src/include/gen/msgs.h"
//! output = "src/errmsgs.jl"
//! target = "julia"
//! table = "messages"
//! function = "get_errmsgs"
//! ```
//!
//! Relative paths are taken from the directory containing the config file.

use anyhow::Context;
use anyhow_std::*;
use errmsgs_gen::Language;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub header: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub target: Option<Language>,
    pub table: Option<String>,
    pub function: Option<String>,
}
impl Config {
    pub fn from_toml(src: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(src)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let src = path.read_to_string_anyhow()?;
        let mut config = Self::from_toml(&src)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        Ok(config)
    }

    /// Make relative paths relative to `base` instead of the working directory.
    pub fn resolve_paths(&mut self, base: &Path) {
        for path in [&mut self.header, &mut self.output].into_iter().flatten() {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let config = Config::from_toml(
            r#"
header = "include/msgs.h"
output = "lib/errors.py"
target = "python"
table = "fb_messages"
function = "messages"
"#,
        )
        .unwrap();
        assert_eq!(
            config,
            Config {
                header: Some("include/msgs.h".into()),
                output: Some("lib/errors.py".into()),
                target: Some(Language::Python),
                table: Some("fb_messages".into()),
                function: Some("messages".into()),
            }
        );
    }

    #[test]
    fn test_empty_config() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_bad_config() {
        assert!(Config::from_toml("tagret = \"rust\"").is_err());
        assert!(Config::from_toml("target = \"cobol\"").is_err());
        assert!(Config::from_toml("output = 3").is_err());
    }

    #[test]
    fn test_resolve_paths() {
        let mut config = Config {
            header: Some("msgs.h".into()),
            output: Some("/abs/errmsgs.jl".into()),
            ..Config::default()
        };
        config.resolve_paths(Path::new("conf"));
        assert_eq!(config.header, Some(Path::new("conf").join("msgs.h")));
        assert_eq!(config.output, Some(PathBuf::from("/abs/errmsgs.jl")));
    }
}
