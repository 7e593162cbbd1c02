//! Generator configuration (`json2cpp.toml`)
//!
//! Every setting has a built-in default, may be set in a TOML file, and may
//! be overridden on the command line. Precedence is flag > file > default.

use anyhow::{Context, Result};
use json2cpp_core::LogLevel;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Complete generator settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub output: OutputSection,

    #[serde(default)]
    pub generation: GenerationSection,
}

/// Where the artifacts go and what they are called
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSection {
    #[serde(default = "default_dir")]
    pub header_dir: PathBuf,

    #[serde(default = "default_dir")]
    pub source_dir: PathBuf,

    /// Base name shared by both artifacts
    #[serde(default = "default_file_name")]
    pub file_name: String,

    #[serde(default = "default_header_extension")]
    pub header_extension: String,

    #[serde(default = "default_source_extension")]
    pub source_extension: String,

    /// Create missing output directories instead of failing
    #[serde(default = "default_true")]
    pub create_dirs: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSection {
    /// Unhandled attributes abort the run before anything is written
    #[serde(default)]
    pub strict: bool,

    #[serde(default)]
    pub verify: bool,

    /// Extra include directories for the verification compile
    #[serde(default)]
    pub include_dirs: Vec<PathBuf>,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_file_name() -> String {
    "json2cpp_gen".to_string()
}

fn default_header_extension() -> String {
    "h".to_string()
}

fn default_source_extension() -> String {
    "cpp".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            header_dir: default_dir(),
            source_dir: default_dir(),
            file_name: default_file_name(),
            header_extension: default_header_extension(),
            source_extension: default_source_extension(),
            create_dirs: default_true(),
        }
    }
}

impl Default for GenerationSection {
    fn default() -> Self {
        Self {
            strict: false,
            verify: false,
            include_dirs: Vec::new(),
            log_level: default_log_level(),
        }
    }
}

/// Settings given on the command line. `None` leaves the file/default value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub header_dir: Option<PathBuf>,
    pub source_dir: Option<PathBuf>,
    pub file_name: Option<String>,
    pub create_dirs: Option<bool>,
    pub strict: bool,
    pub verify: bool,
    pub include_dirs: Vec<PathBuf>,
    pub log_level: Option<String>,
}

impl GeneratorConfig {
    /// Load configuration from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        Self::from_str(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config")
    }

    /// File (if any), then flags, then validation.
    pub fn resolve(path: Option<&Path>, overrides: CliOverrides) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply(overrides);
        config.validate()?;

        Ok(config)
    }

    /// Layer command-line settings over this configuration.
    ///
    /// Boolean switches can only turn a setting on; include directories
    /// from the command line are appended to the configured ones.
    pub fn apply(&mut self, overrides: CliOverrides) {
        if let Some(dir) = overrides.header_dir {
            self.output.header_dir = dir;
        }
        if let Some(dir) = overrides.source_dir {
            self.output.source_dir = dir;
        }
        if let Some(name) = overrides.file_name {
            self.output.file_name = name;
        }
        if let Some(create) = overrides.create_dirs {
            self.output.create_dirs = create;
        }
        self.generation.strict |= overrides.strict;
        self.generation.verify |= overrides.verify;
        self.generation.include_dirs.extend(overrides.include_dirs);
        if let Some(level) = overrides.log_level {
            self.generation.log_level = level;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let name = &self.output.file_name;
        if name.trim().is_empty() {
            anyhow::bail!("Output file name cannot be empty");
        }
        if name.contains(['/', '\\']) {
            anyhow::bail!(
                "Output file name '{}' must not contain a path separator; use the output directories instead",
                name
            );
        }

        for (label, extension) in [
            ("Header", &self.output.header_extension),
            ("Source", &self.output.source_extension),
        ] {
            if extension.is_empty() {
                anyhow::bail!("{} extension cannot be empty", label);
            }
            if extension.starts_with('.') {
                anyhow::bail!("{} extension '{}' must not start with a dot", label, extension);
            }
        }

        self.log_level()?;

        Ok(())
    }

    pub fn log_level(&self) -> Result<LogLevel> {
        self.generation
            .log_level
            .parse()
            .map_err(anyhow::Error::msg)
    }

    /// File name of the declarations artifact, as included by the source.
    pub fn header_file_name(&self) -> String {
        format!("{}.{}", self.output.file_name, self.output.header_extension)
    }

    pub fn source_file_name(&self) -> String {
        format!("{}.{}", self.output.file_name, self.output.source_extension)
    }

    pub fn header_path(&self) -> PathBuf {
        self.output.header_dir.join(self.header_file_name())
    }

    pub fn source_path(&self) -> PathBuf {
        self.output.source_dir.join(self.source_file_name())
    }
}
