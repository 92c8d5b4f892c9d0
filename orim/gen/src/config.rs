//! Generator configuration.
//!
//! Two path fragments locate the model object template and the directory
//! generated sources are written to. The assembler itself never reads
//! them; they are used by [`crate::render::generate_model`].
//!
//! ```toml
//! [templates]
//! path = "templates"
//! orim_object = "OrimObject.js.tmpl"
//!
//! [app]
//! orim_object_path = "src/models"
//! ```
//!
//! Upper-case keys (`[TEMPLATES]`, `PATH`, `ORIM_OBJECT`, `[APP]`,
//! `ORIM_OBJECT_PATH`) are accepted as well.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::GeneratorError;

/// Template location settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplatesConfig {
    /// Directory containing the templates.
    #[serde(alias = "PATH")]
    pub path: PathBuf,
    /// File name of the model object template.
    #[serde(alias = "ORIM_OBJECT")]
    pub orim_object: String,
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory generated model objects are written to.
    #[serde(alias = "ORIM_OBJECT_PATH")]
    pub orim_object_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(alias = "TEMPLATES")]
    pub templates: TemplatesConfig,
    #[serde(alias = "APP")]
    pub app: AppConfig,
}

impl GeneratorConfig {
    pub fn new(
        template_dir: impl Into<PathBuf>,
        template_file: impl Into<String>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            templates: TemplatesConfig {
                path: template_dir.into(),
                orim_object: template_file.into(),
            },
            app: AppConfig {
                orim_object_path: output_dir.into(),
            },
        }
    }

    /// Parses and checks a TOML configuration document.
    pub fn from_toml_str(content: &str) -> Result<Self, GeneratorError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self, GeneratorError> {
        let content = fs::read_to_string(path).map_err(|source| GeneratorError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    fn validate(&self) -> Result<(), GeneratorError> {
        if self.templates.orim_object.trim().is_empty() {
            return Err(GeneratorError::ConfigError(
                "templates.orim_object cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Full path of the model object template.
    pub fn template_path(&self) -> PathBuf {
        self.templates.path.join(&self.templates.orim_object)
    }

    /// Output file for a model: `<orim_object_path>/Orim<Name>.js`.
    pub fn output_path(&self, model_name: &str) -> PathBuf {
        self.app
            .orim_object_path
            .join(format!("Orim{model_name}.js"))
    }
}
