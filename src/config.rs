use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ImportError, Result};

/// File name of the per-project config, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "sim-import.toml";

/// Location of the per-user config file.
#[must_use]
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sim-import").join("config.toml"))
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub rewrite: RewriteConfig,
}

impl Config {
    /// Load the effective config: defaults, then the global file and the
    /// project file (or one explicit file), then `SIM_IMPORT_*` variables.
    pub fn load(explicit_path: Option<&Path>, project_dir: &Path) -> Result<Self> {
        Self::load_layers(
            explicit_path,
            project_dir,
            global_config_path().as_deref(),
            |key| std::env::var(key).ok(),
        )
    }

    /// Layered load with the global file location and the environment
    /// supplied by the caller.
    pub fn load_layers<F>(
        explicit_path: Option<&Path>,
        project_dir: &Path,
        global_path: Option<&Path>,
        lookup: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| lookup("SIM_IMPORT_CONFIG").map(PathBuf::from));

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ImportError::Config(format!(
                    "config file {} does not exist",
                    path.display()
                )));
            }
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else {
            if let Some(global) = global_path {
                if let Some(patch) = Self::load_patch(global)? {
                    config.merge_patch(patch);
                }
            }
            if let Some(project) = Self::load_patch(&project_dir.join(PROJECT_CONFIG_FILE))? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides(lookup)?;

        Ok(config)
    }

    /// Parse a config document, layering it over the defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let patch: ConfigPatch =
            toml::from_str(raw).map_err(|err| ImportError::Config(format!("parse config: {err}")))?;
        let mut config = Self::default();
        config.merge_patch(patch);
        Ok(config)
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| ImportError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| ImportError::Config(format!("parse config {}: {err}", path.display())))?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.paths {
            self.paths.merge(patch);
        }
        if let Some(patch) = patch.rewrite {
            self.rewrite.merge(patch);
        }
    }

    /// Apply `SIM_IMPORT_*` overrides read through `lookup`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("SIM_IMPORT_PROJECT_ROOT") {
            self.paths.project_root = PathBuf::from(value);
        }
        if let Some(value) = lookup("SIM_IMPORT_RECORDER_ROOT") {
            self.paths.recorder_root = PathBuf::from(value);
        }
        if let Some(value) = lookup("SIM_IMPORT_MARKER") {
            self.paths.marker = value;
        }

        if let Some(value) = lookup("SIM_IMPORT_TOKEN_HEADER") {
            self.rewrite.token_header = value;
        }
        if let Some(value) = lookup("SIM_IMPORT_SNIPPET_WINDOW") {
            self.rewrite.snippet_window = value.parse::<usize>().map_err(|err| {
                ImportError::Config(format!(
                    "invalid SIM_IMPORT_SNIPPET_WINDOW value {value}: {err}"
                ))
            })?;
        }
        if let Some(value) = lookup("SIM_IMPORT_BOILERPLATE") {
            self.rewrite.boilerplate = merge_unique(&self.rewrite.boilerplate, split_list(&value));
        }
        if let Some(value) = lookup("SIM_IMPORT_ANCHOR") {
            self.rewrite.anchor = AnchorConfig {
                contains: Some(value),
                pattern: None,
            };
        }
        if let Some(value) = lookup("SIM_IMPORT_ANCHOR_PATTERN") {
            self.rewrite.anchor = AnchorConfig {
                contains: None,
                pattern: Some(value),
            };
        }

        Ok(())
    }
}

/// Locations of the recorder output and of the project it is imported into.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    pub project_root: PathBuf,
    pub recorder_root: PathBuf,
    /// Generated script, relative to `recorder_root`.
    pub simulation_input: PathBuf,
    /// Recorded request bodies, relative to `recorder_root`.
    pub bodies_input: PathBuf,
    /// Body directory inside the project, relative to `project_root`.
    pub bodies_target: PathBuf,
    /// Rewritten script, relative to `project_root`.
    pub simulation_output: PathBuf,
    /// Substring identifying generated artifacts by file name.
    pub marker: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            recorder_root: PathBuf::from("."),
            simulation_input: PathBuf::from(
                "user-files/simulations/simulations/RecordedSimulation.scala",
            ),
            bodies_input: PathBuf::from("user-files/bodies"),
            bodies_target: PathBuf::from("src/test/resources/request-bodies"),
            simulation_output: PathBuf::from("src/test/scala/simulations/RecordedSimulation.scala"),
            marker: "RecordedSimulation".to_string(),
        }
    }
}

impl PathsConfig {
    fn merge(&mut self, patch: PathsPatch) {
        if let Some(value) = patch.project_root {
            self.project_root = value;
        }
        if let Some(value) = patch.recorder_root {
            self.recorder_root = value;
        }
        if let Some(value) = patch.simulation_input {
            self.simulation_input = value;
        }
        if let Some(value) = patch.bodies_input {
            self.bodies_input = value;
        }
        if let Some(value) = patch.bodies_target {
            self.bodies_target = value;
        }
        if let Some(value) = patch.simulation_output {
            self.simulation_output = value;
        }
        if let Some(value) = patch.marker {
            self.marker = value;
        }
    }

    /// Resolve the configured locations into the paths the import works on.
    #[must_use]
    pub fn resolve(&self) -> ImportPaths {
        ImportPaths {
            simulation_input: self.recorder_root.join(&self.simulation_input),
            bodies_source: self.recorder_root.join(&self.bodies_input),
            bodies_target: self.project_root.join(&self.bodies_target),
            simulation_output: self.project_root.join(&self.simulation_output),
            marker: self.marker.clone(),
        }
    }
}

/// Fully resolved locations for one import run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportPaths {
    pub simulation_input: PathBuf,
    pub simulation_output: PathBuf,
    pub bodies_source: PathBuf,
    pub bodies_target: PathBuf,
    pub marker: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteConfig {
    /// Header carrying the anti-forgery token.
    pub token_header: String,
    /// Session variable and cookie name holding the token value.
    pub session_token: String,
    pub content_type: String,
    /// Lines containing any of these are dropped.
    pub boilerplate: Vec<String>,
    /// Number of lines after the anchor eligible for the token snippet.
    pub snippet_window: usize,
    pub cookie_domain: String,
    pub cookie_path: String,
    #[serde(default)]
    pub anchor: AnchorConfig,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            token_header: "x-xsrf-token".to_string(),
            session_token: "xsrf-token".to_string(),
            content_type: "application/json".to_string(),
            boilerplate: vec![
                ".authorizationHeader(\"".to_string(),
                ".contentTypeHeader(\"".to_string(),
                ".connection(\"".to_string(),
                "\"cdn.mathjax.org\"".to_string(),
                "\"www.google-analytics.com\"".to_string(),
            ],
            snippet_window: 3,
            cookie_domain: "localhost".to_string(),
            cookie_path: "/".to_string(),
            anchor: AnchorConfig::default(),
        }
    }
}

impl RewriteConfig {
    fn merge(&mut self, patch: RewritePatch) {
        if let Some(value) = patch.token_header {
            self.token_header = value;
        }
        if let Some(value) = patch.session_token {
            self.session_token = value;
        }
        if let Some(value) = patch.content_type {
            self.content_type = value;
        }
        if let Some(values) = patch.boilerplate {
            self.boilerplate = values;
        }
        if let Some(value) = patch.snippet_window {
            self.snippet_window = value;
        }
        if let Some(value) = patch.cookie_domain {
            self.cookie_domain = value;
        }
        if let Some(value) = patch.cookie_path {
            self.cookie_path = value;
        }
        if let Some(value) = patch.anchor {
            self.anchor = value;
        }
    }
}

/// Predicate selecting the anchor line.
///
/// `pattern` wins over `contains` when both are set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnchorConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            contains: Some("\"/dtdl/login".to_string()),
            pattern: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub paths: Option<PathsPatch>,
    pub rewrite: Option<RewritePatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct PathsPatch {
    pub project_root: Option<PathBuf>,
    pub recorder_root: Option<PathBuf>,
    pub simulation_input: Option<PathBuf>,
    pub bodies_input: Option<PathBuf>,
    pub bodies_target: Option<PathBuf>,
    pub simulation_output: Option<PathBuf>,
    pub marker: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RewritePatch {
    pub token_header: Option<String>,
    pub session_token: Option<String>,
    pub content_type: Option<String>,
    pub boilerplate: Option<Vec<String>>,
    pub snippet_window: Option<usize>,
    pub cookie_domain: Option<String>,
    pub cookie_path: Option<String>,
    pub anchor: Option<AnchorConfig>,
}

fn merge_unique(existing: &[String], values: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for value in existing.iter().cloned().chain(values) {
        if seen.insert(value.clone()) {
            out.push(value);
        }
    }
    out
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(ToString::to_string)
        .collect()
}
