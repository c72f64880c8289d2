use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use crate::foundation::{
    core::Offset,
    error::{BlendkitError, BlendkitResult},
};

/// A compositing job: which files to blend, how, and where to write.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompositeConfig {
    /// Background image path.
    pub background: PathBuf,
    /// Foreground image path.
    pub foreground: PathBuf,
    /// Output image path.
    pub out: PathBuf,
    /// Foreground opacity multiplier.
    #[serde(default = "default_opacity")]
    pub opacity: f32,
    /// Foreground placement on the background.
    #[serde(default)]
    pub offset: Offset,
}

fn default_opacity() -> f32 {
    1.0
}

impl CompositeConfig {
    /// Parse a job from a JSON reader. Paths are kept as written.
    pub fn from_reader<R: std::io::Read>(r: R) -> BlendkitResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| BlendkitError::config(format!("parse composite config JSON: {e}")))
    }

    /// Parse a job from a JSON file; relative paths resolve against the
    /// file's directory.
    pub fn from_path(path: impl AsRef<Path>) -> BlendkitResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            BlendkitError::config(format!("open composite config '{}': {e}", path.display()))
        })?;
        let cfg = Self::from_reader(BufReader::new(f))?;
        let root = path.parent().unwrap_or_else(|| Path::new("."));
        Ok(cfg.resolve_against(root))
    }

    /// Rebase relative paths onto `root`.
    pub fn resolve_against(self, root: &Path) -> Self {
        let rebase = |p: PathBuf| if p.is_absolute() { p } else { root.join(p) };
        Self {
            background: rebase(self.background),
            foreground: rebase(self.foreground),
            out: rebase(self.out),
            ..self
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/composite.rs"]
mod tests;
