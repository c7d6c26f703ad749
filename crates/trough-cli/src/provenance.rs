use anyhow::{Context, Result};
use serde::Serialize;
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;
use trough::{SweepCfg, SweepHealth};

/// What produced an artifact: the effective configuration, run health, and
/// every file written alongside it.
#[derive(Debug, Serialize)]
pub struct Payload {
    pub params: SweepCfg,
    pub health: Option<SweepHealth>,
    pub outputs: Vec<PathBuf>,
}

impl Payload {
    pub fn new(params: SweepCfg) -> Self {
        Self {
            params,
            health: None,
            outputs: Vec::new(),
        }
    }

    pub fn with_health(mut self, health: SweepHealth) -> Self {
        self.health = Some(health);
        self
    }

    pub fn with_output<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.outputs.push(path.into());
        self
    }
}

#[derive(Debug, Serialize)]
pub struct Document<'a> {
    code_rev: String,
    trough_version: &'static str,
    #[serde(flatten)]
    payload: &'a Payload,
    #[serde(skip_serializing_if = "Option::is_none")]
    callsite: Option<Callsite>,
}

#[derive(Debug, Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

/// Provenance document without a callsite (used by `trough report`).
pub fn document(payload: &Payload) -> Document<'_> {
    Document {
        code_rev: current_git_rev(),
        trough_version: trough::VERSION,
        payload,
        callsite: None,
    }
}

/// Write `<artifact stem>.provenance.json` next to `artifact`, recording the
/// caller's source location as well.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: &Payload) -> Result<PathBuf> {
    let callsite = Location::caller();
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let doc = Document {
        callsite: Some(Callsite {
            file: callsite.file(),
            line: callsite.line(),
        }),
        ..document(payload)
    };
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Git revision from the build env, the runtime env, or `git rev-parse`.
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok().filter(|s| !s.is_empty()))
        .or_else(|| {
            let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            if !output.status.success() {
                return None;
            }
            String::from_utf8(output.stdout)
                .ok()
                .map(|s| s.trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
