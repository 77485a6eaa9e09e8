//! Provenance sidecars for written artifacts.
//!
//! Every artifact the CLI writes gets a `<stem>.provenance.json` neighbor
//! recording the code revision, the writing callsite, and the run
//! parameters, so long-running enumeration results stay attributable.

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Write the sidecar for `artifact` and return its path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, params: Value) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let sidecar = sidecar_path(artifact);
    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "params": params,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    Ok(sidecar)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT") {
        if !from_env.is_empty() {
            return from_env.to_string();
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn sidecar_path_rewrites_extension() {
        let derived = sidecar_path(Path::new("/tmp/run/report.json"));
        assert_eq!(derived, Path::new("/tmp/run/report.provenance.json"));
    }

    #[test]
    fn write_sidecar_records_params_and_output() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("report.json");
        fs::write(&artifact, "{}").unwrap();
        let sidecar =
            write_sidecar(&artifact, json!({"policy": "Full", "depth": 25})).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(sidecar).unwrap()).unwrap();
        assert_eq!(parsed["params"]["depth"], 25);
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
    }
}
