use anyhow::Result;
use fs_err as fs;
use parking_lot::Mutex;
use serde_json::to_string_pretty;
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::model::{GenerationRequest, GenerationResult, Language};
use crate::safety;
use crate::surface::SaveSink;

pub struct SavedPaths {
    pub dir: PathBuf,
    pub request: PathBuf,
    pub result: PathBuf,
}

pub fn tx_dir(root: &Path, tx: Uuid) -> PathBuf {
    root.join(".codekiller").join("tx").join(tx.to_string())
}

/// Write the request/result pair of a generation as pretty JSON.
pub fn save_generation(
    root: &Path,
    tx: Uuid,
    req: &GenerationRequest,
    res: &GenerationResult,
) -> Result<SavedPaths> {
    let dir = tx_dir(root, tx);
    fs::create_dir_all(&dir)?;

    let request = dir.join("request.json");
    fs::write(&request, to_string_pretty(req)?)?;
    let result = dir.join("result.json");
    fs::write(&result, to_string_pretty(res)?)?;

    Ok(SavedPaths { dir, request, result })
}

/// Save target for the code surface: `saved.<ext>` inside the transaction directory.
pub struct ArtifactSink {
    root: PathBuf,
    tx: Uuid,
    last: Mutex<Option<PathBuf>>,
}

impl ArtifactSink {
    pub fn new(root: impl Into<PathBuf>, tx: Uuid) -> Self {
        Self { root: root.into(), tx, last: Mutex::new(None) }
    }

    pub fn dir(&self) -> PathBuf {
        tx_dir(&self.root, self.tx)
    }

    /// Path written by the most recent successful save.
    pub fn last_saved(&self) -> Option<PathBuf> {
        self.last.lock().clone()
    }
}

impl SaveSink for ArtifactSink {
    fn save(&self, code: &str, language: &Language) -> Result<()> {
        let dir = self.dir();
        fs::create_dir_all(&dir)?;
        let path = dir.join(safety::file_name("saved", language.export_extension())?);
        fs::write(&path, code)?;
        *self.last.lock() = Some(path);
        Ok(())
    }
}

pub fn print_planned_paths(root: &Path, tx: Uuid) {
    let dir = tx_dir(root, tx);
    println!("debug: planned artifacts directory: {}", dir.display());
    println!("debug: planned request path: {}", dir.join("request.json").display());
    println!("debug: planned result path: {}", dir.join("result.json").display());
    std::io::stdout().flush().ok();
}

pub fn print_saved_paths(stage: &str, saved: &SavedPaths) {
    println!("debug[{stage}]: artifacts directory: {}", saved.dir.display());
    for (what, p) in [("request", &saved.request), ("result", &saved.result)] {
        println!("debug[{stage}]: {what} saved at: {}", p.display());
    }
    std::io::stdout().flush().ok();
}

pub fn print_json_debug(stage: &str, req: &GenerationRequest, res: &GenerationResult) -> Result<()> {
    eprintln!("\n===== DEBUG [{stage}]: REQUEST JSON =====\n{}\n", to_string_pretty(req)?);
    eprintln!("===== DEBUG [{stage}]: RESULT JSON =====\n{}\n", to_string_pretty(res)?);
    std::io::stderr().flush().ok();
    Ok(())
}
