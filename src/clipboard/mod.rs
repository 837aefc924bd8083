use anyhow::{anyhow, Result};
use parking_lot::Mutex;
use std::path::PathBuf;

use crate::exec;

/// Clipboard write capability supplied by the host.
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// Known clipboard writers, tried in order.
const CANDIDATES: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("pbcopy", &[]),
    ("clip", &[]),
];

/// Pipes text into the first platform clipboard tool found on `PATH`.
pub struct CommandClipboard {
    program: Option<(PathBuf, Vec<String>)>,
}

impl CommandClipboard {
    pub fn detect() -> Self {
        let program = CANDIDATES.iter().find_map(|(name, args)| {
            which::which(name)
                .ok()
                .map(|p| (p, args.iter().map(|a| a.to_string()).collect()))
        });
        Self { program }
    }

    pub fn program(&self) -> Option<&PathBuf> {
        self.program.as_ref().map(|(p, _)| p)
    }
}

impl Clipboard for CommandClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let (program, args) = self
            .program
            .as_ref()
            .ok_or_else(|| anyhow!("no clipboard tool found (tried wl-copy, xclip, xsel, pbcopy, clip)"))?;
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        exec::pipe_to_command(program, &args, text)?;
        Ok(())
    }
}

/// In-process clipboard; holds the last written text.
#[derive(Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        *self.contents.lock() = Some(text.to_string());
        Ok(())
    }
}
