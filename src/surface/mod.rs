use anyhow::Result;
use fs_err as fs;
use std::path::{Path, PathBuf};

use crate::clipboard::Clipboard;
use crate::model::{GenerationResult, Language, Notice};
use crate::notice::DynNotifier;
use crate::safety;

pub mod sandbox;

/// Receives the buffer on "save". Where it ends up is the sink's business.
pub trait SaveSink: Send + Sync {
    fn save(&self, code: &str, language: &Language) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Editor,
    Preview,
}

/// Editable code buffer with an editor tab and a sandboxed preview tab.
pub struct CodeSurface {
    buffer: String,
    language: Language,
    tab: Tab,
    notifier: DynNotifier,
    debug: bool,
}

impl CodeSurface {
    pub fn new(initial: impl Into<String>, language: Language, notifier: DynNotifier) -> Self {
        Self {
            buffer: initial.into(),
            language,
            tab: Tab::Editor,
            notifier,
            debug: false,
        }
    }

    pub fn from_result(result: &GenerationResult, language: Language, notifier: DynNotifier) -> Self {
        Self::new(result.source_text.clone(), language, notifier)
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    /// Header label: the language id with its first letter upper-cased.
    pub fn language_label(&self) -> String {
        let mut chars = self.language.as_str().chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.tab
    }

    /// Replace the buffer. Any text is accepted.
    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    /// Reseed from a fresh generation, discarding local edits.
    pub fn load_result(&mut self, result: &GenerationResult) {
        self.buffer = result.source_text.clone();
        self.tab = Tab::Editor;
    }

    pub fn copy(&self, clipboard: &dyn Clipboard) {
        if let Err(e) = clipboard.write_text(&self.buffer) {
            if self.debug {
                eprintln!("debug[surface]: clipboard write failed: {e:#}");
            }
        }
        self.notifier.notify(Notice::info(
            "Copied to clipboard",
            "The code has been copied to your clipboard.",
        ));
    }

    /// Write the buffer to `<dir>/code.<extension>`.
    pub fn download(&self, dir: &Path, extension: &str) -> Result<PathBuf> {
        write_download(dir, "code", extension, &self.buffer)
    }

    pub fn save(&self, sink: &dyn SaveSink) {
        if let Err(e) = sink.save(&self.buffer, &self.language) {
            if self.debug {
                eprintln!("debug[surface]: save sink failed: {e:#}");
            }
        }
        self.notifier.notify(Notice::info(
            "Code saved",
            "Your code has been saved successfully.",
        ));
    }

    /// Switch to the preview tab and return the sandbox document for the buffer.
    pub fn preview(&mut self) -> String {
        self.tab = Tab::Preview;
        self.notifier.notify(Notice::info(
            "Running code",
            "Your code is now running in the preview tab.",
        ));
        sandbox::document(&self.buffer)
    }

    /// Write the preview host page to `<dir>/preview.html`.
    pub fn write_preview(&mut self, dir: &Path) -> Result<PathBuf> {
        self.preview();
        let page = sandbox::host_page(&self.buffer, "Code Preview");
        fs::create_dir_all(dir)?;
        let path = dir.join("preview.html");
        fs::write(&path, page)?;
        Ok(path)
    }
}

/// Materialise `content` as `<dir>/<stem>.<extension>`, byte for byte.
pub fn write_download(dir: &Path, stem: &str, extension: &str, content: &str) -> Result<PathBuf> {
    let name = safety::file_name(stem, extension)?;
    fs::create_dir_all(dir)?;
    let path = dir.join(name);
    fs::write(&path, content.as_bytes())?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::errors::CodeKillerError;
    use crate::notice::MemoryNotifier;
    use anyhow::anyhow;
    use parking_lot::Mutex;
    use std::sync::Arc;

    struct Failing;
    impl Clipboard for Failing {
        fn write_text(&self, _: &str) -> Result<()> {
            Err(anyhow!("no display"))
        }
    }

    #[derive(Default)]
    struct Recorder(Mutex<Vec<String>>);
    impl SaveSink for Recorder {
        fn save(&self, code: &str, _: &Language) -> Result<()> {
            self.0.lock().push(code.to_string());
            Ok(())
        }
    }

    struct Broken;
    impl SaveSink for Broken {
        fn save(&self, _: &str, _: &Language) -> Result<()> {
            Err(anyhow!("disk full"))
        }
    }

    fn surface(code: &str) -> (CodeSurface, Arc<MemoryNotifier>) {
        let notes = Arc::new(MemoryNotifier::new());
        (CodeSurface::new(code, Language::JavaScript, notes.clone()), notes)
    }

    #[test]
    fn download_round_trips_the_buffer() {
        let dir = tempfile::tempdir().unwrap();
        let (mut s, _) = surface("");
        s.set_buffer("line one\r\n\ttabbed \u{1F600}\nno trailing newline");
        let path = s.download(dir.path(), "js").unwrap();
        assert_eq!(path.file_name().unwrap(), "code.js");
        assert_eq!(std::fs::read(&path).unwrap(), s.buffer().as_bytes());
    }

    #[test]
    fn download_refuses_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let (s, _) = surface("x");
        let err = s.download(dir.path(), "../../evil").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CodeKillerError>(),
            Some(CodeKillerError::UnsafeExtension(_))
        ));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn copy_writes_verbatim_and_always_notifies() {
        let (s, notes) = surface("let a = 1;\n");
        let cb = MemoryClipboard::new();
        s.copy(&cb);
        assert_eq!(cb.contents().as_deref(), Some("let a = 1;\n"));

        s.copy(&Failing);
        assert_eq!(notes.titles(), vec!["Copied to clipboard", "Copied to clipboard"]);
    }

    #[test]
    fn save_forwards_buffer_and_notifies_even_on_sink_failure() {
        let (mut s, notes) = surface("v1");
        s.set_buffer("edited, not code at all");
        let sink = Recorder::default();
        s.save(&sink);
        assert_eq!(*sink.0.lock(), vec!["edited, not code at all".to_string()]);

        s.save(&Broken);
        assert_eq!(notes.titles(), vec!["Code saved", "Code saved"]);
    }

    #[test]
    fn preview_switches_tab_and_embeds_buffer() {
        let (mut s, notes) = surface("console.log('hi')");
        assert_eq!(s.active_tab(), Tab::Editor);
        let doc = s.preview();
        assert_eq!(s.active_tab(), Tab::Preview);
        assert!(doc.contains("console.log('hi')"));
        assert_eq!(notes.titles(), vec!["Running code"]);
    }

    #[test]
    fn write_preview_produces_host_page() {
        let dir = tempfile::tempdir().unwrap();
        let (mut s, _) = surface("throw 1");
        let path = s.write_preview(dir.path()).unwrap();
        let page = std::fs::read_to_string(path).unwrap();
        assert!(page.contains(r#"sandbox="allow-scripts""#));
        assert!(page.contains("throw 1"));
    }

    #[test]
    fn label_capitalises_first_letter() {
        let (s, _) = surface("");
        assert_eq!(s.language_label(), "Javascript");
    }
}
