use parking_lot::Mutex;
use std::sync::Arc;

use crate::model::{Notice, Severity};

/// Toast display capability supplied by the host.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

pub type DynNotifier = Arc<dyn Notifier>;

/// Keeps every notice in memory; used by tests and `--json` output.
#[derive(Default)]
pub struct MemoryNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().clone()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.notices.lock().iter().filter(|n| n.severity == severity).count()
    }

    pub fn titles(&self) -> Vec<String> {
        self.notices.lock().iter().map(|n| n.title.clone()).collect()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().push(notice);
    }
}
