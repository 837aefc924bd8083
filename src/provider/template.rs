use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;

use crate::model::{GenerationRequest, GenerationResult};
use crate::templates;

/// Default stand-in for a remote model round trip.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

/// Answers from the template catalog after a fixed, uncancellable delay.
pub struct TemplateProvider {
    delay: Duration,
}

impl TemplateProvider {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for TemplateProvider {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

#[async_trait]
impl super::Provider for TemplateProvider {
    async fn send(&self, req: &GenerationRequest, debug: bool) -> Result<GenerationResult> {
        if debug {
            eprintln!(
                "debug[template]: {} / {} -> {:?} (delay {}ms)",
                req.project_type,
                req.language,
                templates::select(&req.project_type, &req.language),
                self.delay.as_millis()
            );
        }

        tokio::time::sleep(self.delay).await;

        Ok(GenerationResult {
            request_id: req.id,
            source_text: templates::render_typed(&req.prompt, &req.project_type, &req.language),
            generated_at: Utc::now(),
        })
    }
}
