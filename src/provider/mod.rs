use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

use crate::config::Config;
use crate::model::{GenerationRequest, GenerationResult};

pub mod template;

/// Turns a request into source text. The orchestrator only talks to this trait.
#[async_trait]
pub trait Provider: Send + Sync {
    async fn send(&self, req: &GenerationRequest, debug: bool) -> Result<GenerationResult>;
}

pub type DynProvider = Box<dyn Provider + Send + Sync>;

pub fn make_provider(cfg: &Config) -> DynProvider {
    Box::new(template::TemplateProvider::new(Duration::from_millis(cfg.generation_delay_ms)))
}
