//! Idle -> Loading -> Generated cycle behind the prompt form.

use anyhow::{bail, Result};
use parking_lot::Mutex;
use tokio::sync::watch;
use uuid::Uuid;

use crate::errors::CodeKillerError;
use crate::model::{GenerationRequest, GenerationResult, Language, Notice, ProjectType};
use crate::notice::DynNotifier;
use crate::provider::DynProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Generated,
}

#[derive(Default)]
struct State {
    pending: Option<GenerationRequest>,
    /// Claimed by `finish` while the provider runs.
    in_flight: Option<Uuid>,
    request: Option<GenerationRequest>,
    result: Option<GenerationResult>,
}

pub struct Generator {
    provider: DynProvider,
    notifier: DynNotifier,
    state: Mutex<State>,
    phase: watch::Sender<Phase>,
    debug: bool,
}

impl Generator {
    pub fn new(provider: DynProvider, notifier: DynNotifier) -> Self {
        let (phase, _) = watch::channel(Phase::Idle);
        Self {
            provider,
            notifier,
            state: Mutex::new(State::default()),
            phase,
            debug: false,
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn phase(&self) -> Phase {
        *self.phase.borrow()
    }

    pub fn is_loading(&self) -> bool {
        self.phase() == Phase::Loading
    }

    /// Phase updates for whoever renders the loading affordance.
    pub fn subscribe(&self) -> watch::Receiver<Phase> {
        self.phase.subscribe()
    }

    /// Latest generated text, if any generation has completed.
    pub fn current(&self) -> Option<GenerationResult> {
        self.state.lock().result.clone()
    }

    /// Request that produced `current()`.
    pub fn last_request(&self) -> Option<GenerationRequest> {
        self.state.lock().request.clone()
    }

    /// Enter Loading for a new request. Rejected while another one is in flight.
    pub fn begin(
        &self,
        prompt: &str,
        project_type: ProjectType,
        language: Language,
    ) -> Result<GenerationRequest, CodeKillerError> {
        if prompt.trim().is_empty() {
            return Err(CodeKillerError::EmptyPrompt);
        }

        let mut state = self.state.lock();
        if state.pending.is_some() || state.in_flight.is_some() {
            return Err(CodeKillerError::Busy);
        }
        let req = GenerationRequest::new(prompt, project_type, language);
        state.pending = Some(req.clone());
        self.phase.send_replace(Phase::Loading);
        drop(state);

        if self.debug {
            eprintln!("debug[generator]: {} -> loading ({} / {})", req.id, req.project_type, req.language);
        }
        Ok(req)
    }

    /// Wait for the provider and move Loading -> Generated.
    ///
    /// The request is claimed up front, so a second `finish` for the same id
    /// fails. If the provider errors or this future is dropped, the phase falls
    /// back to Generated when an earlier result exists and to Idle otherwise.
    pub async fn finish(&self, req: GenerationRequest) -> Result<GenerationResult> {
        {
            let mut state = self.state.lock();
            match state.pending.take() {
                Some(p) if p.id == req.id => state.in_flight = Some(p.id),
                other => {
                    state.pending = other;
                    if state.in_flight == Some(req.id) {
                        bail!("request {} is already being finished", req.id);
                    }
                    bail!("request {} is not the pending generation", req.id);
                }
            }
        }

        let claim = InFlight { generator: self, id: req.id, armed: true };
        let result = self.provider.send(&req, self.debug).await?;
        claim.disarm();

        let mut state = self.state.lock();
        state.in_flight = None;
        state.request = Some(req);
        state.result = Some(result.clone());
        self.phase.send_replace(Phase::Generated);
        drop(state);

        if self.debug {
            eprintln!("debug[generator]: {} -> generated ({} bytes)", result.request_id, result.source_text.len());
        }
        self.notifier.notify(Notice::info(
            "Code generated successfully",
            "Your code has been generated based on your prompt.",
        ));
        Ok(result)
    }

    pub async fn generate(
        &self,
        prompt: &str,
        project_type: ProjectType,
        language: Language,
    ) -> Result<GenerationResult> {
        let req = self.begin(prompt, project_type, language)?;
        self.finish(req).await
    }

    /// Page-level "Save Project". Only offered once something was generated.
    pub fn save_project(&self) -> Result<(), CodeKillerError> {
        let state = self.state.lock();
        let Some(result) = &state.result else {
            return Err(CodeKillerError::NothingGenerated);
        };
        if self.debug {
            eprintln!("debug[generator]: project {} saved", result.request_id);
        }
        drop(state);

        self.notifier.notify(Notice::info(
            "Project saved",
            "Your project has been saved to your dashboard.",
        ));
        Ok(())
    }
}

/// Rolls the phase back unless the provider call completed.
struct InFlight<'a> {
    generator: &'a Generator,
    id: Uuid,
    armed: bool,
}

impl InFlight<'_> {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut state = self.generator.state.lock();
        if state.in_flight == Some(self.id) {
            state.in_flight = None;
            let back = if state.result.is_some() { Phase::Generated } else { Phase::Idle };
            self.generator.phase.send_replace(back);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Severity;
    use crate::notice::MemoryNotifier;
    use crate::provider::template::TemplateProvider;
    use crate::templates;
    use std::sync::Arc;
    use std::time::Duration;

    const DELAY: Duration = Duration::from_millis(2000);

    fn generator() -> (Generator, Arc<MemoryNotifier>) {
        let notes = Arc::new(MemoryNotifier::new());
        let gen = Generator::new(Box::new(TemplateProvider::new(DELAY)), notes.clone());
        (gen, notes)
    }

    #[tokio::test(start_paused = true)]
    async fn loading_is_immediate_and_generated_follows_the_delay() {
        let (gen, notes) = generator();
        assert_eq!(gen.phase(), Phase::Idle);

        let req = gen.begin("Build a todo list", ProjectType::Web, Language::JavaScript).unwrap();
        assert_eq!(gen.phase(), Phase::Loading);
        assert!(gen.current().is_none());

        let started = tokio::time::Instant::now();
        let res = gen.finish(req).await.unwrap();
        assert!(started.elapsed() >= DELAY);

        assert_eq!(gen.phase(), Phase::Generated);
        assert_eq!(gen.current(), Some(res.clone()));
        assert_eq!(res.source_text, templates::render("Build a todo list", "web", "javascript"));
        assert_eq!(notes.titles(), vec!["Code generated successfully".to_string()]);
        assert_eq!(notes.count(Severity::Info), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn second_submission_is_rejected_while_loading() {
        let (gen, _) = generator();
        let first = gen.begin("one", ProjectType::Api, Language::Python).unwrap();
        let again = gen.begin("two", ProjectType::Api, Language::Python);
        assert_eq!(again.unwrap_err(), CodeKillerError::Busy);

        gen.finish(first).await.unwrap();
        assert!(gen.begin("two", ProjectType::Api, Language::Python).is_ok());
        assert_eq!(gen.phase(), Phase::Loading);
    }

    #[tokio::test(start_paused = true)]
    async fn each_submission_completes_once() {
        let (gen, notes) = generator();
        let mut rx = gen.subscribe();

        gen.generate("a", ProjectType::Web, Language::TypeScript).await.unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), Phase::Generated);

        let second = gen.generate("b", ProjectType::Database, Language::Python).await.unwrap();
        assert_eq!(notes.notices().len(), 2);
        assert_eq!(gen.last_request().unwrap().prompt, "b");
        assert!(second.source_text.starts_with("# Generated code based on prompt: \"b\""));
    }

    #[tokio::test(start_paused = true)]
    async fn finish_refuses_unknown_requests() {
        let (gen, notes) = generator();
        let stray = GenerationRequest::new("x", ProjectType::Web, Language::JavaScript);
        assert!(gen.finish(stray).await.is_err());
        assert_eq!(gen.phase(), Phase::Idle);
        assert!(notes.notices().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_finish_returns_to_idle() {
        let (gen, notes) = generator();
        let req = gen.begin("cancel me", ProjectType::Web, Language::JavaScript).unwrap();

        let cut = tokio::time::timeout(Duration::from_millis(10), gen.finish(req)).await;
        assert!(cut.is_err());
        assert_eq!(gen.phase(), Phase::Idle);
        assert!(notes.notices().is_empty());

        let next = gen.begin("again", ProjectType::Web, Language::JavaScript).unwrap();
        gen.finish(next).await.unwrap();
        assert_eq!(gen.phase(), Phase::Generated);
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_finish_keeps_the_previous_result() {
        let (gen, _) = generator();
        let first = gen.generate("first", ProjectType::Api, Language::JavaScript).await.unwrap();

        let req = gen.begin("second", ProjectType::Api, Language::JavaScript).unwrap();
        let _ = tokio::time::timeout(Duration::from_millis(10), gen.finish(req)).await;
        assert_eq!(gen.phase(), Phase::Generated);
        assert_eq!(gen.current(), Some(first));
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_finish_runs_once() {
        let (gen, notes) = generator();
        let req = gen.begin("twice", ProjectType::Component, Language::TypeScript).unwrap();

        let (a, b) = tokio::join!(gen.finish(req.clone()), gen.finish(req));
        assert_eq!([a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count(), 1);
        assert_eq!(notes.notices().len(), 1);
        assert_eq!(gen.phase(), Phase::Generated);
    }

    #[tokio::test(start_paused = true)]
    async fn begin_is_busy_while_finish_runs() {
        let (gen, _) = generator();
        let req = gen.begin("slow", ProjectType::Web, Language::JavaScript).unwrap();

        let (done, again) = tokio::join!(gen.finish(req), async {
            tokio::time::sleep(Duration::from_millis(5)).await;
            gen.begin("eager", ProjectType::Web, Language::JavaScript)
        });
        assert!(done.is_ok());
        assert_eq!(again.unwrap_err(), CodeKillerError::Busy);
    }

    #[tokio::test(start_paused = true)]
    async fn save_project_needs_a_generation() {
        let (gen, notes) = generator();
        assert_eq!(gen.save_project().unwrap_err(), CodeKillerError::NothingGenerated);
        assert!(notes.notices().is_empty());

        gen.generate("shop", ProjectType::Web, Language::JavaScript).await.unwrap();
        gen.save_project().unwrap();
        let last = notes.notices().pop().unwrap();
        assert_eq!(last.title, "Project saved");
        assert_eq!(last.description, "Your project has been saved to your dashboard.");
        assert_eq!(last.severity, Severity::Info);
    }

    #[test]
    fn blank_prompt_is_refused_directly() {
        let (gen, _) = generator();
        let err = gen.begin("  ", ProjectType::Web, Language::JavaScript).unwrap_err();
        assert_eq!(err, CodeKillerError::EmptyPrompt);
        assert_eq!(gen.phase(), Phase::Idle);
    }
}
