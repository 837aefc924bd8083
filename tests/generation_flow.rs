use std::sync::Arc;
use std::time::Duration;

use codekiller::clipboard::MemoryClipboard;
use codekiller::generator::{Generator, Phase};
use codekiller::model::{Language, ProjectType, Severity};
use codekiller::notice::MemoryNotifier;
use codekiller::prompt::{PromptInput, Submission};
use codekiller::provider::template::TemplateProvider;
use codekiller::surface::{CodeSurface, Tab};
use codekiller::templates::{self, bodies};

const DELAY: Duration = Duration::from_millis(2000);

struct Page {
    notes: Arc<MemoryNotifier>,
    input: PromptInput,
    generator: Generator,
}

fn page() -> Page {
    let notes = Arc::new(MemoryNotifier::new());
    Page {
        input: PromptInput::new(notes.clone()),
        generator: Generator::new(Box::new(TemplateProvider::new(DELAY)), notes.clone()),
        notes,
    }
}

async fn submit(p: &Page, text: &str, pt: ProjectType, lang: Language) -> Option<String> {
    let req = match p.input.submit(text, p.generator.is_loading(), |t| p.generator.begin(t, pt, lang)) {
        Submission::Accepted(req) => req.unwrap(),
        _ => return None,
    };
    assert_eq!(p.generator.phase(), Phase::Loading);
    Some(p.generator.finish(req).await.unwrap().source_text)
}

#[tokio::test(start_paused = true)]
async fn todo_list_on_web_javascript() {
    let p = page();
    let started = tokio::time::Instant::now();
    let code = submit(&p, "Build a todo list", ProjectType::Web, Language::JavaScript)
        .await
        .unwrap();

    assert!(started.elapsed() >= DELAY);
    assert_eq!(p.generator.phase(), Phase::Generated);
    assert_eq!(code, bodies::REACT_FETCH_APP.replace("{{prompt}}", "Build a todo list"));
    assert!(code.contains("// Generated code based on prompt: \"Build a todo list\""));
}

#[tokio::test(start_paused = true)]
async fn todo_list_on_python_database() {
    let p = page();
    let code = submit(&p, "Build a todo list", ProjectType::Database, Language::Python)
        .await
        .unwrap();
    assert_eq!(code, bodies::SQLALCHEMY_SCHEMA.replace("{{prompt}}", "Build a todo list"));
}

#[tokio::test(start_paused = true)]
async fn java_api_gets_the_fallback() {
    let p = page();
    let code = submit(&p, "Build a todo list", ProjectType::Api, Language::Java)
        .await
        .unwrap();
    assert_eq!(code, templates::render("Build a todo list", "api", "java"));
    assert!(code.contains("console.log(\"Language: java\");"));
    assert!(!templates::is_specialised("api", "java"));
}

#[tokio::test(start_paused = true)]
async fn blank_prompt_stays_idle_with_one_notice() {
    let p = page();
    assert!(submit(&p, " \t ", ProjectType::Web, Language::JavaScript).await.is_none());
    assert_eq!(p.generator.phase(), Phase::Idle);
    assert_eq!(p.notes.notices().len(), 1);
    assert_eq!(p.notes.count(Severity::Destructive), 1);
}

#[tokio::test(start_paused = true)]
async fn surface_edits_do_not_feed_back_and_download_round_trips() {
    let p = page();
    let code = submit(&p, "a dropdown", ProjectType::Component, Language::TypeScript)
        .await
        .unwrap();
    let result = p.generator.current().unwrap();

    let mut surface = CodeSurface::from_result(&result, Language::TypeScript, p.notes.clone());
    assert_eq!(surface.buffer(), code);
    surface.set_buffer(format!("{code}\n// tweaked"));
    assert_eq!(p.generator.current().unwrap().source_text, code);

    let clipboard = MemoryClipboard::new();
    surface.copy(&clipboard);
    assert_eq!(clipboard.contents().as_deref(), Some(surface.buffer()));

    let dir = tempfile::tempdir().unwrap();
    let path = surface.download(dir.path(), "typescript").unwrap();
    assert_eq!(path.file_name().unwrap(), "code.typescript");
    assert_eq!(std::fs::read(path).unwrap(), surface.buffer().as_bytes());

    let doc = surface.preview();
    assert_eq!(surface.active_tab(), Tab::Preview);
    assert!(doc.contains("// tweaked"));
}

#[tokio::test(start_paused = true)]
async fn second_generation_replaces_local_edits() {
    let p = page();
    submit(&p, "first", ProjectType::Web, Language::JavaScript).await.unwrap();
    let first = p.generator.current().unwrap();

    let mut surface = CodeSurface::from_result(&first, Language::JavaScript, p.notes.clone());
    surface.set_buffer("// hand edited");
    surface.preview();
    assert_eq!(surface.active_tab(), Tab::Preview);

    let code = submit(&p, "second", ProjectType::Api, Language::JavaScript).await.unwrap();
    let second = p.generator.current().unwrap();
    assert_ne!(second.request_id, first.request_id);

    surface.load_result(&second);
    assert_eq!(surface.buffer(), code);
    assert!(surface.buffer().contains("\"second\""));
    assert_eq!(surface.active_tab(), Tab::Editor);
}

#[tokio::test(start_paused = true)]
async fn save_project_after_generation() {
    let p = page();
    submit(&p, "a shop", ProjectType::Web, Language::JavaScript).await.unwrap();
    p.generator.save_project().unwrap();
    assert_eq!(
        p.notes.titles(),
        vec!["Code generated successfully".to_string(), "Project saved".to_string()]
    );
}
