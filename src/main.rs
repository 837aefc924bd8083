use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use fs_err as fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use uuid::Uuid;

use codekiller::cli::{self, Command, GenerateArgs, ProjectsArgs};
use codekiller::clipboard::CommandClipboard;
use codekiller::config::Config;
use codekiller::generator::Generator;
use codekiller::log::{self, ArtifactSink};
use codekiller::model::Language;
use codekiller::notice::DynNotifier;
use codekiller::projects::{self, ProjectAction, ProjectList, ProjectView};
use codekiller::prompt::{PromptInput, Submission};
use codekiller::provider;
use codekiller::surface::{self, CodeSurface};
use codekiller::ux;

const GENERATOR_PLACEHOLDER: &str = "Describe what you want to build in detail. For example: 'Create a responsive navigation menu with dropdown support for mobile devices.'";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();

    let mut cfg = Config::load_or_default(args.config.as_deref())?;
    if let Some(root) = &args.root {
        cfg.root = root.clone();
    }
    if args.debug {
        println!("debug: flag enabled");
        println!("debug: config {:?}", cfg);
    }

    match args.command {
        Command::Generate(g) => run_generate(g, cfg, args.debug).await,
        Command::Projects(p) => run_projects(p, &cfg),
        Command::Project { action, id, seed } => run_project_action(action, &id, seed, &cfg, args.debug),
        Command::Preview { file, out } => run_preview(&file, out, &cfg),
    }
}

async fn run_generate(g: GenerateArgs, mut cfg: Config, debug: bool) -> anyhow::Result<()> {
    if let Some(ms) = g.delay_ms {
        cfg.generation_delay_ms = ms;
    }
    if let Some(p) = g.progress {
        cfg.progress = p;
    }
    let project_type = g.project_type.unwrap_or_else(|| cfg.project_type.clone());
    let language = g.language.unwrap_or_else(|| cfg.language.clone());
    let root = PathBuf::from(&cfg.root);
    let out_dir = g.out.map(PathBuf::from).unwrap_or_else(|| root.join(&cfg.out_dir));

    let txid = Uuid::new_v4();
    if debug {
        log::print_planned_paths(&root, txid);
    }

    let notifier: DynNotifier = Arc::new(ux::ConsoleNotifier);
    let input = PromptInput::new(notifier.clone()).with_placeholder(GENERATOR_PLACEHOLDER);
    let generator = Generator::new(provider::make_provider(&cfg), notifier.clone()).with_debug(debug);

    println!(
        "{} {} · {}",
        "AI Code Generator".bold(),
        project_type.label().cyan(),
        language.label().cyan()
    );

    let text = match g.prompt {
        Some(p) => p,
        None => ux::read_prompt(&input.placeholder)?,
    };

    // ===== Idle -> Loading =====
    let req = match input.submit(&text, generator.is_loading(), |p| {
        generator.begin(p, project_type.clone(), language.clone())
    }) {
        Submission::Accepted(req) => req?,
        Submission::Empty | Submission::Disabled => return Ok(()),
    };

    // ===== Loading -> Generated =====
    let spinner = cfg
        .progress
        .then(|| ux::spinner(input.button_label(generator.is_loading())));
    let outcome = generator.finish(req.clone()).await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    let result = outcome?;

    if cfg.save_artifacts {
        let saved = log::save_generation(&root, txid, &req, &result)?;
        if debug {
            log::print_saved_paths("generate", &saved);
            log::print_json_debug("generate", &req, &result)?;
        }
    }

    // ===== Code surface =====
    let mut surface = CodeSurface::from_result(&result, language.clone(), notifier.clone()).with_debug(debug);
    if g.edit {
        let edited = ux::edit_in_editor(surface.buffer(), language.export_extension())?;
        surface.set_buffer(edited);
    }
    ux::print_code(&surface);

    if g.copy {
        let clipboard = CommandClipboard::detect();
        if debug {
            match clipboard.program() {
                Some(p) => println!("debug: clipboard tool {}", p.display()),
                None => println!("debug: no clipboard tool on PATH"),
            }
        }
        surface.copy(&clipboard);
    }
    if g.download {
        let path = surface.download(&out_dir, language.as_str())?;
        ux::print_written("Downloaded", &path, surface.buffer().len());
    }
    if g.export {
        // page-level export ships the generated text, not local edits
        let path = surface::write_download(&out_dir, "project", language.export_extension(), &result.source_text)?;
        ux::print_written("Exported", &path, result.source_text.len());
    }
    if g.save {
        let sink = ArtifactSink::new(&root, txid);
        surface.save(&sink);
        if let Some(path) = sink.last_saved() {
            ux::print_written("Saved", &path, surface.buffer().len());
        }
    }
    if g.save_project {
        generator.save_project()?;
    }
    if g.preview {
        let path = surface.write_preview(&out_dir)?;
        let bytes = fs::metadata(&path).map(|m| m.len() as usize).unwrap_or_default();
        ux::print_written("Preview", &path, bytes);
    }

    Ok(())
}

fn load_projects(seed: Option<String>, cfg: &Config) -> anyhow::Result<ProjectList> {
    match seed.or_else(|| cfg.seed_file.clone()) {
        Some(path) => ProjectList::load(Path::new(&path))
            .with_context(|| format!("failed to load project seed {}", path)),
        None => Ok(ProjectList::new(projects::demo_projects())),
    }
}

fn run_projects(p: ProjectsArgs, cfg: &Config) -> anyhow::Result<()> {
    let list = load_projects(p.seed, cfg)?;
    let cards = list.view(p.view, &p.query);

    if p.json {
        println!("{}", serde_json::to_string_pretty(&cards)?);
        return Ok(());
    }

    let title = match p.view {
        ProjectView::All => "All Projects",
        ProjectView::Recent => "Recent",
        ProjectView::Ai => "AI Generated",
        ProjectView::Deployed => "Deployed",
    };
    ux::print_projects(title, list.len(), &cards);
    Ok(())
}

fn run_project_action(
    action: ProjectAction,
    id: &str,
    seed: Option<String>,
    cfg: &Config,
    debug: bool,
) -> anyhow::Result<()> {
    let list = load_projects(seed, cfg)?;
    if debug && list.get(id).is_none() {
        println!("debug: no project with id {id} in the current list");
    }
    list.act(action, id, &ux::ConsoleNotifier);
    Ok(())
}

fn run_preview(file: &str, out: Option<String>, cfg: &Config) -> anyhow::Result<()> {
    let code = fs::read_to_string(file)?;
    let language = Path::new(file)
        .extension()
        .and_then(|e| e.to_str())
        .map(Language::from)
        .unwrap_or_else(|| cfg.language.clone());
    let out_dir = out
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new(&cfg.root).join(&cfg.out_dir));

    let notifier: DynNotifier = Arc::new(ux::ConsoleNotifier);
    let mut surface = CodeSurface::new(code, language, notifier);
    let path = surface.write_preview(&out_dir)?;
    let bytes = fs::metadata(&path).map(|m| m.len() as usize).unwrap_or_default();
    ux::print_written("Preview", &path, bytes);
    Ok(())
}
