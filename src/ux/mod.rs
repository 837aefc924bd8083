use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use colored::Colorize;
use fs_err as fs;
use indicatif::{ProgressBar, ProgressStyle};
use std::ffi::OsString;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Duration;

use crate::exec;
use crate::model::{Notice, Project, Severity};
use crate::notice::Notifier;
use crate::safety;
use crate::surface::CodeSurface;

/// Prints notices to the terminal, destructive ones on stderr.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        match notice.severity {
            Severity::Info => {
                println!("{} {}", "✔".green().bold(), notice.title.bold());
                println!("  {}", notice.description.dimmed());
            }
            Severity::Destructive => {
                eprintln!("{} {}", "✘".red().bold(), notice.title.red().bold());
                eprintln!("  {}", notice.description);
            }
        }
    }
}

/// In-progress affordance shown while a generation is loading.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Read one line of prompt text from stdin.
pub fn read_prompt(placeholder: &str) -> Result<String> {
    eprint!("{} ", format!("{placeholder}\n>").dimmed());
    io::stderr().flush().ok();
    let mut s = String::new();
    io::stdin().lock().read_line(&mut s)?;
    Ok(s.trim_end_matches(['\r', '\n']).to_string())
}

/// Open `text` in `$VISUAL`/`$EDITOR` (falling back to nano or vi) and return the edited text.
pub fn edit_in_editor(text: &str, extension: &str) -> Result<String> {
    let suffix = if safety::extension_is_safe(extension) {
        format!(".{extension}")
    } else {
        ".txt".to_string()
    };
    let mut file = tempfile::Builder::new()
        .prefix("codekiller-")
        .suffix(&suffix)
        .tempfile()?;
    file.write_all(text.as_bytes())?;
    file.flush()?;

    let editor = std::env::var("VISUAL")
        .or_else(|_| std::env::var("EDITOR"))
        .ok()
        .filter(|e| !e.trim().is_empty())
        .or_else(|| {
            ["nano", "vi"]
                .iter()
                .find_map(|e| which::which(e).ok().map(|p| p.display().to_string()))
        })
        .ok_or_else(|| anyhow!("no editor found; set $EDITOR"))?;

    let mut parts = editor.split_whitespace();
    let program = parts.next().ok_or_else(|| anyhow!("empty $EDITOR"))?;
    let mut args: Vec<OsString> = parts.map(OsString::from).collect();
    args.push(file.path().as_os_str().to_owned());
    exec::run_interactive(program, &args)?;

    Ok(fs::read_to_string(file.path())?)
}

pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

pub fn print_code(surface: &CodeSurface) {
    let header = format!(" {} ", surface.language_label());
    println!("\n{}", "┏━━━━━━━━━━━━━━━━━━━━━━━━ Generated Code ━━━━━━━━━━━━━━━━━━━━━━━━┓".bold());
    println!("{}", header.on_bright_black().white().bold());
    for (i, line) in surface.buffer().lines().enumerate() {
        println!("{} {}", format!("{:>4}", i + 1).dimmed(), line);
    }
    println!("{}", "┗━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┛".bold());
}

pub fn print_projects(title: &str, total: usize, cards: &[Project]) {
    println!("\n{}  {}", title.bold(), format!("(total projects: {total})").dimmed());
    if cards.is_empty() {
        println!("(no projects match)");
        return;
    }
    for p in cards {
        let tags = p
            .tags
            .iter()
            .map(|t| format!("[{}]", t).cyan().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        println!("\n{} {}  {}", format!("#{}", p.id).dimmed(), p.title.bold(), tags);
        println!("  {}", p.description);
        println!("  {}", format!("Last updated: {}", format_date(&p.last_updated)).dimmed());
    }
    println!();
}

pub fn print_written(what: &str, path: &Path, bytes: usize) {
    println!(
        "{} {} ({})",
        format!("{what}:").bold(),
        path.display(),
        humansize::format_size(bytes, humansize::DECIMAL)
    );
}
