use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone, Utc};
use clap::ValueEnum;
use fs_err as fs;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::model::{Notice, Project};
use crate::notice::Notifier;

pub const AI_GENERATED_TAG: &str = "AI Generated";
pub const DEPLOYED_TAG: &str = "Deployed";
const RECENT_LIMIT: usize = 3;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectView {
    All,
    Recent,
    Ai,
    Deployed,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectAction {
    Edit,
    Delete,
    View,
    Code,
}

impl ProjectAction {
    pub fn notice(self, id: &str) -> Notice {
        match self {
            ProjectAction::Edit => Notice::info("Edit project", format!("Editing project with ID: {id}")),
            ProjectAction::Delete => Notice::destructive("Delete project", format!("Deleting project with ID: {id}")),
            ProjectAction::View => Notice::info("View project", format!("Viewing project with ID: {id}")),
            ProjectAction::Code => Notice::info("View code", format!("Viewing code for project with ID: {id}")),
        }
    }
}

/// Dashboard listing over a caller-owned set of projects. Never mutated.
#[derive(Debug, Clone)]
pub struct ProjectList {
    projects: Vec<Project>,
}

impl ProjectList {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// Read a JSON (`.json`) or YAML (anything else) list of projects.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        let projects: Vec<Project> = if is_json {
            serde_json::from_str(&raw).with_context(|| format!("invalid project list in {}", path.display()))?
        } else {
            serde_yaml::from_str(&raw).with_context(|| format!("invalid project list in {}", path.display()))?
        };
        Ok(Self::new(projects))
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Case-insensitive substring match on title, description or any tag.
    pub fn filter(&self, query: &str) -> Vec<&Project> {
        let q = query.to_lowercase();
        self.projects
            .iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&q)
                    || p.description.to_lowercase().contains(&q)
                    || p.tags.iter().any(|t| t.to_lowercase().contains(&q))
            })
            .collect()
    }

    /// Cards for one dashboard tab. `Ai` and `Deployed` pick rows purely by
    /// position and tag them for display; nothing on the project backs it.
    pub fn view(&self, view: ProjectView, query: &str) -> Vec<Project> {
        let filtered = self.filter(query);
        match view {
            ProjectView::All => filtered.into_iter().cloned().collect(),
            ProjectView::Recent => {
                let mut recent: Vec<Project> = filtered.into_iter().cloned().collect();
                recent.sort_by(|a, b| b.last_updated.cmp(&a.last_updated));
                recent.truncate(RECENT_LIMIT);
                recent
            }
            ProjectView::Ai => every_nth(filtered, 2, AI_GENERATED_TAG),
            ProjectView::Deployed => every_nth(filtered, 3, DEPLOYED_TAG),
        }
    }

    /// Edit/Delete/View/Code only announce themselves.
    pub fn act(&self, action: ProjectAction, id: &str, notifier: &dyn Notifier) {
        notifier.notify(action.notice(id));
    }
}

fn every_nth(filtered: Vec<&Project>, n: usize, tag: &str) -> Vec<Project> {
    filtered
        .into_iter()
        .enumerate()
        .filter(|(i, _)| i % n == 0)
        .map(|(_, p)| {
            let mut card = p.clone();
            card.tags.push(tag.to_string());
            card
        })
        .collect()
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .unwrap_or_default()
}

fn project(id: &str, title: &str, description: &str, tags: &[&str], updated: DateTime<Utc>) -> Project {
    Project {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        last_updated: updated,
    }
}

/// The five demo projects shown on a fresh dashboard.
pub fn demo_projects() -> Vec<Project> {
    vec![
        project(
            "1",
            "E-commerce Website",
            "A fully functional e-commerce website with product listings, cart, and checkout functionality.",
            &["React", "Node.js", "MongoDB"],
            at(2023, 6, 15, 12, 0),
        ),
        project(
            "2",
            "Task Management App",
            "A task management application with drag-and-drop functionality, task prioritization, and team collaboration features.",
            &["Vue.js", "Firebase", "Tailwind"],
            at(2023, 7, 22, 15, 30),
        ),
        project(
            "3",
            "Weather Dashboard",
            "A weather dashboard that displays current weather conditions and forecasts for multiple locations.",
            &["JavaScript", "API", "CSS"],
            at(2023, 8, 5, 9, 45),
        ),
        project(
            "4",
            "Personal Portfolio",
            "A personal portfolio website showcasing projects, skills, and contact information.",
            &["HTML", "CSS", "JavaScript"],
            at(2023, 9, 10, 14, 20),
        ),
        project(
            "5",
            "Blog Platform",
            "A blog platform with content management system, user authentication, and commenting functionality.",
            &["Next.js", "Prisma", "PostgreSQL"],
            at(2023, 10, 18, 11, 15),
        ),
    ]
}
