use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// ========================================
/// Generation parameters
/// ========================================

/// What kind of project the prompt describes.
///
/// Unknown strings are kept as `Other` so they still reach the template
/// catalog (which answers them with the generic fallback).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectType {
    Web,
    Api,
    Database,
    Component,
    Other(String),
}

impl ProjectType {
    pub fn as_str(&self) -> &str {
        match self {
            ProjectType::Web => "web",
            ProjectType::Api => "api",
            ProjectType::Database => "database",
            ProjectType::Component => "component",
            ProjectType::Other(s) => s,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ProjectType::Web => "Web Application",
            ProjectType::Api => "API / Backend",
            ProjectType::Database => "Database Schema",
            ProjectType::Component => "UI Component",
            ProjectType::Other(s) => s,
        }
    }
}

impl Default for ProjectType {
    fn default() -> Self {
        ProjectType::Web
    }
}

impl From<&str> for ProjectType {
    fn from(s: &str) -> Self {
        match s {
            "web" => ProjectType::Web,
            "api" => ProjectType::Api,
            "database" => ProjectType::Database,
            "component" => ProjectType::Component,
            other => ProjectType::Other(other.to_string()),
        }
    }
}

impl From<String> for ProjectType {
    fn from(s: String) -> Self {
        ProjectType::from(s.as_str())
    }
}

impl From<ProjectType> for String {
    fn from(p: ProjectType) -> Self {
        p.as_str().to_string()
    }
}

impl FromStr for ProjectType {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ProjectType::from(s))
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target language for the generated code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Language {
    JavaScript,
    TypeScript,
    Python,
    Java,
    CSharp,
    Other(String),
}

impl Language {
    pub fn as_str(&self) -> &str {
        match self {
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Python => "python",
            Language::Java => "java",
            Language::CSharp => "csharp",
            Language::Other(s) => s,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::Python => "Python",
            Language::Java => "Java",
            Language::CSharp => "C#",
            Language::Other(s) => s,
        }
    }

    /// Extension used when the generator page exports `project.<ext>`.
    /// Only javascript is shortened; every other language keeps its name.
    pub fn export_extension(&self) -> &str {
        match self {
            Language::JavaScript => "js",
            other => other.as_str(),
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::JavaScript
    }
}

impl From<&str> for Language {
    fn from(s: &str) -> Self {
        match s {
            "javascript" => Language::JavaScript,
            "typescript" => Language::TypeScript,
            "python" => Language::Python,
            "java" => Language::Java,
            "csharp" => Language::CSharp,
            other => Language::Other(other.to_string()),
        }
    }
}

impl From<String> for Language {
    fn from(s: String) -> Self {
        Language::from(s.as_str())
    }
}

impl From<Language> for String {
    fn from(l: Language) -> Self {
        l.as_str().to_string()
    }
}

impl FromStr for Language {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Language::from(s))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ========================================
/// Generation request/result
/// ========================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub id: Uuid,
    /// Raw text as submitted (not trimmed).
    pub prompt: String,
    pub project_type: ProjectType,
    pub language: Language,
    pub requested_at: DateTime<Utc>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, project_type: ProjectType, language: Language) -> Self {
        Self {
            id: Uuid::new_v4(),
            prompt: prompt.into(),
            project_type,
            language,
            requested_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub request_id: Uuid,
    pub source_text: String,
    pub generated_at: DateTime<Utc>,
}

/// ========================================
/// Dashboard projects
/// ========================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub last_updated: DateTime<Utc>,
}

/// ========================================
/// Notices (toasts)
/// ========================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), severity: Severity::Info }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), severity: Severity::Destructive }
    }
}
