//! Canned source templates keyed by (language, project type).

use crate::model::{Language, ProjectType};

pub mod bodies;

/// Which template body a (language, project type) pair maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    ReactFetchApp,
    ExpressCrudServer,
    ReactDropdown,
    FlaskCrudServer,
    SqlAlchemySchema,
    Fallback,
}

impl TemplateKind {
    pub fn body(self) -> &'static str {
        match self {
            TemplateKind::ReactFetchApp => bodies::REACT_FETCH_APP,
            TemplateKind::ExpressCrudServer => bodies::EXPRESS_CRUD_SERVER,
            TemplateKind::ReactDropdown => bodies::REACT_DROPDOWN,
            TemplateKind::FlaskCrudServer => bodies::FLASK_CRUD_SERVER,
            TemplateKind::SqlAlchemySchema => bodies::SQLALCHEMY_SCHEMA,
            TemplateKind::Fallback => bodies::FALLBACK,
        }
    }
}

/// Language family first, then project type. JavaScript and TypeScript share
/// one family; anything unmatched lands on the fallback.
pub fn select(project_type: &ProjectType, language: &Language) -> TemplateKind {
    match language {
        Language::JavaScript | Language::TypeScript => match project_type {
            ProjectType::Web => TemplateKind::ReactFetchApp,
            ProjectType::Api => TemplateKind::ExpressCrudServer,
            ProjectType::Component => TemplateKind::ReactDropdown,
            _ => TemplateKind::Fallback,
        },
        Language::Python => match project_type {
            ProjectType::Api => TemplateKind::FlaskCrudServer,
            ProjectType::Database => TemplateKind::SqlAlchemySchema,
            _ => TemplateKind::Fallback,
        },
        _ => TemplateKind::Fallback,
    }
}

pub fn is_specialised(project_type: &str, language: &str) -> bool {
    select(&ProjectType::from(project_type), &Language::from(language)) != TemplateKind::Fallback
}

/// Render the template for any pair of strings. Never fails.
pub fn render(prompt: &str, project_type: &str, language: &str) -> String {
    render_typed(prompt, &ProjectType::from(project_type), &Language::from(language))
}

pub fn render_typed(prompt: &str, project_type: &ProjectType, language: &Language) -> String {
    let body = select(project_type, language).body();
    interpolate(
        body,
        &[
            ("prompt", prompt),
            ("project_type", project_type.as_str()),
            ("language", language.as_str()),
        ],
    )
}

/// Single pass over `template`, replacing `{{key}}` with its value.
/// Substituted text is never rescanned; unknown keys are left untouched.
fn interpolate(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 64);
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let hit = after.find("}}").and_then(|end| {
            let key = &after[..end];
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, end))
        });
        match hit {
            Some((value, end)) => {
                out.push_str(value);
                rest = &after[end + 2..];
            }
            None => {
                out.push_str("{{");
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
