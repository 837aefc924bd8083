use clap::{Args as ClapArgs, Parser, Subcommand};

use crate::model::{Language, ProjectType};
use crate::projects::{ProjectAction, ProjectView};

#[derive(Parser, Debug)]
#[command(name = "codekiller", version, about = "Prompt-to-code demo generator with sandboxed preview and project dashboard")]
pub struct Args {
    #[arg(long, global = true)]
    pub root: Option<String>,

    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, global = true, default_value_t = false)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Turn a prompt into code from the template catalog.
    Generate(GenerateArgs),
    /// List dashboard projects.
    Projects(ProjectsArgs),
    /// Trigger a card action on one project.
    Project {
        #[arg(value_enum)]
        action: ProjectAction,
        id: String,
        #[arg(long)]
        seed: Option<String>,
    },
    /// Build the sandboxed preview page for a code file.
    Preview {
        file: String,
        #[arg(long)]
        out: Option<String>,
    },
}

#[derive(ClapArgs, Debug)]
pub struct GenerateArgs {
    /// Prompt text; read from stdin when omitted.
    #[arg(long)]
    pub prompt: Option<String>,

    /// web | api | database | component (anything else uses the generic template)
    #[arg(short = 't', long)]
    pub project_type: Option<ProjectType>,

    /// javascript | typescript | python | java | csharp
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Open the generated code in $EDITOR before the other actions.
    #[arg(long, default_value_t = false)]
    pub edit: bool,

    #[arg(long, default_value_t = false)]
    pub copy: bool,

    /// Write code.<language> to the output directory.
    #[arg(long, default_value_t = false)]
    pub download: bool,

    /// Write project.<ext> to the output directory.
    #[arg(long, default_value_t = false)]
    pub export: bool,

    #[arg(long, default_value_t = false)]
    pub save: bool,

    /// Save the generated project to the dashboard.
    #[arg(long, default_value_t = false)]
    pub save_project: bool,

    /// Write preview.html hosting the sandboxed iframe.
    #[arg(long, default_value_t = false)]
    pub preview: bool,

    #[arg(long)]
    pub out: Option<String>,

    #[arg(long)]
    pub delay_ms: Option<u64>,

    #[arg(long)]
    pub progress: Option<bool>,
}

#[derive(ClapArgs, Debug)]
pub struct ProjectsArgs {
    #[arg(long, default_value = "")]
    pub query: String,

    #[arg(long, value_enum, default_value_t = ProjectView::All)]
    pub view: ProjectView,

    #[arg(long)]
    pub seed: Option<String>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn free_form_language_is_accepted() {
        let args = Args::try_parse_from([
            "codekiller", "generate", "--prompt", "x", "-t", "api", "-l", "java",
        ])
        .unwrap();
        match args.command {
            Command::Generate(g) => {
                assert_eq!(g.project_type, Some(ProjectType::Api));
                assert_eq!(g.language, Some(Language::Java));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn project_action_parses() {
        let args = Args::try_parse_from(["codekiller", "project", "delete", "3", "--debug"]).unwrap();
        assert!(args.debug);
        assert!(matches!(
            args.command,
            Command::Project { action: ProjectAction::Delete, ref id, .. } if id == "3"
        ));
    }
}
