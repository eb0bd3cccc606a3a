use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ghactivity")]
#[command(about = "Monthly contributor activity statistics from GitHub issues and pull requests")]
#[command(version)]
pub struct Cli {
    #[arg(long, help = "Repository in owner/name form", default_value = "allenai/allennlp")]
    pub repo: String,

    #[arg(long, alias = "access_token", env = "GITHUB_TOKEN", help = "GitHub access token (not needed with --load)")]
    pub access_token: Option<String>,

    #[arg(long, value_name = "PATH", help = "Save filtered records to an NDJSON file")]
    pub save: Option<PathBuf>,

    #[arg(long, value_name = "PATH", help = "Load records from an NDJSON file instead of fetching")]
    pub load: Option<PathBuf>,

    #[arg(long, help = "Drop pull request records before aggregating")]
    pub exclude_pull_requests: bool,

    #[arg(long, help = "Drop issue records before aggregating")]
    pub exclude_issues: bool,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        crate::stats::exec(self)
    }
}
