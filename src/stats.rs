use crate::aggregate::aggregate;
use crate::cli::Cli;
use crate::extract::extract;
use crate::fetch::{Fetcher, GithubSource};
use crate::model::{Contribution, ContributionKind, PeriodActivity};
use anyhow::Context;
use console::style;

pub fn exec(cli: Cli) -> anyhow::Result<()> {
    let records = match &cli.load {
        Some(path) => crate::store::load(path)
            .with_context(|| format!("Failed to load records from {}", path.display()))?,
        None => fetch_records(&cli).context("Failed to fetch contribution history")?,
    };
    log::debug!("collected {} records", records.len());

    let records = apply_filters(records, cli.exclude_pull_requests, cli.exclude_issues);

    if let Some(path) = &cli.save {
        crate::store::save(&records, path)
            .with_context(|| format!("Failed to save records to {}", path.display()))?;
    }

    let activity = aggregate(&records);
    output_report(records.len(), &activity);
    Ok(())
}

fn fetch_records(cli: &Cli) -> anyhow::Result<Vec<Contribution>> {
    let source = GithubSource::new().context("Failed to build HTTP client")?;
    let fetcher = Fetcher::new(&source, cli.access_token.as_deref());
    let url = format!("https://api.github.com/repos/{}/issues", cli.repo);

    let outcome = fetcher.fetch(&url);
    if let Some(err) = outcome.error {
        return Err(err)
            .with_context(|| format!("Fetch aborted after {} complete pages", outcome.pages.len()));
    }

    let mut records = Vec::new();
    for page in &outcome.pages {
        for item in page {
            records.push(extract(item)?);
        }
    }
    Ok(records)
}

fn apply_filters(
    records: Vec<Contribution>,
    exclude_pull_requests: bool,
    exclude_issues: bool,
) -> Vec<Contribution> {
    records
        .into_iter()
        .filter(|r| match r.kind {
            ContributionKind::PullRequest => !exclude_pull_requests,
            ContributionKind::Issue => !exclude_issues,
        })
        .collect()
}

fn output_report(total: usize, activity: &[PeriodActivity]) {
    println!("{}", style("Contribution Activity").bold());
    println!("{}", "─".repeat(50));
    println!("Total records: {}", style(total).cyan());

    for group in activity {
        let users: Vec<&str> = group.active_users.iter().map(String::as_str).collect();
        println!(
            "{}  {:>4} active  {}",
            style(group.period).green(),
            style(group.active_users.len()).cyan(),
            users.join(", ")
        );
    }
}
