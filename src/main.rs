use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};

use git_chronicle::boundary::BoundaryWarning;
use git_chronicle::changelog::{
    render_json, render_markdown, render_table, text_table, ChangeSet, OutputFormat,
};
use git_chronicle::config::{self, Config};
use git_chronicle::domain::{BumpPolicy, SemanticVersion};
use git_chronicle::git::{GitRepository, Repository};
use git_chronicle::release::{plan_bump, plan_release};
use git_chronicle::ui;

#[derive(Parser)]
#[command(
    name = "git-chronicle",
    about = "Generate changelogs and manage semantic version releases from conventional commits"
)]
struct Cli {
    #[arg(short, long, help = "Custom configuration file path", global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a changelog from commits in a ref range
    Changelog {
        #[arg(long, help = "Starting ref (default: latest version tag)")]
        from: Option<String>,

        #[arg(long, default_value = "HEAD", help = "Ending ref")]
        to: String,

        #[arg(short = 'v', long, help = "Version string for the changelog header")]
        version: Option<String>,

        #[arg(
            short,
            long,
            default_value = "markdown",
            help = "Output format: markdown, json or table"
        )]
        format: String,

        #[arg(
            short,
            long,
            help = "Output file (markdown only); the entry is prepended below an existing header"
        )]
        output: Option<PathBuf>,

        #[arg(long, help = "Hyperlink the version header to this comparison URL")]
        compare_url: Option<String>,

        #[arg(long, help = "Generate one entry per version tag")]
        all_tags: bool,
    },

    /// Show the current version from the latest tag
    Current,

    /// Show the suggested next version based on commits
    Next,

    /// Bump the version under an explicit policy and create a tag
    Bump {
        #[arg(help = "major, minor, patch, premajor, preminor, prepatch or prerelease")]
        policy: String,

        #[arg(long, help = "Pre-release identifier (default from config)")]
        preid: Option<String>,

        #[arg(short, long, help = "Tag message")]
        message: Option<String>,

        #[arg(short = 'd', long, help = "Show what would happen without making changes")]
        dry_run: bool,

        #[arg(short = 'y', long, help = "Skip confirmation prompts")]
        yes: bool,
    },

    /// Analyze commits, pick the bump and create the tag in one step
    Release {
        #[arg(long, help = "Pre-release identifier (default from config)")]
        preid: Option<String>,

        #[arg(short, long, help = "Tag message")]
        message: Option<String>,

        #[arg(short = 'd', long, help = "Show what would happen without making changes")]
        dry_run: bool,

        #[arg(short = 'y', long, help = "Skip confirmation prompts")]
        yes: bool,
    },

    /// List version tags with date and message
    Tags,
}

fn main() {
    if let Err(e) = run() {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load_config(cli.config.as_deref())?;
    let repo = GitRepository::discover()?;

    match cli.command {
        Command::Changelog {
            from,
            to,
            version,
            format,
            output,
            compare_url,
            all_tags,
        } => cmd_changelog(
            &repo,
            &config,
            from,
            &to,
            version,
            &format,
            output.as_deref(),
            compare_url.as_deref(),
            all_tags,
        ),
        Command::Current => cmd_current(&repo),
        Command::Next => cmd_next(&repo, &config),
        Command::Bump {
            policy,
            preid,
            message,
            dry_run,
            yes,
        } => cmd_bump(&repo, &config, &policy, preid, message, dry_run, yes),
        Command::Release {
            preid,
            message,
            dry_run,
            yes,
        } => cmd_release(&repo, &config, preid, message, dry_run, yes),
        Command::Tags => cmd_tags(&repo),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_changelog(
    repo: &dyn Repository,
    config: &Config,
    from: Option<String>,
    to: &str,
    version: Option<String>,
    format: &str,
    output: Option<&Path>,
    compare_url: Option<&str>,
    all_tags: bool,
) -> Result<()> {
    if all_tags {
        return cmd_changelog_all_tags(repo, config, output);
    }

    let format: OutputFormat = format.parse()?;

    // Default the range start to the newest version tag
    let from = match from {
        Some(from) => Some(from),
        None => {
            let latest = repo.list_version_tags()?.into_iter().next();
            if let Some(tag) = &latest {
                ui::display_status(&format!("Using {} as starting point", tag));
            }
            latest
        }
    };

    let commits = repo.commits_between(from.as_deref(), to)?;
    if commits.is_empty() {
        ui::display_status("No commits found in range");
        return Ok(());
    }

    let version = version.unwrap_or_else(|| config.changelog.unreleased_label.clone());
    let date = today();

    match format {
        OutputFormat::Markdown => {
            let changeset = ChangeSet::from_commits(&commits);
            let entry = render_markdown(&version, &date, &changeset, compare_url);
            match output {
                Some(path) => write_changelog(path, &entry)?,
                None => println!("{}", entry),
            }
        }
        OutputFormat::Json => println!("{}", render_json(&commits)?),
        OutputFormat::Table => println!("{}", render_table(&commits)),
    }
    Ok(())
}

fn cmd_changelog_all_tags(
    repo: &dyn Repository,
    config: &Config,
    output: Option<&Path>,
) -> Result<()> {
    let tags = repo.list_version_tags()?;
    let mut parts = Vec::new();

    // Unreleased changes above the newest tagged entry
    if let Some(newest) = tags.first() {
        let unreleased = repo.commits_between(Some(newest), "HEAD")?;
        if !unreleased.is_empty() {
            let changeset = ChangeSet::from_commits(&unreleased);
            parts.push(render_markdown(
                &config.changelog.unreleased_label,
                &today(),
                &changeset,
                None,
            ));
        }
    }

    for (i, tag) in tags.iter().enumerate() {
        let previous = tags.get(i + 1).map(String::as_str);
        let commits = repo.commits_between(previous, tag)?;
        if commits.is_empty() {
            continue;
        }
        let date = repo.tag_details(tag)?.date;
        let changeset = ChangeSet::from_commits(&commits);
        parts.push(render_markdown(tag, &date, &changeset, None));
    }

    if parts.is_empty() {
        ui::display_status("No commits found");
        return Ok(());
    }

    let changelog = parts.join("\n");
    match output {
        Some(path) => write_changelog(path, &changelog)?,
        None => println!("{}", changelog),
    }
    Ok(())
}

fn cmd_current(repo: &dyn Repository) -> Result<()> {
    match repo.list_version_tags()?.first() {
        Some(tag) => println!("Current version: {}", tag),
        None => ui::display_status("No version tags found"),
    }
    Ok(())
}

fn cmd_next(repo: &dyn Repository, config: &Config) -> Result<()> {
    let tags = repo.list_version_tags()?;
    let latest = tags.first().cloned();

    let commits = repo.commits_between(latest.as_deref(), "HEAD")?;
    if commits.is_empty() {
        ui::display_status("No new commits since last release");
        return Ok(());
    }

    let (suggested, next) = plan_release(
        latest.as_deref(),
        &config.release.base_version,
        &commits,
        &config.release.preid,
    )?;

    ui::display_commit_overview(&commits);
    println!(
        "\nCurrent version:  {}",
        latest.as_deref().unwrap_or(&config.release.base_version)
    );
    println!("Commits since:    {}", commits.len());
    println!("Suggested bump:   {}", suggested);
    println!("Next version:     {}", next);
    Ok(())
}

fn cmd_bump(
    repo: &dyn Repository,
    config: &Config,
    policy: &str,
    preid: Option<String>,
    message: Option<String>,
    dry_run: bool,
    yes: bool,
) -> Result<()> {
    let policy: BumpPolicy = policy.parse()?;
    let preid = preid.unwrap_or_else(|| config.release.preid.clone());

    let tags = repo.list_version_tags()?;
    let latest = tags.first().cloned();

    let next = match &latest {
        Some(tag) => match SemanticVersion::parse(tag) {
            Ok(current) => current.bump(policy, &preid),
            Err(e) => {
                let warning = BoundaryWarning::UnparsableTag {
                    tag: tag.clone(),
                    reason: e.to_string(),
                };
                ui::display_boundary_warning(&warning);

                if !yes
                    && !dry_run
                    && !ui::confirm_action(&format!(
                        "Start over from base {} and continue?",
                        config.release.base_version
                    ))?
                {
                    println!("Operation cancelled by user.");
                    return Ok(());
                }
                plan_bump(None, &config.release.base_version, policy, &preid)?
            }
        },
        // No tags yet: the policy applies to the configured base version
        None => plan_bump(None, &config.release.base_version, policy, &preid)?,
    };

    if let Some(tag) = &latest {
        let commits = repo.commits_between(Some(tag), "HEAD")?;
        if commits.is_empty() {
            let warning = BoundaryWarning::NoNewCommits {
                latest_tag: tag.clone(),
                current_commit_hash: repo.head_short_hash()?,
            };
            ui::display_boundary_warning(&warning);

            if !yes && !dry_run && !ui::confirm_action("Continue with no new commits?")? {
                println!("Operation cancelled by user.");
                return Ok(());
            }
        }
    }

    finish_tagging(repo, latest.as_deref(), &next.to_string(), message, dry_run, yes)
}

fn cmd_release(
    repo: &dyn Repository,
    config: &Config,
    preid: Option<String>,
    message: Option<String>,
    dry_run: bool,
    yes: bool,
) -> Result<()> {
    let preid = preid.unwrap_or_else(|| config.release.preid.clone());

    let tags = repo.list_version_tags()?;
    let latest = tags.first().cloned();

    let commits = repo.commits_between(latest.as_deref(), "HEAD")?;
    if commits.is_empty() {
        ui::display_status("No commits to release");
        return Ok(());
    }

    let (policy, next) = plan_release(
        latest.as_deref(),
        &config.release.base_version,
        &commits,
        &preid,
    )?;

    ui::display_commit_overview(&commits);
    println!("\nSuggested bump:   {}", policy);

    finish_tagging(repo, latest.as_deref(), &next.to_string(), message, dry_run, yes)
}

/// Shared tail of the bump and release flows: dirty-tree warning, proposed
/// version display, confirmation and tag creation
fn finish_tagging(
    repo: &dyn Repository,
    current: Option<&str>,
    next_tag: &str,
    message: Option<String>,
    dry_run: bool,
    yes: bool,
) -> Result<()> {
    if repo.is_work_tree_dirty()? {
        ui::display_boundary_warning(&BoundaryWarning::DirtyWorkTree);
        if !yes && !dry_run && !ui::confirm_action("Continue anyway?")? {
            println!("Operation cancelled by user.");
            return Ok(());
        }
    }

    ui::display_proposed_version(current, next_tag);

    if dry_run {
        ui::display_status("Dry run - no changes made");
        return Ok(());
    }

    if !yes && !ui::confirm_action(&format!("Create tag {}?", next_tag))? {
        println!("Operation cancelled by user.");
        return Ok(());
    }

    let message = message.unwrap_or_else(|| format!("Release {}", next_tag));
    repo.create_tag(next_tag, &message)?;
    ui::display_success(&format!("Created tag {}", next_tag));
    println!("\nTo push: git push origin {}", next_tag);
    Ok(())
}

fn cmd_tags(repo: &dyn Repository) -> Result<()> {
    let tags = repo.list_version_tags()?;
    if tags.is_empty() {
        ui::display_status("No version tags found");
        return Ok(());
    }

    let mut rows = Vec::new();
    for tag in &tags {
        let details = repo.tag_details(tag)?;
        rows.push(vec![tag.clone(), details.date, details.message]);
    }
    println!("{}", text_table(&["Version", "Date", "Message"], &rows));
    Ok(())
}

fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Write a changelog entry, prepending it below an existing `# ` header
fn write_changelog(path: &Path, entry: &str) -> Result<()> {
    let merged = if path.exists() {
        let existing = fs::read_to_string(path)?;
        if existing.starts_with("# ") {
            match existing.find("\n\n") {
                Some(header_end) => format!(
                    "{}{}\n{}",
                    &existing[..header_end + 2],
                    entry,
                    &existing[header_end + 2..]
                ),
                None => format!("{}\n{}", existing, entry),
            }
        } else {
            format!("{}\n{}", entry, existing)
        }
    } else {
        entry.to_string()
    };

    fs::write(path, merged)?;
    ui::display_success(&format!("Changelog written to {}", path.display()));
    Ok(())
}
