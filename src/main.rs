mod cli;

use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::Path;
use std::process::{ExitCode, Termination};

use anyhow::{bail, Context, Result};
use clap::Parser;

use linediff::config;
use linediff::diff::{compute_diff, compute_stats, split_lines, DiffStats};
use linediff::language::language_label;
use linediff::logging;
use linediff::render::{render_json, DiffViewMode, RenderOptions, Renderer};
use linediff::source::ContentSource;
use linediff::theme::Theme;

use crate::cli::{Cli, ColorChoice};

const FALLBACK_WIDTH: usize = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DiffExitStatus {
    NotDifferent,
    Different,
    Trouble,
}

impl DiffExitStatus {
    // Same convention as diff(1)
    fn status_code(&self) -> u8 {
        match self {
            DiffExitStatus::NotDifferent => 0,
            DiffExitStatus::Different => 1,
            DiffExitStatus::Trouble => 2,
        }
    }
}

impl Termination for DiffExitStatus {
    fn report(self) -> ExitCode {
        ExitCode::from(self.status_code())
    }
}

fn main() -> DiffExitStatus {
    color_eyre::install().ok();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(status) => status,
        Err(e) => {
            eprintln!("ldiff: {e:#}");
            DiffExitStatus::Trouble
        }
    }
}

fn run(cli: &Cli) -> Result<DiffExitStatus> {
    let (old_source, new_source) = resolve_sources(cli)?;

    let old = old_source
        .load()
        .with_context(|| format!("Could not load {}", old_source.describe()))?;
    let new = new_source
        .load()
        .with_context(|| format!("Could not load {}", new_source.describe()))?;
    ensure_present(&old_source, &old, &new_source, &new)?;

    // Load config, apply CLI overrides
    let mut config = config::load_config();
    if let Some(ref theme_name) = cli.theme {
        config.theme = Theme::from_name(theme_name);
    }

    config.check_table_size(
        split_lines(old.as_deref().unwrap_or("")).len(),
        split_lines(new.as_deref().unwrap_or("")).len(),
    )?;

    let lines = compute_diff(old.as_deref(), new.as_deref());
    let stats = compute_stats(&lines);
    tracing::debug!(
        lines = lines.len(),
        added = stats.added,
        removed = stats.removed,
        "computed diff"
    );

    let label = display_label(cli, &new_source);
    let language = language_label(Path::new(&label));

    let mode = resolve_view_mode(cli, config.unified);
    let color = match cli.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stdout().is_terminal(),
    };
    let width = crossterm::terminal::size()
        .map(|(w, _)| w as usize)
        .unwrap_or(FALLBACK_WIDTH);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.stats {
        writeln!(out, "+{} -{}", stats.added, stats.removed)?;
    } else if cli.json {
        render_json(&mut out, &label, language, stats, &lines, mode)?;
    } else {
        let renderer = Renderer::new(
            &config.theme,
            RenderOptions {
                mode,
                context: cli.context.or(config.context_lines),
                color,
                width,
            },
        );
        renderer.render_header(&mut out, &label, language, stats)?;
        renderer.render(&mut out, &lines)?;
    }
    out.flush()?;

    Ok(exit_status(stats))
}

/// OLD comes from `--rev` when given. Standard input can feed one side only.
fn resolve_sources(cli: &Cli) -> Result<(ContentSource, ContentSource)> {
    let old_source = match cli.rev {
        Some(ref rev) => ContentSource::GitRevision {
            rev: rev.clone(),
            path: cli.old.clone().into(),
        },
        None => ContentSource::from_arg(&cli.old),
    };
    let new_source = ContentSource::from_arg(&cli.new);
    if old_source == ContentSource::Stdin && new_source == ContentSource::Stdin {
        bail!("standard input can only be used for one side");
    }
    Ok((old_source, new_source))
}

/// One missing side is a creation or deletion; both missing is an error.
fn ensure_present(
    old_source: &ContentSource,
    old: &Option<String>,
    new_source: &ContentSource,
    new: &Option<String>,
) -> Result<()> {
    if old.is_none() && new.is_none() {
        bail!(
            "neither {} nor {} exists",
            old_source.describe(),
            new_source.describe()
        );
    }
    Ok(())
}

/// `--label` wins, then whichever side names a real file, preferring NEW.
fn display_label(cli: &Cli, new_source: &ContentSource) -> String {
    cli.label.clone().unwrap_or_else(|| {
        if *new_source == ContentSource::Stdin {
            cli.old.clone()
        } else {
            cli.new.clone()
        }
    })
}

// Merge CLI flags with config-file settings (CLI wins)
fn resolve_view_mode(cli: &Cli, config_unified: Option<bool>) -> DiffViewMode {
    let unified = if cli.unified {
        true
    } else if cli.split {
        false
    } else {
        config_unified.unwrap_or(false)
    };
    if unified {
        DiffViewMode::Unified
    } else {
        DiffViewMode::Split
    }
}

fn exit_status(stats: DiffStats) -> DiffExitStatus {
    if stats.is_empty() {
        DiffExitStatus::NotDifferent
    } else {
        DiffExitStatus::Different
    }
}
