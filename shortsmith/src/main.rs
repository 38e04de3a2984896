//! shortsmith - short-form video content planner
//!
//! Generate ideas, a paced script, a shot list, a release schedule and a
//! production board from one channel profile.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use shortsmith_core::config::load_profile;
use shortsmith_core::export::{render_markdown, to_json, write_plan};
use shortsmith_core::format::{format_hashtags, format_release_date, format_seconds};
use shortsmith_core::{
    parse_keywords, AutomationPlan, ChannelProfile, Config, PlanSession, RandomSource,
    SeededRandom, SystemClock, ThreadRandom, VideoIdea,
};

#[derive(Parser, Debug)]
#[command(name = "shortsmith")]
#[command(about = "Plan a batch of short-form videos from a channel profile")]
#[command(version)]
struct Args {
    /// Config file (default: ~/.config/shortsmith/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Channel profile file (TOML); replaces the configured profile
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Channel name
    #[arg(long)]
    channel: Option<String>,

    /// Channel niche
    #[arg(long)]
    niche: Option<String>,

    /// Target audience
    #[arg(long)]
    audience: Option<String>,

    /// Comma-separated keywords (e.g. "AI workflow, viral hooks")
    #[arg(long)]
    keywords: Option<String>,

    /// Owner for the non-delegated tasks (default: channel name)
    #[arg(long)]
    owner: Option<String>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Idea to build the script for (1-based, default: 1)
    #[arg(long)]
    select: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the JSON export file instead of printing the plan
    #[arg(long)]
    export: bool,

    /// Directory for --export (default: config export.dir or current dir)
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Md,
    Json,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;
    let _log_guard = shortsmith_core::logging::init(&config.logging).ok();

    let profile = build_profile(&args, &config)?;
    let owner = args.owner.clone().or_else(|| config.planner.owner.clone());
    let seed = args.seed.or(config.planner.seed);

    tracing::info!(channel = %profile.channel_name, ?seed, "Starting planning run");

    match seed {
        Some(seed) => run(&args, &config, profile, owner, SeededRandom::new(seed)),
        None => run(&args, &config, profile, owner, ThreadRandom::new()),
    }
}

/// Profile precedence: --profile file, then config, then individual flags.
fn build_profile(args: &Args, config: &Config) -> Result<ChannelProfile> {
    let mut profile = match &args.profile {
        Some(path) => load_profile(path)
            .with_context(|| format!("failed to load profile {}", path.display()))?,
        None => config.profile.clone(),
    };

    if let Some(channel) = &args.channel {
        profile.channel_name = channel.clone();
    }
    if let Some(niche) = &args.niche {
        profile.niche = niche.clone();
    }
    if let Some(audience) = &args.audience {
        profile.audience = audience.clone();
    }
    if let Some(keywords) = &args.keywords {
        profile.keywords = parse_keywords(keywords);
    }

    Ok(profile)
}

fn run<R: RandomSource>(
    args: &Args,
    config: &Config,
    profile: ChannelProfile,
    owner: Option<String>,
    rng: R,
) -> Result<()> {
    let mut session = PlanSession::new(profile, rng, SystemClock);
    if let Some(owner) = owner {
        session = session.with_owner(owner);
    }

    session.launch();

    if let Some(choice) = args.select {
        if choice == 0 {
            anyhow::bail!("--select is 1-based; use 1 for the first idea");
        }
        session
            .select_idea_at(choice - 1)
            .with_context(|| format!("cannot select idea {}", choice))?;
    }

    let plan = session.plan().context("planner produced no plan")?;

    if args.export {
        let dir = args.out.clone().unwrap_or_else(|| config.export.dir_or_cwd());
        let path = write_plan(&plan, &dir).context("failed to write export")?;
        println!("Exported plan to {}", path.display());
        return Ok(());
    }

    match args.format {
        OutputFormat::Json => println!("{}", to_json(&plan)?),
        OutputFormat::Md => print!("{}", render_markdown(&plan)),
        OutputFormat::Text => print_terminal(session.ideas(), &plan),
    }

    Ok(())
}

fn print_terminal(ideas: &[VideoIdea], plan: &AutomationPlan) {
    let title = format!("{} · shorts plan", plan.profile.channel_name);

    // Header
    println!();
    println!("╭{}╮", "─".repeat(60));
    println!("│{:^60}│", title);
    println!("╰{}╯", "─".repeat(60));
    println!();

    println!("IDEAS");
    for (i, idea) in ideas.iter().enumerate() {
        let marker = if idea.id == plan.idea.id { "▶" } else { " " };
        println!(
            " {} {}. [{:>2}] {:<16} {}",
            marker,
            i + 1,
            idea.potential_score,
            idea.framework,
            idea.title
        );
        println!("          {}", idea.trend_pairing);
    }
    println!();

    println!("SCRIPT  {}", plan.script.title);
    println!("   {}", plan.script.promise);
    for segment in &plan.script.segments {
        println!(
            "   {:<7} {:>4} {:<8} {}",
            segment.label.as_str(),
            format_seconds(segment.duration),
            segment.pace.as_str(),
            segment.content
        );
    }
    println!("   CTA: {}", plan.script.call_to_action);
    println!("   Runtime: {}", format_seconds(plan.script.total_duration()));
    println!();

    println!("SHOT LIST");
    for shot in &plan.shotlist {
        println!(
            "   {:<15} {:>4}  {}",
            shot.category.as_str(),
            format_seconds(shot.duration),
            shot.headline
        );
        println!("   {:<15}       {}", "", shot.direction);
        println!("   {:<15}       Overlay: {}", "", shot.overlay);
    }
    println!();

    println!("SCHEDULE");
    for release in &plan.schedule {
        println!(
            "   {:<12} {:<13} {}",
            format_release_date(release.date),
            release.optimal_window,
            release.title
        );
        println!("   {:<26} CTA: {}", "", release.cta);
        println!("   {:<26} Tags: {}", "", format_hashtags(&release.hashtags));
    }
    println!();

    println!("TASKS");
    for column in &plan.tasks {
        println!("   {} ({} tasks)", column.stage, column.items.len());
        for task in &column.items {
            println!(
                "     - {:<30} {:<18} due {}",
                task.label,
                task.owner,
                format_release_date(task.due)
            );
        }
    }
    println!();
}
