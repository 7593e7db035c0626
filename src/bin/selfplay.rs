use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use junglebot::selfplay::{generate_games_with, MatchSummary, SelfPlayParams};
use junglebot::{StrengthProfile, Tier};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "junglebot-selfplay", about = "Play engine-vs-engine matches and report the results")]
struct Args {
    #[arg(long, default_value_t = 20)]
    games: usize,
    #[arg(long, default_value_t = 200)]
    max_plies: usize,
    #[arg(long, default_value_t = 1)]
    threads: usize,
    #[arg(long, value_enum, default_value_t = Tier::Amateur)]
    red: Tier,
    #[arg(long, value_enum, default_value_t = Tier::Easy)]
    blue: Tier,
    /// Cap the search depth of both sides
    #[arg(long)]
    depth: Option<u32>,
    /// Override the Master thinking budget (milliseconds)
    #[arg(long)]
    budget_ms: Option<u64>,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Write every game record here as JSON
    #[arg(long)]
    out: Option<PathBuf>,
}

fn profile(tier: Tier, a: &Args) -> StrengthProfile {
    let mut p = StrengthProfile::for_tier(tier);
    if let Some(d) = a.depth { p = p.with_max_depth(d); }
    if let Some(ms) = a.budget_ms { p = p.with_budget(std::time::Duration::from_millis(ms)); }
    p
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let params = SelfPlayParams {
        games: a.games,
        max_plies: a.max_plies,
        threads: a.threads,
        red: profile(a.red, &a),
        blue: profile(a.blue, &a),
        seed: a.seed,
    };
    eprintln!("Playing {} games: red={} blue={} (threads={}, max_plies={})", a.games, a.red, a.blue, a.threads, a.max_plies);

    let bar = ProgressBar::new(a.games as u64);
    bar.set_style(ProgressStyle::default_bar().template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")?);
    let games = generate_games_with(&params, |r| {
        bar.set_message(match r.winner {
            Some(p) => format!("last: {p} in {}", r.plies),
            None => format!("last: unfinished after {}", r.plies),
        });
        bar.inc(1);
    });
    bar.finish_and_clear();

    if let Some(path) = &a.out {
        std::fs::write(path, serde_json::to_string_pretty(&games)?)
            .with_context(|| format!("writing {}", path.display()))?;
        eprintln!("Wrote {} games to {}", games.len(), path.display());
    }
    println!("{}", serde_json::to_string_pretty(&MatchSummary::from_records(&games))?);
    Ok(())
}
