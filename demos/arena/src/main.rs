//! arena: a two-team collection match driven by random actions.
//!
//! Every agent samples its five action slots uniformly each tick; the carry
//! override then steers it toward targets or home, so the match still shows
//! the collect → deposit cycle.  Reward events, tick summaries and agent
//! snapshots are written as CSV, the starting layout as `arena.json`.

mod logging;
#[cfg(test)]
mod tests;

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use serde::{Deserialize, Serialize};

use cg_agent::AgentStoreBuilder;
use cg_core::{ArenaConfig, PolicyConfig, Pose, RewardConfig, SimConfig, SimRng, TeamId, Vec3};
use cg_output::{CsvWriter, SimOutputObserver};
use cg_policy::RandomSource;
use cg_sim::{Arena, SimBuilder};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "arena", about = "Run a two-team collection match with random actions")]
struct Cli {
    /// Master RNG seed (overrides the config file).
    #[arg(long)]
    seed: Option<u64>,

    /// Ticks to simulate (overrides the config file).
    #[arg(long)]
    ticks: Option<u64>,

    #[arg(long, default_value_t = 3)]
    agents_per_team: usize,

    /// Targets scattered over the floor.
    #[arg(long, default_value_t = 30)]
    targets: usize,

    /// Output directory.
    #[arg(long, default_value = "output/arena")]
    out: PathBuf,

    /// JSON file with `sim`, `arena`, `policy` and `rewards` sections.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Debug logging (reward events, pickups, deposits).
    #[arg(short, long)]
    verbose: bool,
}

const DEFAULT_SEED: u64 = 42;

/// Everything a match file may override.  Missing sections keep defaults.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct MatchConfig {
    sim:     SimConfig,
    arena:   ArenaConfig,
    policy:  PolicyConfig,
    rewards: RewardConfig,
}

fn load_config(path: &Path) -> Result<MatchConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Load the match file, then apply command-line overrides.  Without a file
/// or `--seed` the seed is 42.
fn resolve_config(cli: &Cli) -> Result<MatchConfig> {
    let mut cfg = match cli.config.as_deref() {
        Some(path) => load_config(path)?,
        None => {
            let mut cfg = MatchConfig::default();
            cfg.sim.seed = DEFAULT_SEED;
            cfg
        }
    };
    if let Some(seed) = cli.seed {
        cfg.sim.seed = seed;
    }
    if let Some(ticks) = cli.ticks {
        cfg.sim.total_ticks = ticks;
    }
    Ok(cfg)
}

// ── Setup ─────────────────────────────────────────────────────────────────────

const TEAMS: [(TeamId, f32); 2] = [(TeamId(0), -1.0), (TeamId(1), 1.0)];

/// Bases at ±75 % of the half extent on X; agents lined up on their base
/// with random headings.
fn build_match(cfg: &MatchConfig, agents_per_team: usize, targets: usize) -> (Arena, AgentStoreBuilder) {
    let mut rng = SimRng::new(cfg.sim.seed);
    let mut arena = Arena::new(cfg.arena.clone());
    let mut agents = AgentStoreBuilder::new(cfg.sim.seed);

    let half = cfg.arena.half_extent;
    let centre = (agents_per_team.saturating_sub(1)) as f32 / 2.0;
    for (team, side) in TEAMS {
        let base_pos = Vec3::new(side * 0.75 * half, 0.0, 0.0);
        let base = arena.add_base(team, base_pos);
        for k in 0..agents_per_team {
            let offset = Vec3::new(0.0, 0.0, (k as f32 - centre) * 2.0);
            agents = agents.spawn(team, base, Pose::new(base_pos + offset, rng.ground_heading()));
        }
    }

    arena.scatter_targets(targets, &mut rng.child(1));
    (arena, agents)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let cfg = resolve_config(&cli)?;

    let (arena, agents) = build_match(&cfg, cli.agents_per_team, cli.targets);
    let (store, rngs) = agents.build();
    info!(
        "{} agents, {} targets, {} ticks at {} s, seed {}",
        store.count,
        arena.targets.len(),
        cfg.sim.total_ticks,
        cfg.sim.fixed_dt_secs,
        cfg.sim.seed
    );

    std::fs::create_dir_all(&cli.out)
        .with_context(|| format!("creating {}", cli.out.display()))?;
    let layout = BufWriter::new(File::create(cli.out.join("arena.json"))?);
    serde_json::to_writer_pretty(layout, &arena)?;

    let mut sim = SimBuilder::new(cfg.sim.clone(), store, rngs, arena, RandomSource)
        .policy_config(cfg.policy.clone(), cfg.rewards.clone())
        .build()?;

    let mut obs = SimOutputObserver::new(CsvWriter::new(&cli.out)?);
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    info!("match complete in {:.3} s", t0.elapsed().as_secs_f64());

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // ── Summary ───────────────────────────────────────────────────────────
    println!("{:<8} {:<6} {:<8} {:>10}", "Agent", "Team", "Carried", "Reward");
    println!("{}", "-".repeat(35));
    for agent in sim.agents.agent_ids() {
        let i = agent.index();
        println!(
            "{:<8} {:<6} {:<8} {:>10.2}",
            agent.0,
            sim.agents.team[i].0,
            sim.agents.carried[i],
            sim.cumulative_reward(agent),
        );
    }
    println!();
    for (team, _) in TEAMS {
        println!(
            "team {}: banked {:>3}, reward {:>8.2}",
            team.0,
            sim.arena.banked(team),
            sim.team_reward(team)
        );
    }
    println!("output written to {}", cli.out.display());

    Ok(())
}
