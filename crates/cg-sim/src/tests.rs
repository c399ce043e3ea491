//! Integration tests for cg-sim.

use cg_agent::{AgentRngs, AgentStore, AgentStoreBuilder};
use cg_core::{
    AgentId, ArenaConfig, BaseId, BasicRewardKind, PolicyConfig, Pose, RewardConfig, SimConfig,
    SimRng, TeamId, Tick, Vec3,
};
use cg_policy::{ActionSource, ActionVector, IdleSource, NavGoal, RandomSource, ScriptedSource};

use crate::{
    Arena, NoopObserver, RewardEvent, RewardRecord, Sim, SimBuilder, SimError, SimObserver,
    TickSummary,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

const HOME: TeamId = TeamId(0);
const AWAY: TeamId = TeamId(1);

fn test_config(total_ticks: u64) -> SimConfig {
    SimConfig {
        fixed_dt_secs:         0.02,
        total_ticks,
        seed:                  42,
        num_threads:           Some(1),
        output_interval_ticks: total_ticks,
    }
}

/// Base 0 belongs to `HOME` at `home`; base 1 to `AWAY` far away.
fn arena(home: Vec3, targets: &[Vec3]) -> Arena {
    let mut arena = Arena::new(ArenaConfig::default());
    arena.add_base(HOME, home);
    arena.add_base(AWAY, Vec3::new(35.0, 0.0, 35.0));
    for &t in targets {
        arena.add_target(t);
    }
    arena
}

fn one_agent(pose: Pose) -> (AgentStore, AgentRngs) {
    AgentStoreBuilder::new(42).spawn(HOME, BaseId(0), pose).build()
}

fn solo_sim<S: ActionSource>(arena: Arena, pose: Pose, source: S) -> Sim<S> {
    let (store, rngs) = one_agent(pose);
    SimBuilder::new(test_config(1_000), store, rngs, arena, source).build().unwrap()
}

fn forward_for(ticks: usize) -> ScriptedSource {
    ScriptedSource::new(vec![vec![ActionVector::new(1, 0, 0, 0, 0); ticks]])
}

fn assert_close(actual: f32, expected: f32) {
    assert!((actual - expected).abs() < 1e-4, "expected {expected}, got {actual}");
}

/// Observer that keeps everything it is shown.
#[derive(Default)]
struct Recorder {
    starts:    usize,
    records:   Vec<RewardRecord>,
    summaries: Vec<TickSummary>,
    snapshots: Vec<Tick>,
    ended:     Option<Tick>,
}

impl SimObserver for Recorder {
    fn on_tick_start(&mut self, _tick: Tick) {
        self.starts += 1;
    }
    fn on_reward(&mut self, record: &RewardRecord) {
        self.records.push(record.clone());
    }
    fn on_tick_end(&mut self, summary: &TickSummary) {
        self.summaries.push(*summary);
    }
    fn on_snapshot(&mut self, tick: Tick, _agents: &AgentStore, _arena: &Arena) {
        self.snapshots.push(tick);
    }
    fn on_sim_end(&mut self, final_tick: Tick) {
        self.ended = Some(final_tick);
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_successfully_with_defaults() {
        let (store, rngs) = one_agent(Pose::default());
        let sim = SimBuilder::new(test_config(10), store, rngs, arena(Vec3::ZERO, &[]), IdleSource)
            .build()
            .unwrap();
        assert_eq!(sim.agents.count, 1);
        assert_eq!(sim.cumulative_reward.len(), 1);
        assert_eq!(sim.clock.current_tick, Tick(0));
    }

    #[test]
    fn rng_count_mismatch_errors() {
        let (store, _) = one_agent(Pose::default());
        let rngs = AgentRngs { inner: Vec::new() };
        let result = SimBuilder::new(test_config(10), store, rngs, arena(Vec3::ZERO, &[]), IdleSource).build();
        assert!(matches!(result, Err(SimError::AgentCountMismatch { expected: 1, got: 0, .. })));
    }

    #[test]
    fn team_without_base_errors() {
        let (store, rngs) = AgentStoreBuilder::new(1).spawn(TeamId(3), BaseId(0), Pose::default()).build();
        let result = SimBuilder::new(test_config(10), store, rngs, arena(Vec3::ZERO, &[]), IdleSource).build();
        assert!(matches!(result, Err(SimError::UnknownTeam(TeamId(3)))));
    }

    #[test]
    fn home_base_of_other_team_errors() {
        let (store, rngs) = AgentStoreBuilder::new(1).spawn(HOME, BaseId(1), Pose::default()).build();
        let result = SimBuilder::new(test_config(10), store, rngs, arena(Vec3::ZERO, &[]), IdleSource).build();
        assert!(matches!(result, Err(SimError::HomeBaseMismatch { base: BaseId(1), .. })));

        let (store, rngs) = AgentStoreBuilder::new(1).spawn(HOME, BaseId(9), Pose::default()).build();
        let result = SimBuilder::new(test_config(10), store, rngs, arena(Vec3::ZERO, &[]), IdleSource).build();
        assert!(matches!(result, Err(SimError::HomeBaseMismatch { base: BaseId(9), .. })));
    }

    #[test]
    fn invalid_configs_error() {
        let (store, rngs) = one_agent(Pose::default());
        let bad = SimConfig { fixed_dt_secs: 0.0, ..test_config(10) };
        let result = SimBuilder::new(bad, store, rngs, arena(Vec3::ZERO, &[]), IdleSource).build();
        assert!(matches!(result, Err(SimError::Config(_))));

        let (store, rngs) = one_agent(Pose::default());
        let policy = PolicyConfig { carry_threshold: 0, ..PolicyConfig::default() };
        let result = SimBuilder::new(test_config(10), store, rngs, arena(Vec3::ZERO, &[]), IdleSource)
            .policy_config(policy, RewardConfig::default())
            .build();
        assert!(matches!(result, Err(SimError::Policy(_))));
    }
}

// ── Basic run ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn runs_to_end_tick() {
        let (store, rngs) = one_agent(Pose::default());
        let mut sim = SimBuilder::new(test_config(10), store, rngs, arena(Vec3::ZERO, &[]), IdleSource)
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.clock.current_tick, Tick(10));
    }

    #[test]
    fn run_ticks_advances_clock() {
        let mut sim = solo_sim(arena(Vec3::ZERO, &[]), Pose::default(), IdleSource);
        sim.run_ticks(5, &mut NoopObserver).unwrap();
        assert_eq!(sim.clock.current_tick, Tick(5));
        sim.run_ticks(3, &mut NoopObserver).unwrap();
        assert_eq!(sim.clock.current_tick, Tick(8));
    }

    #[test]
    fn observer_hooks_fire() {
        let (store, rngs) = one_agent(Pose::default());
        let config = SimConfig { output_interval_ticks: 3, ..test_config(7) };
        let mut sim = SimBuilder::new(config, store, rngs, arena(Vec3::ZERO, &[]), IdleSource)
            .build()
            .unwrap();
        let mut obs = Recorder::default();
        sim.run(&mut obs).unwrap();
        assert_eq!(obs.starts, 7);
        assert_eq!(obs.summaries.len(), 7);
        assert_eq!(obs.snapshots, vec![Tick(0), Tick(3), Tick(6)]);
        assert_eq!(obs.ended, Some(Tick(7)));
        assert_close(obs.summaries[6].elapsed_secs, 0.12);
    }

    #[test]
    fn tick_summary_totals_match_records() {
        let mut rewards = RewardConfig::default();
        rewards.basic.set(BasicRewardKind::ShootingLaser, -0.01);
        let (store, rngs) = one_agent(Pose::default());
        let script = ScriptedSource::new(vec![vec![ActionVector::new(0, 0, 1, 0, 0); 4]]);
        let mut sim = SimBuilder::new(test_config(4), store, rngs, arena(Vec3::new(0.0, 0.0, -20.0), &[]), script)
            .policy_config(PolicyConfig::default(), rewards)
            .build()
            .unwrap();
        let mut obs = Recorder::default();
        sim.run(&mut obs).unwrap();
        for summary in &obs.summaries {
            assert_eq!(summary.reward_events, 1);
            assert_close(summary.total_reward, -0.01);
        }
        assert_close(sim.cumulative_reward(AgentId(0)), -0.04);
    }
}

// ── Motion and the carry override ─────────────────────────────────────────────

#[cfg(test)]
mod motion_tests {
    use super::*;
    use crate::motion::integrate;
    use cg_policy::MovementCommand;

    #[test]
    fn integrate_moves_and_turns() {
        let config = ArenaConfig::default();
        let mut pose = Pose::default();
        let drive = MovementCommand { move_dir: Vec3::Z, ..MovementCommand::idle() };
        integrate(&mut pose, &drive, &config, 0.1);
        assert_close(pose.position.z, 1.0);

        let turn_left = MovementCommand { rotate_dir: Vec3::Y, ..MovementCommand::idle() };
        integrate(&mut pose, &turn_left, &config, 0.5);
        // 90° left of +Z is +X.
        assert_close(pose.forward.x, 1.0);
        assert_close(pose.position.z, 1.0);
    }

    #[test]
    fn full_agent_turns_toward_base() {
        // Home base on the agent's left.
        let mut sim = solo_sim(arena(Vec3::new(10.0, 0.0, 0.0), &[]), Pose::default(), IdleSource);
        sim.agents.carried[0] = 3;
        sim.run_ticks(1, &mut NoopObserver).unwrap();
        let command = sim.command(AgentId(0));
        assert_eq!(command.move_dir, Vec3::ZERO);
        assert_eq!(command.rotate_dir, Vec3::Y);
        assert!(sim.agents.pose[0].forward.x > 0.0);
        assert_eq!(sim.agents.pose[0].position, Vec3::ZERO);
    }

    #[test]
    fn collecting_agent_ignores_manual_turn() {
        // Target dead ahead: the override drives straight whatever slot 1 says.
        let script = ScriptedSource::new(vec![vec![ActionVector::new(2, 2, 0, 0, 0); 3]]);
        let mut sim = solo_sim(
            arena(Vec3::new(0.0, 0.0, -30.0), &[Vec3::new(0.0, 0.0, 20.0)]),
            Pose::default(),
            script,
        );
        sim.run_ticks(3, &mut NoopObserver).unwrap();
        assert_close(sim.agents.pose[0].position.z, 0.6);
        assert_eq!(sim.agents.pose[0].forward, Vec3::Z);
    }

    #[test]
    fn frozen_agent_stays_put() {
        let mut sim = solo_sim(arena(Vec3::new(0.0, 0.0, -30.0), &[]), Pose::default(), forward_for(5));
        sim.set_frozen(AgentId(0), true);
        sim.run_ticks(5, &mut NoopObserver).unwrap();
        assert_eq!(sim.agents.pose[0].position, Vec3::ZERO);
    }
}

// ── Contacts and rewards ──────────────────────────────────────────────────────

#[cfg(test)]
mod contact_tests {
    use super::*;

    #[test]
    fn touching_a_target_picks_it_up() {
        let mut sim = solo_sim(
            arena(Vec3::new(0.0, 0.0, -30.0), &[Vec3::new(0.0, 0.0, 1.0)]),
            Pose::default(),
            IdleSource,
        );
        let mut obs = Recorder::default();
        sim.run_ticks(1, &mut obs).unwrap();

        assert_eq!(sim.agents.carried[0], 1);
        let target = &sim.arena.targets[0];
        assert_eq!(target.carried, 1);
        assert_eq!(target.carrier, Some(AgentId(0)));

        assert_eq!(obs.records.len(), 1);
        let record = &obs.records[0];
        assert_eq!(record.event, RewardEvent::Pickup);
        assert_eq!(record.carried, 0);
        assert_eq!(record.nav, Some(NavGoal::SeekTarget));
        assert_close(record.reward, 0.3);
        assert_close(sim.cumulative_reward(AgentId(0)), 0.3);
    }

    #[test]
    fn held_target_follows_carrier() {
        let mut sim = solo_sim(
            arena(Vec3::new(0.0, 0.0, -30.0), &[Vec3::new(0.0, 0.0, 1.0)]),
            Pose::default(),
            forward_for(10),
        );
        sim.run_ticks(6, &mut NoopObserver).unwrap();
        assert_eq!(sim.arena.targets[0].position, sim.agents.pose[0].position);
    }

    #[test]
    fn entering_own_base_deposits() {
        let mut rewards = RewardConfig::default();
        rewards.basic.set(BasicRewardKind::DroppedTargets, 0.25);
        let (store, rngs) = one_agent(Pose::default());
        let mut sim = SimBuilder::new(
                test_config(100),
                store, rngs,
                arena(Vec3::new(0.0, 0.0, 6.0), &[Vec3::new(0.0, 0.0, 1.0)]),
                forward_for(15),
            )
            .policy_config(PolicyConfig::default(), rewards)
            .build()
            .unwrap();
        let mut obs = Recorder::default();
        sim.run_ticks(15, &mut obs).unwrap();

        let events: Vec<RewardEvent> = obs.records.iter().map(|r| r.event).collect();
        assert_eq!(
            events,
            vec![
                RewardEvent::Pickup,
                RewardEvent::Deposit,
                RewardEvent::Basic(BasicRewardKind::DroppedTargets),
            ]
        );
        let deposit = &obs.records[1];
        assert_eq!(deposit.carried, 1);
        assert_close(deposit.reward, 0.3);

        assert_eq!(sim.agents.carried[0], 0);
        let target = &sim.arena.targets[0];
        assert_eq!(target.carried, 0);
        assert_eq!(target.carrier, None);
        assert_eq!(target.in_base, Some(HOME));
        assert_eq!(sim.arena.banked(HOME), 1);
        assert_close(sim.cumulative_reward(AgentId(0)), 0.85);
    }

    #[test]
    fn base_trigger_fires_once_per_entry() {
        let mut sim = solo_sim(arena(Vec3::ZERO, &[]), Pose::default(), IdleSource);
        let mut obs = Recorder::default();
        sim.run_ticks(5, &mut obs).unwrap();
        assert_eq!(obs.records.len(), 1);
        assert_eq!(obs.records[0].event, RewardEvent::Deposit);
        assert_close(obs.records[0].reward, 0.0);
    }

    #[cfg(feature = "fx-hash")]
    #[test]
    fn base_occupancy_uses_fx_hash() {
        let mut sim = solo_sim(arena(Vec3::ZERO, &[]), Pose::default(), IdleSource);
        let mut obs = Recorder::default();
        sim.run_ticks(3, &mut obs).unwrap();
        let occupied: &rustc_hash::FxHashSet<(AgentId, BaseId)> = &sim.inside_base;
        assert!(occupied.contains(&(AgentId(0), BaseId(0))));
        assert_eq!(occupied.len(), 1);
        assert_eq!(obs.records.len(), 1);
    }

    #[test]
    fn other_team_base_is_silent() {
        let mut sim = solo_sim(
            arena(Vec3::new(0.0, 0.0, -30.0), &[]),
            Pose::new(Vec3::new(35.0, 0.0, 35.0), Vec3::Z),
            IdleSource,
        );
        sim.agents.carried[0] = 3;
        let mut obs = Recorder::default();
        sim.run_ticks(3, &mut obs).unwrap();
        assert!(obs.records.is_empty());
        assert_eq!(sim.agents.carried[0], 3);
    }

    #[test]
    fn wall_penalty_on_contact_entry() {
        let mut sim = solo_sim(
            arena(Vec3::new(0.0, 0.0, -30.0), &[]),
            Pose::new(Vec3::new(0.0, 0.0, 39.9), Vec3::Z),
            forward_for(5),
        );
        let mut obs = Recorder::default();
        sim.run_ticks(5, &mut obs).unwrap();
        assert_eq!(obs.records.len(), 1);
        assert_eq!(obs.records[0].event, RewardEvent::Wall);
        assert_eq!(obs.records[0].nav, Some(NavGoal::SeekTarget));
        assert_close(obs.records[0].reward, -1.0);
        assert_close(sim.agents.pose[0].position.z, 40.0);
    }

    #[test]
    fn frozen_agent_cannot_pick_up() {
        let mut sim = solo_sim(
            arena(Vec3::new(0.0, 0.0, -30.0), &[Vec3::new(0.0, 0.0, 1.0)]),
            Pose::default(),
            IdleSource,
        );
        sim.set_frozen(AgentId(0), true);
        sim.run_ticks(3, &mut NoopObserver).unwrap();
        assert_eq!(sim.agents.carried[0], 0);
        assert!(sim.arena.targets[0].is_free());
    }

    #[test]
    fn lower_agent_id_wins_a_shared_target() {
        let (store, rngs) = AgentStoreBuilder::new(42)
            .spawn(HOME, BaseId(0), Pose::default())
            .spawn(HOME, BaseId(0), Pose::new(Vec3::new(0.5, 0.0, 0.0), Vec3::Z))
            .build();
        let mut sim = SimBuilder::new(
                test_config(10),
                store, rngs,
                arena(Vec3::new(0.0, 0.0, -30.0), &[Vec3::new(0.0, 0.0, 1.0)]),
                IdleSource,
            )
            .build()
            .unwrap();
        sim.run_ticks(1, &mut NoopObserver).unwrap();
        assert_eq!(sim.agents.carried, vec![1u32, 0]);
        assert_eq!(sim.arena.targets[0].carrier, Some(AgentId(0)));
    }

    #[test]
    fn zero_basic_rewards_are_not_recorded() {
        let script = ScriptedSource::new(vec![vec![ActionVector::new(0, 0, 1, 0, 0); 3]]);
        let mut sim = solo_sim(arena(Vec3::new(0.0, 0.0, -30.0), &[]), Pose::default(), script);
        let mut obs = Recorder::default();
        sim.run_ticks(3, &mut obs).unwrap();
        assert!(obs.records.is_empty());
        assert!(sim.agents.laser_active[0]);
        assert!(sim.raise_basic(AgentId(0), BasicRewardKind::HitEnemy).is_none());
    }

    #[test]
    fn raise_basic_credits_agent() {
        let mut rewards = RewardConfig::default();
        rewards.basic.set(BasicRewardKind::Frozen, -0.5);
        let (store, rngs) = one_agent(Pose::default());
        let mut sim = SimBuilder::new(test_config(10), store, rngs, arena(Vec3::new(0.0, 0.0, -30.0), &[]), IdleSource)
            .policy_config(PolicyConfig::default(), rewards)
            .build()
            .unwrap();
        let record = sim.raise_basic(AgentId(0), BasicRewardKind::Frozen).unwrap();
        assert_eq!(record.event, RewardEvent::Basic(BasicRewardKind::Frozen));
        assert_eq!(record.nav, None);
        assert_close(sim.cumulative_reward(AgentId(0)), -0.5);
        assert_close(sim.team_reward(HOME), -0.5);
        assert_close(sim.team_reward(AWAY), 0.0);
    }
}

// ── Episodes and determinism ──────────────────────────────────────────────────

#[cfg(test)]
mod episode_tests {
    use super::*;
    use cg_policy::{MovementCommand, PolicyContext};

    fn random_match(seed: u64) -> Sim<RandomSource> {
        random_match_sized(seed, 3)
    }

    fn random_match_sized(seed: u64, per_team: usize) -> Sim<RandomSource> {
        let mut arena = Arena::new(ArenaConfig::default());
        let home = arena.add_base(HOME, Vec3::new(-30.0, 0.0, 0.0));
        let away = arena.add_base(AWAY, Vec3::new(30.0, 0.0, 0.0));
        arena.scatter_targets(20, &mut SimRng::new(seed));
        let (store, rngs) = AgentStoreBuilder::new(seed)
            .spawn_many(per_team, HOME, home, Pose::new(Vec3::new(-30.0, 0.0, 0.0), Vec3::X))
            .spawn_many(per_team, AWAY, away, Pose::new(Vec3::new(30.0, 0.0, 0.0), -Vec3::X))
            .build();
        SimBuilder::new(test_config(300), store, rngs, arena, RandomSource).build().unwrap()
    }

    /// Decode the next tick one agent at a time with fresh RNGs advanced past
    /// the `draws` action samples the sim has already taken, and compare with
    /// the sim's decode phase.  Consumes one more sample per agent.
    fn assert_decode_matches_sequential(sim: &mut Sim<RandomSource>, seed: u64, draws: u64) {
        let (_, mut reference) = AgentStoreBuilder::new(seed)
            .spawn_many(sim.agents.count, HOME, BaseId(0), Pose::default())
            .build();
        let now = sim.clock.current_tick;
        let expected: Vec<MovementCommand> = {
            let ctx = PolicyContext::new(now, sim.clock.time_remaining_secs(), &sim.agents, sim.arena.view());
            reference
                .inner
                .iter_mut()
                .enumerate()
                .map(|(i, rng)| {
                    let agent = AgentId(i as u32);
                    for _ in 0..draws {
                        sim.source.act(agent, &ctx, rng);
                    }
                    let actions = sim.source.act(agent, &ctx, rng);
                    sim.policy.decide(&actions, &sim.agents.state(agent), sim.arena.view())
                })
                .collect()
        };
        assert_eq!(sim.compute_commands(now), expected);
    }

    #[test]
    fn decode_phase_matches_sequential_decode() {
        let mut sim = random_match(5);
        sim.run_ticks(40, &mut NoopObserver).unwrap();
        assert_decode_matches_sequential(&mut sim, 5, 40);
    }

    /// Rayon's decode must agree with a plain in-order decode on every tick.
    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_decode_matches_sequential_decode() {
        let seed = 7;
        let mut sim = random_match_sized(seed, 32);
        let mut draws = 0;
        for _ in 0..25 {
            assert_decode_matches_sequential(&mut sim, seed, draws);
            sim.run_ticks(1, &mut NoopObserver).unwrap();
            draws += 2;
        }
    }

    #[test]
    fn same_seed_same_match() {
        let mut a = random_match(9);
        let mut b = random_match(9);
        a.run(&mut NoopObserver).unwrap();
        b.run(&mut NoopObserver).unwrap();
        assert_eq!(a.cumulative_reward, b.cumulative_reward);
        assert_eq!(a.agents.pose, b.agents.pose);
        assert_eq!(a.agents.carried, b.agents.carried);
    }

    #[test]
    fn carried_counts_match_arena() {
        let mut sim = random_match(3);
        sim.run(&mut NoopObserver).unwrap();
        for agent in sim.agents.agent_ids() {
            let held = sim.arena.targets.iter().filter(|t| t.carrier == Some(agent)).count();
            assert_eq!(sim.agents.carried[agent.index()] as usize, held);
        }
    }

    #[test]
    fn reset_restores_start_state() {
        let mut sim = solo_sim(
            arena(Vec3::new(0.0, 0.0, -30.0), &[Vec3::new(0.0, 0.0, 1.0)]),
            Pose::default(),
            forward_for(10),
        );
        sim.run_ticks(10, &mut NoopObserver).unwrap();
        assert_eq!(sim.agents.carried[0], 1);

        sim.reset_episode();
        assert_eq!(sim.clock.current_tick, Tick(0));
        assert_eq!(sim.agents.carried[0], 0);
        assert_eq!(sim.agents.pose[0], Pose::default());
        assert_eq!(sim.cumulative_reward(AgentId(0)), 0.0);
        assert!(sim.arena.targets[0].is_free());
        assert_eq!(sim.arena.targets[0].position, Vec3::new(0.0, 0.0, 1.0));
    }
}

// ── Arena ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod arena_tests {
    use super::*;

    #[test]
    fn clamp_reports_wall_hits() {
        let arena = arena(Vec3::ZERO, &[]);
        let mut inside = Vec3::new(10.0, 0.0, -10.0);
        assert!(!arena.clamp_to_walls(&mut inside));
        let mut outside = Vec3::new(41.0, 0.0, -45.0);
        assert!(arena.clamp_to_walls(&mut outside));
        assert_eq!(outside, Vec3::new(40.0, 0.0, -40.0));
    }

    #[test]
    fn deposit_banks_only_the_carriers_targets() {
        let mut arena = arena(Vec3::ZERO, &[Vec3::X, Vec3::Z, Vec3::ONE]);
        arena.pick_up(cg_core::TargetId(0), AgentId(0));
        arena.pick_up(cg_core::TargetId(2), AgentId(0));
        arena.pick_up(cg_core::TargetId(1), AgentId(1));
        assert_eq!(arena.deposit(AgentId(0), HOME), 2);
        assert_eq!(arena.banked(HOME), 2);
        assert_eq!(arena.targets[1].carrier, Some(AgentId(1)));
    }

    #[test]
    fn picking_up_a_banked_target_unbanks_it() {
        let mut arena = arena(Vec3::ZERO, &[Vec3::X]);
        arena.targets[0].in_base = Some(AWAY);
        arena.pick_up(cg_core::TargetId(0), AgentId(0));
        assert_eq!(arena.targets[0].in_base, None);
        assert_eq!(arena.banked(AWAY), 0);
    }

    #[test]
    fn scattered_targets_stay_inside() {
        let mut arena = arena(Vec3::new(-30.0, 0.0, 0.0), &[]);
        arena.scatter_targets(50, &mut SimRng::new(1));
        assert_eq!(arena.targets.len(), 50);
        let h = arena.config.half_extent;
        for t in &arena.targets {
            assert!(t.position.x.abs() <= h && t.position.z.abs() <= h);
            assert!(t.is_free());
        }
    }

    #[test]
    fn base_lookup() {
        let arena = arena(Vec3::ZERO, &[]);
        assert_eq!(arena.base_for_team(AWAY).map(|b| b.id), Some(BaseId(1)));
        assert!(arena.base_for_team(TeamId(7)).is_none());
        assert_eq!(arena.base_at(Vec3::new(1.0, 0.0, 1.0)).map(|b| b.team), Some(HOME));
        assert!(arena.base_at(Vec3::new(10.0, 0.0, 0.0)).is_none());
    }
}
