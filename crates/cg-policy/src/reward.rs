//! Contact-event reward shaping.
//!
//! Rewards depend only on the carried count at the instant of contact,
//! classified once into a [`CarryState`]:
//!
//! | Event       | Collecting (c < T)                   | Full (c = T) | Overloaded (c > T)  |
//! |-------------|--------------------------------------|--------------|---------------------|
//! | own base    | `deposit_per_item × c`               | `deposit_full` | `deposit_overloaded` |
//! | item        | last slot: `pickup_last_slot`; else `pickup_off_threshold + pickup_collecting` | `pickup_over_capacity` | `pickup_off_threshold + pickup_over_capacity` |
//! | wall        | `wall_contact`                       | `wall_contact` | `wall_contact`    |
//!
//! Base entry and item contact with a collecting agent steer toward the
//! nearest target; item contact at or above the threshold steers home; a
//! wall steers by carry state.

use cg_agent::AgentState;
use cg_core::{BasicRewardKind, PolicyConfig, RewardConfig};
use log::{debug, warn};

use crate::{CarryState, ColliderKind, ContactEvent, NavGoal, WorldView};

/// Which shaping row produced a reward term.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RewardTermKind {
    DepositFull,
    DepositPartial,
    DepositOverloaded,
    PickupOffThreshold,
    PickupCollecting,
    PickupLastSlot,
    PickupOverCapacity,
    WallContact,
    Basic(BasicRewardKind),
}

impl RewardTermKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RewardTermKind::DepositFull        => "deposit-full",
            RewardTermKind::DepositPartial     => "deposit-partial",
            RewardTermKind::DepositOverloaded  => "deposit-overloaded",
            RewardTermKind::PickupOffThreshold => "pickup-off-threshold",
            RewardTermKind::PickupCollecting   => "pickup-collecting",
            RewardTermKind::PickupLastSlot     => "pickup-last-slot",
            RewardTermKind::PickupOverCapacity => "pickup-over-capacity",
            RewardTermKind::WallContact        => "wall-contact",
            RewardTermKind::Basic(kind)        => kind.as_str(),
        }
    }
}

impl std::fmt::Display for RewardTermKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RewardTerm {
    pub kind:  RewardTermKind,
    pub value: f32,
}

/// Reward and navigation produced by one contact event.
#[derive(Clone, Debug, PartialEq)]
pub struct RewardOutcome {
    /// Sum of `terms`.
    pub reward: f32,
    pub nav:    NavGoal,
    /// Rows that fired, in evaluation order.
    pub terms:  Vec<RewardTerm>,
}

impl RewardOutcome {
    fn from_terms(terms: Vec<RewardTerm>, nav: NavGoal) -> Self {
        let reward = terms.iter().map(|t| t.value).sum();
        Self { reward, nav, terms }
    }
}

/// Stateless reward calculator.
#[derive(Clone, Debug, PartialEq)]
pub struct RewardPolicy {
    pub rewards:         RewardConfig,
    pub carry_threshold: u32,
}

impl Default for RewardPolicy {
    fn default() -> Self {
        Self::new(RewardConfig::default(), &PolicyConfig::default())
    }
}

impl RewardPolicy {
    pub fn new(rewards: RewardConfig, policy: &PolicyConfig) -> Self {
        Self { rewards, carry_threshold: policy.carry_threshold }
    }

    #[inline]
    pub fn classify(&self, carried: u32) -> CarryState {
        CarryState::classify(carried, self.carry_threshold)
    }

    /// Dispatch a contact event.  Returns `None` for contacts that carry no
    /// reward: other teams' bases, ineligible targets, unknown colliders.
    pub fn on_contact(
        &self,
        agent: &AgentState,
        event: &ContactEvent,
        world: WorldView<'_>,
    ) -> Option<RewardOutcome> {
        let outcome = match event.kind {
            ColliderKind::Base { team, .. } => {
                if team != agent.team {
                    return None;
                }
                self.deposit(agent.carried)
            }
            ColliderKind::Target { target } => {
                let Some(target) = world.target(target) else {
                    warn!("contact with unknown target {target}");
                    return None;
                };
                if !target.is_eligible_for(agent.team) || agent.frozen {
                    return None;
                }
                self.pickup(agent.carried)
            }
            ColliderKind::Wall  => self.wall(agent.carried),
            ColliderKind::Other => return None,
        };
        debug!(
            "{} team {} carried {}: {:?} → {:+.2} ({})",
            event.tick, agent.team, agent.carried, event.kind, outcome.reward, outcome.nav
        );
        Some(outcome)
    }

    /// Own-base entry.  Always steers back toward targets.
    pub fn deposit(&self, carried: u32) -> RewardOutcome {
        let r = &self.rewards;
        let term = match self.classify(carried) {
            CarryState::Full => RewardTerm { kind: RewardTermKind::DepositFull, value: r.deposit_full },
            CarryState::Collecting { carried, .. } => RewardTerm {
                kind:  RewardTermKind::DepositPartial,
                value: r.deposit_per_item * carried as f32,
            },
            CarryState::Overloaded { .. } => RewardTerm {
                kind:  RewardTermKind::DepositOverloaded,
                value: r.deposit_overloaded,
            },
        };
        RewardOutcome::from_terms(vec![term], NavGoal::SeekTarget)
    }

    /// Body contact with an eligible target.
    ///
    /// The off-threshold penalty stacks with the collecting and
    /// over-capacity rows.
    pub fn pickup(&self, carried: u32) -> RewardOutcome {
        let r = &self.rewards;
        let state = self.classify(carried);
        let mut terms = Vec::with_capacity(2);

        let off_threshold = matches!(
            state,
            CarryState::Collecting { last_slot: false, .. } | CarryState::Overloaded { .. }
        );
        if off_threshold {
            terms.push(RewardTerm { kind: RewardTermKind::PickupOffThreshold, value: r.pickup_off_threshold });
        }

        let nav = match state {
            CarryState::Collecting { last_slot: false, .. } => {
                terms.push(RewardTerm { kind: RewardTermKind::PickupCollecting, value: r.pickup_collecting });
                NavGoal::SeekTarget
            }
            CarryState::Collecting { last_slot: true, .. } => {
                terms.push(RewardTerm { kind: RewardTermKind::PickupLastSlot, value: r.pickup_last_slot });
                NavGoal::SeekTarget
            }
            CarryState::Full | CarryState::Overloaded { .. } => {
                terms.push(RewardTerm { kind: RewardTermKind::PickupOverCapacity, value: r.pickup_over_capacity });
                NavGoal::SeekBase
            }
        };
        RewardOutcome::from_terms(terms, nav)
    }

    /// Wall contact: flat penalty, then steer by carry state.
    pub fn wall(&self, carried: u32) -> RewardOutcome {
        let term = RewardTerm { kind: RewardTermKind::WallContact, value: self.rewards.wall_contact };
        RewardOutcome::from_terms(vec![term], self.classify(carried).nav_goal())
    }

    /// Host-raised reward from the basic table.
    #[inline]
    pub fn basic(&self, kind: BasicRewardKind) -> RewardTerm {
        RewardTerm { kind: RewardTermKind::Basic(kind), value: self.rewards.basic.get(kind) }
    }
}
