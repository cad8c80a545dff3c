#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative match state management for Cyber City.
//!
//! A [`City`] owns every mutable table of one running match: the district
//! records, the two budget balances, the shared cooldown counters, and the
//! round counter. Adapters mutate it exclusively through [`apply`] and read
//! it through [`query`]. Invalid or unaffordable actions surface as
//! rejection events rather than errors so the match always continues.
//!
//! A `City` is a plain owned aggregate with no interior locking; callers
//! exposing it as a service wrap it in a mutex so racing submissions are
//! applied atomically and in submission order.

use cyber_city_core::{
    Action, Command, CostPolicy, DefenderAction, DistrictId, Event, HackerAction, LightStatus,
    MatchConfig, RejectReason, Side, DISTRICT_COUNT,
};
use cyber_city_system_resolution::{
    catalog, DistrictView, Effects, RandomSource, SeededRandom, Span,
};

/// Compromise level at which a district is irrecoverably lost.
pub const FULL_COMPROMISE: u8 = 100;

const SCORE_THRESHOLD: u8 = 75;
const LACKLAND_POINTS: u32 = 2;
const DISTRICT_POINTS: u32 = 1;

/// Represents the authoritative state of one running match.
#[derive(Debug)]
pub struct City {
    districts: [DistrictState; DISTRICT_COUNT],
    budgets: BudgetLedger,
    cooldowns: CooldownTracker,
    round: u32,
    config: MatchConfig,
    rng: Box<dyn RandomSource>,
}

impl City {
    /// Creates a fresh match with the provided configuration and dice.
    #[must_use]
    pub fn new(config: MatchConfig, rng: Box<dyn RandomSource>) -> Self {
        Self {
            districts: [DistrictState::default(); DISTRICT_COUNT],
            budgets: BudgetLedger::new(config.starting_budget),
            cooldowns: CooldownTracker::default(),
            round: 0,
            config,
            rng,
        }
    }

    /// Creates a fresh match whose dice replay deterministically for a seed.
    #[must_use]
    pub fn with_seed(config: MatchConfig, seed: u64) -> Self {
        Self::new(config, Box::new(SeededRandom::from_seed(seed)))
    }

    fn reset(&mut self) {
        self.districts = [DistrictState::default(); DISTRICT_COUNT];
        self.budgets = BudgetLedger::new(self.config.starting_budget);
        self.cooldowns = CooldownTracker::default();
        self.round = 0;
    }
}

/// Applies the provided command to the match, mutating state deterministically.
pub fn apply(city: &mut City, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::ResolveAction { action, district } => {
            resolve_action(city, action, district, out_events);
        }
        Command::AdvanceRound => {
            city.round = city.round.saturating_add(1);
            city.cooldowns.decrement_all();
            out_events.push(Event::RoundAdvanced {
                round: city.round,
                ended: city.round >= city.config.round_limit,
            });
        }
        Command::ResetMatch => {
            for district in DistrictId::ALL {
                if city.districts[district.index()].light == LightStatus::Off {
                    out_events.push(Event::LightChanged {
                        district,
                        status: LightStatus::On,
                    });
                }
            }
            city.reset();
            out_events.push(Event::MatchReset);
        }
    }
}

fn resolve_action(
    city: &mut City,
    action: Action,
    district: DistrictId,
    out_events: &mut Vec<Event>,
) {
    let index = district.index();

    // Lost districts are terminal: report, charge nothing, roll nothing.
    if city.districts[index].compromise >= FULL_COMPROMISE {
        out_events.push(Event::ActionResolved {
            outcome: cyber_city_system_resolution::already_lost(action, district),
        });
        return;
    }

    if catalog::cooldown_gate(action) {
        if let Action::Defend(defend) = action {
            let remaining = city.cooldowns.remaining(defend);
            if remaining > 0 {
                out_events.push(Event::ActionRejected {
                    action,
                    district,
                    reason: RejectReason::OnCooldown {
                        remaining_rounds: remaining,
                    },
                });
                return;
            }
        }
    }

    let side = action.side();
    let balance = city.budgets.balance(side);
    let cost = action_cost(city.config.cost_policy, action, balance);
    if cost > balance {
        out_events.push(Event::ActionRejected {
            action,
            district,
            reason: RejectReason::InsufficientFunds { cost, balance },
        });
        return;
    }
    let balance = city.budgets.charge(side, cost);
    out_events.push(Event::BudgetCharged {
        side,
        cost,
        balance,
    });

    let view = {
        let state = &city.districts[index];
        DistrictView {
            compromise: state.compromise,
            probability_reduction: state.probability_reduction,
            damage_reduction_percent: state.damage_reduction_percent,
        }
    };
    let resolution =
        cyber_city_system_resolution::resolve(action, district, view, city.rng.as_mut());

    if let (Action::Defend(defend), Some(rounds)) = (action, resolution.effects.start_cooldown) {
        city.cooldowns.set(defend, rounds);
    }
    fold_effects(
        &mut city.districts[index],
        district,
        &resolution.effects,
        out_events,
    );

    out_events.push(Event::ActionResolved {
        outcome: resolution.outcome,
    });

    if action == Action::Hack(HackerAction::SkipTurn) {
        if let Some((low, high)) = city.config.skip_turn_refund {
            let amount = i64::from(city.rng.pick(Span::new(low, high)));
            let balance = city.budgets.credit(side, amount);
            out_events.push(Event::BudgetRefunded {
                side,
                amount,
                balance,
            });
        }
    }
}

/// Folds a resolution delta into one district record.
///
/// Order matters: pending modifiers are consumed before new ones are
/// stored, and the compromise level saturates inside `0..=100`.
fn fold_effects(
    state: &mut DistrictState,
    district: DistrictId,
    effects: &Effects,
    out_events: &mut Vec<Event>,
) {
    if effects.consume_probability_reduction {
        state.probability_reduction = 0.0;
    }
    state.probability_reduction += effects.add_probability_reduction;

    if effects.consume_damage_reduction {
        state.damage_reduction_percent = 0;
    }
    if let Some(percent) = effects.set_damage_reduction {
        state.damage_reduction_percent = percent;
    }

    let level = i32::from(state.compromise)
        .saturating_add(effects.compromise_delta)
        .clamp(0, i32::from(FULL_COMPROMISE));
    state.compromise = level as u8;

    let lost = state.compromise >= FULL_COMPROMISE;
    if (effects.lights_off || lost) && state.light == LightStatus::On {
        state.light = LightStatus::Off;
        out_events.push(Event::LightChanged {
            district,
            status: LightStatus::Off,
        });
    }
}

fn action_cost(policy: CostPolicy, action: Action, balance: i64) -> i64 {
    match policy {
        CostPolicy::BalanceRate { scale } => {
            (balance as f64 * catalog::cost_rate(action) * scale) as i64
        }
        CostPolicy::Flat => catalog::flat_cost(action),
    }
}

/// Query functions that provide read-only access to the match state.
pub mod query {
    use super::{
        City, DistrictState, DISTRICT_POINTS, FULL_COMPROMISE, LACKLAND_POINTS, SCORE_THRESHOLD,
    };
    use cyber_city_core::{DefenderAction, DistrictId, LightStatus, Side};

    /// Current compromise level of the district, `0..=100`.
    #[must_use]
    pub fn compromise(city: &City, district: DistrictId) -> u8 {
        city.districts[district.index()].compromise
    }

    /// Whether the district's lights are currently powered.
    #[must_use]
    pub fn light_status(city: &City, district: DistrictId) -> LightStatus {
        city.districts[district.index()].light
    }

    /// Reports whether the district has been irrecoverably lost.
    #[must_use]
    pub fn district_lost(city: &City, district: DistrictId) -> bool {
        city.districts[district.index()].compromise >= FULL_COMPROMISE
    }

    /// Balance the side has left to spend.
    #[must_use]
    pub fn budget(city: &City, side: Side) -> i64 {
        city.budgets.balance(side)
    }

    /// Number of completed rounds.
    #[must_use]
    pub fn round(city: &City) -> u32 {
        city.round
    }

    /// Whether the match reached its configured round limit.
    #[must_use]
    pub fn match_ended(city: &City) -> bool {
        city.round >= city.config.round_limit
    }

    /// Completed rounds remaining before the action may be used again.
    #[must_use]
    pub fn cooldown_remaining(city: &City, action: DefenderAction) -> u32 {
        city.cooldowns.remaining(action)
    }

    /// Captures a read-only snapshot of every district in canonical order.
    #[must_use]
    pub fn district_view(city: &City) -> Vec<DistrictSnapshot> {
        DistrictId::ALL
            .iter()
            .map(|district| {
                let state: &DistrictState = &city.districts[district.index()];
                DistrictSnapshot {
                    district: *district,
                    compromise: state.compromise,
                    light: state.light,
                    probability_reduction: state.probability_reduction,
                    damage_reduction_percent: state.damage_reduction_percent,
                }
            })
            .collect()
    }

    /// Tallies the endgame score from the current district table.
    ///
    /// A district at or above 75 compromise scores for the hacker, any other
    /// district for the defender. Lackland is worth two points, every other
    /// district one.
    #[must_use]
    pub fn scoreboard(city: &City) -> Scoreboard {
        let mut hacker_points = 0;
        let mut defender_points = 0;
        for district in DistrictId::ALL {
            let points = if district == DistrictId::Lackland {
                LACKLAND_POINTS
            } else {
                DISTRICT_POINTS
            };
            if city.districts[district.index()].compromise >= SCORE_THRESHOLD {
                hacker_points += points;
            } else {
                defender_points += points;
            }
        }
        let winner = match hacker_points.cmp(&defender_points) {
            std::cmp::Ordering::Greater => Some(Side::Hacker),
            std::cmp::Ordering::Less => Some(Side::Defender),
            std::cmp::Ordering::Equal => None,
        };
        Scoreboard {
            hacker_points,
            defender_points,
            winner,
        }
    }

    /// Immutable representation of a single district used for queries.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct DistrictSnapshot {
        /// District the snapshot describes.
        pub district: DistrictId,
        /// Current compromise level, `0..=100`.
        pub compromise: u8,
        /// Whether the district's lights are powered.
        pub light: LightStatus,
        /// Pending probability reduction awaiting the next attack.
        pub probability_reduction: f64,
        /// Pending damage-reduction percentage awaiting the next hit.
        pub damage_reduction_percent: u8,
    }

    /// Final score tally for a finished match.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Scoreboard {
        /// Points awarded to the hacker for compromised districts.
        pub hacker_points: u32,
        /// Points awarded to the defender for held districts.
        pub defender_points: u32,
        /// Side with the higher total, or `None` for a tie.
        pub winner: Option<Side>,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct DistrictState {
    compromise: u8,
    light: LightStatus,
    probability_reduction: f64,
    damage_reduction_percent: u8,
}

impl Default for DistrictState {
    fn default() -> Self {
        Self {
            compromise: 0,
            light: LightStatus::On,
            probability_reduction: 0.0,
            damage_reduction_percent: 0,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct BudgetLedger {
    hacker: i64,
    defender: i64,
}

impl BudgetLedger {
    fn new(starting_budget: i64) -> Self {
        Self {
            hacker: starting_budget,
            defender: starting_budget,
        }
    }

    fn balance(&self, side: Side) -> i64 {
        match side {
            Side::Hacker => self.hacker,
            Side::Defender => self.defender,
        }
    }

    fn slot(&mut self, side: Side) -> &mut i64 {
        match side {
            Side::Hacker => &mut self.hacker,
            Side::Defender => &mut self.defender,
        }
    }

    fn charge(&mut self, side: Side, amount: i64) -> i64 {
        let slot = self.slot(side);
        debug_assert!(amount <= *slot, "charge requires a pre-checked balance");
        *slot -= amount;
        *slot
    }

    fn credit(&mut self, side: Side, amount: i64) -> i64 {
        let slot = self.slot(side);
        *slot = slot.saturating_add(amount);
        *slot
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct CooldownTracker {
    remaining: [u32; DefenderAction::ALL.len()],
}

impl CooldownTracker {
    fn remaining(&self, action: DefenderAction) -> u32 {
        self.remaining[action.index()]
    }

    fn set(&mut self, action: DefenderAction, rounds: u32) {
        self.remaining[action.index()] = rounds;
    }

    fn decrement_all(&mut self) {
        for counter in &mut self.remaining {
            *counter = counter.saturating_sub(1);
        }
    }
}
