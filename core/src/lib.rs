#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Cyber City engine.
//!
//! This crate defines the message surface that connects adapters and the
//! authoritative match state. Adapters submit [`Command`] values describing
//! desired mutations, the world executes those commands via its `apply`
//! entry point, and then broadcasts [`Event`] values for presentation layers
//! to react to. Every identifier is a closed enum so that action dispatch is
//! exhaustive at compile time rather than keyed by strings.

use serde::{Deserialize, Serialize};

/// Banner printed when a match boots.
pub const WELCOME_BANNER: &str = "Welcome to Cyber City.";

/// Number of districts composing the city.
pub const DISTRICT_COUNT: usize = 8;

/// The two competing sides of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The attacker trying to raise district compromise.
    Hacker,
    /// The defender trying to suppress district compromise.
    Defender,
}

/// Identifies one of the eight fixed city districts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DistrictId {
    /// Downtown business district.
    Business,
    /// Hospital campus.
    Hospital,
    /// Combined fire and police services.
    FirePolice,
    /// Industrial park.
    Industrial,
    /// University campus.
    University,
    /// Residential housing.
    Housing,
    /// Lackland military base.
    Lackland,
    /// City-wide traffic light network.
    TrafficLights,
}

impl DistrictId {
    /// Every district in canonical order.
    pub const ALL: [DistrictId; DISTRICT_COUNT] = [
        DistrictId::Business,
        DistrictId::Hospital,
        DistrictId::FirePolice,
        DistrictId::Industrial,
        DistrictId::University,
        DistrictId::Housing,
        DistrictId::Lackland,
        DistrictId::TrafficLights,
    ];

    /// Human-readable district name as shown to players.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            DistrictId::Business => "Business",
            DistrictId::Hospital => "Hospital",
            DistrictId::FirePolice => "Fire/Police",
            DistrictId::Industrial => "Industrial",
            DistrictId::University => "University",
            DistrictId::Housing => "Housing",
            DistrictId::Lackland => "Lackland",
            DistrictId::TrafficLights => "Traffic Lights",
        }
    }

    /// Stable index of the district within [`DistrictId::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for DistrictId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.name())
    }
}

/// Actions available to the hacker side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HackerAction {
    /// Trick users into revealing credentials.
    Phishing,
    /// Infect a district with a computer virus.
    Virus,
    /// Deploy malware into district systems.
    Malware,
    /// Forfeit the turn without attacking.
    SkipTurn,
}

impl HackerAction {
    /// Every hacker action in catalog order.
    pub const ALL: [HackerAction; 4] = [
        HackerAction::Phishing,
        HackerAction::Virus,
        HackerAction::Malware,
        HackerAction::SkipTurn,
    ];

    /// Human-readable action name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            HackerAction::Phishing => "Phishing",
            HackerAction::Virus => "Virus",
            HackerAction::Malware => "Malware",
            HackerAction::SkipTurn => "Skip Turn",
        }
    }
}

impl std::fmt::Display for HackerAction {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.name())
    }
}

/// Actions available to the defender side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefenderAction {
    /// Lower the compromise and weaken the next attack's odds.
    Firewall,
    /// Deploy an advisory shield value.
    VirusProtection,
    /// Detect intrusions, reviving heavily compromised districts.
    IntrusionDetection,
    /// Train users, softening the next successful attack.
    UserTraining,
    /// Power down the district's lights.
    TurnOffLights,
}

impl DefenderAction {
    /// Every defender action in catalog order.
    pub const ALL: [DefenderAction; 5] = [
        DefenderAction::Firewall,
        DefenderAction::VirusProtection,
        DefenderAction::IntrusionDetection,
        DefenderAction::UserTraining,
        DefenderAction::TurnOffLights,
    ];

    /// Human-readable action name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            DefenderAction::Firewall => "Firewall",
            DefenderAction::VirusProtection => "Virus Protection",
            DefenderAction::IntrusionDetection => "Intrusion Detection",
            DefenderAction::UserTraining => "User Training",
            DefenderAction::TurnOffLights => "Turn Off Lights",
        }
    }

    /// Stable index of the action within [`DefenderAction::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for DefenderAction {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.name())
    }
}

/// A submitted action, tagged by the side allowed to play it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// An attack submitted by the hacker.
    Hack(HackerAction),
    /// A countermeasure submitted by the defender.
    Defend(DefenderAction),
}

impl Action {
    /// Side permitted to submit this action.
    #[must_use]
    pub const fn side(self) -> Side {
        match self {
            Action::Hack(_) => Side::Hacker,
            Action::Defend(_) => Side::Defender,
        }
    }

    /// Human-readable action name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Action::Hack(action) => action.name(),
            Action::Defend(action) => action.name(),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.name())
    }
}

/// Whether a district's lights are currently powered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LightStatus {
    /// The district is lit.
    On,
    /// The district is dark, either lost or explicitly powered down.
    Off,
}

/// Commands that express all permissible match mutations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Submits one action against a district for resolution.
    ResolveAction {
        /// The action to resolve.
        action: Action,
        /// District targeted by the action.
        district: DistrictId,
    },
    /// Completes one attacker-plus-defender exchange.
    AdvanceRound,
    /// Abandons the current match and starts a fresh one.
    ResetMatch,
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// An action was resolved against a district.
    ActionResolved {
        /// Result of the resolution, including the signed compromise delta.
        outcome: Outcome,
    },
    /// An action was rejected before any dice were rolled.
    ActionRejected {
        /// The action that was rejected.
        action: Action,
        /// District the action targeted.
        district: DistrictId,
        /// Specific reason the action could not proceed.
        reason: RejectReason,
    },
    /// A side paid for a submitted action.
    BudgetCharged {
        /// Side whose balance was reduced.
        side: Side,
        /// Amount deducted from the balance.
        cost: i64,
        /// Balance remaining after the deduction.
        balance: i64,
    },
    /// A side was credited budget for skipping its turn.
    BudgetRefunded {
        /// Side whose balance was increased.
        side: Side,
        /// Amount credited to the balance.
        amount: i64,
        /// Balance after the credit.
        balance: i64,
    },
    /// A district's light switched state.
    LightChanged {
        /// District whose light changed.
        district: DistrictId,
        /// Status the light transitioned to.
        status: LightStatus,
    },
    /// The round counter advanced and cooldowns decayed.
    RoundAdvanced {
        /// Round number after the advance.
        round: u32,
        /// Whether the match reached its round limit.
        ended: bool,
    },
    /// The match state was re-initialised.
    MatchReset,
}

/// Result of resolving a single action against a district.
///
/// The `success` flag and signed `compromise_delta` are the asserted
/// contract; `message` is a cosmetic natural-language summary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// Action that was resolved.
    pub action: Action,
    /// District the action targeted.
    pub district: DistrictId,
    /// Whether the action took effect.
    pub success: bool,
    /// Signed change the engine computed for the district's compromise.
    pub compromise_delta: i32,
    /// Advisory shield value reported by Virus Protection.
    pub shield: Option<i32>,
    /// Natural-language summary shown to players.
    pub message: String,
}

/// Reasons an action is rejected before resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// The acting side cannot afford the action's cost.
    InsufficientFunds {
        /// Cost the action would have charged.
        cost: i64,
        /// Balance the side currently holds.
        balance: i64,
    },
    /// The action is still cooling down from an earlier use.
    OnCooldown {
        /// Completed rounds remaining before the action is ready.
        remaining_rounds: u32,
    },
}

/// Policy deciding how much a submitted action costs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum CostPolicy {
    /// Cost is the current balance times the action's rate, times `scale`.
    BalanceRate {
        /// Additional multiplier applied on top of the balance-rate product.
        scale: f64,
    },
    /// Cost is a fixed per-action price.
    Flat,
}

impl CostPolicy {
    /// The unscaled `balance * rate` model.
    pub const FULL: CostPolicy = CostPolicy::BalanceRate { scale: 1.0 };

    /// The budget-scaled variant charging a tenth of the full rate.
    pub const SCALED: CostPolicy = CostPolicy::BalanceRate { scale: 0.1 };
}

/// Configuration fixed at match start.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Starting balance granted to each side.
    pub starting_budget: i64,
    /// Number of completed rounds after which the match ends.
    pub round_limit: u32,
    /// Policy used to price submitted actions.
    pub cost_policy: CostPolicy,
    /// Optional inclusive budget credit drawn when a turn is skipped.
    pub skip_turn_refund: Option<(i32, i32)>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            starting_budget: 50_000,
            round_limit: 10,
            cost_policy: CostPolicy::FULL,
            skip_turn_refund: None,
        }
    }
}
