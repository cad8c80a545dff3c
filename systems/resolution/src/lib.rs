#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure action-resolution system for Cyber City.
//!
//! Given a submitted action and a read-only view of the targeted district,
//! [`resolve`] rolls the dice through an injected [`RandomSource`] and
//! produces an [`Outcome`] paired with an [`Effects`] delta record. The
//! system holds no state of its own; the authoritative world folds the
//! delta into its district tables. Affordability and cooldown gating happen
//! before [`resolve`] is called so that a rejected action never consumes a
//! random draw.

use std::collections::VecDeque;

use cyber_city_core::{Action, DefenderAction, DistrictId, HackerAction, Outcome, Side};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Inclusive integer interval used for catalog draw ranges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    low: i32,
    high: i32,
}

impl Span {
    /// Creates a new inclusive interval.
    #[must_use]
    pub const fn new(low: i32, high: i32) -> Self {
        Self { low, high }
    }

    /// Smallest value the interval can produce.
    #[must_use]
    pub const fn low(&self) -> i32 {
        self.low
    }

    /// Largest value the interval can produce.
    #[must_use]
    pub const fn high(&self) -> i32 {
        self.high
    }

    /// Reports whether the value lies within the interval.
    #[must_use]
    pub const fn contains(&self, value: i32) -> bool {
        self.low <= value && value <= self.high
    }
}

/// Source of randomness injected into the engine.
///
/// Abstracting the draws keeps [`resolve`] deterministic under test: the
/// production implementation is [`SeededRandom`], while tests replay
/// scripted values through [`ScriptedRandom`].
pub trait RandomSource: std::fmt::Debug {
    /// Draws a uniform value in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Draws a uniform integer from the inclusive interval.
    fn pick(&mut self, span: Span) -> i32;
}

/// ChaCha8-backed random source seeded explicitly for replayable matches.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: ChaCha8Rng,
}

impl SeededRandom {
    /// Creates a new source from a 64-bit seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn pick(&mut self, span: Span) -> i32 {
        self.rng.gen_range(span.low()..=span.high())
    }
}

/// Deterministic double that replays queued draws.
///
/// When a queue is exhausted the source falls back to `0.0` for unit draws
/// and the interval's low end for picks, keeping exhausted scripts
/// deterministic instead of panicking.
#[derive(Debug, Default)]
pub struct ScriptedRandom {
    units: VecDeque<f64>,
    picks: VecDeque<i32>,
}

impl ScriptedRandom {
    /// Creates an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the next value returned by [`RandomSource::unit`].
    pub fn queue_unit(&mut self, value: f64) {
        self.units.push_back(value);
    }

    /// Queues the next value returned by [`RandomSource::pick`].
    pub fn queue_pick(&mut self, value: i32) {
        self.picks.push_back(value);
    }
}

impl RandomSource for ScriptedRandom {
    fn unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(0.0)
    }

    fn pick(&mut self, span: Span) -> i32 {
        self.picks.pop_front().unwrap_or_else(|| span.low())
    }
}

/// Static numeric parameters for every action in the game.
pub mod catalog {
    use super::Span;
    use cyber_city_core::{Action, DefenderAction, HackerAction};

    /// Probability taken off the next attack by each Firewall cast.
    pub const FIREWALL_PROBABILITY_REDUCTION: f64 = 0.10;
    /// Compromise reduction drawn by Firewall.
    pub const FIREWALL_REDUCTION: Span = Span::new(6, 10);
    /// Advisory shield drawn by Virus Protection.
    pub const VIRUS_PROTECTION_SHIELD: Span = Span::new(20, 35);
    /// Compromise level at which Intrusion Detection switches to reviving.
    pub const INTRUSION_THRESHOLD: u8 = 75;
    /// Small reduction drawn by Intrusion Detection below the threshold.
    pub const INTRUSION_REDUCTION: Span = Span::new(5, 10);
    /// Revive amount drawn by Intrusion Detection at or above the threshold.
    pub const INTRUSION_REVIVE: Span = Span::new(42, 88);
    /// Rounds Intrusion Detection stays unavailable after a revive.
    pub const INTRUSION_COOLDOWN_ROUNDS: u32 = 2;
    /// Compromise reduction drawn by User Training.
    pub const USER_TRAINING_REDUCTION: Span = Span::new(6, 15);
    /// Damage-reduction percentage drawn by User Training.
    pub const USER_TRAINING_DAMAGE_REDUCTION: Span = Span::new(10, 50);

    /// Numeric parameters of a hacker action.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct HackerSpec {
        /// Chance of the attack landing before modifiers.
        pub base_probability: f64,
        /// Inclusive compromise increase drawn on success, if any.
        pub compromise: Option<Span>,
    }

    /// Looks up the numeric parameters of a hacker action.
    #[must_use]
    pub const fn hacker_spec(action: HackerAction) -> HackerSpec {
        match action {
            HackerAction::Phishing => HackerSpec {
                base_probability: 0.90,
                compromise: Some(Span::new(40, 85)),
            },
            HackerAction::Virus => HackerSpec {
                base_probability: 0.85,
                compromise: Some(Span::new(60, 85)),
            },
            HackerAction::Malware => HackerSpec {
                base_probability: 0.80,
                compromise: Some(Span::new(70, 100)),
            },
            HackerAction::SkipTurn => HackerSpec {
                base_probability: 1.0,
                compromise: None,
            },
        }
    }

    /// Rate used by the balance-proportional cost policy.
    #[must_use]
    pub const fn cost_rate(action: Action) -> f64 {
        match action {
            Action::Hack(hack) => hacker_spec(hack).base_probability,
            Action::Defend(DefenderAction::Firewall) => 0.7,
            Action::Defend(DefenderAction::VirusProtection) => 0.8,
            Action::Defend(DefenderAction::IntrusionDetection) => 0.9,
            Action::Defend(DefenderAction::UserTraining)
            | Action::Defend(DefenderAction::TurnOffLights) => 1.0,
        }
    }

    /// Fixed price used by the flat cost policy.
    #[must_use]
    pub const fn flat_cost(action: Action) -> i64 {
        match action {
            Action::Hack(HackerAction::Phishing) => 7_000,
            Action::Hack(HackerAction::Virus) => 8_500,
            Action::Hack(HackerAction::Malware) => 17_000,
            Action::Hack(HackerAction::SkipTurn) => 0,
            Action::Defend(DefenderAction::Firewall) => 9_000,
            Action::Defend(DefenderAction::VirusProtection) => 11_000,
            Action::Defend(DefenderAction::IntrusionDetection) => 22_000,
            Action::Defend(DefenderAction::UserTraining) => 10_000,
            Action::Defend(DefenderAction::TurnOffLights) => 0,
        }
    }

    /// Reports whether the action is gated by a shared cooldown counter.
    #[must_use]
    pub const fn cooldown_gate(action: Action) -> bool {
        matches!(action, Action::Defend(DefenderAction::IntrusionDetection))
    }
}

/// Read-only view of the targeted district at resolution time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistrictView {
    /// Current compromise level, `0..=100`.
    pub compromise: u8,
    /// Pending probability reduction accumulated from Firewall casts.
    pub probability_reduction: f64,
    /// Pending damage-reduction percentage stored by User Training.
    pub damage_reduction_percent: u8,
}

/// State delta the world folds into the targeted district.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Effects {
    /// Signed compromise change; the world clamps the stored level to 0..=100.
    pub compromise_delta: i32,
    /// Resets the pending probability reduction (consumed by the attempt).
    pub consume_probability_reduction: bool,
    /// Amount added to the pending probability reduction (stacking).
    pub add_probability_reduction: f64,
    /// Resets the pending damage reduction (consumed by a reduced hit).
    pub consume_damage_reduction: bool,
    /// Overwrites the pending damage-reduction percentage.
    pub set_damage_reduction: Option<u8>,
    /// Starts a cooldown of this many rounds for the resolved action.
    pub start_cooldown: Option<u32>,
    /// Forces the district's lights off regardless of compromise.
    pub lights_off: bool,
}

/// Outcome plus the state delta produced by one resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
    /// Player-facing result of the action.
    pub outcome: Outcome,
    /// District mutations the world must apply.
    pub effects: Effects,
}

/// Informational outcome for actions against a fully compromised district.
///
/// Nothing is charged, rolled, or mutated; the caller reports the terminal
/// state and the match continues.
#[must_use]
pub fn already_lost(action: Action, district: DistrictId) -> Outcome {
    let message = match action.side() {
        Side::Hacker => format!(
            "You have already fully compromised {district}, the defender will not be able to \
             save it. Hack somewhere else."
        ),
        Side::Defender => format!(
            "{district} was lost to the Hacker... There is no getting it back. Try another \
             location."
        ),
    };
    Outcome {
        action,
        district,
        success: false,
        compromise_delta: 0,
        shield: None,
        message,
    }
}

/// Resolves one gated, affordable action against a district.
///
/// The draw order is part of the contract: a hacker attempt consumes the
/// pending probability reduction before anything else, and the damage
/// reduction is consumed only by a successful hit that it actually softened.
pub fn resolve(
    action: Action,
    district: DistrictId,
    view: DistrictView,
    rng: &mut dyn RandomSource,
) -> Resolution {
    match action {
        Action::Hack(hack) => resolve_hack(hack, district, view, rng),
        Action::Defend(defend) => resolve_defence(defend, district, view, rng),
    }
}

fn resolve_hack(
    hack: HackerAction,
    district: DistrictId,
    view: DistrictView,
    rng: &mut dyn RandomSource,
) -> Resolution {
    let action = Action::Hack(hack);
    let spec = catalog::hacker_spec(hack);

    let Some(compromise_span) = spec.compromise else {
        // Skip Turn: trivially succeeds, consumes no modifiers.
        return Resolution {
            outcome: Outcome {
                action,
                district,
                success: true,
                compromise_delta: 0,
                shield: None,
                message: "Turn skipped without an attack.".to_owned(),
            },
            effects: Effects::default(),
        };
    };

    let probability_reduction = view.probability_reduction;
    let effective = (spec.base_probability - probability_reduction).clamp(0.0, 1.0);
    let success = rng.unit() < effective;

    let mut effects = Effects {
        consume_probability_reduction: true,
        ..Effects::default()
    };

    let outcome = if success {
        let raw_increase = rng.pick(compromise_span);
        let percent = i32::from(view.damage_reduction_percent);
        let cut = raw_increase * percent / 100;
        let final_increase = (raw_increase - cut).max(0);
        effects.compromise_delta = final_increase;

        let mut message = if percent > 0 {
            effects.consume_damage_reduction = true;
            format!(
                "{action} was implemented at {district}. It would have done {raw_increase} but \
                 due to previous User Training, the compromise was reduced by {cut} \
                 ({percent}%), causing the compromise increase to only be {final_increase}."
            )
        } else {
            format!(
                "{action} was implemented at {district}, increasing the compromise by \
                 {final_increase}."
            )
        };
        if probability_reduction > 0.0 {
            message.push_str(&format!(
                " The probability of success was {:.2}% less than normal due to previous \
                 Firewall deployment.",
                probability_reduction * 100.0
            ));
        }

        Outcome {
            action,
            district,
            success: true,
            compromise_delta: final_increase,
            shield: None,
            message,
        }
    } else {
        let message = if probability_reduction > 0.0 {
            format!(
                "{action} failed at {district}, likely due to previous Firewall effects. The \
                 probability to land a successful attack at {district} was {:.2}% less than \
                 normal.",
                probability_reduction * 100.0
            )
        } else {
            format!("{action} failed at {district}. Maybe next time...")
        };

        Outcome {
            action,
            district,
            success: false,
            compromise_delta: 0,
            shield: None,
            message,
        }
    };

    Resolution { outcome, effects }
}

fn resolve_defence(
    defend: DefenderAction,
    district: DistrictId,
    view: DistrictView,
    rng: &mut dyn RandomSource,
) -> Resolution {
    let action = Action::Defend(defend);
    let compromise = i32::from(view.compromise);

    match defend {
        DefenderAction::Firewall => {
            let reduction = rng.pick(catalog::FIREWALL_REDUCTION);
            let applied = reduction.min(compromise);
            let total_reduction =
                view.probability_reduction + catalog::FIREWALL_PROBABILITY_REDUCTION;

            let message = if applied == reduction {
                format!(
                    "Firewall activated at {district}, compromise decreased by {applied}. The \
                     probability that the next attack will be successful at {district} was \
                     decreased by {:.2}%.",
                    total_reduction * 100.0
                )
            } else {
                format!(
                    "Firewall activated at {district}, reducing compromise by {applied}. The \
                     full reduction was {reduction}, but only {applied} could be applied. The \
                     probability that the next attack will be successful at {district} was \
                     decreased by {:.2}%.",
                    total_reduction * 100.0
                )
            };

            Resolution {
                outcome: Outcome {
                    action,
                    district,
                    success: true,
                    compromise_delta: -applied,
                    shield: None,
                    message,
                },
                effects: Effects {
                    compromise_delta: -applied,
                    add_probability_reduction: catalog::FIREWALL_PROBABILITY_REDUCTION,
                    ..Effects::default()
                },
            }
        }
        DefenderAction::VirusProtection => {
            let shield = rng.pick(catalog::VIRUS_PROTECTION_SHIELD);
            Resolution {
                outcome: Outcome {
                    action,
                    district,
                    success: true,
                    compromise_delta: 0,
                    shield: Some(shield),
                    message: format!(
                        "Virus Protection deployed at {district}, adding a shield of {shield}."
                    ),
                },
                effects: Effects::default(),
            }
        }
        DefenderAction::IntrusionDetection => {
            if view.compromise < catalog::INTRUSION_THRESHOLD {
                let reduction = rng.pick(catalog::INTRUSION_REDUCTION);
                let applied = reduction.min(compromise);
                Resolution {
                    outcome: Outcome {
                        action,
                        district,
                        success: true,
                        compromise_delta: -applied,
                        shield: None,
                        message: format!(
                            "Intrusion Detection at {district} reduced the compromise by \
                             {applied}."
                        ),
                    },
                    effects: Effects {
                        compromise_delta: -applied,
                        ..Effects::default()
                    },
                }
            } else {
                let revive = rng.pick(catalog::INTRUSION_REVIVE);
                let applied = revive.min(compromise);
                Resolution {
                    outcome: Outcome {
                        action,
                        district,
                        success: true,
                        compromise_delta: -applied,
                        shield: None,
                        message: format!(
                            "Intrusion Detection at {district} revived systems, decreasing \
                             compromise by {applied}."
                        ),
                    },
                    effects: Effects {
                        compromise_delta: -applied,
                        start_cooldown: Some(catalog::INTRUSION_COOLDOWN_ROUNDS),
                        ..Effects::default()
                    },
                }
            }
        }
        DefenderAction::UserTraining => {
            let reduction = rng.pick(catalog::USER_TRAINING_REDUCTION);
            let applied = reduction.min(compromise);
            let damage_reduction = rng.pick(catalog::USER_TRAINING_DAMAGE_REDUCTION);
            Resolution {
                outcome: Outcome {
                    action,
                    district,
                    success: true,
                    compromise_delta: -applied,
                    shield: None,
                    message: format!(
                        "User Training at {district} reduced compromise by {applied} and \
                         reduced damage from future attacks by {damage_reduction}%."
                    ),
                },
                effects: Effects {
                    compromise_delta: -applied,
                    set_damage_reduction: Some(damage_reduction.clamp(0, 100) as u8),
                    ..Effects::default()
                },
            }
        }
        DefenderAction::TurnOffLights => Resolution {
            outcome: Outcome {
                action,
                district,
                success: true,
                compromise_delta: 0,
                shield: None,
                message: format!("Lights were turned off at {district}."),
            },
            effects: Effects {
                lights_off: true,
                ..Effects::default()
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cyber_city_core::{DefenderAction, DistrictId, HackerAction};

    fn view(compromise: u8) -> DistrictView {
        DistrictView {
            compromise,
            probability_reduction: 0.0,
            damage_reduction_percent: 0,
        }
    }

    #[test]
    fn hacker_success_reports_drawn_increase() {
        let mut rng = ScriptedRandom::new();
        rng.queue_unit(0.5);
        rng.queue_pick(50);

        let resolution = resolve(
            Action::Hack(HackerAction::Phishing),
            DistrictId::Business,
            view(10),
            &mut rng,
        );

        assert!(resolution.outcome.success);
        assert_eq!(resolution.outcome.compromise_delta, 50);
        assert_eq!(resolution.effects.compromise_delta, 50);
        assert!(resolution.effects.consume_probability_reduction);
        assert!(!resolution.effects.consume_damage_reduction);
    }

    #[test]
    fn probability_reduction_weakens_and_is_consumed_on_failure() {
        let mut rng = ScriptedRandom::new();
        rng.queue_unit(0.75);

        let resolution = resolve(
            Action::Hack(HackerAction::Phishing),
            DistrictId::Hospital,
            DistrictView {
                compromise: 10,
                probability_reduction: 0.2,
                damage_reduction_percent: 0,
            },
            &mut rng,
        );

        // Base 0.90 minus 0.20 leaves 0.70, so a 0.75 roll misses.
        assert!(!resolution.outcome.success);
        assert_eq!(resolution.outcome.compromise_delta, 0);
        assert!(resolution.effects.consume_probability_reduction);
    }

    #[test]
    fn effective_probability_clamps_at_zero() {
        let mut rng = ScriptedRandom::new();
        rng.queue_unit(0.0);

        let resolution = resolve(
            Action::Hack(HackerAction::Malware),
            DistrictId::Housing,
            DistrictView {
                compromise: 10,
                probability_reduction: 1.5,
                damage_reduction_percent: 0,
            },
            &mut rng,
        );

        assert!(!resolution.outcome.success);
    }

    #[test]
    fn user_training_softens_a_successful_attack() {
        let mut rng = ScriptedRandom::new();
        rng.queue_unit(0.1);
        rng.queue_pick(80);

        let resolution = resolve(
            Action::Hack(HackerAction::Malware),
            DistrictId::Lackland,
            DistrictView {
                compromise: 90,
                probability_reduction: 0.0,
                damage_reduction_percent: 20,
            },
            &mut rng,
        );

        // 80 raw minus floor(80 * 20 / 100) leaves 64.
        assert!(resolution.outcome.success);
        assert_eq!(resolution.outcome.compromise_delta, 64);
        assert!(resolution.effects.consume_damage_reduction);
    }

    #[test]
    fn skip_turn_succeeds_without_touching_modifiers() {
        let mut rng = ScriptedRandom::new();

        let resolution = resolve(
            Action::Hack(HackerAction::SkipTurn),
            DistrictId::University,
            DistrictView {
                compromise: 30,
                probability_reduction: 0.3,
                damage_reduction_percent: 25,
            },
            &mut rng,
        );

        assert!(resolution.outcome.success);
        assert_eq!(resolution.outcome.compromise_delta, 0);
        assert_eq!(resolution.effects, Effects::default());
    }

    #[test]
    fn firewall_applies_at_most_current_compromise() {
        let mut rng = ScriptedRandom::new();
        rng.queue_pick(8);

        let resolution = resolve(
            Action::Defend(DefenderAction::Firewall),
            DistrictId::Business,
            view(5),
            &mut rng,
        );

        assert_eq!(resolution.outcome.compromise_delta, -5);
        assert_eq!(
            resolution.effects.add_probability_reduction,
            catalog::FIREWALL_PROBABILITY_REDUCTION
        );
        assert!(resolution.outcome.message.contains("full reduction was 8"));
    }

    #[test]
    fn virus_protection_shield_is_advisory() {
        let mut rng = ScriptedRandom::new();
        rng.queue_pick(27);

        let resolution = resolve(
            Action::Defend(DefenderAction::VirusProtection),
            DistrictId::Hospital,
            view(40),
            &mut rng,
        );

        assert_eq!(resolution.outcome.shield, Some(27));
        assert_eq!(resolution.outcome.compromise_delta, 0);
        assert_eq!(resolution.effects, Effects::default());
    }

    #[test]
    fn intrusion_detection_below_threshold_uses_small_reduction() {
        let mut rng = ScriptedRandom::new();
        rng.queue_pick(7);

        let resolution = resolve(
            Action::Defend(DefenderAction::IntrusionDetection),
            DistrictId::Industrial,
            view(40),
            &mut rng,
        );

        assert_eq!(resolution.outcome.compromise_delta, -7);
        assert_eq!(resolution.effects.start_cooldown, None);
    }

    #[test]
    fn intrusion_detection_revive_starts_the_cooldown() {
        let mut rng = ScriptedRandom::new();
        rng.queue_pick(88);

        let resolution = resolve(
            Action::Defend(DefenderAction::IntrusionDetection),
            DistrictId::TrafficLights,
            view(76),
            &mut rng,
        );

        // Revive caps at the current compromise level.
        assert_eq!(resolution.outcome.compromise_delta, -76);
        assert_eq!(
            resolution.effects.start_cooldown,
            Some(catalog::INTRUSION_COOLDOWN_ROUNDS)
        );
    }

    #[test]
    fn user_training_overwrites_damage_reduction() {
        let mut rng = ScriptedRandom::new();
        rng.queue_pick(12);
        rng.queue_pick(35);

        let resolution = resolve(
            Action::Defend(DefenderAction::UserTraining),
            DistrictId::Housing,
            view(50),
            &mut rng,
        );

        assert_eq!(resolution.outcome.compromise_delta, -12);
        assert_eq!(resolution.effects.set_damage_reduction, Some(35));
    }

    #[test]
    fn turn_off_lights_has_no_numeric_effect() {
        let mut rng = ScriptedRandom::new();

        let resolution = resolve(
            Action::Defend(DefenderAction::TurnOffLights),
            DistrictId::Business,
            view(10),
            &mut rng,
        );

        assert_eq!(resolution.outcome.compromise_delta, 0);
        assert!(resolution.effects.lights_off);
    }

    #[test]
    fn already_lost_messages_address_each_side() {
        let hacker = already_lost(Action::Hack(HackerAction::Virus), DistrictId::Lackland);
        assert!(!hacker.success);
        assert_eq!(hacker.compromise_delta, 0);
        assert!(hacker.message.contains("already fully compromised"));

        let defender = already_lost(
            Action::Defend(DefenderAction::Firewall),
            DistrictId::Lackland,
        );
        assert!(!defender.success);
        assert!(defender.message.contains("no getting it back"));
    }

    #[test]
    fn cost_rates_follow_the_catalog() {
        assert_eq!(catalog::cost_rate(Action::Hack(HackerAction::Phishing)), 0.90);
        assert_eq!(catalog::cost_rate(Action::Hack(HackerAction::SkipTurn)), 1.0);
        assert_eq!(
            catalog::cost_rate(Action::Defend(DefenderAction::Firewall)),
            0.7
        );
        assert_eq!(
            catalog::flat_cost(Action::Defend(DefenderAction::IntrusionDetection)),
            22_000
        );
        assert_eq!(catalog::flat_cost(Action::Hack(HackerAction::SkipTurn)), 0);
    }

    #[test]
    fn cooldown_gate_covers_only_intrusion_detection() {
        for defend in DefenderAction::ALL {
            let gated = catalog::cooldown_gate(Action::Defend(defend));
            assert_eq!(gated, defend == DefenderAction::IntrusionDetection);
        }
        for hack in HackerAction::ALL {
            assert!(!catalog::cooldown_gate(Action::Hack(hack)));
        }
    }

    #[test]
    fn seeded_random_replays_the_same_sequence() {
        let mut first = SeededRandom::from_seed(0xc1be);
        let mut second = SeededRandom::from_seed(0xc1be);
        let span = Span::new(40, 85);

        for _ in 0..32 {
            assert_eq!(first.unit(), second.unit());
            let draw = first.pick(span);
            assert_eq!(draw, second.pick(span));
            assert!(span.contains(draw));
        }
    }
}
