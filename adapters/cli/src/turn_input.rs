//! Parsing for the `<action> <district>` lines typed during a turn.

use cyber_city_core::{Action, DefenderAction, DistrictId, HackerAction, Side};
use thiserror::Error;

/// One parsed line of turn input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TurnInput {
    /// Submit the action against the district.
    Play {
        /// Action to submit.
        action: Action,
        /// Targeted district.
        district: DistrictId,
    },
    /// End the current side's phase.
    Done,
}

/// Errors produced while parsing a turn line.
///
/// Unknown identifiers are a caller-side concern: the engine's closed enums
/// make them unrepresentable past this boundary.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub(crate) enum TurnInputError {
    /// The action token is not registered for the active side.
    #[error("unknown {side:?} action `{token}`")]
    UnknownAction {
        /// Side whose catalog was searched.
        side: Side,
        /// Token that failed to parse.
        token: String,
    },
    /// The district token does not name one of the eight districts.
    #[error("unknown district `{0}`")]
    UnknownDistrict(String),
    /// The line did not have the expected shape.
    #[error("expected `<action> <district>`, `skip`, or `done`")]
    Malformed,
}

/// Parses one line typed by the given side.
pub(crate) fn parse(side: Side, line: &str) -> Result<TurnInput, TurnInputError> {
    let mut tokens = line.split_whitespace();
    let Some(first) = tokens.next() else {
        return Err(TurnInputError::Malformed);
    };
    let first = first.to_ascii_lowercase();

    if first == "done" {
        return Ok(TurnInput::Done);
    }

    // `skip` needs no target; any district satisfies the engine contract.
    if side == Side::Hacker && first == "skip" {
        let district = match tokens.next() {
            Some(token) => parse_district(token)?,
            None => DistrictId::Business,
        };
        return Ok(TurnInput::Play {
            action: Action::Hack(HackerAction::SkipTurn),
            district,
        });
    }

    let Some(second) = tokens.next() else {
        return Err(TurnInputError::Malformed);
    };
    if tokens.next().is_some() {
        return Err(TurnInputError::Malformed);
    }

    let action = parse_action(side, &first)?;
    let district = parse_district(second)?;
    Ok(TurnInput::Play { action, district })
}

fn parse_action(side: Side, token: &str) -> Result<Action, TurnInputError> {
    let action = match (side, token) {
        (Side::Hacker, "phishing") => Action::Hack(HackerAction::Phishing),
        (Side::Hacker, "virus") => Action::Hack(HackerAction::Virus),
        (Side::Hacker, "malware") => Action::Hack(HackerAction::Malware),
        (Side::Defender, "firewall") => Action::Defend(DefenderAction::Firewall),
        (Side::Defender, "virus-protection") => Action::Defend(DefenderAction::VirusProtection),
        (Side::Defender, "intrusion-detection") => {
            Action::Defend(DefenderAction::IntrusionDetection)
        }
        (Side::Defender, "user-training") => Action::Defend(DefenderAction::UserTraining),
        (Side::Defender, "lights-off") => Action::Defend(DefenderAction::TurnOffLights),
        _ => {
            return Err(TurnInputError::UnknownAction {
                side,
                token: token.to_owned(),
            })
        }
    };
    Ok(action)
}

fn parse_district(token: &str) -> Result<DistrictId, TurnInputError> {
    let district = match token.to_ascii_lowercase().as_str() {
        "business" => DistrictId::Business,
        "hospital" => DistrictId::Hospital,
        "fire-police" => DistrictId::FirePolice,
        "industrial" => DistrictId::Industrial,
        "university" => DistrictId::University,
        "housing" => DistrictId::Housing,
        "lackland" => DistrictId::Lackland,
        "traffic-lights" => DistrictId::TrafficLights,
        _ => return Err(TurnInputError::UnknownDistrict(token.to_owned())),
    };
    Ok(district)
}

/// Typed names shown in the per-phase help line.
pub(crate) fn action_tokens(side: Side) -> &'static str {
    match side {
        Side::Hacker => "phishing, virus, malware, skip",
        Side::Defender => {
            "firewall, virus-protection, intrusion-detection, user-training, lights-off"
        }
    }
}
