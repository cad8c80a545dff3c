use cyber_city_core::{
    Action, Command, CostPolicy, DefenderAction, DistrictId, Event, HackerAction, LightStatus,
    MatchConfig, RejectReason, Side,
};
use cyber_city_system_resolution::ScriptedRandom;
use cyber_city_world::{apply, query, City};

const DISTRICT: DistrictId = DistrictId::Business;

/// Flat costs and a deep budget keep the ledger out of the way of the
/// district-state assertions.
fn rich_config() -> MatchConfig {
    MatchConfig {
        starting_budget: 1_000_000,
        cost_policy: CostPolicy::Flat,
        ..MatchConfig::default()
    }
}

fn submit(city: &mut City, action: Action, district: DistrictId) -> Vec<Event> {
    let mut events = Vec::new();
    apply(
        city,
        Command::ResolveAction { action, district },
        &mut events,
    );
    events
}

fn resolved_delta(events: &[Event]) -> i32 {
    events
        .iter()
        .find_map(|event| match event {
            Event::ActionResolved { outcome } => Some(outcome.compromise_delta),
            _ => None,
        })
        .expect("an ActionResolved event")
}

#[test]
fn training_softens_the_killing_blow_and_the_district_stays_lost() {
    let mut script = ScriptedRandom::new();
    script.queue_unit(0.1); // malware lands
    script.queue_pick(90); // raw increase 90
    script.queue_pick(0); // training compromise reduction (scripted below span)
    script.queue_pick(20); // training damage reduction percent
    script.queue_unit(0.1); // second malware lands
    script.queue_pick(80); // raw increase 80, softened to 64
    let mut city = City::new(rich_config(), Box::new(script));

    let events = submit(&mut city, Action::Hack(HackerAction::Malware), DISTRICT);
    assert_eq!(resolved_delta(&events), 90);
    assert_eq!(query::compromise(&city, DISTRICT), 90);

    let events = submit(
        &mut city,
        Action::Defend(DefenderAction::UserTraining),
        DISTRICT,
    );
    assert_eq!(resolved_delta(&events), 0);

    let events = submit(&mut city, Action::Hack(HackerAction::Malware), DISTRICT);
    assert_eq!(resolved_delta(&events), 64);
    assert_eq!(query::compromise(&city, DISTRICT), 100);
    assert!(query::district_lost(&city, DISTRICT));
    assert!(events.contains(&Event::LightChanged {
        district: DISTRICT,
        status: LightStatus::Off,
    }));

    // Lost is one-way: neither side can touch the district again.
    let budget_before = query::budget(&city, Side::Defender);
    let events = submit(
        &mut city,
        Action::Defend(DefenderAction::Firewall),
        DISTRICT,
    );
    assert_eq!(resolved_delta(&events), 0);
    assert_eq!(query::compromise(&city, DISTRICT), 100);
    assert_eq!(query::budget(&city, Side::Defender), budget_before);

    let events = submit(&mut city, Action::Hack(HackerAction::Phishing), DISTRICT);
    assert_eq!(resolved_delta(&events), 0);
    assert_eq!(query::compromise(&city, DISTRICT), 100);
}

#[test]
fn firewall_reductions_stack_until_the_next_attempt_consumes_them() {
    let mut script = ScriptedRandom::new();
    script.queue_pick(8); // first firewall draw
    script.queue_pick(6); // second firewall draw
    script.queue_unit(0.75); // attack roll against 0.90 - 0.20 = 0.70
    script.queue_unit(0.85); // follow-up roll against a restored 0.90
    script.queue_pick(40);
    let mut city = City::new(rich_config(), Box::new(script));

    let _ = submit(
        &mut city,
        Action::Defend(DefenderAction::Firewall),
        DISTRICT,
    );
    let _ = submit(
        &mut city,
        Action::Defend(DefenderAction::Firewall),
        DISTRICT,
    );

    let view = query::district_view(&city);
    let snapshot = view
        .iter()
        .find(|snapshot| snapshot.district == DISTRICT)
        .expect("snapshot for the district");
    assert!((snapshot.probability_reduction - 0.20).abs() < f64::EPSILON);

    let events = submit(&mut city, Action::Hack(HackerAction::Phishing), DISTRICT);
    assert_eq!(resolved_delta(&events), 0);

    // The failed attempt consumed the stacked reduction.
    let events = submit(&mut city, Action::Hack(HackerAction::Phishing), DISTRICT);
    assert_eq!(resolved_delta(&events), 40);
}

#[test]
fn firewall_reports_applied_distinct_from_nominal() {
    let mut script = ScriptedRandom::new();
    script.queue_unit(0.1);
    script.queue_pick(5); // scripted below the phishing span, compromise to 5
    script.queue_pick(8); // firewall draw over-shoots the remaining 5
    let mut city = City::new(rich_config(), Box::new(script));

    let _ = submit(&mut city, Action::Hack(HackerAction::Phishing), DISTRICT);
    assert_eq!(query::compromise(&city, DISTRICT), 5);

    let events = submit(
        &mut city,
        Action::Defend(DefenderAction::Firewall),
        DISTRICT,
    );
    assert_eq!(resolved_delta(&events), -5);
    assert_eq!(query::compromise(&city, DISTRICT), 0);
    let message = events
        .iter()
        .find_map(|event| match event {
            Event::ActionResolved { outcome } => Some(outcome.message.clone()),
            _ => None,
        })
        .expect("an ActionResolved event");
    assert!(message.contains("full reduction was 8"));
}

#[test]
fn intrusion_detection_cooldown_spans_two_completed_rounds() {
    let mut script = ScriptedRandom::new();
    script.queue_unit(0.1);
    script.queue_pick(80); // compromise to 80, above the revive threshold
    script.queue_pick(76); // revive draw
    script.queue_pick(5); // eventual post-cooldown reduction draw
    let mut city = City::new(rich_config(), Box::new(script));

    let _ = submit(&mut city, Action::Hack(HackerAction::Malware), DISTRICT);
    let events = submit(
        &mut city,
        Action::Defend(DefenderAction::IntrusionDetection),
        DISTRICT,
    );
    assert_eq!(resolved_delta(&events), -76);
    assert_eq!(query::compromise(&city, DISTRICT), 4);
    assert_eq!(
        query::cooldown_remaining(&city, DefenderAction::IntrusionDetection),
        2
    );

    // Within the window the action is rejected and nothing moves.
    let events = submit(
        &mut city,
        Action::Defend(DefenderAction::IntrusionDetection),
        DISTRICT,
    );
    assert_eq!(
        events,
        vec![Event::ActionRejected {
            action: Action::Defend(DefenderAction::IntrusionDetection),
            district: DISTRICT,
            reason: RejectReason::OnCooldown {
                remaining_rounds: 2,
            },
        }],
    );
    assert_eq!(query::compromise(&city, DISTRICT), 4);

    let mut events = Vec::new();
    apply(&mut city, Command::AdvanceRound, &mut events);
    let events = submit(
        &mut city,
        Action::Defend(DefenderAction::IntrusionDetection),
        DISTRICT,
    );
    assert!(matches!(
        events[0],
        Event::ActionRejected {
            reason: RejectReason::OnCooldown {
                remaining_rounds: 1,
            },
            ..
        }
    ));

    let mut round_events = Vec::new();
    apply(&mut city, Command::AdvanceRound, &mut round_events);
    let events = submit(
        &mut city,
        Action::Defend(DefenderAction::IntrusionDetection),
        DISTRICT,
    );
    assert_eq!(resolved_delta(&events), -4);
    assert_eq!(query::compromise(&city, DISTRICT), 0);
}

#[test]
fn compromise_stays_inside_bounds_across_a_noisy_match() {
    let mut script = ScriptedRandom::new();
    for _ in 0..16 {
        script.queue_unit(0.05);
        script.queue_pick(95);
        script.queue_pick(10);
    }
    let mut city = City::new(rich_config(), Box::new(script));

    for _ in 0..8 {
        let _ = submit(&mut city, Action::Hack(HackerAction::Malware), DISTRICT);
        let _ = submit(
            &mut city,
            Action::Defend(DefenderAction::IntrusionDetection),
            DISTRICT,
        );
        let mut events = Vec::new();
        apply(&mut city, Command::AdvanceRound, &mut events);

        for snapshot in query::district_view(&city) {
            assert!(snapshot.compromise <= 100);
        }
    }
}

#[test]
fn turn_off_lights_darkens_without_numbers() {
    let mut city = City::new(rich_config(), Box::new(ScriptedRandom::new()));

    let events = submit(
        &mut city,
        Action::Defend(DefenderAction::TurnOffLights),
        DISTRICT,
    );

    assert_eq!(resolved_delta(&events), 0);
    assert_eq!(query::compromise(&city, DISTRICT), 0);
    assert_eq!(query::light_status(&city, DISTRICT), LightStatus::Off);
    assert!(events.contains(&Event::LightChanged {
        district: DISTRICT,
        status: LightStatus::Off,
    }));
}

#[test]
fn budget_events_precede_the_outcome() {
    let mut script = ScriptedRandom::new();
    script.queue_unit(0.1);
    script.queue_pick(40);
    let mut city = City::new(rich_config(), Box::new(script));

    let events = submit(&mut city, Action::Hack(HackerAction::Phishing), DISTRICT);

    let charged = events
        .iter()
        .position(|event| matches!(event, Event::BudgetCharged { .. }))
        .expect("a BudgetCharged event");
    let resolved = events
        .iter()
        .position(|event| matches!(event, Event::ActionResolved { .. }))
        .expect("an ActionResolved event");
    assert!(charged < resolved);
}
