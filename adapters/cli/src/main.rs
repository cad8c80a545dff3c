#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs a Cyber City match in the terminal.
//!
//! Each round the defender phase runs before the hacker phase; a phase
//! reads `<action> <district>` lines until `done`. Outcomes, rejections,
//! and the district board are printed after every submission, and light
//! events are mirrored into a [`LightActuator`] best effort.

mod turn_input;

use std::{
    fs,
    io::{self, BufRead, Lines, StdinLock, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use cyber_city_core::{
    Command, CostPolicy, Event, LightStatus, MatchConfig, RejectReason, Side, WELCOME_BANNER,
};
use cyber_city_lights::{relight_all, sync_lights, LightActuator, NoopLights};
use cyber_city_world::{apply, query, City};

use turn_input::{action_tokens, parse, TurnInput};

const SKIP_REFUND_SPAN: (i32, i32) = (3_000, 8_000);

#[derive(Debug, Parser)]
#[command(name = "cyber-city", about = "Two-sided hack-the-city match in the terminal")]
struct Cli {
    /// Seed for the match dice; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Starting balance granted to each side.
    #[arg(long, default_value_t = 50_000)]
    budget: i64,

    /// Number of completed rounds before the match ends.
    #[arg(long, default_value_t = 10)]
    rounds: u32,

    /// Policy used to price submitted actions.
    #[arg(long, value_enum, default_value_t = CostPolicyArg::Full)]
    cost_policy: CostPolicyArg,

    /// Credit a random budget refund when the hacker skips a turn.
    #[arg(long)]
    skip_refund: bool,

    /// TOML file overriding every other match-configuration flag.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum CostPolicyArg {
    /// Cost is the full `balance * rate` product.
    Full,
    /// Cost is a tenth of the full product.
    Scaled,
    /// Cost is a fixed per-action price.
    Flat,
}

impl From<CostPolicyArg> for CostPolicy {
    fn from(arg: CostPolicyArg) -> Self {
        match arg {
            CostPolicyArg::Full => CostPolicy::FULL,
            CostPolicyArg::Scaled => CostPolicy::SCALED,
            CostPolicyArg::Flat => CostPolicy::Flat,
        }
    }
}

fn match_config(cli: &Cli) -> Result<MatchConfig> {
    if let Some(path) = &cli.config {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading match config {}", path.display()))?;
        return toml::from_str(&raw)
            .with_context(|| format!("parsing match config {}", path.display()));
    }

    Ok(MatchConfig {
        starting_budget: cli.budget,
        round_limit: cli.rounds,
        cost_policy: cli.cost_policy.into(),
        skip_turn_refund: cli.skip_refund.then_some(SKIP_REFUND_SPAN),
    })
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = match_config(&cli)?;
    let seed = cli.seed.unwrap_or_else(rand::random);

    let mut city = City::with_seed(config, seed);
    let mut lights = NoopLights;
    relight_all(&mut lights);

    println!("{WELCOME_BANNER} (seed {seed})");
    println!("Type `<action> <district>` during a phase, `done` to end it.");
    print_board(&city);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        println!("--- Round {} ---", query::round(&city) + 1);
        for side in [Side::Defender, Side::Hacker] {
            play_phase(&mut city, side, &mut lines, &mut lights)?;
        }

        let mut events = Vec::new();
        apply(&mut city, Command::AdvanceRound, &mut events);
        sync_lights(&mut lights, &events);
        render_events(&events);
        print_board(&city);

        if query::match_ended(&city) {
            break;
        }
    }

    print_scoreboard(&city);
    Ok(())
}

fn play_phase(
    city: &mut City,
    side: Side,
    lines: &mut Lines<StdinLock<'_>>,
    lights: &mut dyn LightActuator,
) -> Result<()> {
    println!();
    println!(
        "{side:?}'s turn (budget {}). Actions: {}.",
        query::budget(city, side),
        action_tokens(side),
    );

    loop {
        print!("{side:?}> ");
        io::stdout().flush().context("flushing the prompt")?;

        let Some(line) = lines.next() else {
            // Stdin is exhausted; remaining phases auto-complete.
            return Ok(());
        };
        let line = line.context("reading turn input")?;
        if line.trim().is_empty() {
            continue;
        }

        match parse(side, &line) {
            Ok(TurnInput::Done) => return Ok(()),
            Ok(TurnInput::Play { action, district }) => {
                let mut events = Vec::new();
                apply(
                    city,
                    Command::ResolveAction { action, district },
                    &mut events,
                );
                sync_lights(lights, &events);
                render_events(&events);
            }
            Err(error) => println!("{error}"),
        }
    }
}

fn render_events(events: &[Event]) {
    for event in events {
        match event {
            Event::ActionResolved { outcome } => println!("{}", outcome.message),
            Event::ActionRejected { action, reason, .. } => match reason {
                RejectReason::InsufficientFunds { cost, balance } => println!(
                    "Not enough budget for {action}: it costs {cost} but only {balance} remains."
                ),
                RejectReason::OnCooldown { remaining_rounds } => println!(
                    "{action} is currently on cooldown for {remaining_rounds} more round(s)."
                ),
            },
            Event::BudgetCharged { side, cost, balance } => {
                println!("({side:?} paid {cost}, {balance} remaining.)");
            }
            Event::BudgetRefunded { side, amount, balance } => {
                println!("({side:?} was credited {amount}, {balance} available.)");
            }
            Event::LightChanged { district, status } => {
                let state = if *status == LightStatus::On { "on" } else { "off" };
                println!("[lights] {district} lights are now {state}.");
            }
            Event::RoundAdvanced { round, ended } => {
                println!("Round {round} complete.");
                if *ended {
                    println!("The match has ended.");
                }
            }
            Event::MatchReset => println!("The match was reset."),
        }
    }
}

fn print_board(city: &City) {
    println!();
    println!("{:<16} {:>12} {:>8}", "District", "Compromise", "Lights");
    for snapshot in query::district_view(city) {
        let lights = if snapshot.light == LightStatus::On {
            "On"
        } else {
            "Off"
        };
        println!(
            "{:<16} {:>11}% {:>8}",
            snapshot.district.name(),
            snapshot.compromise,
            lights,
        );
    }
}

fn print_scoreboard(city: &City) {
    let score = query::scoreboard(city);
    println!();
    println!("--- End of Game ---");
    println!(
        "Hacker {} - {} Defender",
        score.hacker_points, score.defender_points
    );
    match score.winner {
        Some(side) => println!("{side:?} wins!"),
        None => println!("The match is a tie."),
    }
}
