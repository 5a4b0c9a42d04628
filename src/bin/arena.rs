//! Self-play arena.
//!
//! Runs seeded negotiation sessions between two engines over a generated
//! domain with random linear-additive profiles, then reports per-agent means:
//! utility, Nash product, social welfare, agreements.
//!
//! Options: --issues, --values, --deadline, --sessions, --ours, --theirs, --seed

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use haggle::bidding::Domain;
use haggle::bidding::Issue;
use haggle::bidding::Value;
use haggle::policy::Curve;
use haggle::profile::LinearAdditive;
use haggle::profile::UtilityFunction;
use haggle::session::Config;
use haggle::session::Decision;
use haggle::session::Engine;
use haggle::session::Event;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[derive(Parser)]
#[command(about = "self-play negotiation arena")]
struct Args {
    /// issues in the generated domain
    #[arg(long, default_value_t = 4)]
    issues: usize,
    /// values per issue
    #[arg(long, default_value_t = 5)]
    values: usize,
    /// turns before the deadline
    #[arg(long, default_value_t = 100)]
    deadline: u32,
    /// sessions to run
    #[arg(long, default_value_t = 16)]
    sessions: u64,
    /// acceptance curve for side A
    #[arg(long, value_enum, default_value_t = Curve::Nash)]
    ours: Curve,
    /// acceptance curve for side B
    #[arg(long, value_enum, default_value_t = Curve::Sigmoid)]
    theirs: Curve,
    /// seed for domains, profiles, and engines
    #[arg(long, default_value_t = 2024)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    haggle::log();
    let args = Args::parse();
    let mut agreements = Vec::new();
    for session in 0..args.sessions {
        let mut rng = SmallRng::seed_from_u64(args.seed.wrapping_add(session));
        let domain = domain(&args)?;
        let ours = LinearAdditive::random(&domain, &mut rng);
        let theirs = LinearAdditive::random(&domain, &mut rng);
        let mut a = Engine::new(
            domain.clone(),
            ours.clone(),
            Config {
                curve: args.ours,
                seed: Some(args.seed.wrapping_add(session).wrapping_mul(2)),
                ..Config::default()
            },
        );
        let mut b = Engine::new(
            domain.clone(),
            theirs.clone(),
            Config {
                curve: args.theirs,
                seed: Some(args.seed.wrapping_add(session).wrapping_mul(2).wrapping_add(1)),
                ..Config::default()
            },
        );
        let agreement = run(&mut a, &mut b, &ours, &theirs, args.deadline)?;
        match agreement {
            Some((ua, ub)) => {
                println!(
                    "session {:<4}{} ours={:.3} theirs={:.3}",
                    session,
                    "agreement".green(),
                    ua,
                    ub
                );
                agreements.push((ua, ub));
            }
            None => println!("session {:<4}{}", session, "no agreement".red()),
        }
    }
    report(&agreements, args.sessions);
    Ok(())
}

fn domain(args: &Args) -> anyhow::Result<Domain> {
    Domain::new(
        (0..args.issues)
            .map(|i| {
                Issue::new(
                    format!("issue{}", i),
                    (0..args.values)
                        .map(|v| Value::from(format!("v{}", v)))
                        .collect(),
                )
            })
            .collect(),
    )
}

/// Alternating-offers loop: the acting side decides, offers route to the
/// other side, acceptance ends the session. τ advances turn by turn.
fn run(
    a: &mut Engine<LinearAdditive>,
    b: &mut Engine<LinearAdditive>,
    ours: &LinearAdditive,
    theirs: &LinearAdditive,
    deadline: u32,
) -> anyhow::Result<Option<(f32, f32)>> {
    a.handle(Event::Opened)?;
    b.handle(Event::Opened)?;
    let mut agreement = None;
    for turn in 0..deadline {
        let progress = turn as f32 / deadline as f32;
        let (actor, other) = match turn % 2 {
            0 => (&mut *a, &mut *b),
            _ => (&mut *b, &mut *a),
        };
        let decision = actor
            .handle(Event::Turn(progress))?
            .context("engine must decide on its turn")?;
        match decision {
            Decision::Accept(bid) => {
                agreement = Some((ours.utility(&bid)?, theirs.utility(&bid)?));
                break;
            }
            Decision::Offer(bid) => {
                other.handle(Event::Received(bid))?;
            }
        }
    }
    a.handle(Event::Closed)?;
    b.handle(Event::Closed)?;
    Ok(agreement)
}

fn report(agreements: &[(f32, f32)], sessions: u64) {
    let n = agreements.len().max(1) as f32;
    let ua = agreements.iter().map(|(u, _)| u).sum::<f32>() / n;
    let ub = agreements.iter().map(|(_, u)| u).sum::<f32>() / n;
    let nash = agreements.iter().map(|(x, y)| x * y).sum::<f32>() / n;
    let welfare = agreements.iter().map(|(x, y)| x + y).sum::<f32>() / n;
    println!();
    println!("{:<24}{} / {}", "agreements", agreements.len(), sessions);
    println!("{:<24}{:.3}", "mean utility (A)", ua);
    println!("{:<24}{:.3}", "mean utility (B)", ub);
    println!("{:<24}{:.3}", "mean nash product", nash);
    println!("{:<24}{:.3}", "mean social welfare", welfare);
}
