//! Road to Kantei
//!
//! Line-oriented front end for the career simulation. Reads one command per
//! line from stdin (or a script file) and prints new narration as it lands.

use clap::Parser;
use std::error::Error;
use std::fs::{self, File};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use career_core::events::TraceWriter;
use career_core::{ActionError, CareerConfig, CareerSession};
use career_events::{GamePhase, LogEntry, SessionSnapshot};

/// Command line arguments for the game
#[derive(Parser, Debug)]
#[command(name = "road_to_kantei")]
#[command(about = "From freshman legislator to Prime Minister")]
struct Args {
    /// Random seed for reproducibility (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Player name (blank falls back to the default)
    #[arg(long)]
    name: Option<String>,

    /// Configuration file
    #[arg(long, default_value = career_core::config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Read commands from a file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Write every narration entry as JSON lines to this file
    #[arg(long)]
    trace_out: Option<PathBuf>,

    /// Entries shown by the `log` command (overrides the config file)
    #[arg(long)]
    window: Option<usize>,
}

/// One parsed input line
#[derive(Debug, PartialEq)]
enum Command {
    Next,
    Status,
    Log,
    Help,
    Quit,
    Action(String),
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        let word = line.trim();
        if word.is_empty() || word.starts_with('#') {
            return None;
        }
        Some(match word {
            "next" | "n" => Command::Next,
            "status" | "s" => Command::Status,
            "log" => Command::Log,
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => Command::Action(other.to_string()),
        })
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = CareerConfig::load_or_default(&args.config);
    if let Some(seed) = args.seed {
        config.session.seed = seed;
    }
    if let Some(window) = args.window {
        config.log.display_window = window.max(1);
    }
    config.validate()?;

    let mut trace = match &args.trace_out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            Some(TraceWriter::new(File::create(path)?))
        }
        None => None,
    };

    println!("Road to Kantei");
    println!("==============");
    println!("Seed: {}", config.session.seed);
    println!();

    let mut session = CareerSession::with_seed(&config);
    session.set_player_name(args.name.as_deref().unwrap_or(&config.player.name));
    let mut printed = flush_new_entries(&session, 0, trace.as_mut())?;

    let input: Box<dyn BufRead> = match &args.script {
        Some(path) => Box::new(io::BufReader::new(File::open(path)?)),
        None => Box::new(io::BufReader::new(io::stdin())),
    };

    print_prompt(&session)?;
    for line in input.lines() {
        let line = line?;
        let Some(command) = Command::parse(&line) else {
            print_prompt(&session)?;
            continue;
        };

        match command {
            Command::Quit => break,
            Command::Help => print_help(&session),
            Command::Status => print_status(&session),
            Command::Log => {
                for entry in session.log().display().into_iter().rev() {
                    println!("  {}", format_entry(entry));
                }
            }
            Command::Next => session.advance(),
            Command::Action(id) => match session.invoke(&id) {
                Ok(_) => {}
                // Narrated in the log already
                Err(ActionError::InsufficientFunds { .. }) => {}
                Err(err) => println!("  ! {}", err),
            },
        }

        printed = flush_new_entries(&session, printed, trace.as_mut())?;
        if session.is_concluded() {
            break;
        }
        print_prompt(&session)?;
    }

    println!();
    print_status(&session);

    if let Some(mut trace) = trace {
        trace.flush()?;
        println!("Wrote {} trace entries", trace.entry_count());
    }

    Ok(())
}

/// Print and trace entries appended since the last call
fn flush_new_entries(
    session: &CareerSession,
    printed: usize,
    trace: Option<&mut TraceWriter<File>>,
) -> io::Result<usize> {
    let fresh = session.log().since(printed);
    for entry in fresh {
        println!("{}", format_entry(entry));
    }
    if let Some(trace) = trace {
        trace.write_batch(fresh)?;
    }
    Ok(printed + fresh.len())
}

fn format_entry(entry: &LogEntry) -> String {
    let marker = if entry.highlighted { "*" } else { " " };
    format!("{} [{}] {}", marker, entry.turn_label, entry.text)
}

fn print_prompt(session: &CareerSession) -> io::Result<()> {
    print!("({}) > ", session.turn_label());
    io::stdout().flush()
}

fn print_status(session: &CareerSession) {
    for line in status_lines(&session.snapshot()) {
        println!("{}", line);
    }
}

fn status_lines(snap: &SessionSnapshot) -> Vec<String> {
    let player = &snap.player;
    let chamber = &snap.chamber;
    let mut lines = vec![
        format!("--- {} ({}) ---", player.name, snap.clock.turn_label),
        format!("  Age {} | {} | {}", player.age, player.position, player.party_rank),
        format!(
            "  Funds {} man-yen | Approval {:.1}% | Influence {:.0}",
            player.funds, player.approval, player.influence
        ),
        format!(
            "  Ruling party {} / {} seats ({}) | national approval {:.1}%",
            chamber.ruling_party_seats,
            chamber.total_seats,
            if chamber.ruling_majority() { "majority" } else { "minority" },
            chamber.ruling_party_approval
        ),
    ];
    if snap.is_concluded() {
        if let Some(ending) = snap.ending {
            lines.push(format!("  Ended: {}", ending));
        }
    } else if snap.phase == GamePhase::ElectionCampaign {
        lines.push(format!("  Campaign day {}", snap.clock.election_day));
    } else {
        lines.push(format!("  Next election in {} months", snap.clock.months_until_election));
    }
    lines
}

fn print_help(session: &CareerSession) {
    println!("Commands: next, status, log, help, quit");
    println!("Actions this phase:");
    for spec in session.available_actions() {
        println!("  {:<16} {} ({} man-yen)", spec.id.key(), spec.title, spec.cost);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("next"), Some(Command::Next));
        assert_eq!(Command::parse("  q "), Some(Command::Quit));
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("# comment"), None);
        assert_eq!(
            Command::parse("campaign"),
            Some(Command::Action("campaign".to_string()))
        );
    }

    #[test]
    fn test_status_lines() {
        let session = CareerSession::with_seed(&CareerConfig::default());
        let lines = status_lines(&session.snapshot());
        assert_eq!(lines[0], "--- Taro Tanaka (month 1) ---");
        assert!(lines[3].contains("261 / 465 seats (majority)"));
        assert_eq!(lines[4], "  Next election in 48 months");
    }
}
