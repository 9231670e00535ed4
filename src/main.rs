//! Console Othello.
//!
//! The library owns the rules, the game session, and the search AI;
//! this binary is the menu REPL around it: rendering, move input, and
//! move-trace capture/persistence.
//!
//! ## Usage
//!
//! - `othello` - Interactive menu (singleplayer vs. AI or two-player)
//! - `othello demo` - Watch the search agent play the baseline selector
//! - `othello --depth 6` - Raise the AI search depth

use std::fs;
use std::io::{self, Write};

use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};

use othello::ai::search::{SearchAgent, SearchConfig};
use othello::game::{FirstLegalMoveSelector, GameSession, MoveSelector};
use othello::types::{GameOutcome, Position, Side, TraceRecord};

/// Console Othello with a minimax/alpha-beta AI.
#[derive(Parser)]
#[command(name = "othello")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// AI search depth in plies.
    #[arg(long, default_value_t = 4)]
    depth: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive menu (the default).
    Play,
    /// Play the search agent against the first-legal-move baseline.
    Demo,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Demo) => run_demo(cli.depth),
        Some(Commands::Play) | None => run_menu(cli.depth),
    }
}

fn run_menu(depth: u8) -> anyhow::Result<()> {
    let mut trace: Option<GameTrace> = None;

    loop {
        println!("\nWelcome to Othello\n");
        println!("1. Play singleplayer vs. AI");
        println!("2. Play two-player");
        println!("3. Show the move trace of the previous game");
        println!("4. Save the move trace of the previous game");
        println!("5. Exit");

        let input = prompt("\nEnter the number of your selection: ")?;
        match input.as_str() {
            "1" => trace = Some(run_singleplayer(depth)?),
            "2" => trace = Some(run_two_player()?),
            "3" => match &trace {
                Some(trace) => println!("\n{}", trace.listing()),
                None => println!("A game must be played before viewing its trace."),
            },
            "4" => match &trace {
                Some(trace) => save_trace(trace)?,
                None => println!("A game must be played before saving its trace."),
            },
            "5" => break,
            _ => println!("Invalid selection, enter a number from 1 to 5."),
        }
    }

    Ok(())
}

fn run_singleplayer(depth: u8) -> anyhow::Result<GameTrace> {
    let human = loop {
        let input = prompt("Pick your color (D for Dark, L for Light): ")?;
        match input.to_ascii_uppercase().as_str() {
            "D" => break Side::Dark,
            "L" => break Side::Light,
            _ => println!("Invalid selection, enter D or L."),
        }
    };
    let ai_side = human.opponent();
    println!("You play {human}, the AI plays {ai_side}. Dark moves first.");

    let mut session = GameSession::new();
    let mut agent = SearchAgent::new(ai_side, SearchConfig { depth, alpha_beta: true });
    let mut diagnostics = false;
    let mut trace = GameTrace::new(format!("Human: {human}, AI: {ai_side} (depth {depth})"));

    while !session.is_over() {
        let side = session.to_move();
        if !session.has_legal_moves() {
            println!("{side} has no legal moves and must pass.");
            session.pass()?;
            trace.note(format!("{side}: pass"));
            continue;
        }

        if side == human {
            println!("\n{}", render_cells(&session.board().to_array()));
            let record = loop {
                let input = prompt(&format!(
                    "{side}, enter your move (e.g. D3), -1 to toggle alpha-beta, -2 to toggle diagnostics: "
                ))?;
                match input.as_str() {
                    "-1" => {
                        agent.toggle_alpha_beta();
                        println!(
                            "Alpha-beta pruning is now {}.",
                            on_off(agent.alpha_beta_active())
                        );
                    }
                    "-2" => {
                        diagnostics = !diagnostics;
                        println!("Diagnostics are now {}.", on_off(diagnostics));
                    }
                    _ => match Position::parse(&input).and_then(|position| session.play(position)) {
                        Ok(record) => break record,
                        Err(err) => println!("{err}"),
                    },
                }
            };
            trace.push(record);
        } else {
            let outcome = agent
                .choose_move(session.board())
                .ok_or_else(|| anyhow!("search agent found no move despite legal moves"))?;
            let record = session.play(outcome.position)?;
            println!("AI ({side}) plays {}.", outcome.position);
            if diagnostics {
                println!(
                    "  score {}, {} states expanded, alpha-beta {}",
                    outcome.score,
                    outcome.nodes,
                    on_off(agent.alpha_beta_active())
                );
            }
            trace.push(record);
        }
    }

    conclude(&mut trace, &session);
    Ok(trace)
}

fn run_two_player() -> anyhow::Result<GameTrace> {
    let mut session = GameSession::new();
    let mut trace = GameTrace::new("Two-player game".to_string());

    while !session.is_over() {
        let side = session.to_move();
        if !session.has_legal_moves() {
            println!("{side} has no legal moves and must pass.");
            session.pass()?;
            trace.note(format!("{side}: pass"));
            continue;
        }

        println!("\n{}", render_cells(&session.board().to_array()));
        let record = loop {
            let input = prompt(&format!("{side}, enter your move (e.g. D3): "))?;
            match Position::parse(&input).and_then(|position| session.play(position)) {
                Ok(record) => break record,
                Err(err) => println!("{err}"),
            }
        };
        trace.push(record);
    }

    conclude(&mut trace, &session);
    Ok(trace)
}

fn run_demo(depth: u8) -> anyhow::Result<()> {
    println!("Search agent (Dark, depth {depth}) vs. first-legal-move baseline (Light)\n");

    let mut session = GameSession::new();
    let mut dark: Box<dyn MoveSelector> = Box::new(SearchAgent::new(
        Side::Dark,
        SearchConfig {
            depth,
            alpha_beta: true,
        },
    ));
    let mut light: Box<dyn MoveSelector> = Box::new(FirstLegalMoveSelector);
    let mut moves = 0u32;

    while !session.is_over() {
        let side = session.to_move();
        let selector = if side == Side::Dark { &mut dark } else { &mut light };
        match selector.select_move(session.board(), side) {
            Some(position) => {
                session.play(position)?;
                moves += 1;
            }
            None => session.pass()?,
        }
    }

    println!("{}", render_cells(&session.board().to_array()));
    let (dark_count, light_count) = session.score();
    println!("{moves} moves played. Final score: Dark {dark_count}, Light {light_count}.");
    println!("{}", verdict(session.outcome()));
    Ok(())
}

fn conclude(trace: &mut GameTrace, session: &GameSession) {
    println!("\n{}", render_cells(&session.board().to_array()));
    println!("No more legal moves for either side.");

    let (dark_count, light_count) = session.score();
    let verdict = verdict(session.outcome());
    println!("{verdict}");
    println!("Final score: Dark {dark_count}, Light {light_count}");
    trace.note(format!(
        "Final score: Dark {dark_count}, Light {light_count} - {verdict}"
    ));
}

fn verdict(outcome: Option<GameOutcome>) -> &'static str {
    match outcome.and_then(|outcome| outcome.winner) {
        Some(Side::Dark) => "Dark wins!",
        Some(Side::Light) => "Light wins!",
        None => "The game is a tie!",
    }
}

fn on_off(active: bool) -> &'static str {
    if active { "on" } else { "off" }
}

fn prompt(label: &str) -> anyhow::Result<String> {
    print!("{label}");
    io::stdout().flush().context("failed to flush stdout")?;

    let line = io::stdin().lines().next().context("stdin closed")??;
    Ok(line.trim().to_string())
}

fn save_trace(trace: &GameTrace) -> anyhow::Result<()> {
    let path = prompt("File name for the trace: ")?;
    if path.is_empty() {
        println!("No file name given.");
        return Ok(());
    }

    fs::write(&path, trace.export())
        .with_context(|| format!("failed to write trace to {path}"))?;
    println!("Trace saved to {path}.");
    Ok(())
}

/// One line of the move trace, with the board snapshot when the line
/// came from an applied move (pass and score lines have none).
struct TraceEntry {
    line: String,
    record: Option<TraceRecord>,
}

/// Move trace of a single game, collected by the driver from the
/// records the session emits.
struct GameTrace {
    header: String,
    entries: Vec<TraceEntry>,
}

impl GameTrace {
    fn new(header: String) -> Self {
        Self {
            header,
            entries: Vec::new(),
        }
    }

    fn push(&mut self, record: TraceRecord) {
        self.entries.push(TraceEntry {
            line: format!("{}: {}", record.side, record.position),
            record: Some(record),
        });
    }

    fn note(&mut self, line: String) {
        self.entries.push(TraceEntry { line, record: None });
    }

    /// Compact listing: one line per move/pass, for the menu.
    fn listing(&self) -> String {
        let mut out = self.header.clone();
        for entry in &self.entries {
            out.push('\n');
            out.push_str(&entry.line);
        }
        out
    }

    /// Full text export: every move line followed by the board it left
    /// behind.
    fn export(&self) -> String {
        let mut out = self.header.clone();
        out.push('\n');
        for entry in &self.entries {
            out.push('\n');
            out.push_str(&entry.line);
            out.push('\n');
            if let Some(record) = &entry.record {
                out.push_str(&render_cells(&record.board));
            }
        }
        out
    }
}

fn render_cells(cells: &[u8]) -> String {
    let mut out = String::from("  A B C D E F G H\n");
    for row in 0..8 {
        out.push_str(&(row + 1).to_string());
        for col in 0..8 {
            out.push(' ');
            out.push(cell_char(cells[row * 8 + col]));
        }
        out.push('\n');
    }
    out
}

fn cell_char(code: u8) -> char {
    match code {
        1 => 'D',
        2 => 'L',
        _ => '.',
    }
}
