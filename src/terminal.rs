#![cfg(feature = "std")]
//! Text frontend: draws both boards to stdout and reads targets from stdin.

use std::fmt::Write as _;
use std::io::Write as _;

use log::{info, warn};
use rand::Rng;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::{
    board::Board,
    common::{Cell, Coord},
    turn::{TurnController, TurnState, RESTART_PROMPT},
};

/// A line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Fire(Coord),
    Restart,
    Help,
    Quit,
}

fn column_label(col: usize) -> char {
    (b'A' + (col % 26) as u8) as char
}

/// Parse `A5`-style coordinates: column letter then one-based row.
pub fn parse_coord(input: &str, size: usize) -> Result<Coord, String> {
    let input = input.trim();
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let last_col = column_label(size.saturating_sub(1));
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-{}", col_ch, last_col));
    }
    let col = (col_ch as u8 - b'A') as usize;
    if col >= size {
        return Err(format!("Column '{}' out of bounds - must be A-{}", col_ch, last_col));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-{}", row_str, size))?;
    if row == 0 || row > size {
        return Err(format!("Row {} out of bounds - must be 1-{}", row, size));
    }
    Ok(Coord::new(row - 1, col))
}

/// Parse one input line.
pub fn parse_command(line: &str, size: usize) -> Result<Command, String> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("r") || line.eq_ignore_ascii_case("restart") {
        return Ok(Command::Restart);
    }
    if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
        return Ok(Command::Quit);
    }
    if line.eq_ignore_ascii_case("help") || line == "?" {
        return Ok(Command::Help);
    }
    parse_coord(line, size).map(Command::Fire)
}

fn cell_char(cell: Cell, reveal: bool) -> char {
    match cell {
        Cell::Ship if reveal => 'S',
        Cell::Hit => 'X',
        Cell::Miss => 'o',
        Cell::Empty | Cell::Ship => '.',
    }
}

fn board_rows(board: &Board, reveal: bool) -> Vec<String> {
    let size = board.size();
    let mut rows = Vec::with_capacity(size + 1);
    let mut header = String::from("   ");
    for c in 0..size {
        let _ = write!(header, " {}", column_label(c));
    }
    rows.push(header);
    for r in 0..size {
        let mut line = format!("{:2} ", r + 1);
        for c in 0..size {
            let cell = board.cell(Coord::new(r, c)).unwrap_or(Cell::Empty);
            let _ = write!(line, " {}", cell_char(cell, reveal));
        }
        rows.push(line);
    }
    rows
}

/// Render one frame: own ships on the left, the enemy radar on the right,
/// then the message lines.
pub fn render<R: Rng>(controller: &TurnController<R>) -> String {
    let game = controller.game();
    let left = board_rows(game.player_board(), true);
    let right = board_rows(game.player_guesses(), false);
    let width = left.iter().map(|l| l.chars().count()).max().unwrap_or(0).max(10);

    let mut out = String::new();
    let _ = writeln!(out, "{:<width$}      {}", "Your Ships", "Enemy Radar", width = width);
    for (l, r) in left.iter().zip(right.iter()) {
        let _ = writeln!(out, "{:<width$}      {}", l, r, width = width);
    }
    let _ = writeln!(out);
    match controller.banner() {
        Some(banner) => {
            let _ = writeln!(out, "{}", banner.text);
            let _ = writeln!(out, "{}", RESTART_PROMPT);
        }
        None => {
            let _ = writeln!(out, "{}", controller.status().text);
            if let Some(line) = controller.ai_line() {
                let _ = writeln!(out, "{}", line.text);
            }
        }
    }
    out
}

fn print_help(size: usize) {
    println!(
        "Enter a target like A1..{}{}, 'r' to restart after a game, 'q' to quit.",
        column_label(size.saturating_sub(1)),
        size
    );
}

fn draw<R: Rng>(controller: &TurnController<R>) {
    let mut stdout = std::io::stdout().lock();
    let _ = write!(stdout, "\n{}", render(controller));
    if controller.state() == TurnState::PlayerTurn {
        let _ = write!(stdout, "> ");
    }
    let _ = stdout.flush();
}

/// Run the terminal game until the player quits or stdin closes.
///
/// The loop ticks at the configured frame rate so the AI delays elapse
/// while input is pending.
pub async fn run<R: Rng>(mut controller: TurnController<R>) -> anyhow::Result<()> {
    let size = controller.config().grid_size;
    let mut ticker = time::interval(controller.config().frame_interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut last_frame = Instant::now();

    print_help(size);
    draw(&controller);
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let now = Instant::now();
                let elapsed = now.duration_since(last_frame);
                last_frame = now;
                if controller.tick(elapsed)? {
                    draw(&controller);
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    info!("stdin closed, leaving");
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match parse_command(&line, size) {
                    Ok(Command::Quit) => break,
                    Ok(Command::Help) => print_help(size),
                    Ok(Command::Restart) => {
                        if controller.restart()? {
                            draw(&controller);
                        } else {
                            println!("Restart is only available once the game is over.");
                        }
                    }
                    Ok(Command::Fire(coord)) => {
                        controller.click(Some(coord))?;
                        draw(&controller);
                    }
                    Err(e) => {
                        warn!("bad input {:?}: {}", line, e);
                        println!("✗ {}", e);
                    }
                }
            }
        }
    }
    Ok(())
}
