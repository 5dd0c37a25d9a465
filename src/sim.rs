#![cfg(feature = "std")]
//! Headless self-play. A scripted "mouse" clicks random screen positions and
//! time advances one frame per step, so a whole match runs in microseconds.

use core::time::Duration;

use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::{
    common::Side,
    config::GameConfig,
    game::GameError,
    turn::{ClickResult, TurnController},
};

/// Hard stop for a runaway simulation.
pub const MAX_FRAMES: u64 = 1_000_000;

/// Summary of one simulated match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchReport {
    pub seed: u64,
    pub winner: Option<Side>,
    pub player_shots: usize,
    pub ai_shots: usize,
    pub rejected_clicks: usize,
    pub frames: u64,
    pub simulated_ms: u64,
}

/// Play one match with a random clicker on the human side.
pub fn simulate_match(config: GameConfig, seed: u64) -> Result<MatchReport, GameError> {
    let mut mouse = SmallRng::seed_from_u64(seed);
    let mut controller = TurnController::new(config, SmallRng::seed_from_u64(seed.wrapping_add(1)))?;
    let radar = config.enemy_board_geometry();
    let (width, height) = config.screen_size();
    let frame = config.frame_interval();

    let mut report = MatchReport {
        seed,
        winner: None,
        player_shots: 0,
        ai_shots: 0,
        rejected_clicks: 0,
        frames: 0,
        simulated_ms: 0,
    };
    let mut elapsed = Duration::ZERO;

    while report.frames < MAX_FRAMES {
        report.frames += 1;
        let x = mouse.random_range(0.0..width as f32);
        let y = mouse.random_range(0.0..height as f32);
        match controller.click(radar.cell_at(x, y))? {
            ClickResult::Fired(_) => report.player_shots += 1,
            ClickResult::AlreadyShot => report.rejected_clicks += 1,
            ClickResult::Ignored => {}
        }
        controller.tick(frame)?;
        elapsed += frame;
        if let Some(winner) = controller.winner() {
            report.winner = Some(winner);
            break;
        }
    }

    report.ai_shots = controller.game().ai().shots_taken();
    report.simulated_ms = elapsed.as_millis() as u64;
    debug!("simulated match {}: {:?}", seed, report);
    Ok(report)
}

/// Aggregate over several matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimSummary {
    pub games: usize,
    pub player_wins: usize,
    pub ai_wins: usize,
    pub undecided: usize,
    pub matches: Vec<MatchReport>,
}

/// Run `games` matches with consecutive seeds starting at `seed`.
pub fn simulate_many(config: GameConfig, seed: u64, games: usize) -> Result<SimSummary, GameError> {
    let mut summary = SimSummary {
        games,
        player_wins: 0,
        ai_wins: 0,
        undecided: 0,
        matches: Vec::with_capacity(games),
    };
    for i in 0..games {
        let report = simulate_match(config, seed.wrapping_add(2 * i as u64))?;
        match report.winner {
            Some(Side::Player) => summary.player_wins += 1,
            Some(Side::Ai) => summary.ai_wins += 1,
            None => summary.undecided += 1,
        }
        summary.matches.push(report);
    }
    Ok(summary)
}
