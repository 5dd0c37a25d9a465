use std::process::Command;

use minibattle::{simulate_many, simulate_match, GameConfig, Side};

#[test]
fn simulated_match_reaches_a_winner() {
    let report = simulate_match(GameConfig::default(), 17).unwrap();
    let winner = report.winner.expect("match should be decided");
    assert!(report.player_shots >= 1 && report.player_shots <= 25);
    // the AI fires once after every player shot except a winning one
    match winner {
        Side::Player => assert_eq!(report.ai_shots, report.player_shots - 1),
        Side::Ai => assert_eq!(report.ai_shots, report.player_shots),
    }
    assert!(report.simulated_ms >= 1000 * report.ai_shots as u64);
}

#[test]
fn simulation_is_reproducible() {
    let a = simulate_match(GameConfig::default(), 99).unwrap();
    let b = simulate_match(GameConfig::default(), 99).unwrap();
    assert_eq!(a, b);
}

#[test]
fn simulate_many_counts_results() {
    let summary = simulate_many(GameConfig::with_grid(4, 2), 5, 6).unwrap();
    assert_eq!(summary.games, 6);
    assert_eq!(summary.matches.len(), 6);
    assert_eq!(summary.player_wins + summary.ai_wins + summary.undecided, 6);
    assert_eq!(summary.undecided, 0);
}

#[test]
fn sim_binary_smoke() {
    let output = Command::new("cargo")
        .args(["run", "--quiet", "--bin", "sim", "--", "1", "--games", "2"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["games"], 2);
    assert!(v["matches"][0]["winner"].is_string());
}
