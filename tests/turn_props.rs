use std::time::Duration;

use minibattle::{Cell, Coord, GameConfig, Side, TurnController, TurnState};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

#[derive(Debug, Clone)]
enum Action {
    Click(Option<(usize, usize)>),
    Tick(u64),
    Restart,
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => prop::option::weighted(0.9, (0usize..6, 0usize..6)).prop_map(Action::Click),
        4 => (0u64..2000).prop_map(Action::Tick),
        1 => Just(Action::Restart),
    ]
}

fn resolved(cell: Cell) -> bool {
    matches!(cell, Cell::Hit | Cell::Miss)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn controller_keeps_board_invariants(seed in any::<u64>(), actions in prop::collection::vec(action(), 1..200)) {
        let config = GameConfig::default();
        let mut ctl = TurnController::new(config, SmallRng::seed_from_u64(seed)).unwrap();

        for action in actions {
            let player_before = ctl.game().player_board().clone();
            let guesses_before = ctl.game().player_guesses().clone();
            let restarted = match action {
                Action::Click(target) => {
                    ctl.click(target.map(Coord::from)).unwrap();
                    false
                }
                Action::Tick(ms) => {
                    ctl.tick(Duration::from_millis(ms)).unwrap();
                    false
                }
                Action::Restart => ctl.restart().unwrap(),
            };

            let game = ctl.game();
            // AI never fires twice at the same cell
            prop_assert_eq!(game.ai().shots_taken(), game.player_board().coords().filter(|c| resolved(game.player_board().cell(*c).unwrap())).count());
            // guess board mirrors the AI board's resolved cells
            for coord in game.ai_board().coords() {
                let real = game.ai_board().cell(coord).unwrap();
                let seen = game.player_guesses().cell(coord).unwrap();
                prop_assert_eq!(resolved(real), resolved(seen));
                if resolved(seen) {
                    prop_assert_eq!(real, seen);
                }
            }
            prop_assert_eq!(game.player_board().count(Cell::Ship) + game.player_board().count(Cell::Hit), config.ship_count);
            prop_assert_eq!(game.ai_board().count(Cell::Ship) + game.ai_board().count(Cell::Hit), config.ship_count);

            // cells only move forward unless the game restarted
            if !restarted {
                for coord in player_before.coords() {
                    let before = player_before.cell(coord).unwrap();
                    let after = game.player_board().cell(coord).unwrap();
                    let ok = before == after
                        || (before == Cell::Ship && after == Cell::Hit)
                        || (before == Cell::Empty && after == Cell::Miss);
                    prop_assert!(ok, "{:?} -> {:?} at {:?}", before, after, coord);
                    if resolved(guesses_before.cell(coord).unwrap()) {
                        prop_assert_eq!(guesses_before.cell(coord).unwrap(), game.player_guesses().cell(coord).unwrap());
                    }
                }
            }

            match ctl.state() {
                TurnState::GameOver { winner: Side::Player } => prop_assert!(game.ai_board().all_sunk()),
                TurnState::GameOver { winner: Side::Ai } => prop_assert!(game.player_board().all_sunk()),
                _ => {
                    prop_assert!(!game.ai_board().all_sunk());
                    prop_assert!(!game.player_board().all_sunk());
                }
            }
        }
    }
}
