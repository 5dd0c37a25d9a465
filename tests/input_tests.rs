use minibattle::{BoardGeometry, Coord, GameConfig};
use proptest::prelude::*;

#[test]
fn test_cell_at_corners_and_edges() {
    let geo = BoardGeometry::new(50.0, 50.0, 60.0, 5);
    assert_eq!(geo.cell_at(50.0, 50.0), Some(Coord::new(0, 0)));
    assert_eq!(geo.cell_at(109.9, 50.0), Some(Coord::new(0, 0)));
    assert_eq!(geo.cell_at(110.0, 50.0), Some(Coord::new(0, 1)));
    assert_eq!(geo.cell_at(349.9, 349.9), Some(Coord::new(4, 4)));
    assert_eq!(geo.cell_at(350.0, 100.0), None);
    assert_eq!(geo.cell_at(100.0, 350.0), None);
    assert_eq!(geo.cell_at(49.9, 100.0), None);
    assert_eq!(geo.cell_at(-10.0, -10.0), None);
    assert_eq!(geo.cell_at(f32::NAN, 100.0), None);
}

#[test]
fn test_rows_follow_y_and_cols_follow_x() {
    let geo = BoardGeometry::new(0.0, 0.0, 10.0, 3);
    assert_eq!(geo.cell_at(25.0, 5.0), Some(Coord::new(0, 2)));
    assert_eq!(geo.cell_at(5.0, 25.0), Some(Coord::new(2, 0)));
}

#[test]
fn test_default_layout_matches_screen() {
    let config = GameConfig::default();
    assert_eq!(config.screen_size(), (800, 450));

    let own = config.own_board_geometry();
    assert_eq!((own.origin_x, own.origin_y), (50.0, 50.0));
    let radar = config.enemy_board_geometry();
    assert_eq!((radar.origin_x, radar.origin_y), (450.0, 50.0));

    // a click on the player's own board never maps onto the radar
    assert_eq!(radar.cell_at(100.0, 100.0), None);
    assert_eq!(radar.cell_at(455.0, 345.0), Some(Coord::new(4, 0)));
}

#[test]
fn test_cell_rect() {
    let geo = BoardGeometry::new(450.0, 50.0, 60.0, 5);
    let rect = geo.cell_rect(Coord::new(2, 3));
    assert_eq!((rect.x, rect.y, rect.width, rect.height), (630.0, 170.0, 60.0, 60.0));
}

proptest! {
    #[test]
    fn cell_rect_center_maps_back(row in 0usize..8, col in 0usize..8, cell in 1u32..100) {
        let geo = BoardGeometry::new(17.0, 33.0, cell as f32, 8);
        let rect = geo.cell_rect(Coord::new(row, col));
        let hit = geo.cell_at(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0);
        prop_assert_eq!(hit, Some(Coord::new(row, col)));
    }

    #[test]
    fn cell_at_stays_in_range(x in -500.0f32..2000.0, y in -500.0f32..2000.0) {
        let geo = BoardGeometry::new(50.0, 50.0, 60.0, 5);
        if let Some(coord) = geo.cell_at(x, y) {
            prop_assert!(coord.row < 5 && coord.col < 5);
        }
    }
}
