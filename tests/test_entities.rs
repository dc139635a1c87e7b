use galaxy_defender::entities::*;

#[test]
fn rect_overlap_is_strict() {
    let a = Rect::new(0, 0, 10, 10);
    assert!(a.overlaps(&Rect::new(5, 5, 15, 15)));
    assert!(a.overlaps(&Rect::new(2, 2, 4, 4))); // contained
    assert!(!a.overlaps(&Rect::new(10, 0, 20, 10))); // shares right edge
    assert!(!a.overlaps(&Rect::new(0, 10, 10, 20))); // shares bottom edge
    assert!(!a.overlaps(&Rect::new(-20, -20, -10, -10)));
}

#[test]
fn rect_overlap_is_symmetric() {
    let a = Rect::new(0, 0, 10, 10);
    let b = Rect::new(9, -5, 12, 1);
    assert_eq!(a.overlaps(&b), b.overlaps(&a));
}

#[test]
fn centered_extent_handles_odd_sizes() {
    let e = Extent::centered(31, 15);
    let r = e.at(100, 100);
    assert_eq!(r.width(), 31);
    assert_eq!(r.height(), 15);
    assert_eq!(r, Rect::new(85, 93, 116, 108));
}

#[test]
fn fallback_shapes_have_expected_boxes() {
    let player = Player { x: 400, y: 550, extent: PLAYER_SHAPE };
    assert_eq!(player.bbox(), Rect::new(380, 550, 420, 580));

    let enemy = Enemy { x: 200, y: ENEMY_SPAWN_Y, extent: ENEMY_SHAPE };
    assert_eq!(enemy.bbox(), Rect::new(185, -30, 215, 0));

    let bullet = Bullet { x: 50, y: 100 };
    assert_eq!(bullet.bbox(), Rect::new(48, 80, 52, 90));
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState {
        player: Player { x: 400, y: 550, extent: PLAYER_SHAPE },
        bullets: Vec::new(),
        enemies: Vec::new(),
        enemy_extent: ENEMY_SHAPE,
        score: 0,
        status: GameStatus::Playing,
        frame: 0,
        events: Vec::new(),
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.x = 99;
    cloned.score = 999;
    cloned.enemies.push(Enemy { x: 5, y: 5, extent: ENEMY_SHAPE });

    assert_eq!(original.player.x, 400);
    assert_eq!(original.score, 0);
    assert!(original.enemies.is_empty());
}
