//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (and, where needed, an RNG handle) and returns a brand-new
//! `GameState`.  Side effects are limited to the injected RNG and to the
//! `events` queue carried inside the returned state.

use std::time::Duration;

use rand::Rng;

use crate::entities::{
    Bullet, Enemy, Extent, GameEvent, GameState, GameStatus, Player, Steering, BULLET_SPEED,
    ENEMY_MAX_X, ENEMY_MIN_X, ENEMY_SPAWN_Y, ENEMY_SPEED, HEIGHT, MIN_SPAWN_MS, PLAYER_MAX_X,
    PLAYER_MIN_X, PLAYER_SPEED, PLAYER_START, SCORE_PER_KILL, SPAWN_RATE_MS,
};

// ── Difficulty ───────────────────────────────────────────────────────────────

/// Delay before the next enemy spawn: 10 ms shorter per point, never below 200 ms.
pub fn spawn_interval(score: u32) -> Duration {
    let shrink = u64::from(score).saturating_mul(10);
    Duration::from_millis(SPAWN_RATE_MS.saturating_sub(shrink).max(MIN_SPAWN_MS))
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state.  The extents come from the loaded sprites,
/// or from the fallback shapes when no sprite is available.
pub fn init_state(player_extent: Extent, enemy_extent: Extent) -> GameState {
    GameState {
        player: Player {
            x: PLAYER_START.0,
            y: PLAYER_START.1,
            extent: player_extent,
        },
        bullets: Vec::new(),
        enemies: Vec::new(),
        enemy_extent,
        score: 0,
        status: GameStatus::Playing,
        frame: 0,
        events: Vec::new(),
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

pub fn move_player_left(state: &GameState) -> GameState {
    let new_x = (state.player.x - PLAYER_SPEED).max(PLAYER_MIN_X);
    GameState {
        player: Player {
            x: new_x,
            ..state.player.clone()
        },
        ..state.clone()
    }
}

pub fn move_player_right(state: &GameState) -> GameState {
    let new_x = (state.player.x + PLAYER_SPEED).min(PLAYER_MAX_X);
    GameState {
        player: Player {
            x: new_x,
            ..state.player.clone()
        },
        ..state.clone()
    }
}

/// Apply one step of held-key movement.  Left wins over Right unless the
/// ship is already pinned against the left wall.
pub fn move_player(state: &GameState, steering: Steering) -> GameState {
    if steering.left && state.player.x > PLAYER_MIN_X {
        move_player_left(state)
    } else if steering.right && state.player.x < PLAYER_MAX_X {
        move_player_right(state)
    } else {
        state.clone()
    }
}

/// Fire one bullet from the ship's current position.  No-op after game over.
pub fn player_shoot(state: &GameState) -> GameState {
    if state.status == GameStatus::GameOver {
        return state.clone();
    }
    let mut bullets = state.bullets.clone();
    bullets.push(Bullet {
        x: state.player.x,
        y: state.player.y,
    });
    let mut events = state.events.clone();
    events.push(GameEvent::Shot);
    GameState {
        bullets,
        events,
        ..state.clone()
    }
}

/// Drop one enemy in at a random column just above the top edge.
pub fn spawn_enemy(state: &GameState, rng: &mut impl Rng) -> GameState {
    if state.status == GameStatus::GameOver {
        return state.clone();
    }
    let x = rng.gen_range(ENEMY_MIN_X..=ENEMY_MAX_X);
    let mut enemies = state.enemies.clone();
    enemies.push(Enemy {
        x,
        y: ENEMY_SPAWN_Y,
        extent: state.enemy_extent,
    });
    GameState {
        enemies,
        ..state.clone()
    }
}

// ── Per-tick update ──────────────────────────────────────────────────────────

/// Advance the simulation by one tick: move the ship, move and cull
/// projectiles and enemies, then resolve collisions.
pub fn tick(state: &GameState, steering: Steering) -> GameState {
    if state.status == GameStatus::GameOver {
        return state.clone();
    }

    let moved = move_player(state, steering);

    // ── 1. Bullets fly up and vanish once fully above the field ──────────────
    let bullets: Vec<Bullet> = moved
        .bullets
        .iter()
        .map(|b| Bullet {
            y: b.y - BULLET_SPEED,
            ..b.clone()
        })
        .filter(|b| b.bbox().bottom >= 0)
        .collect();

    // ── 2. Enemies fall and vanish once their anchor passes the bottom ───────
    // The anchor is the top edge of the fallback oval and the centre of a sprite.
    let enemies: Vec<Enemy> = moved
        .enemies
        .iter()
        .map(|e| Enemy {
            y: e.y + ENEMY_SPEED,
            ..e.clone()
        })
        .filter(|e| e.y <= HEIGHT)
        .collect();

    let advanced = GameState {
        bullets,
        enemies,
        frame: state.frame + 1,
        ..moved
    };

    check_collisions(&advanced)
}

/// Resolve enemy↔ship and bullet↔enemy overlaps.
///
/// Enemies are scanned in spawn order.  An enemy touching the ship ends the
/// game on the spot.  Otherwise the first bullet overlapping it (in firing
/// order) destroys both and scores; later bullets are not considered for
/// that enemy.
pub fn check_collisions(state: &GameState) -> GameState {
    let player_box = state.player.bbox();

    let mut enemies: Vec<Enemy> = Vec::with_capacity(state.enemies.len());
    let mut bullets: Vec<Bullet> = state.bullets.clone();
    let mut events = state.events.clone();
    let mut score = state.score;
    let mut status = state.status.clone();

    for (i, enemy) in state.enemies.iter().enumerate() {
        let enemy_box = enemy.bbox();

        if enemy_box.overlaps(&player_box) {
            status = GameStatus::GameOver;
            events.push(GameEvent::GameOver { score });
            // Everything not yet scanned stays on screen as-is.
            enemies.extend(state.enemies[i..].iter().cloned());
            break;
        }

        match bullets.iter().position(|b| b.bbox().overlaps(&enemy_box)) {
            Some(hit) => {
                bullets.remove(hit);
                score += SCORE_PER_KILL;
                events.push(GameEvent::Explosion);
            }
            None => enemies.push(enemy.clone()),
        }
    }

    GameState {
        enemies,
        bullets,
        events,
        score,
        status,
        ..state.clone()
    }
}
