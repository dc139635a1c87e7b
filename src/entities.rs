//! All game entity types and constants — pure data, no logic.
//!
//! Every coordinate is a logical pixel in the fixed `WIDTH` × `HEIGHT`
//! field.  The renderer decides how pixels map onto the terminal.

// ── Field & tuning constants ──────────────────────────────────────────────────

pub const WIDTH: i32 = 800;
pub const HEIGHT: i32 = 600;

/// Horizontal step per tick while a direction key is held.
pub const PLAYER_SPEED: i32 = 20;
pub const BULLET_SPEED: i32 = 10;
pub const ENEMY_SPEED: i32 = 3;

/// The ship never leaves `[PLAYER_MIN_X, PLAYER_MAX_X]`.
pub const PLAYER_MIN_X: i32 = 20;
pub const PLAYER_MAX_X: i32 = WIDTH - 20;
pub const PLAYER_START: (i32, i32) = (400, 550);

/// Enemies spawn with their centre somewhere in this column range.
pub const ENEMY_MIN_X: i32 = 30;
pub const ENEMY_MAX_X: i32 = WIDTH - 30;
/// Anchor row of a freshly spawned enemy (just above the top edge).
pub const ENEMY_SPAWN_Y: i32 = -30;

pub const SCORE_PER_KILL: u32 = 10;

/// Milliseconds between ticks (≈60 FPS).
pub const TICK_MS: u64 = 16;
/// Base spawn interval; shrinks by 10 ms per point of score.
pub const SPAWN_RATE_MS: u64 = 1000;
pub const MIN_SPAWN_MS: u64 = 200;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned bounding box.  `right` and `bottom` are exclusive edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Rect { left, top, right, bottom }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Strict overlap: boxes that only share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.top < other.bottom
            && self.bottom > other.top
    }
}

/// Bounding box of an entity relative to its anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Extent {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Extent {
    /// A `width` × `height` box centred on the anchor.
    pub fn centered(width: u32, height: u32) -> Self {
        let (w, h) = (width as i32, height as i32);
        Extent {
            left: -(w / 2),
            top: -(h / 2),
            right: w - w / 2,
            bottom: h - h / 2,
        }
    }

    pub fn at(&self, x: i32, y: i32) -> Rect {
        Rect::new(x + self.left, y + self.top, x + self.right, y + self.bottom)
    }
}

/// Fallback ship: a triangle with its tip at the anchor, 40 wide, 30 tall.
pub const PLAYER_SHAPE: Extent = Extent { left: -20, top: 0, right: 20, bottom: 30 };

/// Fallback enemy: a 30 × 30 oval hanging below the anchor.
pub const ENEMY_SHAPE: Extent = Extent { left: -15, top: 0, right: 15, bottom: 30 };

/// Bullets are 4 × 10 and start just above the ship's tip.
pub const BULLET_SHAPE: Extent = Extent { left: -2, top: -20, right: 2, bottom: -10 };

// ── Entities ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

#[derive(Clone, Debug)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub extent: Extent,
}

impl Player {
    pub fn bbox(&self) -> Rect {
        self.extent.at(self.x, self.y)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: i32,
    pub y: i32,
}

impl Bullet {
    pub fn bbox(&self) -> Rect {
        BULLET_SHAPE.at(self.x, self.y)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: i32,
    pub y: i32,
    pub extent: Extent,
}

impl Enemy {
    pub fn bbox(&self) -> Rect {
        self.extent.at(self.x, self.y)
    }
}

/// Which direction keys are held during a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Steering {
    pub left: bool,
    pub right: bool,
}

/// Notifications for the frontend (sound effects, logging).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Shot,
    Explosion,
    GameOver { score: u32 },
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    /// Box given to every newly spawned enemy (sprite size or fallback oval).
    pub enemy_extent: Extent,
    pub score: u32,
    pub status: GameStatus,
    pub frame: u64,
    /// Events raised since the frontend last drained them.
    pub events: Vec<GameEvent>,
}
