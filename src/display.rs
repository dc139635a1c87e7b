//! Rendering layer — all terminal I/O lives here.
//!
//! `draw_scene` translates the game state into canvas cells; `render`
//! writes the canvas (plus a frame around it) to the terminal.  No game
//! logic is performed here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::assets::{Assets, SoundClip};
use crate::canvas::{Anchor, Canvas, Viewport};
use crate::entities::{
    Bullet, Enemy, GameState, GameStatus, Player, Rect, HEIGHT, WIDTH,
};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BACKGROUND: Color = Color::Black;
const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::White;
const C_PLAYER: Color = Color::Green;
const C_ENEMY: Color = Color::Red;
const C_BULLET: Color = Color::Yellow;
const C_GAME_OVER: Color = Color::Red;
const C_FINAL_SCORE: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;

const HINT: &str = "← → / A D : Move   SPACE : Shoot   Q : Quit";

// ── Scene composition ─────────────────────────────────────────────────────────

/// Redraw the whole field from the entity lists.
pub fn draw_scene(canvas: &mut Canvas, state: &GameState, assets: &Assets) {
    match &assets.background {
        Some(bg) => {
            canvas.clear(C_BACKGROUND);
            canvas.blit(Rect::new(0, 0, WIDTH, HEIGHT), bg);
        }
        None => canvas.clear(C_BACKGROUND),
    }

    canvas.text(
        50,
        30,
        &format!("Score: {}", state.score),
        C_HUD_SCORE,
        Anchor::West,
    );

    for enemy in &state.enemies {
        draw_enemy(canvas, enemy, assets);
    }
    for bullet in &state.bullets {
        draw_bullet(canvas, bullet);
    }
    draw_player(canvas, &state.player, assets);

    if state.status == GameStatus::GameOver {
        draw_game_over(canvas, state);
    }
}

fn draw_player(canvas: &mut Canvas, player: &Player, assets: &Assets) {
    match &assets.player {
        Some(sprite) => canvas.blit(player.bbox(), sprite),
        None => {
            // Tip at the anchor, wings spread below it.
            let b = player.bbox();
            canvas.fill_triangle(
                [(player.x, b.top), (b.left, b.bottom), (b.right, b.bottom)],
                C_PLAYER,
            );
        }
    }
}

fn draw_enemy(canvas: &mut Canvas, enemy: &Enemy, assets: &Assets) {
    match &assets.enemy {
        Some(sprite) => canvas.blit(enemy.bbox(), sprite),
        None => canvas.fill_oval(enemy.bbox(), C_ENEMY),
    }
}

fn draw_bullet(canvas: &mut Canvas, bullet: &Bullet) {
    canvas.fill_rect(bullet.bbox(), C_BULLET);
}

fn draw_game_over(canvas: &mut Canvas, state: &GameState) {
    let (cx, cy) = (WIDTH / 2, HEIGHT / 2);
    canvas.text(cx, cy, "GAME OVER", C_GAME_OVER, Anchor::Center);
    canvas.text(
        cx,
        cy + 50,
        &format!("Final Score: {}", state.score),
        C_FINAL_SCORE,
        Anchor::Center,
    );
}

// ── Terminal output ───────────────────────────────────────────────────────────

/// Write one complete frame.  Colours are only re-sent when they change.
pub fn render<W: Write>(out: &mut W, canvas: &Canvas) -> std::io::Result<()> {
    let vp = *canvas.viewport();

    draw_border(out, &vp)?;

    for row in 0..vp.rows {
        out.queue(cursor::MoveTo(vp.origin_col, vp.origin_row + row))?;
        let mut current: Option<(Color, Color)> = None;
        for col in 0..vp.cols {
            let Some(cell) = canvas.cell(col, row) else {
                continue;
            };
            if current != Some((cell.fg, cell.bg)) {
                out.queue(style::SetForegroundColor(cell.fg))?;
                out.queue(style::SetBackgroundColor(cell.bg))?;
                current = Some((cell.fg, cell.bg));
            }
            out.queue(Print(cell.ch))?;
        }
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, 0))?;
    out.flush()?;
    Ok(())
}

/// Wipe the terminal, e.g. after a resize moved the field.
pub fn clear<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(style::ResetColor)?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    Ok(())
}

fn draw_border<W: Write>(out: &mut W, vp: &Viewport) -> std::io::Result<()> {
    let w = vp.cols as usize;
    let left = vp.origin_col.saturating_sub(1);
    let right = vp.origin_col + vp.cols;
    let top = vp.origin_row.saturating_sub(1);
    let bottom = vp.origin_row + vp.rows;

    out.queue(style::ResetColor)?;
    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(left, top))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w))))?;
    out.queue(cursor::MoveTo(left, bottom))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w))))?;

    for row in vp.origin_row..bottom {
        out.queue(cursor::MoveTo(left, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(right, row))?;
        out.queue(Print("│"))?;
    }

    // Controls hint just under the frame, when there is room.
    if bottom + 1 < vp.term_rows {
        let hint: String = HINT
            .chars()
            .take(vp.term_cols.saturating_sub(left) as usize)
            .collect();
        out.queue(cursor::MoveTo(left, bottom + 1))?;
        out.queue(style::SetForegroundColor(C_HINT))?;
        out.queue(Print(hint))?;
    }
    Ok(())
}

/// Sound output: the terminal bell.  Best-effort; errors are ignored.
pub fn play_sound<W: Write>(out: &mut W, clip: Option<&SoundClip>) {
    if clip.is_some() {
        let _ = out.queue(Print('\u{7}'));
    }
}
