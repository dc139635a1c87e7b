//! Best-effort loading of the optional images and sound clips.
//!
//! Every loader returns a `Result`; `Assets::load` turns failures into `None`
//! so the caller can pick a drawn shape or silence instead.

use std::path::{Path, PathBuf};

use image::RgbaImage;
use log::{debug, info};

use crate::entities::{Extent, GameEvent, ENEMY_SHAPE, PLAYER_SHAPE};
use crate::error::AssetError;

/// Pixels with less alpha than this are treated as transparent.
const ALPHA_CUTOFF: u8 = 128;

/// A decoded RGBA image.
#[derive(Clone, Debug)]
pub struct Sprite {
    image: RgbaImage,
}

impl Sprite {
    pub fn from_image(image: RgbaImage) -> Self {
        Sprite { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Bounding box of the sprite centred on its anchor.
    pub fn extent(&self) -> Extent {
        Extent::centered(self.width(), self.height())
    }

    /// Colour at fractional position `(u, v)` in `[0, 1)²`, or `None` where
    /// the image is transparent.
    pub fn sample(&self, u: f32, v: f32) -> Option<(u8, u8, u8)> {
        if self.width() == 0 || self.height() == 0 {
            return None;
        }
        let px = ((u * self.width() as f32) as u32).min(self.width() - 1);
        let py = ((v * self.height() as f32) as u32).min(self.height() - 1);
        let [r, g, b, a] = self.image.get_pixel(px, py).0;
        (a >= ALPHA_CUTOFF).then_some((r, g, b))
    }
}

/// A sound effect file that exists and looks like a WAVE container.
#[derive(Clone, Debug, PartialEq)]
pub struct SoundClip {
    pub path: PathBuf,
    pub len: usize,
}

pub fn load_sprite(path: &Path) -> Result<Sprite, AssetError> {
    let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let image = image::load_from_memory(&bytes).map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Sprite::from_image(image.to_rgba8()))
}

pub fn load_sound(path: &Path) -> Result<SoundClip, AssetError> {
    let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if bytes.len() < 12 || &bytes[0..4] != b"RIFF" || &bytes[8..12] != b"WAVE" {
        return Err(AssetError::NotWave(path.to_path_buf()));
    }
    Ok(SoundClip {
        path: path.to_path_buf(),
        len: bytes.len(),
    })
}

fn optional<T>(result: Result<T, AssetError>) -> Option<T> {
    match result {
        Ok(asset) => Some(asset),
        Err(e) => {
            debug!("asset unavailable, using fallback: {e}");
            None
        }
    }
}

/// Everything the game may find under `assets/`.  Each slot is independent.
#[derive(Clone, Debug, Default)]
pub struct Assets {
    pub background: Option<Sprite>,
    pub player: Option<Sprite>,
    pub enemy: Option<Sprite>,
    pub shoot: Option<SoundClip>,
    pub explosion: Option<SoundClip>,
}

impl Assets {
    pub fn load(dir: &Path) -> Self {
        let assets = Assets {
            background: optional(load_sprite(&dir.join("background.png"))),
            player: optional(load_sprite(&dir.join("player.png"))),
            enemy: optional(load_sprite(&dir.join("enemy.png"))),
            shoot: optional(load_sound(&dir.join("shoot.wav"))),
            explosion: optional(load_sound(&dir.join("explosion.wav"))),
        };
        info!(
            "assets from {}: background={} player={} enemy={} shoot={} explosion={}",
            dir.display(),
            assets.background.is_some(),
            assets.player.is_some(),
            assets.enemy.is_some(),
            assets.shoot.is_some(),
            assets.explosion.is_some(),
        );
        assets
    }

    pub fn player_extent(&self) -> Extent {
        self.player.as_ref().map_or(PLAYER_SHAPE, Sprite::extent)
    }

    pub fn enemy_extent(&self) -> Extent {
        self.enemy.as_ref().map_or(ENEMY_SHAPE, Sprite::extent)
    }

    /// The clip to play for `event`, if there is one.
    pub fn sound_for(&self, event: &GameEvent) -> Option<&SoundClip> {
        match event {
            GameEvent::Shot => self.shoot.as_ref(),
            GameEvent::Explosion => self.explosion.as_ref(),
            GameEvent::GameOver { .. } => None,
        }
    }
}
