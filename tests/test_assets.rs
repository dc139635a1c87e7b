use std::path::PathBuf;

use image::{Rgba, RgbaImage};

use galaxy_defender::assets::{load_sound, load_sprite, Assets, Sprite};
use galaxy_defender::entities::{Extent, GameEvent, ENEMY_SHAPE, PLAYER_SHAPE};
use galaxy_defender::error::AssetError;

/// Fresh scratch directory per test.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "galaxy_defender_{}_{}",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_wav(path: &PathBuf) {
    let mut bytes = b"RIFF".to_vec();
    bytes.extend_from_slice(&36u32.to_le_bytes());
    bytes.extend_from_slice(b"WAVEfmt ");
    std::fs::write(path, bytes).unwrap();
}

#[test]
fn empty_directory_falls_back_everywhere() {
    let dir = scratch_dir("empty");
    let assets = Assets::load(&dir);
    assert!(assets.background.is_none());
    assert!(assets.player.is_none());
    assert!(assets.enemy.is_none());
    assert!(assets.shoot.is_none());
    assert!(assets.explosion.is_none());
    assert_eq!(assets.player_extent(), PLAYER_SHAPE);
    assert_eq!(assets.enemy_extent(), ENEMY_SHAPE);
    assert_eq!(assets.sound_for(&GameEvent::Shot), None);
}

#[test]
fn missing_directory_is_not_fatal() {
    let assets = Assets::load(&std::env::temp_dir().join("galaxy_defender_does_not_exist"));
    assert!(assets.player.is_none());
}

#[test]
fn present_files_are_picked_up() {
    let dir = scratch_dir("present");
    RgbaImage::from_pixel(64, 48, Rgba([0, 255, 0, 255]))
        .save(dir.join("player.png"))
        .unwrap();
    RgbaImage::from_pixel(30, 30, Rgba([255, 0, 0, 255]))
        .save(dir.join("enemy.png"))
        .unwrap();
    write_wav(&dir.join("shoot.wav"));
    write_wav(&dir.join("explosion.wav"));

    let assets = Assets::load(&dir);
    assert!(assets.background.is_none());
    assert_eq!(assets.player_extent(), Extent::centered(64, 48));
    assert_eq!(assets.enemy_extent(), Extent::centered(30, 30));
    assert!(assets.sound_for(&GameEvent::Shot).is_some());
    assert!(assets.sound_for(&GameEvent::Explosion).is_some());
    assert!(assets.sound_for(&GameEvent::GameOver { score: 0 }).is_none());
}

#[test]
fn garbage_image_is_a_decode_error() {
    let dir = scratch_dir("garbage");
    let path = dir.join("player.png");
    std::fs::write(&path, b"definitely not a png").unwrap();
    assert!(matches!(load_sprite(&path), Err(AssetError::Decode { .. })));
    assert!(Assets::load(&dir).player.is_none());
}

#[test]
fn missing_image_is_an_io_error() {
    let dir = scratch_dir("missing");
    assert!(matches!(
        load_sprite(&dir.join("nope.png")),
        Err(AssetError::Io { .. })
    ));
}

#[test]
fn non_wave_sound_is_rejected() {
    let dir = scratch_dir("notwave");
    let path = dir.join("shoot.wav");
    std::fs::write(&path, b"ID3 this is an mp3").unwrap();
    assert!(matches!(load_sound(&path), Err(AssetError::NotWave(_))));
}

#[test]
fn sprite_sampling_honours_transparency() {
    let mut img = RgbaImage::from_pixel(2, 1, Rgba([10, 20, 30, 255]));
    img.put_pixel(1, 0, Rgba([0, 0, 0, 0]));
    let sprite = Sprite::from_image(img);
    assert_eq!(sprite.sample(0.25, 0.5), Some((10, 20, 30)));
    assert_eq!(sprite.sample(0.75, 0.5), None);
}
