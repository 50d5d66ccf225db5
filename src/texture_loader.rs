use std::fs;
use std::io::Cursor;
use std::path::Path;
use raylib::prelude::*;
use exif::{Reader, Tag, Value, In};
use tracing::{debug, warn};
use crate::constants::PLACEHOLDER_SIZE;
use crate::error::AssetError;
use crate::slide::SlideMeta;

/// Loads one texture per slide from `dir`, substituting a placeholder for any
/// image that cannot be used.
pub fn load_slide_textures(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    dir: &Path,
    slides: &[SlideMeta],
) -> Result<Vec<Texture2D>, AssetError> {
    let mut textures = Vec::with_capacity(slides.len());
    for slide in slides {
        let path = dir.join(slide.file);
        match load_texture_with_exif_rotation(rl, thread, &path) {
            Ok(texture) => {
                debug!(path = %path.display(), width = texture.width(), height = texture.height(), "loaded slide");
                textures.push(texture);
            }
            Err(e) => {
                warn!(caption = slide.caption, "{e}; using placeholder");
                textures.push(placeholder_texture(rl, thread, &path)?);
            }
        }
    }
    Ok(textures)
}

/// Flat grey stand-in for an image that failed to load.
pub fn placeholder_texture(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: &Path,
) -> Result<Texture2D, AssetError> {
    let image = Image::gen_image_color(PLACEHOLDER_SIZE, PLACEHOLDER_SIZE, Color::DARKGRAY);
    rl.load_texture_from_image(thread, &image)
        .map_err(|e| AssetError::Texture { path: path.to_path_buf(), reason: e.to_string() })
}

/// EXIF orientation tag of a JPEG, 1 (upright) when absent or unreadable.
pub fn exif_orientation(file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            debug!("no usable EXIF data: {e}");
            1
        }
    }
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D, AssetError> {
    let file_bytes = fs::read(image_path)
        .map_err(|source| AssetError::Read { path: image_path.to_path_buf(), source })?;

    // EXIF is only read reliably from JPEG containers
    let extension = image_path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase();
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(&file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&(".".to_string() + &extension), &file_bytes)
        .map_err(|e| AssetError::Decode { path: image_path.to_path_buf(), reason: e.to_string() })?;

    // 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW; flipped variants are left as is
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        debug!(path = %image_path.display(), orientation, "applied EXIF rotation");
    }

    let texture = rl.load_texture_from_image(thread, &image)
        .map_err(|e| AssetError::Texture { path: image_path.to_path_buf(), reason: e.to_string() })?;

    Ok(texture)
}
