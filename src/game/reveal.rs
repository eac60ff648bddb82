// src/game/reveal.rs

use std::path::Path;

/// Which image variant to serve: one of the six blur steps or the
/// unblurred original.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStage {
    /// Blur step 2 (heaviest) through 7 (lightest).
    Blurred(u8),
    Original,
}

impl RevealStage {
    /// Maps the number of guesses made so far to a reveal stage.
    ///
    /// Guess counts 0..=5 map to blur steps 2..=7; anything past the ladder
    /// collapses to the original image, as does a solved session regardless
    /// of guess count.
    pub fn select(guess_count: usize, solved: bool) -> Self {
        if solved {
            return RevealStage::Original;
        }
        let stage = guess_count + 2;
        if stage <= 7 {
            RevealStage::Blurred(stage as u8)
        } else {
            RevealStage::Original
        }
    }

    /// Name of the asset bucket holding this stage's image variants.
    pub fn bucket(&self) -> String {
        match self {
            RevealStage::Blurred(stage) => format!("blurred_images_{stage}"),
            RevealStage::Original => "original_images".to_string(),
        }
    }
}

/// Basename of a quiz's stored image source path. Every reveal-stage bucket
/// holds its variant under the same file name, so the directory part of the
/// source path is irrelevant.
pub fn source_file_name(image_source: &str) -> &str {
    image_source.rsplit('/').next().unwrap_or(image_source)
}

/// Content type for an image file, derived strictly from its extension.
pub fn content_type_for(filename: &str) -> &'static str {
    let extension = Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        // Default to binary data
        _ => "application/octet-stream",
    }
}
