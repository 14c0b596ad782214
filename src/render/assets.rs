//! Icon loading and scaling with placeholder fallback
//!
//! Every icon named by the spawnable kinds is loaded once at startup and
//! scaled to its resting size. Icons that fail to load are replaced by a
//! solid square so the game keeps running.

use image::RgbaImage;
use image::imageops::{self, FilterType};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::game::item::{ITEM_CLASSES, Item};
use crate::io::configuration::{ICON_EXTENSION, ICON_RESOLUTION_DIR, ITEM_COLOR};
use crate::io::error::{GameError, Result};

/// Where an icon's pixels came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconSource {
    /// Loaded and scaled from this file
    Loaded(PathBuf),
    /// File was missing or unreadable
    Placeholder(PathBuf),
}

/// Scaled icons keyed by file stem
#[derive(Clone)]
pub struct IconSet {
    icons: HashMap<&'static str, RgbaImage>,
    placeholder: RgbaImage,
    report: Vec<(&'static str, IconSource)>,
    icon_size: u32,
}

impl IconSet {
    /// Load every registered icon from `assets_dir`, scaled to `icon_size`
    pub fn load(assets_dir: &Path, icon_size: u32) -> Self {
        let mut set = Self::placeholders(icon_size);

        for name in registered_icon_names() {
            let path = icon_path(assets_dir, name);
            tracing::debug!(name, path = %path.display(), "processing icon");

            match load_icon(&path, icon_size) {
                Ok(icon) => {
                    tracing::info!(name, "icon loaded and scaled");
                    set.icons.insert(name, icon);
                    set.report.push((name, IconSource::Loaded(path)));
                }
                Err(err) => {
                    tracing::warn!(name, error = %err, "using placeholder icon");
                    set.report.push((name, IconSource::Placeholder(path)));
                }
            }
        }

        set
    }

    /// Icon set where every item draws as the placeholder square
    pub fn placeholders(icon_size: u32) -> Self {
        Self {
            icons: HashMap::new(),
            placeholder: RgbaImage::from_pixel(icon_size, icon_size, image::Rgba(ITEM_COLOR)),
            report: Vec::new(),
            icon_size,
        }
    }

    /// Icon for an item at its current level
    pub fn icon(&self, item: &Item) -> &RgbaImage {
        self.icons.get(item.icon_name()).unwrap_or(&self.placeholder)
    }

    /// Resting edge length of every icon
    pub const fn icon_size(&self) -> u32 {
        self.icon_size
    }

    /// Load outcome of each icon, in load order
    pub fn report(&self) -> &[(&'static str, IconSource)] {
        &self.report
    }

    /// Number of icons that loaded from disk
    pub fn loaded_count(&self) -> usize {
        self.icons.len()
    }
}

/// Path of an icon file inside the assets directory
pub fn icon_path(assets_dir: &Path, name: &str) -> PathBuf {
    assets_dir
        .join(ICON_RESOLUTION_DIR)
        .join(format!("{name}.{ICON_EXTENSION}"))
}

/// Load a single icon and scale it to a square of `icon_size`
///
/// # Errors
///
/// Returns `GameError::ImageLoad` if the file is missing or cannot be decoded
pub fn load_icon(path: &Path, icon_size: u32) -> Result<RgbaImage> {
    let image = image::open(path).map_err(|source| GameError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(imageops::resize(
        &image.to_rgba8(),
        icon_size,
        icon_size,
        FilterType::Triangle,
    ))
}

fn registered_icon_names() -> impl Iterator<Item = &'static str> {
    ITEM_CLASSES
        .iter()
        .flat_map(|&(kind, _)| kind.icon_names.iter().copied())
}
