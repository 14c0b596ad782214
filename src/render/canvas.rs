//! Screen composition: background, cell outlines and item icons
//!
//! The grid is centered on the screen. Resting icons sit in the middle of
//! their cell; animated icons are drawn separately around the cell center
//! at an arbitrary scale.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::game::board::{Board, Position};
use crate::io::configuration::{
    BACKGROUND_COLOR, CELL_SIZE, GRID_COLOR, GRID_LINE_WIDTH, GRID_SIZE, SCREEN_HEIGHT,
    SCREEN_WIDTH,
};
use crate::render::assets::IconSet;

/// Pixel geometry of the screen and grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Screen width in pixels
    pub screen_width: u32,
    /// Screen height in pixels
    pub screen_height: u32,
    /// Cells per side
    pub grid_size: usize,
    /// Cell edge length in pixels
    pub cell_size: u32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            grid_size: GRID_SIZE,
            cell_size: CELL_SIZE,
        }
    }
}

impl GridLayout {
    /// Edge length of the whole grid in pixels
    pub const fn grid_extent(&self) -> u32 {
        self.grid_size as u32 * self.cell_size
    }

    /// Top-left pixel of the grid, centered on screen
    pub const fn origin(&self) -> (i64, i64) {
        let extent = self.grid_extent() as i64;
        (
            (self.screen_width as i64 - extent) / 2,
            (self.screen_height as i64 - extent) / 2,
        )
    }

    /// Top-left pixel of a cell
    pub const fn cell_origin(&self, position: Position) -> (i64, i64) {
        let (x, y) = self.origin();
        (
            x + position.col as i64 * self.cell_size as i64,
            y + position.row as i64 * self.cell_size as i64,
        )
    }

    /// Center pixel of a cell
    pub const fn cell_center(&self, position: Position) -> (i64, i64) {
        let (x, y) = self.cell_origin(position);
        let half = self.cell_size as i64 / 2;
        (x + half, y + half)
    }

    /// Resting icon edge length, half a cell
    pub const fn icon_size(&self) -> u32 {
        self.cell_size / 2
    }
}

/// Off-screen frame the game draws into
pub struct Canvas {
    image: RgbaImage,
    layout: GridLayout,
}

impl Canvas {
    /// Create a canvas filled with the background color
    pub fn new(layout: GridLayout) -> Self {
        Self {
            image: RgbaImage::from_pixel(
                layout.screen_width,
                layout.screen_height,
                Rgba(BACKGROUND_COLOR),
            ),
            layout,
        }
    }

    /// Current frame
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Take ownership of the current frame
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Fill the whole frame with the background color
    pub fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = Rgba(BACKGROUND_COLOR);
        }
    }

    /// Draw every cell outline and every item except the one at `hidden`
    pub fn draw_board(&mut self, board: &Board, icons: &IconSet, hidden: Option<Position>) {
        let inset = i64::from(self.layout.cell_size / 4);

        for position in board.positions() {
            let (x, y) = self.layout.cell_origin(position);
            self.outline_rect(x, y, self.layout.cell_size, GRID_LINE_WIDTH);

            if hidden == Some(position) {
                continue;
            }
            if let Some(item) = board.get(position) {
                imageops::overlay(&mut self.image, icons.icon(item), x + inset, y + inset);
            }
        }
    }

    /// Draw an icon centered on a cell at `scale` times its own size
    pub fn draw_scaled_icon(&mut self, icon: &RgbaImage, position: Position, scale: f64) {
        let width = ((f64::from(icon.width()) * scale).round() as u32).max(1);
        let height = ((f64::from(icon.height()) * scale).round() as u32).max(1);
        let scaled = imageops::resize(icon, width, height, FilterType::Triangle);

        let (center_x, center_y) = self.layout.cell_center(position);
        imageops::overlay(
            &mut self.image,
            &scaled,
            center_x - i64::from(width / 2),
            center_y - i64::from(height / 2),
        );
    }

    /// Redraw the resting board, optionally with one cell hidden
    pub fn compose(&mut self, board: &Board, icons: &IconSet, hidden: Option<Position>) {
        self.clear();
        self.draw_board(board, icons, hidden);
    }

    // Border drawn inside the rectangle, clipped to the frame
    fn outline_rect(&mut self, x: i64, y: i64, size: u32, thickness: u32) {
        let size = i64::from(size);
        let thickness = i64::from(thickness);
        let color = Rgba(GRID_COLOR);

        for dy in 0..size {
            for dx in 0..size {
                let on_border = dx < thickness
                    || dy < thickness
                    || dx >= size - thickness
                    || dy >= size - thickness;
                if !on_border {
                    continue;
                }
                let (px, py) = (x + dx, y + dy);
                if px < 0 || py < 0 {
                    continue;
                }
                if let Some(pixel) = self.image.get_pixel_mut_checked(px as u32, py as u32) {
                    *pixel = color;
                }
            }
        }
    }
}
