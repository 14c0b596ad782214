//! PNG export of the final board

use std::path::Path;

use crate::game::board::Board;
use crate::io::error::{GameError, Result, WithPath};
use crate::render::assets::IconSet;
use crate::render::canvas::{Canvas, GridLayout};

/// Render the board at rest and save it as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The board is empty, so there is nothing to show
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_board_as_png(
    board: &Board,
    icons: &IconSet,
    layout: GridLayout,
    output_path: &Path,
) -> Result<()> {
    if board.occupied_count() == 0 {
        return Err(GameError::InvalidParameter {
            parameter: "board",
            value: "empty".to_string(),
            reason: "No items have been placed on the board".to_string(),
        });
    }

    let mut canvas = Canvas::new(layout);
    canvas.draw_board(board, icons, None);

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    canvas
        .into_image()
        .save(output_path)
        .map_err(|e| GameError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
