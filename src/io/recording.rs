//! Animated GIF recording of a play session
//!
//! Every spawn and merge animation is composed frame by frame and streamed
//! straight into the encoder, so memory use stays flat however long the
//! session runs.

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};
use std::cell::RefCell;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::game::board::{Board, Position};
use crate::game::item::Item;
use crate::game::observer::BoardObserver;
use crate::io::configuration::{GIF_ENCODER_SPEED, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{GameError, Result, WithPath};
use crate::render::animation::AnimationKind;
use crate::render::assets::IconSet;
use crate::render::canvas::{Canvas, GridLayout};

/// Number of source frames folded into one GIF frame
///
/// For example, with a 10ms animation frame and viewers that only support
/// 50ms, every 5th frame is kept to preserve the apparent speed.
pub const fn frame_skip_factor(frame_delay_ms: u32) -> u32 {
    if frame_delay_ms == 0 {
        return 1;
    }
    if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
        VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms)
    } else {
        1
    }
}

/// Frames kept after skipping; the final frame is always included
pub fn kept_frame_indices(frame_count: usize, skip_factor: usize) -> Vec<usize> {
    let skip = skip_factor.max(1);
    let mut kept: Vec<usize> = (0..frame_count)
        .filter(|index| (index + 1) % skip == 0)
        .collect();
    if let Some(last) = frame_count.checked_sub(1) {
        if kept.last() != Some(&last) {
            kept.push(last);
        }
    }
    kept
}

// Buffered output shared with the encoder, so the recorder can flush it
// after the encoder writes the trailer on drop
#[derive(Clone)]
struct SharedOutput(Rc<RefCell<BufWriter<File>>>);

impl Write for SharedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.borrow_mut().flush()
    }
}

/// Streams session frames to an animated GIF
pub struct GifRecorder {
    encoder: GifEncoder<SharedOutput>,
    output: SharedOutput,
    canvas: Canvas,
    icons: IconSet,
    path: PathBuf,
    frames_written: usize,
}

impl GifRecorder {
    /// Create the output file and write the looping header
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory or file cannot be created
    pub fn create(path: &Path, icons: IconSet, layout: GridLayout) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
        }
        let file = File::create(path).with_path(path, "create file")?;

        let output = SharedOutput(Rc::new(RefCell::new(BufWriter::new(file))));
        let mut encoder = GifEncoder::new_with_speed(output.clone(), GIF_ENCODER_SPEED);
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(|source| GameError::ImageExport {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            encoder,
            output,
            canvas: Canvas::new(layout),
            icons,
            path: path.to_path_buf(),
            frames_written: 0,
        })
    }

    /// Write the board at rest, held for `delay_ms`
    ///
    /// # Errors
    ///
    /// Returns an error if the frame cannot be encoded
    pub fn capture_board(&mut self, board: &Board, delay_ms: u32) -> Result<()> {
        self.canvas.compose(board, &self.icons, None);
        let frame = self.canvas.image().clone();
        self.encode(frame, delay_ms)
    }

    /// Frames written so far
    pub const fn frames_written(&self) -> usize {
        self.frames_written
    }

    /// Output location
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the GIF trailer, flush and close the file
    ///
    /// # Errors
    ///
    /// Returns an error if any buffered bytes cannot be written
    pub fn finish(self) -> Result<PathBuf> {
        let Self {
            encoder,
            mut output,
            path,
            ..
        } = self;
        drop(encoder);
        output.flush().with_path(&path, "write recording")?;
        Ok(path)
    }

    fn play(
        &mut self,
        board: &Board,
        position: Position,
        item: &Item,
        kind: AnimationKind,
    ) -> Result<()> {
        let skip = frame_skip_factor(kind.frame_delay_ms());
        let delay_ms = kind.frame_delay_ms() * skip;

        for index in kept_frame_indices(kind.frames(), skip as usize) {
            self.canvas.compose(board, &self.icons, Some(position));
            self.canvas
                .draw_scaled_icon(self.icons.icon(item), position, kind.scale_at(index));
            let frame = self.canvas.image().clone();
            self.encode(frame, delay_ms)?;
        }
        Ok(())
    }

    fn encode(&mut self, image: RgbaImage, delay_ms: u32) -> Result<()> {
        let frame = Frame::from_parts(image, 0, 0, Delay::from_numer_denom_ms(delay_ms, 1));
        self.encoder
            .encode_frame(frame)
            .map_err(|source| GameError::ImageExport {
                path: self.path.clone(),
                source,
            })?;
        self.frames_written += 1;
        Ok(())
    }
}

impl BoardObserver for GifRecorder {
    fn on_spawn(&mut self, board: &Board, position: Position, item: &Item) -> Result<()> {
        self.play(board, position, item, AnimationKind::Spawn)
    }

    fn on_merge(
        &mut self,
        board: &Board,
        position: Position,
        item: &Item,
        _neighbors: &[Position],
    ) -> Result<()> {
        self.play(board, position, item, AnimationKind::Merge)
    }
}
