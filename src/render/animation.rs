//! Frame-by-frame scale sequences for spawn and merge animations

use crate::io::configuration::{
    MERGE_ANIMATION_FRAMES, MERGE_ANIMATION_MS, MERGE_START_SCALE, SPAWN_ANIMATION_FRAMES,
    SPAWN_ANIMATION_MS,
};

/// The two animations the game plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKind {
    /// Item grows from nothing to full size
    Spawn,
    /// Item pulses from `MERGE_START_SCALE` back toward full size
    Merge,
}

impl AnimationKind {
    /// Number of frames drawn
    pub const fn frames(self) -> usize {
        match self {
            Self::Spawn => SPAWN_ANIMATION_FRAMES,
            Self::Merge => MERGE_ANIMATION_FRAMES,
        }
    }

    /// Total running time in milliseconds
    pub const fn duration_ms(self) -> u32 {
        match self {
            Self::Spawn => SPAWN_ANIMATION_MS,
            Self::Merge => MERGE_ANIMATION_MS,
        }
    }

    /// Time each frame stays on screen
    pub const fn frame_delay_ms(self) -> u32 {
        self.duration_ms() / self.frames() as u32
    }

    /// Icon scale for the given frame, relative to the resting icon size
    pub fn scale_at(self, frame: usize) -> f64 {
        let frames = self.frames() as f64;
        match self {
            Self::Spawn => (frame as f64 + 1.0) / frames,
            Self::Merge => ((1.0 - MERGE_START_SCALE) / frames).mul_add(frame as f64, MERGE_START_SCALE),
        }
    }

    /// Iterator over every frame's scale
    pub const fn scales(self) -> ScaleSequence {
        ScaleSequence {
            kind: self,
            frame: 0,
        }
    }
}

/// Scales of an animation in frame order
#[derive(Debug, Clone)]
pub struct ScaleSequence {
    kind: AnimationKind,
    frame: usize,
}

impl Iterator for ScaleSequence {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.frame >= self.kind.frames() {
            return None;
        }
        let scale = self.kind.scale_at(self.frame);
        self.frame += 1;
        Some(scale)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.kind.frames().saturating_sub(self.frame);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ScaleSequence {}
