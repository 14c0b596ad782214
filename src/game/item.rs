//! Mergeable item kinds and their leveled instances

use crate::game::selection::RandomSelector;
use std::fmt;

/// Static description of a family of items that merge with each other
///
/// Each entry in `icon_names` is one level, so the kind's maximum level
/// equals the number of icons.
#[derive(Debug, PartialEq, Eq)]
pub struct ItemKind {
    /// Display name, also the identity used for merge matching
    pub name: &'static str,
    /// Descriptive traits, e.g. "Currency"
    pub traits: &'static [&'static str],
    /// Icon file stems, one per level
    pub icon_names: &'static [&'static str],
}

impl ItemKind {
    /// Highest level an item of this kind can reach
    pub const fn max_level(&self) -> u8 {
        self.icon_names.len() as u8
    }

    /// Icon file stem for the given level (1-based)
    pub fn icon_name(&self, level: u8) -> Option<&'static str> {
        let index = usize::from(level).checked_sub(1)?;
        self.icon_names.get(index).copied()
    }
}

/// Coin, upgrading into an envelope and then a tome
pub const COIN: ItemKind = ItemKind {
    name: "Coin",
    traits: &["Currency"],
    icon_names: &["coin", "envelope", "tome"],
};

/// Spawnable kinds with their relative weights
pub const ITEM_CLASSES: &[(&ItemKind, f64)] = &[(&COIN, 1.0)];

/// Pick a kind from `ITEM_CLASSES` by weight
pub fn choose_kind(selector: &mut RandomSelector) -> &'static ItemKind {
    let weights: Vec<f64> = ITEM_CLASSES.iter().map(|&(_, weight)| weight).collect();
    let index = selector.weighted_choice(&weights);
    ITEM_CLASSES.get(index).map_or(&COIN, |&(kind, _)| kind)
}

/// An item occupying a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    kind: &'static ItemKind,
    level: u8,
}

impl Item {
    /// Create a level 1 item of the given kind
    pub const fn new(kind: &'static ItemKind) -> Self {
        Self { kind, level: 1 }
    }

    /// Create an item at a specific level, clamped to the kind's range
    pub fn with_level(kind: &'static ItemKind, level: u8) -> Self {
        Self {
            kind,
            level: level.clamp(1, kind.max_level().max(1)),
        }
    }

    /// Kind name
    pub const fn name(&self) -> &'static str {
        self.kind.name
    }

    /// Current level (1-based)
    pub const fn level(&self) -> u8 {
        self.level
    }

    /// Whether the item has reached its kind's final level
    pub const fn is_max_level(&self) -> bool {
        self.level >= self.kind.max_level()
    }

    /// Check if both items share a kind and level and can still upgrade
    pub fn can_merge_with(&self, other: &Self) -> bool {
        self.kind.name == other.kind.name && self.level == other.level && !self.is_max_level()
    }

    /// Upgrade the item to the next level
    ///
    /// Does nothing once the final level is reached.
    pub const fn merge(&mut self) {
        if !self.is_max_level() {
            self.level += 1;
        }
    }

    /// Copy of this item after one upgrade
    #[must_use]
    pub const fn merged(mut self) -> Self {
        self.merge();
        self
    }

    /// Zero-based icon index for the current level
    pub const fn icon_index(&self) -> usize {
        self.level as usize - 1
    }

    /// Icon file stem for the current level
    pub fn icon_name(&self) -> &'static str {
        self.kind.icon_name(self.level).unwrap_or_default()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} L{}", self.kind.name, self.level)
    }
}
