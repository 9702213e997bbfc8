use crate::core::MovieError;
use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

/// How `create` picks the id of a new record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum IdStrategy {
    /// Monotonic counter; ids are never reused
    #[default]
    #[value(alias = "counter")]
    Sequential,
    /// `len + 1`. Reuses ids after a delete, so two live records can share one.
    #[value(alias = "length", alias = "legacy")]
    LengthBased,
}

/// Where `update` leaves the record it rewrote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum UpdatePlacement {
    #[default]
    #[value(alias = "inplace")]
    InPlace,
    /// Remove then re-append, so the record becomes the last one
    #[value(alias = "end", alias = "legacy")]
    MoveToEnd,
}

/// Movie store configuration
///
/// The defaults never reuse ids and keep ordering stable across updates.
/// [`StoreConfig::legacy`] restores the old id reuse and reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreConfig {
    /// Id assignment on create
    pub id_strategy: IdStrategy,

    /// Record position after update
    pub update_placement: UpdatePlacement,
}

impl StoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Length-based ids and move-to-end updates
    pub fn legacy() -> Self {
        Self {
            id_strategy: IdStrategy::LengthBased,
            update_placement: UpdatePlacement::MoveToEnd,
        }
    }

    /// Set the id strategy
    pub fn id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.id_strategy = strategy;
        self
    }

    /// Set the update placement
    pub fn update_placement(mut self, placement: UpdatePlacement) -> Self {
        self.update_placement = placement;
        self
    }

    pub fn is_legacy(&self) -> bool {
        *self == Self::legacy()
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequential => write!(f, "sequential"),
            Self::LengthBased => write!(f, "length-based"),
        }
    }
}

impl fmt::Display for UpdatePlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InPlace => write!(f, "in-place"),
            Self::MoveToEnd => write!(f, "move-to-end"),
        }
    }
}

impl FromStr for IdStrategy {
    type Err = MovieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s.trim(), true)
            .map_err(|_| MovieError::InvalidConfig(format!("unknown id strategy '{}'", s)))
    }
}

impl FromStr for UpdatePlacement {
    type Err = MovieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s.trim(), true)
            .map_err(|_| MovieError::InvalidConfig(format!("unknown update placement '{}'", s)))
    }
}
