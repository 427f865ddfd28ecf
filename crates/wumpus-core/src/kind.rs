//! The closed enumerations of percepts, hazards and evidence kinds.
//!
//! Percepts and hazards are parallel: every hazard is announced by exactly
//! one percept in the cells around it. [`EvidenceKind`] adds `Safe` to the
//! percepts so that the generic ingestion path can address all three
//! evidence pairs held by the knowledge base.

use crate::error::KbError;
use std::fmt;
use std::str::FromStr;

/// A binary observation available only in a visited cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PerceptKind {
    /// Emitted next to the monster.
    Smell,
    /// Emitted next to a pit.
    Breeze,
}

impl PerceptKind {
    /// Both percepts, in summary-label order.
    pub const ALL: [PerceptKind; 2] = [PerceptKind::Smell, PerceptKind::Breeze];

    /// The hazard this percept announces.
    pub fn hazard(self) -> HazardKind {
        match self {
            Self::Smell => HazardKind::Monster,
            Self::Breeze => HazardKind::Pit,
        }
    }

    /// Short tag used in perception labels (`"S"` or `"B"`).
    pub fn tag(self) -> &'static str {
        match self {
            Self::Smell => "S",
            Self::Breeze => "B",
        }
    }
}

impl fmt::Display for PerceptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Smell => write!(f, "smell"),
            Self::Breeze => write!(f, "breeze"),
        }
    }
}

/// A lethal cell content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HazardKind {
    /// A bottomless pit.
    Pit,
    /// The monster (the wumpus).
    Monster,
}

impl HazardKind {
    /// Both hazards, in summary-label order.
    pub const ALL: [HazardKind; 2] = [HazardKind::Pit, HazardKind::Monster];

    /// The percept this hazard produces in its neighbours.
    pub fn percept(self) -> PerceptKind {
        match self {
            Self::Pit => PerceptKind::Breeze,
            Self::Monster => PerceptKind::Smell,
        }
    }

    /// Short tag used in perception labels (`"P?"` or `"W?"`).
    pub fn suspect_tag(self) -> &'static str {
        match self {
            Self::Pit => "P?",
            Self::Monster => "W?",
        }
    }
}

impl fmt::Display for HazardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pit => write!(f, "pit"),
            Self::Monster => write!(f, "monster"),
        }
    }
}

/// Which evidence pair a `tell`/`ask` call addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EvidenceKind {
    /// Smelly / not smelly.
    Smell,
    /// Breezy / not breezy.
    Breeze,
    /// Known safe / ruled unsafe.
    Safe,
}

impl EvidenceKind {
    /// The canonical tag for this kind, accepted by [`FromStr`].
    pub fn tag(self) -> &'static str {
        match self {
            Self::Smell => "SMELL",
            Self::Breeze => "BREEZE",
            Self::Safe => "SAFE",
        }
    }
}

impl From<PerceptKind> for EvidenceKind {
    fn from(kind: PerceptKind) -> Self {
        match kind {
            PerceptKind::Smell => Self::Smell,
            PerceptKind::Breeze => Self::Breeze,
        }
    }
}

impl fmt::Display for EvidenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for EvidenceKind {
    type Err = KbError;

    /// Parse a tag, ignoring ASCII case. Anything outside
    /// `{SMELL, BREEZE, SAFE}` is a caller bug and yields
    /// [`KbError::InvalidEvidenceKind`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("smell") {
            Ok(Self::Smell)
        } else if s.eq_ignore_ascii_case("breeze") {
            Ok(Self::Breeze)
        } else if s.eq_ignore_ascii_case("safe") {
            Ok(Self::Safe)
        } else {
            Err(KbError::InvalidEvidenceKind { tag: s.to_string() })
        }
    }
}

impl TryFrom<&str> for EvidenceKind {
    type Error = KbError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
