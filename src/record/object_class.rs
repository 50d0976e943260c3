/// Object class definitions for extracted records
///
/// The wiki labels every entry with one containment class. Labels outside
/// the known set collapse to `Undefined`.
use std::fmt;

/// Containment classification of an SCP entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ObjectClass {
    Safe,
    Euclid,
    Keter,
    Thaumiel,
    Neutralized,
    Decommissioned,
    Apollyon,
    Archon,

    /// Sentinel: the class line was missing, malformed, or named an unknown class
    #[default]
    Undefined,
}

impl ObjectClass {
    /// Every classification, sentinel included
    pub const ALL: [ObjectClass; 9] = [
        Self::Safe,
        Self::Euclid,
        Self::Keter,
        Self::Thaumiel,
        Self::Neutralized,
        Self::Decommissioned,
        Self::Apollyon,
        Self::Archon,
        Self::Undefined,
    ];

    /// Maps a class label to its classification
    ///
    /// Matching is exact and case-sensitive; anything else is `Undefined`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Safe" => Self::Safe,
            "Euclid" => Self::Euclid,
            "Keter" => Self::Keter,
            "Thaumiel" => Self::Thaumiel,
            "Neutralized" => Self::Neutralized,
            "Decommissioned" => Self::Decommissioned,
            "Apollyon" => Self::Apollyon,
            "Archon" => Self::Archon,
            _ => Self::Undefined,
        }
    }

    /// Returns the label as written on the wiki
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "Safe",
            Self::Euclid => "Euclid",
            Self::Keter => "Keter",
            Self::Thaumiel => "Thaumiel",
            Self::Neutralized => "Neutralized",
            Self::Decommissioned => "Decommissioned",
            Self::Apollyon => "Apollyon",
            Self::Archon => "Archon",
            Self::Undefined => "Undefined",
        }
    }

    /// Returns true for the `Undefined` sentinel
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }
}

impl fmt::Display for ObjectClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
