use crate::record::ObjectClass;
use std::fmt;

/// Placeholder text for a free-text field that could not be extracted
pub const NOT_AVAILABLE: &str = "N/A";

/// Placeholder identifier for an item number that could not be parsed
pub const UNPARSED_IDENTIFIER: u64 = 0;

const BANNER: &str =
    "====================================================================================";
const DIVIDER: &str =
    "------------------------------------------------------------------------------------";

/// One entry extracted from a detail page
///
/// Every field except `url` starts at its sentinel and is only replaced when a
/// matching paragraph parses successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Item number; `0` when unparsed
    pub identifier: u64,

    /// Object class; `Undefined` when unparsed
    pub object_class: ObjectClass,

    /// Special containment procedures; `"N/A"` when unparsed
    pub containment: String,

    /// Description; `"N/A"` when unparsed
    pub description: String,

    /// Detail page the record was extracted from
    pub url: String,
}

impl Record {
    /// Creates a record for `url` with every extracted field at its sentinel
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            identifier: UNPARSED_IDENTIFIER,
            object_class: ObjectClass::Undefined,
            containment: NOT_AVAILABLE.to_string(),
            description: NOT_AVAILABLE.to_string(),
            url: url.into(),
        }
    }

    /// Returns true when at least one extracted field is still at its sentinel
    pub fn is_incomplete(&self) -> bool {
        self.identifier == UNPARSED_IDENTIFIER
            || self.object_class.is_undefined()
            || self.containment == NOT_AVAILABLE
            || self.description == NOT_AVAILABLE
    }

    /// Returns true when all four extracted fields were parsed
    pub fn is_complete(&self) -> bool {
        !self.is_incomplete()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", BANNER)?;
        writeln!(f, "Item Number: #{}", self.identifier)?;
        writeln!(f, "{}", DIVIDER)?;
        writeln!(f, "Object Class: {}", self.object_class)?;
        writeln!(f, "{}", DIVIDER)?;
        writeln!(f, "URL: {}", self.url)?;
        writeln!(f, "{}", DIVIDER)?;
        writeln!(f, "Special Containment Procedures: {}", self.containment)?;
        writeln!(f, "{}", DIVIDER)?;
        writeln!(f, "Description: {}", self.description)?;
        write!(f, "{}", BANNER)
    }
}
