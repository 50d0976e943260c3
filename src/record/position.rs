use crate::ScrapeError;

/// Where an identifier lives: which series, and which entry within it
///
/// Both indices are 0-based. Series are numbered in the order they are
/// discovered on the wiki root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordPosition {
    pub series: usize,
    pub position: usize,
}

impl RecordPosition {
    /// Resolves `identifier` given how many records each series lists
    ///
    /// Identifier `n` belongs to series `(n - 1) / per_series` at position
    /// `(n - 1) % per_series`. Identifier 0 is rejected.
    pub fn from_identifier(identifier: u64, per_series: u64) -> Result<Self, ScrapeError> {
        if identifier == 0 || per_series == 0 {
            return Err(ScrapeError::InvalidIdentifier(identifier));
        }

        let offset = identifier - 1;
        Ok(Self {
            series: (offset / per_series) as usize,
            position: (offset % per_series) as usize,
        })
    }
}
