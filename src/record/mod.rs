//! Record module for extracted SCP entries
//!
//! # Components
//!
//! - `Record`: One extracted entry, with sentinel values for fields that could not be parsed
//! - `ObjectClass`: The closed set of containment classes, plus the `Undefined` sentinel
//! - `RecordPosition`: Maps an item number to its series and position within that series

mod entry;
mod object_class;
mod position;

// Re-export main types
pub use entry::{Record, NOT_AVAILABLE, UNPARSED_IDENTIFIER};
pub use object_class::ObjectClass;
pub use position::RecordPosition;
