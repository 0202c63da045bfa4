//! Record data model.
//!
//! [`RawRecord`] is what the source hands over; [`ParsedRecord`] is what the
//! list store sorts and publishes.

mod name;
mod record;

pub use name::{parse_name, NameParts};
pub use record::{ParsedRecord, RawRecord};
