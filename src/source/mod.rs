//! Record sources.
//!
//! The list store only depends on the [`RecordSource`] trait. The binary
//! wires in [`HttpRecordSource`]; [`StaticRecordSource`] serves fixed data.

mod http;
mod traits;

pub use http::{decode_records, HttpRecordSource, HttpSourceConfig, DEFAULT_SOURCE_URL};
pub(crate) use http::default_user_agent;
pub use traits::{RecordSource, StaticRecordSource};
