//! Wire payloads exchanged with the notes backend.

mod envelope;

pub use envelope::{AuthData, Envelope, ErrorBody};
