//! Deep-link parsing subsystem.
//!
//! # Data Flow
//! ```text
//! raw URL string (from the host's startup plumbing)
//!     → parser.rs (scheme/path/query split, percent-decoding)
//!     → ParsedLink (immutable value)
//!     → consumed once by the dispatcher
//! ```
//!
//! # Design Decisions
//! - Parsing is a pure function; no global state, no I/O
//! - Query keys are unique: last occurrence wins on duplicates
//! - Malformed percent sequences decode lossily instead of failing
//! - A string that is not a URL at all is a ParseFailure, which the
//!   dispatcher treats the same as "no URL provided"

pub mod parser;

pub use parser::{parse, ParseFailure, ParsedLink};
