//! Classifies senate bill history lines into typed legislative status records.
//!
//! A [`RuleChain`] runs an ordered list of [`StatusRule`]s over each raw
//! [`StatusLine`]. Rules recognize one status kind each, extract senators,
//! committees and amendment flags, and decide whether later rules still get
//! to look at the same line.

pub mod chain;
pub mod config;
pub mod error;
pub mod input;
pub mod rules;
pub mod types;

pub use chain::{classify, Classification, RuleChain};
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use rules::{Continuation, FirstReading, Recognition, StatusRule};
pub use types::{BillStatus, SenateCommittee, Senator, StatusLine, StatusRecord};

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::chain::{Classification, RuleChain};
    pub use crate::config::{Config, ConfigBuilder};
    pub use crate::error::{Error, Result};
    pub use crate::rules::{Continuation, Recognition, StatusRule};
    pub use crate::types::{BillStatus, SenateCommittee, Senator, StatusLine, StatusRecord};
}
