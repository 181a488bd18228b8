//! Rule ranking and the executive summary.

pub mod rank;
pub mod summary;

pub use rank::{rank, RuleSet};
pub use summary::{summarize, BusinessImpact, MiningSummary};
