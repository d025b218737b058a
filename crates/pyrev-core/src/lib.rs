//! Core analysis engine for pyrev.
//!
//! Parses a Python source snippet into a syntax tree and runs an ordered set
//! of independent, stateless diagnostic rules over it, producing a
//! deterministic list of [`Finding`]s with severity levels and timing.
//!
//! ```
//! use pyrev_core::Analyzer;
//!
//! let result = Analyzer::new().analyze("import math\n").unwrap();
//! assert_eq!(result.findings[0].rule_id, "unused_import");
//! ```

pub mod analyzer;
pub mod diagnostic;
pub mod error;
pub mod lints;
pub mod parse;
pub mod registry;
pub mod sink;
pub mod utils;
pub mod walk;


pub use analyzer::Analyzer;
pub use diagnostic::{AnalysisResult, Finding, MetaValue, Severity};
pub use error::AnalyzeError;
pub use lints::{default_rules, Rule};
pub use registry::RuleRegistry;
pub use sink::Sink;
