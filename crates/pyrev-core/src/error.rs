use thiserror::Error;

/// Hard failures of [`Analyzer::analyze`](crate::analyzer::Analyzer::analyze).
///
/// A source that does not parse is *not* represented here: malformed input is
/// a normal case for an analyzer, so it is surfaced as a single
/// error-severity finding in the result instead.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("cannot analyze an empty source")]
    EmptySource,

    #[error("the rule registry must contain at least one rule")]
    EmptyRuleSet,

    #[error("unknown rule: `{0}`")]
    UnknownRule(String),

    /// A rule failed on a syntactically valid tree. This is a programming
    /// defect in the rule and must stay distinguishable from a syntax error,
    /// so that it cannot silently be reported as "zero findings".
    #[error("rule `{rule}` failed on a syntactically valid source")]
    RuleDefect {
        rule: &'static str,
        #[source]
        source: anyhow::Error,
    },
}
