use crate::error::AnalyzeError;
use crate::lints::{self, Rule};

/// An ordered collection of rules defining execution sequence.
///
/// The registry is a list wrapper with a sensible default: rules run in the
/// order they are held, and findings follow that order. Rule instances are
/// stateless, so one registry can be built once and shared across threads.
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleRegistry {
    /// A registry with an arbitrary ordered subset of rules. Fails fast on
    /// an empty list, before any source is parsed.
    pub fn with_rules(rules: Vec<Box<dyn Rule>>) -> Result<Self, AnalyzeError> {
        if rules.is_empty() {
            return Err(AnalyzeError::EmptyRuleSet);
        }
        Ok(Self { rules })
    }

    /// A registry from built-in rule ids, keeping the given order.
    pub fn from_ids<S: AsRef<str>>(ids: &[S]) -> Result<Self, AnalyzeError> {
        let rules = ids
            .iter()
            .map(|id| {
                lints::rule_by_id(id.as_ref())
                    .ok_or_else(|| AnalyzeError::UnknownRule(id.as_ref().to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::with_rules(rules)
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|rule| rule.as_ref())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field(
                "rules",
                &self.rules.iter().map(|rule| rule.rule_id()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Default for RuleRegistry {
    /// The six built-in rules in their canonical order.
    fn default() -> Self {
        Self {
            rules: lints::default_rules(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_order() {
        let ids: Vec<_> = RuleRegistry::default()
            .iter()
            .map(|rule| rule.rule_id())
            .collect();
        assert_eq!(
            ids,
            [
                "unused_import",
                "unused_variable",
                "function_metrics",
                "naming_conventions",
                "missing_docstring",
                "print_statement",
            ]
        );
    }

    #[test]
    fn test_from_ids_keeps_caller_order() {
        let registry = RuleRegistry::from_ids(&["print_statement", "unused_import"]).unwrap();
        let ids: Vec<_> = registry.iter().map(|rule| rule.rule_id()).collect();
        assert_eq!(ids, ["print_statement", "unused_import"]);
    }

    #[test]
    fn test_unknown_rule_fails_fast() {
        let err = RuleRegistry::from_ids(&["no_such_rule"]).unwrap_err();
        assert!(matches!(err, AnalyzeError::UnknownRule(name) if name == "no_such_rule"));
    }

    #[test]
    fn test_empty_rule_list_fails_fast() {
        let err = RuleRegistry::with_rules(vec![]).unwrap_err();
        assert!(matches!(err, AnalyzeError::EmptyRuleSet));
    }
}
