use crate::diagnostic::Finding;

// The object that collects findings during one analyze() call. One per run;
// nothing survives between calls.
#[derive(Debug, Default)]
pub struct Sink {
    findings: Vec<Finding>,
}

impl Sink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a finding. The sink is append-only: rules never re-order or
    /// deduplicate what was already reported.
    pub fn report(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn into_findings(self) -> Vec<Finding> {
        self.findings
    }
}
