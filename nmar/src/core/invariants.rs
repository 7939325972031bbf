//! Semantic invariants on module reports not expressible via JSON Schema.

use std::collections::HashSet;

use crate::core::events::NullLog;
use crate::core::kind::ModuleKind;
use crate::core::module::Module;
use crate::core::state::ModuleState;
use crate::core::types::ModuleReport;

/// Check invariants that a schema cannot express:
/// - No kind reported twice
/// - State keys equal the kind's fixed key set
/// - State values equal what `execute` produces for the kind
/// - Only `MetaReasoning` adjusts, and it adjusts at least once
pub fn validate_reports(reports: &[ModuleReport]) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();
    for (index, report) in reports.iter().enumerate() {
        let path = format!("[{}] {}", index, report.kind);
        if !seen.insert(report.kind) {
            errors.push(format!("{}: duplicate kind", path));
        }
        validate_report(report, &path, &mut errors);
    }
    errors
}

fn validate_report(report: &ModuleReport, path: &str, errors: &mut Vec<String>) {
    let actual: Vec<&str> = report.state.keys().collect();
    let expected = report.kind.state_keys();
    if actual != expected {
        errors.push(format!(
            "{}: state keys [{}] do not match expected [{}]",
            path,
            actual.join(", "),
            expected.join(", ")
        ));
    } else if report.state != expected_state(report.kind) {
        errors.push(format!("{}: state values differ from the fixed shape", path));
    }

    if report.kind == ModuleKind::MetaReasoning {
        if report.adjustments == 0 {
            errors.push(format!("{}: adjustments must be >= 1", path));
        }
    } else if report.adjustments != 0 {
        errors.push(format!(
            "{}: adjustments {} must be 0 for this kind",
            path, report.adjustments
        ));
    }
}

/// State a fresh instance of `kind` holds after one `execute`.
pub fn expected_state(kind: ModuleKind) -> ModuleState {
    let mut module = Module::new(kind, NullLog);
    module.execute();
    module.state().clone()
}
