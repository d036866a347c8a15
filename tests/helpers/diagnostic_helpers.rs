//! Diagnostic assertion helpers.

use eoplus::{Diagnostic, DiagnosticsSettings, Flavor, Severity, TextEdit, analyze};

/// All diagnostics of `source` with default settings.
pub fn diagnostics(source: &str, flavor: Flavor) -> Vec<Diagnostic> {
    analyze(source, flavor, &DiagnosticsSettings::default())
}

/// Messages of every diagnostic, in report order.
pub fn messages(source: &str, flavor: Flavor) -> Vec<String> {
    diagnostics(source, flavor)
        .into_iter()
        .map(|d| d.message.to_string())
        .collect()
}

pub fn errors(source: &str, flavor: Flavor) -> Vec<Diagnostic> {
    diagnostics(source, flavor)
        .into_iter()
        .filter(|d| d.severity == Severity::Error)
        .collect()
}

pub fn warnings(source: &str, flavor: Flavor) -> Vec<Diagnostic> {
    diagnostics(source, flavor)
        .into_iter()
        .filter(|d| d.severity == Severity::Warning)
        .collect()
}

/// Assert a source analyzes without any diagnostic.
pub fn assert_clean(source: &str, flavor: Flavor) {
    let diagnostics = diagnostics(source, flavor);
    assert!(
        diagnostics.is_empty(),
        "Expected no diagnostics, got {}:\n{}",
        diagnostics.len(),
        diagnostics
            .iter()
            .map(|d| format!("  Line {}: {}", d.range.start.line + 1, d.message))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// The diagnostic reporting `message`; panics if there is none.
pub fn find_diagnostic(source: &str, flavor: Flavor, message: &str) -> Diagnostic {
    diagnostics(source, flavor)
        .into_iter()
        .find(|d| &*d.message == message)
        .unwrap_or_else(|| panic!("no diagnostic '{message}' for:\n{source}"))
}

/// Apply the preferred fix (or the only fix) of the diagnostic reporting `message`.
pub fn apply_fix(source: &str, flavor: Flavor, message: &str) -> String {
    let diagnostic = find_diagnostic(source, flavor, message);
    let fix = diagnostic
        .fixes
        .preferred()
        .or_else(|| diagnostic.fixes.iter().next())
        .unwrap_or_else(|| panic!("'{message}' has no quick fix"));
    TextEdit::apply_all(source, &fix.edits)
}
