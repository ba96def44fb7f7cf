//! Assertion macros over violation lists.
//!
//! The macros only rely on each element having a `kind` field and a
//! `Display` impl, so they work on any slice or `Vec` of violations.

/// Assert that a violation list is empty, printing every entry otherwise.
///
/// ```rust,ignore
/// assert_no_violations!(report.violations);
/// ```
#[macro_export]
macro_rules! assert_no_violations {
    ($violations:expr $(,)?) => {
        let violations = &$violations;
        if !violations.is_empty() {
            let lines: Vec<String> = violations.iter().map(|v| v.to_string()).collect();
            panic!(
                "expected no violations, found {}:\n  {}",
                lines.len(),
                lines.join("\n  ")
            );
        }
    };
}

/// Assert that exactly `count` violations match a `ViolationKind` pattern.
///
/// The pattern may carry an `if` guard.
///
/// ```rust,ignore
/// assert_violation_count!(violations, ViolationKind::DuplicateClaim { .. }, 1);
/// ```
#[macro_export]
macro_rules! assert_violation_count {
    ($violations:expr, $pattern:pat $(if $guard:expr)?, $count:expr $(,)?) => {
        let violations = &$violations;
        let matching = violations
            .iter()
            .filter(|v| matches!(&v.kind, $pattern $(if $guard)?))
            .count();
        if matching != $count {
            let lines: Vec<String> = violations.iter().map(|v| v.to_string()).collect();
            panic!(
                "expected {} violations matching `{}`, found {}:\n  {}",
                $count,
                stringify!($pattern),
                matching,
                lines.join("\n  ")
            );
        }
    };
}

/// Assert that at least one violation matches a `ViolationKind` pattern.
#[macro_export]
macro_rules! assert_has_violation {
    ($violations:expr, $pattern:pat $(if $guard:expr)? $(,)?) => {
        let violations = &$violations;
        if !violations.iter().any(|v| matches!(&v.kind, $pattern $(if $guard)?)) {
            let lines: Vec<String> = violations.iter().map(|v| v.to_string()).collect();
            panic!(
                "no violation matches `{}`:\n  {}",
                stringify!($pattern),
                lines.join("\n  ")
            );
        }
    };
}
