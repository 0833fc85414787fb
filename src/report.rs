//! Human-readable reporting of scan results.
//!
//! The scanner itself performs no presentation. The host application decides
//! when to scan and how to surface the outcome (warning dialog, log line,
//! stderr); these helpers only build the text and gate on "anything found".

use crate::finding::Finding;

/// Build the warning text for a non-empty set of findings.
///
/// Returns `None` when there is nothing to report, so callers can stay
/// silent instead of showing an empty dialog.
pub fn obsolete_libraries_warning(findings: &[Finding]) -> Option<String> {
    if findings.is_empty() {
        return None;
    }

    let mut message = String::from(
        "There are obsolete Java 3D libraries installed as Java extensions.\n\
         The following files were detected:\n",
    );
    for finding in findings {
        message.push_str(&format!("\n* {}", finding.absolute_path().display()));
    }
    message.push_str(
        "\n\nThese libraries will very likely cause problems with 3D visualization.\n\
         Please delete them, then restart the program.",
    );
    Some(message)
}

/// Run `present` with the warning text when any findings exist.
///
/// This is the seam between the scanner and the host UI: the application
/// passes whatever presentation it has and is not called back at all for a
/// clean system.
pub fn notify_obsolete_libraries<F>(findings: &[Finding], present: F)
where
    F: FnOnce(&str),
{
    if let Some(message) = obsolete_libraries_warning(findings) {
        present(&message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_findings_means_no_message() {
        assert!(obsolete_libraries_warning(&[]).is_none());
    }

    #[test]
    fn message_lists_every_finding() {
        let findings = vec![
            Finding::new("/ext/j3dcore.jar"),
            Finding::new("/ext/jogl-2.2.0.jar"),
        ];
        let message = obsolete_libraries_warning(&findings).unwrap();
        assert!(message.contains("* /ext/j3dcore.jar"));
        assert!(message.contains("* /ext/jogl-2.2.0.jar"));
        assert!(message.contains("Please delete them"));
    }

    #[test]
    fn presenter_is_not_called_for_empty_results() {
        let mut called = false;
        notify_obsolete_libraries(&[], |_| called = true);
        assert!(!called);
    }

    #[test]
    fn presenter_receives_the_warning_text() {
        let findings = vec![Finding::new("/ext/vecmath.jar")];
        let mut captured = String::new();
        notify_obsolete_libraries(&findings, |message| captured = message.to_string());
        assert!(captured.contains("/ext/vecmath.jar"));
    }
}
