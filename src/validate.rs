//! Input validation for the submission layer.
//!
//! The repositories are permissive; everything user-typed is checked
//! here, before any record is built. Label resolution is two-tier:
//! case-insensitive exact match, then an error carrying the closest
//! valid label as a suggestion.

use crate::config::CategoryAxis;
use crate::error::{Error, Result};
use crate::model::Response;

/// Check an email address against the `local@domain.tld` shape:
/// a non-empty run of non-whitespace/non-`@` characters, `@`, a domain
/// containing at least one `.` with non-empty segments either side.
#[must_use]
pub fn email_is_valid(email: &str) -> bool {
    fn segment_ok(s: &str) -> bool {
        !s.is_empty() && s.chars().all(|c| !c.is_whitespace() && c != '@')
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((head, tail)) = domain.rsplit_once('.') else {
        return false;
    };
    segment_ok(local) && segment_ok(head) && segment_ok(tail)
}

/// Validate an email, returning it trimmed.
///
/// # Errors
///
/// Returns `Error::InvalidEmail` if the syntax check fails.
pub fn check_email(email: &str) -> Result<String> {
    let email = email.trim();
    if email_is_valid(email) {
        Ok(email.to_string())
    } else {
        Err(Error::InvalidEmail {
            email: email.to_string(),
        })
    }
}

/// Enforce the note length bound (a presentation concern; the
/// repository does not re-check it).
///
/// # Errors
///
/// Returns `Error::NoteTooLong` if the note exceeds the bound.
pub fn check_note(note: &str) -> Result<()> {
    let len = note.chars().count();
    if len > Response::MAX_NOTE_LEN {
        return Err(Error::NoteTooLong {
            len,
            max: Response::MAX_NOTE_LEN,
        });
    }
    Ok(())
}

/// Resolve user input against an axis's fixed label list.
///
/// Matching is case-insensitive; the canonical label from the list is
/// returned. A miss carries the closest label (edit distance <= 3) as a
/// suggestion.
///
/// # Errors
///
/// Returns `Error::UnknownLabel` if the input matches no label.
pub fn resolve_label(axis: &CategoryAxis, input: &str) -> Result<String> {
    let input = input.trim();

    if let Some(label) = axis
        .labels
        .iter()
        .find(|label| label.eq_ignore_ascii_case(input))
    {
        return Ok(label.clone());
    }

    Err(Error::UnknownLabel {
        axis: axis.id.clone(),
        label: input.to_string(),
        similar: find_closest_label(input, &axis.labels),
        valid: axis.labels.clone(),
    })
}

/// Find the closest label within edit distance 3, if any.
fn find_closest_label(input: &str, labels: &[String]) -> Option<String> {
    let input = input.to_lowercase();
    let mut best: Option<(&str, usize)> = None;

    for label in labels {
        let dist = levenshtein_distance(&input, &label.to_lowercase());
        if dist <= 3 && best.is_none_or(|(_, d)| dist < d) {
            best = Some((label.as_str(), dist));
        }
    }

    best.map(|(label, _)| label.to_string())
}

// ── Levenshtein distance ─────────────────────────────────────

/// Compute the Levenshtein edit distance between two strings.
#[must_use]
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let a_len = a.len();
    let b_len = b.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    // Single-row optimization (O(min(m,n)) space)
    let mut prev: Vec<usize> = (0..=b_len).collect();
    let mut curr = vec![0; b_len + 1];

    for i in 1..=a_len {
        curr[0] = i;
        for j in 1..=b_len {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_len]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mood_axis() -> CategoryAxis {
        CategoryAxis {
            id: "mood".to_string(),
            title: "Mood".to_string(),
            labels: ["Happy", "Calm", "Tense"].map(String::from).to_vec(),
        }
    }

    #[test]
    fn test_email_validation() {
        assert!(email_is_valid("user@example.com"));
        assert!(email_is_valid("first.last@sub.example.co"));

        assert!(!email_is_valid("not-an-email"));
        assert!(!email_is_valid("@example.com"));
        assert!(!email_is_valid("user@"));
        assert!(!email_is_valid("user@example"));
        assert!(!email_is_valid("us er@example.com"));
        assert!(!email_is_valid("user@@example.com"));
        assert!(!email_is_valid("user@.com"));
    }

    #[test]
    fn test_check_email_trims() {
        assert_eq!(
            check_email("  user@example.com ").unwrap(),
            "user@example.com"
        );
        assert!(check_email("nope").is_err());
    }

    #[test]
    fn test_note_bound() {
        assert!(check_note(&"x".repeat(140)).is_ok());
        assert!(check_note(&"x".repeat(141)).is_err());
        // Bound is in characters, not bytes
        assert!(check_note(&"é".repeat(140)).is_ok());
    }

    #[test]
    fn test_resolve_label_case_insensitive() {
        let axis = mood_axis();
        assert_eq!(resolve_label(&axis, "happy").unwrap(), "Happy");
        assert_eq!(resolve_label(&axis, "CALM").unwrap(), "Calm");
    }

    #[test]
    fn test_resolve_label_suggests_closest() {
        let axis = mood_axis();
        let err = resolve_label(&axis, "Hapy").unwrap_err();
        match err {
            Error::UnknownLabel { similar, .. } => {
                assert_eq!(similar, Some("Happy".to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_resolve_label_far_miss_has_no_suggestion() {
        let axis = mood_axis();
        let err = resolve_label(&axis, "Transcendental").unwrap_err();
        match err {
            Error::UnknownLabel { similar, .. } => assert_eq!(similar, None),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_levenshtein() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("abc", "abc"), 0);
        assert_eq!(levenshtein_distance("abc", "abd"), 1);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
    }
}
