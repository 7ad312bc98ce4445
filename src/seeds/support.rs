//! Selection helpers shared across seed units.
//!
//! Three policies: index-modulo assignment from fixed pattern arrays,
//! case-insensitive keyword matching in a fixed priority order, and a
//! fallback chain for template rows (matched name, default, first).

/// Deterministic index-modulo selection: the k-th record always gets
/// `patterns[k % N]`. Requires a non-empty pattern slice.
pub fn pattern_at<T>(patterns: &[T], index: usize) -> &T {
    debug_assert!(!patterns.is_empty(), "pattern slices must be non-empty");
    &patterns[index % patterns.len()]
}

/// First-match keyword containment against an ordered rule list.
///
/// Matching is case-insensitive substring search; the rule order IS the
/// priority order, so a title matching several keywords resolves to the
/// earliest rule.
pub fn match_template<'a>(title: &str, rules: &[(&str, &'a str)]) -> Option<&'a str> {
    let lowered = title.to_lowercase();
    rules
        .iter()
        .find(|(keyword, _)| lowered.contains(&keyword.to_lowercase()))
        .map(|(_, template)| *template)
}

/// Resolves a template row with the standard fallback chain: the matched
/// name, else the designated default, else the first available row.
pub fn pick_template<'a, T>(
    rows: &'a [T],
    matched_name: Option<&str>,
    name_of: impl Fn(&T) -> &str,
    is_default: impl Fn(&T) -> bool,
) -> Option<&'a T> {
    if let Some(wanted) = matched_name
        && let Some(row) = rows.iter().find(|row| name_of(row) == wanted)
    {
        return Some(row);
    }
    rows.iter()
        .find(|row| is_default(row))
        .or_else(|| rows.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATUSES: [&str; 3] = ["approved", "pending", "rejected"];

    #[test]
    fn pattern_at_wraps_around() {
        assert_eq!(*pattern_at(&STATUSES, 0), "approved");
        assert_eq!(*pattern_at(&STATUSES, 2), "rejected");
        assert_eq!(*pattern_at(&STATUSES, 3), "approved");
        assert_eq!(*pattern_at(&STATUSES, 7), "pending");
    }

    #[test]
    #[should_panic(expected = "non-empty")]
    fn pattern_at_rejects_empty_patterns() {
        let empty: [&str; 0] = [];
        pattern_at(&empty, 0);
    }

    #[test]
    fn match_template_is_case_insensitive() {
        let rules = [("engineer", "Engineering"), ("sales", "Sales")];
        assert_eq!(
            match_template("Senior Software ENGINEER", &rules),
            Some("Engineering")
        );
        assert_eq!(match_template("Sales Executive", &rules), Some("Sales"));
        assert_eq!(match_template("Accountant", &rules), None);
    }

    #[test]
    fn match_template_respects_priority_order() {
        // "Sales Engineer" matches both keywords; the first rule wins.
        let rules = [("engineer", "Engineering"), ("sales", "Sales")];
        assert_eq!(
            match_template("Sales Engineer", &rules),
            Some("Engineering")
        );
    }

    struct Row {
        name: &'static str,
        is_default: bool,
    }

    const ROWS: [Row; 3] = [
        Row {
            name: "Engineering",
            is_default: false,
        },
        Row {
            name: "General",
            is_default: true,
        },
        Row {
            name: "Sales",
            is_default: false,
        },
    ];

    #[test]
    fn pick_template_prefers_match_then_default_then_first() {
        let by_match = pick_template(&ROWS, Some("Sales"), |r| r.name, |r| r.is_default);
        assert_eq!(by_match.unwrap().name, "Sales");

        let by_default = pick_template(&ROWS, None, |r| r.name, |r| r.is_default);
        assert_eq!(by_default.unwrap().name, "General");

        let unmatched = pick_template(&ROWS, Some("Finance"), |r| r.name, |r| r.is_default);
        assert_eq!(unmatched.unwrap().name, "General");

        let no_default: [Row; 1] = [Row {
            name: "Only",
            is_default: false,
        }];
        let first = pick_template(&no_default, None, |r| r.name, |r| r.is_default);
        assert_eq!(first.unwrap().name, "Only");

        let empty: [Row; 0] = [];
        assert!(pick_template(&empty, None, |r| r.name, |r| r.is_default).is_none());
    }
}
