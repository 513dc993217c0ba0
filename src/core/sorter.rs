use crate::domain::model::Record;
use std::cmp::Ordering;

/// Ordinal, locale-independent comparison on lower-cased code points.
pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Stable sort by first name, then last name, ignoring case.
pub fn sort_by_name(records: &mut [Record]) {
    records.sort_by(|a, b| {
        compare_ignore_case(&a.first_name, &b.first_name)
            .then_with(|| compare_ignore_case(&a.last_name, &b.last_name))
    });
}
