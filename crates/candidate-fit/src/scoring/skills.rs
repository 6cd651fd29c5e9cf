use std::collections::BTreeSet;

fn skill_set(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(|skill| skill.trim().to_lowercase())
        .filter(|skill| !skill.is_empty())
        .collect()
}

/// Percentage (0-100, whole number) of required skills present in the candidate list.
///
/// Both inputs are comma separated and compared case-insensitively. Blank
/// entries are dropped rather than counted as a skill named "", so an empty
/// requirement list is fully matched instead of scoring 0.
pub fn skill_match_percentage(candidate: &str, required: &str) -> f64 {
    let required = skill_set(required);
    if required.is_empty() {
        return 100.0;
    }

    let candidate = skill_set(candidate);
    let matched = required.intersection(&candidate).count();
    (matched as f64 / required.len() as f64 * 100.0).round()
}
