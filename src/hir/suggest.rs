//! Spelling suggestions for unresolved names.
//!
//! A bounded Levenshtein search where a case-only difference costs far less
//! than a real substitution, so `reset` suggests `Reset` before `Rest`.

/// Find the closest candidate to `name`, if any is close enough.
///
/// Candidates are skipped when:
/// - their length differs by more than `max(2, floor(0.34 * len))`
/// - they equal `name` exactly
/// - they are shorter than 3 characters and differ by more than case
///
/// A candidate is accepted when its distance is at most the best distance
/// so far minus `0.1`; the bound starts at `floor(0.4 * len) + 1`. Ties keep
/// the first candidate.
pub fn suggest<'a>(name: &str, candidates: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let name_chars: Vec<char> = name.chars().collect();
    let len = name_chars.len();
    let maximum_length_difference = 2.max(len * 34 / 100);
    let mut best_distance = (len as f64 * 0.4).floor() + 1.0;
    let mut best = None;

    for candidate in candidates {
        let candidate_chars: Vec<char> = candidate.chars().collect();
        if candidate_chars.len().abs_diff(len) > maximum_length_difference {
            continue;
        }
        if candidate == name {
            continue;
        }
        if candidate_chars.len() < 3 && candidate.to_lowercase() != name.to_lowercase() {
            continue;
        }

        if let Some(distance) = levenshtein_with_max(&name_chars, &candidate_chars, best_distance - 0.1) {
            best_distance = distance;
            best = Some(candidate);
        }
    }

    best
}

/// Weighted edit distance from `s1` to `s2`, or `None` once it exceeds `max`.
///
/// Insertions and deletions cost 1, case-only substitutions 0.1 and other
/// substitutions 2. Only a band of width `max` around the diagonal is filled.
fn levenshtein_with_max(s1: &[char], s2: &[char], max: f64) -> Option<f64> {
    let mut previous: Vec<f64> = (0..=s2.len()).map(|j| j as f64).collect();
    let mut current = vec![0.0; s2.len() + 1];
    // Stands in for any value above `max`
    let big = max + 0.01;

    for (i, &c1) in (1..).zip(s1) {
        let row = i as f64;
        let min_j = (if row > max { row - max } else { 1.0 }).ceil() as usize;
        let max_j = if s2.len() as f64 > max + row {
            (max + row).floor() as usize
        } else {
            s2.len()
        };

        current[0] = row;
        let mut column_min = row;

        for cell in current.iter_mut().take(min_j.min(s2.len() + 1)).skip(1) {
            *cell = big;
        }
        for j in min_j..=max_j {
            let c2 = s2[j - 1];
            let substitution = if same_ignoring_case(c1, c2) {
                previous[j - 1] + 0.1
            } else {
                previous[j - 1] + 2.0
            };
            let distance = if c1 == c2 {
                previous[j - 1]
            } else {
                (previous[j] + 1.0)
                    .min(current[j - 1] + 1.0)
                    .min(substitution)
            };
            current[j] = distance;
            column_min = column_min.min(distance);
        }
        for cell in current.iter_mut().skip(max_j + 1) {
            *cell = big;
        }

        if column_min > max {
            return None;
        }

        std::mem::swap(&mut previous, &mut current);
    }

    let distance = previous[s2.len()];
    (distance <= max).then_some(distance)
}

fn same_ignoring_case(a: char, b: char) -> bool {
    a.to_lowercase().eq(b.to_lowercase())
}
