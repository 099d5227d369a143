//! Pre-release precedence
//!
//! Pre-release strings are compared segment by segment after splitting on `.`.
//! Segments are case-folded and compared as plain strings, so `"10"` sorts
//! below `"9"`. When one side runs out of segments while the shared prefix is
//! equal, the shorter side is the greater one (`"beta"` > `"beta.1"`). Both
//! rules are kept for compatibility with existing version files.

use std::cmp::Ordering;

/// Compare two optional pre-release strings for precedence.
///
/// A missing pre-release ranks above any present one, so a release always
/// outranks its own pre-releases.
pub fn compare(left: Option<&str>, right: Option<&str>) -> Ordering {
    if left == right {
        return Ordering::Equal;
    }

    let left_segments = segments(left);
    let right_segments = segments(right);

    for (idx, left_segment) in left_segments.iter().enumerate() {
        let right_segment = right_segments.get(idx).map(String::as_str).unwrap_or("");

        if left_segment != right_segment && left_segment.is_empty() {
            return Ordering::Greater;
        }
        if left_segment != right_segment && right_segment.is_empty() {
            return Ordering::Less;
        }
        match left_segment.as_str().cmp(right_segment) {
            Ordering::Equal => continue,
            decided => return decided,
        }
    }

    if left_segments.len() < right_segments.len() {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

fn segments(pre_release: Option<&str>) -> Vec<String> {
    pre_release
        .unwrap_or("")
        .to_ascii_uppercase()
        .split('.')
        .map(str::to_string)
        .collect()
}
