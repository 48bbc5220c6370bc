//! Version ordering for module records
//!
//! "Latest" is decided by semantic-version precedence, not string order:
//! `1.10.0` sorts above `1.2.0`. Versions are stored as raw strings and are
//! not guaranteed well-formed, so comparison degrades gracefully instead of
//! failing.

use std::cmp::Ordering;

use semver::Version;

/// Total order over raw version strings.
///
/// When both sides parse as semantic versions, semver precedence applies
/// (including prerelease ordering). Otherwise the strings compare as
/// dot-separated components: numeric where both components parse as
/// integers, lexicographic per component otherwise, with a shorter prefix
/// ordering first.
pub fn compare(a: &str, b: &str) -> Ordering {
    match (Version::parse(a), Version::parse(b)) {
        (Ok(va), Ok(vb)) => va.cmp(&vb),
        _ => compare_components(a, b),
    }
}

fn compare_components(a: &str, b: &str) -> Ordering {
    let mut left = a.split('.');
    let mut right = b.split('.');

    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ordering = match (x.parse::<u64>(), y.parse::<u64>()) {
                    (Ok(nx), Ok(ny)) => nx.cmp(&ny),
                    _ => x.cmp(y),
                };
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_digit_components_compare_numerically() {
        assert_eq!(compare("1.2.0", "1.10.0"), Ordering::Less);
        assert_eq!(compare("1.10.0", "1.2.0"), Ordering::Greater);
    }

    #[test]
    fn equal_versions() {
        assert_eq!(compare("1.2.3", "1.2.3"), Ordering::Equal);
    }

    #[test]
    fn prerelease_sorts_below_release() {
        assert_eq!(compare("2.0.0-beta.1", "2.0.0"), Ordering::Less);
        assert_eq!(compare("2.0.0-alpha", "2.0.0-beta"), Ordering::Less);
    }

    #[test]
    fn two_component_versions_fall_back_to_numeric_components() {
        // not valid semver, still ordered numerically
        assert_eq!(compare("1.9", "1.10"), Ordering::Less);
    }

    #[test]
    fn shorter_prefix_orders_first() {
        assert_eq!(compare("1.2", "1.2.0"), Ordering::Less);
    }

    #[test]
    fn non_numeric_components_compare_lexicographically() {
        assert_eq!(compare("1.2.x", "1.10.x"), Ordering::Less);
        assert_eq!(compare("alpha", "beta"), Ordering::Less);
    }
}
