//! Turns a "how many groups" or "how many per group" request into named,
//! empty group shells.

use crate::error::ConfigurationError;
use crate::model::config::{GroupingMode, NamingType, DEFAULT_NAMING_PATTERN};
use crate::model::group::GroupShell;

/// Number of groups a request produces.
///
/// By count, the value is clamped to the roster size so no group is left
/// empty. By size, the roster is split into `ceil(total / value)` groups.
pub fn group_count(
    total_students: usize,
    mode: GroupingMode,
    value: i64,
) -> Result<usize, ConfigurationError> {
    if total_students == 0 {
        return Err(ConfigurationError::EmptyRoster);
    }
    if value <= 0 {
        return Err(ConfigurationError::NonPositiveValue(value));
    }
    let value = usize::try_from(value).unwrap_or(usize::MAX);
    Ok(match mode {
        GroupingMode::ByCount => value.clamp(1, total_students),
        GroupingMode::BySize => total_students.div_ceil(value),
    })
}

pub fn group_name(
    index: usize,
    naming_pattern: &str,
    naming_type: NamingType,
    custom_names: &[String],
) -> String {
    if naming_type == NamingType::Custom {
        if let Some(custom) = custom_names.get(index).filter(|name| !name.is_empty()) {
            return custom.clone();
        }
    }
    let base = match naming_pattern.trim() {
        "" => DEFAULT_NAMING_PATTERN,
        pattern => pattern,
    };
    format!("{base} {}", index + 1)
}

pub fn resolve_group_shells(
    total_students: usize,
    mode: GroupingMode,
    value: i64,
    naming_pattern: &str,
    naming_type: NamingType,
    custom_names: &[String],
) -> Result<Vec<GroupShell>, ConfigurationError> {
    let count = group_count(total_students, mode, value)?;
    Ok((0..count)
        .map(|i| GroupShell {
            id: format!("g-{i}"),
            name: group_name(i, naming_pattern, naming_type, custom_names),
        })
        .collect())
}

/// One-line preview of the layout a request will produce, e.g.
/// `"4 groups (7-8 per group)"`.
pub fn describe_sizing(
    total_students: usize,
    mode: GroupingMode,
    value: i64,
) -> Result<String, ConfigurationError> {
    let count = group_count(total_students, mode, value)?;
    let smallest = total_students / count;
    let largest = smallest + usize::from(total_students % count > 0);
    let noun = if count == 1 { "group" } else { "groups" };
    Ok(if smallest == largest {
        format!("{count} {noun} ({smallest} per group)")
    } else {
        format!("{count} {noun} ({smallest}-{largest} per group)")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(shells: &[GroupShell]) -> Vec<&str> {
        shells.iter().map(|s| s.name.as_str()).collect()
    }

    fn auto(total: usize, value: i64, pattern: &str) -> Vec<GroupShell> {
        resolve_group_shells(total, GroupingMode::ByCount, value, pattern, NamingType::Auto, &[])
            .unwrap()
    }

    fn custom(total: usize, value: i64, pattern: &str, names: &[&str]) -> Vec<GroupShell> {
        let names: Vec<String> = names.iter().map(|name| name.to_string()).collect();
        let mode = GroupingMode::ByCount;
        resolve_group_shells(total, mode, value, pattern, NamingType::Custom, &names).unwrap()
    }

    #[test]
    fn by_count_returns_requested_number() {
        for total in 1..=30 {
            for value in 1..=total {
                assert_eq!(auto(total, value as i64, "Group").len(), value);
            }
        }
    }

    #[test]
    fn by_count_never_exceeds_roster() {
        assert_eq!(auto(3, 10, "").len(), 3);
    }

    #[test]
    fn by_size_rounds_up() {
        for total in 1..=30usize {
            for value in 1..=12usize {
                let count = group_count(total, GroupingMode::BySize, value as i64).unwrap();
                assert_eq!(count, (total + value - 1) / value);
                assert!(count <= total);
            }
        }
        assert_eq!(group_count(7, GroupingMode::BySize, 3).unwrap(), 3);
    }

    #[test]
    fn rejects_non_positive_value_and_empty_roster() {
        assert_eq!(
            group_count(5, GroupingMode::ByCount, 0),
            Err(ConfigurationError::NonPositiveValue(0))
        );
        assert_eq!(
            group_count(5, GroupingMode::BySize, -2),
            Err(ConfigurationError::NonPositiveValue(-2))
        );
        assert_eq!(
            group_count(0, GroupingMode::ByCount, 2),
            Err(ConfigurationError::EmptyRoster)
        );
    }

    #[test]
    fn custom_names_fall_back_to_pattern() {
        let shells = custom(9, 3, "Team", &["Tigers", "Eagles"]);
        assert_eq!(names(&shells), ["Tigers", "Eagles", "Team 3"]);
        let ids: Vec<_> = shells.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["g-0", "g-1", "g-2"]);
    }

    #[test]
    fn empty_custom_name_uses_pattern() {
        let shells = custom(3, 3, "Tim", &["", "Sharks"]);
        assert_eq!(names(&shells), ["Tim 1", "Sharks", "Tim 3"]);
    }

    #[test]
    fn whitespace_custom_name_is_kept_verbatim() {
        let shells = custom(4, 2, "Tim", &["  ", "Eagles"]);
        assert_eq!(names(&shells), ["  ", "Eagles"]);
        let shells = custom(2, 2, "Tim", &[" Lions ", ""]);
        assert_eq!(names(&shells), [" Lions ", "Tim 2"]);
    }

    #[test]
    fn auto_naming_ignores_custom_list() {
        let custom = vec!["Tigers".to_string()];
        let shells =
            resolve_group_shells(4, GroupingMode::ByCount, 2, "  ", NamingType::Auto, &custom)
                .unwrap();
        assert_eq!(names(&shells), ["Kelompok 1", "Kelompok 2"]);
    }

    #[test]
    fn pattern_is_trimmed() {
        assert_eq!(group_name(0, "  Squad ", NamingType::Auto, &[]), "Squad 1");
    }

    #[test]
    fn sizing_preview() {
        assert_eq!(
            describe_sizing(30, GroupingMode::ByCount, 4).unwrap(),
            "4 groups (7-8 per group)"
        );
        assert_eq!(
            describe_sizing(12, GroupingMode::BySize, 3).unwrap(),
            "4 groups (3 per group)"
        );
        assert_eq!(
            describe_sizing(2, GroupingMode::BySize, 5).unwrap(),
            "1 group (2 per group)"
        );
    }
}
