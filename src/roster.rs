//! Plain-text roster ingestion.
//!
//! One student per line, with optional gender and proficiency columns
//! separated by a comma, semicolon or tab:
//!
//! ```text
//! # name, gender, proficiency
//! Andi Pratama, L, Mahir
//! Citra Lestari; F; 2
//! Eko Purnomo
//! ```

use tracing::warn;

use crate::error::RosterError;
use crate::model::entity::{Gender, Id, Proficiency, Student};

const SEPARATORS: [char; 3] = [',', ';', '\t'];

const TIER_LABELS: [(&str, u8); 4] = [
    ("intervensi", 1),
    ("berkembang", 2),
    ("cakap", 3),
    ("mahir", 4),
];

fn parse_gender(raw: &str) -> Option<Option<Gender>> {
    match raw.trim().to_lowercase().as_str() {
        "" | "-" => Some(None),
        "m" | "male" | "l" | "laki-laki" | "laki" | "pria" | "boy" => Some(Some(Gender::Male)),
        "f" | "female" | "p" | "perempuan" | "wanita" | "girl" => Some(Some(Gender::Female)),
        _ => None,
    }
}

/// Returns the tier and the label to keep for display.
fn parse_proficiency(raw: &str) -> Option<Option<(Proficiency, Option<String>)>> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "-" {
        return Some(None);
    }
    if let Ok(tier) = raw.parse::<u8>() {
        return Proficiency::new(tier).map(|p| Some((p, None)));
    }
    let lower = raw.to_lowercase();
    TIER_LABELS
        .iter()
        .find(|(label, _)| *label == lower)
        .and_then(|(_, tier)| Proficiency::new(*tier))
        .map(|p| Some((p, Some(raw.to_string()))))
}

fn parse_line(line_no: usize, line: &str, id: Id) -> Result<Student, RosterError> {
    let mut columns = line.split(&SEPARATORS[..]).map(str::trim);
    let name = columns.next().unwrap_or_default();
    if name.is_empty() {
        return Err(RosterError::EmptyName { line: line_no });
    }
    let mut student = Student::new(id, name);

    if let Some(raw) = columns.next() {
        student.gender = parse_gender(raw).ok_or_else(|| RosterError::InvalidGender {
            line: line_no,
            value: raw.to_string(),
        })?;
    }
    if let Some(raw) = columns.next() {
        let parsed = parse_proficiency(raw).ok_or_else(|| RosterError::InvalidProficiency {
            line: line_no,
            value: raw.to_string(),
        })?;
        if let Some((proficiency, label)) = parsed {
            student.proficiency = Some(proficiency);
            student.proficiency_label = label;
        }
    }
    let extra = columns.filter(|c| !c.is_empty()).count();
    if extra > 0 {
        warn!(line = line_no, extra, "ignoring extra roster columns");
    }
    Ok(student)
}

/// Parses a roster, assigning ids from 1 in line order.
pub fn parse_roster(text: &str) -> Result<Vec<Student>, RosterError> {
    let mut students = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let id = Id::try_from(students.len() + 1).unwrap_or(Id::MAX);
        students.push(parse_line(index + 1, line, id)?);
    }
    if students.is_empty() {
        return Err(RosterError::NoStudents);
    }
    Ok(students)
}

/// Builds a roster from separate lists of male and female names, males first.
pub fn from_gender_lists(males: &str, females: &str) -> Vec<Student> {
    let names = |text: &str| {
        text.lines()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect::<Vec<_>>()
    };
    names(males)
        .into_iter()
        .map(|name| (name, Gender::Male))
        .chain(names(females).into_iter().map(|name| (name, Gender::Female)))
        .zip(1..)
        .map(|((name, gender), id)| Student::new(id, name).with_gender(gender))
        .collect()
}

/// Reads custom group names, one per line. Blank lines are kept so each
/// name stays aligned with its group; a blank entry falls back to the
/// generated name.
pub fn parse_group_names(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_only() {
        let students = parse_roster("Andi\r\n\n  Budi  \nCitra\n").unwrap();
        let names: Vec<_> = students.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Andi", "Budi", "Citra"]);
        let ids: Vec<_> = students.iter().map(|s| s.id).collect();
        assert_eq!(ids, [1, 2, 3]);
        assert!(students.iter().all(|s| s.gender.is_none() && s.proficiency.is_none()));
    }

    #[test]
    fn optional_columns() {
        let text = "# header\nAndi, L, Mahir\nCitra; f; 2\nDewi\tP\nEko, -, 3\n";
        let students = parse_roster(text).unwrap();
        assert_eq!(students.len(), 4);
        assert_eq!(students[0].gender, Some(Gender::Male));
        assert_eq!(students[0].proficiency, Proficiency::new(4));
        assert_eq!(students[0].proficiency_label.as_deref(), Some("Mahir"));
        assert_eq!(students[1].gender, Some(Gender::Female));
        assert_eq!(students[1].proficiency, Proficiency::new(2));
        assert_eq!(students[1].proficiency_label, None);
        assert_eq!(students[2].gender, Some(Gender::Female));
        assert_eq!(students[2].proficiency, None);
        assert_eq!(students[3].gender, None);
        assert_eq!(students[3].proficiency, Proficiency::new(3));
    }

    #[test]
    fn reports_bad_columns_with_line_numbers() {
        assert_eq!(
            parse_roster("Andi\nBudi, X\n"),
            Err(RosterError::InvalidGender { line: 2, value: "X".into() })
        );
        assert_eq!(
            parse_roster("Andi, M, 7"),
            Err(RosterError::InvalidProficiency { line: 1, value: "7".into() })
        );
        assert_eq!(parse_roster(", M"), Err(RosterError::EmptyName { line: 1 }));
        assert_eq!(parse_roster("\n# only a comment\n"), Err(RosterError::NoStudents));
    }

    #[test]
    fn gender_lists() {
        let students = from_gender_lists("Andi\nBudi\n", "\nCitra\n");
        let summary: Vec<_> =
            students.iter().map(|s| (s.id, s.name.as_str(), s.gender)).collect();
        assert_eq!(
            summary,
            [
                (1, "Andi", Some(Gender::Male)),
                (2, "Budi", Some(Gender::Male)),
                (3, "Citra", Some(Gender::Female)),
            ]
        );
    }

    #[test]
    fn group_names_keep_blank_positions() {
        let names = parse_group_names("Tigers\r\n\nEagles\n");
        assert_eq!(names, ["Tigers", "", "Eagles"]);
        assert!(parse_group_names("").is_empty());
    }
}
