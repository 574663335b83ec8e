use std::iter::Sum;
use std::ops::Add;

use itertools::{Itertools, MinMaxResult};
use serde::Serialize;

use crate::model::entity::{Gender, Proficiency, Student};
use crate::model::group::GroupResult;

/// Per-group head counts along each fairness axis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub members: usize,
    pub male: usize,
    pub female: usize,
    pub unknown_gender: usize,
    /// `tiers[t - 1]` counts members at proficiency tier `t`.
    pub tiers: [usize; Proficiency::MAX as usize],
    pub unrated: usize,
}

impl Tally {
    pub fn tier(&self, tier: Proficiency) -> usize {
        self.tiers[usize::from(tier.tier()) - 1]
    }
}

impl From<&Student> for Tally {
    fn from(student: &Student) -> Self {
        let mut tally = Tally { members: 1, ..Tally::default() };
        match student.gender {
            Some(Gender::Male) => tally.male = 1,
            Some(Gender::Female) => tally.female = 1,
            None => tally.unknown_gender = 1,
        }
        match student.proficiency {
            Some(p) => tally.tiers[usize::from(p.tier()) - 1] = 1,
            None => tally.unrated = 1,
        }
        tally
    }
}

impl Add for Tally {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let mut tiers = self.tiers;
        for (count, other) in tiers.iter_mut().zip(rhs.tiers) {
            *count += other;
        }
        Tally {
            members: self.members + rhs.members,
            male: self.male + rhs.male,
            female: self.female + rhs.female,
            unknown_gender: self.unknown_gender + rhs.unknown_gender,
            tiers,
            unrated: self.unrated + rhs.unrated,
        }
    }
}

impl<'a> Sum<&'a Student> for Tally {
    fn sum<I: Iterator<Item = &'a Student>>(iter: I) -> Self {
        iter.map(Tally::from).fold(Tally::default(), Add::add)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceReport {
    pub groups: Vec<Tally>,
}

fn spread(counts: impl Iterator<Item = usize>) -> usize {
    match counts.minmax() {
        MinMaxResult::NoElements | MinMaxResult::OneElement(_) => 0,
        MinMaxResult::MinMax(min, max) => max - min,
    }
}

impl BalanceReport {
    pub fn of(groups: &[GroupResult]) -> BalanceReport {
        BalanceReport {
            groups: groups.iter().map(|g| g.members.iter().sum::<Tally>()).collect(),
        }
    }

    pub fn total(&self) -> Tally {
        self.groups.iter().cloned().fold(Tally::default(), Add::add)
    }

    pub fn size_spread(&self) -> usize {
        spread(self.groups.iter().map(|t| t.members))
    }

    pub fn male_spread(&self) -> usize {
        spread(self.groups.iter().map(|t| t.male))
    }

    pub fn female_spread(&self) -> usize {
        spread(self.groups.iter().map(|t| t.female))
    }

    pub fn tier_spread(&self, tier: Proficiency) -> usize {
        spread(self.groups.iter().map(|t| t.tier(tier)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(members: Vec<Student>) -> GroupResult {
        GroupResult { id: "g".into(), name: "G".into(), members }
    }

    #[test]
    fn tally_counts_each_axis() {
        let members = vec![
            Student::new(1, "a")
                .with_gender(Gender::Male)
                .with_proficiency(Proficiency::new(4).unwrap()),
            Student::new(2, "b").with_gender(Gender::Female),
            Student::new(3, "c").with_proficiency(Proficiency::new(1).unwrap()),
        ];
        let tally: Tally = members.iter().sum();
        assert_eq!(tally.members, 3);
        assert_eq!((tally.male, tally.female, tally.unknown_gender), (1, 1, 1));
        assert_eq!(tally.tiers, [1, 0, 0, 1]);
        assert_eq!(tally.unrated, 1);
    }

    #[test]
    fn spreads_compare_groups() {
        let report = BalanceReport::of(&[
            group(vec![
                Student::new(1, "a").with_gender(Gender::Male),
                Student::new(2, "b").with_gender(Gender::Male),
                Student::new(3, "c").with_gender(Gender::Female),
            ]),
            group(vec![Student::new(4, "d").with_gender(Gender::Female)]),
        ]);
        assert_eq!(report.size_spread(), 2);
        assert_eq!(report.male_spread(), 2);
        assert_eq!(report.female_spread(), 0);
        assert_eq!(report.tier_spread(Proficiency::new(3).unwrap()), 0);
        assert_eq!(report.total().members, 4);
    }

    #[test]
    fn single_group_has_no_spread() {
        let report = BalanceReport::of(&[group(vec![Student::new(1, "a")])]);
        assert_eq!(report.size_spread(), 0);
        assert_eq!(BalanceReport::of(&[]).size_spread(), 0);
    }
}
