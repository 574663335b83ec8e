//! Fills group shells with students according to a fairness strategy.
//!
//! Every strategy shares the same two placement moves: round-robin over an
//! ordered sequence, which keeps the per-group count of that sequence within
//! one, and greedy placement into the currently smallest group for students
//! who carry no constraint. The strategies differ only in how they order and
//! split the roster before placing it.

use itertools::Itertools;
use tracing::debug;

use crate::error::ConfigurationError;
use crate::model::config::Strategy;
use crate::model::entity::{Gender, Proficiency, Student};
use crate::model::group::{GroupResult, GroupShell};
use crate::shuffle::{shuffle, RandomSource};

type Members = Vec<Vec<Student>>;

struct GenderBuckets {
    male: Vec<Student>,
    female: Vec<Student>,
    unknown: Vec<Student>,
}

impl GenderBuckets {
    fn split(students: impl IntoIterator<Item = Student>) -> GenderBuckets {
        let mut buckets = GenderBuckets {
            male: Vec::new(),
            female: Vec::new(),
            unknown: Vec::new(),
        };
        for student in students {
            match student.gender {
                Some(Gender::Male) => buckets.male.push(student),
                Some(Gender::Female) => buckets.female.push(student),
                None => buckets.unknown.push(student),
            }
        }
        buckets
    }
}

/// Slot 0 holds tier 4, slot 3 holds tier 1, slot 4 holds unrated students.
const TIER_SLOTS: usize = Proficiency::MAX as usize + 1;

fn tier_slot(proficiency: Option<Proficiency>) -> usize {
    match proficiency {
        Some(p) => usize::from(Proficiency::MAX - p.tier()),
        None => TIER_SLOTS - 1,
    }
}

fn tier_buckets(students: &[Student]) -> [Vec<Student>; TIER_SLOTS] {
    let mut buckets: [Vec<Student>; TIER_SLOTS] = Default::default();
    for student in students {
        buckets[tier_slot(student.proficiency)].push(student.clone());
    }
    buckets
}

fn round_robin(groups: &mut Members, students: impl IntoIterator<Item = Student>) {
    let n_groups = groups.len();
    for (k, student) in students.into_iter().enumerate() {
        groups[k % n_groups].push(student);
    }
}

/// Places each student into the group with the fewest members, lowest index on ties.
fn fill_smallest(groups: &mut Members, students: impl IntoIterator<Item = Student>) {
    for student in students {
        if let Some(index) = groups.iter().position_min_by_key(|members| members.len()) {
            groups[index].push(student);
        }
    }
}

fn shuffle_each<R: RandomSource + ?Sized>(groups: &mut Members, rng: &mut R) {
    for members in groups.iter_mut() {
        shuffle(members, rng);
    }
}

fn by_random<R: RandomSource + ?Sized>(students: &[Student], groups: &mut Members, rng: &mut R) {
    let mut roster = students.to_vec();
    shuffle(&mut roster, rng);
    round_robin(groups, roster);
}

fn by_gender<R: RandomSource + ?Sized>(students: &[Student], groups: &mut Members, rng: &mut R) {
    let mut buckets = GenderBuckets::split(students.iter().cloned());
    shuffle(&mut buckets.male, rng);
    shuffle(&mut buckets.female, rng);
    shuffle(&mut buckets.unknown, rng);

    round_robin(groups, buckets.male);
    round_robin(groups, buckets.female);
    fill_smallest(groups, buckets.unknown);
    shuffle_each(groups, rng);
}

fn by_ability<R: RandomSource + ?Sized>(students: &[Student], groups: &mut Members, rng: &mut R) {
    let mut tiers = tier_buckets(students);
    for tier in tiers.iter_mut() {
        shuffle(tier, rng);
    }
    round_robin(groups, tiers.into_iter().flatten());
    shuffle_each(groups, rng);
}

fn by_gender_and_ability<R: RandomSource + ?Sized>(
    students: &[Student],
    groups: &mut Members,
    rng: &mut R,
) {
    let mut roster = students.to_vec();
    shuffle(&mut roster, rng);
    let buckets = GenderBuckets::split(roster);

    // sorted_by_key is stable: equal tiers keep their shuffled order
    let male = buckets.male.into_iter().sorted_by_key(|s| tier_slot(s.proficiency));
    let female = buckets.female.into_iter().sorted_by_key(|s| tier_slot(s.proficiency));

    round_robin(groups, male);
    round_robin(groups, female);
    fill_smallest(groups, buckets.unknown);
    shuffle_each(groups, rng);
}

/// Distributes `students` across `shells` using `strategy`.
///
/// The returned groups are in shell order. Group sizes and per-axis counts
/// follow the strategy's balance guarantees; which student lands where is
/// random.
pub fn partition_students<R: RandomSource + ?Sized>(
    students: &[Student],
    shells: Vec<GroupShell>,
    strategy: Strategy,
    rng: &mut R,
) -> Result<Vec<GroupResult>, ConfigurationError> {
    if students.is_empty() {
        return Err(ConfigurationError::EmptyRoster);
    }
    if shells.is_empty() {
        return Err(ConfigurationError::NoGroups);
    }
    if shells.len() > students.len() {
        return Err(ConfigurationError::MoreGroupsThanStudents {
            groups: shells.len(),
            students: students.len(),
        });
    }

    let mut groups: Members = vec![Vec::new(); shells.len()];
    match strategy {
        Strategy::Random => by_random(students, &mut groups, rng),
        Strategy::GenderBalance => by_gender(students, &mut groups, rng),
        Strategy::AbilityHeterogeneous => by_ability(students, &mut groups, rng),
        Strategy::GenderAndAbilityHeterogeneous => {
            by_gender_and_ability(students, &mut groups, rng)
        }
    }
    debug!(
        students = students.len(),
        groups = shells.len(),
        %strategy,
        "partitioned roster"
    );

    Ok(shells
        .into_iter()
        .zip(groups)
        .map(|(shell, members)| shell.fill(members))
        .collect())
}
