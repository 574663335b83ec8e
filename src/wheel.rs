//! Spin wheel: uniform random pick from a roster, optionally removing each
//! winner so they are not drawn again.

use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

use crate::model::entity::{Id, Student};
use crate::shuffle::{pick, RandomSource};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WheelError {
    #[error("every student has already been picked")]
    NoActiveStudents,
}

#[derive(Debug, Clone)]
pub struct SpinWheel {
    students: Vec<Student>,
    removed: HashSet<Id>,
}

impl SpinWheel {
    pub fn new(students: Vec<Student>) -> SpinWheel {
        SpinWheel { students, removed: HashSet::new() }
    }

    pub fn active(&self) -> Vec<&Student> {
        self.students.iter().filter(|s| !self.removed.contains(&s.id)).collect()
    }

    pub fn spin<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<&Student, WheelError> {
        let active = self.active();
        let winner = pick(&active, rng).copied().ok_or(WheelError::NoActiveStudents)?;
        debug!(winner = %winner.name, candidates = active.len(), "wheel spun");
        Ok(winner)
    }

    /// Takes a student off the wheel. Returns false if they were already off.
    pub fn remove(&mut self, id: Id) -> bool {
        self.removed.insert(id)
    }

    pub fn remove_by_name(&mut self, name: &str) -> usize {
        let ids: Vec<Id> = self
            .students
            .iter()
            .filter(|s| s.name.eq_ignore_ascii_case(name.trim()))
            .map(|s| s.id)
            .collect();
        ids.into_iter().filter(|id| self.remove(*id)).count()
    }

    pub fn restore_all(&mut self) {
        self.removed.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;

    fn wheel() -> SpinWheel {
        SpinWheel::new(vec![
            Student::new(1, "Andi"),
            Student::new(2, "Budi"),
            Student::new(3, "Citra"),
        ])
    }

    #[test]
    fn spin_draws_every_student_eventually() {
        let wheel = wheel();
        let mut rng = SmallRng::seed_from_u64(4);
        let seen: HashSet<Id> = (0..100).map(|_| wheel.spin(&mut rng).unwrap().id).collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn removed_winners_are_not_drawn() {
        let mut wheel = wheel();
        let mut rng = SmallRng::seed_from_u64(8);
        assert!(wheel.remove(1));
        assert!(!wheel.remove(1));
        assert_eq!(wheel.remove_by_name("citra"), 1);
        for _ in 0..20 {
            assert_eq!(wheel.spin(&mut rng).unwrap().id, 2);
        }
        wheel.remove(2);
        assert_eq!(wheel.spin(&mut rng), Err(WheelError::NoActiveStudents));
        wheel.restore_all();
        assert_eq!(wheel.active().len(), 3);
    }
}
