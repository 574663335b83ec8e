//! Randomised classroom grouping under fairness constraints.
//!
//! A grouping run resolves the requested layout into named, empty
//! [`GroupShell`]s and then fills them with [`partition_students`] using one
//! of four [`Strategy`] values. [`generate_groups`] does both in one call.

pub mod balance;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod partition;
pub mod roster;
pub mod shuffle;
pub mod sizing;
pub mod wheel;

use tracing::debug;

pub use balance::{BalanceReport, Tally};
pub use error::{ConfigurationError, Error, Result, RosterError};
pub use model::config::{GroupConfig, GroupingMode, NamingType, Strategy};
pub use model::entity::{Gender, Id, Proficiency, Student};
pub use model::group::{GroupResult, GroupShell};
pub use partition::partition_students;
pub use shuffle::{shuffle, RandomSource};
pub use sizing::{describe_sizing, resolve_group_shells};

/// Validates `config`, resolves its group shells and partitions `students` into them.
pub fn generate_groups<R: RandomSource + ?Sized>(
    students: &[Student],
    config: &GroupConfig,
    rng: &mut R,
) -> std::result::Result<Vec<GroupResult>, ConfigurationError> {
    config.validate(students.len())?;
    let shells = resolve_group_shells(
        students.len(),
        config.mode,
        config.value,
        &config.naming_pattern,
        config.naming_type,
        &config.custom_names,
    )?;
    let groups = partition_students(students, shells, config.strategy, rng)?;

    let report = BalanceReport::of(&groups);
    debug!(
        size_spread = report.size_spread(),
        male_spread = report.male_spread(),
        female_spread = report.female_spread(),
        "group balance"
    );
    Ok(groups)
}
