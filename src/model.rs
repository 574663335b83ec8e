pub mod entity {
    use std::fmt;

    use serde::{Deserialize, Serialize};

    pub type Id = u32;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "kebab-case")]
    pub enum Gender {
        Male,
        Female,
    }

    /// Proficiency tier, 1 (lowest) to 4 (highest).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
    #[serde(try_from = "u8", into = "u8")]
    pub struct Proficiency(u8);

    impl Proficiency {
        pub const MIN: u8 = 1;
        pub const MAX: u8 = 4;

        pub fn new(tier: u8) -> Option<Proficiency> {
            (Self::MIN..=Self::MAX).contains(&tier).then_some(Proficiency(tier))
        }

        pub fn tier(self) -> u8 {
            self.0
        }

        /// Tiers from highest to lowest.
        pub fn descending() -> impl Iterator<Item = Proficiency> {
            (Self::MIN..=Self::MAX).rev().map(Proficiency)
        }
    }

    impl TryFrom<u8> for Proficiency {
        type Error = String;

        fn try_from(tier: u8) -> Result<Self, Self::Error> {
            Proficiency::new(tier)
                .ok_or_else(|| format!("proficiency tier must be 1-4, got {tier}"))
        }
    }

    impl From<Proficiency> for u8 {
        fn from(p: Proficiency) -> u8 {
            p.0
        }
    }

    impl fmt::Display for Proficiency {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Student {
        pub id: Id,
        pub name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub gender: Option<Gender>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub proficiency: Option<Proficiency>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub proficiency_label: Option<String>,
    }

    impl Student {
        pub fn new(id: Id, name: impl Into<String>) -> Student {
            Student {
                id,
                name: name.into(),
                gender: None,
                proficiency: None,
                proficiency_label: None,
            }
        }

        pub fn with_gender(self, gender: Gender) -> Student {
            Student { gender: Some(gender), ..self }
        }

        pub fn with_proficiency(self, proficiency: Proficiency) -> Student {
            Student { proficiency: Some(proficiency), ..self }
        }
    }
}

pub mod group {
    use serde::{Deserialize, Serialize};

    use super::entity::Student;

    /// A named group with no members yet.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct GroupShell {
        pub id: String,
        pub name: String,
    }

    impl GroupShell {
        pub fn fill(self, members: Vec<Student>) -> GroupResult {
            GroupResult { id: self.id, name: self.name, members }
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct GroupResult {
        pub id: String,
        pub name: String,
        pub members: Vec<Student>,
    }
}

pub mod config {
    use std::fmt;

    use serde::{Deserialize, Serialize};

    use crate::error::ConfigurationError;

    pub const DEFAULT_NAMING_PATTERN: &str = "Kelompok";

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    #[serde(rename_all = "kebab-case")]
    pub enum GroupingMode {
        /// `value` is the number of groups.
        #[default]
        ByCount,
        /// `value` is the number of members per group.
        BySize,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    #[serde(rename_all = "kebab-case")]
    pub enum Strategy {
        #[default]
        Random,
        GenderBalance,
        AbilityHeterogeneous,
        GenderAndAbilityHeterogeneous,
    }

    impl fmt::Display for Strategy {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let name = match self {
                Strategy::Random => "random",
                Strategy::GenderBalance => "gender-balance",
                Strategy::AbilityHeterogeneous => "ability-heterogeneous",
                Strategy::GenderAndAbilityHeterogeneous => "gender-and-ability-heterogeneous",
            };
            f.write_str(name)
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    #[serde(rename_all = "kebab-case")]
    pub enum NamingType {
        #[default]
        Auto,
        Custom,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct GroupConfig {
        pub mode: GroupingMode,
        pub value: i64,
        #[serde(default)]
        pub strategy: Strategy,
        #[serde(default)]
        pub naming_pattern: String,
        #[serde(default)]
        pub naming_type: NamingType,
        #[serde(default)]
        pub custom_names: Vec<String>,
    }

    impl GroupConfig {
        pub fn new(mode: GroupingMode, value: i64) -> GroupConfig {
            GroupConfig {
                mode,
                value,
                strategy: Strategy::default(),
                naming_pattern: DEFAULT_NAMING_PATTERN.to_string(),
                naming_type: NamingType::default(),
                custom_names: Vec::new(),
            }
        }

        pub fn with_strategy(self, strategy: Strategy) -> GroupConfig {
            GroupConfig { strategy, ..self }
        }

        pub fn with_custom_names(self, names: Vec<String>) -> GroupConfig {
            GroupConfig {
                naming_type: NamingType::Custom,
                custom_names: names,
                ..self
            }
        }

        /// Checks the preconditions a grouping run needs before any work is done.
        pub fn validate(&self, total_students: usize) -> Result<(), ConfigurationError> {
            if total_students == 0 {
                return Err(ConfigurationError::EmptyRoster);
            }
            if self.value <= 0 {
                return Err(ConfigurationError::NonPositiveValue(self.value));
            }
            Ok(())
        }
    }
}
