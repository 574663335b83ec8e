//! Command-line entry point for `class-grouper`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{info, warn};

use class_grouper::config::Config;
use class_grouper::wheel::SpinWheel;
use class_grouper::{
    describe_sizing, export, generate_groups, roster, BalanceReport, GroupConfig, GroupingMode,
    Strategy, Student,
};

#[derive(Debug, Parser)]
#[command(name = "class-grouper", version, about = "Randomise a class roster into fair groups")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log filter, overrides the config file (e.g. `info`, `class_grouper=debug`)
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Split a roster into groups.
    Group {
        #[command(flatten)]
        sizing: SizingArgs,

        /// Fairness strategy; defaults to the config file's choice
        #[arg(long, value_enum)]
        strategy: Option<StrategyArg>,

        /// Base for generated names ("Kelompok" gives "Kelompok 1", ...)
        #[arg(long)]
        pattern: Option<String>,

        /// Custom group name, in order; repeat for each group
        #[arg(long = "name", value_name = "NAME", conflicts_with = "names_file")]
        names: Vec<String>,

        /// File of custom group names, one per line; a blank line keeps the generated name
        #[arg(long, value_name = "FILE")]
        names_file: Option<PathBuf>,

        /// Seed for a reproducible shuffle
        #[arg(long)]
        seed: Option<u64>,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Write the result here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Show how a roster would be split without shuffling it.
    Preview {
        #[command(flatten)]
        sizing: SizingArgs,
    },
    /// Pick one student at random.
    Spin {
        /// Roster file, one student per line
        roster: PathBuf,

        /// Leave this student off the wheel; repeatable
        #[arg(long)]
        exclude: Vec<String>,

        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Debug, Args)]
struct SizingArgs {
    /// Roster file, one student per line
    #[arg(
        required_unless_present_any = ["males", "females"],
        conflicts_with_all = ["males", "females"]
    )]
    roster: Option<PathBuf>,

    /// File of male names, one per line; used with --females instead of a roster
    #[arg(long, value_name = "FILE")]
    males: Option<PathBuf>,

    /// File of female names, one per line
    #[arg(long, value_name = "FILE")]
    females: Option<PathBuf>,

    /// Number of groups
    #[arg(
        long,
        short = 'g',
        conflicts_with = "size",
        required_unless_present = "size",
        allow_negative_numbers = true
    )]
    groups: Option<i64>,

    /// Members per group
    #[arg(long, short = 's', allow_negative_numbers = true)]
    size: Option<i64>,
}

impl SizingArgs {
    fn mode_and_value(&self) -> (GroupingMode, i64) {
        match (self.groups, self.size) {
            (Some(groups), _) => (GroupingMode::ByCount, groups),
            (None, Some(size)) => (GroupingMode::BySize, size),
            (None, None) => (GroupingMode::ByCount, 0),
        }
    }

    fn load_students(&self) -> Result<Vec<Student>> {
        if let Some(path) = &self.roster {
            return load_roster(path);
        }
        let males = read_optional(self.males.as_deref())?;
        let females = read_optional(self.females.as_deref())?;
        let students = roster::from_gender_lists(&males, &females);
        if students.is_empty() {
            bail!("the name lists contain no students");
        }
        info!("Loaded {} students from name lists", students.len());
        Ok(students)
    }
}

#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
enum StrategyArg {
    Random,
    Gender,
    Ability,
    GenderAbility,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Random => Strategy::Random,
            StrategyArg::Gender => Strategy::GenderBalance,
            StrategyArg::Ability => Strategy::AbilityHeterogeneous,
            StrategyArg::GenderAbility => Strategy::GenderAndAbilityHeterogeneous,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

fn load_roster(path: &Path) -> Result<Vec<Student>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading roster {}", path.display()))?;
    let students = roster::parse_roster(&text)
        .with_context(|| format!("parsing roster {}", path.display()))?;
    info!("Loaded {} students from {}", students.len(), path.display());
    Ok(students)
}

fn read_optional(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => Ok(String::new()),
    }
}

fn rng_for(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    }
}

fn init_tracing(directive: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(directive))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load_or_default(cli.config.as_deref())
        .context("loading configuration")?;
    init_tracing(cli.log_level.as_deref().unwrap_or(&config.logging.level));

    match cli.command {
        Command::Group {
            sizing,
            strategy,
            pattern,
            names,
            names_file,
            seed,
            format,
            output,
        } => {
            let students = sizing.load_students()?;
            let (mode, value) = sizing.mode_and_value();
            let mut group_config = GroupConfig::new(mode, value).with_strategy(
                strategy.map_or(config.grouping.strategy, Strategy::from),
            );
            group_config.naming_pattern = pattern.unwrap_or(config.grouping.naming_pattern);
            let names = match names_file {
                Some(path) => roster::parse_group_names(&read_optional(Some(&path))?),
                None => names,
            };
            if !names.is_empty() {
                group_config = group_config.with_custom_names(names);
            }

            let groups = generate_groups(&students, &group_config, &mut rng_for(seed))?;
            let report = BalanceReport::of(&groups);
            info!(
                "Built {} groups with {} strategy (size spread {})",
                groups.len(),
                group_config.strategy,
                report.size_spread()
            );
            if group_config.strategy != Strategy::Random && report.size_spread() > 1 {
                warn!(
                    "group sizes differ by {}; the roster is too small to balance evenly",
                    report.size_spread()
                );
            }

            let rendered = match format {
                Format::Text => export::to_text(&groups),
                Format::Json => export::to_json(&groups)?,
            };
            match output {
                Some(path) => {
                    fs::write(&path, rendered)
                        .with_context(|| format!("writing {}", path.display()))?;
                    info!("Wrote groups to {}", path.display());
                }
                None => print!("{rendered}"),
            }
        }
        Command::Preview { sizing } => {
            let students = sizing.load_students()?;
            let (mode, value) = sizing.mode_and_value();
            let layout = describe_sizing(students.len(), mode, value)?;
            println!("{} students: {layout}", students.len());
        }
        Command::Spin { roster, exclude, seed } => {
            let mut wheel = SpinWheel::new(load_roster(&roster)?);
            for name in &exclude {
                if wheel.remove_by_name(name) == 0 {
                    warn!("{name} is not on the roster");
                }
            }
            if wheel.active().is_empty() {
                bail!("no students left to pick from");
            }
            let winner = wheel.spin(&mut rng_for(seed))?;
            println!("{}", winner.name);
        }
    }
    Ok(())
}
