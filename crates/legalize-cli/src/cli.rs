//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Legalize CLI - Synthesize records that pass validation.
#[derive(Debug, Parser)]
#[command(name = "legalize")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "LEGALIZE_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (one line per result)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Synthesize records from specification files
    Generate(GenerateArgs),

    /// Inspect a trainer file
    Trainers(TrainersArgs),

    /// Write a default configuration file
    Init(InitArgs),
}

/// Arguments for the init command.
#[derive(Debug, Parser)]
pub struct InitArgs {
    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the generate command.
#[derive(Debug, Parser)]
pub struct GenerateArgs {
    /// Specification files (JSON or TOML); several run as one batch
    #[arg(short, long = "spec", required = true, num_args = 1..)]
    pub specs: Vec<String>,

    /// Target version (name or id)
    #[arg(short, long)]
    pub version: Option<String>,

    /// Trainer file used to seed the registry
    #[arg(short, long)]
    pub trainers: Option<String>,

    /// Seed for reproducible selection
    #[arg(long)]
    pub seed: Option<u64>,

    /// Search budget preset (overrides the config file)
    #[arg(long, value_enum)]
    pub preset: Option<PresetArg>,

    /// Validation rule preset (overrides the config file)
    #[arg(long, value_enum)]
    pub rules: Option<RulesArg>,
}

/// Arguments for the trainers command.
#[derive(Debug, Parser)]
pub struct TrainersArgs {
    /// Trainer file
    #[arg(short, long)]
    pub trainers: Option<String>,

    /// Only trainers of this version or version group
    #[arg(short, long, conflicts_with = "generation")]
    pub version: Option<String>,

    /// Only trainers of this generation
    #[arg(short, long)]
    pub generation: Option<u8>,

    /// Pick one trainer at random instead of listing
    #[arg(long)]
    pub pick: bool,

    /// Seed for --pick
    #[arg(long, requires = "pick")]
    pub seed: Option<u64>,
}

/// Search budget presets.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum PresetArg {
    /// Balanced defaults
    Default,
    /// Few attempts, short deadline
    Fast,
    /// Try every candidate
    Exhaustive,
}

/// Validation rule presets.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum RulesArg {
    /// Every rule except nickname checks
    Default,
    /// Structural checks only
    Permissive,
    /// Every rule
    Strict,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<PresetArg> for legalize_synthesizer::SynthesizerConfig {
    fn from(preset: PresetArg) -> Self {
        match preset {
            PresetArg::Default => Self::default(),
            PresetArg::Fast => Self::fast(),
            PresetArg::Exhaustive => Self::exhaustive(),
        }
    }
}

impl From<RulesArg> for legalize_gatekeeper::ValidationConfig {
    fn from(rules: RulesArg) -> Self {
        match rules {
            RulesArg::Default => Self::default(),
            RulesArg::Permissive => Self::permissive(),
            RulesArg::Strict => Self::strict(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_command() {
        let cli = Cli::parse_from([
            "legalize",
            "generate",
            "--spec",
            "darkrai.json",
            "--version",
            "US",
            "--seed",
            "7",
        ]);
        match cli.command {
            Command::Generate(args) => {
                assert_eq!(args.specs, vec!["darkrai.json"]);
                assert_eq!(args.version.as_deref(), Some("US"));
                assert_eq!(args.seed, Some(7));
            }
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn test_generate_requires_spec() {
        assert!(Cli::try_parse_from(["legalize", "generate"]).is_err());
    }

    #[test]
    fn test_trainers_version_conflicts_with_generation() {
        let result = Cli::try_parse_from([
            "legalize",
            "trainers",
            "--version",
            "BDSP",
            "--generation",
            "8",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_format() {
        let cli = Cli::parse_from(["legalize", "trainers", "--format", "json", "--pick"]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
    }

    #[test]
    fn test_init_command() {
        let cli = Cli::parse_from(["legalize", "--config", "/tmp/legalize.toml", "init", "--force"]);
        assert_eq!(cli.config.as_deref(), Some("/tmp/legalize.toml"));
        assert!(matches!(cli.command, Command::Init(InitArgs { force: true })));
    }

    #[test]
    fn test_preset_conversion() {
        let config: legalize_synthesizer::SynthesizerConfig = PresetArg::Fast.into();
        assert_eq!(config.max_attempts, 16);
        let rules: legalize_gatekeeper::ValidationConfig = RulesArg::Permissive.into();
        assert!(!rules.validate_encounter);
    }
}
