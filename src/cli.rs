//! CLI Argument Parsing
//!
//! Global flags (`--verbose`, `--events`) are inherited by all subcommands.
//! Repository and build flags are shared through `CommonArgs` and take
//! precedence over `MONO_META_*` variables and the config file.

use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;
use clap::{ArgAction, Args, Parser, Subcommand};
use mono_meta::presentation::OutputFormat;
use mono_meta::Config;

/// mono-meta - inventory and diff the services of a monorepo
#[derive(Parser, Debug)]
#[command(name = "mono-meta")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit progress events as NDJSON on stderr
    #[arg(long, global = true)]
    pub events: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build every service of one reference and print the inventory
    Services {
        #[command(flatten)]
        common: CommonArgs,

        /// Branch or reference to inventory
        #[arg(
            short,
            long,
            default_value = "master",
            value_parser = NonEmptyStringValueParser::new()
        )]
        branch: String,
    },

    /// Compare the services of two references
    Diff {
        #[command(flatten)]
        common: CommonArgs,

        /// Reference to compare against
        #[arg(
            short,
            long,
            default_value = "master",
            value_parser = NonEmptyStringValueParser::new()
        )]
        base: String,

        /// Reference being evaluated
        #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
        compare: String,

        /// Only print new, removed and modified services
        #[arg(long)]
        changed_only: bool,
    },
}

/// Repository, build and output flags
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Config file (JSON, or TOML with a .toml extension)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Local working tree, or clone target when --url is given
    #[arg(short, long, value_name = "PATH")]
    pub local: Option<PathBuf>,

    /// Remote repository to clone
    #[arg(short, long)]
    pub url: Option<String>,

    /// Build command; must output to $1 [default: "go build -o $1"]
    #[arg(short = 'e', long = "build-cmd", value_name = "CMD")]
    pub build_cmd: Option<String>,

    /// Glob locating service directories, e.g. "services/*"
    #[arg(short, long, value_name = "GLOB")]
    pub services: Option<String>,

    /// Artifact file name [default: app]
    #[arg(long, value_name = "NAME")]
    pub binary_name: Option<String>,

    /// Service names to skip (comma separated)
    #[arg(long, value_delimiter = ',', value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

impl CommonArgs {
    /// The configuration layer given on the command line
    pub fn to_config(&self) -> Config {
        Config {
            services: self.services.clone(),
            cmd: self.build_cmd.clone(),
            binary_name: self.binary_name.clone(),
            exclude: self.exclude.clone(),
            local: self.local.clone(),
            url: self.url.clone(),
        }
    }
}
