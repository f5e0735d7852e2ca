//! lintrc CLI
//!
//! Command-line interface for resolving and inspecting lint configurations

mod commands;
mod output;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use lintrc_core::init_tracing;
use std::io;
use std::path::PathBuf;
use tracing::error;

#[derive(Parser)]
#[command(name = "lintrc")]
#[command(about = "lintrc: resolve layered lint configurations")]
#[command(version = lintrc_core::VERSION)]
#[command(
    long_about = "lintrc resolves lint configurations built from presets, plugins,\n\
environments and rule overrides into one effective configuration.\n\
\n\
Examples:\n  \
lintrc resolve                       # Resolve the configuration for the current directory\n  \
lintrc resolve --format json         # Print the effective configuration as JSON\n  \
lintrc validate a/.lintrc.json b/    # Validate several configurations\n  \
lintrc presets show eslint:recommended\n  \
lintrc config init                   # Create a starter configuration file"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(
        short,
        long,
        global = true,
        help = "Path to configuration file (.lintrc.json/.lintrc.yaml/.lintrc.toml)"
    )]
    config: Option<PathBuf>,

    /// Verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Generate shell completion script
    #[arg(
        long,
        value_enum,
        help = "Generate completion script for specified shell"
    )]
    generate_completion: Option<Shell>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the configuration and print the effective result
    Resolve {
        /// Output format
        #[arg(
            short,
            long,
            default_value = "human",
            help = "Output format for the resolved configuration"
        )]
        format: OutputFormat,

        /// Only show one rule
        #[arg(long, help = "Show the effective setting of a single rule")]
        rule: Option<String>,

        /// Ignore unknown environment names instead of failing
        #[arg(long, help = "Warn about unknown environments instead of failing")]
        ignore_unknown_env: bool,
    },

    /// Validate configuration files by resolving them
    #[command(alias = "check")]
    Validate {
        /// Configuration files or directories to validate
        #[arg(help = "Configuration files or directories (default: discover from current directory)")]
        paths: Vec<PathBuf>,
    },

    /// Inspect built-in presets
    Presets {
        #[command(subcommand)]
        action: Option<PresetsAction>,
    },

    /// List known environments
    #[command(alias = "environments")]
    Envs {
        /// Show the globals each environment defines
        #[arg(long, help = "Show globals defined by each environment")]
        globals: bool,
    },

    /// Configuration file management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show version information
    #[command(alias = "ver")]
    Version {
        /// Show detailed version information
        #[arg(long, help = "Show detailed version and build information")]
        detailed: bool,
    },
}

#[derive(Subcommand)]
enum PresetsAction {
    /// List all registered presets
    List {
        /// Show descriptions and rule counts
        #[arg(long, help = "Show detailed information for each preset")]
        detailed: bool,
    },

    /// Show the contents of a preset
    Show {
        /// Preset identifier
        #[arg(help = "Preset identifier (e.g. eslint:recommended, plugin:vue/base)")]
        preset_id: String,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Initialize a new configuration file
    Init {
        /// Configuration file format
        #[arg(long, default_value = "json", help = "Configuration file format")]
        format: ConfigFileFormat,

        /// Overwrite existing configuration file
        #[arg(long, help = "Overwrite existing configuration file")]
        force: bool,
    },

    /// Print the JSON Schema of the configuration file format
    Schema {
        /// Write the schema to a file instead of stdout
        #[arg(short, long, help = "Output file path for the schema")]
        output: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    /// Human-readable output with colors
    Human,
    /// JSON format for programmatic consumption
    Json,
    /// YAML format
    Yaml,
    /// TOML format
    Toml,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ConfigFileFormat {
    /// JSON configuration format
    Json,
    /// YAML configuration format
    Yaml,
    /// TOML configuration format
    Toml,
}

fn main() {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.generate_completion {
        generate_completion_script(shell);
        return;
    }

    // Initialize colored output
    if !cli.no_color && std::env::var("NO_COLOR").is_err() {
        colored::control::set_override(true);
    } else {
        colored::control::set_override(false);
    }

    // Initialize tracing based on verbosity; the binary logs under the `lintrc` target
    let log_filter = match cli.verbose {
        0 => "lintrc=warn,lintrc_core=warn",
        1 => "lintrc=info,lintrc_core=info",
        2 => "lintrc=debug,lintrc_core=debug",
        _ => "lintrc=trace,lintrc_core=trace",
    };
    init_tracing(log_filter);

    if let Err(e) = run_command(cli) {
        error!("lintrc failed: {:#}", e);
        std::process::exit(1);
    }
}

fn generate_completion_script(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

fn run_command(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Resolve {
            format,
            rule,
            ignore_unknown_env,
        }) => commands::resolve_command(format, rule, ignore_unknown_env, cli.config),

        Some(Commands::Validate { paths }) => {
            let paths = if paths.is_empty() {
                cli.config.into_iter().collect()
            } else {
                paths
            };
            commands::validate_command(paths)
        }

        Some(Commands::Presets { action }) => match action {
            Some(PresetsAction::List { detailed }) => commands::presets_list_command(detailed),
            None => commands::presets_list_command(false),
            Some(PresetsAction::Show { preset_id }) => commands::presets_show_command(&preset_id),
        },

        Some(Commands::Envs { globals }) => commands::envs_command(globals),

        Some(Commands::Config { action }) => match action {
            ConfigAction::Init { format, force } => commands::config_init_command(format, force),
            ConfigAction::Schema { output } => commands::config_schema_command(output),
        },

        Some(Commands::Version { detailed }) => {
            if detailed {
                println!("lintrc {}", lintrc_core::VERSION);
                println!("Build information:");
                println!("  Target: {}", std::env::consts::ARCH);
                println!("  OS: {}", std::env::consts::OS);
            } else {
                println!("{}", lintrc_core::VERSION);
            }
            Ok(())
        }

        None => {
            // No subcommand provided, show help
            let mut cmd = Cli::command();
            cmd.print_help()?;
            Ok(())
        }
    }
}
