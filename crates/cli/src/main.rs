mod cmd;
mod output;
mod prompts;
mod view;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::cmd::{
  ConfigSource, cmd_config_check, cmd_config_edit, cmd_config_init, cmd_config_path, cmd_list, cmd_run,
};
use crate::output::{OutputFormat, print_error};

/// buildpanel - run the build command for a file and point at the failing lines
#[derive(Parser)]
#[command(name = "buildpanel")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Builders configuration file
  #[arg(short, long, global = true, env = "BUILDPANEL_CONFIG")]
  config: Option<PathBuf>,

  /// Output format
  #[arg(short, long, global = true, value_enum, default_value_t)]
  output: OutputFormat,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Build a file with the builder for its language
  Run {
    /// File to build
    file: PathBuf,

    /// Language of the file (detected from the extension if omitted)
    #[arg(short, long)]
    lang: Option<String>,
  },

  /// List configured builders
  List,

  /// Manage the builders configuration
  Config {
    #[command(subcommand)]
    action: ConfigAction,
  },
}

#[derive(Subcommand)]
enum ConfigAction {
  /// Print the path of the builders configuration
  Path,

  /// Write the default builders configuration
  Init {
    /// Overwrite an existing file without asking
    #[arg(short, long)]
    force: bool,
  },

  /// Open the builders configuration in $VISUAL or $EDITOR
  Edit,

  /// Validate every builder's command and line pattern
  Check,
}

fn main() {
  let cli = Cli::parse();

  let filter = if cli.verbose {
    EnvFilter::new("debug")
  } else {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
  };
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  let config = ConfigSource::new(cli.config);

  let result = match cli.command {
    Commands::Run { file, lang } => cmd_run(&file, lang.as_deref(), &config, cli.output),
    Commands::List => cmd_list(&config, cli.output).map(|()| true),
    Commands::Config { action } => match action {
      ConfigAction::Path => {
        cmd_config_path(&config);
        Ok(true)
      }
      ConfigAction::Init { force } => cmd_config_init(&config, force).map(|()| true),
      ConfigAction::Edit => cmd_config_edit(&config).map(|()| true),
      ConfigAction::Check => cmd_config_check(&config),
    },
  };

  match result {
    Ok(true) => {}
    Ok(false) => std::process::exit(1),
    Err(e) => {
      print_error(&format!("{:#}", e));
      std::process::exit(1);
    }
  }
}
