//! gogo - scaffold Go projects with sensible defaults

use anyhow::Result;
use clap::{Parser, Subcommand};
use gogo_core::NewArgs;
use std::path::PathBuf;

/// Build metadata, injected at compile time
pub const VERSION: &str = match option_env!("GOGO_VERSION") {
    Some(v) => v,
    None => "dev",
};
pub const COMMIT: &str = match option_env!("GOGO_COMMIT") {
    Some(v) => v,
    None => "none",
};
pub const BUILD_DATE: &str = match option_env!("GOGO_BUILD_DATE") {
    Some(v) => v,
    None => "unknown",
};

#[derive(Parser, Debug)]
#[command(name = "gogo")]
#[command(about = "Scaffold Go projects with sensible defaults")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new Go project
    New(CliNewArgs),
    /// Print version information
    Version,
}

#[derive(Parser, Debug)]
pub struct CliNewArgs {
    /// Project name
    pub name: Option<String>,

    /// Directory to create the project in
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Skip the interactive wizard
    #[arg(short, long = "skip-wizard")]
    pub skip_wizard: bool,

    /// Load the project configuration from a YAML file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Project type (cli, api, library, default); ignored with --config
    #[arg(short = 't', long = "type")]
    pub project_type: Option<String>,

    /// Go module path
    #[arg(short, long)]
    pub module: Option<String>,

    /// Show the files that would be created without writing them
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Save the final configuration to this file
    #[arg(long = "save-config")]
    pub save_config: Option<PathBuf>,
}

impl From<CliNewArgs> for NewArgs {
    fn from(args: CliNewArgs) -> Self {
        NewArgs {
            name: args.name,
            output: args.output,
            skip_wizard: args.skip_wizard,
            config: args.config,
            project_type: args.project_type,
            module: args.module,
            dry_run: args.dry_run,
            save_config: args.save_config,
        }
    }
}

fn print_version() {
    println!("Gogo CLI");
    println!("--------");
    println!("Version:    {}", VERSION);
    println!("Commit:     {}", COMMIT);
    println!("Build Date: {}", BUILD_DATE);
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    match args.command {
        Some(Command::Version) => {
            print_version();
            Ok(())
        }
        Some(Command::New(new_args)) => {
            let result = gogo_core::run(new_args.into()).await;

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
        None => {
            // No subcommand provided, default to new behavior (interactive mode)
            let result = gogo_core::run(NewArgs::default()).await;

            let _ = console::Term::stderr().show_cursor();

            result
        }
    }
}
