//! Folio CLI
//!
//! Single binary personal portfolio: static export plus a local preview host.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for Folio.
#[derive(Parser)]
#[command(
    name = "folio",
    version,
    about = "A personal portfolio site with resume download and contact drafts"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Export the site as static HTML
    Build {
        /// Output directory (defaults to build.output_dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Run the local preview host
    Serve {
        /// Port to listen on (defaults to server.port)
        #[arg(short, long)]
        port: Option<u16>,
        /// Open browser automatically
        #[arg(long)]
        open: bool,
    },
    /// Scaffold a new site
    New {
        /// Directory for the new site
        #[arg(default_value = ".")]
        dir: PathBuf,
        /// Overwrite an existing config.toml
        #[arg(long)]
        force: bool,
    },
    /// Validate configuration and assets
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    folio::init_tracing(cli.verbose);

    match cli.command {
        Commands::Build { output } => {
            folio::cmd::build::run(&cli.config, output.as_deref())?;
        }
        Commands::Serve { port, open } => {
            folio::cmd::serve::run(&cli.config, port, open).await?;
        }
        Commands::New { dir, force } => {
            folio::cmd::new::run(&dir, force)?;
        }
        Commands::Check { strict } => {
            folio::cmd::check::run(&cli.config, strict)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_build_command_parsing() {
        let cli = Cli::parse_from(["folio", "build", "--output", "dist"]);

        assert_eq!(cli.config, PathBuf::from("config.toml"));
        assert_eq!(cli.verbose, 0);

        match cli.command {
            Commands::Build { output } => {
                assert_eq!(output, Some(PathBuf::from("dist")));
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_cli_build_defaults_to_config_output() {
        let cli = Cli::parse_from(["folio", "build"]);

        match cli.command {
            Commands::Build { output } => assert!(output.is_none()),
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_cli_serve_command_parsing() {
        let cli = Cli::parse_from(["folio", "serve", "--port", "8080", "--open"]);

        match cli.command {
            Commands::Serve { port, open } => {
                assert_eq!(port, Some(8080));
                assert!(open);
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_cli_new_command_parsing() {
        let cli = Cli::parse_from(["folio", "new", "my-site", "--force"]);

        match cli.command {
            Commands::New { dir, force } => {
                assert_eq!(dir, PathBuf::from("my-site"));
                assert!(force);
            }
            _ => panic!("Expected New command"),
        }
    }

    #[test]
    fn test_cli_new_defaults_to_current_dir() {
        let cli = Cli::parse_from(["folio", "new"]);

        match cli.command {
            Commands::New { dir, force } => {
                assert_eq!(dir, PathBuf::from("."));
                assert!(!force);
            }
            _ => panic!("Expected New command"),
        }
    }

    #[test]
    fn test_cli_check_command_parsing() {
        let cli = Cli::parse_from(["folio", "check", "--strict"]);

        match cli.command {
            Commands::Check { strict } => assert!(strict),
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_verbosity_flags() {
        let cli = Cli::parse_from(["folio", "-vvv", "build"]);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_cli_custom_config_path() {
        let cli = Cli::parse_from(["folio", "--config", "site.toml", "serve"]);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
    }
}
