use anyhow::Result;
use clap::{Parser, Subcommand};
use folio_contact::FormFields;
use std::path::PathBuf;

/// folio - Personal portfolio site
#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Portfolio site builder and contact form", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the site into the output directory
    Build {
        /// Output directory (overrides config file)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Send one message through the contact form
    Contact {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        email: String,

        /// Shown as "Title" on the form
        #[arg(long, default_value = "")]
        subject: String,

        #[arg(long, default_value = "")]
        message: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = folio::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    folio::observability::init_observability(
        "folio",
        env!("CARGO_PKG_VERSION"),
        &config.logging.level,
        &config.logging.format,
    )?;

    match cli.command {
        Commands::Build { output } => folio::cli::build(config, output),
        Commands::Contact {
            name,
            email,
            subject,
            message,
        } => {
            let state = folio::cli::contact(
                config,
                FormFields {
                    name,
                    email,
                    subject,
                    message,
                },
            )
            .await?;

            tracing::debug!(status = %state.status, "contact form finished");

            Ok(())
        }
    }
}
