use clap::{Parser, Subcommand};
use ogkit::config::{self, OgConfig};
use ogkit::{audit, generate, logging, output, validate};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "ogkit")]
#[command(about = "Open Graph images and frontmatter checks for static site content")]
#[command(long_about = "\
Open Graph images and frontmatter checks for static site content

Every markdown file in a card section gets a 1200x630 PNG named after its
file stem. The check and validate commands are meant for pre-commit hooks:
they exit 1 when something needs fixing.

Project layout (defaults):

  site/
  ├── ogkit.toml                   # Optional config (see gen-config)
  ├── content/
  │   ├── _index.md                # Underscore = skipped
  │   ├── about.md                 # Validated, no card
  │   ├── blog/                    # Card section → \"BLOG\"
  │   │   └── my-post.md           # → static/og_images/my-post.png
  │   └── projects/                # Card section → \"PROJECT\"
  │       ├── ogkit.md
  │       └── assets/              # Excluded directory
  └── static/
      ├── fonts/                   # IBM Plex Sans Bold/Regular, Plex Mono
      └── og_images/

Run 'ogkit gen-config' to print a documented ogkit.toml.")]
#[command(version)]
struct Cli {
    /// Project root
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Config file [default: <root>/ogkit.toml, if present]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Show debug diagnostics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render OG images for every content file in the card sections
    Generate {
        /// Only render sources with this file stem (repeatable)
        #[arg(long, value_name = "STEM")]
        only: Vec<String>,
    },
    /// Fail if any content file is missing its OG image
    Check,
    /// Fail if any content file lacks required frontmatter fields
    Validate,
    /// Print a stock ogkit.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Run the selected command. `Ok(false)` means the command completed but
/// found problems.
fn run(cli: &Cli) -> Result<bool, Box<dyn std::error::Error>> {
    match &cli.command {
        Command::Generate { only } => {
            let config = load_config(&cli.root, cli.config.as_deref())?;
            let mut progress =
                |event: &generate::GenerateEvent| output::print_generate_event(event, &cli.root);
            let summary = generate::generate(&config, &cli.root, only, &mut progress)?;
            output::print_generate_summary(&summary);
            Ok(summary.is_success())
        }
        Command::Check => {
            let config = load_config(&cli.root, cli.config.as_deref())?;
            let report = audit::audit(&config, &cli.root);
            output::print_audit_report(&report);
            Ok(report.is_ok())
        }
        Command::Validate => {
            let config = load_config(&cli.root, cli.config.as_deref())?;
            let report = validate::validate_content(&config, &cli.root);
            output::print_validation_report(&report, &cli.root);
            Ok(report.is_ok())
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
            Ok(true)
        }
    }
}

fn load_config(root: &Path, explicit: Option<&Path>) -> Result<OgConfig, config::ConfigError> {
    match explicit {
        Some(path) => config::load_config_file(path),
        None => config::load_config(root),
    }
}
