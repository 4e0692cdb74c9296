use clap::{Parser, Subcommand};
use folio_gen::{config, content, generate, output, store::ContentStore};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "folio-gen")]
#[command(about = "Static site generator for design portfolios")]
#[command(long_about = "\
Static site generator for design portfolios

The content directory is the data source: structured JSON for projects,
case studies, skills, career timeline, and the image table, plus a
config.toml for site-wide settings.

Content structure:

  content/
  ├── config.toml          # Site config (identity, nav, theme, carousel)
  ├── projects.json        # Portfolio projects
  ├── case-studies.json    # Long-form case studies, linked by project slug
  ├── skills.json          # Skill categories with proficiency levels
  ├── timeline.json        # Career timeline, most recent first
  ├── images.json          # Image table: id -> URL + attribution
  ├── content.json         # Site copy: hero, about, contact, labels
  └── assets/              # Static assets, copied to the output root

All imagery is referenced by id and resolved through images.json; unknown
ids fall back to a placeholder URL instead of failing the build.

Run 'folio-gen gen-config' to print a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load and validate content, then generate the HTML site
    Build,
    /// Validate the content directory without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            println!("==> Loading {}", cli.source.display());
            let site_config = config::load_config(&cli.source)?;
            let catalog = content::load_catalog(&cli.source)?;
            let store = ContentStore::new(catalog);
            output::print_check_output(&store);

            println!();
            println!("==> Generating HTML → {}", cli.output.display());
            let summary = generate::generate_site(&store, &site_config, &cli.source, &cli.output)?;
            output::print_generate_output(&summary);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            config::load_config(&cli.source)?;
            let catalog = content::load_catalog(&cli.source)?;
            let store = ContentStore::new(catalog);
            output::print_check_output(&store);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
