use anyhow::Result;
use django_ts_generator::cli::{Cli, Commands};
use django_ts_generator::config::Config;
use django_ts_generator::pipeline::Pipeline;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    let verbose = matches!(cli.command, Commands::Generate { verbose: true, .. });
    init_tracing(verbose);

    match cli.command {
        Commands::Generate { config, verbose } => {
            run_generate(&config, verbose)?;
        }
        Commands::Init { output, force } => {
            run_init(&output, force)?;
        }
    }

    Ok(())
}

/// Install the fmt subscriber; `RUST_LOG` takes precedence over `--verbose`
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();
}

/// Run the generate command
fn run_generate(config_path: &std::path::Path, verbose: bool) -> Result<()> {
    let config = Config::load(config_path)?;
    info!("Loaded configuration from: {}", config_path.display());

    let pipeline = Pipeline::new(verbose);
    pipeline.run(&config)?;

    Ok(())
}

/// Run the init command
fn run_init(output_path: &std::path::Path, force: bool) -> Result<()> {
    if output_path.exists() && !force {
        anyhow::bail!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        );
    }

    let config = Config::default_config();
    config.save(output_path)?;

    println!("Created configuration file: {}", output_path.display());
    println!("\nEdit the file to configure:");
    println!("  - input.source_dir: Django app or project directory to scan");
    println!("  - input.exclude: Directories to skip during scanning");
    println!("  - output.dest_dir: Where generated .ts files are written");
    println!("  - types.overrides: Extra field type mappings");

    Ok(())
}
