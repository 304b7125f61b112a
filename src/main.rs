use anyhow::Context;
use clap::Parser;

use chaosim::reporters::{json, text};
use chaosim::{
    AppConfig, MetricsEngine, SecureProvider, SeededProvider, SequenceGenerator, UniformProvider,
};

/// Chaotic transaction stream generator and analyzer
#[derive(Parser)]
#[command(name = "chaosim")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of steps to generate
    #[arg(short = 'n', long, default_value_t = 50)]
    steps: usize,

    /// Volatility rate in [0, 1]
    #[arg(long)]
    volatility: Option<f64>,

    /// Trend strength rate in [0, 1]
    #[arg(long)]
    trend_strength: Option<f64>,

    /// Mean reversion rate in [0, 1]
    #[arg(long)]
    mean_reversion: Option<f64>,

    /// Lower bound of the value range
    #[arg(long)]
    min_value: Option<i64>,

    /// Upper bound of the value range
    #[arg(long)]
    max_value: Option<i64>,

    /// Seed for a reproducible run; omit for secure entropy
    #[arg(long)]
    seed: Option<u64>,

    /// TOML configuration file; flags override file values
    #[arg(short, long)]
    config: Option<String>,

    /// Report output path
    #[arg(short, long)]
    output: Option<String>,

    /// Number of leading records echoed to the console
    #[arg(long)]
    sample: Option<usize>,

    /// Skip the enhancement pass
    #[arg(long)]
    raw: bool,

    /// Skip writing the JSON report
    #[arg(long)]
    no_save: bool,
}

fn main() -> anyhow::Result<()> {
    // Configure logging (optional)
    env_logger::init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    log::info!(
        "generating {} steps over [{}, {}]",
        cli.steps,
        config.generator.min_value,
        config.generator.max_value
    );

    let provider = make_provider(cli.seed);
    let mut generator = SequenceGenerator::new(provider, config.generator.clone());

    let sequence = if cli.raw {
        generator.generate(cli.steps)?
    } else {
        generator.generate_enhanced(cli.steps)?
    };

    let stats = MetricsEngine::new().summarize(&sequence)?;
    print!("{}", text::render_summary(&stats));

    let sample = if config.output.sample_size > 0 {
        Some(text::render_sample(&sequence, config.output.sample_size)?)
    } else {
        None
    };

    if !cli.no_save {
        let report = json::build_report(&config.generator, stats, sequence);
        json::write_report(&report, &config.output.report_path, config.output.pretty)
            .with_context(|| format!("writing report to {}", config.output.report_path))?;
        println!("\nDetailed analysis saved to {}", config.output.report_path);
    }

    if let Some(block) = sample {
        println!();
        print!("{}", block);
    }

    Ok(())
}

/// Merge layers lowest to highest: defaults, then the optional TOML
/// file, then individual command-line flags.
fn resolve_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            AppConfig::load_from_file(path).with_context(|| format!("loading config {}", path))?
        }
        None => AppConfig::default(),
    };

    if let Some(volatility) = cli.volatility {
        config.generator.volatility = volatility;
    }
    if let Some(trend_strength) = cli.trend_strength {
        config.generator.trend_strength = trend_strength;
    }
    if let Some(mean_reversion) = cli.mean_reversion {
        config.generator.mean_reversion = mean_reversion;
    }
    if let Some(min_value) = cli.min_value {
        config.generator.min_value = min_value;
    }
    if let Some(max_value) = cli.max_value {
        config.generator.max_value = max_value;
    }
    if let Some(output) = &cli.output {
        config.output.report_path = output.clone();
    }
    if let Some(sample) = cli.sample {
        config.output.sample_size = sample;
    }

    config.validate()?;
    Ok(config)
}

fn make_provider(seed: Option<u64>) -> Box<dyn UniformProvider> {
    match seed {
        Some(seed) => Box::new(SeededProvider::from_seed(seed)),
        None => Box::new(SecureProvider::new()),
    }
}
