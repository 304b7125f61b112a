use chaosim::engines::generation::SequenceGenerator;
use chaosim::engines::metrics::MetricsEngine;
use chaosim::random::SeededProvider;
use chaosim::reporters::text;
use chaosim::GeneratorConfig;
use std::env;

fn main() {
    println!("=== Chaosim Quick Run Utility ===\n");

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let steps = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(50);
    let seed = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(42);
    let volatility = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(0.8);

    let config = GeneratorConfig {
        volatility,
        max_value: 500,
        ..GeneratorConfig::default()
    };

    println!("Configuration:");
    println!("  Steps: {}", steps);
    println!("  Seed: {}", seed);
    println!("  Volatility: {}", volatility);
    println!(
        "  Value range: [{}, {}]",
        config.min_value, config.max_value
    );
    println!();

    let mut generator = SequenceGenerator::new(SeededProvider::from_seed(seed), config);

    let sequence = match generator.generate_enhanced(steps) {
        Ok(sequence) => sequence,
        Err(e) => {
            eprintln!("generation failed: {}", e);
            std::process::exit(1);
        }
    };

    let stats = match MetricsEngine::new().summarize(&sequence) {
        Ok(stats) => stats,
        Err(e) => {
            eprintln!("summarize failed: {}", e);
            std::process::exit(1);
        }
    };

    print!("{}", text::render_summary(&stats));
    println!();

    match text::render_sample(&sequence, 5) {
        Ok(block) => print!("{}", block),
        Err(e) => eprintln!("sample rendering failed: {}", e),
    }
}
