// src/cli.rs
// Command-line entry point, kept out of main.rs so it can be driven from tests

use env_logger::Env;

use crate::config::PlotConfig;
use crate::error::Result;
use crate::runner::ChartRunner;

/// `args[1]`, when present, is the path of a config file
pub fn run(args: &[String]) -> Result<()> {
    let config = match args.get(1) {
        Some(path) => PlotConfig::load_from_file(path)?,
        None => PlotConfig::load()?,
    };

    // BENCHPLOT_LOG takes precedence over the configured level
    let env = Env::default()
        .filter_or("BENCHPLOT_LOG", config.log_level.as_str())
        .write_style_or("BENCHPLOT_LOG_STYLE", "auto");
    let _ = env_logger::Builder::from_env(env).try_init();

    println!("\n{}", "=".repeat(80));
    println!("BENCHMARK CHARTS");
    println!("{}", "=".repeat(80));
    println!("\nData directory:   {}", config.data_dir);
    println!("Output directory: {}", config.output_dir);

    let mut runner = ChartRunner::new(config);
    let report = runner.run_all()?;

    report.print_summary();

    println!("\nFiles written:");
    for path in runner.written_files() {
        println!("  {}", path.display());
    }

    Ok(())
}
