use anyhow::Context;
use clap::Parser;
use container_tour::app::demos;
use container_tour::utils::logger;
use container_tour::{CliConfig, DemoError, DemoRunner, Session};
use std::io;

fn report_and_exit(e: &DemoError) -> ! {
    tracing::error!("{}", e);
    tracing::error!("Suggestion: {}", e.recovery_suggestion());
    eprintln!("{}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting container-tour");

    let settings = match cli.load_settings() {
        Ok(settings) => settings,
        Err(e) => report_and_exit(&e),
    };
    let catalog = demos::catalog(&settings);

    if cli.list {
        demos::write_catalog(&catalog, &mut io::stdout().lock())
            .context("failed to write demo list")?;
        return Ok(());
    }

    let runner = DemoRunner::new_with_monitoring(cli.monitor);
    if cli.monitor {
        tracing::info!("System monitoring enabled");
    }

    let outcome = if cli.demos.is_empty() {
        let stdin = io::stdin();
        Session::new(&catalog, &runner, stdin.lock(), io::stdout().lock())
            .with_pause(settings.pause_after_demo)
            .run()
            .map(|summary| {
                tracing::info!(
                    "Session finished: {} demos run, {} invalid selections",
                    summary.demos_run,
                    summary.invalid_selections
                );
            })
    } else {
        runner
            .run_named(&catalog, &cli.demos, &mut io::stdout().lock())
            .map(|count| tracing::info!("Ran {} demos", count))
    };

    runner.finish();

    if let Err(e) = outcome {
        report_and_exit(&e);
    }
    Ok(())
}
