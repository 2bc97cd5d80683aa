use clap::Parser;
use colcompare::core::dataset::CityDataset;
use colcompare::utils::{logger, validation::Validate};
use colcompare::{CliConfig, CompareError, ComparisonSession, ReportSink};
use std::io::Write;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let source = config.dataset_source();
    tracing::info!("Using {}", source.describe());
    let dataset = match source.load() {
        Ok(dataset) => Arc::new(dataset),
        Err(e) => exit_with(&e),
    };

    if config.list_cities {
        print_cities(&dataset);
        return Ok(());
    }

    let input = match config.to_input() {
        Ok(input) => input,
        Err(e) => exit_with(&e),
    };

    let sink = ReportSink::new(Arc::clone(&dataset), config.format, std::io::stdout());
    let session = ComparisonSession::new(dataset, input, sink);

    if let Err(e) = session.current() {
        exit_with(e);
    }

    session.into_sink().into_inner().flush()?;
    Ok(())
}

fn print_cities(dataset: &CityDataset) {
    let width = dataset.ids().map(str::len).max().unwrap_or(0);
    for city in dataset.iter() {
        println!(
            "{:<width$}  {} (index {})",
            city.id,
            city.display_name,
            city.cost_index,
            width = width
        );
    }
}

fn exit_with(e: &CompareError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
