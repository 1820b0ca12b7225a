use thrown_accuracy::report::generate_report_with;
use thrown_accuracy::utils::config::ReportConfig;
use thrown_accuracy::utils::loader;

fn main() -> anyhow::Result<()> {
    setup_logging()?;

    let config = ReportConfig::new();
    let items = loader::load_items(&config)?;
    let report = generate_report_with(&items, &config);

    print!("{}", report);
    Ok(())
}

// Logs go to stderr; stdout carries only the report
fn setup_logging() -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Utc::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}
