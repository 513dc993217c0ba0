use clap::Parser;
use people_etl::core::{Clock, ConfigProvider, RecordStore, Storage};
use people_etl::utils::error::ErrorSeverity;
use people_etl::utils::{logger, validation::Validate};
use people_etl::{
    CliConfig, Command, EtlEngine, EtlError, FixedClock, JsonFileRecordStore, LocalStorage, Settings,
    SystemClock, UploadSource,
};
use std::path::Path;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 載入並驗證配置
    let settings = match cli.settings().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            logger::init_cli_logger(cli.verbose, None);
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if settings.json_logs {
        logger::init_json_logger(cli.verbose, settings.log_level.as_deref());
    } else {
        logger::init_cli_logger(cli.verbose, settings.log_level.as_deref());
    }

    tracing::info!("Starting people-etl");
    tracing::debug!("Settings: {:?}", settings);

    // "today" is fixed once here and injected into the engine.
    let today = settings
        .today_override()
        .unwrap_or_else(|| SystemClock.today());
    let store = JsonFileRecordStore::new(LocalStorage::new(settings.store_path()));
    let engine = EtlEngine::new(store, FixedClock(today));

    let outcome = match &cli.command {
        Command::Import { file, content_type } => run_import(&engine, file, content_type).await,
        Command::Report { json } => run_report(&engine, *json).await,
        Command::Export { output } => run_export(&engine, &settings, output.as_deref()).await,
    };

    if let Err(e) = outcome {
        tracing::error!(
            "❌ {} failed: {} (Category: {:?}, Severity: {:?})",
            command_name(&cli.command),
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Import { .. } => "Import",
        Command::Report { .. } => "Report",
        Command::Export { .. } => "Export",
    }
}

async fn run_import<R: RecordStore, C: Clock>(
    engine: &EtlEngine<R, C>,
    file: &str,
    content_type: &str,
) -> Result<(), EtlError> {
    let bytes = tokio::fs::read(file).await?;
    let filename = Path::new(file).file_name().and_then(|n| n.to_str());
    let source = UploadSource::new(bytes, filename, Some(content_type));

    let summary = engine.import(&source).await?;

    tracing::info!("✅ Imported {} records from {}", summary.records.len(), file);
    println!("✅ File processed and saved successfully!");
    println!(
        "📊 {} records ({} male, {} female)",
        summary.statistics.total(),
        summary.statistics.male_count,
        summary.statistics.female_count
    );
    Ok(())
}

async fn run_report<R: RecordStore, C: Clock>(
    engine: &EtlEngine<R, C>,
    json: bool,
) -> Result<(), EtlError> {
    let report = engine.report().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for record in &report.records {
        let birth_date = record
            .birth_date
            .map(|d| d.format("%d/%m/%Y").to_string())
            .unwrap_or_default();
        println!(
            "{:<15} {:<15} {:<30} {:<6} {:<15} {:>4} {}",
            record.first_name,
            record.last_name,
            record.email,
            record.sex.as_str(),
            record.access_ip,
            record.age,
            birth_date
        );
    }
    println!();
    println!("Total: {}", report.statistics.total());
    println!(
        "Male: {} (average age {})",
        report.statistics.male_count,
        report.male_average_display()
    );
    println!(
        "Female: {} (average age {})",
        report.statistics.female_count,
        report.female_average_display()
    );
    Ok(())
}

async fn run_export<R: RecordStore, C: Clock>(
    engine: &EtlEngine<R, C>,
    settings: &Settings,
    output: Option<&str>,
) -> Result<(), EtlError> {
    let csv = engine.export().await?;

    if output == Some("-") {
        print!("{}", csv);
        return Ok(());
    }

    let file_name = output.unwrap_or(people_etl::config::DEFAULT_EXPORT_FILE);
    let storage = LocalStorage::new(settings.output_path());
    storage.write_file(file_name, csv.as_bytes()).await?;

    let path = storage.full_path(file_name);
    tracing::info!("📁 Export saved to: {}", path.display());
    println!("📁 Export saved to: {}", path.display());
    Ok(())
}
