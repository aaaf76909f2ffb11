use babyname_ranks::{cli, csv_processor, file_processing, progress, utils};

/// Main entry point of the application.
///
/// This function orchestrates the entire workflow:
/// 1. Parses command-line arguments and sets up logging.
/// 2. Validates input/output paths and the year range.
/// 3. Extracts every year's rankings and computes rank changes.
/// 4. Writes all records to the output CSV.
/// 5. Optionally reads the CSV back and prints a short summary.
///
/// # Returns
///
/// * `anyhow::Result<()>` - Success or an error if any step fails.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let total_start = std::time::Instant::now();
    let args = cli::Args::parse();

    if args.start_year > args.end_year {
        return Err(anyhow::anyhow!(
            "Start year {} is after end year {}",
            args.start_year,
            args.end_year
        ));
    }
    file_processing::check_path(&args.input)?;
    file_processing::ensure_parent_dir_exist(&args.output)?;

    println!(
        "Start extracting {}..={} from {}...",
        args.start_year,
        args.end_year,
        args.input.display()
    );
    let records = progress::process_years(
        &args.input,
        args.start_year..=args.end_year,
        &args.extension,
        args.skip_missing,
    )?;
    tracing::info!("Computed {} records", records.len());

    csv_processor::save_records(&args.output, &records)?;
    println!(
        "✅ Wrote {} records to {} in {:?} seconds",
        records.len(),
        args.output.display(),
        total_start.elapsed().as_secs_f64()
    );

    if args.check {
        println!("Start reading...");
        let loaded = csv_processor::read_records(&args.output)?;
        if loaded.len() != records.len() {
            tracing::warn!(
                "Read back {} records, expected {}",
                loaded.len(),
                records.len()
            );
        }

        println!("📄 First 5 of {} records", loaded.len());
        utils::print_records(&loaded, 5);

        let (gain, drop) = utils::extreme_changes(&loaded);
        if let Some(r) = gain {
            println!("📈 Biggest gain:");
            utils::print_records(std::slice::from_ref(r), 1);
        }
        if let Some(r) = drop {
            println!("📉 Biggest drop:");
            utils::print_records(std::slice::from_ref(r), 1);
        }
    }

    Ok(())
}
