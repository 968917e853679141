use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use gdp_compare::config::ENV_API_KEY;
use gdp_compare::format::{format_date, format_value};
use gdp_compare::models::{COUNTRIES, SeriesRow};
use gdp_compare::{Client, Config, CountryPair, reshape, stats, storage, viz};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "gdpc",
    version,
    about = "Fetch, reshape, chart & summarize the GDP history of two countries"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch data for a country pair (and optionally save, plot, and print stats).
    Get(GetArgs),
    /// List the countries offered by the dashboard.
    Countries,
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct GetArgs {
    /// Two distinct country names separated by comma or semicolon (e.g., "Mexico,Sweden")
    #[arg(short, long, default_value = "Mexico,Sweden")]
    countries: String,
    /// API credential. Falls back to the TE_API_KEY environment variable.
    #[arg(long)]
    api_key: Option<String>,
    /// Save the reshaped table to file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
    /// Create a chart at the given path (.svg or .png).
    #[arg(long)]
    plot: Option<PathBuf>,
    /// Width of the plot (default 1000).
    #[arg(long, default_value_t = 1000)]
    width: u32,
    /// Height of the plot (default 600).
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// Locale for number labels (en, de, fr, es, it, pt, nl).
    #[arg(long, default_value = "en")]
    locale: String,
    /// Print per-country statistics to stdout.
    #[arg(long, default_value_t = false)]
    stats: bool,
    /// Print the reshaped table to stdout.
    #[arg(long, default_value_t = false)]
    table: bool,
}

fn fmt_opt(v: Option<f64>, locale: &str) -> String {
    v.map(|x| format_value(x, locale))
        .unwrap_or_else(|| "NA".to_string())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Get(args) => cmd_get(args),
        Command::Countries => {
            for c in COUNTRIES {
                println!("{c}");
            }
            Ok(())
        }
    }
}

fn print_table(rows: &[SeriesRow], pair: &CountryPair, locale: &str) {
    println!("{:<12} {:>16} {:>16}", "date", pair.first(), pair.second());
    for r in rows {
        println!(
            "{:<12} {:>16} {:>16}",
            format_date(&r.date_time),
            fmt_opt(r.get(pair.first()), locale),
            fmt_opt(r.get(pair.second()), locale),
        );
    }
}

fn cmd_get(args: GetArgs) -> Result<()> {
    let pair = CountryPair::parse(&args.countries)?;
    let config = match args.api_key {
        Some(key) => Config::from_lookup(|k| {
            if k == ENV_API_KEY {
                Some(key.clone())
            } else {
                std::env::var(k).ok()
            }
        }),
        None => Config::from_env(),
    };
    let client = Client::new(config)?;

    let records = client.fetch(pair.as_slice())?;
    let rows = reshape::reshape(&records);
    eprintln!(
        "Fetched {} records into {} rows for {}",
        records.len(),
        rows.len(),
        pair
    );

    if let Some(path) = args.out.as_ref() {
        let fmt = match args.format {
            Some(OutFormat::Csv) => "csv",
            Some(OutFormat::Json) => "json",
            None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
        }
        .to_ascii_lowercase();
        match fmt.as_str() {
            "csv" => storage::save_csv(&rows, &pair, path)?,
            "json" => storage::save_json(&rows, path)?,
            other => anyhow::bail!("unsupported format: {}", other),
        }
        eprintln!("Saved {} rows to {}", rows.len(), path.display());
    }

    if let Some(plot_path) = args.plot.as_ref() {
        viz::plot_rows_locale(
            &rows,
            &pair,
            plot_path,
            args.width,
            args.height,
            &args.locale,
            viz::DEFAULT_TITLE,
        )?;
        eprintln!("Wrote plot to {}", plot_path.display());
    }

    if args.table {
        print_table(&rows, &pair, &args.locale);
    }

    if args.stats {
        for s in stats::summarize(&rows, &pair) {
            println!(
                "{}  count={} missing={}  min={} max={} mean={} median={} latest={}",
                s.country,
                s.count,
                s.missing,
                fmt_opt(s.min, &args.locale),
                fmt_opt(s.max, &args.locale),
                fmt_opt(s.mean, &args.locale),
                fmt_opt(s.median, &args.locale),
                fmt_opt(s.latest, &args.locale),
            );
        }
    }

    Ok(())
}
