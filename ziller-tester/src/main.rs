mod logic;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use logic::reports;
use logic::{check_day, list_sweeps, month_overview, parse_month, run_sweeps};
use ziller_core::{CalendarDate, EligibilityEngine, ShopConfig, TimeSlot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TestMode {
    /// Rule sweeps over whole years (fails the run on any violation)
    Sweep,
    /// Month overview as the booking page would show it
    Calendar,
    /// Look up a single date and optional time
    Check,
}

#[derive(Debug, Parser)]
#[command(name = "ziller-tester", version = "0.1.0")]
#[command(about = "Checks the Radsport Ziller workshop booking rules outside the browser")]
struct Args {
    /// What to run
    #[arg(long, value_enum, default_value_t = TestMode::Sweep)]
    mode: TestMode,

    /// Sweeps to run (comma-separated, or "all")
    #[arg(long, default_value = "all")]
    sweeps: String,

    /// List all available sweeps and exit
    #[arg(long)]
    list_sweeps: bool,

    /// First year to sweep (defaults to the current year)
    #[arg(long)]
    year: Option<i32>,

    /// Number of years to sweep
    #[arg(long, default_value_t = 5)]
    years: u16,

    /// Month for calendar mode, as YYYY-MM (defaults to the current month)
    #[arg(long)]
    month: Option<String>,

    /// Date for check mode, as YYYY-MM-DD or DD.MM.YYYY
    #[arg(long)]
    date: Option<String>,

    /// Time for check mode, as HH:MM
    #[arg(long)]
    time: Option<String>,

    /// Pretend today is this date (YYYY-MM-DD or DD.MM.YYYY)
    #[arg(long)]
    today: Option<String>,

    /// Shop configuration JSON to use instead of the built-in defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_sweeps(&args)? {
        return Ok(());
    }

    if args.report == "console" && args.output.is_none() {
        announce_banner();
    }

    let config = load_config(&args)?;
    let engine = EligibilityEngine::from_config(&config);
    let today = parse_date_arg(args.today.as_deref())?.unwrap_or_else(CalendarDate::today);
    if args.verbose {
        eprintln!("Today: {} | lead days: {}", today.to_german(), config.booking_lead_days);
    }

    let mut output_target = OutputTarget::new(args.output.clone())?;
    let all_passed = match args.mode {
        TestMode::Sweep => write_sweeps(&args, &engine, today, &mut output_target)?,
        TestMode::Calendar => {
            write_calendar(&args, &engine, &config, today, &mut output_target)?;
            true
        }
        TestMode::Check => {
            write_check(&args, &engine, &config, today, &mut output_target)?;
            true
        }
    };
    output_target.flush_inner()?;

    if !all_passed {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_sweeps(args: &Args) -> Result<bool> {
    if !args.list_sweeps {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available sweeps:")?;
    for (key, description) in list_sweeps() {
        writeln!(output_target.writer(), "  {key:20} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🚲 Radsport Ziller Booking Tester".bright_cyan().bold());
    println!("{}", "=================================".cyan());
}

fn load_config(args: &Args) -> Result<ShopConfig> {
    match &args.config {
        Some(path) => ShopConfig::load_from_path(path),
        None => Ok(ShopConfig::default()),
    }
}

fn parse_date_arg(value: Option<&str>) -> Result<Option<CalendarDate>> {
    value
        .map(|text| {
            text.parse::<CalendarDate>()
                .with_context(|| format!("invalid date {text:?}"))
        })
        .transpose()
}

fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn write_sweeps(args: &Args, engine: &EligibilityEngine, today: CalendarDate, out: &mut OutputTarget) -> Result<bool> {
    let start_time = Instant::now();
    let first_year = args.year.unwrap_or_else(|| today.year());
    let last_year = first_year
        .checked_add(i32::from(args.years.max(1)) - 1)
        .with_context(|| format!("sweeping {} years from {first_year} runs past the calendar", args.years))?;
    let selected = split_csv(&args.sweeps);
    for name in &selected {
        if name != "all" && !list_sweeps().any(|(key, _)| key == name) {
            eprintln!("⚠️  Unknown sweep: {}", name.yellow());
        }
    }

    let results = run_sweeps(engine, &selected, first_year..=last_year);
    match args.report.as_str() {
        "json" => reports::generate_json(out, &results)?,
        "markdown" => reports::generate_markdown_sweep_report(out, &results)?,
        _ => {
            if results.is_empty() {
                writeln!(out, "No sweeps executed.")?;
            } else {
                reports::generate_console_sweep_report(out, &results, start_time.elapsed())?;
            }
        }
    }
    Ok(results.iter().all(|r| r.passed))
}

fn write_calendar(
    args: &Args,
    engine: &EligibilityEngine,
    config: &ShopConfig,
    today: CalendarDate,
    out: &mut OutputTarget,
) -> Result<()> {
    let first = match args.month.as_deref() {
        Some(text) => parse_month(text)?,
        None => today.first_of_month(),
    };
    let rows = month_overview(engine, today, config.booking_lead_days, first);
    let title = first.month_year_de();
    match args.report.as_str() {
        "json" => reports::generate_json(out, &rows),
        "markdown" => reports::generate_markdown_calendar(out, &title, &rows),
        _ => reports::generate_console_calendar(out, &title, &rows),
    }
}

fn write_check(
    args: &Args,
    engine: &EligibilityEngine,
    config: &ShopConfig,
    today: CalendarDate,
    out: &mut OutputTarget,
) -> Result<()> {
    let date = parse_date_arg(args.date.as_deref())?.ok_or_else(|| anyhow!("--date is required in check mode"))?;
    let time = args
        .time
        .as_deref()
        .map(|text| text.parse::<TimeSlot>().with_context(|| format!("invalid time {text:?}")))
        .transpose()?;
    let outcome = check_day(engine, today, config.booking_lead_days, date, time);
    match args.report.as_str() {
        "json" => reports::generate_json(out, &outcome),
        _ => reports::generate_console_check(out, &outcome),
    }
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
