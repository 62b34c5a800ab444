use std::fs::File;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use jiff::civil::Date;
use rust_decimal::Decimal;

use rentledger_core::breakdown::compute_breakdown;
use rentledger_core::export::write_payments_csv;
use rentledger_core::format::format_amount;
use rentledger_core::model::{PayerType, ProjectId, Report};
use rentledger_core::report::ReportFilters;

mod logging;
mod store;

use logging::init_logging;
use store::{Ledger, atomic_write};

#[derive(Parser, Debug)]
#[command(name = "rentledger")]
#[command(about = "Payment accounting and reporting for rental portfolios")]
struct Args {
    /// Path to the ledger snapshot file
    #[arg(short, long, default_value = "ledger.json")]
    data: PathBuf,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PayerArg {
    Owner,
    Tenant,
}

impl From<PayerArg> for PayerType {
    fn from(arg: PayerArg) -> Self {
        match arg {
            PayerArg::Owner => PayerType::Owner,
            PayerArg::Tenant => PayerType::Tenant,
        }
    }
}

#[derive(Debug, clap::Args)]
struct FilterArgs {
    /// Earliest payment date to include (YYYY-MM-DD, inclusive)
    #[arg(long)]
    from: Option<Date>,

    /// Latest payment date to include (YYYY-MM-DD, inclusive)
    #[arg(long)]
    to: Option<Date>,

    /// Only payments whose unit belongs to this project id
    #[arg(long)]
    project: Option<u32>,

    /// Only payments made by this payer type
    #[arg(long, value_enum)]
    payer: Option<PayerArg>,
}

impl FilterArgs {
    fn to_filters(&self) -> ReportFilters {
        ReportFilters {
            start_date: self.from,
            end_date: self.to,
            project_id: self.project.map(ProjectId),
            payer_type: self.payer.map(PayerType::from),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the comprehensive payment report
    Report {
        #[command(flatten)]
        filters: FilterArgs,

        /// Write the report to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,

        /// Emit the structured report as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Compute the commission/VAT/net split for a single amount
    Breakdown {
        /// Gross payment amount
        amount: Decimal,

        /// Company commission rate in [0, 1]
        #[arg(long, default_value = "0.05")]
        rate: Decimal,

        /// VAT rate in [0, 1], applied to the commission
        #[arg(long, default_value = "0.15")]
        vat: Decimal,
    },

    /// Export filtered payments as CSV
    Export {
        #[command(flatten)]
        filters: FilterArgs,

        /// Output file
        #[arg(long)]
        out: PathBuf,
    },

    /// Write a demo ledger snapshot to the data path
    Seed,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level);

    match args.command {
        Command::Report { filters, out, json } => run_report(&args.data, &filters, out, json),
        Command::Breakdown { amount, rate, vat } => {
            run_breakdown(amount, rate, vat);
            Ok(())
        }
        Command::Export { filters, out } => run_export(&args.data, &filters, &out),
        Command::Seed => run_seed(&args.data),
    }
}

fn run_report(
    data: &PathBuf,
    filters: &FilterArgs,
    out: Option<PathBuf>,
    json: bool,
) -> color_eyre::Result<()> {
    let ledger = Ledger::load(data)?;
    let payments = ledger.payments_desc();
    let reference = ledger.reference();
    let filters = filters.to_filters();
    let generated_at = jiff::Zoned::now().datetime();

    let report = Report::generate(&payments, &reference, &filters, generated_at);
    tracing::info!(
        records = report.record_count,
        projects = report.projects.len(),
        "report generated"
    );

    let output = if json {
        serde_json::to_string_pretty(&report)?
    } else {
        report.to_text()
    };

    match out {
        Some(path) => {
            atomic_write(&path, &output)?;
            tracing::info!("report written to {}", path.display());
        }
        None => println!("{output}"),
    }
    Ok(())
}

fn run_breakdown(amount: Decimal, rate: Decimal, vat: Decimal) {
    let b = compute_breakdown(amount, rate, vat);
    println!("Amount:     {}", format_amount(amount));
    println!("Commission: {}", format_amount(b.commission));
    println!("VAT:        {}", format_amount(b.vat));
    println!("Net:        {}", format_amount(b.net));
}

fn run_export(data: &PathBuf, filters: &FilterArgs, out: &PathBuf) -> color_eyre::Result<()> {
    let ledger = Ledger::load(data)?;
    let payments = ledger.payments_desc();
    let reference = ledger.reference();
    let filters = filters.to_filters();

    let file = File::create(out)?;
    let filtered = payments.iter().filter(|p| filters.matches(p, &reference));
    write_payments_csv(filtered, file)?;

    tracing::info!("payments exported to {}", out.display());
    Ok(())
}

fn run_seed(data: &PathBuf) -> color_eyre::Result<()> {
    let ledger = Ledger::seed();
    ledger.save(data)?;
    println!(
        "Seeded demo ledger with {} payments at {}",
        ledger.payments.len(),
        data.display()
    );
    Ok(())
}
