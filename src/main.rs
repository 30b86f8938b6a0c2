//! ResiFund CLI
//!
//! Command-line front end for return projections, property search, and form checks

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use resifund::calculator::format::{format_currency, format_price, format_rate};
use resifund::calculator::{calculate, growth_schedule, CalculatorInput};
use resifund::portfolio::{recent_activity, PortfolioSummary};
use resifund::validation::ContactForm;
use resifund::{FilterSpec, PropertyCatalog};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "resifund", version, about = "ResiFund investment tools")]
struct Cli {
    /// Print machine-readable JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Project the future value of an investment
    Calculate(CalculatorArgs),
    /// Show year-by-year growth of an investment
    Schedule(CalculatorArgs),
    /// Search the property catalog
    Search(SearchArgs),
    /// Validate contact form values
    Validate(ValidateArgs),
    /// Show the dashboard portfolio summary
    Portfolio,
}

/// Raw form values; anything unparseable falls back to a default
#[derive(Args, Debug)]
struct CalculatorArgs {
    /// Amount invested
    #[arg(long, default_value = "0")]
    amount: String,

    /// Investment horizon in years
    #[arg(long, default_value = "1")]
    years: String,

    /// Risk tier: low, medium, high
    #[arg(long, default_value = "medium")]
    risk: String,
}

impl CalculatorArgs {
    fn to_input(&self) -> CalculatorInput {
        CalculatorInput::from_raw(&self.amount, &self.years, &self.risk)
    }
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Free-text search over title and description
    #[arg(long, default_value = "")]
    text: String,

    /// Property type: all, residential, commercial
    #[arg(long = "type", default_value = "all")]
    property_type: String,

    /// Location substring or "all"
    #[arg(long, default_value = "all")]
    location: String,

    /// Price range: all, MIN-MAX, or MIN-
    #[arg(long, default_value = "all")]
    price: String,

    /// Load listings from a CSV file instead of the built-in samples
    #[arg(long, conflicts_with = "listings_json")]
    listings_csv: Option<PathBuf>,

    /// Load listings from a JSON file instead of the built-in samples
    #[arg(long)]
    listings_json: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ValidateArgs {
    #[arg(long, default_value = "")]
    name: String,

    #[arg(long, default_value = "")]
    email: String,

    #[arg(long, default_value = "")]
    phone: String,

    #[arg(long, default_value = "")]
    message: String,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match &cli.command {
        Command::Calculate(args) => run_calculate(args, cli.json),
        Command::Schedule(args) => run_schedule(args, cli.json),
        Command::Search(args) => run_search(args, cli.json),
        Command::Validate(args) => run_validate(args, cli.json),
        Command::Portfolio => run_portfolio(cli.json),
    }
}

fn run_calculate(args: &CalculatorArgs, json: bool) -> Result<()> {
    let input = args.to_input();
    let result = calculate(&input);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Investment Projection");
    println!("=====================");
    println!("  Initial Investment:     {}", format_currency(result.investment));
    println!("  Investment Period:      {} years", result.duration_years);
    println!("  Expected Annual Return: {}", format_rate(result.annual_rate));
    println!("  Future Value:           {}", format_currency(result.future_value));
    println!("  Total Returns:          +{}", format_currency(result.total_returns));
    Ok(())
}

fn run_schedule(args: &CalculatorArgs, json: bool) -> Result<()> {
    let schedule = growth_schedule(&args.to_input());

    if json {
        println!("{}", serde_json::to_string_pretty(&schedule)?);
        return Ok(());
    }

    println!("{:>4} {:>18} {:>16} {:>18} {:>18}",
        "Year", "Opening", "Interest", "Closing", "Cumulative");
    println!("{}", "-".repeat(78));

    for row in &schedule.rows {
        println!("{:>4} {:>18} {:>16} {:>18} {:>18}",
            row.year,
            format_currency(row.opening_value),
            format_currency(row.interest),
            format_currency(row.closing_value),
            format_currency(row.cumulative_returns),
        );
    }
    Ok(())
}

fn load_catalog(args: &SearchArgs) -> Result<PropertyCatalog> {
    if let Some(path) = &args.listings_csv {
        return PropertyCatalog::from_csv_path(path)
            .with_context(|| format!("loading listings from {}", path.display()));
    }

    if let Some(path) = &args.listings_json {
        let file = File::open(path)
            .with_context(|| format!("opening {}", path.display()))?;
        return PropertyCatalog::from_json_reader(BufReader::new(file))
            .with_context(|| format!("loading listings from {}", path.display()));
    }

    Ok(PropertyCatalog::sample())
}

fn run_search(args: &SearchArgs, json: bool) -> Result<()> {
    let catalog = load_catalog(args)?;
    let spec = FilterSpec::default()
        .with_text(&args.text)
        .with_type(&args.property_type)
        .with_location(&args.location)
        .with_price_range(&args.price);

    let matched = catalog.search(&spec);

    if json {
        println!("{}", serde_json::to_string_pretty(&matched)?);
        return Ok(());
    }

    if matched.is_empty() {
        println!("No properties found matching your criteria.");
        return Ok(());
    }

    println!("{:>3}  {:<36} {:<20} {:<12} {:>12} {:>7}  {:<6}",
        "ID", "Title", "Location", "Type", "Price", "Return", "Risk");
    println!("{}", "-".repeat(104));

    for property in &matched {
        println!("{:>3}  {:<36} {:<20} {:<12} {:>12} {:>6.1}%  {:<6}",
            property.id,
            property.title,
            property.location,
            property.property_type.as_str(),
            format_price(property.price),
            property.expected_return,
            property.risk_level.as_str(),
        );
    }

    println!("\n{} of {} properties", matched.len(), catalog.len());
    Ok(())
}

fn run_validate(args: &ValidateArgs, json: bool) -> Result<()> {
    let form = ContactForm {
        name: args.name.clone(),
        email: args.email.clone(),
        phone: args.phone.clone(),
        message: args.message.clone(),
    };
    let report = form.validate();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.is_valid() {
        println!("All fields valid.");
    } else {
        println!("Please fill in all required fields correctly:");
        for error in &report.errors {
            println!("  {}: {}", error.field, error.message);
        }
    }

    if !report.is_valid() {
        bail!("{} invalid field(s)", report.errors.len());
    }
    Ok(())
}

fn run_portfolio(json: bool) -> Result<()> {
    let portfolio = PortfolioSummary::sample();
    let activity = recent_activity();

    if json {
        let payload = serde_json::json!({
            "summary": portfolio,
            "returnPercentage": portfolio.return_percentage(),
            "recentActivity": activity,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("Portfolio Summary:");
    println!("  Total Investment:   {}", format_currency(portfolio.total_investment));
    println!("  Current Value:      {}", format_currency(portfolio.current_value));
    println!("  Total Returns:      {} ({:+.1}%)",
        format_currency(portfolio.total_returns),
        portfolio.return_percentage());
    println!("  Active Investments: {}", portfolio.active_investments);
    println!("  Monthly Income:     {}", format_currency(portfolio.monthly_income));

    println!("\nRecent Activity:");
    for entry in &activity {
        println!("  {}  {:<10} {:<28} +{}",
            entry.date,
            entry.kind.as_str(),
            entry.property,
            format_currency(entry.amount));
    }
    Ok(())
}
