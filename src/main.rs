//! NUBAN Predictor CLI
//!
//! Predicts the likely bank for a NUBAN account number, or the likely
//! fintech providers for a phone number, entirely offline.

use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nuban_predictor::{
    compute_check_digit, is_account_valid, BankPredictor, Institution, InstitutionDirectory,
    PredictionRules, PredictorError, StaticDirectory, SERIAL_LENGTH,
};

#[derive(Parser)]
#[command(name = "nuban-predict")]
#[command(about = "Predict the bank behind a NUBAN account number or phone number")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Bank table JSON file (defaults to the bundled table)
    #[arg(long, global = true)]
    bank_table: Option<PathBuf>,

    /// Fintech table JSON file (defaults to the bundled table)
    #[arg(long, global = true)]
    fintech_table: Option<PathBuf>,

    /// Ranking rules JSON file (defaults to the built-in rules)
    #[arg(long, global = true)]
    rules: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict candidate institutions for a NUBAN or phone number
    Predict {
        /// 10-digit account number, or phone number without the leading 0
        input: Option<String>,

        /// Print the prediction as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check an account number against one bank
    Check {
        /// 10-digit account number
        account: String,

        /// Bank code or bank name
        bank: String,
    },

    /// List the loaded institutions
    List {
        /// List fintech providers instead of banks
        #[arg(long)]
        fintechs: bool,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let directory = StaticDirectory::load_or_bundled(
        cli.bank_table.as_deref(),
        cli.fintech_table.as_deref(),
    )?;

    let rules = match &cli.rules {
        Some(path) => PredictionRules::from_json(&std::fs::read_to_string(path)?)?,
        None => PredictionRules::default(),
    };

    let predictor = BankPredictor::new(directory).with_rules(rules);

    match cli.command {
        Commands::Predict { input, json } => run_predict(&predictor, input, json),
        Commands::Check { account, bank } => run_check(predictor.directory(), &account, &bank),
        Commands::List { fintechs } => {
            let table = if fintechs {
                predictor.directory().fintechs()
            } else {
                predictor.directory().banks()
            };
            print_institutions(table);
            Ok(())
        }
    }
}

fn run_predict(
    predictor: &BankPredictor<StaticDirectory>,
    input: Option<String>,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let input = input.ok_or(PredictorError::MissingInput)?;
    let prediction = predictor.predict_detailed(&input)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&prediction)?);
        return Ok(());
    }

    println!("Input: {} ({})", prediction.input, prediction.kind.as_str());
    if prediction.institutions.is_empty() {
        println!("No matching institutions");
    } else {
        print_institutions(&prediction.institutions);
    }

    Ok(())
}

fn run_check(
    directory: &StaticDirectory,
    account: &str,
    bank: &str,
) -> Result<(), Box<dyn Error>> {
    let institution = directory.find_bank_required(bank)?;
    let valid = is_account_valid(account, &institution.code);

    let expected = account
        .get(..SERIAL_LENGTH)
        .and_then(|serial| compute_check_digit(serial, &institution.code));

    println!("Bank:    {} ({})", institution.name, institution.code);
    println!("Account: {}", account);
    match expected {
        Some(digit) => println!("Expected check digit: {}", digit),
        None => println!("Expected check digit: n/a"),
    }
    println!("Valid:   {}", if valid { "yes" } else { "no" });

    Ok(())
}

fn print_institutions(institutions: &[Institution]) {
    for (rank, institution) in institutions.iter().enumerate() {
        println!("{:>3}. {:<40} {}", rank + 1, institution.name, institution.code);
    }
}
