mod cli;

use std::process;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use log::info;

use datecalc::config::Config;
use datecalc::logger;
use datecalc::utils::datetime;
use datecalc::Calculator;

use crate::cli::{AddArgs, Cli, Command, CompareArgs};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Command::InitConfig(args) = &cli.command {
        let path = match &args.path {
            Some(path) => path.clone(),
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    logger::init(cli.verbose, &config.logging)?;

    let mut calculator = Calculator::from_config(&config);
    if cli.business {
        calculator.set_business_mode(true);
    } else if cli.calendar {
        calculator.set_business_mode(false);
    }
    info!(
        "Business mode {}, offset limit {}",
        if calculator.business_mode() { "on" } else { "off" },
        calculator.offset_limit()
    );

    let format = config.display.date_format.as_str();
    match cli.command {
        Command::Add(args) => add(&calculator, &args, format, cli.json),
        Command::Compare(args) => compare(&calculator, &args, format, cli.json),
        Command::InitConfig(_) => Ok(()),
    }
}

fn add(calculator: &Calculator, args: &AddArgs, format: &str, json: bool) -> Result<()> {
    let base = parse(&args.base, format)?;
    let addition = calculator.add(base, args.years, args.months, args.days);

    if json {
        println!("{}", serde_json::to_string_pretty(&addition)?);
    } else {
        println!("{}", datetime::format_date(addition.result, format)?);
    }
    Ok(())
}

fn compare(calculator: &Calculator, args: &CompareArgs, format: &str, json: bool) -> Result<()> {
    let first = parse(&args.first, format)?;
    let second = parse(&args.second, format)?;
    let comparison = calculator.compare(first, second);

    if json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
    } else {
        println!(
            "{} .. {}\n\n{}",
            datetime::format_date(first.min(second), format)?,
            datetime::format_date(first.max(second), format)?,
            comparison
        );
    }
    Ok(())
}

fn parse(text: &str, format: &str) -> Result<NaiveDate> {
    Ok(datetime::parse_date_with_format(text, format)?)
}
