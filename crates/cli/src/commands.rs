use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use katas_catalog::Input;
use katas_core::{Clock, FixedClock, RefactoringPattern, StdoutConsole, SystemClock, Unit, Variant};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "katas")]
#[command(about = "Refactoring katas: exercises, solutions and the suite they share.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every unit in catalog order
    #[command(alias = "ls")]
    List,
    /// Describe one unit
    Show { unit: String },
    /// Run one variant of a unit
    #[command(alias = "r")]
    Run {
        unit: String,
        #[arg(long, short, default_value = "solution", value_parser = parse_variant)]
        variant: Variant,
        #[command(flatten)]
        input: InputArgs,
    },
    /// Run both variants and check that their output matches
    #[command(alias = "c")]
    Compare {
        unit: String,
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Text for the vowel counter
    #[arg(long, short)]
    pub text: Option<String>,
    /// JSON document `{ "customer": ..., "orders": [...] }` for the invoice builder
    #[arg(long, short)]
    pub input: Option<PathBuf>,
    /// Pin the clock to midnight UTC of this day (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub date: Option<FixedClock>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

fn parse_variant(s: &str) -> Result<Variant, String> {
    s.parse().map_err(|e: katas_core::KataError| e.to_string())
}

fn parse_date(s: &str) -> Result<FixedClock, String> {
    FixedClock::parse_date(s).map_err(|e| e.to_string())
}

pub fn list() {
    for unit in katas_catalog::units() {
        println!("{:<45} {:<18} {}", unit.id, unit.pattern.name(), unit.title);
    }
}

pub fn show(query: &str) -> anyhow::Result<()> {
    let unit = katas_catalog::find(query)?;
    println!("id:       {}", unit.id);
    println!("chapter:  {}", unit.id.chapter());
    println!("pattern:  {}", unit.pattern);
    println!("title:    {}", unit.title);
    println!("summary:  {}", unit.summary);
    Ok(())
}

pub fn run(query: &str, variant: Variant, args: &InputArgs, cfg: &Config) -> anyhow::Result<()> {
    let unit = katas_catalog::find(query)?;
    let input = load_input(unit, args)?;
    let clock = clock(cfg);

    katas_catalog::run(unit, variant, &input, &mut StdoutConsole, clock.as_ref())
        .with_context(|| format!("running {} ({variant})", unit.id))
}

/// Returns whether both variants wrote identical output.
pub fn compare(query: &str, args: &InputArgs, cfg: &Config) -> anyhow::Result<bool> {
    let unit = katas_catalog::find(query)?;
    let input = load_input(unit, args)?;
    // Both variants must see the same instant even on the wall clock.
    let clock = cfg
        .fixed_date
        .unwrap_or_else(|| FixedClock::new(SystemClock.now()));

    let comparison = katas_catalog::compare(unit, &input, &clock)
        .with_context(|| format!("comparing {}", unit.id))?;

    for (variant, lines) in [
        (Variant::Exercise, &comparison.exercise),
        (Variant::Solution, &comparison.solution),
    ] {
        println!("== {variant}");
        for line in lines {
            println!("{line}");
        }
    }

    let equivalent = comparison.is_equivalent();
    println!(
        "== {}",
        if equivalent { "equivalent" } else { "DIFFERENT" }
    );
    Ok(equivalent)
}

fn clock(cfg: &Config) -> Box<dyn Clock> {
    match cfg.fixed_date {
        Some(fixed) => Box::new(fixed),
        None => Box::new(SystemClock),
    }
}

fn load_input(unit: &Unit, args: &InputArgs) -> anyhow::Result<Input> {
    match unit.pattern {
        RefactoringPattern::ExtractFunction => Ok(Input::text(args.text.clone().unwrap_or_default())),
        RefactoringPattern::InlineFunction => {
            let path = args
                .input
                .as_ref()
                .with_context(|| format!("{} needs --input <FILE>", unit.id))?;
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            tracing::debug!(path = %path.display(), bytes = json.len(), "loaded invoice input");
            Ok(Input::invoice_from_json(&json)?)
        }
    }
}
