//! `formhook` CLI — drive the form intake pipeline from the command line.
//!
//! Checks form definitions, validates candidate input against them, and
//! delivers validated submissions to a configured webhook. Field values are
//! passed as `NAME=VALUE` pairs.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use formhook_client::{SubmissionController, SubmitOutcome, WebhookConfig, WebhookSink};
use formhook_core::{FeedbackStatus, FormDefinition, ValidationErrors, ValidationSchema};

// ── ANSI color helpers ───────────────────────────────────────────────

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";

// ── CLI structure ────────────────────────────────────────────────────

/// formhook — deliver validated form submissions to a webhook.
#[derive(Parser)]
#[command(
    name = "formhook",
    version,
    about = "formhook CLI — check form definitions, validate input, and deliver submissions",
    long_about = None,
    after_help = format!(
        "{DIM}Environment variables:{RESET}\n  \
         FORMHOOK_WEBHOOK_URL    Webhook endpoint URL\n  \
         FORMHOOK_SOURCE         Payload source tag (default: formhook)\n  \
         FORMHOOK_TIMEOUT_SECS   Request timeout in seconds (default: 10)\n\n\
         {DIM}Examples:{RESET}\n  \
         formhook check --form contact.json\n  \
         formhook validate --form contact.json name=Ana email=ana@example.com\n  \
         formhook send --form contact.json name=Ana email=ana@example.com message=Hi"
    ),
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a form definition and print its fields.
    Check {
        /// Path to the form definition JSON file.
        #[arg(long)]
        form: PathBuf,
    },
    /// Validate NAME=VALUE input against a form definition.
    Validate {
        /// Path to the form definition JSON file.
        #[arg(long)]
        form: PathBuf,
        /// Field values as NAME=VALUE pairs.
        values: Vec<String>,
    },
    /// Validate NAME=VALUE input and deliver it to the webhook.
    Send {
        /// Path to the form definition JSON file.
        #[arg(long)]
        form: PathBuf,
        /// Webhook endpoint URL.
        #[arg(long, env = "FORMHOOK_WEBHOOK_URL")]
        url: Option<String>,
        /// Payload source tag.
        #[arg(long, env = "FORMHOOK_SOURCE")]
        source: Option<String>,
        /// Request timeout in seconds.
        #[arg(long, env = "FORMHOOK_TIMEOUT_SECS", default_value = "10")]
        timeout: u64,
        /// Field values as NAME=VALUE pairs.
        values: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli.command).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!();
            eprintln!("  {RED}{BOLD}✗ Error:{RESET} {e:#}");
            eprintln!();
            ExitCode::FAILURE
        }
    }
}

async fn run(cmd: Commands) -> Result<ExitCode> {
    match cmd {
        Commands::Check { form } => cmd_check(&form),
        Commands::Validate { form, values } => cmd_validate(&form, &values),
        Commands::Send {
            form,
            url,
            source,
            timeout,
            values,
        } => cmd_send(&form, url.as_deref(), source.as_deref(), timeout, &values).await,
    }
}

// ── Commands ─────────────────────────────────────────────────────────

fn cmd_check(form: &Path) -> Result<ExitCode> {
    let definition = load_definition(form)?;

    println!();
    println!(
        "  {BOLD}{}{RESET} field(s) in {}",
        definition.fields.len(),
        form.display()
    );
    println!();
    for field in &definition.fields {
        let required = if field.required { "required" } else { "optional" };
        println!(
            "  {BOLD}{:<12}{RESET} {:<12} {DIM}{:<9}{RESET} {}",
            field.name,
            field.kind.as_str(),
            required,
            field.label
        );
        if !field.kind.is_recognized() {
            println!(
                "  {YELLOW}⚠ unrecognized kind '{}' — field will validate as plain text{RESET}",
                field.kind.as_str()
            );
        }
    }
    println!();
    Ok(ExitCode::SUCCESS)
}

fn cmd_validate(form: &Path, values: &[String]) -> Result<ExitCode> {
    let definition = load_definition(form)?;
    let pairs = parse_value_pairs(values)?;

    for (name, _) in &pairs {
        if !definition.fields.contains(name) {
            bail!("unknown field: '{name}' is not declared in {}", form.display());
        }
    }

    let schema = ValidationSchema::derive(&definition.fields);
    let candidate = pairs.into_iter().collect();
    match schema.validate(&candidate) {
        Ok(()) => {
            println!();
            success("Input is valid.");
            println!();
            Ok(ExitCode::SUCCESS)
        }
        Err(errors) => {
            print_issues(&errors);
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn cmd_send(
    form: &Path,
    url: Option<&str>,
    source: Option<&str>,
    timeout: u64,
    values: &[String],
) -> Result<ExitCode> {
    let definition = load_definition(form)?;

    let mut config = WebhookConfig::new(url.unwrap_or_default())?;
    if let Some(source) = source {
        config = config.with_source(source);
    }
    config = config.with_timeout(Duration::from_secs(timeout));

    let sink = WebhookSink::new(&config)?;
    let mut controller = SubmissionController::new(&definition, sink);
    for (name, value) in parse_value_pairs(values)? {
        controller
            .set_value(&name, value)
            .with_context(|| format!("'{name}' is not declared in {}", form.display()))?;
    }

    match controller.submit().await {
        SubmitOutcome::Invalid(errors) => {
            print_issues(&errors);
            Ok(ExitCode::FAILURE)
        }
        SubmitOutcome::Completed(state) => {
            let message = state.message.as_deref().unwrap_or_default();
            println!();
            if state.status == FeedbackStatus::Success {
                success(message);
                println!();
                Ok(ExitCode::SUCCESS)
            } else {
                println!("  {RED}{BOLD}✗{RESET} {message}");
                println!();
                Ok(ExitCode::FAILURE)
            }
        }
        SubmitOutcome::InFlight => {
            // A fresh controller is never mid-flight; keep the arm total.
            bail!("a submission is already in flight")
        }
    }
}

// ── Helpers ──────────────────────────────────────────────────────────

fn load_definition(form: &Path) -> Result<FormDefinition> {
    let raw = std::fs::read_to_string(form)
        .with_context(|| format!("failed to read form definition {}", form.display()))?;
    FormDefinition::from_json(&raw)
        .with_context(|| format!("failed to parse form definition {}", form.display()))
}

fn parse_value_pairs(pairs: &[String]) -> Result<Vec<(String, String)>> {
    pairs
        .iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(name, value)| (name.to_owned(), value.to_owned()))
                .ok_or_else(|| anyhow::anyhow!("invalid NAME=VALUE pair: '{pair}'"))
        })
        .collect()
}

fn print_issues(errors: &ValidationErrors) {
    println!();
    println!("  {RED}{BOLD}✗ Invalid input:{RESET}");
    for issue in &errors.issues {
        println!("    {BOLD}{:<12}{RESET} {}", issue.field, issue.message);
    }
    println!();
}

fn success(message: &str) {
    println!("  {GREEN}{BOLD}✓{RESET} {message}");
}
