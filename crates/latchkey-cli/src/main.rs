//! latchkey CLI
//!
//! Interactive driver for the login form engine: reads line commands from
//! stdin, feeds the mapped events into a [`LoginForm`], and prints emitted
//! intents as JSON lines.

use std::io::{self, BufRead};

use clap::Parser;
use serde_json::json;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use latchkey_form::{Field, FormEvent, Intent, LoginForm, SubmitTrigger};

/// Interactive driver for the login form engine.
#[derive(Parser)]
#[command(name = "latchkey")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, env = "LATCHKEY_VERBOSE")]
    verbose: bool,
}

/// A parsed input line.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    /// Type a value into a field (input followed by key release).
    Type { field: Field, value: String },
    /// Move focus out of a field.
    Blur(Field),
    /// Set the remember-me checkbox.
    Remember(bool),
    /// Attempt a submission.
    Submit(SubmitTrigger),
    Google,
    ForgotPassword,
    SignUp,
    /// Print the current form state as JSON.
    Status,
    Quit,
}

fn parse_field(name: &str) -> Result<Field, String> {
    match name {
        "email" => Ok(Field::Email),
        "password" => Ok(Field::Password),
        other => Err(format!("unknown field: {other:?} (email|password)")),
    }
}

/// Parses one non-empty input line.
///
/// A missing value argument maps to the empty string, so `email` on its own
/// clears the field rather than failing.
fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.splitn(2, char::is_whitespace);
    let keyword = parts.next().unwrap_or("");
    let rest = parts.next().unwrap_or("").trim();

    match keyword {
        "email" => Ok(Command::Type {
            field: Field::Email,
            value: rest.to_string(),
        }),
        "password" => Ok(Command::Type {
            field: Field::Password,
            value: rest.to_string(),
        }),
        "blur" => Ok(Command::Blur(parse_field(rest)?)),
        "remember" => match rest {
            "on" | "true" => Ok(Command::Remember(true)),
            "off" | "false" => Ok(Command::Remember(false)),
            other => Err(format!("unknown remember value: {other:?} (on|off)")),
        },
        "submit" => Ok(Command::Submit(SubmitTrigger::Button)),
        "enter" => Ok(Command::Submit(SubmitTrigger::EnterKey)),
        "form" => Ok(Command::Submit(SubmitTrigger::FormSubmit)),
        "google" => Ok(Command::Google),
        "forgot" => Ok(Command::ForgotPassword),
        "signup" => Ok(Command::SignUp),
        "status" => Ok(Command::Status),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command: {other:?}")),
    }
}

/// Applies a command to the form and returns the intent it produced, if any.
fn run_command(form: &mut LoginForm, command: Command) -> Option<Intent> {
    match command {
        Command::Type { field, value } => {
            form.apply(FormEvent::Input { field, value });
            form.apply(FormEvent::KeyRelease { field })
        }
        Command::Blur(field) => form.apply(FormEvent::Blur { field }),
        Command::Remember(value) => form.apply(FormEvent::RememberMe(value)),
        Command::Submit(trigger) => form.apply(FormEvent::Submit(trigger)),
        Command::Google => form.apply(FormEvent::Google),
        Command::ForgotPassword => form.apply(FormEvent::ForgotPassword),
        Command::SignUp => form.apply(FormEvent::SignUp),
        Command::Status | Command::Quit => None,
    }
}

fn status(form: &LoginForm) -> serde_json::Value {
    json!({
        "input": form.snapshot(),
        "email": form.validation(Field::Email),
        "password": form.validation(Field::Password),
        "isValid": form.is_valid(),
    })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("latchkey interactive driver; `status` to inspect, `quit` to exit");

    let mut form = LoginForm::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_command(line) {
            Ok(Command::Quit) => break,
            Ok(Command::Status) => println!("{}", status(&form)),
            Ok(command) => {
                if let Some(intent) = run_command(&mut form, command) {
                    println!("{}", serde_json::to_string(&intent)?);
                }
            }
            Err(message) => warn!("{message}"),
        }
    }

    Ok(())
}
