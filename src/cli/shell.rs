//! Interactive menu loop wrapped around the expense ledger.

use std::env;
use std::io::{self, BufRead};

use dialoguer::{theme::ColorfulTheme, Input};
use thiserror::Error;

use crate::cli::{commands, output};
use crate::config::LedgerConfig;
use crate::errors::LedgerError;
use crate::ledger::ExpenseLedger;

const SCRIPT_MODE_ENV: &str = "EXPENSE_CORE_CLI_SCRIPT";
const STORE_PATH_ENV: &str = "EXPENSE_CORE_STORE";

/// Errors that abort the CLI shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

enum LoopControl {
    Continue,
    Exit,
}

/// Runs the menu loop until the user exits or input is exhausted.
///
/// Script mode (stdin lines instead of interactive prompts) is enabled by
/// the `EXPENSE_CORE_CLI_SCRIPT` environment variable; `EXPENSE_CORE_STORE`
/// points the shell at an alternate store location.
pub fn run_cli() -> Result<(), CliError> {
    let mode = if env::var_os(SCRIPT_MODE_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };
    let config = match env::var_os(STORE_PATH_ENV) {
        Some(path) => LedgerConfig::with_store_path(path),
        None => LedgerConfig::default(),
    };
    let ledger = ExpenseLedger::new(config);
    ledger.ensure_store()?;

    match mode {
        CliMode::Interactive => run_loop(&ledger, &mut InteractivePrompts::new()),
        CliMode::Script => run_loop(&ledger, &mut ScriptPrompts::new(io::stdin().lock())),
    }
}

/// Source of free-text answers, one per prompt.
trait PromptSource {
    /// Returns `None` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError>;
}

struct InteractivePrompts {
    theme: ColorfulTheme,
}

impl InteractivePrompts {
    fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl PromptSource for InteractivePrompts {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        let value = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(Some(value))
    }
}

struct ScriptPrompts<R: BufRead> {
    reader: R,
}

impl<R: BufRead> ScriptPrompts<R> {
    fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> PromptSource for ScriptPrompts<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>, CliError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

fn run_loop(ledger: &ExpenseLedger, prompts: &mut dyn PromptSource) -> Result<(), CliError> {
    loop {
        print_menu();
        let Some(choice) = prompts.read_line("Enter your choice (1-4)")? else {
            break;
        };
        match dispatch(ledger, prompts, choice.trim())? {
            LoopControl::Continue => {}
            LoopControl::Exit => break,
        }
    }
    Ok(())
}

fn print_menu() {
    output::section("Expense Tracker");
    println!("1. Add a new expense");
    println!("2. View all expenses");
    println!("3. Get a summary of expenses (with chart)");
    println!("4. Exit");
}

fn dispatch(
    ledger: &ExpenseLedger,
    prompts: &mut dyn PromptSource,
    choice: &str,
) -> Result<LoopControl, CliError> {
    match choice {
        "1" => {
            add_expense_flow(ledger, prompts)?;
            Ok(LoopControl::Continue)
        }
        "2" => {
            commands::view_expenses(ledger)?;
            Ok(LoopControl::Continue)
        }
        "3" => {
            commands::view_summary(ledger)?;
            Ok(LoopControl::Continue)
        }
        "4" => {
            output::info("Exiting the expense tracker. Goodbye!");
            Ok(LoopControl::Exit)
        }
        _ => {
            output::warning("Invalid choice. Please enter a number from 1 to 4.");
            Ok(LoopControl::Continue)
        }
    }
}

/// Collects the three expense fields and records the entry. An amount that
/// fails to parse aborts the attempt without touching the store.
fn add_expense_flow(
    ledger: &ExpenseLedger,
    prompts: &mut dyn PromptSource,
) -> Result<(), CliError> {
    let Some(category) = prompts.read_line("Expense category (e.g., Food, Transport)")? else {
        return Ok(());
    };
    let Some(description) = prompts.read_line("Brief description")? else {
        return Ok(());
    };
    let Some(raw_amount) = prompts.read_line("Amount")? else {
        return Ok(());
    };

    match commands::add_expense(ledger, &category, &description, &raw_amount) {
        Ok(()) => Ok(()),
        Err(LedgerError::InvalidAmount(_)) => {
            output::error("Invalid amount. Please enter a number.");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
