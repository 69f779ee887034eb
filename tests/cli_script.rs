use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn cli_with_store(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense_core_cli").expect("binary builds");
    cmd.env("EXPENSE_CORE_CLI_SCRIPT", "1")
        .env("EXPENSE_CORE_STORE", temp.path().join("expenses.csv"));
    cmd
}

#[test]
fn script_mode_adds_and_lists_expense() {
    let temp = TempDir::new().unwrap();
    cli_with_store(&temp)
        .write_stdin("1\nFood\nLunch\n12.50\n2\n4\n")
        .assert()
        .success()
        .stdout(contains("Expense added successfully."))
        .stdout(contains("Lunch"))
        .stdout(contains("Exiting the expense tracker. Goodbye!"));
}

#[test]
fn invalid_amount_leaves_store_untouched() {
    let temp = TempDir::new().unwrap();
    cli_with_store(&temp)
        .write_stdin("1\nFood\nSnack\ntwelve\n4\n")
        .assert()
        .success()
        .stdout(contains("Invalid amount. Please enter a number."));

    let content = std::fs::read_to_string(temp.path().join("expenses.csv")).unwrap();
    assert_eq!(
        content, "Date,Category,Description,Amount\n",
        "a rejected amount must not append anything"
    );
}

#[test]
fn invalid_menu_choice_reprints_menu() {
    let temp = TempDir::new().unwrap();
    cli_with_store(&temp)
        .write_stdin("9\n4\n")
        .assert()
        .success()
        .stdout(contains("Invalid choice. Please enter a number from 1 to 4."))
        .stdout(contains("1. Add a new expense"));
}

#[test]
fn summary_reports_totals_and_chart() {
    let temp = TempDir::new().unwrap();
    let input = "1\nFood\nLunch\n12.50\n\
                 1\nTransport\nBus\n2.25\n\
                 1\nFood\nCoffee\n4.00\n\
                 3\n4\n";
    cli_with_store(&temp)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Food: $16.50"))
        .stdout(contains("Transport: $2.25"))
        .stdout(contains("Total Expenses: $18.75"))
        .stdout(contains("Expense Distribution by Category"));
}

#[test]
fn end_of_input_exits_cleanly() {
    let temp = TempDir::new().unwrap();
    cli_with_store(&temp)
        .write_stdin("")
        .assert()
        .success()
        .stdout(contains("Expense Tracker"));
}

#[test]
fn view_on_fresh_store_shows_no_records() {
    let temp = TempDir::new().unwrap();
    cli_with_store(&temp)
        .write_stdin("2\n4\n")
        .assert()
        .success()
        .stdout(contains("All Expenses"))
        .stdout(contains("No expenses recorded yet."));
}
