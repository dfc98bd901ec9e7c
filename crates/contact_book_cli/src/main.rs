//! Interactive menu front-end for the contact book.
//!
//! # Responsibility
//! - Collect raw input, delegate to `contact_book_core`, print outcomes.
//! - Catch every core error at the menu boundary instead of crashing.

use contact_book_core::{
    default_log_level, init_logging, AddressBook, BookStore, JsonFileStore, Record,
};
use log::warn;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

const DEFAULT_DATA_FILE: &str = "address_book.json";

fn main() {
    let data_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

    setup_logging(&data_path);

    let store = JsonFileStore::new(&data_path);
    let mut book = match AddressBook::open(store) {
        Ok(book) => book,
        Err(err) => {
            eprintln!(
                "failed to open address book at {}: {err}",
                data_path.display()
            );
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_menu(&mut book, &mut input);
}

/// Logs go to a `logs/` directory next to the data file; a logging failure
/// disables logging but never blocks the tool.
fn setup_logging(data_path: &Path) {
    let log_dir = match data_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => parent.join("logs"),
        None => PathBuf::from("logs"),
    };
    let log_dir = if log_dir.is_absolute() {
        log_dir
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(log_dir),
            Err(_) => return,
        }
    };
    if let Some(dir) = log_dir.to_str() {
        if let Err(err) = init_logging(default_log_level(), dir) {
            eprintln!("logging disabled: {err}");
        }
    }
}

fn run_menu<S: BookStore>(book: &mut AddressBook<S>, input: &mut impl BufRead) {
    loop {
        println!();
        println!("1. Add contact");
        println!("2. Remove contact");
        println!("3. Find by name or phone");
        println!("4. Show all contacts");
        println!("5. Exit");

        let Some(choice) = prompt(input, "Choose an action: ") else {
            break;
        };
        match choice.as_str() {
            "1" => add_contact(book, input),
            "2" => remove_contact(book, input),
            "3" => find_contacts(book, input),
            "4" => show_all(book),
            "5" => {
                println!("Thank you for using your address book!");
                break;
            }
            other => println!("Unknown choice `{other}`."),
        }
    }
}

fn add_contact<S: BookStore>(book: &mut AddressBook<S>, input: &mut impl BufRead) {
    let Some(name) = prompt(input, "Enter name: ") else {
        return;
    };
    let Some(birthday) = prompt(input, "Enter date of birth (DD.MM.YYYY, empty to skip): ") else {
        return;
    };

    let mut record = match Record::new(&name, &birthday) {
        Ok(record) => record,
        Err(err) => {
            println!("{err}");
            return;
        }
    };

    let Some(count_raw) = prompt(input, "How many numbers do you want to add? ") else {
        return;
    };
    let count: usize = match count_raw.parse() {
        Ok(count) => count,
        Err(_) => {
            println!("Expected a number, got `{count_raw}`.");
            return;
        }
    };

    let mut added = 0;
    while added < count {
        let Some(phone) = prompt(input, "Enter a phone number: ") else {
            return;
        };
        match record.add_phone(&phone) {
            Ok(()) => added += 1,
            Err(err) => println!("{err}"),
        }
    }

    match book.add_record(record) {
        Ok(_) => println!("Contact added!"),
        Err(err) => {
            warn!("event=cli_add module=cli status=error error={err}");
            println!("{err}");
        }
    }
}

fn remove_contact<S: BookStore>(book: &mut AddressBook<S>, input: &mut impl BufRead) {
    let Some(name) = prompt(input, "Enter the name of the contact to delete: ") else {
        return;
    };
    match book.delete(&name) {
        Ok(()) => println!("Contact {name} removed!"),
        Err(err) => println!("{err}"),
    }
}

fn find_contacts<S: BookStore>(book: &AddressBook<S>, input: &mut impl BufRead) {
    let Some(query) = prompt(input, "Enter a name or phone number to search: ") else {
        return;
    };
    let results = book.find_by_name_or_phone(&query);
    if results.is_empty() {
        println!("No contacts found.");
        return;
    }
    println!("Contacts found:");
    for record in results {
        println!("{record}");
    }
}

fn show_all<S: BookStore>(book: &AddressBook<S>) {
    if book.is_empty() {
        println!("Address book is empty.");
        return;
    }
    for record in book.records() {
        println!("{record}");
    }
}

fn prompt(input: &mut impl BufRead, label: &str) -> Option<String> {
    print!("{label}");
    io::stdout().flush().ok()?;
    let mut line = String::new();
    match input.read_line(&mut line) {
        // 0 bytes read means EOF on stdin.
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}
