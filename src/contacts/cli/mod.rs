//! Interactive menu for the binary.
//!
//! The loop is a two-state machine: it stays `Running`, printing the menu and
//! dispatching one choice per iteration, until the user picks Exit or stdin
//! runs dry.

mod print;
mod prompt;

pub use print::print_messages;
pub use prompt::Console;

use contacts::api::{ContactBook, CANCEL_SENTINEL};
use contacts::error::{ContactsError, Result};
use contacts::store::DataStore;
use print::{print_contacts, print_error, print_matches, print_menu};
use std::io::{BufRead, Write};
use std::str::FromStr;

const GOODBYE: &str = "Exiting Contact Manager. Goodbye!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Running,
    Terminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Search,
    Delete,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = ContactsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1" => Ok(MenuChoice::Add),
            "2" => Ok(MenuChoice::View),
            "3" => Ok(MenuChoice::Search),
            "4" => Ok(MenuChoice::Delete),
            "5" => Ok(MenuChoice::Exit),
            _ => Err(ContactsError::Validation(
                "Invalid choice. Please enter a number between 1 and 5.".to_string(),
            )),
        }
    }
}

pub fn run<S, R, W>(book: &mut ContactBook<S>, console: &mut Console<R, W>) -> Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    let mut state = MenuState::Running;
    while state == MenuState::Running {
        print_menu(console.out())?;
        state = match console.prompt("Enter your choice (1-5): ")? {
            Some(choice) => step(book, console, &choice)?,
            None => {
                writeln!(console.out(), "{}", GOODBYE)?;
                MenuState::Terminated
            }
        };
    }
    Ok(())
}

/// Handles one menu choice and returns the next state.
pub fn step<S, R, W>(
    book: &mut ContactBook<S>,
    console: &mut Console<R, W>,
    choice: &str,
) -> Result<MenuState>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    match choice.parse::<MenuChoice>() {
        Ok(MenuChoice::Add) => handle_add(book, console)?,
        Ok(MenuChoice::View) => handle_view(book, console)?,
        Ok(MenuChoice::Search) => handle_search(book, console)?,
        Ok(MenuChoice::Delete) => handle_delete(book, console)?,
        Ok(MenuChoice::Exit) => {
            writeln!(console.out(), "{}", GOODBYE)?;
            return Ok(MenuState::Terminated);
        }
        Err(e) => print_error(console.out(), &e)?,
    }
    Ok(MenuState::Running)
}

fn handle_add<S, R, W>(book: &mut ContactBook<S>, console: &mut Console<R, W>) -> Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    let Some(name) = console.prompt("Enter Name: ")? else {
        return Ok(());
    };
    let Some(phone) = console.prompt("Enter Phone: ")? else {
        return Ok(());
    };
    let Some(email) = console.prompt("Enter Email: ")? else {
        return Ok(());
    };

    match book.add_contact(&name, &phone, &email) {
        Ok(result) => print_messages(console.out(), &result.messages)?,
        Err(e) => print_error(console.out(), &e)?,
    }
    Ok(())
}

fn handle_view<S, R, W>(book: &ContactBook<S>, console: &mut Console<R, W>) -> Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    let result = book.view_contacts();
    print_contacts(console.out(), &result.listed_contacts)?;
    print_messages(console.out(), &result.messages)?;
    Ok(())
}

fn handle_search<S, R, W>(book: &ContactBook<S>, console: &mut Console<R, W>) -> Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    let Some(term) = console.prompt("Enter search term (name or phone): ")? else {
        return Ok(());
    };

    match book.search_contacts(&term) {
        Ok(result) => {
            print_matches(console.out(), &result.listed_contacts)?;
            print_messages(console.out(), &result.messages)?;
        }
        Err(e) => print_error(console.out(), &e)?,
    }
    Ok(())
}

fn handle_delete<S, R, W>(book: &mut ContactBook<S>, console: &mut Console<R, W>) -> Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    handle_view(book, console)?;
    if book.is_empty() {
        return Ok(());
    }

    let label = format!(
        "Enter the number of the contact to delete (or '{}' to cancel): ",
        CANCEL_SENTINEL
    );
    let Some(input) = console.prompt(&label)? else {
        return Ok(());
    };

    match book.delete_contact(&input) {
        Ok(result) => print_messages(console.out(), &result.messages)?,
        Err(e) => print_error(console.out(), &e)?,
    }
    Ok(())
}
