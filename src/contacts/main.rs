use contacts::api::ContactBook;
use contacts::error::Result;
use contacts::store::fs::FileStore;
use std::io::{self, Write};

mod args;
mod cli;
use args::Cli;
use cli::Console;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    Cli::parse_or_ignore();

    let store = FileStore::default();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    writeln!(console.out(), "Starting Contact Manager...")?;
    let (mut book, result) = ContactBook::open(store);
    cli::print_messages(console.out(), &result.messages)?;

    cli::run(&mut book, &mut console)
}
