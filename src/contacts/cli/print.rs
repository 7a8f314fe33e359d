use colored::Colorize;
use contacts::api::{CmdMessage, DisplayContact, MessageLevel};
use contacts::error::ContactsError;
use std::io::{self, Write};

const RULE: &str = "--------------------";

pub fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(super) fn print_error<W: Write>(out: &mut W, error: &ContactsError) -> io::Result<()> {
    writeln!(out, "{}", error.to_string().red())
}

pub(super) fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "--- Contact Manager Menu ---".bold())?;
    writeln!(out, "[1] Add New Contact")?;
    writeln!(out, "[2] View All Contacts")?;
    writeln!(out, "[3] Search Contacts")?;
    writeln!(out, "[4] Delete Contact")?;
    writeln!(out, "[5] Exit")?;
    writeln!(out, "----------------------------")
}

/// Full listing, one `[i] name | phone | email` line per contact.
pub(super) fn print_contacts<W: Write>(
    out: &mut W,
    contacts: &[DisplayContact],
) -> io::Result<()> {
    if contacts.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "{}", "--- All Contacts ---".bold())?;
    for dc in contacts {
        writeln!(out, "{}", dc)?;
    }
    writeln!(out, "{}", RULE)
}

pub(super) fn print_matches<W: Write>(
    out: &mut W,
    matches: &[DisplayContact],
) -> io::Result<()> {
    if matches.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        format!("--- Found {} Contacts ---", matches.len()).bold()
    )?;
    for dc in matches {
        writeln!(
            out,
            "{} | {} | {}",
            dc.contact.name, dc.contact.phone, dc.contact.email
        )?;
    }
    writeln!(out, "{}", RULE)
}
