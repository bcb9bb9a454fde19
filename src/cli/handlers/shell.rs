//! Interactive shell: a line-oriented session over the note list.
//!
//! Each command maps onto one session operation. After anything that
//! changes the list or the filter, the visible rows are printed again.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::debug;

use super::list::write_listing;
use super::{confirm, open_session, parse_category_filter, select_note};
use crate::cli::config::Config;
use crate::session::{Session, SessionError};
use crate::store::NoteStore;

const HELP: &str = "\
Commands:
  add <text>           add a note in the current category
  cat <name>           choose the category for new and edited notes
  filter <name|all>    show only one category, or all
  search [text]        show notes containing text (no text: show all)
  ls                   show the list
  select <row|id>      select a note
  rm                   delete the selected note
  edit                 start editing the selected note
  save [text]          save the edit (without text: keep the current text)
  cancel               abandon the edit
  write                save notes to the database
  help                 show this help
  quit                 save and exit";

pub fn handle_shell(db_path: &Path, config: &Config) -> Result<()> {
    let mut session = open_session(db_path, config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = run_shell(&mut session, &mut stdin.lock(), &mut stdout.lock());

    // Save on every exit, including a failed read or write.
    session.close();
    result
}

/// What the loop should do after a command.
enum Flow {
    Continue,
    Quit,
}

/// Runs shell commands from `input` until `quit` or end of input.
///
/// Does not save on exit; the caller closes the session.
pub fn run_shell<S, R, W>(session: &mut Session<S>, input: &mut R, out: &mut W) -> Result<()>
where
    S: NoteStore,
    R: BufRead,
    W: Write,
{
    write_listing(out, session)?;

    let mut line = String::new();
    loop {
        write!(out, "{}", prompt(session))?;
        out.flush()?;

        line.clear();
        if input
            .read_line(&mut line)
            .with_context(|| "failed to read command")?
            == 0
        {
            writeln!(out)?;
            break;
        }

        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        debug!(command, "shell command");

        match execute(session, command, input, out) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(err) => report(out, &err)?,
        }
    }

    Ok(())
}

fn prompt<S: NoteStore>(session: &Session<S>) -> String {
    match session.editing() {
        Some(_) => format!("jot [{}, editing]> ", session.input_category()),
        None => format!("jot [{}]> ", session.input_category()),
    }
}

fn execute<S, R, W>(
    session: &mut Session<S>,
    command: &str,
    input: &mut R,
    out: &mut W,
) -> Result<Flow>
where
    S: NoteStore,
    R: BufRead,
    W: Write,
{
    let (name, arg) = command
        .split_once(char::is_whitespace)
        .map(|(n, a)| (n, a.trim()))
        .unwrap_or((command, ""));

    match name {
        "add" => {
            session.add_note(arg)?;
            write_listing(out, session)?;
        }
        "cat" | "category" => {
            session.set_input_category(arg)?;
            writeln!(out, "Category: {}", session.input_category())?;
        }
        "filter" => {
            session.set_category_filter(parse_category_filter(arg)?)?;
            write_listing(out, session)?;
        }
        "search" => {
            session.set_query(arg);
            write_listing(out, session)?;
        }
        "ls" | "list" => write_listing(out, session)?,
        "select" => {
            select_note(session, arg, out)?;
            if let Some(note) = session.selected() {
                writeln!(out, "Selected: {}", note)?;
            }
        }
        "rm" | "delete" => {
            let prompt = match session.selected() {
                Some(note) => format!("Delete {}?", note),
                None => return Err(SessionError::NothingSelected.into()),
            };
            if confirm(&prompt, input, out)? {
                let removed = session.delete_selected()?;
                writeln!(out, "Deleted: {}", removed)?;
                write_listing(out, session)?;
            } else {
                writeln!(out, "Cancelled.")?;
            }
        }
        "edit" => {
            let note = session.start_edit()?;
            writeln!(out, "Editing: {}", note.text())?;
        }
        "save" => {
            let draft = session.editing().map(|n| n.text().to_string());
            let text = if arg.is_empty() {
                draft.as_deref().unwrap_or("")
            } else {
                arg
            };
            session.save_edit(text)?;
            writeln!(out, "Note updated.")?;
            write_listing(out, session)?;
        }
        "cancel" => {
            if session.cancel_edit() {
                writeln!(out, "Edit cancelled.")?;
            } else {
                return Err(SessionError::NotEditing.into());
            }
        }
        "write" => {
            let count = session.save()?;
            writeln!(out, "Saved {} note(s).", count)?;
        }
        "help" | "?" => writeln!(out, "{}", HELP)?,
        "quit" | "exit" | "q" => return Ok(Flow::Quit),
        other => writeln!(out, "unknown command: {} (type 'help')", other)?,
    }

    Ok(Flow::Continue)
}

/// Prints a failed command and keeps the shell running.
fn report<W: Write>(out: &mut W, err: &anyhow::Error) -> io::Result<()> {
    match err.downcast_ref::<SessionError>() {
        Some(e) if e.is_warning() => writeln!(out, "warning: {}", e),
        _ => writeln!(out, "error: {:#}", err),
    }
}
