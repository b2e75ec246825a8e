use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::directory::{Action, Directory, SortField};
use crate::output;

const HELP: &str = "\
commands:
  sort <field>         sort the current rows (first_name, last_name, department, role, email, id)
  department <name>    show one department
  role <name>          show one role
  reset                show everyone in id order
  first <text>         set the first-name query
  last <text>          set the last-name query
  search first         search by first name (empty query searches by last name)
  search last          search by last name
  departments | roles  list filter values
  show                 redraw the table
  help | quit
";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Act(Action),
    Show,
    Departments,
    Roles,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim_start();
        if line.trim_end().is_empty() {
            return Ok(None);
        }
        // `raw` keeps everything after the verb, separator included
        let (verb, raw) = match line.find(char::is_whitespace) {
            Some(idx) => line.split_at(idx),
            None => (line, ""),
        };
        let rest = raw.trim();
        let cmd = match verb.to_ascii_lowercase().as_str() {
            "sort" => Self::Act(Action::Sort(SortField::from_label(rest))),
            "department" | "dept" => Self::Act(Action::FilterDepartment(required(verb, rest)?)),
            "role" => Self::Act(Action::FilterRole(required(verb, rest)?)),
            "reset" => Self::Act(Action::Reset),
            "first" => Self::Act(Action::SetFirstName(query_text(raw))),
            "last" => Self::Act(Action::SetLastName(query_text(raw))),
            "search" => match rest.to_ascii_lowercase().as_str() {
                "first" => Self::Act(Action::SearchFirstName),
                "last" => Self::Act(Action::SearchLastName),
                _ => return Err("usage: search first | search last".to_string()),
            },
            "departments" => Self::Departments,
            "roles" => Self::Roles,
            "show" => Self::Show,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(format!("unknown command '{other}' (try 'help')")),
        };
        Ok(Some(cmd))
    }
}

// Drops the single separator after the verb; the query is kept as typed.
fn query_text(raw: &str) -> String {
    let mut chars = raw.chars();
    chars.next();
    chars.as_str().to_string()
}

fn required(verb: &str, rest: &str) -> Result<String, String> {
    if rest.is_empty() {
        return Err(format!("usage: {verb} <name>"));
    }
    Ok(rest.to_string())
}

fn draw<W: Write>(dir: &Directory<'_>, out: &mut W, styled: bool) -> io::Result<()> {
    out.write_all(&output::render_text(dir.display(), styled))?;
    writeln!(out, "({} of {} employees)", dir.display().len(), dir.dataset().len())
}

pub fn run<R, W>(dir: &mut Directory<'_>, input: R, out: &mut W, styled: bool) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    draw(dir, out, styled)?;
    for line in input.lines() {
        let line = line?;
        let cmd = match Command::parse(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(msg) => {
                writeln!(out, "{}", msg.red())?;
                continue;
            }
        };
        match cmd {
            Command::Quit => break,
            Command::Help => out.write_all(HELP.as_bytes())?,
            Command::Show => draw(dir, out, styled)?,
            Command::Departments => writeln!(out, "{}", dir.dataset().departments().join(", "))?,
            Command::Roles => writeln!(out, "{}", dir.dataset().roles().join(", "))?,
            Command::Act(action) => {
                let redraw = !matches!(action, Action::SetFirstName(_) | Action::SetLastName(_));
                match dir.apply(action) {
                    Ok(()) if redraw => draw(dir, out, styled)?,
                    Ok(()) => {}
                    Err(e) => writeln!(out, "{}", e.to_string().yellow())?,
                }
            }
        }
        out.flush()?;
    }
    Ok(())
}
