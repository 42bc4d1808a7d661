use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

use mealplan_core::service::Planner;

use crate::commands::{cmd_add, cmd_export, cmd_view, prompt};

pub(crate) const BANNER: &str = "Weekly Meal Scheduler";
pub(crate) const PROMPT: &str = "Choose an action [add/view/export/quit]: ";
pub(crate) const INTERRUPTED: &str = "Program interrupted. Exiting safely.";

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Add,
    View,
    Export,
    Quit,
    Unknown(String),
}

impl Command {
    pub(crate) fn parse(line: &str) -> Self {
        let keyword = line.trim();
        match keyword.to_lowercase().as_str() {
            "add" => Self::Add,
            "view" => Self::View,
            "export" => Self::Export,
            "quit" => Self::Quit,
            _ => Self::Unknown(keyword.to_string()),
        }
    }
}

enum Flow {
    Continue,
    Quit,
    Interrupted,
}

/// Interactive read-dispatch-respond loop over a single planner.
pub(crate) struct Shell<R, W> {
    input: R,
    out: W,
    planner: Planner,
    export_path: PathBuf,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub(crate) fn new(input: R, out: W, planner: Planner, export_path: PathBuf) -> Self {
        Self {
            input,
            out,
            planner,
            export_path,
        }
    }

    /// Run until `quit` or end of input.
    pub(crate) fn run(&mut self) -> Result<()> {
        writeln!(self.out, "{BANNER}\n")?;
        loop {
            match self.step()? {
                Flow::Continue => {}
                Flow::Quit => {
                    writeln!(self.out, "Goodbye!")?;
                    break;
                }
                Flow::Interrupted => {
                    writeln!(self.out, "\n{INTERRUPTED}")?;
                    break;
                }
            }
        }
        self.out.flush()?;
        debug!(meals = self.planner.store().len(), "shell finished");
        Ok(())
    }

    fn step(&mut self) -> Result<Flow> {
        let Some(line) = prompt(&mut self.input, &mut self.out, PROMPT)? else {
            return Ok(Flow::Interrupted);
        };

        match Command::parse(&line) {
            Command::Add => return self.add(),
            Command::View => cmd_view(&self.planner, &mut self.out)?,
            Command::Export => cmd_export(&self.planner, &mut self.out, &self.export_path)?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Unknown(text) => {
                debug!(command = %text, "unknown command");
                writeln!(
                    self.out,
                    "Unknown command '{text}'. Please use add, view, export, or quit."
                )?;
            }
        }
        Ok(Flow::Continue)
    }

    fn add(&mut self) -> Result<Flow> {
        let Some(name) = prompt(&mut self.input, &mut self.out, "  Meal name: ")? else {
            return Ok(Flow::Interrupted);
        };
        let Some(date) = prompt(&mut self.input, &mut self.out, "  Date (YYYY-MM-DD): ")? else {
            return Ok(Flow::Interrupted);
        };
        let Some(ingredients) =
            prompt(&mut self.input, &mut self.out, "  Ingredients (comma-separated): ")?
        else {
            return Ok(Flow::Interrupted);
        };

        cmd_add(&mut self.planner, &mut self.out, &name, &date, &ingredients)?;
        Ok(Flow::Continue)
    }
}
