use std::path::PathBuf;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;

use crate::app::input::{self, InputAction};
use crate::app::{App, Message, Model, parse_command, update};
use crate::editor::{EdgePolicy, EditorBuffer};

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization fails or buffer growth
    /// runs out of memory; the terminal is restored before returning.
    pub fn run(&mut self) -> Result<()> {
        let (buffer, load_error) = self.load_buffer()?;

        let mut terminal = ratatui::try_init()
            .context("failed to initialize terminal; minvi requires an interactive terminal")?;
        let result = self.session(&mut terminal, buffer, load_error);
        ratatui::restore();
        result
    }

    /// Everything that runs between terminal init and restore. Any error
    /// returned here, including a failed size query, still reaches the
    /// `restore` in [`run`](Self::run).
    fn session(
        &self,
        terminal: &mut DefaultTerminal,
        buffer: EditorBuffer,
        load_error: Option<String>,
    ) -> Result<()> {
        let size = terminal.size()?;
        let mut model = Model::new(self.file_path.clone(), buffer, (size.width, size.height));
        model.status = load_error;
        Self::event_loop(terminal, &mut model)
    }

    /// Load the named file into a buffer, or start empty.
    ///
    /// A missing file is not an error (the name is simply adopted); an
    /// unreadable one surfaces as a status message and editing continues
    /// on an empty buffer.
    fn load_buffer(&self) -> Result<(EditorBuffer, Option<String>)> {
        let policy = if self.wrap_left {
            EdgePolicy::WrapPrevious
        } else {
            EdgePolicy::Stop
        };
        let Some(path) = &self.file_path else {
            return Ok((EditorBuffer::new(self.tab_width, policy), None));
        };
        if !path.exists() {
            return Ok((EditorBuffer::new(self.tab_width, policy), None));
        }
        match std::fs::read_to_string(path) {
            Ok(text) => {
                let buffer = EditorBuffer::from_text(&text, self.tab_width, policy)?;
                Ok((buffer, None))
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "failed to read file");
                Ok((
                    EditorBuffer::new(self.tab_width, policy),
                    Some(format!("\"{}\": {}", path.display(), err)),
                ))
            }
        }
    }

    /// One blocking event read per iteration, fully processed (mutation,
    /// viewport recompute, render) before the next.
    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        loop {
            terminal.draw(|frame| crate::ui::render(model, frame))?;
            if model.should_quit {
                break;
            }

            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    match input::action_for_key(model.mode, &key) {
                        Some(InputAction::BeginCommand) => {
                            if let Some(cmd) = Self::read_command_line(terminal, model)?
                                && let Some(msg) = parse_command(&cmd)
                            {
                                Self::apply(model, msg)?;
                            }
                        }
                        Some(InputAction::Dispatch(msg)) => Self::apply(model, msg)?,
                        None => {}
                    }
                }
                Event::Resize(width, height) => {
                    Self::apply(model, Message::Resize(width, height))?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn apply(model: &mut Model, msg: Message) -> Result<()> {
        let side_msg = msg.clone();
        *model = update(std::mem::take(model), msg)?;
        Self::handle_message_side_effects(model, &side_msg);
        Ok(())
    }

    /// Bounded nested loop for `:` command entry.
    ///
    /// Reads until Enter (returns the command) or Esc (discards the partial
    /// command), redrawing so the pending text shows on the status row.
    fn read_command_line(
        terminal: &mut DefaultTerminal,
        model: &mut Model,
    ) -> Result<Option<String>> {
        let mut cmd = String::new();
        let entered = loop {
            model.command_line = Some(cmd.clone());
            terminal.draw(|frame| crate::ui::render(model, frame))?;

            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => match key.code {
                    KeyCode::Enter => break true,
                    KeyCode::Esc => break false,
                    KeyCode::Backspace => {
                        cmd.pop();
                    }
                    KeyCode::Char(ch)
                        if !key
                            .modifiers
                            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                    {
                        cmd.push(ch);
                    }
                    _ => {}
                },
                Event::Resize(width, height) => {
                    model.viewport.resize(width, height.saturating_sub(1));
                }
                _ => {}
            }
        };
        model.command_line = None;
        Ok(entered.then_some(cmd))
    }

    /// Side effects that `update` stays pure of: file writes.
    pub(super) fn handle_message_side_effects(model: &mut Model, msg: &Message) {
        let Message::Write(name) = msg else {
            return;
        };
        if let Some(name) = name {
            model.file_path = Some(PathBuf::from(name));
        }
        let Some(path) = model.file_path.clone() else {
            model.show_status("no file name");
            return;
        };
        match model.buffer.save(&path) {
            Ok(()) => {
                let lines = model.buffer.line_count();
                model.show_status(format!("\"{}\" {}L written", path.display(), lines));
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "write failed");
                model.show_status(format!("\"{}\": {}", path.display(), err));
            }
        }
    }
}
