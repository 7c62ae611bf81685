/// Terminal frontend. All terminal I/O lives here.
///
/// Presents the canvas after each pass by repainting only the cells that
/// changed since the previous frame, and collects key presses from a
/// dedicated input thread so the scheduler never blocks on I/O.

use std::io::Write;
use std::ops::ControlFlow;
use std::sync::mpsc;
use std::thread;

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style::{self, Attribute, Print},
    terminal, ExecutableCommand, QueueableCommand,
};
use tracing::{debug, warn};

use space_garbage::canvas::{Canvas, Cell, Style};
use space_garbage::scheduler::Frontend;

pub struct Terminal<W: Write> {
    out: W,
    rx: mpsc::Receiver<Event>,
    /// Cells as last written to the screen.
    shown: Option<Vec<Cell>>,
    keyboard_enhanced: bool,
}

impl<W: Write> Terminal<W> {
    /// Switch to raw mode on the alternate screen and start reading keys.
    pub fn start(mut out: W) -> Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        out.execute(terminal::EnterAlternateScreen)?;
        out.execute(cursor::Hide)?;
        out.execute(terminal::Clear(terminal::ClearType::All))?;

        // Lets us drop key-release events on terminals that report them.
        let keyboard_enhanced = out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();

        let (tx, rx) = mpsc::channel::<Event>();
        thread::spawn(move || loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break; // receiver dropped → program exiting
                    }
                }
                Err(err) => {
                    warn!(%err, "input thread stopped");
                    break;
                }
            }
        });

        debug!(keyboard_enhanced, "terminal ready");
        Ok(Terminal { out, rx, shown: None, keyboard_enhanced })
    }

    /// `(rows, columns)` of the terminal window.
    pub fn size() -> Result<(u16, u16)> {
        let (columns, rows) = terminal::size().context("Failed to query terminal size")?;
        Ok((rows, columns))
    }

    /// Put the terminal back the way we found it.  Errors are ignored so
    /// this is safe on every exit path.
    pub fn restore(&mut self) {
        if self.keyboard_enhanced {
            let _ = self.out.execute(PopKeyboardEnhancementFlags);
        }
        let _ = self.out.execute(style::ResetColor);
        let _ = self.out.execute(cursor::Show);
        let _ = self.out.execute(terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn attribute_for(style: Style) -> Attribute {
    match style {
        Style::Normal => Attribute::Reset,
        Style::Dim => Attribute::Dim,
        Style::Bold => Attribute::Bold,
    }
}

impl<W: Write> Frontend for Terminal<W> {
    fn poll_keys(&mut self) -> Result<ControlFlow<(), Vec<KeyCode>>> {
        let mut keys = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = event else {
                continue;
            };
            if kind == KeyEventKind::Release {
                continue;
            }
            if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
                return Ok(ControlFlow::Break(()));
            }
            keys.push(code);
        }
        Ok(ControlFlow::Continue(keys))
    }

    fn refresh(&mut self, canvas: &mut Canvas) -> Result<()> {
        let (_, columns) = canvas.dimensions();
        let columns = columns.max(1) as usize;
        let mut current: Option<Style> = None;

        for (i, cell) in canvas.cells().iter().enumerate() {
            if let Some(shown) = &self.shown {
                if shown.get(i) == Some(cell) {
                    continue;
                }
            }
            let row = (i / columns) as u16;
            let column = (i % columns) as u16;
            self.out.queue(cursor::MoveTo(column, row))?;
            if current != Some(cell.style) {
                self.out.queue(style::SetAttribute(Attribute::Reset))?;
                if cell.style != Style::Normal {
                    self.out.queue(style::SetAttribute(attribute_for(cell.style)))?;
                }
                current = Some(cell.style);
            }
            self.out.queue(Print(cell.glyph))?;
        }

        if canvas.take_bell() {
            self.out.queue(Print('\x07'))?;
        }
        self.out.flush()?;
        self.shown = Some(canvas.cells().to_vec());
        Ok(())
    }
}
