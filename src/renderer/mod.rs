use std::io::{Stdout, stdout};

use anyhow::Context;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
};
use ratatui::backend::{CrosstermBackend, TestBackend};
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal};
use tracing::debug;

use crate::runtime::View;
use crate::text_input::TextInputs;

mod widgets;

#[cfg(test)]
mod tests;

use widgets::{render_container, render_flex, render_text, render_text_input};

const HEADLESS_SIZE: (u16, u16) = (80, 24);

enum Surface {
    Terminal(Terminal<CrosstermBackend<Stdout>>),
    Headless(Terminal<TestBackend>),
}

pub struct Renderer {
    surface: Surface,
}

impl Renderer {
    pub fn new(title: &str) -> anyhow::Result<Self> {
        enable_raw_mode().context("enable raw mode")?;
        let mut stdout = stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableBracketedPaste,
            Hide,
            SetTitle(title)
        )
        .context("prepare terminal")?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).context("build terminal")?;
        Ok(Self {
            surface: Surface::Terminal(terminal),
        })
    }

    /// Draws into an off-screen buffer; the host terminal is left untouched.
    pub fn headless() -> anyhow::Result<Self> {
        let (width, height) = HEADLESS_SIZE;
        let terminal =
            Terminal::new(TestBackend::new(width, height)).context("build headless terminal")?;
        debug!(width, height, "using headless renderer");
        Ok(Self {
            surface: Surface::Headless(terminal),
        })
    }

    pub fn draw(&mut self, view: &View, inputs: &TextInputs) -> anyhow::Result<()> {
        inputs.reset_hitboxes();
        let paint = |frame: &mut Frame<'_>| {
            let area = frame.size();
            render_view(frame, area, view, inputs);
        };
        match &mut self.surface {
            Surface::Terminal(terminal) => {
                terminal.draw(paint).context("draw frame")?;
            }
            Surface::Headless(terminal) => {
                terminal.draw(paint).context("draw headless frame")?;
            }
        }
        Ok(())
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        if let Surface::Headless(_) = self.surface {
            return;
        }
        let _ = disable_raw_mode();
        let mut stdout = stdout();
        let _ = execute!(
            stdout,
            Show,
            DisableBracketedPaste,
            DisableMouseCapture,
            LeaveAlternateScreen,
            SetTitle("Terminal")
        );
    }
}

fn render_view(frame: &mut Frame<'_>, area: Rect, view: &View, inputs: &TextInputs) {
    match view {
        View::Empty => {}
        View::Text(text) => render_text(frame, area, text),
        View::Flex(flex) => render_flex(frame, area, flex, inputs, render_view),
        View::Container(container) => {
            render_container(frame, area, container, inputs, render_view)
        }
        View::Input(input) => render_text_input(frame, area, input, inputs),
    }
}
