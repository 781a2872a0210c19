//! Terminal bar renderer

use std::fmt::Write as _;
use std::io::{self, Write};

use anyhow::Result;
use sortvis_charts::prelude::*;
use sortvis_core::Frame;

use crate::config::RenderConfig;

const CLEAR: &str = "\x1b[2J\x1b[H";
const RESET: &str = "\x1b[0m";
/// Above this many bars each bar is one column wide
const WIDE_BAR_LIMIT: usize = 40;

pub struct TerminalRenderer {
    height: usize,
    clear_screen: bool,
    style: BarChartStyle,
}

impl TerminalRenderer {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            height: config.height.max(1),
            clear_screen: config.clear_screen,
            style: BarChartStyle {
                shading: config.shading,
                ..BarChartStyle::default()
            },
        }
    }

    /// Draw `frame` to stdout
    pub fn draw(&mut self, frame: &Frame) -> Result<()> {
        let text = self.render(frame)?;
        let mut out = io::stdout().lock();
        if self.clear_screen {
            out.write_all(CLEAR.as_bytes())?;
        }
        out.write_all(text.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// The chart as text, one line per row plus a summary line
    pub fn render(&self, frame: &Frame) -> Result<String> {
        let model = BarChartModel::new(frame, &self.style)?;
        let cell = if model.len() > WIDE_BAR_LIMIT { "█" } else { "██" };
        let blank = if model.len() > WIDE_BAR_LIMIT { " " } else { "  " };

        let mut text = String::new();
        for row in (1..=self.height).rev() {
            for (index, bar) in model.bars.iter().enumerate() {
                if model.rows(index, self.height) >= row {
                    text.push_str(&ansi(bar.color));
                    text.push_str(cell);
                    text.push_str(RESET);
                } else {
                    text.push_str(blank);
                }
            }
            text.push('\n');
        }

        let sorted = model.bars.iter().filter(|b| b.role == ColorRole::Sorted).count();
        let _ = writeln!(
            text,
            "{} / {} sorted{}",
            sorted,
            model.len(),
            if model.finished { " - done" } else { "" }
        );
        Ok(text)
    }
}

/// 24-bit foreground escape; translucent colors are drawn faint
fn ansi(color: Color) -> String {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    let faint = if color.a < 1.0 { "2;" } else { "" };
    format!(
        "\x1b[{}38;2;{};{};{}m",
        faint,
        channel(color.r),
        channel(color.g),
        channel(color.b)
    )
}
