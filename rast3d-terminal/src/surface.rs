//! Terminal pixel surface presented with half-block glyphs.

use std::io::Write;

use crossterm::{
    cursor,
    style::{Color as TermColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};
use rast3d_core::{Color, Surface};

/// RGB cell grid where every terminal cell shows two vertically stacked
/// pixels through the upper-half-block glyph: foreground paints the upper
/// pixel, background the lower.
pub struct TermSurface {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl TermSurface {
    /// `columns` x `rows` terminal cells give a `columns` x `2 * rows`
    /// pixel surface.
    pub fn new(columns: u16, rows: u16) -> Self {
        let width = columns as u32;
        let height = rows as u32 * 2;
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; (width * height) as usize],
        }
    }

    pub fn clear(&mut self, color: Color) {
        for pixel in &mut self.pixels {
            *pixel = color;
        }
    }

    fn pixel(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Queue the whole grid to `writer`; the caller flushes.
    pub fn present<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.queue(cursor::MoveTo(0, 0))?;
        for row in 0..self.height / 2 {
            for x in 0..self.width {
                let upper = self.pixel(x, 2 * row);
                let lower = self.pixel(x, 2 * row + 1);
                writer.queue(SetForegroundColor(term_color(upper)))?;
                writer.queue(SetBackgroundColor(term_color(lower)))?;
                writer.queue(Print('\u{2580}'))?;
            }
            writer.queue(ResetColor)?;
            if row + 1 < self.height / 2 {
                writer.queue(Print("\r\n"))?;
            }
        }
        Ok(())
    }
}

fn term_color(color: Color) -> TermColor {
    TermColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

impl Surface for TermSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }
}
