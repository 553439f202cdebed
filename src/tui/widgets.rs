use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::color::{Color as AppColor, TextTone};
use crate::engine::{Palette, PaletteType};

/// A widget that renders the five palette slots as a row of colored
/// swatches with their hex codes, lock markers, and the active type.
pub struct PaletteWidget<'a> {
    palette: &'a Palette,
    active: PaletteType,
}

impl<'a> PaletteWidget<'a> {
    pub fn new(palette: &'a Palette, active: PaletteType) -> Self {
        Self { palette, active }
    }
}

fn to_term(c: &AppColor) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

/// Choose black or white foreground for readable text on the given background.
fn contrast_fg(c: &AppColor) -> Color {
    match c.text_tone() {
        TextTone::Dark => Color::Black,
        TextTone::Light => Color::White,
    }
}

/// Build the row of colored swatches. Each swatch is 11 chars wide with the
/// hex code centered on the slot color. Locked slots get bold + underline.
fn build_swatch_row(palette: &Palette) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for slot in palette {
        let label = format!("{:^11}", slot.color.to_hex());
        let mut style = Style::default()
            .bg(to_term(&slot.color))
            .fg(contrast_fg(&slot.color));
        if slot.locked {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// Build the row of slot numbers and lock markers below the swatches.
fn build_index_row(palette: &Palette) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (i, slot) in palette.iter().enumerate() {
        let label = if slot.locked {
            format!("{:^11}", format!("{} locked", i + 1))
        } else {
            format!("{:^11}", i + 1)
        };
        let style = if slot.locked {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

impl Widget for PaletteWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().title("matiz");
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::from(format!("  type: {}", self.active)),
            Line::from(""),
            build_swatch_row(self.palette),
            build_index_row(self.palette),
            Line::from(""),
            Line::from(Span::styled(
                "  [space] regenerate   [1-5] lock   [tab] type   [q] quit",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}
