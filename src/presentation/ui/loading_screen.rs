use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Text},
    widgets::{Paragraph, Widget},
};

const LOGO_TEXT: &str = r"
 ___ _____ _   _ ___  __   ___    ___ _  _ ___
/ __|_   _| | | |   \ \ \ / / |  |_ _| \| | __|
\__ \ | | | |_| | |) | \ V /| |__ | || .` | _|
|___/ |_|  \___/|___/   |_| |____|___|_|\_|___|";

/// Shown while the stored session is looked up.
pub struct LoadingScreen;

impl Widget for &LoadingScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut text =
            Text::from(LOGO_TEXT.trim_matches('\n')).style(Style::default().fg(Color::Cyan));
        text.push_line(Line::default());
        text.push_line(Line::styled("Checking session...", Style::default().fg(Color::DarkGray)));
        let text = text.centered();

        let text_width = u16::try_from(text.width()).unwrap_or(u16::MAX);
        let text_height = u16::try_from(text.height()).unwrap_or(u16::MAX);

        let x = area.x + area.width.saturating_sub(text_width) / 2;
        let y = area.y + area.height.saturating_sub(text_height) / 2;
        let center_area = Rect::new(
            x,
            y,
            text_width.min(area.width),
            text_height.min(area.height),
        );

        Paragraph::new(text).render(center_area, buf);
    }
}
