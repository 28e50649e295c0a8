//! Overlay popups for notices and confirmations.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::StatusLevel;
use crate::application::dto::{Dialog, Notice};

const MAX_POPUP_WIDTH: u16 = 60;

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    )
}

/// Popup size fitting `message` with at least `title` width.
fn popup_size(area: Rect, title: &str, message: &str, extra_lines: u16) -> (u16, u16) {
    let max_width = MAX_POPUP_WIDTH.min(area.width.saturating_sub(2));
    let longest_line = message.lines().map(UnicodeWidthStr::width).max().unwrap_or(0);
    let width = u16::try_from(longest_line)
        .unwrap_or(u16::MAX)
        .max(u16::try_from(title.width()).unwrap_or(0))
        .saturating_add(4)
        .min(max_width);

    let inner_width = usize::from(width.saturating_sub(2).max(1));
    let wrapped: usize = message
        .lines()
        .map(|line| line.width().div_ceil(inner_width).max(1))
        .sum();
    let lines = u16::try_from(wrapped).unwrap_or(u16::MAX);

    let height = lines.saturating_add(2 + extra_lines).clamp(3, 12);
    (width, height)
}

/// Notice shown until any key is pressed.
pub struct NoticePopup<'a> {
    notice: &'a Notice,
}

impl<'a> NoticePopup<'a> {
    /// Popup for `notice`.
    #[must_use]
    pub const fn new(notice: &'a Notice) -> Self {
        Self { notice }
    }
}

impl Widget for NoticePopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" {} ", self.notice.title);
        let (width, height) = popup_size(area, &title, &self.notice.message, 1);
        let popup_area = centered(area, width, height);
        if popup_area.area() == 0 {
            return;
        }

        let color = StatusLevel::from(self.notice.level).color();
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_bottom(Line::from(" any key ").alignment(Alignment::Right))
            .border_style(Style::default().fg(color));

        let para = Paragraph::new(self.notice.message.as_str())
            .block(block)
            .wrap(Wrap { trim: true })
            .style(Style::default().add_modifier(Modifier::BOLD));

        Clear.render(popup_area, buf);
        para.render(popup_area, buf);
    }
}

/// Yes/no confirmation popup.
pub struct DialogPopup<'a> {
    dialog: &'a Dialog,
}

impl<'a> DialogPopup<'a> {
    /// Popup for `dialog`.
    #[must_use]
    pub const fn new(dialog: &'a Dialog) -> Self {
        Self { dialog }
    }
}

impl Widget for DialogPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" {} ", self.dialog.title);
        let (width, height) = popup_size(area, &title, &self.dialog.message, 2);
        let popup_area = centered(area, width.max(24), height);
        if popup_area.area() == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::Yellow));

        let mut lines: Vec<Line> = self
            .dialog
            .message
            .lines()
            .map(|line| Line::from(line.to_string()))
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("[y]", Style::default().fg(Color::Green)),
            Span::raw(" Yes   "),
            Span::styled("[n]", Style::default().fg(Color::Red)),
            Span::raw(" No"),
        ]));

        Clear.render(popup_area, buf);
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(popup_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_size_wraps_long_messages() {
        let area = Rect::new(0, 0, 80, 24);
        let message = "x".repeat(200);
        let (width, height) = popup_size(area, " Title ", &message, 0);
        assert_eq!(width, MAX_POPUP_WIDTH);
        assert!(height > 3);
    }

    #[test]
    fn test_popup_fits_small_terminal() {
        let area = Rect::new(0, 0, 20, 5);
        let (width, height) = popup_size(area, " Lesson Complete! ", "You earned 75 XP!", 1);
        assert!(width <= 18);
        assert!(height <= 12);
        let rect = centered(area, width, height);
        assert!(area.contains(rect.as_position()));
    }

    #[test]
    fn test_notice_renders_message() {
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        let notice = Notice::success("Saved", "Profile updated.");
        NoticePopup::new(&notice).render(area, &mut buf);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Profile updated."));
    }
}
