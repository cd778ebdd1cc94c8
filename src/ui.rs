use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    session::{Session, SlotStatus},
    App, AppState,
};

const HORIZONTAL_MARGIN: u16 = 5;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.state {
            AppState::Intro => render_intro(area, buf),
            AppState::Typing => {
                if let Some(session) = &self.session {
                    render_session(session, area, buf);
                }
            }
            AppState::Results => {
                if let Some(score) = &self.score {
                    render_results(score.wpm_rounded(), score.accuracy_rounded(), area, buf);
                }
            }
        }
    }
}

fn render_intro(area: Rect, buf: &mut Buffer) {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let italic_style = Style::default().add_modifier(Modifier::ITALIC);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height / 2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let title = Paragraph::new(Span::styled("press space to start", bold_style))
        .alignment(Alignment::Center);
    title.render(chunks[1], buf);

    let hint =
        Paragraph::new(Span::styled("(esc)ape to quit", italic_style)).alignment(Alignment::Center);
    hint.render(chunks[2], buf);
}

fn render_session(session: &Session, area: Rect, buf: &mut Buffer) {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);

    let green_bold_style = Style::default().patch(bold_style).fg(Color::Green);
    let red_bold_style = Style::default().patch(bold_style).fg(Color::Red);
    let red_underlined_style = Style::default()
        .patch(red_bold_style)
        .add_modifier(Modifier::UNDERLINED);
    let skipped_style = Style::default()
        .add_modifier(Modifier::DIM | Modifier::CROSSED_OUT);
    let dim_bold_style = Style::default()
        .patch(bold_style)
        .add_modifier(Modifier::DIM);

    let max_chars_per_line = area.width.saturating_sub(HORIZONTAL_MARGIN * 2).max(1);
    let mut target_occupied_lines =
        ((session.target.width() as f64 / max_chars_per_line as f64).ceil() + 1.0) as u16;

    if session.target.width() <= max_chars_per_line as usize {
        target_occupied_lines = 1;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .constraints([
            Constraint::Length(
                ((area.height as f64 - target_occupied_lines as f64) / 2.0) as u16,
            ),
            Constraint::Length(target_occupied_lines),
            Constraint::Min(0),
        ])
        .split(area);

    let spans = session
        .slots
        .iter()
        .enumerate()
        .map(|(idx, slot)| {
            let mut style = match slot.status {
                SlotStatus::Typed => green_bold_style,
                SlotStatus::Error => red_bold_style,
                SlotStatus::SpaceError => red_underlined_style,
                SlotStatus::Skipped => skipped_style,
                SlotStatus::Remaining => dim_bold_style,
            };

            // A mis-typed space slot would be invisible; show a midpoint dot.
            let shown = match (slot.character, slot.status) {
                (' ', SlotStatus::Error) => "·".to_owned(),
                (c, _) => c.to_string(),
            };

            if idx == session.position {
                style = style.add_modifier(Modifier::UNDERLINED);
            }

            Span::styled(shown, style)
        })
        .collect::<Vec<Span>>();

    let widget = Paragraph::new(Line::from(spans))
        .alignment(if target_occupied_lines == 1 {
            // when the target is small enough to fit on one line
            // centering the text gives a nice zen feeling
            Alignment::Center
        } else {
            Alignment::Left
        })
        .wrap(Wrap { trim: true });

    widget.render(chunks[1], buf);
}

fn render_results(wpm: u32, accuracy: u32, area: Rect, buf: &mut Buffer) {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let italic_style = Style::default().add_modifier(Modifier::ITALIC);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .constraints([
            Constraint::Length(area.height / 2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let stats = Paragraph::new(Span::styled(
        format!("{} wpm   {}% acc", wpm, accuracy),
        bold_style,
    ))
    .alignment(Alignment::Center);
    stats.render(chunks[1], buf);

    let legend = Paragraph::new(Span::styled(
        "(space) retry / (esc)ape",
        italic_style,
    ))
    .alignment(Alignment::Center);
    legend.render(chunks[3], buf);
}
