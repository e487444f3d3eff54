use chrono::{DateTime, Utc};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use remind_core::models::{Reminder, format_due_date};

use super::RemindersState;
use crate::common::text::count_label;

pub fn render(state: &RemindersState, spinner: &str, frame: &mut Frame, area: Rect) {
    let title = match &state.group {
        Some(group) if !state.loading => format!(
            " {} · {} ",
            group.name,
            count_label(state.reminders.len(), "reminder")
        ),
        _ => " Reminders ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta))
        .title(title);

    if state.loading {
        let para = Paragraph::new(Line::from(Span::styled(
            format!("{spinner} Loading reminders…"),
            Style::default().fg(Color::Yellow),
        )))
        .block(block);
        frame.render_widget(para, area);
        return;
    }

    if state.reminders.is_empty() {
        let para = Paragraph::new(vec![
            Line::default(),
            Line::from(Span::styled(
                "No reminders yet",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Press n to add the first reminder to this group.",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .centered()
        .block(block);
        frame.render_widget(para, area);
        return;
    }

    let now = Utc::now();
    let items: Vec<ListItem> = state
        .reminders
        .iter()
        .map(|reminder| {
            let mut lines = vec![reminder_line(
                reminder,
                now,
                state.toggling.contains(&reminder.id),
            )];
            if let Some(description) = reminder.description_text() {
                lines.push(Line::from(Span::styled(
                    format!("      {description}"),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("› ");
    let mut list_state = ListState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Checkbox, title, due date, overdue flag, and creator.
pub fn reminder_line(reminder: &Reminder, now: DateTime<Utc>, pending: bool) -> Line<'static> {
    let overdue = reminder.is_overdue(now);

    let checkbox = if pending {
        "[~] "
    } else if reminder.completed {
        "[x] "
    } else {
        "[ ] "
    };

    let title_style = if reminder.completed {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    } else if overdue {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let mut spans = vec![
        Span::styled(checkbox, Style::default().fg(Color::Green)),
        Span::styled(reminder.title.clone(), title_style),
    ];

    if let Some(due) = reminder.due_date {
        let due_style = if overdue {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Cyan)
        };
        spans.push(Span::styled(format!("  due {}", format_due_date(due)), due_style));
    }
    if overdue {
        spans.push(Span::styled(
            "  OVERDUE",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }
    spans.push(Span::styled(
        format!("  by {}", reminder.creator.username),
        Style::default().fg(Color::DarkGray),
    ));

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use remind_core::models::{Creator, ReminderId};

    use super::*;

    fn reminder(due_date: Option<DateTime<Utc>>, completed: bool) -> Reminder {
        Reminder {
            id: ReminderId(7),
            title: "Trash".into(),
            description: None,
            group_id: None,
            created_by: None,
            completed,
            due_date,
            creator: Creator {
                id: None,
                username: "alice".into(),
            },
            created_at: None,
            updated_at: None,
        }
    }

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_overdue_line_is_flagged() {
        let now = Utc::now();
        let line = reminder_line(&reminder(Some(now - Duration::days(1)), false), now, false);
        let rendered = text(&line);
        assert!(rendered.starts_with("[ ] Trash"));
        assert!(rendered.contains("OVERDUE"));
        assert!(rendered.ends_with("by alice"));
    }

    #[test]
    fn test_completed_line_is_not_flagged() {
        let now = Utc::now();
        let line = reminder_line(&reminder(Some(now - Duration::days(1)), true), now, false);
        let rendered = text(&line);
        assert!(rendered.starts_with("[x] "));
        assert!(!rendered.contains("OVERDUE"));
    }

    #[test]
    fn test_no_due_date_line() {
        let line = reminder_line(&reminder(None, false), Utc::now(), true);
        let rendered = text(&line);
        assert!(rendered.starts_with("[~] "));
        assert!(!rendered.contains("due"));
    }
}
