use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use super::GroupsState;
use crate::common::text::count_label;
use crate::common::truncate_with_ellipsis;

pub fn render(groups: &GroupsState, spinner: &str, frame: &mut Frame, area: Rect) {
    let title = if groups.loading {
        " Groups ".to_string()
    } else {
        format!(" Groups ({}) ", count_label(groups.groups.len(), "group"))
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue))
        .title(title);

    if groups.loading {
        let para = Paragraph::new(Line::from(Span::styled(
            format!("{spinner} Loading groups…"),
            Style::default().fg(Color::Yellow),
        )))
        .block(block);
        frame.render_widget(para, area);
        return;
    }

    if groups.groups.is_empty() {
        let para = Paragraph::new(vec![
            Line::default(),
            Line::from(Span::styled(
                "No groups yet",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Press n to create your first group.",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .centered()
        .block(block);
        frame.render_widget(para, area);
        return;
    }

    let name_width = usize::from(area.width.saturating_sub(20));
    let items: Vec<ListItem> = groups
        .groups
        .iter()
        .map(|group| {
            let mut spans = vec![
                Span::raw(truncate_with_ellipsis(&group.name, name_width)),
                Span::styled(
                    format!("  by {}", group.creator.username),
                    Style::default().fg(Color::DarkGray),
                ),
            ];
            if groups.deleting == Some(group.id) {
                spans.push(Span::styled("  deleting…", Style::default().fg(Color::Red)));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("› ");
    let mut list_state = ListState::default().with_selected(Some(groups.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}
