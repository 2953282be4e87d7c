use super::*;
use crate::search::{results_view, ProfileRow, ResultsView};
use ratatui::widgets::{List, ListItem, ListState};

/// Drawn in front of a row when the profile has an avatar.
const AVATAR_MARKER: &str = "◉ ";

pub(super) fn render_results(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .padding(Padding::horizontal(1));

    match results_view(&app.search) {
        ResultsView::Empty => {
            let hint = Paragraph::new("Type at least two characters to search")
                .style(Style::default().fg(Color::DarkGray))
                .block(block.title(" Results "));
            frame.render_widget(hint, area);
        }
        ResultsView::Searching => {
            let inner = block.inner(area);
            frame.render_widget(block.title(" Results "), area);
            let throbber = throbber_widgets_tui::Throbber::default()
                .label("Searching...")
                .style(Style::default().fg(Color::Yellow))
                .throbber_style(Style::default().fg(Color::Yellow))
                .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
                .use_type(throbber_widgets_tui::WhichUse::Spin);
            frame.render_stateful_widget(throbber, inner, &mut app.throbber_state);
        }
        ResultsView::Failed(message) => {
            let error = Paragraph::new(message)
                .style(Style::default().fg(Color::Red))
                .block(block.title(" Results "));
            frame.render_widget(error, area);
        }
        ResultsView::NoUsers => {
            let empty = Paragraph::new("No users found")
                .style(Style::default().fg(Color::Gray))
                .block(block.title(" Results "));
            frame.render_widget(empty, area);
        }
        ResultsView::Users(rows) => {
            let title = format!(" Results ({}) ", rows.len());
            let items: Vec<ListItem> = rows.iter().map(profile_item).collect();
            let list = List::new(items)
                .block(block.title(title))
                .highlight_style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("▶ ");

            let mut state = ListState::default();
            state.select(Some(app.selected_index));
            frame.render_stateful_widget(list, area, &mut state);
        }
    }
}

fn profile_item(row: &ProfileRow) -> ListItem<'static> {
    let mut spans = Vec::with_capacity(6);
    if row.avatar_url.is_some() {
        spans.push(Span::styled(AVATAR_MARKER, Style::default().fg(Color::Magenta)));
    }
    spans.push(Span::styled(
        row.name.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::raw(" "));
    spans.push(Span::styled(row.handle.clone(), Style::default().fg(Color::Gray)));
    spans.push(Span::styled(
        format!("  {} followers", row.followers),
        Style::default().fg(Color::Cyan),
    ));
    spans.push(Span::styled(
        format!("  {} following", row.following),
        Style::default().fg(Color::Cyan),
    ));
    ListItem::new(Line::from(spans))
}
