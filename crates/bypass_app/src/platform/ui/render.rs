use bypass_core::{AppViewModel, ResultView};
use ratatui::style::Stylize;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use super::constants::{HELP_IDLE, HELP_RESULT, INPUT_PLACEHOLDER, TITLE};
use super::layout;

/// Pure projection of the view model onto the frame.
pub fn render(frame: &mut Frame, view: &AppViewModel) {
    let areas = layout::split(frame.area());

    frame.render_widget(Paragraph::new(TITLE).bold().centered(), areas.title);

    let input_line = if view.input.is_empty() {
        Line::from(INPUT_PLACEHOLDER).dim()
    } else if view.loading {
        // Frozen while the exchange is in flight.
        Line::from(view.input.as_str()).dim()
    } else {
        Line::from(view.input.as_str())
    };
    frame.render_widget(
        Paragraph::new(input_line).block(Block::bordered().title("Ad Link")),
        areas.input,
    );
    if !view.loading {
        let max_text = usize::from(areas.input.width.saturating_sub(2));
        let x = areas.input.x + 1 + view.input.chars().count().min(max_text) as u16;
        frame.set_cursor_position((x, areas.input.y + 1));
    }

    frame.render_widget(
        Paragraph::new(view.submit_label).bold().centered(),
        areas.submit,
    );

    if let Some(error) = &view.error {
        frame.render_widget(
            Paragraph::new(error.as_str())
                .red()
                .bold()
                .wrap(Wrap { trim: true }),
            areas.status,
        );
    }

    if let Some(result) = &view.result {
        frame.render_widget(
            Paragraph::new(result_lines(result))
                .block(Block::bordered().title("Results"))
                .wrap(Wrap { trim: false }),
            areas.body,
        );
    }

    let help = if view.result.is_some() {
        HELP_RESULT
    } else {
        HELP_IDLE
    };
    frame.render_widget(Paragraph::new(help).dim(), areas.help);
}

/// Lines of the results panel, in presentation order: the two links,
/// then whichever metadata lines exist, then the warnings.
fn result_lines(result: &ResultView) -> Vec<Line<'_>> {
    let mut lines = vec![
        Line::from(vec![
            Span::from("Original Link: ").bold(),
            Span::from(result.original_url.as_str()),
        ]),
        Line::from(vec![
            Span::from("Bypassed Link: ").bold(),
            Span::from(result.final_url.as_str()),
        ]),
    ];

    if let Some(title) = &result.title {
        lines.push(Line::from(vec![
            Span::from("Title: ").bold(),
            Span::from(title.as_str()),
        ]));
    }
    if let Some(description) = &result.description {
        lines.push(Line::from(vec![
            Span::from("Description: ").bold(),
            Span::from(description.as_str()),
        ]));
    }

    if !result.warnings.is_empty() {
        lines.push(Line::from(Span::from("Warnings:").bold().yellow()));
        for warning in &result.warnings {
            lines.push(Line::from(format!("  - {warning}")).yellow());
        }
    }

    lines
}
