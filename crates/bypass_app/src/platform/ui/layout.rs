use ratatui::layout::{Constraint, Layout, Rect};

pub struct Areas {
    pub title: Rect,
    pub input: Rect,
    pub submit: Rect,
    /// Error panel; left empty unless the last exchange failed.
    pub status: Rect,
    /// Results panel; left empty until an exchange succeeds.
    pub body: Rect,
    pub help: Rect,
}

pub fn split(area: Rect) -> Areas {
    let [title, input, submit, status, body, help] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);

    Areas {
        title,
        input,
        submit,
        status,
        body,
        help,
    }
}
