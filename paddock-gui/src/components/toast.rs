//! Auto-dismissing acknowledgement stack, rendered above the active page.

use std::time::Duration;

use iced::{
    Element, Task, Theme,
    widget::{column, container, text},
};
use paddock_lib::notice::{Notice, Severity};
use tokio::time::sleep;

const DISMISS_AFTER: Duration = Duration::from_secs(3);

#[derive(Debug, Clone)]
pub enum Message {
    Expired(usize),
}

#[derive(Debug, Default)]
pub struct Toasts {
    entries: Vec<(usize, Notice)>,
    next_id: usize,
}

impl Toasts {
    /// Show a notice and schedule its removal.
    pub fn push(&mut self, notice: Notice) -> Task<Message> {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.push((id, notice));

        Task::perform(sleep(DISMISS_AFTER), move |_| Message::Expired(id))
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Expired(id) => self.entries.retain(|(entry_id, _)| *entry_id != id),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        column(self.entries.iter().map(|(_, notice)| toast(notice)))
            .spacing(8)
            .padding(16)
            .into()
    }
}

fn toast(notice: &Notice) -> Element<'_, Message> {
    container(text(notice.message()))
        .padding(10)
        .style(style(notice.severity()))
        .into()
}

fn style(severity: Severity) -> impl Fn(&Theme) -> container::Style {
    move |theme| {
        let palette = theme.extended_palette();
        let pair = match severity {
            Severity::Success => palette.success.base,
            Severity::Info => palette.primary.base,
            Severity::Error => palette.danger.base,
        };

        container::Style {
            background: Some(pair.color.into()),
            text_color: Some(pair.text),
            border: iced::border::rounded(4),
            ..container::Style::default()
        }
    }
}
