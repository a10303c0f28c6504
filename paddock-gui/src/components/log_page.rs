use iced::{
    Element,
    Length::Fill,
    widget::{button, column, row, scrollable, space, table, text, text_input},
};
use paddock_lib::{
    EditCursor, EntityId, Form, LogEntry, Notice, Store,
    binder::{self, Outcome},
};

use crate::components::{Action, form_row, page};

#[derive(Debug, Clone)]
pub enum Message {
    DateInput(String),
    DetailsInput(String),
    SubmitPressed,
    ClearPressed,
    EditPressed(LogEntry),
    DeletePressed(EntityId),
}

#[derive(Debug, Default)]
pub struct LogPage {
    store: Store<LogEntry>,
    cursor: EditCursor<LogEntry>,
    date: String,
    details: String,
}

impl LogPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::DateInput(value) => {
                self.date = value;
                Action::None
            }
            Message::DetailsInput(value) => {
                self.details = value;
                Action::None
            }
            Message::SubmitPressed => {
                let form = self.form();
                match binder::submit(&mut self.store, &mut self.cursor, &form) {
                    Ok(outcome) => {
                        self.reset_inputs();
                        Action::Notify(match outcome {
                            Outcome::Created => Notice::success("Log added successfully!"),
                            Outcome::Updated => Notice::success("Log updated successfully!"),
                        })
                    }
                    Err(err) => Action::Notify(Notice::error(err.to_string())),
                }
            }
            Message::ClearPressed => {
                self.cursor.clear();
                self.reset_inputs();
                Action::None
            }
            Message::EditPressed(entry) => {
                self.date = entry.date.to_string();
                self.details = entry.details.clone();
                self.cursor.start(entry);
                Action::None
            }
            Message::DeletePressed(id) => {
                let was_editing = self.cursor.editing().is_some_and(|entry| entry.id == id);
                binder::delete(&mut self.store, &mut self.cursor, id);
                if was_editing {
                    self.reset_inputs();
                }
                Action::Notify(Notice::info("Log deleted successfully!"))
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let editing = self.cursor.is_editing();

        let form = column![
            text(if editing { "Update Log" } else { "Add New Log" }).size(18),
            form_row(
                "Date",
                text_input("YYYY-MM-DD", &self.date)
                    .on_input(Message::DateInput)
                    .into(),
            ),
            form_row(
                "Details",
                text_input("Details", &self.details)
                    .on_input(Message::DetailsInput)
                    .into(),
            ),
            row![
                space::horizontal(),
                button("Clear").on_press(Message::ClearPressed),
                button(if editing { "Update Log" } else { "Add Log" })
                    .on_press(Message::SubmitPressed),
            ]
            .spacing(8),
        ]
        .spacing(12);

        let columns = [
            table::column(text("Date"), |entry: LogEntry| text(entry.date.to_string())),
            table::column(text("Details"), |entry: LogEntry| text(entry.details)),
            table::column(text("Actions"), |entry: LogEntry| {
                let id = entry.id;
                row![
                    button("Edit")
                        .style(button::subtle)
                        .on_press(Message::EditPressed(entry)),
                    button("Delete")
                        .style(button::danger)
                        .on_press(Message::DeletePressed(id)),
                ]
                .spacing(8)
            }),
        ];

        let list = column![
            text("Log List").size(18),
            scrollable(table(columns, self.store.entries().to_vec()).width(Fill)),
        ]
        .spacing(12);

        page(
            "Log Management",
            "Add, update, or delete log information",
            form.into(),
            list.into(),
        )
    }

    fn form(&self) -> Form {
        Form::new()
            .with("date", self.date.clone())
            .with("details", self.details.clone())
    }

    fn reset_inputs(&mut self) {
        self.date.clear();
        self.details.clear();
    }
}
