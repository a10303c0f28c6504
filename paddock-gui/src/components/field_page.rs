use iced::{
    Element,
    Length::Fill,
    widget::{button, column, row, scrollable, space, table, text, text_input},
};
use paddock_lib::{
    EditCursor, EntityId, Field, Form, Notice, Store,
    binder::{self, Outcome},
};

use crate::components::{Action, form_row, page};

#[derive(Debug, Clone)]
pub enum Message {
    NameInput(String),
    SizeInput(String),
    LatitudeInput(String),
    LongitudeInput(String),
    SubmitPressed,
    ClearPressed,
    EditPressed(Field),
    DeletePressed(EntityId),
}

#[derive(Debug, Default)]
pub struct FieldPage {
    store: Store<Field>,
    cursor: EditCursor<Field>,
    name: String,
    size: String,
    latitude: String,
    longitude: String,
}

impl FieldPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::NameInput(value) => {
                self.name = value;
                Action::None
            }
            Message::SizeInput(value) => {
                self.size = value;
                Action::None
            }
            Message::LatitudeInput(value) => {
                self.latitude = value;
                Action::None
            }
            Message::LongitudeInput(value) => {
                self.longitude = value;
                Action::None
            }
            Message::SubmitPressed => {
                let form = self.form();
                match binder::submit(&mut self.store, &mut self.cursor, &form) {
                    Ok(outcome) => {
                        self.reset_inputs();
                        Action::Notify(match outcome {
                            Outcome::Created => Notice::success("Field added successfully!"),
                            Outcome::Updated => Notice::success("Field updated successfully!"),
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
            Message::EditPressed(field) => {
                self.name = field.name.clone();
                self.size = field.size.to_string();
                self.latitude = field.location.latitude.to_string();
                self.longitude = field.location.longitude.to_string();
                self.cursor.start(field);
                Action::None
            }
            Message::DeletePressed(id) => {
                let was_editing = self.cursor.editing().is_some_and(|field| field.id == id);
                binder::delete(&mut self.store, &mut self.cursor, id);
                if was_editing {
                    self.reset_inputs();
                }
                Action::Notify(Notice::info("Field deleted successfully!"))
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let editing = self.cursor.is_editing();

        let form = column![
            text(if editing { "Update Field" } else { "Add New Field" }).size(18),
            form_row(
                "Name",
                text_input("Name", &self.name)
                    .on_input(Message::NameInput)
                    .into(),
            ),
            form_row(
                "Size (acres)",
                text_input("Size", &self.size)
                    .on_input(Message::SizeInput)
                    .into(),
            ),
            form_row(
                "Latitude",
                text_input("Latitude", &self.latitude)
                    .on_input(Message::LatitudeInput)
                    .into(),
            ),
            form_row(
                "Longitude",
                text_input("Longitude", &self.longitude)
                    .on_input(Message::LongitudeInput)
                    .into(),
            ),
            row![
                space::horizontal(),
                button("Clear").on_press(Message::ClearPressed),
                button(if editing { "Update Field" } else { "Add Field" })
                    .on_press(Message::SubmitPressed),
            ]
            .spacing(8),
        ]
        .spacing(12);

        let columns = [
            table::column(text("Name"), |field: Field| text(field.name)),
            table::column(text("Size"), |field: Field| text(field.size_label())),
            table::column(text("Location"), |field: Field| text(field.location_label())),
            table::column(text("Actions"), |field: Field| {
                let id = field.id;
                row![
                    button("Edit")
                        .style(button::subtle)
                        .on_press(Message::EditPressed(field)),
                    button("Delete")
                        .style(button::danger)
                        .on_press(Message::DeletePressed(id)),
                ]
                .spacing(8)
            }),
        ];

        let list = column![
            text("Field List").size(18),
            scrollable(table(columns, self.store.entries().to_vec()).width(Fill)),
        ]
        .spacing(12);

        page(
            "Field Management",
            "Add, update, or delete field information",
            form.into(),
            list.into(),
        )
    }

    fn form(&self) -> Form {
        Form::new()
            .with("name", self.name.clone())
            .with("size", self.size.clone())
            .with("latitude", self.latitude.clone())
            .with("longitude", self.longitude.clone())
    }

    fn reset_inputs(&mut self) {
        self.name.clear();
        self.size.clear();
        self.latitude.clear();
        self.longitude.clear();
    }
}
