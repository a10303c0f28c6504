use iced::{
    Element,
    Length::Fill,
    widget::{button, column, row, scrollable, space, table, text, text_input},
};
use paddock_lib::{
    Crop, EditCursor, EntityId, Form, Notice, Store,
    binder::{self, Outcome},
};

use crate::components::{Action, form_row, page};

#[derive(Debug, Clone)]
pub enum Message {
    CommonNameInput(String),
    ScientificNameInput(String),
    CategoryInput(String),
    SeasonInput(String),
    FieldIdInput(String),
    SubmitPressed,
    ClearPressed,
    EditPressed(Crop),
    DeletePressed(EntityId),
}

#[derive(Debug, Default)]
pub struct CropPage {
    store: Store<Crop>,
    cursor: EditCursor<Crop>,
    common_name: String,
    scientific_name: String,
    category: String,
    season: String,
    field_id: String,
}

impl CropPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::CommonNameInput(value) => {
                self.common_name = value;
                Action::None
            }
            Message::ScientificNameInput(value) => {
                self.scientific_name = value;
                Action::None
            }
            Message::CategoryInput(value) => {
                self.category = value;
                Action::None
            }
            Message::SeasonInput(value) => {
                self.season = value;
                Action::None
            }
            Message::FieldIdInput(value) => {
                self.field_id = value;
                Action::None
            }
            Message::SubmitPressed => {
                let form = self.form();
                match binder::submit(&mut self.store, &mut self.cursor, &form) {
                    Ok(outcome) => {
                        self.reset_inputs();
                        Action::Notify(match outcome {
                            Outcome::Created => Notice::success("Crop added successfully!"),
                            Outcome::Updated => Notice::success("Crop updated successfully!"),
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
            Message::EditPressed(crop) => {
                self.common_name = crop.common_name.clone();
                self.scientific_name = crop.scientific_name.clone();
                self.category = crop.category.clone();
                self.season = crop.season.clone();
                self.field_id = crop.field_id.clone();
                self.cursor.start(crop);
                Action::None
            }
            Message::DeletePressed(id) => {
                let was_editing = self.cursor.editing().is_some_and(|crop| crop.id == id);
                binder::delete(&mut self.store, &mut self.cursor, id);
                if was_editing {
                    self.reset_inputs();
                }
                Action::Notify(Notice::info("Crop deleted successfully!"))
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let editing = self.cursor.is_editing();

        let form = column![
            text(if editing { "Update Crop" } else { "Add New Crop" }).size(18),
            form_row(
                "Common Name",
                text_input("Common Name", &self.common_name)
                    .on_input(Message::CommonNameInput)
                    .into(),
            ),
            form_row(
                "Scientific Name",
                text_input("Scientific Name", &self.scientific_name)
                    .on_input(Message::ScientificNameInput)
                    .into(),
            ),
            form_row(
                "Category",
                text_input("Category", &self.category)
                    .on_input(Message::CategoryInput)
                    .into(),
            ),
            form_row(
                "Season",
                text_input("Season", &self.season)
                    .on_input(Message::SeasonInput)
                    .into(),
            ),
            form_row(
                "Field ID",
                text_input("Field ID", &self.field_id)
                    .on_input(Message::FieldIdInput)
                    .into(),
            ),
            row![
                space::horizontal(),
                button("Clear").on_press(Message::ClearPressed),
                button(if editing { "Update Crop" } else { "Add Crop" })
                    .on_press(Message::SubmitPressed),
            ]
            .spacing(8),
        ]
        .spacing(12);

        let columns = [
            table::column(text("Common Name"), |crop: Crop| text(crop.common_name)),
            table::column(text("Category"), |crop: Crop| text(crop.category)),
            table::column(text("Season"), |crop: Crop| text(crop.season)),
            table::column(text("Actions"), |crop: Crop| {
                let id = crop.id;
                row![
                    button("Edit")
                        .style(button::subtle)
                        .on_press(Message::EditPressed(crop)),
                    button("Delete")
                        .style(button::danger)
                        .on_press(Message::DeletePressed(id)),
                ]
                .spacing(8)
            }),
        ];

        let list = column![
            text("Crop List").size(18),
            scrollable(table(columns, self.store.entries().to_vec()).width(Fill)),
        ]
        .spacing(12);

        page(
            "Crop Management",
            "Add, update, or delete crop information",
            form.into(),
            list.into(),
        )
    }

    fn form(&self) -> Form {
        Form::new()
            .with("common_name", self.common_name.clone())
            .with("scientific_name", self.scientific_name.clone())
            .with("category", self.category.clone())
            .with("season", self.season.clone())
            .with("field_id", self.field_id.clone())
    }

    fn reset_inputs(&mut self) {
        self.common_name.clear();
        self.scientific_name.clear();
        self.category.clear();
        self.season.clear();
        self.field_id.clear();
    }
}
