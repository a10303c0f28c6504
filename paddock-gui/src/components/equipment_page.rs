use iced::{
    Element,
    Length::Fill,
    widget::{button, column, combo_box, row, scrollable, space, table, text, text_input},
};
use paddock_lib::{
    Availability, EditCursor, EntityId, Equipment, EquipmentKind, Form, Notice, Store,
    binder::{self, Outcome},
};
use strum::IntoEnumIterator;

use crate::components::{Action, form_row, page};

#[derive(Debug, Clone)]
pub enum Message {
    NameInput(String),
    KindSelected(EquipmentKind),
    StatusSelected(Availability),
    StaffIdInput(String),
    FieldIdInput(String),
    SubmitPressed,
    ClearPressed,
    EditPressed(Equipment),
    DeletePressed(EntityId),
}

#[derive(Debug)]
pub struct EquipmentPage {
    store: Store<Equipment>,
    cursor: EditCursor<Equipment>,
    name: String,
    kind: Option<EquipmentKind>,
    kind_state: combo_box::State<EquipmentKind>,
    status: Option<Availability>,
    status_state: combo_box::State<Availability>,
    staff_id: String,
    field_id: String,
}

impl EquipmentPage {
    pub fn new() -> Self {
        Self {
            store: Store::new(),
            cursor: EditCursor::default(),
            name: String::new(),
            kind: None,
            kind_state: combo_box::State::new(EquipmentKind::iter().collect()),
            status: None,
            status_state: combo_box::State::new(Availability::iter().collect()),
            staff_id: String::new(),
            field_id: String::new(),
        }
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::NameInput(value) => {
                self.name = value;
                Action::None
            }
            Message::KindSelected(kind) => {
                self.kind = Some(kind);
                Action::None
            }
            Message::StatusSelected(status) => {
                self.status = Some(status);
                Action::None
            }
            Message::StaffIdInput(value) => {
                self.staff_id = value;
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
                            Outcome::Created => Notice::success("Equipment added successfully!"),
                            Outcome::Updated => Notice::success("Equipment updated successfully!"),
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
            Message::EditPressed(equipment) => {
                self.name = equipment.name.clone();
                self.kind = Some(equipment.kind);
                self.status = Some(equipment.status);
                self.staff_id = equipment.staff_id.clone();
                self.field_id = equipment.field_id.clone();
                self.cursor.start(equipment);
                Action::None
            }
            Message::DeletePressed(id) => {
                let was_editing = self
                    .cursor
                    .editing()
                    .is_some_and(|equipment| equipment.id == id);
                binder::delete(&mut self.store, &mut self.cursor, id);
                if was_editing {
                    self.reset_inputs();
                }
                Action::Notify(Notice::info("Equipment deleted successfully!"))
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let editing = self.cursor.is_editing();

        let form = column![
            text(if editing {
                "Update Equipment"
            } else {
                "Add New Equipment"
            })
            .size(18),
            form_row(
                "Name",
                text_input("Name", &self.name)
                    .on_input(Message::NameInput)
                    .into(),
            ),
            form_row(
                "Type",
                combo_box(
                    &self.kind_state,
                    "Select a type",
                    self.kind.as_ref(),
                    Message::KindSelected,
                )
                .into(),
            ),
            form_row(
                "Status",
                combo_box(
                    &self.status_state,
                    "Select a status",
                    self.status.as_ref(),
                    Message::StatusSelected,
                )
                .into(),
            ),
            form_row(
                "Staff ID",
                text_input("Staff ID", &self.staff_id)
                    .on_input(Message::StaffIdInput)
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
                button(if editing {
                    "Update Equipment"
                } else {
                    "Add Equipment"
                })
                .on_press(Message::SubmitPressed),
            ]
            .spacing(8),
        ]
        .spacing(12);

        let columns = [
            table::column(text("Name"), |equipment: Equipment| text(equipment.name)),
            table::column(text("Type"), |equipment: Equipment| {
                text(equipment.kind.to_string())
            }),
            table::column(text("Status"), |equipment: Equipment| {
                text(equipment.status.to_string())
            }),
            table::column(text("Actions"), |equipment: Equipment| {
                let id = equipment.id;
                row![
                    button("Edit")
                        .style(button::subtle)
                        .on_press(Message::EditPressed(equipment)),
                    button("Delete")
                        .style(button::danger)
                        .on_press(Message::DeletePressed(id)),
                ]
                .spacing(8)
            }),
        ];

        let list = column![
            text("Equipment List").size(18),
            scrollable(table(columns, self.store.entries().to_vec()).width(Fill)),
        ]
        .spacing(12);

        page(
            "Equipment Management",
            "Add, update, or delete equipment information",
            form.into(),
            list.into(),
        )
    }

    fn form(&self) -> Form {
        let mut form = Form::new()
            .with("name", self.name.clone())
            .with("staff_id", self.staff_id.clone())
            .with("field_id", self.field_id.clone());

        if let Some(kind) = self.kind {
            form = form.with("kind", kind.to_string());
        }
        if let Some(status) = self.status {
            form = form.with("status", status.to_string());
        }

        form
    }

    fn reset_inputs(&mut self) {
        self.name.clear();
        self.kind = None;
        self.status = None;
        self.staff_id.clear();
        self.field_id.clear();
    }
}
