use iced::{
    Element,
    Length::Fill,
    widget::{button, column, combo_box, row, scrollable, space, table, text, text_input},
};
use paddock_lib::{
    Availability, EditCursor, EntityId, Form, Notice, Store, Vehicle,
    binder::{self, Outcome},
};
use strum::IntoEnumIterator;

use crate::components::{Action, form_row, page};

#[derive(Debug, Clone)]
pub enum Message {
    LicenseNumberInput(String),
    CategoryInput(String),
    FuelTypeInput(String),
    StatusSelected(Availability),
    StaffIdInput(String),
    RemarkInput(String),
    SubmitPressed,
    ClearPressed,
    EditPressed(Vehicle),
    DeletePressed(EntityId),
}

#[derive(Debug)]
pub struct VehiclePage {
    store: Store<Vehicle>,
    cursor: EditCursor<Vehicle>,
    license_number: String,
    category: String,
    fuel_type: String,
    status: Option<Availability>,
    status_state: combo_box::State<Availability>,
    staff_id: String,
    remark: String,
}

impl VehiclePage {
    pub fn new() -> Self {
        Self {
            store: Store::new(),
            cursor: EditCursor::default(),
            license_number: String::new(),
            category: String::new(),
            fuel_type: String::new(),
            status: None,
            status_state: combo_box::State::new(Availability::iter().collect()),
            staff_id: String::new(),
            remark: String::new(),
        }
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::LicenseNumberInput(value) => {
                self.license_number = value;
                Action::None
            }
            Message::CategoryInput(value) => {
                self.category = value;
                Action::None
            }
            Message::FuelTypeInput(value) => {
                self.fuel_type = value;
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
            Message::RemarkInput(value) => {
                self.remark = value;
                Action::None
            }
            Message::SubmitPressed => {
                let form = self.form();
                match binder::submit(&mut self.store, &mut self.cursor, &form) {
                    Ok(outcome) => {
                        self.reset_inputs();
                        Action::Notify(match outcome {
                            Outcome::Created => Notice::success("Vehicle added successfully!"),
                            Outcome::Updated => Notice::success("Vehicle updated successfully!"),
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
            Message::EditPressed(vehicle) => {
                self.license_number = vehicle.license_number.clone();
                self.category = vehicle.category.clone();
                self.fuel_type = vehicle.fuel_type.clone();
                self.status = Some(vehicle.status);
                self.staff_id = vehicle.staff_id.clone();
                self.remark = vehicle.remark.clone();
                self.cursor.start(vehicle);
                Action::None
            }
            Message::DeletePressed(id) => {
                let was_editing = self.cursor.editing().is_some_and(|vehicle| vehicle.id == id);
                binder::delete(&mut self.store, &mut self.cursor, id);
                if was_editing {
                    self.reset_inputs();
                }
                Action::Notify(Notice::info("Vehicle deleted successfully!"))
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let editing = self.cursor.is_editing();

        let form = column![
            text(if editing { "Update Vehicle" } else { "Add New Vehicle" }).size(18),
            form_row(
                "License Number",
                text_input("License Number", &self.license_number)
                    .on_input(Message::LicenseNumberInput)
                    .into(),
            ),
            form_row(
                "Category",
                text_input("Category", &self.category)
                    .on_input(Message::CategoryInput)
                    .into(),
            ),
            form_row(
                "Fuel Type",
                text_input("Fuel Type", &self.fuel_type)
                    .on_input(Message::FuelTypeInput)
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
                "Remark",
                text_input("Remark", &self.remark)
                    .on_input(Message::RemarkInput)
                    .into(),
            ),
            row![
                space::horizontal(),
                button("Clear").on_press(Message::ClearPressed),
                button(if editing { "Update Vehicle" } else { "Add Vehicle" })
                    .on_press(Message::SubmitPressed),
            ]
            .spacing(8),
        ]
        .spacing(12);

        let columns = [
            table::column(text("License Number"), |vehicle: Vehicle| {
                text(vehicle.license_number)
            }),
            table::column(text("Category"), |vehicle: Vehicle| text(vehicle.category)),
            table::column(text("Fuel Type"), |vehicle: Vehicle| text(vehicle.fuel_type)),
            table::column(text("Status"), |vehicle: Vehicle| {
                text(vehicle.status.to_string())
            }),
            table::column(text("Actions"), |vehicle: Vehicle| {
                let id = vehicle.id;
                row![
                    button("Edit")
                        .style(button::subtle)
                        .on_press(Message::EditPressed(vehicle)),
                    button("Delete")
                        .style(button::danger)
                        .on_press(Message::DeletePressed(id)),
                ]
                .spacing(8)
            }),
        ];

        let list = column![
            text("Vehicle List").size(18),
            scrollable(table(columns, self.store.entries().to_vec()).width(Fill)),
        ]
        .spacing(12);

        page(
            "Vehicle Management",
            "Add, update, or delete vehicle information",
            form.into(),
            list.into(),
        )
    }

    fn form(&self) -> Form {
        let mut form = Form::new()
            .with("license_number", self.license_number.clone())
            .with("category", self.category.clone())
            .with("fuel_type", self.fuel_type.clone())
            .with("staff_id", self.staff_id.clone())
            .with("remark", self.remark.clone());

        if let Some(status) = self.status {
            form = form.with("status", status.to_string());
        }

        form
    }

    fn reset_inputs(&mut self) {
        self.license_number.clear();
        self.category.clear();
        self.fuel_type.clear();
        self.status = None;
        self.staff_id.clear();
        self.remark.clear();
    }
}
