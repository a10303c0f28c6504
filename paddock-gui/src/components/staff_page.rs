use iced::{
    Element,
    Length::Fill,
    widget::{button, column, combo_box, row, scrollable, space, table, text, text_input},
};
use paddock_lib::{
    EditCursor, EntityId, Form, Gender, Notice, Staff, StaffRole, Store,
    binder::{self, Outcome},
};
use strum::IntoEnumIterator;

use crate::components::{Action, form_row, page};

#[derive(Debug, Clone)]
pub enum Message {
    FirstNameInput(String),
    LastNameInput(String),
    DesignationInput(String),
    GenderSelected(Gender),
    JoinedDateInput(String),
    DateOfBirthInput(String),
    BuildingNoInput(String),
    LaneInput(String),
    CityInput(String),
    StateInput(String),
    PostalCodeInput(String),
    ContactNoInput(String),
    EmailInput(String),
    RoleSelected(StaffRole),
    SubmitPressed,
    ClearPressed,
    EditPressed(Staff),
    DeletePressed(EntityId),
}

#[derive(Debug)]
pub struct StaffPage {
    store: Store<Staff>,
    cursor: EditCursor<Staff>,
    first_name: String,
    last_name: String,
    designation: String,
    gender: Option<Gender>,
    gender_state: combo_box::State<Gender>,
    joined_date: String,
    date_of_birth: String,
    building_no: String,
    lane: String,
    city: String,
    state: String,
    postal_code: String,
    contact_no: String,
    email: String,
    role: Option<StaffRole>,
    role_state: combo_box::State<StaffRole>,
}

impl StaffPage {
    pub fn new() -> Self {
        Self {
            store: Store::new(),
            cursor: EditCursor::default(),
            first_name: String::new(),
            last_name: String::new(),
            designation: String::new(),
            gender: None,
            gender_state: combo_box::State::new(Gender::iter().collect()),
            joined_date: String::new(),
            date_of_birth: String::new(),
            building_no: String::new(),
            lane: String::new(),
            city: String::new(),
            state: String::new(),
            postal_code: String::new(),
            contact_no: String::new(),
            email: String::new(),
            role: None,
            role_state: combo_box::State::new(StaffRole::iter().collect()),
        }
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::FirstNameInput(value) => {
                self.first_name = value;
                Action::None
            }
            Message::LastNameInput(value) => {
                self.last_name = value;
                Action::None
            }
            Message::DesignationInput(value) => {
                self.designation = value;
                Action::None
            }
            Message::GenderSelected(gender) => {
                self.gender = Some(gender);
                Action::None
            }
            Message::JoinedDateInput(value) => {
                self.joined_date = value;
                Action::None
            }
            Message::DateOfBirthInput(value) => {
                self.date_of_birth = value;
                Action::None
            }
            Message::BuildingNoInput(value) => {
                self.building_no = value;
                Action::None
            }
            Message::LaneInput(value) => {
                self.lane = value;
                Action::None
            }
            Message::CityInput(value) => {
                self.city = value;
                Action::None
            }
            Message::StateInput(value) => {
                self.state = value;
                Action::None
            }
            Message::PostalCodeInput(value) => {
                self.postal_code = value;
                Action::None
            }
            Message::ContactNoInput(value) => {
                self.contact_no = value;
                Action::None
            }
            Message::EmailInput(value) => {
                self.email = value;
                Action::None
            }
            Message::RoleSelected(role) => {
                self.role = Some(role);
                Action::None
            }
            Message::SubmitPressed => {
                let form = self.form();
                match binder::submit(&mut self.store, &mut self.cursor, &form) {
                    Ok(outcome) => {
                        self.reset_inputs();
                        Action::Notify(match outcome {
                            Outcome::Created => Notice::success("Staff added successfully!"),
                            Outcome::Updated => Notice::success("Staff updated successfully!"),
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
            Message::EditPressed(staff) => {
                self.first_name = staff.first_name.clone();
                self.last_name = staff.last_name.clone();
                self.designation = staff.designation.clone();
                self.gender = Some(staff.gender);
                self.joined_date = staff.joined_date.to_string();
                self.date_of_birth = staff.date_of_birth.to_string();
                self.building_no = staff.address.building_no.clone();
                self.lane = staff.address.lane.clone();
                self.city = staff.address.city.clone();
                self.state = staff.address.state.clone();
                self.postal_code = staff.address.postal_code.clone();
                self.contact_no = staff.contact_no.clone();
                self.email = staff.email.clone();
                self.role = Some(staff.role);
                self.cursor.start(staff);
                Action::None
            }
            Message::DeletePressed(id) => {
                let was_editing = self.cursor.editing().is_some_and(|staff| staff.id == id);
                binder::delete(&mut self.store, &mut self.cursor, id);
                if was_editing {
                    self.reset_inputs();
                }
                Action::Notify(Notice::info("Staff deleted successfully!"))
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let editing = self.cursor.is_editing();

        let form = column![
            text(if editing { "Update Staff" } else { "Add New Staff" }).size(18),
            form_row(
                "First Name",
                text_input("First Name", &self.first_name)
                    .on_input(Message::FirstNameInput)
                    .into(),
            ),
            form_row(
                "Last Name",
                text_input("Last Name", &self.last_name)
                    .on_input(Message::LastNameInput)
                    .into(),
            ),
            form_row(
                "Designation",
                text_input("Designation", &self.designation)
                    .on_input(Message::DesignationInput)
                    .into(),
            ),
            form_row(
                "Gender",
                combo_box(
                    &self.gender_state,
                    "Select a gender",
                    self.gender.as_ref(),
                    Message::GenderSelected,
                )
                .into(),
            ),
            form_row(
                "Joined Date",
                text_input("YYYY-MM-DD", &self.joined_date)
                    .on_input(Message::JoinedDateInput)
                    .into(),
            ),
            form_row(
                "Date of Birth",
                text_input("YYYY-MM-DD", &self.date_of_birth)
                    .on_input(Message::DateOfBirthInput)
                    .into(),
            ),
            form_row(
                "Building No",
                text_input("Building No", &self.building_no)
                    .on_input(Message::BuildingNoInput)
                    .into(),
            ),
            form_row(
                "Lane",
                text_input("Lane", &self.lane)
                    .on_input(Message::LaneInput)
                    .into(),
            ),
            form_row(
                "City",
                text_input("City", &self.city)
                    .on_input(Message::CityInput)
                    .into(),
            ),
            form_row(
                "State",
                text_input("State", &self.state)
                    .on_input(Message::StateInput)
                    .into(),
            ),
            form_row(
                "Postal Code",
                text_input("Postal Code", &self.postal_code)
                    .on_input(Message::PostalCodeInput)
                    .into(),
            ),
            form_row(
                "Contact No",
                text_input("Contact No", &self.contact_no)
                    .on_input(Message::ContactNoInput)
                    .into(),
            ),
            form_row(
                "Email",
                text_input("Email", &self.email)
                    .on_input(Message::EmailInput)
                    .into(),
            ),
            form_row(
                "Role",
                combo_box(
                    &self.role_state,
                    "Select a role",
                    self.role.as_ref(),
                    Message::RoleSelected,
                )
                .into(),
            ),
            row![
                space::horizontal(),
                button("Clear").on_press(Message::ClearPressed),
                button(if editing { "Update Staff" } else { "Add Staff" })
                    .on_press(Message::SubmitPressed),
            ]
            .spacing(8),
        ]
        .spacing(12);

        let columns = [
            table::column(text("Name"), |staff: Staff| text(staff.full_name())),
            table::column(text("Designation"), |staff: Staff| text(staff.designation)),
            table::column(text("Contact No"), |staff: Staff| text(staff.contact_no)),
            table::column(text("Role"), |staff: Staff| text(staff.role.to_string())),
            table::column(text("Actions"), |staff: Staff| {
                let id = staff.id;
                row![
                    button("Edit")
                        .style(button::subtle)
                        .on_press(Message::EditPressed(staff)),
                    button("Delete")
                        .style(button::danger)
                        .on_press(Message::DeletePressed(id)),
                ]
                .spacing(8)
            }),
        ];

        let list = column![
            text("Staff List").size(18),
            scrollable(table(columns, self.store.entries().to_vec()).width(Fill)),
        ]
        .spacing(12);

        page(
            "Staff Management",
            "Add, update, or delete staff information",
            scrollable(form).into(),
            list.into(),
        )
    }

    fn form(&self) -> Form {
        let mut form = Form::new()
            .with("first_name", self.first_name.clone())
            .with("last_name", self.last_name.clone())
            .with("designation", self.designation.clone())
            .with("joined_date", self.joined_date.clone())
            .with("date_of_birth", self.date_of_birth.clone())
            .with("building_no", self.building_no.clone())
            .with("lane", self.lane.clone())
            .with("city", self.city.clone())
            .with("state", self.state.clone())
            .with("postal_code", self.postal_code.clone())
            .with("contact_no", self.contact_no.clone())
            .with("email", self.email.clone());

        if let Some(gender) = self.gender {
            form = form.with("gender", gender.to_string());
        }
        if let Some(role) = self.role {
            form = form.with("role", role.to_string());
        }

        form
    }

    fn reset_inputs(&mut self) {
        self.first_name.clear();
        self.last_name.clear();
        self.designation.clear();
        self.gender = None;
        self.joined_date.clear();
        self.date_of_birth.clear();
        self.building_no.clear();
        self.lane.clear();
        self.city.clear();
        self.state.clear();
        self.postal_code.clear();
        self.contact_no.clear();
        self.email.clear();
        self.role = None;
    }
}
