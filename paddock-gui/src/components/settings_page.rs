use iced::{
    Element,
    Length::Fill,
    widget::{button, column, combo_box, container, row, rule, space, text, text_input},
};
use paddock_lib::{Account, Credentials, Notice, StaffRole};
use strum::IntoEnumIterator;
use tracing::info;

use crate::components::{Action, form_row, modal, page};

#[derive(Debug, Clone)]
pub enum Message {
    RoleSelected(StaffRole),
    RoleCodeInput(String),
    SettingsSubmitPressed,
    CurrentPasswordInput(String),
    NewPasswordInput(String),
    ConfirmPasswordInput(String),
    PasswordSubmitPressed,
    DeleteAccountPressed,
    DeleteConfirmed,
    DeleteCancelled,
}

#[derive(Debug)]
pub struct SettingsPage {
    account: Account,
    credentials: Credentials,
    role: Option<StaffRole>,
    role_state: combo_box::State<StaffRole>,
    role_code: String,
    current_password: String,
    new_password: String,
    confirm_password: String,
    confirming_delete: bool,
}

impl SettingsPage {
    pub fn new() -> Self {
        let account = Account::default();

        Self {
            role: Some(*account.role()),
            role_state: combo_box::State::new(StaffRole::iter().collect()),
            role_code: account.role_code().clone(),
            account,
            credentials: Credentials::default(),
            current_password: String::new(),
            new_password: String::new(),
            confirm_password: String::new(),
            confirming_delete: false,
        }
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::RoleSelected(role) => {
                self.role = Some(role);
                Action::None
            }
            Message::RoleCodeInput(value) => {
                self.role_code = value;
                Action::None
            }
            Message::SettingsSubmitPressed => {
                let role = self.role.unwrap_or(*self.account.role());
                self.account.update(role, self.role_code.clone());
                Action::Notify(Notice::success("Settings updated successfully"))
            }
            Message::CurrentPasswordInput(value) => {
                self.current_password = value;
                Action::None
            }
            Message::NewPasswordInput(value) => {
                self.new_password = value;
                Action::None
            }
            Message::ConfirmPasswordInput(value) => {
                self.confirm_password = value;
                Action::None
            }
            Message::PasswordSubmitPressed => {
                match self
                    .credentials
                    .change(&self.new_password, &self.confirm_password)
                {
                    Ok(()) => {
                        self.current_password.clear();
                        self.new_password.clear();
                        self.confirm_password.clear();
                        Action::Notify(Notice::success("Password changed successfully"))
                    }
                    Err(err) => Action::Notify(Notice::error(err.to_string())),
                }
            }
            Message::DeleteAccountPressed => {
                self.confirming_delete = true;
                Action::None
            }
            Message::DeleteCancelled => {
                self.confirming_delete = false;
                Action::None
            }
            Message::DeleteConfirmed => {
                info!("account deleted");
                *self = Self::new();
                Action::Notify(Notice::info("Account deleted successfully"))
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let general = column![
            text("General Settings").size(18),
            form_row("Email", text(self.account.email().as_str()).width(Fill).into()),
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
            form_row(
                "Role Code",
                text_input("Role Code", &self.role_code)
                    .on_input(Message::RoleCodeInput)
                    .into(),
            ),
            row![
                space::horizontal(),
                button("Save Changes").on_press(Message::SettingsSubmitPressed),
            ],
        ]
        .spacing(12);

        let security = column![
            text("Security").size(18),
            form_row(
                "Current Password",
                text_input("Current Password", &self.current_password)
                    .secure(true)
                    .on_input(Message::CurrentPasswordInput)
                    .into(),
            ),
            form_row(
                "New Password",
                text_input("New Password", &self.new_password)
                    .secure(true)
                    .on_input(Message::NewPasswordInput)
                    .into(),
            ),
            form_row(
                "Confirm Password",
                text_input("Confirm Password", &self.confirm_password)
                    .secure(true)
                    .on_input(Message::ConfirmPasswordInput)
                    .into(),
            ),
            row![
                space::horizontal(),
                button("Change Password").on_press(Message::PasswordSubmitPressed),
            ],
            rule::horizontal(1),
            row![
                text("Remove this account and all of its settings."),
                space::horizontal(),
                button("Delete Account")
                    .style(button::danger)
                    .on_press(Message::DeleteAccountPressed),
            ]
            .spacing(8),
        ]
        .spacing(12);

        let content = page(
            "Account Settings",
            "Manage your account preferences and security",
            general.into(),
            security.into(),
        );

        if self.confirming_delete {
            modal(
                content,
                confirm_delete_dialog(),
                Some(Message::DeleteCancelled),
            )
        } else {
            content
        }
    }
}

fn confirm_delete_dialog<'a>() -> Element<'a, Message> {
    container(column![
        text("Delete account?").size(18),
        text("Are you sure you want to delete your account? This action cannot be undone."),
        space::vertical(),
        row![
            space::horizontal(),
            button("Cancel").on_press(Message::DeleteCancelled),
            button("Delete")
                .style(button::danger)
                .on_press(Message::DeleteConfirmed),
        ]
        .spacing(8),
    ]
    .spacing(12))
    .padding(20)
    .width(400)
    .height(200)
    .style(container::rounded_box)
    .into()
}
