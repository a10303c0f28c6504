use std::sync::Arc;

use iced::{
    Element,
    Length::Fill,
    Task, Theme, application,
    widget::{Column, bottom_right, button, column, container, row, rule, space, stack, text},
};
use paddock_lib::View;
use parking_lot::RwLock;
use strum::IntoEnumIterator;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::{
    components::{
        Action,
        crop_page::{self, CropPage},
        dashboard::Dashboard,
        equipment_page::{self, EquipmentPage},
        field_page::{self, FieldPage},
        log_page::{self, LogPage},
        settings_page::{self, SettingsPage},
        staff_page::{self, StaffPage},
        toast::{self, Toasts},
        vehicle_page::{self, VehiclePage},
    },
    config::{Cfg, GuiConfig},
};

pub mod components;
pub mod config;

fn main() -> iced::Result {
    application(App::new, App::update, App::view)
        .theme(App::theme)
        .title(App::title)
        .run()
}

#[derive(Debug, Clone)]
enum Message {
    ViewSelected(View),
    LogoutPressed,
    Toast(toast::Message),
    Crops(crop_page::Message),
    Staff(staff_page::Message),
    Fields(field_page::Message),
    Vehicles(vehicle_page::Message),
    Equipment(equipment_page::Message),
    Logs(log_page::Message),
    Settings(settings_page::Message),
}

struct App {
    cfg: Cfg,
    title: String,
    theme: Theme,
    page: Page,
    toasts: Toasts,
}

/// The currently mounted page.
///
/// Navigation rebuilds the variant from scratch, so a page's records live
/// exactly as long as it stays on screen and nothing carries over between
/// page instances.
enum Page {
    Dashboard(Dashboard),
    Crops(CropPage),
    Staff(StaffPage),
    Fields(FieldPage),
    Vehicles(VehiclePage),
    Equipment(EquipmentPage),
    Logs(LogPage),
    Settings(SettingsPage),
}

impl Page {
    fn mount(view: View) -> Self {
        match view {
            View::Dashboard => Self::Dashboard(Dashboard),
            View::Crops => Self::Crops(CropPage::new()),
            View::Staff => Self::Staff(StaffPage::new()),
            View::Fields => Self::Fields(FieldPage::new()),
            View::Vehicles => Self::Vehicles(VehiclePage::new()),
            View::Equipment => Self::Equipment(EquipmentPage::new()),
            View::Logs => Self::Logs(LogPage::new()),
            View::Settings => Self::Settings(SettingsPage::new()),
        }
    }

    fn active_view(&self) -> View {
        match self {
            Self::Dashboard(_) => View::Dashboard,
            Self::Crops(_) => View::Crops,
            Self::Staff(_) => View::Staff,
            Self::Fields(_) => View::Fields,
            Self::Vehicles(_) => View::Vehicles,
            Self::Equipment(_) => View::Equipment,
            Self::Logs(_) => View::Logs,
            Self::Settings(_) => View::Settings,
        }
    }
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        // Human friendly panicking in release mode
        human_panic::setup_panic!();

        // Logging
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::TRACE)
            .with_env_filter(EnvFilter::from_default_env())
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("setting default subscriber failed");

        let cfg = Arc::new(RwLock::new(GuiConfig::load()));
        let theme = cfg.read().theme();
        let page = Page::mount(cfg.read().last_view);

        (
            Self {
                cfg,
                title: "Paddock".into(),
                theme,
                page,
                toasts: Toasts::default(),
            },
            Task::none(),
        )
    }

    // Update application state based on messages passed by view()
    pub fn update(&mut self, message: Message) -> Task<Message> {
        let action = match (&mut self.page, message) {
            (page, Message::ViewSelected(view)) => {
                if view != page.active_view() {
                    *page = Page::mount(view);
                    let mut cfg = self.cfg.write();
                    cfg.last_view = view;
                    cfg.save();
                }
                Action::None
            }
            (_, Message::LogoutPressed) => {
                info!("logging out");
                Action::None
            }
            (_, Message::Toast(message)) => {
                self.toasts.update(message);
                Action::None
            }
            (Page::Crops(page), Message::Crops(message)) => page.update(message),
            (Page::Staff(page), Message::Staff(message)) => page.update(message),
            (Page::Fields(page), Message::Fields(message)) => page.update(message),
            (Page::Vehicles(page), Message::Vehicles(message)) => page.update(message),
            (Page::Equipment(page), Message::Equipment(message)) => page.update(message),
            (Page::Logs(page), Message::Logs(message)) => page.update(message),
            (Page::Settings(page), Message::Settings(message)) => page.update(message),
            // A message for a page that has since been unmounted
            _ => Action::None,
        };

        match action {
            Action::None => Task::none(),
            Action::Notify(notice) => self.toasts.push(notice).map(Message::Toast),
        }
    }

    // Render the application and pass along messages from components to update()
    pub fn view(&self) -> Element<'_, Message> {
        let content = match &self.page {
            Page::Dashboard(dashboard) => dashboard.view(),
            Page::Crops(page) => page.view().map(Message::Crops),
            Page::Staff(page) => page.view().map(Message::Staff),
            Page::Fields(page) => page.view().map(Message::Fields),
            Page::Vehicles(page) => page.view().map(Message::Vehicles),
            Page::Equipment(page) => page.view().map(Message::Equipment),
            Page::Logs(page) => page.view().map(Message::Logs),
            Page::Settings(page) => page.view().map(Message::Settings),
        };

        let body = row![
            container(navigation(self.page.active_view())).width(200).padding(16),
            rule::vertical(1),
            container(content).padding(24).width(Fill).height(Fill),
        ]
        .height(Fill);

        stack![
            body,
            bottom_right(self.toasts.view().map(Message::Toast)),
        ]
        .into()
    }

    pub fn title(&self) -> String {
        self.title.clone()
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }
}

fn navigation(active: View) -> Element<'static, Message> {
    let items = Column::with_children(View::iter().map(|view| {
        let style = if view == active {
            button::primary
        } else {
            button::subtle
        };

        button(text(view.label()))
            .width(Fill)
            .style(style)
            .on_press(Message::ViewSelected(view))
            .into()
    }))
    .spacing(4);

    column![
        text("Paddock").size(22),
        rule::horizontal(1),
        items,
        space::vertical(),
        button(text("Logout"))
            .width(Fill)
            .style(button::subtle)
            .on_press(Message::LogoutPressed),
    ]
    .spacing(12)
    .height(Fill)
    .into()
}
