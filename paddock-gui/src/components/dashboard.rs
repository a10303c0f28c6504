//! Static overview shown on launch.
//!
//! Page records live inside the page that owns them and are gone once it
//! unmounts, so the overview sticks to sample figures rather than live
//! counts.

use iced::{
    Element,
    Length::Fill,
    widget::{column, container, row, rule, space, text},
};

const EQUIPMENT_STATUS: [(&str, &str); 4] = [
    ("Tractor 1", "Operational"),
    ("Harvester 2", "Maintenance"),
    ("Sprayer 3", "Operational"),
    ("Plow 4", "Out of Service"),
];

const WEATHER_FORECAST: [(&str, i32); 5] = [
    ("Mon", 72),
    ("Tue", 68),
    ("Wed", 65),
    ("Thu", 70),
    ("Fri", 73),
];

const CROP_YIELDS: [(&str, f64); 5] = [
    ("Wheat", 3.2),
    ("Corn", 4.5),
    ("Soybeans", 2.8),
    ("Barley", 3.7),
    ("Oats", 2.1),
];

#[derive(Debug, Default)]
pub struct Dashboard;

impl Dashboard {
    pub fn view<Message: 'static>(&self) -> Element<'_, Message> {
        let yields = panel(
            "Crop Yields",
            column(CROP_YIELDS.iter().map(|(name, tons)| {
                row![
                    text(*name),
                    space::horizontal(),
                    text(format!("{tons} tons/acre")),
                ]
                .into()
            }))
            .spacing(6)
            .into(),
        );

        let equipment = panel(
            "Equipment Status",
            column(EQUIPMENT_STATUS.iter().map(|(name, status)| {
                row![text(*name), space::horizontal(), text(*status)].into()
            }))
            .spacing(6)
            .into(),
        );

        let weather = panel(
            "Weather Forecast",
            column(WEATHER_FORECAST.iter().map(|(day, temp)| {
                row![text(*day), space::horizontal(), text(format!("{temp} °F"))].into()
            }))
            .spacing(6)
            .into(),
        );

        column![
            text("Farm Dashboard").size(24),
            row![yields, equipment, weather].spacing(16),
        ]
        .spacing(16)
        .height(Fill)
        .into()
    }
}

fn panel<'a, Message: 'a>(title: &'a str, body: Element<'a, Message>) -> Element<'a, Message> {
    container(column![text(title).size(18), rule::horizontal(1), body].spacing(10))
        .padding(20)
        .width(Fill)
        .style(container::rounded_box)
        .into()
}
