//! Page components and shared layout helpers for the dashboard.

use iced::{
    Color, Element,
    Length::{self, Fill},
    widget::{center, column, container, mouse_area, opaque, row, stack, text},
};
use paddock_lib::Notice;

pub mod crop_page;
pub mod dashboard;
pub mod equipment_page;
pub mod field_page;
pub mod log_page;
pub mod settings_page;
pub mod staff_page;
pub mod toast;
pub mod vehicle_page;

/// Action used for communicating with the parent component
#[derive(Debug)]
pub enum Action {
    None,
    Notify(Notice),
}

/// Standard page scaffold: heading, then the form panel and the list panel
/// side by side.
pub fn page<'a, Message: Clone + 'a>(
    title: &'a str,
    subtitle: &'a str,
    form: Element<'a, Message>,
    list: Element<'a, Message>,
) -> Element<'a, Message> {
    column![
        column![text(title).size(24), text(subtitle)].spacing(4),
        row![
            card(form).width(Fill).height(Fill),
            card(list).width(Fill).height(Fill),
        ]
        .spacing(16),
    ]
    .spacing(16)
    .height(Fill)
    .into()
}

fn card<'a, Message: 'a>(content: Element<'a, Message>) -> iced::widget::Container<'a, Message> {
    container(content)
        .padding(20)
        .style(container::rounded_box)
}

/// One labelled input line of a form panel.
pub fn form_row<'a, Message: 'a>(
    label: &'a str,
    input: Element<'a, Message>,
) -> Element<'a, Message> {
    row![text(label).width(130), input].spacing(8).into()
}

/// Overlay `content` over `base`, dimming everything underneath.
pub fn modal<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_click_outside: Option<Message>,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let mouse_area = mouse_area(center(opaque(content)).style(|_theme| {
        container::Style {
            background: Some(
                Color {
                    a: 0.8,
                    ..Color::BLACK
                }
                .into(),
            ),
            ..container::Style::default()
        }
    }));

    stack![
        base.into(),
        opaque(if let Some(msg) = on_click_outside {
            mouse_area.on_press(msg)
        } else {
            mouse_area
        })
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
