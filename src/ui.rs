use iced::Theme;
use iced::widget::{Button, button, container, text};

pub fn padded_button<Message: Clone>(label: &str) -> Button<'_, Message> {
    button(text(label)).padding([10, 20])
}

pub fn control_button<Message: Clone, S: Into<String>>(label: S) -> Button<'static, Message> {
    button(text(label.into())).padding([5, 10])
}

pub fn container_border_r5(theme: &Theme) -> container::Style {
    container::Style {
        border: iced::Border {
            color: theme.palette().text,
            width: 1.0,
            radius: 5.0.into(),
        },
        background: Some(theme.palette().background.into()),
        ..Default::default()
    }
}
