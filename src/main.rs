#![windows_subsystem = "windows"]

use iced::widget::{checkbox, column, container, row, slider, text, text_input};
use iced::{Element, Fill, Font, Size, Task, Theme, alignment};
use passmint::passgen::{self, PasswordConfig};
use tracing::{debug, warn};

mod ui;

use ui::{container_border_r5, control_button, padded_button};

pub fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    iced::application(Passmint::title, Passmint::update, Passmint::view)
        .theme(Passmint::theme)
        .window_size(Size::new(460.0, 320.0))
        .centered()
        .run_with(Passmint::new)
}

fn id_password() -> text_input::Id {
    text_input::Id::new("password")
}

pub struct Passmint {
    config: PasswordConfig,
    password: String,
    error_message: Option<String>,
    success_message: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Message {
    LengthChanged(u8),
    DigitsToggled(bool),
    SymbolsToggled(bool),
    Regenerate,
    CopyPassword,
    PasswordEdited(String),
}

impl Passmint {
    fn new() -> (Self, Task<Message>) {
        let mut app = Self {
            config: PasswordConfig::default(),
            password: String::new(),
            error_message: None,
            success_message: None,
        };

        // A password must be visible before any interaction.
        app.regenerate();

        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Passmint Password Generator - 0.1.0")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    /// Replaces the displayed password with a fresh draw from the current
    /// configuration. On failure the previous password stays on screen.
    fn regenerate(&mut self) {
        match passgen::generate_password(&self.config) {
            Ok(password) => {
                debug!(
                    length = self.config.length,
                    pool = self.config.charset().len(),
                    "regenerated password"
                );
                self.password = password;
            }
            Err(e) => {
                warn!("password generation failed: {}", e);
                self.error_message = Some("Failed to generate password".into());
            }
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        // Feedback from a previous event is stale once a new one arrives
        self.error_message = None;
        self.success_message = None;

        match message {
            Message::LengthChanged(length) => {
                self.config.set_length(length as usize);
                self.regenerate();
                Task::none()
            }
            Message::DigitsToggled(enabled) => {
                self.config.include_digits = enabled;
                self.regenerate();
                Task::none()
            }
            Message::SymbolsToggled(enabled) => {
                self.config.include_symbols = enabled;
                self.regenerate();
                Task::none()
            }
            Message::Regenerate => {
                self.regenerate();
                Task::none()
            }
            Message::PasswordEdited(_) => {
                // The display field is read-only; typing into it changes nothing.
                Task::none()
            }
            Message::CopyPassword => {
                match copy_to_clipboard(&self.password) {
                    Ok(()) => {
                        self.success_message = Some("Password copied to clipboard".into());
                    }
                    Err(e) => {
                        warn!("clipboard write failed: {}", e);
                        self.error_message = Some("Failed to copy to clipboard".into());
                    }
                }
                Task::batch([
                    text_input::focus(id_password()),
                    text_input::select_all(id_password()),
                ])
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let password_row = row![
            text_input("Password", &self.password)
                .id(id_password())
                .on_input(Message::PasswordEdited)
                .font(Font::MONOSPACE)
                .padding(10),
            control_button("Copy").on_press(Message::CopyPassword),
        ]
        .spacing(5)
        .align_y(alignment::Vertical::Center);

        let length_row = row![
            slider(
                PasswordConfig::MIN_LENGTH as u8..=PasswordConfig::MAX_LENGTH as u8,
                self.config.length as u8,
                Message::LengthChanged,
            )
            .width(240),
            text(format!("Length: {}", self.config.length)),
        ]
        .spacing(10)
        .align_y(alignment::Vertical::Center);

        let toggles = row![
            checkbox("Digits (0-9)", self.config.include_digits).on_toggle(Message::DigitsToggled),
            checkbox("Symbols (!#$%...)", self.config.include_symbols)
                .on_toggle(Message::SymbolsToggled),
        ]
        .spacing(15);

        let mut content = column![
            text("Password Generator").size(24),
            password_row,
            length_row,
            toggles,
            padded_button("Regenerate").on_press(Message::Regenerate),
        ]
        .spacing(15)
        .align_x(alignment::Horizontal::Center);

        if let Some(error) = &self.error_message {
            content = content.push(text(error).style(text::danger).size(16).font(Font {
                weight: iced::font::Weight::Bold,
                ..Default::default()
            }));
        }
        if let Some(success) = &self.success_message {
            content = content.push(text(success).style(text::success).size(16).font(Font {
                weight: iced::font::Weight::Bold,
                ..Default::default()
            }));
        }

        let card = container(content)
            .style(container_border_r5)
            .padding(20)
            .max_width(420);

        container(card).center_x(Fill).center_y(Fill).into()
    }
}

/// Writes `text` to the system clipboard. The platform may deny access, for
/// example on a locked session or a headless display.
fn copy_to_clipboard(text: &str) -> Result<(), arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> Passmint {
        Passmint::new().0
    }

    #[test]
    fn test_password_visible_at_startup() {
        let app = app();
        assert_eq!(app.password.chars().count(), PasswordConfig::DEFAULT_LENGTH);
    }

    #[test]
    fn test_length_change_regenerates_in_full() {
        let mut app = app();
        let _ = app.update(Message::LengthChanged(20));
        assert_eq!(app.password.chars().count(), 20);

        // Shrinking leaves no stale tail from the longer password
        let _ = app.update(Message::LengthChanged(6));
        assert_eq!(app.password.chars().count(), 6);
    }

    #[test]
    fn test_toggles_regenerate_within_pool() {
        let mut app = app();
        let _ = app.update(Message::LengthChanged(100));
        let _ = app.update(Message::SymbolsToggled(true));
        let charset = app.config.charset();
        assert_eq!(charset.len(), 80);
        assert!(app.password.chars().all(|c| charset.contains(&c)));
        assert!(!app.password.chars().any(|c| c.is_ascii_digit()));

        let _ = app.update(Message::SymbolsToggled(false));
        assert!(app.password.chars().all(|c| c.is_ascii_alphabetic()));
    }

    #[test]
    fn test_slider_bounds_are_enforced() {
        let mut app = app();
        let _ = app.update(Message::LengthChanged(0));
        assert_eq!(app.config.length, PasswordConfig::MIN_LENGTH);
        assert_eq!(app.password.chars().count(), PasswordConfig::MIN_LENGTH);
    }

    #[test]
    fn test_editing_display_field_changes_nothing() {
        let mut app = app();
        let before = app.password.clone();
        let config = app.config.clone();
        let _ = app.update(Message::PasswordEdited("typed over".into()));
        assert_eq!(app.password, before);
        assert_eq!(app.config, config);
    }

    #[test]
    fn test_regenerate_keeps_configuration() {
        let mut app = app();
        let _ = app.update(Message::DigitsToggled(true));
        let config = app.config.clone();
        let _ = app.update(Message::Regenerate);
        assert_eq!(app.config, config);
        assert_eq!(app.password.chars().count(), config.length);
    }
}
