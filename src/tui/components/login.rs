//! # Login Form Component
//!
//! Username, password and a role toggle, rendered as a centered card.
//! The password is collected but never checked.
//!
//! Keys: Tab/Shift+Tab and Up/Down move focus, Left/Right/Space flip the
//! role when it has focus, Enter submits from any field.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph};

use crate::core::session::Role;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::popup::centered_fixed;
use crate::tui::components::text_field::TextField;
use crate::tui::event::TuiEvent;

const CARD_WIDTH: u16 = 52;
const CARD_HEIGHT: u16 = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFocus {
    Username,
    Password,
    Role,
}

impl LoginFocus {
    fn next(self) -> Self {
        match self {
            LoginFocus::Username => LoginFocus::Password,
            LoginFocus::Password => LoginFocus::Role,
            LoginFocus::Role => LoginFocus::Username,
        }
    }

    fn prev(self) -> Self {
        match self {
            LoginFocus::Username => LoginFocus::Role,
            LoginFocus::Password => LoginFocus::Username,
            LoginFocus::Role => LoginFocus::Password,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginEvent {
    Submit { username: String, role: Role },
}

pub struct LoginForm {
    pub username: TextField,
    pub password: TextField,
    pub role: Role,
    pub focus: LoginFocus,
}

impl LoginForm {
    pub fn new(role: Role) -> Self {
        let mut form = Self {
            username: TextField::new(" Username ", "Enter username"),
            password: TextField::new(" Password ", "Enter password").masked(),
            role,
            focus: LoginFocus::Username,
        };
        form.sync_focus();
        form
    }

    /// Empty the fields and restore the starting role.
    pub fn reset(&mut self, role: Role) {
        self.username.clear();
        self.password.clear();
        self.role = role;
        self.focus = LoginFocus::Username;
        self.sync_focus();
    }

    fn sync_focus(&mut self) {
        self.username.focused = self.focus == LoginFocus::Username;
        self.password.focused = self.focus == LoginFocus::Password;
    }

    fn set_focus(&mut self, focus: LoginFocus) {
        self.focus = focus;
        self.sync_focus();
    }

    fn render_role(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == LoginFocus::Role;
        let option = |role: Role| {
            let text = format!(" {} ", role.label());
            if role == self.role {
                let mut style = Style::default().fg(Color::Black).bg(Color::Cyan);
                if focused {
                    style = style.add_modifier(Modifier::BOLD);
                }
                Span::styled(text, style)
            } else {
                Span::styled(text, Style::default().fg(Color::DarkGray))
            }
        };
        let label_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };
        let line = Line::from(vec![
            Span::styled("Role: ", label_style),
            option(Role::Customer),
            Span::raw(" "),
            option(Role::Admin),
        ]);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
    }
}

impl Component for LoginForm {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let card = centered_fixed(CARD_WIDTH, CARD_HEIGHT, area);
        frame.render_widget(Clear, card);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" ICE Car Booking ")
            .title_alignment(Alignment::Center)
            .title_bottom(Line::from(" Tab Next  Enter Login  Ctrl+C Quit ").centered())
            .padding(Padding::horizontal(2));
        let inner = block.inner(card);
        frame.render_widget(block, card);

        use Constraint::{Length, Min};
        let [heading, _, username, password, _, role, _, tip, _] = Layout::vertical([
            Length(1),
            Length(1),
            Length(3),
            Length(3),
            Length(1),
            Length(1),
            Length(1),
            Length(2),
            Min(0),
        ])
        .areas(inner);

        let heading_text = Paragraph::new(format!("Login as {}", self.role.label()))
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(heading_text, heading);

        self.username.render(frame, username);
        self.password.render(frame, password);
        self.render_role(frame, role);

        let tip_text = Paragraph::new(vec![
            Line::from("Tip: use Admin to add cars,"),
            Line::from("Customer to rent."),
        ])
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
        frame.render_widget(tip_text, tip);
    }
}

impl EventHandler for LoginForm {
    type Event = LoginEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<LoginEvent> {
        match event {
            TuiEvent::Submit => {
                return Some(LoginEvent::Submit {
                    username: self.username.value().to_string(),
                    role: self.role,
                });
            }
            TuiEvent::NextField | TuiEvent::CursorDown => self.set_focus(self.focus.next()),
            TuiEvent::PrevField | TuiEvent::CursorUp => self.set_focus(self.focus.prev()),
            _ => match self.focus {
                LoginFocus::Username => {
                    self.username.handle_event(event);
                }
                LoginFocus::Password => {
                    self.password.handle_event(event);
                }
                LoginFocus::Role => {
                    if matches!(
                        event,
                        TuiEvent::CursorLeft | TuiEvent::CursorRight | TuiEvent::InputChar(' ')
                    ) {
                        self.role = self.role.toggled();
                    }
                }
            },
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn type_str(form: &mut LoginForm, s: &str) {
        for c in s.chars() {
            form.handle_event(&TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_submit_carries_username_and_role() {
        let mut form = LoginForm::new(Role::Customer);
        type_str(&mut form, "alice");
        form.handle_event(&TuiEvent::NextField);
        type_str(&mut form, "secret");
        form.handle_event(&TuiEvent::NextField);
        form.handle_event(&TuiEvent::CursorRight);
        assert_eq!(
            form.handle_event(&TuiEvent::Submit),
            Some(LoginEvent::Submit {
                username: "alice".into(),
                role: Role::Admin,
            })
        );
        assert_eq!(form.password.value(), "secret");
    }

    #[test]
    fn test_space_only_toggles_on_role() {
        let mut form = LoginForm::new(Role::Admin);
        form.handle_event(&TuiEvent::InputChar(' '));
        assert_eq!(form.role, Role::Admin);
        assert_eq!(form.username.value(), " ");

        form.handle_event(&TuiEvent::PrevField);
        assert_eq!(form.focus, LoginFocus::Role);
        form.handle_event(&TuiEvent::InputChar(' '));
        assert_eq!(form.role, Role::Customer);
    }

    #[test]
    fn test_focus_flags_follow_focus() {
        let mut form = LoginForm::new(Role::Customer);
        assert!(form.username.focused);
        form.handle_event(&TuiEvent::CursorDown);
        assert!(!form.username.focused);
        assert!(form.password.focused);
    }

    #[test]
    fn test_reset() {
        let mut form = LoginForm::new(Role::Customer);
        type_str(&mut form, "bob");
        form.handle_event(&TuiEvent::NextField);
        form.reset(Role::Admin);
        assert_eq!(form.username.value(), "");
        assert_eq!(form.role, Role::Admin);
        assert_eq!(form.focus, LoginFocus::Username);
    }

    #[test]
    fn test_render_card() {
        let mut form = LoginForm::new(Role::Admin);
        let backend = TestBackend::new(70, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| form.render(f, f.area())).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("ICE Car Booking"));
        assert!(text.contains("Login as admin"));
        assert!(text.contains("Username"));
        assert!(text.contains("customer"));
        assert!(text.contains("Tip: use Admin to add cars,"));
    }
}
