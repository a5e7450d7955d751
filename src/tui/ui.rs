use crate::core::flow::{ModalState, Screen};
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    BookingModal, CarList, Confirmation, NoticePopup, RentView, TitleBar,
};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const ADMIN_EMPTY_MESSAGE: &str = "No cars yet. Add the first one.";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [title_area, main_area, footer_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());

    let user_label = app
        .session
        .as_ref()
        .map(|s| format!("{} ({})", s.username, s.role));
    TitleBar::new(user_label, app.status_message.clone()).render(frame, title_area);

    match app.screen() {
        Screen::Login => tui.login.render(frame, main_area),
        Screen::AdminAddCar(params) => draw_admin(frame, main_area, app, tui, &params.user),
        Screen::CustomerRent(rent) => {
            RentView {
                state: &mut tui.rent,
                user: &rent.params.user,
                cars: app.catalog.list_cars(),
                draft: &rent.draft,
                currency: &app.currency_symbol,
            }
            .render(frame, main_area);
            if rent.modal == ModalState::Visible {
                BookingModal {
                    quote: &rent.draft.quote(),
                    currency: &app.currency_symbol,
                }
                .render(frame, main_area);
            }
        }
        Screen::Confirmation(booking) => Confirmation {
            booking: booking.as_ref(),
            currency: &app.currency_symbol,
        }
        .render(frame, main_area),
    }

    draw_footer(frame, footer_area, app);

    if let Some(notice) = &app.notice {
        NoticePopup { notice }.render(frame, main_area);
    }
}

fn draw_admin(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState, user: &str) {
    use Constraint::{Length, Min, Percentage};
    let [header, body] = Layout::vertical([Length(2), Min(0)]).areas(area);

    let greeting = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("Welcome, {user}"),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Fill in the form and press Enter to add a car to the catalog.",
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(greeting, header);

    let [form_area, list_area] = Layout::horizontal([Percentage(45), Percentage(55)]).areas(body);
    tui.car_form.render(frame, form_area);

    tui.admin_list.set_len(app.catalog.len());
    CarList {
        state: &mut tui.admin_list,
        cars: app.catalog.list_cars(),
        title: "Available Cars",
        currency: &app.currency_symbol,
        selected_id: None,
        focused: false,
        empty_message: ADMIN_EMPTY_MESSAGE,
    }
    .render(frame, list_area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let hints = if app.notice.is_some() {
        "Enter/Esc Dismiss"
    } else {
        match app.screen() {
            Screen::Login => "Tab Next field  ←/→ Role  Enter Login  Ctrl+C Quit",
            Screen::AdminAddCar(_) => "Tab Next field  Enter Add Car  Ctrl+L Logout  Ctrl+C Quit",
            Screen::CustomerRent(rent) if rent.modal == ModalState::Visible => {
                "Enter Confirm  Esc Cancel"
            }
            Screen::CustomerRent(_) => {
                "↑/↓ Choose  Enter Select/Rent  Tab Switch  Ctrl+L Logout  Ctrl+C Quit"
            }
            Screen::Confirmation(_) => "Enter Back to Home  Esc Back  Ctrl+C Quit",
        }
    };
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
