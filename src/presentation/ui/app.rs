//! Main application orchestrator.

use std::sync::Arc;

use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::{DefaultTerminal, Frame};
use tracing::{debug, info, warn};

use crate::application::services::{AccountStore, SessionStore};
use crate::application::use_cases::{
    LoginUseCase, RegisterUseCase, RestoreSessionUseCase, TransactionUseCase,
};
use crate::domain::ports::KeyValueStore;
use crate::presentation::events::EventHandler;
use crate::presentation::ui::{AtmAction, AtmScreen, AuthAction, AuthScreen, AuthTab};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Auth,
    Atm,
    Exiting,
}

enum CurrentScreen {
    Auth(AuthScreen),
    Atm(AtmScreen),
}

enum Dispatched {
    Auth(AuthAction),
    Atm(AtmAction),
}

/// Main application: two top-level views driven by a synchronous event
/// loop. Every key event is handled to completion before the next one is
/// read, so store read-modify-write sequences can never interleave.
pub struct App {
    state: AppState,
    screen: CurrentScreen,
    login: LoginUseCase,
    register: RegisterUseCase,
    restore: RestoreSessionUseCase,
    transactions: TransactionUseCase,
    events: EventHandler,
}

impl App {
    /// Creates the app over the given storage backend.
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        let accounts = AccountStore::new(kv.clone());
        let session = SessionStore::new(kv);

        Self {
            state: AppState::Auth,
            screen: CurrentScreen::Auth(AuthScreen::new()),
            login: LoginUseCase::new(accounts.clone(), session.clone()),
            register: RegisterUseCase::new(accounts.clone(), session.clone()),
            restore: RestoreSessionUseCase::new(accounts.clone(), session.clone()),
            transactions: TransactionUseCase::new(accounts, session),
            events: EventHandler::new(),
        }
    }

    /// Restores any persisted session, then runs until the user quits.
    ///
    /// # Errors
    /// Returns an error when drawing or event polling fails.
    pub fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        if let Some(restored) = self.restore.execute() {
            self.enter_atm(restored.username, restored.balance);
        }

        while self.state != AppState::Exiting {
            terminal.draw(|frame| self.render(frame))?;

            if let Some(Event::Key(key)) = self.events.poll()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }

        info!("Application exiting normally");
        Ok(())
    }

    fn render(&self, frame: &mut Frame) {
        match &self.screen {
            CurrentScreen::Auth(screen) => frame.render_widget(screen, frame.area()),
            CurrentScreen::Atm(screen) => frame.render_widget(screen, frame.area()),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if EventHandler::is_quit_event(&key) {
            self.state = AppState::Exiting;
            return;
        }

        let action = match &mut self.screen {
            CurrentScreen::Auth(screen) => Dispatched::Auth(screen.handle_key(key)),
            CurrentScreen::Atm(screen) => Dispatched::Atm(screen.handle_key(key)),
        };

        match action {
            Dispatched::Auth(AuthAction::Submit) => self.submit_auth(),
            Dispatched::Auth(AuthAction::Quit) | Dispatched::Atm(AtmAction::Quit) => {
                self.state = AppState::Exiting;
            }
            Dispatched::Atm(AtmAction::ShowBalance) => self.refresh_balance(),
            Dispatched::Atm(AtmAction::Deposit) => self.deposit(),
            Dispatched::Atm(AtmAction::Withdraw) => self.withdraw(),
            Dispatched::Atm(AtmAction::Logout) => self.logout(),
            Dispatched::Auth(AuthAction::None) | Dispatched::Atm(AtmAction::None) => {}
        }
    }

    fn enter_atm(&mut self, username: String, balance: f64) {
        self.screen = CurrentScreen::Atm(AtmScreen::new(username, balance));
        self.state = AppState::Atm;
    }

    fn submit_auth(&mut self) {
        let CurrentScreen::Auth(screen) = &mut self.screen else {
            return;
        };
        screen.clear_error();

        let result = match screen.tab() {
            AuthTab::Login => self.login.execute(screen.login_request()),
            AuthTab::Register => self.register.execute(screen.register_request()),
        };

        match result {
            Ok(response) => {
                info!(
                    user = %response.username,
                    balance = %response.formatted_balance(),
                    "Entering ATM view"
                );
                self.enter_atm(response.username, response.balance);
            }
            Err(e) => {
                if e.is_validation() {
                    debug!(error = %e, "Authentication attempt rejected");
                } else {
                    warn!(error = %e, "Authentication failed on storage");
                }
                screen.set_error(e.to_string());
            }
        }
    }

    fn refresh_balance(&mut self) {
        let CurrentScreen::Atm(screen) = &mut self.screen else {
            return;
        };
        screen.clear_messages();

        if let Some(balance) = self.transactions.show_balance() {
            screen.set_balance(balance);
            screen.set_success("Balance updated.");
        }
    }

    fn deposit(&mut self) {
        let CurrentScreen::Atm(screen) = &mut self.screen else {
            return;
        };
        screen.clear_messages();

        match self.transactions.deposit(screen.amount()) {
            Ok(Some(receipt)) => {
                screen.set_balance(receipt.new_balance);
                screen.set_success(receipt.message());
                screen.clear_amount();
            }
            Ok(None) => {}
            Err(e) => screen.set_error(e.to_string()),
        }
    }

    fn withdraw(&mut self) {
        let CurrentScreen::Atm(screen) = &mut self.screen else {
            return;
        };
        screen.clear_messages();

        match self.transactions.withdraw(screen.amount()) {
            Ok(Some(receipt)) => {
                screen.set_balance(receipt.new_balance);
                screen.set_success(receipt.message());
                screen.clear_amount();
            }
            Ok(None) => {}
            Err(e) => screen.set_error(e.to_string()),
        }
    }

    fn logout(&mut self) {
        if let Err(e) = self.login.logout() {
            warn!(error = %e, "Failed to clear session during logout");
        }
        self.screen = CurrentScreen::Auth(AuthScreen::new());
        self.state = AppState::Auth;
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;
    use crate::infrastructure::storage::MemoryKeyValueStore;

    fn app_with_seed() -> App {
        let kv: Arc<MemoryKeyValueStore> = Arc::new(MemoryKeyValueStore::new());
        AccountStore::new(kv.clone()).ensure_seed_account().unwrap();
        App::new(kv)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn login_as_demo(app: &mut App) {
        type_str(app, "demo");
        press(app, KeyCode::Tab);
        type_str(app, "1234");
        press(app, KeyCode::Enter);
    }

    fn atm_screen(app: &App) -> &AtmScreen {
        match &app.screen {
            CurrentScreen::Atm(screen) => screen,
            CurrentScreen::Auth(_) => panic!("expected the ATM screen"),
        }
    }

    fn auth_screen(app: &App) -> &AuthScreen {
        match &app.screen {
            CurrentScreen::Auth(screen) => screen,
            CurrentScreen::Atm(_) => panic!("expected the auth screen"),
        }
    }

    #[test]
    fn test_login_reaches_the_atm_screen() {
        let mut app = app_with_seed();
        login_as_demo(&mut app);

        assert_eq!(app.state, AppState::Atm);
        assert_eq!(atm_screen(&app).username(), "demo");
        assert_eq!(atm_screen(&app).balance(), 1500.0);
    }

    #[test]
    fn test_wrong_pin_stays_on_auth_with_an_error() {
        let mut app = app_with_seed();
        type_str(&mut app, "demo");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "9999");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state, AppState::Auth);
        assert_eq!(
            auth_screen(&app).error_message(),
            Some("wrong username or PIN")
        );
    }

    #[test]
    fn test_deposit_updates_balance_and_clears_the_amount() {
        let mut app = app_with_seed();
        login_as_demo(&mut app);

        type_str(&mut app, "50");
        press(&mut app, KeyCode::Char('d'));

        let screen = atm_screen(&app);
        assert_eq!(screen.balance(), 1550.0);
        assert_eq!(screen.amount(), "");
        assert_eq!(screen.success_message(), Some("Deposited 50.00 SEK."));
    }

    #[test]
    fn test_overdraw_shows_an_error_and_keeps_the_balance() {
        let mut app = app_with_seed();
        login_as_demo(&mut app);

        type_str(&mut app, "2000");
        press(&mut app, KeyCode::Char('w'));

        let screen = atm_screen(&app);
        assert_eq!(screen.balance(), 1500.0);
        assert_eq!(screen.error_message(), Some("insufficient balance"));
        assert_eq!(screen.success_message(), None);
    }

    #[test]
    fn test_registration_auto_logs_in() {
        let mut app = app_with_seed();
        app.handle_key(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL));

        type_str(&mut app, "alice");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "4321");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "100");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state, AppState::Atm);
        assert_eq!(atm_screen(&app).username(), "alice");
        assert_eq!(atm_screen(&app).balance(), 100.0);
    }

    #[test]
    fn test_registration_with_a_short_pin_is_rejected() {
        let mut app = app_with_seed();
        app.handle_key(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL));

        type_str(&mut app, "alice");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "12");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state, AppState::Auth);
        assert_eq!(auth_screen(&app).error_message(), Some("PIN must be 4 digits"));
    }

    #[test]
    fn test_logout_returns_to_the_auth_screen() {
        let mut app = app_with_seed();
        login_as_demo(&mut app);

        press(&mut app, KeyCode::Char('l'));

        assert_eq!(app.state, AppState::Auth);
    }

    #[test]
    fn test_show_balance_sets_the_success_slot() {
        let mut app = app_with_seed();
        login_as_demo(&mut app);

        press(&mut app, KeyCode::Char('s'));

        assert_eq!(atm_screen(&app).success_message(), Some("Balance updated."));
    }

    #[test]
    fn test_esc_and_ctrl_c_exit() {
        let mut app = app_with_seed();
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state, AppState::Exiting);

        let mut app = app_with_seed();
        login_as_demo(&mut app);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(app.state, AppState::Exiting);
    }
}
