//! Application state and key handling

use crate::config::OrderConfig;
use crate::controller::{FormController, SubmitDecision};
use crate::order::{OrderApi, OrderClient};
use crate::state::catalog::{next_size_choice, prev_size_choice, PizzaSize};
use crate::state::{AppState, FieldName, FormFocus, InputKind, TOPPINGS};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;

/// Main application struct
pub struct App {
    /// UI state (focus, status line)
    pub state: AppState,
    /// Order form controller
    pub controller: FormController,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create an App talking to the configured order API
    pub fn new(config: &OrderConfig) -> Self {
        let client = OrderClient::new(config);
        tracing::info!("Using order API at {}", client.base_url());
        Self::with_api(Arc::new(client))
    }

    /// Create an App on top of any order API implementation
    pub fn with_api(api: Arc<dyn OrderApi>) -> Self {
        Self {
            state: AppState::default(),
            controller: FormController::new(api),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Apply settled background work; called once per frame
    pub fn tick(&mut self) {
        self.controller.poll_events();
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear any status messages on key press
        self.state.status_message = None;

        match key.code {
            KeyCode::Esc => {
                self.quit = true;
                return;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true;
                return;
            }
            // Submit (Ctrl+S or Cmd+W / Ctrl+W)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit();
                return;
            }
            KeyCode::Char('w') if key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) => {
                self.submit();
                return;
            }
            KeyCode::Tab | KeyCode::Down => {
                self.state.focus = self.state.focus.next();
                return;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.state.focus = self.state.focus.prev();
                return;
            }
            _ => {}
        }

        match self.state.focus {
            FormFocus::FullName => self.handle_full_name_key(key),
            FormFocus::Size => self.handle_size_key(key),
            FormFocus::Topping(index) => self.handle_topping_key(key, index),
            FormFocus::Submit => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.submit();
                }
            }
        }
    }

    fn handle_full_name_key(&mut self, key: KeyEvent) {
        let mut name = self.controller.state().values.full_name.clone();
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => name.push(c),
            KeyCode::Backspace => {
                if name.pop().is_none() {
                    return;
                }
            }
            KeyCode::Enter => {
                self.state.focus = self.state.focus.next();
                return;
            }
            _ => return,
        }
        self.controller
            .on_field_change(FieldName::FullName, &name, InputKind::Text);
    }

    fn handle_size_key(&mut self, key: KeyEvent) {
        let current = self.controller.state().values.size.clone();
        let choice = match key.code {
            KeyCode::Right | KeyCode::Char(' ') => next_size_choice(&current),
            KeyCode::Left => prev_size_choice(&current),
            KeyCode::Char(c) => {
                let code = c.to_ascii_uppercase().to_string();
                match PizzaSize::from_code(&code) {
                    Some(size) => size.code(),
                    None => return,
                }
            }
            KeyCode::Enter => {
                self.state.focus = self.state.focus.next();
                return;
            }
            _ => return,
        };
        self.controller
            .on_field_change(FieldName::Size, choice, InputKind::Select);
    }

    fn handle_topping_key(&mut self, key: KeyEvent, index: usize) {
        if !matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
            return;
        }
        let Some(topping) = TOPPINGS.get(index) else {
            return;
        };
        let checked = !self.controller.state().values.has_topping(topping.id);
        self.controller.on_field_change(
            FieldName::Toppings,
            topping.id,
            InputKind::Checkbox { checked },
        );
    }

    /// Submit the order and describe the outcome in the status bar
    fn submit(&mut self) {
        let message = match self.controller.on_submit() {
            SubmitDecision::Dispatched => "Placing order...",
            SubmitDecision::Disabled | SubmitDecision::Invalid => "Fix the form before ordering",
            SubmitDecision::AlreadySubmitting => "Order already on its way",
        };
        self.state.status_message = Some(message.to_string());
    }
}
