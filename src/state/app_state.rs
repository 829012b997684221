//! Application state definitions

use super::catalog::TOPPINGS;

/// Control of the order form that currently has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    FullName,
    Size,
    /// Index into the topping catalog
    Topping(usize),
    Submit,
}

impl FormFocus {
    /// Number of focusable controls (name, size, toppings, submit)
    pub fn count() -> usize {
        TOPPINGS.len() + 3
    }

    /// Position in tab order
    pub fn index(&self) -> usize {
        match self {
            Self::FullName => 0,
            Self::Size => 1,
            Self::Topping(i) => 2 + i,
            Self::Submit => TOPPINGS.len() + 2,
        }
    }

    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Self::FullName,
            1 => Self::Size,
            i if i < TOPPINGS.len() + 2 => Self::Topping(i - 2),
            _ => Self::Submit,
        }
    }

    pub fn next(&self) -> Self {
        Self::from_index((self.index() + 1) % Self::count())
    }

    pub fn prev(&self) -> Self {
        let index = self.index();
        if index == 0 {
            Self::from_index(Self::count() - 1)
        } else {
            Self::from_index(index - 1)
        }
    }
}

/// UI state that is not part of the form itself
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub focus: FormFocus,
    /// Transient hint shown in the status bar
    pub status_message: Option<String>,
}
