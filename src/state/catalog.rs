//! Static menu data: pizza sizes and the topping catalog

/// A selectable topping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToppingOption {
    pub id: &'static str,
    pub label: &'static str,
}

/// Topping catalog, in display order
pub const TOPPINGS: [ToppingOption; 5] = [
    ToppingOption {
        id: "1",
        label: "Pepperoni",
    },
    ToppingOption {
        id: "2",
        label: "Green Peppers",
    },
    ToppingOption {
        id: "3",
        label: "Pineapple",
    },
    ToppingOption {
        id: "4",
        label: "Mushrooms",
    },
    ToppingOption {
        id: "5",
        label: "Ham",
    },
];

/// Look up a topping by id
pub fn find_topping(id: &str) -> Option<&'static ToppingOption> {
    TOPPINGS.iter().find(|t| t.id == id)
}

/// Whether `id` names a topping in the catalog
pub fn is_known_topping(id: &str) -> bool {
    find_topping(id).is_some()
}

/// Pizza size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PizzaSize {
    Small,
    Medium,
    Large,
}

impl PizzaSize {
    /// Parse the wire code; only the exact codes "S", "M" and "L" are accepted
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "S" => Some(Self::Small),
            "M" => Some(Self::Medium),
            "L" => Some(Self::Large),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Small => "S",
            Self::Medium => "M",
            Self::Large => "L",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }
}

/// Placeholder shown while no size is chosen
pub const SIZE_PLACEHOLDER: &str = "----Choose Size----";

/// Values offered by the size select, starting with the empty choice
pub const SIZE_CHOICES: [&str; 4] = ["", "S", "M", "L"];

/// Next select value after `current`, wrapping around
pub fn next_size_choice(current: &str) -> &'static str {
    let index = SIZE_CHOICES.iter().position(|c| *c == current).unwrap_or(0);
    SIZE_CHOICES[(index + 1) % SIZE_CHOICES.len()]
}

/// Previous select value before `current`, wrapping around
pub fn prev_size_choice(current: &str) -> &'static str {
    let index = SIZE_CHOICES.iter().position(|c| *c == current).unwrap_or(0);
    if index == 0 {
        SIZE_CHOICES[SIZE_CHOICES.len() - 1]
    } else {
        SIZE_CHOICES[index - 1]
    }
}

/// Display text for a select value
pub fn size_display(code: &str) -> &'static str {
    PizzaSize::from_code(code)
        .map(|s| s.label())
        .unwrap_or(SIZE_PLACEHOLDER)
}
