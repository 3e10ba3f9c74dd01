//! Focus-dependent placeholder text for the name and period inputs.

/// Whether an input currently has focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    /// Input has focus.
    Focused,
    /// Input does not have focus.
    #[default]
    Blurred,
}

/// Inputs whose placeholder changes with focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderField {
    /// The name input.
    Name,
    /// The period input.
    Period,
}

impl PlaceholderField {
    /// Placeholder for this field in the given focus state.
    ///
    /// Focused inputs show an example of the expected format.
    pub fn placeholder(self, focus: Focus) -> &'static str {
        match (self, focus) {
            (PlaceholderField::Name, Focus::Focused) => "query:name",
            (PlaceholderField::Name, Focus::Blurred) => "name",
            (PlaceholderField::Period, Focus::Focused) => "{:minute [0 15 30 45]}",
            (PlaceholderField::Period, Focus::Blurred) => "run at",
        }
    }
}
