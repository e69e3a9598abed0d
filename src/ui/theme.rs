//! cliclack theme

use cliclack::ThemeState;
use console::Style;

/// Magenta accents for active prompts, green on submit
#[derive(Debug, Clone, Default)]
pub struct SwapTheme;

impl cliclack::Theme for SwapTheme {
    fn bar_color(&self, state: &ThemeState) -> Style {
        match state {
            ThemeState::Active => Style::new().magenta(),
            ThemeState::Error(_) => Style::new().red(),
            ThemeState::Cancel => Style::new().dim(),
            ThemeState::Submit => Style::new().magenta().dim(),
        }
    }

    fn state_symbol_color(&self, state: &ThemeState) -> Style {
        match state {
            ThemeState::Active => Style::new().magenta(),
            ThemeState::Error(_) => Style::new().red(),
            ThemeState::Cancel => Style::new().dim(),
            ThemeState::Submit => Style::new().green(),
        }
    }
}

/// Install the theme for all prompts in this process
pub fn init_theme() {
    cliclack::set_theme(SwapTheme);
}
