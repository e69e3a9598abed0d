//! Terminal presentation for the CLI
//!
//! Uses `cliclack` for prompts and spinners on a TTY and falls back to
//! plain `[OK]`/`[WARN]` lines in CI or when piped.

mod context;
mod output;
mod progress;
mod prompts;
mod theme;

pub use context::UiContext;
pub use output::{
    intro, key_value_status, outro_success, remark, step_error_detail, step_info,
    step_ok, step_ok_detail, step_warn_hint,
};
pub use progress::TaskSpinner;
pub use prompts::{confirm, select};
pub use theme::{init_theme, SwapTheme};
