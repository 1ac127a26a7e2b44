//! Plain-text rendering of the form for terminals.

use crate::controller::FormState;
use crate::messages;

pub const VIEW_WIDTH: usize = 60;

/// Draws the whole form: header, input, counter, controls and whichever
/// result panels apply. Disabled controls are drawn in parentheses.
pub fn render(state: &FormState) -> String {
    let mut out = String::with_capacity(state.text.len() + state.summary.len() + 512);

    out.push_str(messages::TITLE);
    out.push('\n');
    out.push_str(messages::SUBTITLE);
    out.push_str("\n\n");

    out.push_str(&rule());
    if state.text.is_empty() {
        out.push_str(messages::PLACEHOLDER);
        out.push('\n');
    } else {
        push_block(&mut out, &state.text);
    }
    out.push_str(&format!("{:>width$}\n", state.counter_label(), width = VIEW_WIDTH));
    out.push_str(&rule());

    out.push_str(&render_controls(state));
    out.push('\n');

    if let Some(error) = &state.error {
        out.push('\n');
        out.push_str(messages::ERROR_HEADING);
        out.push('\n');
        push_block(&mut out, error);
    }

    if !state.summary.is_empty() {
        out.push('\n');
        out.push_str(messages::SUMMARY_HEADING);
        out.push('\n');
        push_block(&mut out, &state.summary);
    }

    out
}

pub fn render_controls(state: &FormState) -> String {
    format!(
        "{} {}",
        button(messages::CLEAR_LABEL, state.can_clear()),
        button(state.submit_label(), state.can_submit()),
    )
}

fn button(label: &str, enabled: bool) -> String {
    if enabled {
        format!("[{label}]")
    } else {
        format!("({label})")
    }
}

fn rule() -> String {
    let mut line = "-".repeat(VIEW_WIDTH);
    line.push('\n');
    line
}

// Keeps the text's own line breaks and ends with exactly one newline.
fn push_block(out: &mut String, text: &str) {
    out.push_str(text.trim_end_matches('\n'));
    out.push('\n');
}
