use inquire::Confirm;
use tracing::warn;

/// Blocking choice points of the page: `confirm` gates an action, `notify`
/// must be acknowledged before the flow continues.
pub trait UserPrompt: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
    fn notify(&self, message: &str);
}

pub struct TerminalPrompt;

impl UserPrompt for TerminalPrompt {
    fn confirm(&self, message: &str) -> bool {
        match Confirm::new(message).with_default(false).prompt() {
            Ok(answer) => answer,
            Err(err) => {
                // Closed stdin or Ctrl+C counts as cancel.
                warn!("Confirmation aborted: {err}");
                false
            }
        }
    }

    fn notify(&self, message: &str) {
        println!("{}", message);
    }
}
