//! Password reset mailers.
//!
//! - `EmailJsMailer` - EmailJS REST API
//! - `LoggingMailer` - logs instead of sending (no email service configured)
//! - `RecordingMailer` - keeps sent emails in memory (tests)

mod emailjs;
mod logging;
mod recording;

pub use emailjs::{EmailJsConfig, EmailJsMailer, DEFAULT_EMAILJS_URL};
pub use logging::LoggingMailer;
pub use recording::RecordingMailer;
