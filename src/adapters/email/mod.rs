//! Email adapters - outbound result delivery.

mod recording_mailer;
mod resend_mailer;

pub use recording_mailer::RecordingMailer;
pub use resend_mailer::ResendMailer;
