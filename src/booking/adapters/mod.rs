//! Hand-off adapters for composed booking messages.
//!
//! - [`MailtoHandoff`]: produces the `mailto:` link the page navigates to
//! - [`InMemoryOutbox`]: records messages, for tests and previews
//! - [`DelayedHandoff`]: wraps another adapter with a fixed latency

mod delayed;
mod mailto;
mod memory;

pub use delayed::DelayedHandoff;
pub use mailto::MailtoHandoff;
pub use memory::InMemoryOutbox;
