mod dispatch;

pub use dispatch::{IMessageDispatcher, SmtpDispatcher, TracingDispatcher};
