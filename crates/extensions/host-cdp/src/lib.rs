//! # tabbrief CDP Host
//!
//! [`ScriptingHost`](tabbrief_protocols::ScriptingHost) implementation over
//! the Chrome DevTools Protocol. Tabs are discovered through the DevTools
//! HTTP endpoint; expressions run through a WebSocket session with
//! `Runtime.evaluate`.

mod client;
mod error;
mod host;
mod protocol;

pub use client::CdpClient;
pub use error::CdpError;
pub use host::CdpScriptingHost;
