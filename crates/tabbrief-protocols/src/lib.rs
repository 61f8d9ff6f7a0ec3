//! # tabbrief Protocols
//!
//! Shared contract definitions for tabbrief. Contains the typed
//! request/reply unions, the summary data model with its constant output
//! schema, and the traits behind which the host capabilities live.
//!
//! ## Core Traits
//!
//! - [`ScriptingHost`] - run an expression inside the active tab's page context
//! - [`LanguageModel`] / [`ModelSession`] - prompt a generative model with an
//!   optional structural output constraint
//! - [`StatusSink`] - the single user-visible status surface

pub mod error;
pub mod extraction;
pub mod model;
pub mod status;
pub mod summary;

pub use extraction::{
    ExtractionReply, ExtractionRequest, InjectionResult, ScriptingHost, TabInfo,
};
pub use model::{Availability, LanguageModel, ModelSession, SessionConfig};
pub use status::StatusSink;
pub use summary::{summary_schema, Summary, SummaryOutcome, SummarySection};
pub use error::{ExtractError, HostError, ModelError, ParseFailure};
