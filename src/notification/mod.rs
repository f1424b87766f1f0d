//! Employee notification drafting.
//!
//! Drafting sits outside the engine: it reads a finished
//! [`CalculationResult`](crate::models::CalculationResult) and never feeds
//! back into it. Drafting failures are absorbed by [`draft_or_fallback`].

mod context;
mod drafter;

pub use context::{GrantSummary, NotificationContext};
pub use drafter::{
    DraftOutcome, FALLBACK_MESSAGE, NotificationDrafter, TemplateDrafter, draft_or_fallback,
};
