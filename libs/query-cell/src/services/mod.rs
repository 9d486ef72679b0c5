pub mod ai;
pub mod clinical_text;
pub mod query;

pub use ai::DraftClient;
pub use query::QueryService;
