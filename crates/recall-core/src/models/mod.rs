mod gate_decision;
mod query_result;
mod record;
mod response_tier;

pub use gate_decision::GateDecision;
pub use query_result::QueryResult;
pub use record::Record;
pub use response_tier::ResponseTier;
