//! Custom extractors.

mod ambient_query;
mod validated_query;

pub use ambient_query::AmbientQuery;
pub use validated_query::ValidatedQuery;
