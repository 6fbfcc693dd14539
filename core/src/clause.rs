//! The contract every clause kind implements.

use crate::ToSQL;

/// A clause attached to a statement.
///
/// A clause owns its data; the statement renders clauses by handing each
/// one's data to the serializer.
pub trait Clause {
    /// State rendered for this clause.
    type Data: ToSQL;

    /// Keyword introducing the clause, also used in error messages.
    const KEYWORD: &'static str;

    fn data(&self) -> &Self::Data;
}
