#[derive(
    Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize,
)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}
impl OperationKind {
    /// The lowercase operation keyword as it appears in GraphQL syntax.
    pub fn keyword(&self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::Subscription => "subscription",
        }
    }

    /// The capitalized keyword, used as the default name for an operation
    /// that must be named but wasn't.
    pub fn capitalized(&self) -> &'static str {
        match self {
            OperationKind::Query => "Query",
            OperationKind::Mutation => "Mutation",
            OperationKind::Subscription => "Subscription",
        }
    }
}
