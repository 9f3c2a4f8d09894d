/// Path the GraphQL endpoint and the IDE are mounted on.
pub const GRAPHQL_PATH: &str = "/graphql";

mod context;
pub use context::ServerContext;

mod errors;
pub use errors::HandlerError;

mod graphiql;
pub use graphiql::graphiql_handler;

mod health;
pub use health::health_handler;

mod graphql;
pub use graphql::{graphql_handler, GraphQLParams};
