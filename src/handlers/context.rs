use crate::schema::PostSchema;
use crate::store::SharedStore;

#[derive(Clone)]
pub struct ServerContext {
    pub schema: PostSchema,
    pub store: SharedStore,
}

impl ServerContext {
    pub fn new(schema: PostSchema, store: SharedStore) -> Self {
        ServerContext { schema, store }
    }
}
