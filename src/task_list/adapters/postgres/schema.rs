//! Diesel schema for task list persistence.

diesel::table! {
    /// Task list documents with their user relations.
    task_lists (id) {
        /// Task list identifier.
        #[max_length = 255]
        id -> Varchar,
        /// Display name.
        name -> Text,
        /// Owning user identifier.
        #[max_length = 255]
        owner_id -> Varchar,
        /// Relation documents `[{userId, dateAdded}]` in insertion order.
        user_relations -> Jsonb,
        /// Optimistic concurrency token.
        version -> Int8,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
