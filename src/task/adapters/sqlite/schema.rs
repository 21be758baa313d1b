//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Auto-incremented task identifier.
        id -> BigInt,
        /// Unique task title.
        title -> Text,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Completion flag.
        completed -> Bool,
        /// Creation timestamp (UTC).
        created_at -> Timestamp,
        /// Last update timestamp (UTC).
        updated_at -> Timestamp,
    }
}
