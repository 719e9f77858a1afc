/// Sentinel application name used when configuration supplies none
pub const DEFAULT_APPLICATION_NAME: &str = "DefaultApp";
/// Sentinel identity for the `UserId` attribute when the caller supplies none
pub const ANONYMOUS_USER_ID: &str = "Anonymous";

/// Attribute key for the UTC ISO-8601 emission timestamp
pub const TIMESTAMP_KEY: &str = "Timestamp";
/// Attribute key for the traced process name
pub const PROCESS_NAME_KEY: &str = "ProcessName";
/// Attribute key for the caller identity
pub const USER_ID_KEY: &str = "UserId";
/// Attribute key echoing the event severity name, for sinks that flatten
/// attributes into a single searchable index
pub const LOG_LEVEL_KEY: &str = "LogLevel";
/// Attribute key carrying the JSON-serialized error record
pub const ERROR_DATA_KEY: &str = "ErrorData";
