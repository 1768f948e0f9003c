// Domain-level errors for result store workflows.
#[derive(Debug)]
pub enum ResultsError {
    // One of angle, speed or scored was absent or null.
    MissingRequiredFields,
    // Field name as it appears on the wire.
    InvalidNumber(&'static str),
    StorageFailure(String),
}
