/// Error code registry for survey-split
///
/// Error codes are organized by category:
/// - 1000-1999: Settings and catalog errors
/// - 2000-2999: Input record errors
/// - 3000-3999: Storage errors
/// - 9000-9999: Other errors
#[allow(dead_code)]
pub struct ErrorCode;

impl ErrorCode {
    // Settings and catalog errors (1000-1999)
    pub const SETTINGS_INVALID: u16 = 1000;
    pub const SETTINGS_PARSE_ERROR: u16 = 1001;
    pub const CATALOG_PARSE_ERROR: u16 = 1100;
    pub const CATALOG_DUPLICATE_ID: u16 = 1101;

    // Input record errors (2000-2999)
    pub const RECORD_MALFORMED_IDENTIFIER: u16 = 2000;
    pub const RECORD_MISSING_FIELD: u16 = 2001;
    pub const RECORD_PARSE_ERROR: u16 = 2002;

    // Storage errors (3000-3999)
    pub const STORAGE_IO_ERROR: u16 = 3000;
    pub const STORAGE_INPUT_NOT_FOUND: u16 = 3001;
    pub const STORAGE_SERIALIZATION_ERROR: u16 = 3002;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        1000 => "Invalid settings value",
        1001 => "Failed to parse settings file",
        1100 => "Failed to parse question catalog",
        1101 => "Duplicate question id in catalog",

        2000 => "Composite identifier is missing or malformed",
        2001 => "Required input field is missing",
        2002 => "Failed to parse delimited input",

        3000 => "File system operation failed",
        3001 => "Input file does not exist",
        3002 => "Failed to serialize output",

        _ => "Unknown error code",
    }
}
