//! Column names of the workshop/survey export.
//!
//! The export is produced by an external survey tool, so these names are
//! fixed by the input format. Normalization adds the two derived code
//! columns and renames the comment columns to the names the downstream
//! analysis job reads.

/// Composite identifier, `<groupCode>_<eventCode><digits>`
pub const COMPOSITE_ID: &str = "Kürzel";

/// Question code, used verbatim as the third partition key
pub const QUESTION_CODE: &str = "Q";

/// Comment identifier as exported
pub const COMMENT_ID: &str = "ID";

/// Free-text answer as exported
pub const COMMENT_TEXT: &str = "Quote";

/// Human-readable respondent group label
pub const GROUP_LABEL: &str = "Akteursgruppe";

/// Derived respondent group code
pub const GROUP_CODE: &str = "AkteursgruppeCode";

/// Derived event code
pub const EVENT_CODE: &str = "VeranstaltungCode";

/// Renamed comment identifier
pub const OUT_COMMENT_ID: &str = "comment-id";

/// Renamed free-text answer
pub const OUT_COMMENT_BODY: &str = "comment-body";

/// Fields every input row must carry besides the composite identifier
pub const REQUIRED: &[&str] = &[QUESTION_CODE, COMMENT_ID, COMMENT_TEXT, GROUP_LABEL];
