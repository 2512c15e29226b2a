//! Code kinds, told apart by their meta constant.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::code::Code;
use crate::error::CodeError;

pub const NSO_COURSE_META: u16 = 2117;
pub const NSO_MAKER_META: u16 = 2245;
pub const OCW_COURSE_META: u16 = 808;
pub const OCW_MAKER_META: u16 = 1337;

/// Kind of a code, from its meta field.
///
/// Serializes as its label (`"NSO_COURSE"`, …, `"UNKNOWN"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CodeType {
    NsoCourse,
    NsoMaker,
    OcwCourse,
    OcwMaker,
    Unknown,
}

impl CodeType {
    /// Every kind with a meta constant.
    pub const KNOWN: [CodeType; 4] = [
        CodeType::NsoCourse,
        CodeType::NsoMaker,
        CodeType::OcwCourse,
        CodeType::OcwMaker,
    ];

    pub const fn from_meta(meta: u16) -> Self {
        match meta {
            NSO_COURSE_META => Self::NsoCourse,
            NSO_MAKER_META => Self::NsoMaker,
            OCW_COURSE_META => Self::OcwCourse,
            OCW_MAKER_META => Self::OcwMaker,
            _ => Self::Unknown,
        }
    }

    /// The meta constant, `None` for `Unknown`.
    pub const fn meta(self) -> Option<u16> {
        match self {
            Self::NsoCourse => Some(NSO_COURSE_META),
            Self::NsoMaker => Some(NSO_MAKER_META),
            Self::OcwCourse => Some(OCW_COURSE_META),
            Self::OcwMaker => Some(OCW_MAKER_META),
            Self::Unknown => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NsoCourse => "NSO_COURSE",
            Self::NsoMaker => "NSO_MAKER",
            Self::OcwCourse => "OCW_COURSE",
            Self::OcwMaker => "OCW_MAKER",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Build a code of this kind carrying `value`.
    ///
    /// # Errors
    ///
    /// - `UnknownType` for [`CodeType::Unknown`]
    /// - `ValueOutOfRange` if `value` needs more than 33 bits
    /// - `Unrepresentable` if the fields do not read back from the result
    pub fn with_value(self, value: u64) -> Result<Code, CodeError> {
        let Some(meta) = self.meta() else {
            return Err(CodeError::UnknownType);
        };
        let code = Code::from_fields(meta, value)?;
        if code.meta() != meta || code.value() != value {
            return Err(CodeError::Unrepresentable { meta, value });
        }
        Ok(code)
    }
}

impl std::fmt::Display for CodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of `code`.
pub fn classify(code: &Code) -> CodeType {
    let meta = code.meta();
    let kind = CodeType::from_meta(meta);
    if kind == CodeType::Unknown {
        debug!(%code, meta, "code meta matches no known kind");
    }
    kind
}

impl Code {
    /// Shorthand for [`classify`].
    pub fn code_type(&self) -> CodeType {
        classify(self)
    }
}

/// Kind of the code written in `code`; `Unknown` if it does not parse.
pub fn get_code_type(code: &str) -> CodeType {
    match code.parse::<Code>() {
        Ok(parsed) => classify(&parsed),
        Err(e) => {
            debug!(input = code, error = %e, "unparseable code classified as unknown");
            CodeType::Unknown
        }
    }
}

fn has_meta(code: &str, meta: u16) -> bool {
    matches!(code.parse::<Code>(), Ok(parsed) if parsed.meta() == meta)
}

pub fn is_nso_course_code(code: &str) -> bool {
    has_meta(code, NSO_COURSE_META)
}

pub fn is_nso_maker_code(code: &str) -> bool {
    has_meta(code, NSO_MAKER_META)
}

pub fn is_ocw_course_code(code: &str) -> bool {
    has_meta(code, OCW_COURSE_META)
}

pub fn is_ocw_maker_code(code: &str) -> bool {
    has_meta(code, OCW_MAKER_META)
}
