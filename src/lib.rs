//! # Course and maker codes (course-code)
//!
//! Encodes and decodes the short codes used to share Mario Maker courses and
//! makers, such as `2JD-H08-CC8`.
//!
//! ## Design
//!
//! A code is a base30 number printed in dash-separated groups of three. Its
//! payload is digit-reversed (padded to 9 digits) before the fields are read,
//! and the reversed integer has a fixed layout:
//!
//! ```text
//! ┌──────────┬─────────┬─────────┬──────────┬─────────┬─────────┐
//! │ Padding  │ Value A │ Meta A  │ Value B  │ Meta B  │ Value C │
//! │ 9 bits   │ 1 bit   │ 4 bits  │ 26 bits  │ 8 bits  │ 6 bits  │
//! └──────────┴─────────┴─────────┴──────────┴─────────┴─────────┘
//! ```
//!
//! `meta` tells the kind of code apart (course or maker, NSO or OCW), `value`
//! identifies the course or maker.
//!
//! ## Usage
//!
//! ```
//! use course_code::{Code, CodeType};
//!
//! let code: Code = "2JD-H08-CC8".parse().unwrap();
//! assert_eq!(code.code_type(), CodeType::OcwMaker);
//! assert_eq!(code.value(), 100_314);
//!
//! let next = code.with_value(100_315).unwrap();
//! assert_eq!(next.to_string(), "3JD-H08-CC8");
//! ```
//!
//! Every decoding and field operation is a `const fn`, so codes can be
//! checked at compile time:
//!
//! ```
//! use course_code::Code;
//!
//! const DEMO: Code = match Code::from_fields(course_code::NSO_COURSE_META, 0) {
//!     Ok(code) => code,
//!     Err(_) => panic!("out of range"),
//! };
//! assert_eq!(DEMO.to_string(), "G76-34Y-5DF");
//! ```

pub mod base30;
pub mod classify;
pub mod code;
pub mod divmod;
pub mod error;
pub mod format;
pub mod layout;

pub use classify::{
    CodeType, NSO_COURSE_META, NSO_MAKER_META, OCW_COURSE_META, OCW_MAKER_META, classify,
    get_code_type, is_nso_course_code, is_nso_maker_code, is_ocw_course_code, is_ocw_maker_code,
};
pub use code::Code;
pub use error::CodeError;
pub use format::format_code;
pub use layout::{MAX_META, MAX_PAYLOAD, MAX_VALUE};

#[cfg(feature = "macros")]
pub use course_code_macro::code;
