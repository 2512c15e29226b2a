//! The `Code` value type.

use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::trace;
use zerocopy::byteorder::little_endian::U64;
use zerocopy::{FromBytes, IntoBytes};

use crate::base30::{self, Digits};
use crate::error::CodeError;
use crate::format::format_code;
use crate::layout::{MAX_PAYLOAD, inject_meta, inject_value, inverse, meta_of, value_of};

/// A course or maker code.
///
/// Holds the canonical payload (at most [`MAX_PAYLOAD`]). `value` and `meta`
/// are views computed from the digit-reversed payload on every call; the
/// `with_*` methods return a new code and never modify `self`.
///
/// Equality, ordering and hashing follow the payload, so `"2JD-H08-CC8"` and
/// `"000-2JD-H08-CC8"` are the same code.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code(u64);

impl Code {
    /// The code with payload zero (`000-000-000`).
    pub const ZERO: Code = Code(0);

    pub const fn new() -> Self {
        Self::ZERO
    }

    /// Wrap a raw payload.
    ///
    /// # Errors
    ///
    /// `PayloadOutOfRange` if `payload` exceeds [`MAX_PAYLOAD`].
    pub const fn from_payload(payload: u64) -> Result<Self, CodeError> {
        if payload > MAX_PAYLOAD {
            return Err(CodeError::PayloadOutOfRange { payload });
        }
        Ok(Self(payload))
    }

    /// Parse a display string in `const` context.
    ///
    /// Characters outside the base30 alphabet (dashes, spaces, lower case)
    /// are skipped. Same result as [`str::parse`], without the trace event.
    pub const fn parse(text: &str) -> Result<Self, CodeError> {
        match base30::decode(text) {
            Ok(payload) => Self::from_payload(payload),
            Err(e) => Err(e),
        }
    }

    /// Build a code from both fields at once.
    ///
    /// The fields are written into a zero working integer, which is then
    /// inverted once.
    pub const fn from_fields(meta: u16, value: u64) -> Result<Self, CodeError> {
        let working = match inject_meta(0, meta) {
            Ok(w) => w,
            Err(e) => return Err(e),
        };
        let working = match inject_value(working, value) {
            Ok(w) => w,
            Err(e) => return Err(e),
        };
        Ok(Self(inverse(working)))
    }

    /// The raw canonical payload. Not the same as [`value`](Self::value).
    #[inline]
    pub const fn payload(self) -> u64 {
        self.0
    }

    /// The digit-reversed payload the fields are read from.
    #[inline]
    pub const fn inverted(self) -> u64 {
        inverse(self.0)
    }

    /// The meta classifier (12 bits).
    #[inline]
    pub const fn meta(self) -> u16 {
        meta_of(self.inverted())
    }

    /// The 33-bit value.
    #[inline]
    pub const fn value(self) -> u64 {
        value_of(self.inverted())
    }

    /// A copy of this code with `meta` replaced.
    ///
    /// # Errors
    ///
    /// `MetaOutOfRange` if `meta` needs more than 14 bits.
    pub fn with_meta(self, meta: u16) -> Result<Self, CodeError> {
        let working = inject_meta(self.inverted(), meta)?;
        let code = Self(inverse(working));
        trace!(from = %self, to = %code, meta, "replaced code meta");
        Ok(code)
    }

    /// A copy of this code with `value` replaced.
    ///
    /// # Errors
    ///
    /// `ValueOutOfRange` if `value` needs more than 33 bits.
    pub fn with_value(self, value: u64) -> Result<Self, CodeError> {
        let working = inject_value(self.inverted(), value)?;
        let code = Self(inverse(working));
        trace!(from = %self, to = %code, value, "replaced code value");
        Ok(code)
    }

    /// Little-endian binary form of the payload.
    pub fn to_bytes(self) -> [u8; 8] {
        let mut out = [0u8; 8];
        out.copy_from_slice(U64::new(self.0).as_bytes());
        out
    }

    /// Read the binary form written by [`to_bytes`](Self::to_bytes).
    ///
    /// # Errors
    ///
    /// `InvalidLength` unless `bytes` is exactly 8 bytes long, and
    /// `PayloadOutOfRange` for payloads wider than 54 bits.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodeError> {
        let raw = U64::read_from_bytes(bytes)
            .map_err(|_| CodeError::InvalidLength { len: bytes.len() })?;
        Self::from_payload(raw.get())
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_code(&Digits::of(self.0).to_string()))
    }
}

impl std::fmt::Debug for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Code").field(&self.to_string()).finish()
    }
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let skipped = base30::skipped_chars(s);
        if skipped > 0 {
            trace!(input = s, skipped, "skipped characters outside the code alphabet");
        }
        Self::parse(s)
    }
}

impl TryFrom<u64> for Code {
    type Error = CodeError;

    fn try_from(payload: u64) -> Result<Self, Self::Error> {
        Self::from_payload(payload)
    }
}

impl From<Code> for u64 {
    fn from(code: Code) -> Self {
        code.payload()
    }
}

impl Serialize for Code {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Code {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(CodeVisitor)
    }
}

/// Accepts a display string or a raw payload.
struct CodeVisitor;

impl Visitor<'_> for CodeVisitor {
    type Value = Code;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a code string or an unsigned payload")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Code, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Code, E> {
        Code::from_payload(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Code, E> {
        let payload = u64::try_from(v)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))?;
        self.visit_u64(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{MAX_META, MAX_VALUE};

    #[test]
    fn default_is_zero() {
        assert_eq!(Code::new(), Code::ZERO);
        assert_eq!(Code::default().payload(), 0);
        assert_eq!(Code::ZERO.to_string(), "000-000-000");
    }

    #[test]
    fn parse_known_code() {
        let code: Code = "2JD-H08-CC8".parse().unwrap();
        assert_eq!(code.payload(), 1_671_232_726_238);
        assert_eq!(code.meta(), 1337);
        assert_eq!(code.value(), 100_314);
        assert_eq!(code.to_string(), "2JD-H08-CC8");
    }

    #[test]
    fn const_parse_matches_from_str() {
        const CODE: Code = match Code::parse("93W-SBN-P5G") {
            Ok(c) => c,
            Err(_) => panic!("bad code"),
        };
        assert_eq!(CODE, "93W-SBN-P5G".parse().unwrap());
        assert_eq!(CODE.meta(), 2117);
    }

    #[test]
    fn leading_zero_groups_do_not_matter() {
        let a: Code = "2JD-H08-CC8".parse().unwrap();
        let b: Code = "000-2JD-H08-CC8".parse().unwrap();
        let c: Code = "2JDH08CC8".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(b.to_string(), "2JD-H08-CC8");
    }

    #[test]
    fn payload_range_is_enforced() {
        assert!(Code::from_payload(MAX_PAYLOAD).is_ok());
        assert_eq!(
            Code::from_payload(MAX_PAYLOAD + 1),
            Err(CodeError::PayloadOutOfRange { payload: MAX_PAYLOAD + 1 })
        );
        assert!(Code::try_from(u64::MAX).is_err());
        assert_eq!(Code::from_payload(MAX_PAYLOAD).unwrap().to_string(), "10H-6RM-1YT-LV3");
    }

    #[test]
    fn long_strings_are_rejected() {
        assert_eq!(
            "YYY-YYY-YYY-YYY".parse::<Code>(),
            Err(CodeError::PayloadOutOfRange { payload: 30u64.pow(12) - 1 })
        );
        assert_eq!("YYY-YYY-YYY-YYY-YYY".parse::<Code>(), Err(CodeError::Overflow));
    }

    #[test]
    fn numeric_coercion_is_the_payload() {
        let code: Code = "X73-X4W-HD5".parse().unwrap();
        assert_eq!(u64::from(code), 18_526_761_382_865);
        assert_ne!(u64::from(code), code.value());
    }

    #[test]
    fn with_fields_return_new_codes() {
        let original = Code::ZERO;
        let code = original.with_meta(2117).unwrap().with_value(12345).unwrap();
        assert_eq!(original, Code::ZERO);
        assert_eq!(code.meta(), 2117);
        assert_eq!(code.value(), 12345);
        assert_eq!(code.to_string(), "YJP-Y7Y-5DF");
    }

    #[test]
    fn from_fields_matches_chained_writes() {
        let chained = Code::ZERO.with_meta(808).unwrap().with_value(4_294_967_295).unwrap();
        assert_eq!(Code::from_fields(808, 4_294_967_295), Ok(chained));
        assert_eq!(chained.to_string(), "FC0-1KY-2P6");
    }

    #[test]
    fn with_fields_reject_out_of_range() {
        assert_eq!(
            Code::ZERO.with_meta(MAX_META + 1),
            Err(CodeError::MetaOutOfRange { meta: 16384 })
        );
        assert_eq!(
            Code::ZERO.with_value(MAX_VALUE + 1),
            Err(CodeError::ValueOutOfRange { value: 8_589_934_592 })
        );
        assert!(Code::ZERO.with_meta(MAX_META).is_ok());
        assert!(Code::ZERO.with_value(MAX_VALUE).is_ok());
        assert!(Code::from_fields(MAX_META + 1, 0).is_err());
    }

    #[test]
    fn max_value_from_zero() {
        let code = Code::ZERO.with_value(MAX_VALUE).unwrap();
        assert_eq!(code.value(), MAX_VALUE);
        assert_eq!(code.meta(), 0);
        assert_eq!(code.to_string(), "1YB-XM5-NGX");
    }

    #[test]
    fn ten_digit_working_integer_loses_trailing_zero() {
        // Value A plus a high meta pushes the working integer past 30^9 with a
        // trailing zero digit, which the second reversal drops.
        let code = Code::ZERO.with_meta(2117).unwrap().with_value(1 << 32).unwrap();
        assert_eq!(code.to_string(), "X89-DWK-6B1");
        assert_eq!(code.meta(), 53);
        assert_eq!(code.value(), 3_435_973_856);
    }

    #[test]
    fn debug_shows_display_form() {
        let code: Code = "DNW-TB6-2XF".parse().unwrap();
        assert_eq!(format!("{:?}", code), "Code(\"DNW-TB6-2XF\")");
    }

    #[test]
    fn binary_form() {
        let code: Code = "2JD-H08-CC8".parse().unwrap();
        let bytes = code.to_bytes();
        assert_eq!(bytes, 1_671_232_726_238u64.to_le_bytes());
        assert_eq!(Code::from_bytes(&bytes), Ok(code));
        assert_eq!(Code::from_bytes(&bytes[..7]), Err(CodeError::InvalidLength { len: 7 }));
        assert_eq!(
            Code::from_bytes(&u64::MAX.to_le_bytes()),
            Err(CodeError::PayloadOutOfRange { payload: u64::MAX })
        );
    }
}
