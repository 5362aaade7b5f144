//! Sort key types for comparing color values
//!
//! A color is ranked by a short decimal string derived from its hex digits.
//! The rank, the padded saturation and an insertion counter are concatenated
//! into a single key that is compared byte-wise.

use super::traits::SortKey;
use super::utils::pad_left;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Rank of a record without a color.
///
/// Space (0x20) sorts before every ASCII digit, so empty colors come first in
/// ascending order without any special casing in the comparator.
pub const NO_COLOR_RANK: &str = "     ";

/// Width the decimal color rank is padded to.
pub const RANK_WIDTH: usize = 5;

/// Width the saturation is padded to.
pub const SATURATION_WIDTH: usize = 3;

/// How hex strings outside the expected shapes are ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HexPolicy {
    /// Historic behaviour: any non-empty string is parsed as far as it holds
    /// hex digits; lengths other than 6 skip the channel reduction.
    #[default]
    Lenient,
    /// Only empty, 3-digit and 6-digit hex strings made of hex digits are
    /// ranked; anything else ranks like a missing color.
    Strict,
}

/// Derive the rank of a hex color using [`HexPolicy::Lenient`].
pub fn derive_sort_value(hex: &str) -> String {
    derive_sort_value_with(hex, HexPolicy::Lenient)
}

/// Derive the rank of a hex color under the given policy.
///
/// A 6-digit color is reduced to the high nibble of each channel before it
/// is read as a base-16 number, which approximates hue ordering without any
/// color space conversion. The decimal result is left-padded to
/// [`RANK_WIDTH`] characters.
pub fn derive_sort_value_with(hex: &str, policy: HexPolicy) -> String {
    if hex.is_empty() {
        return NO_COLOR_RANK.to_string();
    }

    if policy == HexPolicy::Strict && !is_well_formed(hex) {
        return NO_COLOR_RANK.to_string();
    }

    let bytes = hex.as_bytes();
    let digits: Cow<'_, [u8]> = if bytes.len() == 6 {
        Cow::Owned(vec![bytes[0], bytes[2], bytes[4]])
    } else {
        // Shorthand and every other length go straight to the parser.
        Cow::Borrowed(bytes)
    };

    let value = parse_hex_prefix(&digits).to_string();
    pad_left(&value, RANK_WIDTH, '0').into_owned()
}

/// Read the leading run of hex digits as a number.
///
/// Parsing stops at the first non-hex byte; no digits at all yields 0.
/// Values too large for `u64` saturate.
pub fn parse_hex_prefix(digits: &[u8]) -> u64 {
    digits
        .iter()
        .map_while(|&b| (b as char).to_digit(16))
        .fold(0u64, |acc, digit| {
            acc.saturating_mul(16).saturating_add(u64::from(digit))
        })
}

fn is_well_formed(hex: &str) -> bool {
    matches!(hex.len(), 3 | 6) && hex.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Composite key ordering one record: `_` + rank + saturation + counter.
///
/// The counter is rendered without padding, so among ten or more records
/// sharing rank and saturation the tie-break follows the counter's decimal
/// text (`"10"` sorts before `"2"`). Keys stay unique either way.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ColorSortKey(String);

impl ColorSortKey {
    /// Build the key from an already derived rank.
    pub fn compose(rank: &str, saturation: &str, counter: usize) -> Self {
        let saturation = pad_left(saturation, SATURATION_WIDTH, '0');
        let mut key = String::with_capacity(1 + rank.len() + saturation.len() + 4);
        key.push('_');
        key.push_str(rank);
        key.push_str(&saturation);
        key.push_str(&counter.to_string());
        ColorSortKey(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ColorSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl SortKey for ColorSortKey {
    fn missing() -> Self {
        ColorSortKey::compose(NO_COLOR_RANK, "", 0)
    }

    fn is_missing(&self) -> bool {
        self.0
            .strip_prefix('_')
            .is_some_and(|rest| rest.starts_with(NO_COLOR_RANK))
    }
}
