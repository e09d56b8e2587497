// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use nom::{IResult, Parser,
          bytes::complete::{tag, take_while_m_n},
          combinator::{all_consuming, map_res, opt}};

/// Parse `rrggbb` or `#rrggbb` into `(red, green, blue)`. The whole input must be
/// consumed.
pub fn parse_hex_color(input: &str) -> IResult<&str, (u8, u8, u8)> {
    let (input, _) = opt(tag("#")).parse(input)?;
    all_consuming((
        helper_fns::parse_hex_seg,
        helper_fns::parse_hex_seg,
        helper_fns::parse_hex_seg,
    ))
    .parse(input)
}

/// Helper functions to match and parse hex digits.
mod helper_fns {
    use super::{IResult, Parser, map_res, take_while_m_n};

    /// This function is used by [map_res] and it returns a [Result], not [IResult].
    pub fn parse_str_to_hex_num(input: &str) -> Result<u8, std::num::ParseIntError> {
        u8::from_str_radix(input, 16)
    }

    /// As long as this returns `true` items will be taken from the input.
    pub fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

    pub fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
        map_res(take_while_m_n(2, 2, match_is_hex_digit), parse_str_to_hex_num)
            .parse(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_parse_valid_color() {
        let (rem, color) = parse_hex_color("#2F14DF").unwrap();
        assert_eq2!(rem, "");
        assert_eq2!(color, (47, 20, 223));
    }

    #[test]
    fn test_parse_without_hash() {
        let (_, color) = parse_hex_color("0a0b0c").unwrap();
        assert_eq2!(color, (10, 11, 12));
    }

    #[test]
    fn test_parse_rejects_trailing_input() {
        assert!(parse_hex_color("#2F14DF ").is_err());
        assert!(parse_hex_color("2F14DFAA").is_err());
    }

    #[test]
    fn test_parse_rejects_short_input() {
        assert!(parse_hex_color("#2F14D").is_err());
        assert!(parse_hex_color("").is_err());
    }
}
