use nom::bytes::complete::{tag_no_case, take, take_till};
use nom::combinator::opt;
use nom::sequence::{preceded, tuple};
use nom::IResult;

type Char = u8;
type Buf = [u8];

/// Split an optional leading `-` and exactly `digit_count` characters off `buf`.
/// Returns None if `buf` is too short.
pub(crate) fn signed_digits(buf: &Buf, digit_count: usize) -> Option<(bool, &Buf)> {
    let parsed: IResult<&Buf, (Option<char>, &Buf)> =
        tuple((opt(nom::character::complete::char('-')), take(digit_count)))(buf);
    parsed
        .ok()
        .map(|(_rest, (sign, digits))| (sign.is_some(), digits))
}

/// The characters of a hex string, after an optional `0x` prefix and up to
/// `end_marker`, a NUL or the end of `buf`.
pub(crate) fn hex_region(buf: &Buf, end_marker: Char) -> &Buf {
    let parsed: IResult<&Buf, &Buf> = preceded(
        opt(tag_no_case("0x")),
        take_till(|c: Char| c == end_marker || c == 0),
    )(buf);
    match parsed {
        Ok((_rest, region)) => region,
        Err(_) => buf,
    }
}
