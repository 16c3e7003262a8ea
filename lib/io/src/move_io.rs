use lazy_static::lazy_static;
use regex::Regex;

use game::Commit;

use crate::{board_io::{format_square, parse_square}, ParseError};

lazy_static! {
    static ref MOVE_PATTERN: Regex = Regex::new(
        r"^\s*([a-hA-H][1-8])\s*[-x ]?\s*([a-hA-H][1-8])\s*$"
    ).unwrap();
}

/// Parses `e2e4`, `e2-e4`, `e2 e4` or `e4xd5` into origin and destination.
pub fn parse_move(text: &str) -> Result<(game::Square, game::Square), ParseError> {
    let captures = MOVE_PATTERN
        .captures(text)
        .ok_or_else(|| ParseError::InvalidMove(text.to_string()))?;

    Ok((parse_square(&captures[1])?, parse_square(&captures[2])?))
}

pub fn format_commit(commit: &Commit) -> String {
    format!(
        "{}{}{}",
        format_square(commit.from),
        if commit.captured.is_some() { 'x' } else { '-' },
        format_square(commit.to)
    )
}
