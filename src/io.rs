use anyhow::{bail, Context, Result};
use fruitrage_core::engine::Move;
use fruitrage_core::logic::board::{Board, BoardError, MAX_FRUIT_TYPES};
use fruitrage_core::Decision;
use std::fs;

/// Parsed contents of the persisted input: the starting position and the
/// wall-clock budget the engine may still spend.
pub struct Input {
    pub board: Board,
    pub remaining_seconds: f64,
}

/// Reads the input file: board side, fruit-type count, remaining seconds,
/// then the board rows.
pub fn read_input(path: &str) -> Result<Input> {
    let text = fs::read_to_string(path).with_context(|| format!("cannot read {path}"))?;
    parse_input(&text).with_context(|| format!("malformed input in {path}"))
}

fn parse_input(text: &str) -> Result<Input> {
    let mut lines = text.lines();

    let n: usize = lines
        .next()
        .context("missing board-size line")?
        .trim()
        .parse()
        .context("board size is not a number")?;
    let p: u8 = lines
        .next()
        .context("missing fruit-type-count line")?
        .trim()
        .parse()
        .context("fruit-type count is not a number")?;
    if p == 0 || p > MAX_FRUIT_TYPES {
        bail!(BoardError::InvalidTypeCount(p));
    }
    let remaining_seconds: f64 = lines
        .next()
        .context("missing remaining-time line")?
        .trim()
        .parse()
        .context("remaining time is not a number")?;

    let rows: Vec<&str> = lines.take(n).collect();
    if rows.len() != n {
        bail!("expected {n} board rows, found {}", rows.len());
    }
    let board = Board::from_rows(&rows).context("invalid board")?;

    Ok(Input {
        board,
        remaining_seconds,
    })
}

/// Human-facing move label: column letter then 1-based row number, so the
/// cell at row 4, column 2 reads "C5".
#[allow(clippy::cast_possible_truncation)]
pub fn move_label(mv: &Move) -> String {
    let col = char::from(b'A' + mv.anchor.col as u8);
    format!("{col}{}", mv.anchor.row + 1)
}

/// Writes the chosen move and the resulting board, CRLF-separated, with no
/// newline after the last board row.
pub fn write_output(path: &str, decision: &Decision) -> Result<()> {
    let mut content = String::new();
    content.push_str(&move_label(&decision.mv));
    content.push_str("\r\n");
    content.push_str(&decision.board.rows().join("\r\n"));
    fs::write(path, &content).with_context(|| format!("cannot write {path}"))?;
    Ok(())
}
