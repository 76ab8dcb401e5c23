//! Text renderings of codes and statistics.
//!
//! - **Horizontal**: one line per bit position, one character per codeword. Long runs of equal
//!   characters on every line are what a large gap looks like.
//! - **Vertical**: one line per codeword, bit 0 first.
//! - **C array**: an `unsigned int` array literal of zero padded hexadecimal codewords.
//!
//! The text layouts end with a blank line.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::cs::combinatorial::large_gap::code::Code;
use crate::cs::combinatorial::large_gap::gaps::Statistics;
use crate::cs::error::Result;

/// Column titles matching the [`Statistics`] row format.
pub const STATISTICS_HEADER: &str = " Bits    Length  MinGap  MaxGap";

/// How a code is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    Horizontal,
    Vertical,
    CArray,
}

impl Layout {
    /// Conventional file name for a code of `width` bits.
    pub fn file_name(&self, width: usize) -> String {
        match self {
            Layout::Horizontal | Layout::Vertical => format!("{}bitcode.txt", width),
            Layout::CArray => format!("large_gap_gray_code_{}bit.c", width),
        }
    }
}

fn bit_char(bit: bool) -> char {
    if bit {
        '1'
    } else {
        '0'
    }
}

/// One line per bit position.
///
/// # Example
/// ```
/// use lggc::large_gap::{render, Code};
///
/// let code = Code::from_values(2, &[0, 1, 3, 2]).unwrap();
/// assert_eq!(render::horizontal(&code), "0110\n0011\n\n");
/// ```
pub fn horizontal(code: &Code) -> String {
    let mut out = String::with_capacity((code.len() + 1) * code.width() + 1);
    for position in 0..code.width() {
        out.extend((0..code.len()).map(|index| bit_char(code.bit(index, position))));
        out.push('\n');
    }
    out.push('\n');
    out
}

/// One line per codeword.
pub fn vertical(code: &Code) -> String {
    let mut out = String::with_capacity((code.width() + 1) * code.len() + 1);
    for word in code.words() {
        out.extend(word.iter().by_vals().map(bit_char));
        out.push('\n');
    }
    out.push('\n');
    out
}

/// A C array named `lggc_<width>` holding every codeword.
pub fn c_array(code: &Code) -> String {
    let digits = code.width().div_ceil(4);
    let last = code.len() - 1;
    let mut out = format!("unsigned int lggc_{}[{}] = {{\n", code.width(), code.len());
    for (index, value) in code.values().enumerate() {
        out.push_str(&format!("\t0x{:0digits$x}", value, digits = digits));
        if index < last {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str("};\n");
    out
}

pub fn render(code: &Code, layout: Layout) -> String {
    match layout {
        Layout::Horizontal => horizontal(code),
        Layout::Vertical => vertical(code),
        Layout::CArray => c_array(code),
    }
}

/// Swaps rows and columns of a block of equally long lines, keeping the trailing blank line.
///
/// The transpose of a horizontal rendering is the vertical rendering of the same code.
pub fn transpose(text: &str) -> String {
    let rows: Vec<&[u8]> = text
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::as_bytes)
        .collect();
    let columns = rows.first().map_or(0, |row| row.len());

    let mut out = String::with_capacity((rows.len() + 1) * columns + 1);
    for column in 0..columns {
        out.extend(
            rows.iter()
                .filter_map(|row| row.get(column))
                .map(|&byte| char::from(byte)),
        );
        out.push('\n');
    }
    out.push('\n');
    out
}

pub fn write_code<W: Write>(out: &mut W, code: &Code, layout: Layout) -> Result<()> {
    out.write_all(render(code, layout).as_bytes())?;
    Ok(())
}

/// Writes `code` to the file at `path`, replacing its contents.
pub fn write_to_file(path: impl AsRef<Path>, code: &Code, layout: Layout) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_code(&mut out, code, layout)?;
    out.flush()?;
    Ok(())
}

/// Writes [`STATISTICS_HEADER`] followed by one line per row.
pub fn write_statistics_table<W, I>(out: &mut W, rows: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = Statistics>,
{
    writeln!(out, "{}", STATISTICS_HEADER)?;
    for row in rows {
        writeln!(out, "{}", row)?;
    }
    Ok(())
}
