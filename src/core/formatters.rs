use crate::domain::functions::StringFunction;
use crate::utils::error::Result;
use std::io::Write;

/// Appends `!` to any text.
pub static EXCLAIM: fn(&str) -> String = |n: &str| format!("{n}!");

/// Appends `?` to any text.
pub static ASK: fn(&str) -> String = |n: &str| format!("{n}?");

/// Runs `format` over `text` and writes the result as one line.
pub fn print_formatted<W, S>(out: &mut W, text: &str, format: &S) -> Result<()>
where
    W: Write + ?Sized,
    S: StringFunction + ?Sized,
{
    let result = format.transform(text);
    writeln!(out, "{}", result)?;
    Ok(())
}
