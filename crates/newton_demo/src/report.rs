use std::io::{self, Write};

use newton_raphson::{FunctionWithSlope, Num, RootResult};

/// Writes a human readable summary of a run.
pub fn write_report<W: Write>(
    writer: &mut W,
    function: &dyn FunctionWithSlope,
    initial_guess: Num,
    result: &RootResult,
) -> io::Result<()> {
    match result.root {
        Some(root) if result.status.is_root() => {
            writeln!(writer, "\t{}", result.status)?;
            writeln!(writer, "\tInitial value: {initial_guess}")?;
            writeln!(writer, "\tRoot: {root}")?;
            writeln!(writer, "\tFunction value: {}", function.value(root))?;
            writeln!(writer, "\tIterations: {}", result.iterations)
        }
        _ => {
            writeln!(
                writer,
                "{} with initial value {initial_guess}",
                result.status
            )?;
            writeln!(writer, "\tIterations: {}", result.iterations)
        }
    }
}
