//! Interactive console demo that exercises every shape and matrix operation.
//!
//! The console layout is fixed: measurements with four decimals, the radius
//! echoed with two, and matrices in four character columns.

pub mod config;
pub mod format;
pub mod input;

use std::io::{BufRead, Write};

use anyhow::Context;
use tracing::info;

pub use config::DemoConfig;
pub use format::fixed;
pub use input::TokenReader;

use crate::numerics::random::RandomSource;
use crate::numerics::types::matrix::Matrix;
use crate::shapes::circle::Circle;
use crate::shapes::sphere::Sphere;

/// Run the demo, prompting on `output` and reading answers from `input`.
///
/// Matrices are filled from `source` within the configured value range.
pub fn run<R, W, S>(config: &DemoConfig, input: R, output: &mut W, source: &mut S) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write + ?Sized,
    S: RandomSource + ?Sized,
{
    config.validate()?;
    let mut reader = TokenReader::new(input);

    prompt(output, "Enter radius for circle and sphere: ")?;
    let radius: f64 = reader.next_value()?;
    let circle = Circle::new(radius)?;
    let sphere = Sphere::new(radius)?;
    report_shapes(output, &circle, &sphere)?;

    prompt(output, "\nEnter number of rows for matrix A: ")?;
    let rows_a = reader.next_positive()?;
    prompt(output, "Enter number of columns for matrix A (and rows for B): ")?;
    let cols_a = reader.next_positive()?;
    prompt(output, "Enter number of columns for matrix B: ")?;
    let cols_b = reader.next_positive()?;
    info!(rows_a, cols_a, cols_b, "matrix dimensions read");

    let a = Matrix::random(rows_a, cols_a, config.min_value, config.max_value, source)?;
    let b = Matrix::random(cols_a, cols_b, config.min_value, config.max_value, source)?;
    report_matrices(output, &a, &b)?;

    output.flush().context("failed to flush output")?;
    Ok(())
}

fn prompt<W: Write + ?Sized>(output: &mut W, text: &str) -> anyhow::Result<()> {
    write!(output, "{text}")?;
    output.flush().context("failed to flush prompt")
}

fn report_shapes<W: Write + ?Sized>(output: &mut W, circle: &Circle, sphere: &Sphere) -> anyhow::Result<()> {
    writeln!(output, "\nCIRCLE (r = {})", fixed(circle.radius(), 2))?;
    writeln!(output, "Circumference: {}", fixed(circle.circumference(), 4))?;
    writeln!(output, "Area:          {}", fixed(circle.area(), 4))?;

    writeln!(output, "\nSPHERE (r = {})", fixed(sphere.radius(), 2))?;
    writeln!(output, "Surface area:  {}", fixed(sphere.surface_area(), 4))?;
    writeln!(output, "Volume:        {}", fixed(sphere.volume(), 4))?;
    Ok(())
}

fn report_matrices<W: Write + ?Sized>(output: &mut W, a: &Matrix, b: &Matrix) -> anyhow::Result<()> {
    writeln!(output, "\nMatrix A:")?;
    a.print_to(output)?;

    writeln!(output, "Matrix B:")?;
    b.print_to(output)?;

    writeln!(output, "Transpose of A:")?;
    a.transpose().print_to(output)?;

    writeln!(output, "Spiral order of A:")?;
    a.print_spiral_to(output)?;

    writeln!(output, "\nA * B:")?;
    a.multiply(b)?.print_to(output)?;
    Ok(())
}
