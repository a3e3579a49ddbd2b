//! Plain-text rendering of tables and summaries.
//!
//! Each report is a borrowed view implementing [`Display`](fmt::Display).

use std::fmt;

use crate::{Comparison, Config, Convergence, Row, RunResult};

const TABLE_HEADER: &str =
    "i   x_i       y_i (RK4)   k1        k2       k3        k4       True y(x)";

/// The detailed Runge–Kutta table, one line per [`Row`].
#[derive(Debug, Clone, Copy)]
pub struct Table<'a>(pub &'a [Row]);

impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TABLE_HEADER}")?;

        for row in self.0 {
            let Row {
                index,
                state,
                slopes,
                exact,
            } = row;

            match slopes {
                Some(k) => writeln!(
                    f,
                    "{index}   {:.5}   {:.5}   {:.5}   {:.5}   {:.5}   {:.5}   {exact:.5}",
                    state.x, state.y, k.k1, k.k2, k.k3, k.k4,
                )?,
                None => writeln!(
                    f,
                    "{index}   {:.5}   {:.5}     ----      ----     ----      ----     {exact:.5}",
                    state.x, state.y,
                )?,
            }
        }

        Ok(())
    }
}

/// The long-run comparison summary.
#[derive(Debug, Clone, Copy)]
pub struct Summary<'a> {
    /// The configuration both runs used.
    pub config: &'a Config,

    /// The measured runs.
    pub comparison: &'a Comparison,
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(
            f,
            "Long run summary (~{} points, h={}):",
            self.config.steps(),
            Shortest(self.config.step_size())
        )?;

        for result in self.comparison.results() {
            let RunResult {
                method,
                final_state,
                exact,
                error,
                elapsed,
            } = result;

            writeln!(
                f,
                "{method:<5} -> end x={:.6}, y={:.6}, true={exact:.6}, abs_err={}, time_sec={:.6}",
                final_state.x,
                final_state.y,
                Scientific(*error),
                elapsed.as_secs_f64(),
            )?;
        }

        Ok(())
    }
}

/// Observed convergence orders for each method.
#[derive(Debug, Clone, Copy)]
pub struct ConvergenceReport<'a> {
    /// The coarse configuration; the refined one halves its step size.
    pub config: &'a Config,

    /// One study per method, in report order.
    pub studies: &'a [Convergence],
}

impl fmt::Display for ConvergenceReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = self.config.step_size();

        writeln!(f)?;
        writeln!(
            f,
            "Convergence over {} (h={} -> h={}):",
            Shortest(self.config.horizon()),
            Shortest(h),
            Shortest(h / 2.0)
        )?;

        for study in self.studies {
            writeln!(
                f,
                "{:<5} -> abs_err={} -> {}, ratio={:.2}, order={:.2}",
                study.method,
                Scientific(study.coarse.error),
                Scientific(study.fine.error),
                study.ratio(),
                study.order(),
            )?;
        }

        Ok(())
    }
}

/// Scientific notation with a signed, two-digit exponent: `1.326050e-12`,
/// `5.373799e-03`.
///
/// Uses six digits after the decimal point unless a precision is given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scientific(pub f64);

impl fmt::Display for Scientific {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(6);
        write_padded_exponent(f, &format!("{:.*e}", precision, self.0))
    }
}

/// The shortest decimal that reads back as the same value, switching to
/// scientific notation below `1e-4` and from `1e16` on: `0.003`, `1.0`,
/// `1e-07`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shortest(pub f64);

impl fmt::Display for Shortest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_padded_exponent(f, &format!("{:?}", self.0))
    }
}

/// Writes `formatted`, widening any exponent to a sign and at least two digits.
fn write_padded_exponent(f: &mut fmt::Formatter<'_>, formatted: &str) -> fmt::Result {
    // Non-finite values and plain decimals have no exponent.
    let Some((mantissa, exponent)) = formatted.split_once('e') else {
        return f.write_str(formatted);
    };

    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };

    write!(f, "{mantissa}e{sign}{digits:0>2}")
}
