//! Line-oriented console reporting.
//!
//! Every value, integer or float, is rendered through [`Value::render`] so
//! both entry points agree on formatting.

use std::fmt;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::error::KernelError;

/// How floating-point results are shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloatRendering {
    /// Truncate toward zero and print as an integer: `3.75` shows as `3`.
    #[default]
    Truncate,
    /// Six fractional digits: `3.75` shows as `3.750000`.
    Fixed,
}

/// A reportable result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Int(i32),
    Float(f64),
}

impl Value {
    pub fn render(self, rendering: FloatRendering) -> String {
        match (self, rendering) {
            (Value::Int(v), _) => v.to_string(),
            // `as` truncates toward zero and saturates out-of-range values.
            (Value::Float(v), FloatRendering::Truncate) => (v as i32).to_string(),
            (Value::Float(v), FloatRendering::Fixed) => format!("{v:.6}"),
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

/// Writes labeled results, headers and separators to any [`Write`] sink.
pub struct Reporter<W> {
    out: W,
    rendering: FloatRendering,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self::with_rendering(out, FloatRendering::default())
    }

    pub fn with_rendering(out: W, rendering: FloatRendering) -> Self {
        Self { out, rendering }
    }

    /// Write `text` followed by a newline.
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    /// Section header, e.g. `Power Calculations:`.
    pub fn header(&mut self, title: &str) -> io::Result<()> {
        tracing::debug!(section = title, "begin section");
        self.line(title)
    }

    pub fn blank(&mut self) -> io::Result<()> {
        self.line("")
    }

    /// `<label>: <value>` for an integer result.
    pub fn int(&mut self, label: &str, value: i32) -> io::Result<()> {
        self.result(label, Value::Int(value))
    }

    /// `<label>: <value>` for a floating-point result.
    pub fn float(&mut self, label: &str, value: f64) -> io::Result<()> {
        self.result(label, Value::Float(value))
    }

    /// `<prefix><value>` with no separator, for inline equations such as
    /// `(12 * 8) + (5 / 2) = 98`.
    pub fn equation(&mut self, prefix: &str, value: impl Into<Value>) -> io::Result<()> {
        let rendered = value.into().render(self.rendering);
        writeln!(self.out, "{prefix}{rendered}")
    }

    fn result(&mut self, label: &str, value: Value) -> io::Result<()> {
        let rendered = value.render(self.rendering);
        writeln!(self.out, "{label}: {rendered}")
    }

    /// Report-and-continue: on error, print the diagnostic and yield
    /// [`KernelError::SENTINEL`] in place of the failed result.
    pub fn recover(&mut self, result: Result<f64, KernelError>) -> io::Result<f64> {
        match result {
            Ok(v) => Ok(v),
            Err(e) => {
                tracing::warn!(error = ?e, "recovered with sentinel value");
                writeln!(self.out, "{e}")?;
                Ok(KernelError::SENTINEL)
            }
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W> fmt::Debug for Reporter<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reporter")
            .field("rendering", &self.rendering)
            .finish_non_exhaustive()
    }
}
