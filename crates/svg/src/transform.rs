use crate::path::{Point, scan_numbers};
use anyhow::{Context, Result, bail};
use std::fmt;

/// Axis-aligned affine transform: `x' = x * sx + tx`, `y' = y * sy + ty`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub sx: f64,
    pub sy: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            sx: 1.0,
            sy: 1.0,
            tx: 0.0,
            ty: 0.0,
        }
    }
}

impl Transform {
    pub fn translate(tx: f64, ty: f64) -> Self {
        Self {
            tx,
            ty,
            ..Self::default()
        }
    }

    pub fn scale(sx: f64, sy: f64) -> Self {
        Self {
            sx,
            sy,
            ..Self::default()
        }
    }

    /// `self(inner(p))`
    pub fn compose(self, inner: Transform) -> Transform {
        Transform {
            sx: self.sx * inner.sx,
            sy: self.sy * inner.sy,
            tx: inner.tx * self.sx + self.tx,
            ty: inner.ty * self.sy + self.ty,
        }
    }

    pub fn apply(&self, p: Point) -> Point {
        Point::new(p.x * self.sx + self.tx, p.y * self.sy + self.ty)
    }

    /// Parse a `transform` attribute made of `translate(...)` and
    /// `scale(...)` steps.
    ///
    /// Steps compose like SVG: `"translate(0,1024) scale(0.1,-0.1)"` scales
    /// first, then translates.
    pub fn parse(attr: &str) -> Result<Self> {
        let is_sep = |c: char| c.is_whitespace() || c == ',';
        let mut result = Transform::default();
        let mut rest = attr.trim_start_matches(is_sep);

        while !rest.is_empty() {
            let open = rest
                .find('(')
                .with_context(|| format!("Malformed transform '{}'", attr))?;
            let close = rest[open..]
                .find(')')
                .map(|i| open + i)
                .with_context(|| format!("Unclosed '(' in transform '{}'", attr))?;

            let name = rest[..open].trim();
            let args = scan_numbers(&rest[open + 1..close])
                .with_context(|| format!("Invalid arguments for '{}'", name))?;

            let step = match (name, args.as_slice()) {
                ("translate", [tx]) => Transform::translate(*tx, 0.0),
                ("translate", [tx, ty]) => Transform::translate(*tx, *ty),
                ("scale", [s]) => Transform::scale(*s, *s),
                ("scale", [sx, sy]) => Transform::scale(*sx, *sy),
                ("translate" | "scale", _) => {
                    bail!("'{}' expects 1 or 2 arguments, got {}", name, args.len())
                }
                _ => bail!("Unsupported transform '{}'", name),
            };

            result = result.compose(step);
            rest = rest[close + 1..].trim_start_matches(is_sep);
        }

        Ok(result)
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tx={}, ty={}, sx={}, sy={}",
            self.tx, self.ty, self.sx, self.sy
        )
    }
}
