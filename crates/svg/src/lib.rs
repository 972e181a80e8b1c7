// Bounding boxes and padded viewBox suggestions for traced SVG logos

pub mod path;
pub mod transform;

pub use path::{Point, parse_path};
pub use transform::Transform;

use anyhow::{Context, Result, bail};
use std::fmt;
use std::fs;
use std::path::Path;

pub const DEFAULT_PADDING: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;

        for p in points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        if min_x.is_finite() && min_y.is_finite() && max_x.is_finite() && max_y.is_finite() {
            Some(Self {
                min_x,
                min_y,
                max_x,
                max_y,
            })
        } else {
            None
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// The box grown by `padding` on every side
    pub fn view_box(&self, padding: f64) -> ViewBox {
        ViewBox {
            x: self.min_x - padding,
            y: self.min_y - padding,
            width: self.width() + 2.0 * padding,
            height: self.height() + 2.0 * padding,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// `viewBox` attribute value, two decimals per field
impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} {:.2} {:.2} {:.2}",
            self.x, self.y, self.width, self.height
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SvgBounds {
    /// Raw `transform` attribute of the first group, if any
    pub transform_attr: Option<String>,
    pub transform: Transform,
    pub points: usize,
    pub bbox: BoundingBox,
}

/// Measure an SVG file
pub fn analyze_svg<P: AsRef<Path>>(path: P) -> Result<SvgBounds> {
    let path = path.as_ref();
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    analyze_svg_str(&content).with_context(|| format!("Failed to measure {}", path.display()))
}

/// Measure the first `<path>` of the first `<g>` (or of the document when
/// there is no group), in the group's transformed coordinates.
///
/// Element names match with or without the SVG namespace.
pub fn analyze_svg_str(content: &str) -> Result<SvgBounds> {
    let doc = roxmltree::Document::parse(content).context("Failed to parse SVG")?;

    let group = doc.descendants().find(|n| n.has_tag_name("g"));
    let transform_attr = group
        .and_then(|g| g.attribute("transform"))
        .map(str::to_string);
    let transform = match &transform_attr {
        Some(attr) => Transform::parse(attr)?,
        None => Transform::default(),
    };

    let scope = group.unwrap_or_else(|| doc.root());
    let Some(path_node) = scope.descendants().find(|n| n.has_tag_name("path")) else {
        bail!("No <path> element found");
    };
    let d = path_node
        .attribute("d")
        .context("<path> element has no 'd' attribute")?;

    let points: Vec<Point> = parse_path(d)?
        .into_iter()
        .map(|p| transform.apply(p))
        .collect();
    let Some(bbox) = BoundingBox::from_points(&points) else {
        bail!("No points found in path data");
    };

    Ok(SvgBounds {
        transform_attr,
        transform,
        points: points.len(),
        bbox,
    })
}
