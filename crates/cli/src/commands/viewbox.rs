use anyhow::Result;
use entry_kit_svg::{SvgBounds, analyze_svg};
use std::path::PathBuf;

/// Report the bounds of an SVG's artwork and a padded viewBox for it
pub async fn run(svg: PathBuf, padding: f64) -> Result<()> {
    if !padding.is_finite() || padding < 0.0 {
        anyhow::bail!("Padding must be a non-negative number, got {}", padding);
    }

    println!("📐 Measuring {}", svg.display());
    let bounds = analyze_svg(&svg)?;
    print!("{}", render_report(&bounds, padding));

    Ok(())
}

fn render_report(bounds: &SvgBounds, padding: f64) -> String {
    let bbox = &bounds.bbox;
    let mut out = String::new();

    out.push_str(&format!(
        "   Transform: {}\n",
        bounds.transform_attr.as_deref().unwrap_or("none")
    ));
    out.push_str(&format!("   Parsed: {}\n", bounds.transform));
    out.push_str(&format!("   Points: {}\n", bounds.points));
    out.push_str(&format!(
        "   BBox: min_x={}, min_y={}, max_x={}, max_y={}\n",
        bbox.min_x, bbox.min_y, bbox.max_x, bbox.max_y
    ));
    out.push_str(&format!(
        "   Width: {}, Height: {}\n",
        bbox.width(),
        bbox.height()
    ));
    out.push_str(&format!(
        "✓ Suggested viewBox: {}\n",
        bbox.view_box(padding)
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use entry_kit_svg::analyze_svg_str;
    use std::fs;
    use tempfile::TempDir;

    const SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg"><g transform="translate(0,100) scale(1,-1)"><path d="M10 10 L30 50"/></g></svg>"#;

    #[test]
    fn test_render_report() {
        let bounds = analyze_svg_str(SVG).unwrap();
        let report = render_report(&bounds, 5.0);

        assert!(report.contains("Transform: translate(0,100) scale(1,-1)"));
        assert!(report.contains("Parsed: tx=0, ty=100, sx=1, sy=-1"));
        assert!(report.contains("BBox: min_x=10, min_y=50, max_x=30, max_y=90"));
        assert!(report.contains("Width: 20, Height: 40"));
        assert!(report.ends_with("Suggested viewBox: 5.00 45.00 30.00 50.00\n"));
    }

    #[tokio::test]
    async fn test_run_rejects_negative_padding() {
        let err = run(PathBuf::from("logo.svg"), -1.0).await.unwrap_err();
        assert!(err.to_string().contains("non-negative"));
    }

    #[tokio::test]
    async fn test_run_measures_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("logo.svg");
        fs::write(&file, SVG).unwrap();

        run(file, 10.0).await.unwrap();
        assert!(run(dir.path().join("missing.svg"), 10.0).await.is_err());
    }
}
