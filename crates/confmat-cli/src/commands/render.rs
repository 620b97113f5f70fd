use std::io::{self, Write};
use std::path::Path;

use confmat_core::ConfusionCounts;
use confmat_core::svg::render_svg;

pub fn run(counts: ConfusionCounts, output: &str) {
    let svg = render_svg(&counts.grid());

    if output == "-" {
        let mut stdout = io::stdout().lock();
        if let Err(e) = stdout.write_all(svg.as_bytes()) {
            eprintln!("Failed to write SVG to stdout: {e}");
            std::process::exit(1);
        }
        return;
    }

    match write_svg(Path::new(output), &svg) {
        Ok(()) => {
            let rates = counts.rates();
            println!(
                "Sensitivity: {:.2}  Specificity: {:.2}",
                rates.sensitivity, rates.specificity
            );
            println!("Heatmap saved to: {output}");
        }
        Err(e) => {
            eprintln!("Failed to write heatmap to {output}: {e}");
            std::process::exit(1);
        }
    }
}

/// Write the SVG document, creating parent directories as needed.
pub fn write_svg(path: &Path, svg: &str) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, svg)?;
    log::debug!("wrote {} bytes to {}", svg.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_svg_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/nested/matrix.svg");
        let svg = render_svg(&ConfusionCounts::new(50, 10, 30, 5).grid());
        write_svg(&path, &svg).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, svg);
        assert!(written.contains("Confusion Matrix with Totals"));
    }

    #[test]
    fn write_svg_reports_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").unwrap();
        // A regular file cannot act as a parent directory.
        assert!(write_svg(&blocker.join("matrix.svg"), "<svg/>").is_err());
    }
}
