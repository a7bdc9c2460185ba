//! CSV export of projection points

use std::io::Write;
use std::path::Path;

use super::points::ProjectionResult;
use crate::error::Result;

/// Write one row per month to any writer
pub fn write_projection_csv<W: Write>(writer: W, result: &ProjectionResult) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for point in &result.points {
        csv_writer.serialize(point)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write one row per month to a file
pub fn write_projection_csv_file<P: AsRef<Path>>(path: P, result: &ProjectionResult) -> Result<()> {
    let file = std::fs::File::create(path.as_ref())?;
    write_projection_csv(file, result)?;
    log::info!("projection written to {}", path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::ProjectionPoint;

    #[test]
    fn test_csv_layout() {
        let mut result = ProjectionResult::with_capacity(2);
        result.add_point(ProjectionPoint { month_index: 1, client_count: 1.8, revenue: 276.0, profit: -519.0 });
        result.add_point(ProjectionPoint { month_index: 2, client_count: 3.5, revenue: 530.0, profit: -265.0 });

        let mut buffer = Vec::new();
        write_projection_csv(&mut buffer, &result).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "month_index,client_count,revenue,profit");
        assert_eq!(lines[1], "1,1.8,276.0,-519.0");
        assert_eq!(lines[2], "2,3.5,530.0,-265.0");
    }
}
