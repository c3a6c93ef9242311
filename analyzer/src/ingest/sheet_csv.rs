use anyhow::{anyhow, Context};
use beamcore::sources::{Axis, SheetColumns, SheetPayload, SheetSample};
use std::path::Path;

/// Reads one exported measurement sheet (CSV) into a sheet payload.
///
/// The header row must carry an `<Axis>(cm)` or `<Axis>(mm)` position
/// column and a `Dose(%)` column; anything else fails before analysis.
pub fn read_sheet(path: &Path, axis: Axis) -> anyhow::Result<SheetPayload> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening measurement sheet {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("reading headers of {}", path.display()))?
        .iter()
        .map(str::to_string)
        .collect();
    let columns = SheetColumns::resolve(&headers, axis)
        .with_context(|| format!("resolving columns of {}", path.display()))?;

    let mut samples = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("reading row {} of sheet", row + 1))?;
        let position = parse_cell(&record, columns.position, row)?;
        let dose = parse_cell(&record, columns.dose, row)?;
        samples.push(SheetSample { position, dose });
    }

    Ok(SheetPayload {
        axis,
        unit: columns.unit,
        samples,
    })
}

fn parse_cell(record: &csv::StringRecord, column: usize, row: usize) -> anyhow::Result<f64> {
    let cell = record
        .get(column)
        .ok_or_else(|| anyhow!("row {} is missing column {}", row + 1, column))?;
    cell.trim()
        .parse::<f64>()
        .with_context(|| format!("parsing '{}' in row {} as a number", cell, row + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use beamcore::sources::PositionUnit;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sheet(contents: &str) -> NamedTempFile {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(contents.as_bytes()).unwrap();
        temp
    }

    #[test]
    fn read_sheet_parses_cm_columns() {
        let temp = sheet("Inline(cm),Dose(%)\n-2.0,10.0\n0.0,100.0\n2.0,10.0\n");
        let payload = read_sheet(temp.path(), Axis::Inline).unwrap();
        assert_eq!(payload.unit, PositionUnit::Cm);
        assert_eq!(payload.samples.len(), 3);
        assert_eq!(payload.samples[1].dose, 100.0);
    }

    #[test]
    fn read_sheet_accepts_mm_positions() {
        let temp = sheet("Crossline(mm),Dose(%)\n-20,10\n0,100\n20,10\n");
        let payload = read_sheet(temp.path(), Axis::Crossline).unwrap();
        assert_eq!(payload.unit, PositionUnit::Mm);
        let profile = payload.to_profile().unwrap();
        assert_eq!(profile.points()[0].x, -2.0);
    }

    #[test]
    fn read_sheet_rejects_missing_columns() {
        let temp = sheet("Position,Dose(%)\n0.0,100.0\n");
        let err = read_sheet(temp.path(), Axis::Inline).unwrap_err();
        assert!(format!("{:#}", err).contains("Inline(cm)"));
    }

    #[test]
    fn read_sheet_rejects_unparsable_numbers() {
        let temp = sheet("Inline(cm),Dose(%)\n0.0,abc\n");
        assert!(read_sheet(temp.path(), Axis::Inline).is_err());
    }
}
