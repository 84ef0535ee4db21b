use crate::{
    errors::{AppError, IOError},
    localization::Labels,
    shapes::{enums::AttendanceMark, roster::Roster},
};
use csv::WriterBuilder;
use std::path::Path;

pub const EXPORT_DATE_FORMAT: &str = "%d/%m/%y";

/// Builds the attendance grid shared by the spreadsheet and CSV exports.
///
/// The first row holds the headers, then one row per player in roster
/// order: name, one symbol per training date, totals and percentage.
pub fn to_tabular_export(roster: &Roster, labels: &Labels) -> Vec<Vec<String>> {
    let mut header = vec![labels.player_name_header.to_string()];
    header.extend(
        roster
            .training_dates()
            .iter()
            .map(|d| d.format(EXPORT_DATE_FORMAT).to_string()),
    );
    header.extend([
        labels.total_present_header.to_string(),
        labels.total_absent_header.to_string(),
        labels.total_injured_header.to_string(),
        labels.percentage_header.to_string(),
    ]);
    let mut grid = vec![header];
    for player in roster.players() {
        let stats = player.stats();
        let mut row = vec![player.name.clone()];
        row.extend(
            player
                .attendance
                .iter()
                .map(|m| AttendanceMark::symbol(*m).to_string()),
        );
        row.extend([
            stats.present.to_string(),
            stats.absent.to_string(),
            stats.injured.to_string(),
            stats.percentage_label(),
        ]);
        grid.push(row);
    }
    grid
}

pub fn write_csv(grid: &[Vec<String>], path: &Path) -> Result<(), AppError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| AppError::IO(IOError::from(e)))?;
    for row in grid {
        writer
            .write_record(row)
            .map_err(|e| AppError::IO(IOError::from(e)))?;
    }
    writer.flush().map_err(|e| AppError::IO(IOError::from(e)))?;
    Ok(())
}
