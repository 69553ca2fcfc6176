//! CSV import and export for the staff directory.

use crate::error::Result;
use crate::models::staff::{ImportedStaff, Staff};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Default export artifact name.
pub const EXPORT_FILENAME: &str = "staff_export.csv";

/// Check the file extension before accepting an import.
pub fn is_csv_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Parse staged staff rows from raw CSV bytes.
///
/// Row 0 is the header and is discarded; remaining rows map positionally to
/// {email, name, position}. Missing trailing columns fall back to blank.
pub fn parse_staff_csv<R: Read>(reader: R) -> Result<Vec<ImportedStaff>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        rows.push(ImportedStaff {
            email: record.get(0).unwrap_or("").trim().to_string(),
            name: record.get(1).unwrap_or("").trim().to_string(),
            position: record.get(2).unwrap_or("").trim().to_string(),
        });
    }

    Ok(rows)
}

/// Write the current staff list as CSV: one header row plus one row per
/// record, columns [Name, Email, Address, Phone, RoleId].
///
/// The projection is taken from the in-memory list at the moment of the
/// call, so an export after an import reflects the staged rows.
pub fn export_staff_csv(staffs: &[Staff], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(["Name", "Email", "Address", "Phone", "RoleId"])?;
    for staff in staffs {
        writer.write_record([
            staff.name.as_str(),
            staff.email.as_str(),
            staff.address.as_str(),
            staff.phone.as_str(),
            &staff.role_id.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Open file dialog for picking an import file.
pub fn show_open_dialog() -> Option<PathBuf> {
    rfd::FileDialog::new().add_filter("CSV Files", &["csv"]).pick_file()
}

/// Save file dialog for the export artifact.
pub fn show_save_dialog(default_name: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_file_name(default_name)
        .add_filter("CSV Files", &["csv"])
        .save_file()
}
