//! XLSX export of collected product records.
//!
//! One worksheet, a bold header row holding [`ProductRecord::COLUMNS`], then
//! one row per record. The workbook is rendered in memory and written through
//! a temp file in the destination directory, so an interrupted write never
//! leaves a truncated spreadsheet behind.

use std::io::Write;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook, Worksheet};

use crate::error::{Result, WbSearchError};
use crate::models::{ProductRecord, SearchFilter};

/// What [`export`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Written { path: PathBuf, rows: usize },
    /// Nothing was collected; no file was written.
    NoData,
}

/// `"{query}_from_{min}_to_{max}"`.
pub fn output_stem(filter: &SearchFilter) -> String {
    format!(
        "{}_from_{}_to_{}",
        filter.query(),
        filter.min_price(),
        filter.max_price()
    )
}

pub fn output_file_name(filter: &SearchFilter) -> String {
    format!("{}.xlsx", output_stem(filter))
}

/// Write `records` to `dir/{stem}.xlsx`, replacing any existing file.
///
/// Returns [`ExportOutcome::NoData`] without touching the filesystem when
/// `records` is empty.
pub fn export(records: &[ProductRecord], dir: &Path, filter: &SearchFilter) -> Result<ExportOutcome> {
    if records.is_empty() {
        tracing::info!("no records for {}, nothing written", filter);
        return Ok(ExportOutcome::NoData);
    }

    let path = dir.join(output_file_name(filter));
    write_xlsx(records, &path)?;
    tracing::info!(path = %path.display(), rows = records.len(), "workbook written");

    Ok(ExportOutcome::Written {
        path,
        rows: records.len(),
    })
}

/// Write `records` as a workbook at `path`.
///
/// An empty slice produces a header-only sheet.
pub fn write_xlsx(records: &[ProductRecord], path: &Path) -> Result<()> {
    let buf = render_workbook(records)?;

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(&buf)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

fn render_workbook(records: &[ProductRecord]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    let header = Format::new().set_bold();
    for (col, name) in ProductRecord::COLUMNS.iter().enumerate() {
        sheet.write_string_with_format(0, col as ColNum, *name, &header)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = RowNum::try_from(i + 1).map_err(|_| {
            WbSearchError::InvalidArgument(format!("{} records do not fit in a worksheet", records.len()))
        })?;
        write_record(sheet, row, record)?;
    }

    Ok(workbook.save_to_buffer()?)
}

enum Cell<'a> {
    Blank,
    Number(f64),
    Text(&'a str),
}

impl<'a> From<Option<&'a str>> for Cell<'a> {
    fn from(v: Option<&'a str>) -> Self {
        v.map_or(Cell::Blank, Cell::Text)
    }
}

fn num<T: Into<f64>>(v: Option<T>) -> Cell<'static> {
    v.map_or(Cell::Blank, |n| Cell::Number(n.into()))
}

/// Cells of one record in [`ProductRecord::COLUMNS`] order.
fn cells(r: &ProductRecord) -> [Cell<'_>; 14] {
    [
        num(r.id.map(|v| v as f64)),
        r.name.as_deref().into(),
        num(r.price.map(|v| v as f64)),
        num(r.sale_price.map(|v| v as f64)),
        Cell::Number(r.sale),
        r.brand.as_deref().into(),
        num(r.rating),
        r.supplier.as_deref().into(),
        num(r.supplier_rating),
        num(r.feedbacks.map(|v| v as f64)),
        num(r.review_rating),
        r.promo_text_card.as_deref().into(),
        r.promo_text_cat.as_deref().into(),
        Cell::Text(&r.link),
    ]
}

fn write_record(sheet: &mut Worksheet, row: RowNum, record: &ProductRecord) -> Result<()> {
    for (col, cell) in cells(record).into_iter().enumerate() {
        let col = col as ColNum;
        match cell {
            Cell::Blank => {}
            Cell::Number(n) => {
                sheet.write_number(row, col, n)?;
            }
            Cell::Text(s) => {
                sheet.write_string(row, col, s)?;
            }
        }
    }
    Ok(())
}
