//! Shared fixtures: the same report as CSV text and as in-memory ODS and XLSX
//! workbooks.

#![allow(dead_code)]

use std::io::{Cursor, Write};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

pub const LABELS: &str = "Month,Google clicks,Google CPC,Google cost,Google impressions,\
eBay clicks,eBay impressions,eBay orders,eBay cost,Cart adds,Orders,Revenue,\
SEO clicks,SEO impressions,SEO position";

pub const SUB_HEADER: &str = ",Google,Google,Google,Google,eBay,eBay,eBay,eBay,Site,Site,Site,SEO,SEO,SEO";

pub const DATA_ROWS: [&str; 3] = [
    "Jan,100,0.5,50,1000,20,400,2,10,30,6,300,50,2000,12.5",
    "Feb,80,0.6,0,800,,,,,n/a,4,200,40,0,11",
    "Mar,,,,,,,,,,,,,,",
];

/// Full sample report as CSV text.
pub fn sample_csv() -> String {
    let mut lines = vec![LABELS, SUB_HEADER];
    lines.extend(DATA_ROWS);
    lines.join("\n") + "\n"
}

/// Sample report laid out as ODS, with numbers stored as float cells.
pub fn sample_ods() -> Vec<u8> {
    ods_from_csv(&sample_csv())
}

/// Sample report laid out as XLSX, with numbers stored as numeric cells.
pub fn sample_xlsx() -> Vec<u8> {
    xlsx_from_csv(&sample_csv())
}

/// Build an ODS workbook from simple (unquoted) CSV text.
pub fn ods_from_csv(csv: &str) -> Vec<u8> {
    let mut rows = String::new();
    for line in csv.lines() {
        rows.push_str("<table:table-row>");
        for field in line.split(',') {
            rows.push_str(&ods_cell(field));
        }
        rows.push_str("</table:table-row>");
    }
    build_ods(&rows)
}

/// Build an XLSX workbook from simple (unquoted) CSV text. Empty fields are
/// left out of the sheet entirely.
pub fn xlsx_from_csv(csv: &str) -> Vec<u8> {
    let mut rows = String::new();
    for (r, line) in csv.lines().enumerate() {
        rows.push_str(&format!("<row r=\"{}\">", r + 1));
        for (c, field) in line.split(',').enumerate() {
            if field.is_empty() {
                continue;
            }
            let reference = format!("{}{}", column_letter(c), r + 1);
            rows.push_str(&xlsx_cell(&reference, field));
        }
        rows.push_str("</row>");
    }
    build_xlsx(&rows)
}

fn ods_cell(field: &str) -> String {
    if field.is_empty() {
        return "<table:table-cell></table:table-cell>".to_string();
    }
    match field.parse::<f64>() {
        Ok(v) => format!(
            "<table:table-cell office:value-type=\"float\" office:value=\"{v}\"><text:p>{field}</text:p></table:table-cell>"
        ),
        Err(_) => format!(
            "<table:table-cell office:value-type=\"string\"><text:p>{field}</text:p></table:table-cell>"
        ),
    }
}

fn xlsx_cell(reference: &str, field: &str) -> String {
    match field.parse::<f64>() {
        Ok(v) => format!("<c r=\"{reference}\"><v>{v}</v></c>"),
        Err(_) => format!("<c r=\"{reference}\" t=\"inlineStr\"><is><t>{field}</t></is></c>"),
    }
}

/// Spreadsheet column name for a 0-based index below 26.
fn column_letter(index: usize) -> char {
    (b'A' + index as u8) as char
}

fn build_ods(rows_xml: &str) -> Vec<u8> {
    let content = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document-content xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0" xmlns:table="urn:oasis:names:tc:opendocument:xmlns:table:1.0" xmlns:text="urn:oasis:names:tc:opendocument:xmlns:text:1.0" office:version="1.2"><office:body><office:spreadsheet><table:table table:name="Report">{rows_xml}</table:table></office:spreadsheet></office:body></office:document-content>"#
    );
    let manifest = r#"<?xml version="1.0" encoding="UTF-8"?>
<manifest:manifest xmlns:manifest="urn:oasis:names:tc:opendocument:xmlns:manifest:1.0" manifest:version="1.2"><manifest:file-entry manifest:full-path="/" manifest:version="1.2" manifest:media-type="application/vnd.oasis.opendocument.spreadsheet"/><manifest:file-entry manifest:full-path="content.xml" manifest:media-type="text/xml"/></manifest:manifest>"#;

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let stored = FileOptions::default().compression_method(CompressionMethod::Stored);

    zip.start_file("mimetype", stored).expect("start mimetype");
    zip.write_all(b"application/vnd.oasis.opendocument.spreadsheet")
        .expect("write mimetype");

    write_entry(&mut zip, "META-INF/manifest.xml", manifest);
    write_entry(&mut zip, "content.xml", &content);

    zip.finish().expect("finish ods").into_inner()
}

fn build_xlsx(rows_xml: &str) -> Vec<u8> {
    let content_types = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/></Types>"#;
    let root_rels = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;
    let workbook = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="Report" sheetId="1" r:id="rId1"/></sheets></workbook>"#;
    let workbook_rels = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#;
    let sheet = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>{rows_xml}</sheetData></worksheet>"#
    );

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    write_entry(&mut zip, "[Content_Types].xml", content_types);
    write_entry(&mut zip, "_rels/.rels", root_rels);
    write_entry(&mut zip, "xl/workbook.xml", workbook);
    write_entry(&mut zip, "xl/_rels/workbook.xml.rels", workbook_rels);
    write_entry(&mut zip, "xl/worksheets/sheet1.xml", &sheet);

    zip.finish().expect("finish xlsx").into_inner()
}

fn write_entry(zip: &mut ZipWriter<Cursor<Vec<u8>>>, name: &str, body: &str) {
    zip.start_file(name, FileOptions::default())
        .expect("start entry");
    zip.write_all(body.as_bytes()).expect("write entry");
}
