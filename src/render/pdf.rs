//! PDF table renderer
//!
//! Hand-assembles a small uncompressed PDF: one Helvetica font object, one
//! content stream per page, a cross-reference table and trailer. Rows flow
//! down the page and continue on a fresh page under a repeated column
//! header. Text outside the ASCII range is replaced with `?` (the standard
//! Type1 fonts carry no wider encoding).

use crate::error::TallyResult;
use crate::export::table::{TableRenderer, TransactionTable};

/// Renders the transaction table as a paginated PDF document
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfRenderer;

impl TableRenderer for PdfRenderer {
    fn render(&self, table: &TransactionTable) -> TallyResult<Vec<u8>> {
        Ok(assemble(page_streams(table)))
    }
}

/// Left edge of each column, in page units
const COLUMN_X: [i32; 4] = [50, 125, 330, 430];
const ROW_STEP: i32 = 16;
const BOTTOM_MARGIN: i32 = 56;

fn page_streams(table: &TransactionTable) -> Vec<String> {
    let mut pages = Vec::new();
    let mut current = String::new();

    current.push_str(&text_op(50, 760, 16, &table.title));
    current.push_str(&header_ops(&table.header, 730));
    let mut y = 706;

    for row in &table.rows {
        if y < BOTTOM_MARGIN {
            pages.push(std::mem::take(&mut current));
            current.push_str(&header_ops(&table.header, 750));
            y = 726;
        }
        current.push_str(&row_ops(row, y));
        y -= ROW_STEP;
    }

    pages.push(current);
    pages
}

fn header_ops(header: &[String], y: i32) -> String {
    let mut ops = String::new();
    for (i, cell) in header.iter().take(COLUMN_X.len()).enumerate() {
        ops.push_str(&text_op(COLUMN_X[i], y, 11, cell));
    }
    ops
}

fn row_ops(row: &[String; 4], y: i32) -> String {
    let mut ops = String::new();
    for (i, cell) in row.iter().enumerate() {
        let cell = if i == 1 { clip(cell, 36) } else { cell.clone() };
        ops.push_str(&text_op(COLUMN_X[i], y, 10, &cell));
    }
    ops
}

fn text_op(x: i32, y: i32, size: i32, text: &str) -> String {
    format!(
        "BT /F1 {} Tf {} {} Td ({}) Tj ET\n",
        size,
        x,
        y,
        escape_text(text)
    )
}

/// Escape the characters PDF string literals reserve
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            '\\' => out.push_str("\\\\"),
            c if c.is_ascii_graphic() || c == ' ' => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}

fn clip(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max - 3).collect();
        format!("{}...", kept)
    }
}

/// Lay the objects out sequentially and write the cross-reference table.
/// Object order: catalog, page tree, font, then a page/contents pair per
/// page.
fn assemble(streams: Vec<String>) -> Vec<u8> {
    let page_count = streams.len();
    let kids: Vec<String> = (0..page_count)
        .map(|i| format!("{} 0 R", 4 + i * 2))
        .collect();

    let mut objects: Vec<String> = Vec::with_capacity(3 + page_count * 2);
    objects.push("<< /Type /Catalog /Pages 2 0 R >>".to_string());
    objects.push(format!(
        "<< /Type /Pages /Kids [{}] /Count {} >>",
        kids.join(" "),
        page_count
    ));
    objects.push("<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string());

    for (i, stream) in streams.iter().enumerate() {
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
            5 + i * 2
        ));
        objects.push(format!(
            "<< /Length {} >>\nstream\n{}endstream",
            stream.len(),
            stream
        ));
    }

    let mut out: Vec<u8> = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
    }

    let xref_offset = out.len();
    out.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
    out.extend_from_slice(b"0000000000 65535 f \n");
    for offset in offsets {
        out.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
    }
    out.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_offset
        )
        .as_bytes(),
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Transaction, TransactionKind};
    use chrono::{TimeZone, Utc};

    fn table_of(n: usize) -> TransactionTable {
        let transactions: Vec<Transaction> = (0..n)
            .map(|i| {
                Transaction::create(
                    format!("id-{}", i),
                    &format!("Item {}", i),
                    10.0 + i as f64,
                    TransactionKind::Expense,
                    Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap(),
                )
                .unwrap()
            })
            .collect();
        TransactionTable::new(&transactions)
    }

    fn render(table: &TransactionTable) -> String {
        let bytes = PdfRenderer.render(table).unwrap();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_document_framing() {
        let doc = render(&table_of(3));
        assert!(doc.starts_with("%PDF-1.4\n"));
        assert!(doc.ends_with("%%EOF\n"));
        assert!(doc.contains("(Transaction History)"));
        assert!(doc.contains("(Item 0)"));
        assert!(doc.contains("(-$10.00)"));
    }

    #[test]
    fn test_single_page_for_short_tables() {
        assert!(render(&table_of(10)).contains("/Count 1"));
    }

    #[test]
    fn test_overflow_starts_a_new_page() {
        let doc = render(&table_of(60));
        assert!(doc.contains("/Count 2"));
        // The column header repeats on the continuation page
        assert_eq!(doc.matches("(Description)").count(), 2);
    }

    #[test]
    fn test_reserved_characters_escaped() {
        let txn = Transaction::create(
            "x".into(),
            "Dinner (two)",
            30.0,
            TransactionKind::Expense,
            Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap(),
        )
        .unwrap();
        let doc = render(&TransactionTable::new(&[txn]));
        assert!(doc.contains("(Dinner \\(two\\))"));
    }
}
