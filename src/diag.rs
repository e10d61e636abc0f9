// This is a part of singlebyte.
// See README.md and LICENSE.txt for details.

//! Diagnostic reporting over the built decode tables.
//!
//! The reports are computed on demand from the static tables; nothing here
//! touches shared mutable state, so the pass can run at any time, from any
//! thread, without affecting decoding.

use log::debug;

use crate::all;
use crate::types::EncodingRef;

/// Per-encoding summary of table coverage.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TableReport {
    /// Canonical name of the encoding.
    pub name: &'static str,
    /// Number of byte values with no mapping in this encoding.
    pub unmapped: usize,
}

/// Counts the byte values that `encoding` cannot map.
pub fn table_report(encoding: EncodingRef) -> TableReport {
    let unmapped = (0u8..=0xff).filter(|&byte| encoding.lookup(byte).is_none()).count();
    TableReport { name: encoding.name(), unmapped }
}

/// Builds a report for every supported encoding.
pub fn table_reports() -> Vec<TableReport> {
    all::encodings().iter().map(|&enc| table_report(enc)).collect()
}

/// Emits every table report through the `log` facade.
pub fn log_reports() {
    for report in table_reports() {
        debug!("{}: {} unmapped byte values", report.name, report.unmapped);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::all::{IBM866, WINDOWS_1252, WINDOWS_874};

    #[test]
    fn test_report_counts_sentinel_entries() {
        assert_eq!(table_report(&WINDOWS_1252).unmapped, 5);
        assert_eq!(table_report(&WINDOWS_874).unmapped, 31);
        assert_eq!(table_report(&IBM866).unmapped, 0);
    }

    #[test]
    fn test_reports_cover_every_encoding() {
        let reports = table_reports();
        assert_eq!(reports.len(), all::encodings().len());
        for report in reports {
            assert!(report.unmapped <= 0x80, "{} lost its ASCII range", report.name);
        }
    }
}
