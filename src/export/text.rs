//! Tab-delimited text serialization

use super::{sanitized_values, COLUMN_HEADERS};
use crate::types::Sample;

/// Serialize rows as tab-delimited text: one sanitized header line, one
/// line per row, CRLF line endings (including a trailing one).
///
/// Callers must not pass an empty snapshot; the "nothing to export" case is
/// a user-facing condition handled before getting here. Output is
/// deterministic, byte for byte, for a given input sequence.
pub fn to_delimited(rows: &[Sample]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(COLUMN_HEADERS.join("\t"));
    for row in rows {
        lines.push(sanitized_values(row).join("\t"));
    }
    let mut out = lines.join("\r\n");
    out.push_str("\r\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PLACEHOLDER;

    #[test]
    fn header_line_comes_first() {
        let rows = vec![Sample {
            code: "A1".into(),
            ..Sample::default()
        }];
        let out = to_delimited(&rows);
        let mut lines = out.split("\r\n");
        assert!(lines.next().unwrap().starts_with("Amostra\tData de Entrega\t"));
        assert!(lines.next().unwrap().starts_with("A1\t"));
    }

    #[test]
    fn embedded_tabs_do_not_break_columns() {
        let rows = vec![Sample {
            code: "A2\t".into(),
            client: "obra\nnova".into(),
            ..Sample::default()
        }];
        let out = to_delimited(&rows);
        let data_line = out.split("\r\n").nth(1).unwrap();
        let cells: Vec<_> = data_line.split('\t').collect();
        assert_eq!(cells.len(), 10);
        assert_eq!(cells[0], "A2");
        assert_eq!(cells[4], "obra nova");
    }

    #[test]
    fn output_is_deterministic() {
        let rows = vec![
            Sample {
                code: "A1".into(),
                status: "Aguardando".into(),
                ..Sample::default()
            },
            Sample {
                code: "A2".into(),
                status: "Coletada".into(),
                ..Sample::default()
            },
        ];
        assert_eq!(to_delimited(&rows), to_delimited(&rows));
        assert!(to_delimited(&rows).ends_with("\r\n"));
        assert!(to_delimited(&rows).contains(&format!("A1\t{PLACEHOLDER}")));
    }
}
