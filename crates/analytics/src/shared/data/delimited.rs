/// Parse comma-delimited text into rows of trimmed cells.
///
/// Every line is one record: quotes never span lines, so an unbalanced quote
/// only affects its own row. Quoted fields may contain commas and `""`
/// escapes. A line the reader cannot decode is skipped with a warning; blank
/// lines are dropped.
pub fn parse_delimited(text: &str) -> Vec<Vec<String>> {
    // Strip UTF-8 BOM if present
    let text = text.trim_start_matches('\u{FEFF}');

    let mut rows = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let cells = match parse_line(line) {
            Ok(Some(cells)) => cells,
            Ok(None) => continue,
            Err(e) => {
                tracing::warn!("Skipping malformed delimited line {}: {}", index + 1, e);
                continue;
            }
        };
        if cells.iter().any(|cell| !cell.is_empty()) {
            rows.push(cells);
        }
    }
    rows
}

fn parse_line(line: &str) -> Result<Option<Vec<String>>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(line.as_bytes());

    let mut record = csv::StringRecord::new();
    if !reader.read_record(&mut record)? {
        return Ok(None);
    }
    Ok(Some(record.iter().map(str::to_string).collect()))
}

/// Header row plus data rows of a delimited table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DelimitedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DelimitedTable {
    /// First non-blank row becomes the header
    pub fn parse(text: &str) -> Self {
        let mut rows = parse_delimited(text).into_iter();
        match rows.next() {
            Some(headers) => Self {
                headers,
                rows: rows.collect(),
            },
            None => Self::default(),
        }
    }

    /// Cell of `row` under `header` (case-insensitive); missing cells read as ""
    pub fn cell<'a>(&'a self, row: &'a [String], header: &str) -> &'a str {
        self.headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(header))
            .and_then(|i| row.get(i))
            .map(String::as_str)
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_commas_and_escapes() {
        let rows = parse_delimited("a,\"b, c\", d \n\"say \"\"hi\"\"\",2\n");
        assert_eq!(rows[0], vec!["a", "b, c", "d"]);
        assert_eq!(rows[1], vec!["say \"hi\"", "2"]);
    }

    #[test]
    fn test_blank_lines_dropped_and_ragged_rows_kept() {
        let rows = parse_delimited("x,y,z\n\n , \n1,2\r\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec!["1", "2"]);
    }

    #[test]
    fn test_unbalanced_quote_stays_on_its_line() {
        let rows = parse_delimited("ok,1\nbad,\"open\nnext,2\nlast,3\n");
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], vec!["ok", "1"]);
        assert_eq!(rows[1][0], "bad");
        assert_eq!(rows[2], vec!["next", "2"]);
        assert_eq!(rows[3], vec!["last", "3"]);
    }

    #[test]
    fn test_table_lookup_by_header() {
        let table = DelimitedTable::parse("Region,Company Name\nEurope,\"Acme, Inc\"\nAsia\n");
        assert_eq!(table.headers, vec!["Region", "Company Name"]);
        assert_eq!(table.cell(&table.rows[0], "company name"), "Acme, Inc");
        assert_eq!(table.cell(&table.rows[1], "Company Name"), "");
    }
}
