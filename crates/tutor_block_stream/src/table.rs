//! Pipe-table extraction: a contiguous run of pipe lines becomes a grid of
//! trimmed cell strings.

/// True when the trimmed line opens a table run: starts with a pipe and
/// either closes with one or has at least one interior pipe.
pub fn is_table_line(trimmed: &str) -> bool {
    trimmed.starts_with('|') && (trimmed.ends_with('|') || trimmed[1..].contains('|'))
}

/// True for separator/alignment rows like `|---|:---:|`, whose pipe-stripped
/// content is only whitespace, hyphens, colons and pipes.
pub fn is_alignment_row(line: &str) -> bool {
    let trimmed = line.trim();
    let inner = trimmed.strip_prefix('|').unwrap_or(trimmed);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    !inner.is_empty()
        && inner
            .chars()
            .all(|c| c.is_whitespace() || c == '-' || c == ':' || c == '|')
}

fn split_row(line: &str) -> Vec<String> {
    let trimmed = line.trim();
    let mut cells: Vec<&str> = trimmed.split('|').collect();
    if trimmed.starts_with('|') {
        cells.remove(0);
    }
    if trimmed.ends_with('|') && !cells.is_empty() {
        cells.pop();
    }
    cells.into_iter().map(|cell| cell.trim().to_string()).collect()
}

/// Extract the data grid from a run of table lines, dropping alignment rows.
/// Returns `None` when no data rows remain. Ragged rows are returned as-is;
/// padding to a rectangle is a display concern.
pub fn extract(lines: &[String]) -> Option<Vec<Vec<String>>> {
    let rows: Vec<Vec<String>> = lines
        .iter()
        .filter(|line| !is_alignment_row(line))
        .map(|line| split_row(line))
        .collect();

    if rows.is_empty() { None } else { Some(rows) }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn lines(input: &[&str]) -> Vec<String> {
        input.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_round_trip() {
        let fixture = lines(&["| a | b |", "| 1 | 2 |"]);

        let actual = extract(&fixture).unwrap();

        assert_eq!(actual, vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["1".to_string(), "2".to_string()]
        ]);
    }

    #[test]
    fn test_alignment_row_stripped_anywhere() {
        let fixture = lines(&["| a | b |", "|---|---|", "| 1 | 2 |", "|:--:|---|"]);

        let actual = extract(&fixture).unwrap();

        assert_eq!(actual.len(), 2);
        assert_eq!(actual[0], vec!["a".to_string(), "b".to_string()]);
        assert_eq!(actual[1], vec!["1".to_string(), "2".to_string()]);
    }

    #[test]
    fn test_only_alignment_rows_yields_none() {
        let fixture = lines(&["|---|---|", "| --- | :-: |"]);
        assert_eq!(extract(&fixture), None);
    }

    #[test]
    fn test_empty_input_yields_none() {
        assert_eq!(extract(&[]), None);
    }

    #[test]
    fn test_ragged_rows_accepted_as_is() {
        let fixture = lines(&["| a | b | c |", "| 1 | 2 |"]);

        let actual = extract(&fixture).unwrap();

        assert_eq!(actual[0].len(), 3);
        assert_eq!(actual[1].len(), 2);
    }

    #[test]
    fn test_missing_trailing_pipe() {
        let fixture = lines(&["| x | y"]);

        let actual = extract(&fixture).unwrap();

        assert_eq!(actual, vec![vec!["x".to_string(), "y".to_string()]]);
    }

    #[test]
    fn test_cells_are_trimmed() {
        let fixture = lines(&["|  Hình  |   Diện tích  |"]);

        let actual = extract(&fixture).unwrap();

        assert_eq!(actual, vec![vec![
            "Hình".to_string(),
            "Diện tích".to_string()
        ]]);
    }

    #[test]
    fn test_table_line_detection() {
        assert!(is_table_line("| a | b |"));
        assert!(is_table_line("| a | b"));
        assert!(is_table_line("|"));
        assert!(!is_table_line("a | b"));
        assert!(!is_table_line("|chưa có cột"));
        assert!(!is_table_line("- gạch đầu dòng"));
    }
}
