//! Plain-text layout helpers.

/// Right-pad `s` with spaces to `width` characters. Longer strings are
/// returned unchanged.
pub fn pad(s: &str, width: usize) -> String {
    let len = s.chars().count();
    let mut out = String::with_capacity(s.len() + width.saturating_sub(len));
    out.push_str(s);
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(len)));
    out
}

/// Lay `rows` out in columns separated by `gap` spaces.
///
/// Every column is padded to its widest cell, including the last one.
pub fn table<R, C>(rows: &[R], gap: usize) -> String
where
    R: AsRef<[C]>,
    C: AsRef<str>,
{
    let mut widths: Vec<usize> = Vec::new();
    for row in rows {
        for (i, cell) in row.as_ref().iter().enumerate() {
            let len = cell.as_ref().chars().count();
            match widths.get_mut(i) {
                Some(w) => *w = (*w).max(len),
                None => widths.push(len),
            }
        }
    }

    let sep = " ".repeat(gap);
    rows.iter()
        .map(|row| {
            row.as_ref()
                .iter()
                .zip(&widths)
                .map(|(cell, width)| pad(cell.as_ref(), *width))
                .collect::<Vec<_>>()
                .join(&sep)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_to_width() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("abcdef", 4), "abcdef");
        assert_eq!(pad("🥔", 2), "🥔 ");
    }

    #[test]
    fn table_aligns_columns() {
        let rows = [["a", "one"], ["long", "two"]];
        assert_eq!(table(&rows, 1), "a    one\nlong two");
    }

    #[test]
    fn table_with_wider_gap() {
        let rows = vec![vec!["x".to_string(), "y".to_string()]];
        assert_eq!(table(&rows, 4), "x    y");
    }

    #[test]
    fn empty_table() {
        let rows: [[&str; 2]; 0] = [];
        assert_eq!(table(&rows, 1), "");
    }
}
