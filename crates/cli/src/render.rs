use stockbook_inventory::ItemView;

const HEADERS: [&str; 3] = ["ID", "Name", "Quantity"];

/// Render rows as a fixed-width text table, in the order given.
pub fn render_table(rows: &[ItemView]) -> String {
    let cells: Vec<[String; 3]> = rows
        .iter()
        .map(|r| [r.id.to_string(), r.name.clone(), r.quantity.to_string()])
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &HEADERS.map(String::from), &widths);
    out.push_str(&format!(
        "{}-+-{}-+-{}\n",
        "-".repeat(widths[0]),
        "-".repeat(widths[1]),
        "-".repeat(widths[2])
    ));
    for row in &cells {
        push_line(&mut out, row, &widths);
    }
    if cells.is_empty() {
        out.push_str("(no items)\n");
    }
    out
}

fn push_line(out: &mut String, cells: &[String; 3], widths: &[usize; 3]) {
    out.push_str(&format!(
        "{:>w0$} | {:<w1$} | {:>w2$}\n",
        cells[0],
        cells[1],
        cells[2],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockbook_inventory::ItemId;

    #[test]
    fn renders_rows_in_sequence_order() {
        let rows = vec![
            ItemView {
                id: ItemId(12),
                name: "Widget".into(),
                quantity: 30,
            },
            ItemView {
                id: ItemId(3),
                name: "Gear".into(),
                quantity: 9999,
            },
        ];
        let table = render_table(&rows);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "ID | Name   | Quantity");
        assert_eq!(lines[1], "---+--------+---------");
        assert_eq!(lines[2], "12 | Widget |       30");
        assert_eq!(lines[3], " 3 | Gear   |     9999");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn empty_table_says_so() {
        assert!(render_table(&[]).ends_with("(no items)\n"));
    }
}
