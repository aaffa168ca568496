use super::row::MarketRow;

const HEADERS: [&str; 7] = [
    "Asset",
    "LTV",
    "Deposit APY",
    "Market size",
    "Borrow APY",
    "Total borrowed",
    "Wallet",
];

/// Render rows as an aligned plain-text table.
pub fn render_table(rows: &[MarketRow]) -> String {
    let cells: Vec<[String; 7]> = rows
        .iter()
        .map(|row| {
            let d = row.display();
            [
                format!("{} ({})", d.name, d.unit_price),
                d.ltv,
                d.deposit_apy,
                format!("{} ({})", d.market_size, d.market_size_usd),
                d.borrow_apy,
                format!("{} ({})", d.total_borrowed, d.total_borrowed_usd),
                format!("{} ({})", d.wallet, d.wallet_usd),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for line in &cells {
        for (w, cell) in widths.iter_mut().zip(line) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &HEADERS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');
    for line in &cells {
        push_line(&mut out, line, &widths);
    }
    if cells.is_empty() {
        out.push_str("No assets listed.\n");
    }
    out
}

fn push_line(out: &mut String, cells: &[String; 7], widths: &[usize; 7]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| format!("{cell:<w$}", w = *w))
        .collect();
    out.push_str(padded.join(" | ").trim_end());
    out.push('\n');
}
