//! Dashboard panel listing the wallet's LP tokens.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::format;

pub const EMPTY_MESSAGE: &str = "You have no LP token in your wallet.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LpColumn {
    Platform,
    Asset,
    Balance,
    Value,
}

impl LpColumn {
    pub const ALL: [LpColumn; 4] = [
        LpColumn::Platform,
        LpColumn::Asset,
        LpColumn::Balance,
        LpColumn::Value,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LpColumn::Platform => "Platform",
            LpColumn::Asset => "Asset",
            LpColumn::Balance => "Balance",
            LpColumn::Value => "Value",
        }
    }

    pub fn sortable(self) -> bool {
        matches!(self, LpColumn::Platform | LpColumn::Value)
    }
}

/// One LP token holding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LpTokenPosition {
    pub platform: String,
    /// Pair label, e.g. "ETH/USDC".
    pub asset: String,
    pub balance: Decimal,
    pub value_usd: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LpTokensPanel {
    pub positions: Vec<LpTokenPosition>,
}

impl LpTokensPanel {
    pub fn new(positions: Vec<LpTokenPosition>) -> Self {
        LpTokensPanel { positions }
    }

    pub fn total_value_usd(&self) -> Decimal {
        self.positions.iter().map(|p| p.value_usd).sum()
    }

    /// Header action text, e.g. `$0.00`.
    pub fn total_label(&self) -> String {
        format!("${}", format::to_fixed(self.total_value_usd(), 2))
    }

    /// Sort by a sortable column. Returns false, leaving the order as is,
    /// for columns that aren't sortable.
    pub fn sort_by(&mut self, column: LpColumn, descending: bool) -> bool {
        match column {
            LpColumn::Platform => self.positions.sort_by(|a, b| a.platform.cmp(&b.platform)),
            LpColumn::Value => self.positions.sort_by(|a, b| a.value_usd.cmp(&b.value_usd)),
            LpColumn::Asset | LpColumn::Balance => return false,
        }
        if descending {
            self.positions.reverse();
        }
        true
    }

    pub fn render(&self) -> String {
        let mut out = format!("LP Tokens{:>30}\n", self.total_label());
        let headers: Vec<String> = LpColumn::ALL
            .iter()
            .map(|c| {
                if c.sortable() {
                    format!("{} ^v", c.label())
                } else {
                    c.label().to_string()
                }
            })
            .collect();
        out.push_str(&headers.join(" | "));
        out.push('\n');

        if self.positions.is_empty() {
            out.push_str(EMPTY_MESSAGE);
            out.push('\n');
            return out;
        }
        for p in &self.positions {
            out.push_str(&format!(
                "{} | {} | {} | ${}\n",
                p.platform,
                p.asset,
                format::plain(p.balance),
                format::to_fixed(p.value_usd, 2),
            ));
        }
        out
    }
}
