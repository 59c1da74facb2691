use std::fmt::Display;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::ExpenseCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Income,
    Expense,
}

/// A single recorded income or expense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub kind: EntryKind,
    pub amount: Decimal,
    pub category: Option<ExpenseCategory>,
    pub date: NaiveDate,
}

impl Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            EntryKind::Income => write!(f, "{} income ({:.2})", self.date, self.amount),
            EntryKind::Expense => write!(
                f,
                "{} {} ({:.2})",
                self.date,
                self.category_label(),
                self.amount
            ),
        }
    }
}

impl Entry {
    pub fn income(amount: Decimal, date: NaiveDate) -> Self {
        Self {
            kind: EntryKind::Income,
            amount,
            category: None,
            date,
        }
    }

    pub fn expense(amount: Decimal, category: Option<ExpenseCategory>, date: NaiveDate) -> Self {
        Self {
            kind: EntryKind::Expense,
            amount,
            category,
            date,
        }
    }

    pub fn is_expense(&self) -> bool {
        self.kind == EntryKind::Expense
    }

    /// What the money was spent on, `expense` when no category was picked.
    pub fn category_label(&self) -> &'static str {
        self.category.map_or("expense", |category| category.label())
    }
}
