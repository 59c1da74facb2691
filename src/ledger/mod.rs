use std::fmt::Display;
use std::str::FromStr;

use chrono::Datelike;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::{config::TrackerConfig, errors::TrackerError};

use self::entry::{Entry, EntryKind};
use self::split::{Split, SplitDraft, SplitId};

pub mod entry;
pub mod split;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpenseCategory {
    Food,
    Travel,
    Shopping,
    Entertainment,
    Bills,
    Healthcare,
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 7] = [
        Self::Food,
        Self::Travel,
        Self::Shopping,
        Self::Entertainment,
        Self::Bills,
        Self::Healthcare,
        Self::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Travel => "Travel",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::Bills => "Bills",
            Self::Healthcare => "Healthcare",
            Self::Other => "Other",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Food => "🍕",
            Self::Travel => "✈️",
            Self::Shopping => "🛍️",
            Self::Entertainment => "🎬",
            Self::Bills => "📄",
            Self::Healthcare => "🏥",
            Self::Other => "📦",
        }
    }

    pub fn options() -> Vec<&'static str> {
        Self::ALL.iter().map(|category| category.label()).collect()
    }
}

impl Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ExpenseCategory {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TrackerError::InvalidArgument(format!("unknown category {s}")))
    }
}

/// The in-memory book of everything recorded during a session.
#[derive(Debug, Clone)]
pub struct Ledger {
    initial_balance: Decimal,
    monthly_budget: Decimal,
    opening_expenses: Decimal,
    entries: Vec<Entry>,
    splits: Vec<Split>,
    next_split_id: u64,
}

impl Ledger {
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            initial_balance: config.initial_balance,
            monthly_budget: config.monthly_budget,
            opening_expenses: config.opening_expenses,
            entries: Vec::new(),
            splits: Vec::new(),
            next_split_id: 1,
        }
    }

    pub fn monthly_budget(&self) -> Decimal {
        self.monthly_budget
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn splits(&self) -> &[Split] {
        &self.splits
    }

    fn sum_of(&self, kind: EntryKind) -> Decimal {
        self.entries
            .iter()
            .filter(|entry| entry.kind == kind)
            .map(|entry| entry.amount)
            .sum()
    }

    pub fn total_income(&self) -> Decimal {
        self.sum_of(EntryKind::Income)
    }

    pub fn balance(&self) -> Decimal {
        self.initial_balance + self.total_income() - self.sum_of(EntryKind::Expense)
    }

    pub fn total_expenses(&self) -> Decimal {
        self.opening_expenses + self.sum_of(EntryKind::Expense)
    }

    /// Share of the monthly budget already spent, in percent. Exceeds 100 when
    /// over budget.
    pub fn budget_usage(&self) -> Decimal {
        self.total_expenses() / self.monthly_budget * Decimal::ONE_HUNDRED
    }

    pub fn remaining_budget(&self) -> Decimal {
        self.monthly_budget - self.total_expenses()
    }

    pub fn record(&mut self, entry: Entry) {
        info!("Recorded {}", entry);
        self.entries.push(entry);
        debug!(
            "Balance is now {:.2}, budget usage {:.1}%",
            self.balance(),
            self.budget_usage()
        );
    }

    pub fn expenses_in_month(&self, year: i32, month: u32) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(move |entry| {
            entry.is_expense() && entry.date.year() == year && entry.date.month() == month
        })
    }

    /// Recorded expenses per category, uncategorised ones counted as Other.
    pub fn expenses_by_category(&self) -> Vec<(ExpenseCategory, Decimal)> {
        ExpenseCategory::ALL
            .into_iter()
            .map(|category| {
                let total = self
                    .entries
                    .iter()
                    .filter(|entry| {
                        entry.is_expense()
                            && entry.category.unwrap_or(ExpenseCategory::Other) == category
                    })
                    .map(|entry| entry.amount)
                    .sum::<Decimal>();
                (category, total)
            })
            .filter(|(_, total)| !total.is_zero())
            .collect()
    }

    pub fn add_split(&mut self, draft: SplitDraft) -> &Split {
        let id = SplitId(self.next_split_id);
        self.next_split_id += 1;
        let split = Split::new(id, draft);
        info!(
            "Created split {} between {} people",
            split,
            split.participants()
        );
        self.splits.push(split);
        &self.splits[self.splits.len() - 1]
    }

    pub fn toggle_payment(&mut self, id: SplitId, friend: &str) -> Result<bool, TrackerError> {
        let split = self
            .splits
            .iter_mut()
            .find(|split| split.id == id)
            .ok_or(TrackerError::UnknownSplit(id))?;
        let paid = split.toggle_paid(friend)?;
        info!(
            "Marked {}'s payment for {} as {}",
            friend,
            id,
            if paid { "paid" } else { "unpaid" }
        );
        Ok(paid)
    }

    /// What friends still owe the user across all splits.
    pub fn outstanding_dues(&self) -> Decimal {
        self.splits.iter().map(Split::outstanding).sum()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ledger() -> Ledger {
        Ledger::new(&TrackerConfig::default())
    }

    #[test]
    fn starts_from_the_configured_figures() {
        let ledger = ledger();
        assert_eq!(ledger.balance(), dec!(25000));
        assert_eq!(ledger.total_expenses(), dec!(5000));
        assert_eq!(ledger.remaining_budget(), dec!(25000));
        assert_eq!(ledger.budget_usage().round_dp(2), dec!(16.67));
    }

    #[test]
    fn income_and_expenses_move_the_balance() {
        let mut ledger = ledger();
        ledger.record(Entry::income(dec!(2000), date(2024, 3, 1)));
        ledger.record(Entry::expense(
            dec!(1500),
            Some(ExpenseCategory::Food),
            date(2024, 3, 2),
        ));
        assert_eq!(ledger.total_income(), dec!(2000));
        assert_eq!(ledger.balance(), dec!(25500));
        assert_eq!(ledger.total_expenses(), dec!(6500));
        assert_eq!(ledger.remaining_budget(), dec!(23500));
    }

    #[test]
    fn budget_usage_can_exceed_the_budget() {
        let mut ledger = ledger();
        ledger.record(Entry::expense(dec!(31000), None, date(2024, 3, 2)));
        assert_eq!(ledger.budget_usage(), dec!(120));
        assert_eq!(ledger.remaining_budget(), dec!(-6000));
    }

    #[test]
    fn groups_expenses_by_category() {
        let mut ledger = ledger();
        ledger.record(Entry::expense(dec!(100), Some(ExpenseCategory::Bills), date(2024, 3, 2)));
        ledger.record(Entry::expense(dec!(40), None, date(2024, 3, 3)));
        ledger.record(Entry::expense(dec!(60), Some(ExpenseCategory::Other), date(2024, 3, 4)));
        ledger.record(Entry::expense(dec!(25), Some(ExpenseCategory::Food), date(2024, 3, 5)));
        ledger.record(Entry::income(dec!(999), date(2024, 3, 5)));
        assert_eq!(
            ledger.expenses_by_category(),
            vec![
                (ExpenseCategory::Food, dec!(25)),
                (ExpenseCategory::Bills, dec!(100)),
                (ExpenseCategory::Other, dec!(100)),
            ]
        );
    }

    #[test]
    fn filters_expenses_by_month() {
        let mut ledger = ledger();
        ledger.record(Entry::expense(dec!(10), None, date(2024, 2, 28)));
        ledger.record(Entry::expense(dec!(20), None, date(2024, 3, 1)));
        ledger.record(Entry::income(dec!(30), date(2024, 3, 1)));
        let march: Vec<_> = ledger.expenses_in_month(2024, 3).collect();
        assert_eq!(march.len(), 1);
        assert_eq!(march[0].amount, dec!(20));
    }

    #[test]
    fn splits_get_increasing_ids_and_do_not_touch_the_balance() {
        let mut ledger = ledger();
        let draft = SplitDraft {
            description: "Dinner".into(),
            total_amount: dec!(1200),
            friends: vec!["Riya".into(), "Aman".into(), "Priya".into()],
            due_date: date(2024, 3, 10),
            reminder_enabled: false,
        };
        let first = ledger.add_split(draft.clone());
        assert_eq!(first.id, SplitId(1));
        assert_eq!(first.amount_per_person, dec!(300));
        let second = ledger.add_split(draft);
        assert_eq!(second.id, SplitId(2));
        assert_eq!(ledger.balance(), dec!(25000));
        assert_eq!(ledger.outstanding_dues(), dec!(1800));
    }

    #[test]
    fn toggles_payments_by_split_and_friend() {
        let mut ledger = ledger();
        let id = ledger
            .add_split(SplitDraft {
                description: "Cab".into(),
                total_amount: dec!(300),
                friends: vec!["Riya".into(), "Aman".into()],
                due_date: date(2024, 3, 10),
                reminder_enabled: false,
            })
            .id;
        assert!(ledger.toggle_payment(id, "Riya").unwrap());
        assert_eq!(ledger.outstanding_dues(), dec!(100));
        assert_eq!(ledger.splits()[0].is_paid("Riya"), Some(true));

        assert!(matches!(
            ledger.toggle_payment(SplitId(42), "Riya"),
            Err(TrackerError::UnknownSplit(SplitId(42)))
        ));
        assert!(matches!(
            ledger.toggle_payment(id, "Priya"),
            Err(TrackerError::UnknownFriend { .. })
        ));
    }

    #[test]
    fn categories_parse_from_their_labels() {
        assert_eq!("food".parse::<ExpenseCategory>().unwrap(), ExpenseCategory::Food);
        assert_eq!(" Bills ".parse::<ExpenseCategory>().unwrap(), ExpenseCategory::Bills);
        assert!("rent".parse::<ExpenseCategory>().is_err());
        assert_eq!(ExpenseCategory::options().len(), ExpenseCategory::ALL.len());
    }
}
