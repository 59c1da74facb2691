use std::fmt::Display;

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use crate::errors::TrackerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SplitId(pub u64);

impl Display for SplitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Everything the user enters to split an expense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitDraft {
    pub description: String,
    pub total_amount: Decimal,
    pub friends: Vec<String>,
    pub due_date: NaiveDate,
    pub reminder_enabled: bool,
}

/// An expense shared evenly between the user and a group of friends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    pub id: SplitId,
    pub description: String,
    pub total_amount: Decimal,
    pub friends: Vec<String>,
    pub amount_per_person: Decimal,
    pub due_date: NaiveDate,
    paid: Vec<bool>,
    pub reminder_enabled: bool,
}

impl Display for Split {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} (Total: {:.2}, due {})",
            self.id, self.description, self.total_amount, self.due_date
        )
    }
}

impl Split {
    pub(super) fn new(id: SplitId, draft: SplitDraft) -> Self {
        let participants = Decimal::from(draft.friends.len() + 1);
        let amount_per_person = draft.total_amount / participants;
        let paid = vec![false; draft.friends.len()];
        Self {
            id,
            description: draft.description,
            total_amount: draft.total_amount,
            friends: draft.friends,
            amount_per_person,
            due_date: draft.due_date,
            paid,
            reminder_enabled: draft.reminder_enabled,
        }
    }

    /// Friends plus the user.
    pub fn participants(&self) -> usize {
        self.friends.len() + 1
    }

    fn friend_index(&self, friend: &str) -> Option<usize> {
        self.friends.iter().position(|name| name == friend)
    }

    #[cfg(test)]
    pub fn is_paid(&self, friend: &str) -> Option<bool> {
        self.friend_index(friend).map(|i| self.paid[i])
    }

    pub fn friends_with_status(&self) -> impl Iterator<Item = (&str, bool)> {
        self.friends
            .iter()
            .map(String::as_str)
            .zip(self.paid.iter().copied())
    }

    /// Flips the paid flag of `friend` and returns the new state.
    pub fn toggle_paid(&mut self, friend: &str) -> Result<bool, TrackerError> {
        let index = self
            .friend_index(friend)
            .ok_or_else(|| TrackerError::UnknownFriend {
                split: self.id,
                friend: friend.to_string(),
            })?;
        self.paid[index] = !self.paid[index];
        Ok(self.paid[index])
    }

    pub fn unpaid_count(&self) -> usize {
        self.paid.iter().filter(|&&paid| !paid).count()
    }

    pub fn outstanding(&self) -> Decimal {
        self.amount_per_person * Decimal::from(self.unpaid_count())
    }

    pub fn is_settled(&self) -> bool {
        self.unpaid_count() == 0
    }

    pub fn reminder_due(&self, today: NaiveDate) -> bool {
        if !self.reminder_enabled || self.is_settled() {
            return false;
        }
        let remind_from = self
            .due_date
            .checked_sub_days(Days::new(1))
            .unwrap_or(self.due_date);
        today >= remind_from
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.is_settled() && today > self.due_date
    }
}

/// Splits a comma separated list of names, dropping blanks and repeats.
pub fn parse_friends(input: &str) -> Vec<String> {
    let mut friends: Vec<String> = Vec::new();
    for name in input.split(',').map(str::trim).filter(|name| !name.is_empty()) {
        if !friends.iter().any(|known| known == name) {
            friends.push(name.to_string());
        }
    }
    friends
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn goa_trip() -> Split {
        Split::new(
            SplitId(1),
            SplitDraft {
                description: "Trip to Goa".into(),
                total_amount: dec!(900),
                friends: vec!["Riya".into(), "Aman".into()],
                due_date: date(2024, 3, 10),
                reminder_enabled: true,
            },
        )
    }

    #[test]
    fn shares_the_total_with_the_user() {
        let split = goa_trip();
        assert_eq!(split.participants(), 3);
        assert_eq!(split.amount_per_person, dec!(300));
        assert_eq!(split.outstanding(), dec!(600));
        assert_eq!(split.is_paid("Riya"), Some(false));
        assert_eq!(split.is_paid("Priya"), None);
    }

    #[test]
    fn uneven_totals_keep_full_precision() {
        let split = Split::new(
            SplitId(2),
            SplitDraft {
                description: "Dinner".into(),
                total_amount: dec!(1000),
                friends: vec!["A".into(), "B".into()],
                due_date: date(2024, 3, 10),
                reminder_enabled: false,
            },
        );
        assert_eq!(split.amount_per_person.round_dp(2), dec!(333.33));
        assert_eq!((split.amount_per_person * dec!(3)).round_dp(2), dec!(1000));
    }

    #[test]
    fn toggling_flips_only_that_friend() {
        let mut split = goa_trip();
        assert!(split.toggle_paid("Aman").unwrap());
        assert_eq!(split.is_paid("Aman"), Some(true));
        assert_eq!(split.is_paid("Riya"), Some(false));
        assert_eq!(split.outstanding(), dec!(300));

        assert!(!split.toggle_paid("Aman").unwrap());
        assert_eq!(split.outstanding(), dec!(600));
    }

    #[test]
    fn toggling_an_unknown_friend_fails() {
        let mut split = goa_trip();
        let err = split.toggle_paid("Priya").unwrap_err();
        assert!(matches!(
            err,
            TrackerError::UnknownFriend { split: SplitId(1), ref friend } if friend == "Priya"
        ));
    }

    #[test]
    fn settles_when_everyone_paid() {
        let mut split = goa_trip();
        split.toggle_paid("Riya").unwrap();
        assert!(!split.is_settled());
        split.toggle_paid("Aman").unwrap();
        assert!(split.is_settled());
        assert_eq!(split.outstanding(), Decimal::ZERO);
    }

    #[test]
    fn reminds_one_day_before_the_due_date() {
        let mut split = goa_trip();
        assert!(!split.reminder_due(date(2024, 3, 8)));
        assert!(split.reminder_due(date(2024, 3, 9)));
        assert!(split.reminder_due(date(2024, 3, 10)));
        assert!(split.reminder_due(date(2024, 3, 12)));

        split.reminder_enabled = false;
        assert!(!split.reminder_due(date(2024, 3, 9)));
    }

    #[test]
    fn settled_splits_are_never_due_or_overdue() {
        let mut split = goa_trip();
        assert!(split.is_overdue(date(2024, 3, 11)));
        assert!(!split.is_overdue(date(2024, 3, 10)));
        split.toggle_paid("Riya").unwrap();
        split.toggle_paid("Aman").unwrap();
        assert!(!split.is_overdue(date(2024, 3, 11)));
        assert!(!split.reminder_due(date(2024, 3, 9)));
    }

    #[test]
    fn parses_friend_lists() {
        assert_eq!(parse_friends("Riya, Aman, Priya"), vec!["Riya", "Aman", "Priya"]);
        assert_eq!(parse_friends(" Riya ,, ,Aman,"), vec!["Riya", "Aman"]);
        assert_eq!(parse_friends("Riya, Riya, Aman"), vec!["Riya", "Aman"]);
        assert!(parse_friends(" , ,").is_empty());
    }
}
