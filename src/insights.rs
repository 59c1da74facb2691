//! Charts and gamified progress shown on the insights page.
//!
//! The page starts from a fixed set of sample figures and folds whatever the
//! user recorded this session on top of them.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::ledger::{ExpenseCategory, Ledger};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendPoint {
    pub day: u32,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySpending {
    pub category: ExpenseCategory,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitStreak {
    pub habit: &'static str,
    pub streak: u32,
    pub target: u32,
    pub emoji: &'static str,
}

impl HabitStreak {
    pub fn ratio(&self) -> f64 {
        if self.target == 0 {
            return 1.0;
        }
        (f64::from(self.streak) / f64::from(self.target)).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    pub title: &'static str,
    pub progress: u32,
    pub current: u32,
    pub target: u32,
    pub emoji: &'static str,
    pub days_left: u32,
}

impl Challenge {
    pub fn is_completed(&self) -> bool {
        self.progress >= 100
    }

    pub fn ratio(&self) -> f64 {
        (f64::from(self.progress) / 100.0).clamp(0.0, 1.0)
    }

    pub fn message(&self) -> String {
        if self.is_completed() {
            "🎉 Goal completed!".to_string()
        } else if self.progress >= 80 {
            format!("You're {}% there! 💪", self.progress)
        } else {
            format!("🔥 {} days left to hit your goal!", self.days_left)
        }
    }

    pub fn badge(&self) -> Option<&'static str> {
        if self.is_completed() {
            Some("Challenge Master")
        } else if self.progress >= 80 {
            Some("🚀 Almost there! Keep pushing!")
        } else {
            None
        }
    }
}

fn sample_trend() -> Vec<TrendPoint> {
    [
        (1, dec!(1200)),
        (5, dec!(800)),
        (10, dec!(1500)),
        (15, dec!(900)),
        (20, dec!(1800)),
        (25, dec!(1100)),
        (30, dec!(1400)),
    ]
    .into_iter()
    .map(|(day, amount)| TrendPoint { day, amount })
    .collect()
}

fn sample_categories() -> Vec<CategorySpending> {
    [
        (ExpenseCategory::Food, dec!(4500)),
        (ExpenseCategory::Travel, dec!(2300)),
        (ExpenseCategory::Shopping, dec!(1800)),
        (ExpenseCategory::Bills, dec!(3200)),
        (ExpenseCategory::Entertainment, dec!(1200)),
    ]
    .into_iter()
    .map(|(category, amount)| CategorySpending { category, amount })
    .collect()
}

fn sample_habits() -> Vec<HabitStreak> {
    vec![
        HabitStreak {
            habit: "No impulse buying",
            streak: 7,
            target: 30,
            emoji: "🛡️",
        },
        HabitStreak {
            habit: "Daily expense logging",
            streak: 15,
            target: 30,
            emoji: "📝",
        },
        HabitStreak {
            habit: "Budget review",
            streak: 3,
            target: 7,
            emoji: "📊",
        },
    ]
}

fn sample_challenges() -> Vec<Challenge> {
    vec![
        Challenge {
            title: "Save ₹500 in 7 days",
            progress: 60,
            current: 300,
            target: 500,
            emoji: "💰",
            days_left: 4,
        },
        Challenge {
            title: "No dining out for 5 days",
            progress: 80,
            current: 4,
            target: 5,
            emoji: "🍽️",
            days_left: 1,
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insights {
    pub trend: Vec<TrendPoint>,
    pub categories: Vec<CategorySpending>,
    pub habits: Vec<HabitStreak>,
    pub challenges: Vec<Challenge>,
}

impl Insights {
    pub fn build(ledger: &Ledger, today: NaiveDate) -> Self {
        let mut trend = sample_trend();
        for entry in ledger.expenses_in_month(today.year(), today.month()) {
            let day = entry.date.day();
            if let Some(point) = trend.iter_mut().rev().find(|point| point.day <= day) {
                point.amount += entry.amount;
            }
        }

        let mut categories = sample_categories();
        for (category, amount) in ledger.expenses_by_category() {
            match categories.iter_mut().find(|c| c.category == category) {
                Some(existing) => existing.amount += amount,
                None => categories.push(CategorySpending { category, amount }),
            }
        }

        Self {
            trend,
            categories,
            habits: sample_habits(),
            challenges: sample_challenges(),
        }
    }

    pub fn highest_trend_amount(&self) -> Decimal {
        self.trend
            .iter()
            .map(|point| point.amount)
            .max()
            .unwrap_or(Decimal::ZERO)
    }
}
