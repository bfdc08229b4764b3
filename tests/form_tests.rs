// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use spendwise::error::ValidationError;
use spendwise::form::{CategoryPolicy, ExpenseForm, MAX_AMOUNT};
use spendwise::models::{Category, Expense};

fn form(amount: &str, category: &str, date: &str) -> ExpenseForm {
    ExpenseForm {
        amount: amount.into(),
        category: category.into(),
        description: "  Weekly shop  ".into(),
        date: date.into(),
    }
}

#[test]
fn valid_form_becomes_draft() {
    let d = form(" 42.10 ", "food", "2024-07-04")
        .validate(CategoryPolicy::Fixed)
        .unwrap();
    assert_eq!(d.amount.to_string(), "42.10");
    assert_eq!(d.category, Category::Food);
    assert_eq!(d.description, "Weekly shop");
    assert_eq!(d.date.to_string(), "2024-07-04");
}

#[test]
fn required_fields_are_checked_in_order() {
    let p = CategoryPolicy::Fixed;
    assert_eq!(
        form("", "", "").validate(p).unwrap_err(),
        ValidationError::Missing("amount")
    );
    assert_eq!(
        form("1", "  ", "2024-01-01").validate(p).unwrap_err(),
        ValidationError::Missing("category")
    );
    assert_eq!(
        form("1", "Food", "").validate(p).unwrap_err(),
        ValidationError::Missing("date")
    );
}

#[test]
fn description_is_optional() {
    let mut f = form("3", "Travel", "2024-01-01");
    f.description = String::new();
    assert_eq!(f.validate(CategoryPolicy::Fixed).unwrap().description, "");
}

#[test]
fn amount_must_be_a_non_negative_decimal() {
    let p = CategoryPolicy::Fixed;
    assert_eq!(
        form("abc", "Food", "2024-01-01").validate(p).unwrap_err(),
        ValidationError::InvalidAmount("abc".into())
    );
    assert_eq!(
        form("-5", "Food", "2024-01-01").validate(p).unwrap_err(),
        ValidationError::NegativeAmount("-5".into())
    );
    assert!(form("0", "Food", "2024-01-01").validate(p).is_ok());
    assert!(form("-0", "Food", "2024-01-01").validate(p).is_ok());
}

#[test]
fn amount_has_an_upper_bound() {
    let p = CategoryPolicy::Fixed;
    assert_eq!(
        form("79228162514264337593543950335", "Food", "2024-01-01")
            .validate(p)
            .unwrap_err(),
        ValidationError::AmountTooLarge("79228162514264337593543950335".into())
    );
    assert_eq!(
        form("1000000000000.01", "Food", "2024-01-01")
            .validate(p)
            .unwrap_err(),
        ValidationError::AmountTooLarge("1000000000000.01".into())
    );
    let d = form(&MAX_AMOUNT.to_string(), "Food", "2024-01-01")
        .validate(p)
        .unwrap();
    assert_eq!(d.amount, Decimal::from(MAX_AMOUNT));
}

#[test]
fn date_must_be_iso() {
    assert_eq!(
        form("1", "Food", "2024-13-01")
            .validate(CategoryPolicy::Fixed)
            .unwrap_err(),
        ValidationError::InvalidDate("2024-13-01".into())
    );
}

#[test]
fn category_policy_controls_custom_labels() {
    assert_eq!(
        form("1", "Pets", "2024-01-01")
            .validate(CategoryPolicy::Fixed)
            .unwrap_err(),
        ValidationError::UnknownCategory("Pets".into())
    );
    let d = form("1", "Pets", "2024-01-01")
        .validate(CategoryPolicy::Free)
        .unwrap();
    assert_eq!(d.category, Category::Custom("Pets".into()));
    // Fixed labels still normalise under the free policy
    let d = form("1", "HEALTH", "2024-01-01")
        .validate(CategoryPolicy::Free)
        .unwrap();
    assert_eq!(d.category, Category::Health);
}

#[test]
fn edit_form_prefills_from_record() {
    let e = Expense {
        id: 9,
        amount: "18.00".parse().unwrap(),
        category: Category::Entertainment,
        description: "Concert".into(),
        date: chrono::NaiveDate::from_ymd_opt(2024, 11, 2).unwrap(),
    };
    let f = ExpenseForm::from_expense(&e);
    assert_eq!(f.amount, "18.00");
    assert_eq!(f.category, "Entertainment");
    assert_eq!(f.date, "2024-11-02");
    let d = f.validate(CategoryPolicy::Fixed).unwrap();
    assert_eq!(d.amount, e.amount);
    assert_eq!(d.category, e.category);
}

#[test]
fn category_labels_round_trip_through_text() {
    for c in Category::FIXED.iter() {
        assert_eq!(&Category::from(c.label()), c);
        assert!(!c.is_custom());
    }
    assert_eq!(Category::FIXED.len(), 10);
    let json = serde_json::to_string(&Category::Custom("Gifts".into())).unwrap();
    assert_eq!(json, "\"Gifts\"");
    let back: Category = serde_json::from_str("\"transport\"").unwrap();
    assert_eq!(back, Category::Transport);
}
