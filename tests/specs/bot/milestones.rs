// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for the milestone congratulation flow: count the author's
//! issues, check the milestone set, format the message.

#![allow(clippy::unwrap_used)]

use crate::bot::common::*;
use similar_asserts::assert_eq;
use triage_core::{congratulation, count_issues_by_user, is_milestone, Error, User};
use yare::parameterized;

#[parameterized(
    first_issue = { 1, true },
    early_days = { 2, false },
    almost_there = { 24, false },
    twenty_fifth = { 25, true },
    just_past = { 26, false },
    fiftieth = { 50, true },
    seventy_fifth = { 75, true },
    ninety_ninth = { 99, false },
    hundredth = { 100, true },
    beyond = { 101, false },
)]
fn milestone_membership(count: u64, expected: bool) {
    similar_asserts::assert_eq!(is_milestone(count), expected);
}

#[tokio::test]
async fn congratulates_author_on_their_first_issue() {
    let retriever = FakeRetriever::new().with_issue_count("octocat", 1);
    let user = User::new("octocat".to_string());

    let count = count_issues_by_user(&user, &retriever).await.unwrap();
    assert!(is_milestone(count));
    assert_eq!(
        congratulation(count),
        "Nice work opening your 1st issue! \u{1f601}\u{1f38a}\u{1f44d}"
    );
}

#[tokio::test]
async fn congratulates_with_th_suffix_past_the_first() {
    let retriever = FakeRetriever::new().with_issue_count("octocat", 25);
    let user = User::new("octocat".to_string());

    let count = count_issues_by_user(&user, &retriever).await.unwrap();
    assert!(is_milestone(count));
    assert_eq!(
        congratulation(count),
        "Nice work opening your 25th issue! \u{1f601}\u{1f38a}\u{1f44d}"
    );
}

#[tokio::test]
async fn stays_silent_between_milestones() {
    let retriever = FakeRetriever::new().with_issue_count("octocat", 26);
    let user = User::new("octocat".to_string());

    let count = count_issues_by_user(&user, &retriever).await.unwrap();
    assert!(!is_milestone(count));
}

#[tokio::test]
async fn unknown_login_surfaces_as_error_not_zero() {
    let retriever = FakeRetriever::new();
    let user = User::new("ghost".to_string());

    let result = count_issues_by_user(&user, &retriever).await;
    assert!(matches!(result, Err(Error::UserNotFound(ref login)) if login == "ghost"));
}

#[tokio::test]
async fn empty_history_counts_as_zero() {
    let retriever = FakeRetriever::new().with_history("newbie", vec![]);
    let user = User::new("newbie".to_string());

    let count = count_issues_by_user(&user, &retriever).await.unwrap();
    assert_eq!(count, 0);
    assert!(!is_milestone(count));
}
