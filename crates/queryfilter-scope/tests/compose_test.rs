//! Scope composition against derived model policies.

use queryfilter_core::error::ErrorKind;
use queryfilter_core::traits::FilterModel;
use queryfilter_core::types::filter::{FilterField, SearchClause};
use queryfilter_core::types::sorting::SortField;
use queryfilter_derive::FilterModel;
use queryfilter_scope::{FilterFlags, QueryParams, ScopeOp, extract_policy, filter_by_query};

#[allow(dead_code)]
#[derive(FilterModel)]
struct User {
    id: i64,
    #[filter(searchable, filterable)]
    username: String,
    #[filter(param = "full_name", searchable)]
    full_name: String,
    #[filter(filterable)]
    email: String,
    password: String,
}

#[allow(dead_code)]
#[derive(FilterModel)]
#[filter(table = "accounts")]
struct Account {
    #[filter(filterable, param = "mail")]
    email: String,
    #[filter(filterable, column = "display_name")]
    name: String,
}

#[allow(dead_code)]
#[derive(FilterModel)]
struct Clash {
    #[filter(filterable)]
    email: String,
    #[filter(filterable, param = "email")]
    contact: String,
}

fn compose<M: FilterModel>(query: &str, flags: FilterFlags) -> Vec<ScopeOp> {
    filter_by_query::<M>(&QueryParams::parse(query), flags)
        .unwrap()
        .ops()
        .to_vec()
}

#[test]
fn test_derived_policy() {
    assert_eq!(User::table_name(), "users");
    let policy = extract_policy::<User>().unwrap();
    let exposed: Vec<_> = policy.iter().map(|f| f.exposed_name.as_str()).collect();
    assert_eq!(exposed, ["username", "full_name", "email"]);
    assert!(policy.get("password").is_none());
    assert!(policy.get("id").is_none());
}

#[test]
fn test_filter_single_field() {
    let ops = compose::<User>("username=sampleUser", FilterFlags::FILTER);
    assert_eq!(
        ops,
        [ScopeOp::Predicate(FilterField::eq("username", "username", "sampleUser"))]
    );
}

#[test]
fn test_not_filterable_keeps_default_order() {
    let ops = compose::<User>(
        "password=samplePassword",
        FilterFlags::FILTER | FilterFlags::ORDER_BY,
    );
    assert_eq!(ops, [ScopeOp::OrderBy(SortField::desc("created_at"))]);
}

#[test]
fn test_no_flags_is_noop() {
    for query in [
        "username=sampleUser",
        "page=2&limit=10&order_by=email&search=John",
        "",
    ] {
        assert!(compose::<User>(query, FilterFlags::empty()).is_empty());
        assert!(compose::<User>(query, FilterFlags::from_bits_truncate(0)).is_empty());
    }
}

#[test]
fn test_no_flags_skips_policy_extraction() {
    let scope = filter_by_query::<Clash>(&QueryParams::parse("email=x"), FilterFlags::empty());
    assert!(scope.unwrap().is_empty());
}

#[test]
fn test_unknown_fields_only_is_noop() {
    let ops = compose::<User>("password=x&nope=y&id=3&full_name=z", FilterFlags::FILTER);
    assert!(ops.is_empty());
    assert_eq!(ops, compose::<User>("", FilterFlags::FILTER));
}

#[test]
fn test_search_over_searchable_fields() {
    let ops = compose::<User>("search=John", FilterFlags::ALL);
    assert_eq!(
        ops,
        [
            ScopeOp::Search(SearchClause::contains(
                vec!["username".into(), "full_name".into()],
                "John",
            )),
            ScopeOp::OrderBy(SortField::desc("created_at")),
        ]
    );
}

#[test]
fn test_paginate_only() {
    let ops = compose::<User>("page=2&limit=10", FilterFlags::ALL);
    assert_eq!(
        ops,
        [
            ScopeOp::OrderBy(SortField::desc("created_at")),
            ScopeOp::CountQuery,
            ScopeOp::LimitOffset {
                limit: 10,
                offset: 10
            },
        ]
    );

    let unpaged = compose::<User>("", FilterFlags::PAGINATE);
    assert!(unpaged.is_empty());
}

#[test]
fn test_order_by_field_ascending() {
    let ops = compose::<User>("order_by=email&order_direction=asc", FilterFlags::ORDER_BY);
    assert_eq!(ops, [ScopeOp::OrderBy(SortField::asc("email"))]);
}

#[test]
fn test_alias_only_name_that_filters() {
    let ops = compose::<Account>("email=a@b.io", FilterFlags::FILTER);
    assert!(ops.is_empty());

    let ops = compose::<Account>("mail=a@b.io&display_name=x&name=Ann", FilterFlags::FILTER);
    assert_eq!(
        ops,
        [
            ScopeOp::Predicate(FilterField::eq("mail", "email", "a@b.io")),
            ScopeOp::Predicate(FilterField::eq("display_name", "display_name", "x")),
        ]
    );
}

#[test]
fn test_duplicate_exposed_name_fails() {
    let err = filter_by_query::<Clash>(&QueryParams::parse("email=x"), FilterFlags::FILTER)
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Configuration);
}

#[test]
fn test_composition_is_idempotent() {
    let params = QueryParams::parse("username=bob&search=jo&order_by=email&page=3&limit=5");
    let first = filter_by_query::<User>(&params, FilterFlags::ALL).unwrap();
    let second = filter_by_query::<User>(&params, FilterFlags::ALL).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.ops().len(), 5);
}
