//! Account service tests: defaults, mutation, purchases, credits.
//!
//! Run with: cargo test --test account_test

mod common;

use common::test_pool;
use pretty_assertions::assert_eq;

use dreamstore::account;
use dreamstore::catalog::Catalog;
use dreamstore::storage::{db, get_connection};

// ============================================================================
// Defaults and lazy creation
// ============================================================================

#[test]
fn unseen_user_gets_default_tuple() {
    let (pool, _dir) = test_pool();

    let data = account::get_user_data(&pool, 1001).unwrap();
    assert_eq!(data.diamonds, 0);
    assert_eq!(data.energy, 100);
    assert_eq!(data.style, "nika");
    assert_eq!(data.language, "Русский");

    // A subsequent call returns the same values unchanged.
    let again = account::get_user_data(&pool, 1001).unwrap();
    assert_eq!(again, data);
}

#[test]
fn repeated_reads_do_not_double_initialize() {
    let (pool, _dir) = test_pool();

    account::get_user_data(&pool, 1002).unwrap();
    account::get_user_data(&pool, 1002).unwrap();

    let conn = get_connection(&pool).unwrap();
    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM users WHERE user_id = 1002", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn credit_before_read_still_creates_defaults() {
    let (pool, _dir) = test_pool();

    account::credit_diamonds(&pool, 1003, 5).unwrap();

    let data = account::get_user_data(&pool, 1003).unwrap();
    assert_eq!(data.diamonds, 5);
    assert_eq!(data.energy, 100);
    assert_eq!(data.style, "nika");
}

// ============================================================================
// Style and language
// ============================================================================

#[test]
fn set_style_round_trips_any_string() {
    let (pool, _dir) = test_pool();

    account::set_style(&pool, 2001, "lara").unwrap();
    assert_eq!(account::get_user_data(&pool, 2001).unwrap().style, "lara");

    // No validation against a known set of styles.
    account::set_style(&pool, 2001, "definitely-not-a-style").unwrap();
    assert_eq!(
        account::get_user_data(&pool, 2001).unwrap().style,
        "definitely-not-a-style"
    );
}

#[test]
fn set_language_round_trips_non_ascii() {
    let (pool, _dir) = test_pool();

    account::set_language(&pool, 2002, "Français").unwrap();
    assert_eq!(account::get_user_data(&pool, 2002).unwrap().language, "Français");
}

#[test]
fn set_style_on_unseen_user_creates_row_with_defaults() {
    let (pool, _dir) = test_pool();

    account::set_style(&pool, 2003, "lara").unwrap();

    let data = account::get_user_data(&pool, 2003).unwrap();
    assert_eq!(data.style, "lara");
    assert_eq!(data.diamonds, 0);
    assert_eq!(data.energy, 100);
}

// ============================================================================
// Purchases
// ============================================================================

#[test]
fn purchase_at_exact_balance_debits_to_zero() {
    let (pool, _dir) = test_pool();
    let catalog = Catalog::standard();

    account::credit_diamonds(&pool, 3001, 30).unwrap();
    let outcome = account::purchase_item(&pool, &catalog, 3001, "cat_ears").unwrap();

    assert!(outcome.success);
    assert_eq!(outcome.diamonds, Some(0));
    assert_eq!(account::get_user_data(&pool, 3001).unwrap().diamonds, 0);

    let conn = get_connection(&pool).unwrap();
    assert_eq!(db::purchase_count(&conn, 3001, Some("cat_ears")).unwrap(), 1);
}

#[test]
fn purchase_below_price_fails_without_mutating() {
    let (pool, _dir) = test_pool();
    let catalog = Catalog::standard();

    account::credit_diamonds(&pool, 3002, 29).unwrap();
    let outcome = account::purchase_item(&pool, &catalog, 3002, "cat_ears").unwrap();

    assert!(!outcome.success);
    assert_eq!(outcome.diamonds, None);
    assert_eq!(account::get_user_data(&pool, 3002).unwrap().diamonds, 29);

    let conn = get_connection(&pool).unwrap();
    assert_eq!(db::purchase_count(&conn, 3002, None).unwrap(), 0);
}

#[test]
fn refused_purchase_still_creates_the_user_row() {
    let (pool, _dir) = test_pool();
    let catalog = Catalog::standard();

    let outcome = account::purchase_item(&pool, &catalog, 3003, "lingerie").unwrap();
    assert!(!outcome.success);

    let conn = get_connection(&pool).unwrap();
    assert!(db::get_user(&conn, 3003).unwrap().is_some());
}

#[test]
fn repeat_purchases_each_get_a_log_row() {
    let (pool, _dir) = test_pool();
    let catalog = Catalog::standard();

    account::credit_diamonds(&pool, 3004, 100).unwrap();
    account::purchase_item(&pool, &catalog, 3004, "wine_bottle").unwrap();
    account::purchase_item(&pool, &catalog, 3004, "wine_bottle").unwrap();

    let conn = get_connection(&pool).unwrap();
    assert_eq!(db::purchase_count(&conn, 3004, Some("wine_bottle")).unwrap(), 2);
    assert_eq!(account::get_user_data(&pool, 3004).unwrap().diamonds, 76);
}

#[test]
fn unknown_item_purchase_succeeds_for_free() {
    // Deployed policy: an unrecognized item falls back to price 0 and the
    // purchase is still logged. See DESIGN.md.
    let (pool, _dir) = test_pool();
    let catalog = Catalog::standard();

    let outcome = account::purchase_item(&pool, &catalog, 3005, "dragon_egg").unwrap();
    assert!(outcome.success);
    assert_eq!(outcome.diamonds, Some(0));

    let conn = get_connection(&pool).unwrap();
    assert_eq!(db::purchase_count(&conn, 3005, Some("dragon_egg")).unwrap(), 1);
}

// ============================================================================
// Credits
// ============================================================================

#[test]
fn credits_are_additive_not_replacing() {
    let (pool, _dir) = test_pool();

    let first = account::credit_diamonds(&pool, 4001, 540).unwrap();
    assert!(first.success);
    assert_eq!(first.diamonds, 540);

    let second = account::credit_diamonds(&pool, 4001, 1360).unwrap();
    assert!(second.success);
    assert_eq!(second.diamonds, 1900);
}

#[test]
fn energy_is_never_touched_by_any_operation() {
    let (pool, _dir) = test_pool();
    let catalog = Catalog::standard();

    account::credit_diamonds(&pool, 4002, 50).unwrap();
    account::purchase_item(&pool, &catalog, 4002, "cat_ears").unwrap();
    account::set_style(&pool, 4002, "lara").unwrap();
    account::set_language(&pool, 4002, "English").unwrap();

    assert_eq!(account::get_user_data(&pool, 4002).unwrap().energy, 100);
}
