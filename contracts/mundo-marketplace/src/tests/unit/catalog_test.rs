use crate::tests::test_utils::*;
use crate::*;
use near_sdk::json_types::U128;
use near_sdk::testing_env;

// --- list ---

#[test]
fn list_fixture_item_gets_id_zero() {
    let mut contract = new_contract();
    as_caller(owner());

    let id = list_item(&mut contract, shoe()).unwrap();
    assert_eq!(id, 0);
    assert_eq!(contract.length(), 1);

    let item = contract.items(0).unwrap();
    assert_eq!(
        item,
        Item {
            id: 0,
            name: "Shoe".into(),
            category: "Footwear".into(),
            image: "img.png".into(),
            cost: U128(100),
            rating: 4,
            stock: 10,
            description: "desc".into(),
        }
    );
}

#[test]
fn ids_increase_by_one_without_gaps() {
    let mut contract = new_contract();
    as_caller(owner());

    for expected in 0..10u64 {
        let item = NewItem {
            name: format!("Item {}", expected),
            cost: U128(expected as u128 * 1_000),
            ..shoe()
        };
        assert_eq!(list_item(&mut contract, item).unwrap(), expected);
        assert_eq!(contract.length(), expected + 1);
    }
    for id in 0..10u64 {
        let item = contract.items(id).unwrap();
        assert_eq!(item.id, id);
        assert_eq!(item.name, format!("Item {}", id));
        assert_eq!(item.cost, U128(id as u128 * 1_000));
    }
}

#[test]
fn failed_listing_does_not_consume_an_id() {
    let mut contract = new_contract();
    as_caller(owner());

    assert_eq!(list_item(&mut contract, shoe()).unwrap(), 0);
    let err = list_item(&mut contract, NewItem { rating: 9, ..shoe() }).unwrap_err();
    assert!(matches!(err, MarketplaceError::InvalidArgument(_)));
    assert_eq!(list_item(&mut contract, shoe()).unwrap(), 1);
    assert_eq!(contract.length(), 2);
}

#[test]
fn rating_out_of_bound_fails() {
    let mut contract = new_contract();
    as_caller(owner());

    let err = list_item(&mut contract, NewItem { rating: 7, ..shoe() }).unwrap_err();
    assert!(matches!(err, MarketplaceError::InvalidArgument(_)));
    assert_eq!(contract.length(), 0);
}

#[test]
fn zero_stock_and_extreme_cost_are_stored_verbatim() {
    let mut contract = new_contract();
    as_caller(owner());

    let item = NewItem {
        stock: 0,
        cost: U128(u128::MAX),
        rating: 0,
        ..shoe()
    };
    let id = list_item(&mut contract, item).unwrap();
    let stored = contract.items(id).unwrap();
    assert_eq!(stored.stock, 0);
    assert_eq!(stored.cost, U128(u128::MAX));
    assert_eq!(stored.rating, 0);
}

#[test]
fn empty_name_and_category_round_trip_unchanged() {
    let mut contract = new_contract();
    as_caller(owner());

    let id = list_item(&mut contract, NewItem { name: String::new(), ..shoe() }).unwrap();
    assert_eq!(id, 0);
    let id = list_item(&mut contract, NewItem { category: " ".into(), ..shoe() }).unwrap();
    assert_eq!(id, 1);
    assert_eq!(contract.length(), 2);

    let first = contract.items(0).unwrap();
    assert_eq!(first.name, "");
    assert_eq!(first.category, "Footwear");
    let second = contract.items(1).unwrap();
    assert_eq!(second.name, "Shoe");
    assert_eq!(second.category, " ");
}

#[test]
fn list_non_owner_fails() {
    let mut contract = new_contract();
    as_caller(stranger());

    let err = list_item(&mut contract, shoe()).unwrap_err();
    assert!(matches!(err, MarketplaceError::Unauthorized(_)));
    assert_eq!(contract.length(), 0);
}

#[test]
fn list_without_deposit_fails() {
    let mut contract = new_contract();
    testing_env!(context(owner()).build());

    let err = list_item(&mut contract, shoe()).unwrap_err();
    assert!(matches!(err, MarketplaceError::InsufficientDeposit(_)));
    assert_eq!(contract.length(), 0);
}

// --- items ---

#[test]
fn items_out_of_range_not_found() {
    let mut contract = new_contract();
    assert!(matches!(
        contract.items(0).unwrap_err(),
        MarketplaceError::NotFound(_)
    ));

    as_caller(owner());
    list_item(&mut contract, shoe()).unwrap();
    assert!(contract.items(0).is_ok());
    assert!(matches!(
        contract.items(1).unwrap_err(),
        MarketplaceError::NotFound(_)
    ));
    assert!(matches!(
        contract.items(u64::MAX).unwrap_err(),
        MarketplaceError::NotFound(_)
    ));
}

#[test]
fn component_list_checks_owner() {
    let mut catalog = ItemCatalog::new();
    let access = AccessControl::new(owner());
    testing_env!(context(owner()).build());

    let err = catalog.list(&access, &stranger(), shoe()).unwrap_err();
    assert!(matches!(err, MarketplaceError::Unauthorized(_)));
    assert!(catalog.is_empty());

    assert_eq!(catalog.list(&access, &owner(), shoe()).unwrap(), 0);
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get(0).unwrap().name, "Shoe");
}
