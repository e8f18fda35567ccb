//! Integration tests for symbol-to-address resolution.
//!
//! Run with: `cargo test --test test_resolve_address`

mod common;

use std::io::Write;
use std::sync::Arc;

use alloy::primitives::{address, Address};
use asset_resolver_mcp::{AddressBook, AppError, AssetResolver};
use tokio_test::{assert_err, assert_ok};

#[test]
fn test_known_symbol() {
    let resolver = common::resolver(&[("USDT", "0xA")]);
    assert_eq!(assert_ok!(resolver.resolve_address("USDT")), "0xA");
}

#[test]
fn test_proxy_suffix() {
    let resolver = common::resolver(&[("OUSDProxy", "0xB")]);
    assert_eq!(assert_ok!(resolver.resolve_address("OUSD")), "0xB");
}

#[test]
fn test_literal_address_passes_through() {
    let resolver = common::resolver(&[]);
    assert_eq!(assert_ok!(resolver.resolve_address("0xC")), "0xC");
    assert_eq!(assert_ok!(resolver.resolve_address(common::USDT)), common::USDT);
}

#[test]
fn test_empty_symbol_is_a_resolution_error() {
    let resolver = common::resolver(&[("USDT", "0xA")]);
    let err = assert_err!(resolver.resolve_address(""));

    assert!(matches!(err, AppError::Resolution(_)));
    assert_eq!(err.to_string(), "Failed to resolve symbol \"\" to an address");
}

#[test]
fn test_every_table_entry_resolves_to_its_address() {
    let book = Arc::new(AddressBook::mainnet());
    let resolver = AssetResolver::mainnet(book.clone());

    for symbol in book.symbols("mainnet") {
        let expected = book.get("mainnet", symbol).unwrap();
        assert_eq!(assert_ok!(resolver.resolve_address(symbol)), expected);
    }
}

#[test]
fn test_mainnet_defaults() {
    let resolver = AssetResolver::mainnet(Arc::new(AddressBook::mainnet()));

    let resolved = |symbol: &str| -> Address {
        assert_ok!(resolver.resolve_address(symbol)).parse().unwrap()
    };

    assert_eq!(resolved("USDT"), common::USDT.parse::<Address>().unwrap());
    assert_eq!(resolved("OUSD"), address!("2A8e1E676Ec238d8A992307B495b45B3fEAa5e86"));
    assert_eq!(resolved("stETH"), address!("ae7ab96520DE3A18E5e111B5EaAb095312D7fE84"));
}

#[test]
fn test_address_book_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"mainnet": {{"CRV": "0xD533a949740bb3306d119CC777fa900bA034cd52", "OETHProxy": "0xE"}}}}"#
    )
    .unwrap();

    let book = assert_ok!(AddressBook::from_file(file.path()));
    let resolver = AssetResolver::mainnet(Arc::new(book));

    assert_eq!(
        assert_ok!(resolver.resolve_address("CRV")),
        "0xD533a949740bb3306d119CC777fa900bA034cd52"
    );
    assert_eq!(assert_ok!(resolver.resolve_address("OETH")), "0xE");
    // A supplied file replaces the built-in defaults
    assert_eq!(assert_ok!(resolver.resolve_address("USDT")), "USDT");
}

#[test]
fn test_address_book_from_malformed_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "mainnet: USDT=0xA").unwrap();

    let err = assert_err!(AddressBook::from_file(file.path()));
    assert!(matches!(err, AppError::Parse(_)));
}
