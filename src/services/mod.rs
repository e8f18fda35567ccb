//! Business logic services module.

pub mod address_book;
pub mod resolver;
pub mod token;

pub use address_book::AddressBook;
pub use resolver::{AssetResolver, PROXY_SUFFIX};
pub use token::TokenService;
