mod account;
mod address;
mod capsule;
mod contract;

pub mod codec;

pub use {
  account::{Account, AccountType, AssetId, Vote},
  address::{Address, Error as AddressError, ADDRESS_LENGTH},
  capsule::{AccountCapsule, AssetError},
  codec::Error as DecodeError,
  contract::AccountCreateContract,
};
