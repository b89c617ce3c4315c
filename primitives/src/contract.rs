use {
  crate::{AccountType, Address},
  serde::{Deserialize, Serialize},
};

/// Request to open a new account, carried inside a transaction.
///
/// The owner address becomes the address of the created account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountCreateContract {
  pub owner_address: Address,
  #[serde(with = "serde_bytes")]
  pub account_name: Vec<u8>,
  #[serde(rename = "type")]
  pub account_type: AccountType,
}

impl AccountCreateContract {
  pub fn type_value(&self) -> i32 {
    self.account_type.type_value()
  }
}
