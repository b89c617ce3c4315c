use tron_primitives::{
  AccountCapsule,
  AccountCreateContract,
  AccountType,
  Address,
  ADDRESS_LENGTH,
};

/// Deterministic address whose every byte is `byte`.
pub fn address(byte: u8) -> Address {
  Address::new([byte; ADDRESS_LENGTH])
}

/// Opens an account the way the ledger does when it processes an
/// account-create contract, then funds it with `balance`.
pub fn open_account(
  owner: Address,
  name: &str,
  balance: i64,
) -> AccountCapsule {
  let mut account =
    AccountCapsule::from_create_contract(&AccountCreateContract {
      owner_address: owner,
      account_name: name.as_bytes().to_vec(),
      account_type: AccountType::Normal,
    });
  account.set_balance(balance);
  account
}
