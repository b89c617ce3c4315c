use {
  crate::{
    account::{Account, AccountType, AssetId, Vote},
    codec,
    contract::AccountCreateContract,
    Address,
  },
  std::{fmt::Debug, ops::Deref, sync::Arc},
  thiserror::Error,
  tracing::debug,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
  #[error("asset amount must be positive, got {0}")]
  InvalidAmount(i64),

  #[error(
    "insufficient {asset} balance: requested {requested}, available \
     {available}"
  )]
  InsufficientAsset {
    asset: AssetId,
    available: i64,
    requested: i64,
  },

  #[error("adding {amount} to {asset} balance {current} overflows")]
  Overflow {
    asset: AssetId,
    current: i64,
    amount: i64,
  },
}

/// Shared handle to a ledger account snapshot.
///
/// Cloning a capsule is cheap and all clones see the same snapshot.
/// Every mutator computes its new values first and only then swaps in a
/// fresh snapshot, so a capsule cloned before a write keeps observing
/// the old state and a rejected write leaves the account untouched.
///
/// Read-modify-write cycles on the same address must be serialized by
/// whoever owns the state store, the capsule does no locking.
#[derive(Clone, PartialEq, Eq)]
pub struct AccountCapsule {
  inner: Arc<Account>,
}

impl AccountCapsule {
  /// Decodes an account from its stored form.
  pub fn from_bytes(data: &[u8]) -> Result<Self, codec::Error> {
    match codec::decode(data) {
      Ok(account) => Ok(Self::from(account)),
      Err(e) => {
        debug!("rejected stored account ({} bytes): {e}", data.len());
        Err(e)
      }
    }
  }

  /// Creates an account with a starting balance, no votes and no assets.
  pub fn new(
    name: impl Into<Vec<u8>>,
    account_type: AccountType,
    address: Address,
    balance: i64,
  ) -> Self {
    Self::from(Account::new(name, account_type, address, balance))
  }

  /// Creates the account requested by an account-create contract.
  ///
  /// The new account always starts with a zero balance.
  pub fn from_create_contract(contract: &AccountCreateContract) -> Self {
    Self::new(
      contract.account_name.clone(),
      contract.account_type,
      contract.owner_address,
      0,
    )
  }

  pub fn from_address_and_name(
    address: Address,
    name: impl Into<Vec<u8>>,
    account_type: AccountType,
  ) -> Self {
    Self::new(name, account_type, address, 0)
  }

  pub fn from_account(account: Account) -> Self {
    Self::from(account)
  }

  /// Encodes the current snapshot for persistence.
  pub fn to_bytes(&self) -> Result<Vec<u8>, codec::Error> {
    codec::encode(&self.inner)
  }

  pub fn instance(&self) -> &Account {
    &self.inner
  }

  pub fn into_inner(self) -> Account {
    Arc::try_unwrap(self.inner).unwrap_or_else(|shared| (*shared).clone())
  }

  pub fn set_balance(&mut self, balance: i64) {
    Arc::make_mut(&mut self.inner).balance = balance;
  }

  /// Appends a vote. Votes for the same candidate are kept as
  /// separate entries.
  pub fn add_vote(&mut self, vote_address: Address, vote_count: i64) {
    Arc::make_mut(&mut self.inner)
      .votes
      .push(Vote::new(vote_address, vote_count));
  }

  /// Adds `amount` to an asset balance, a missing asset counts as zero.
  ///
  /// Negative amounts are accepted. Returns the new balance of the asset.
  pub fn add_asset_amount(
    &mut self,
    asset: &AssetId,
    amount: i64,
  ) -> Result<i64, AssetError> {
    let current = self.inner.asset_amount(asset).unwrap_or(0);
    let updated =
      current
        .checked_add(amount)
        .ok_or_else(|| AssetError::Overflow {
          asset: asset.clone(),
          current,
          amount,
        })?;

    Arc::make_mut(&mut self.inner)
      .assets
      .insert(asset.clone(), updated);
    Ok(updated)
  }

  /// Withdraws `amount` from an asset balance.
  ///
  /// The amount must be positive and no larger than the current
  /// balance of the asset, a missing asset has a balance of zero.
  /// Returns the remaining balance of the asset.
  pub fn reduce_asset_amount(
    &mut self,
    asset: &AssetId,
    amount: i64,
  ) -> Result<i64, AssetError> {
    if amount <= 0 {
      return Err(AssetError::InvalidAmount(amount));
    }

    let available = self.inner.asset_amount(asset).unwrap_or(0);
    if amount > available {
      debug!(
        address = %self.inner.address(),
        "withdrawal of {amount} {asset} exceeds balance {available}"
      );
      return Err(AssetError::InsufficientAsset {
        asset: asset.clone(),
        available,
        requested: amount,
      });
    }

    let remaining = available - amount;
    Arc::make_mut(&mut self.inner)
      .assets
      .insert(asset.clone(), remaining);
    Ok(remaining)
  }
}

impl Deref for AccountCapsule {
  type Target = Account;

  fn deref(&self) -> &Self::Target {
    &self.inner
  }
}

impl From<Account> for AccountCapsule {
  fn from(account: Account) -> Self {
    Self {
      inner: Arc::new(account),
    }
  }
}

impl From<AccountCapsule> for Account {
  fn from(capsule: AccountCapsule) -> Self {
    capsule.into_inner()
  }
}

impl Debug for AccountCapsule {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    Debug::fmt(&*self.inner, f)
  }
}

#[cfg(test)]
mod tests {
  use {
    super::{AccountCapsule, AssetError},
    crate::{
      Account,
      AccountCreateContract,
      AccountType,
      Address,
      AssetId,
      Vote,
      ADDRESS_LENGTH,
    },
  };

  fn addr(byte: u8) -> Address {
    Address::new([byte; ADDRESS_LENGTH])
  }

  fn capsule() -> AccountCapsule {
    AccountCapsule::new(b"owner".to_vec(), AccountType::Normal, addr(1), 1000)
  }

  #[test]
  fn set_balance_accepts_any_value() {
    let mut acc = capsule();
    for v in [0, 42, -5, i64::MIN, i64::MAX] {
      acc.set_balance(v);
      assert_eq!(acc.balance(), v);
    }
  }

  #[test]
  fn add_asset_from_absent() -> anyhow::Result<()> {
    let mut acc = capsule();
    let x = AssetId::from_name("X");

    assert_eq!(acc.add_asset_amount(&x, 0)?, 0);
    assert_eq!(acc.assets().get(&x), Some(&0));

    assert_eq!(acc.add_asset_amount(&x, 100)?, 100);
    assert_eq!(acc.assets().get(&x), Some(&100));
    Ok(())
  }

  #[test]
  fn add_asset_accepts_negative_amounts() -> anyhow::Result<()> {
    let mut acc = capsule();
    let x = AssetId::from_name("X");
    assert_eq!(acc.add_asset_amount(&x, -30)?, -30);
    assert_eq!(acc.asset_amount(&x), Some(-30));
    Ok(())
  }

  #[test]
  fn add_asset_overflow_is_rejected() -> anyhow::Result<()> {
    let mut acc = capsule();
    let x = AssetId::from_name("X");
    acc.add_asset_amount(&x, i64::MAX)?;

    assert_eq!(acc.add_asset_amount(&x, 1), Err(AssetError::Overflow {
      asset: x.clone(),
      current: i64::MAX,
      amount: 1,
    }));
    assert_eq!(acc.asset_amount(&x), Some(i64::MAX));
    Ok(())
  }

  #[test]
  fn reduce_asset_within_balance() -> anyhow::Result<()> {
    let mut acc = capsule();
    let x = AssetId::from_name("X");
    acc.add_asset_amount(&x, 100)?;

    assert_eq!(acc.reduce_asset_amount(&x, 40)?, 60);
    assert_eq!(acc.asset_amount(&x), Some(60));

    assert_eq!(acc.reduce_asset_amount(&x, 60)?, 0);
    assert_eq!(acc.asset_amount(&x), Some(0));
    Ok(())
  }

  #[test]
  fn reduce_asset_rejects_over_withdrawal() -> anyhow::Result<()> {
    let mut acc = capsule();
    let x = AssetId::from_name("X");
    acc.add_asset_amount(&x, 60)?;

    assert_eq!(
      acc.reduce_asset_amount(&x, 1000),
      Err(AssetError::InsufficientAsset {
        asset: x.clone(),
        available: 60,
        requested: 1000,
      })
    );
    assert_eq!(acc.asset_amount(&x), Some(60));
    Ok(())
  }

  #[test]
  fn reduce_asset_rejects_non_positive() -> anyhow::Result<()> {
    let mut acc = capsule();
    let x = AssetId::from_name("X");
    acc.add_asset_amount(&x, 60)?;
    let before = acc.clone();

    assert_eq!(
      acc.reduce_asset_amount(&x, 0),
      Err(AssetError::InvalidAmount(0))
    );
    assert_eq!(
      acc.reduce_asset_amount(&x, -5),
      Err(AssetError::InvalidAmount(-5))
    );
    assert_eq!(acc, before);
    Ok(())
  }

  #[test]
  fn reduce_absent_asset_fails() {
    let mut acc = capsule();
    let missing = AssetId::from_name("missing");

    assert_eq!(
      acc.reduce_asset_amount(&missing, 1),
      Err(AssetError::InsufficientAsset {
        asset: missing.clone(),
        available: 0,
        requested: 1,
      })
    );
    assert!(acc.assets().is_empty());
  }

  #[test]
  fn votes_are_appended_not_merged() {
    let mut acc = capsule();
    assert!(acc.votes().is_empty());

    acc.add_vote(addr(7), 10);
    acc.add_vote(addr(7), 5);

    assert_eq!(acc.votes(), &[Vote::new(addr(7), 10), Vote::new(addr(7), 5)]);
  }

  #[test]
  fn clones_keep_their_snapshot() -> anyhow::Result<()> {
    let mut acc = capsule();
    let snapshot = acc.clone();

    acc.set_balance(1);
    acc.add_vote(addr(3), 2);
    acc.add_asset_amount(&AssetId::from_name("X"), 5)?;

    assert_eq!(snapshot.balance(), 1000);
    assert!(snapshot.votes().is_empty());
    assert!(snapshot.assets().is_empty());
    assert_eq!(acc.balance(), 1);
    Ok(())
  }

  #[test]
  fn from_create_contract_ignores_balance() {
    let contract = AccountCreateContract {
      owner_address: addr(0x41),
      account_name: b"N".to_vec(),
      account_type: AccountType::Normal,
    };

    let acc = AccountCapsule::from_create_contract(&contract);
    assert_eq!(acc.address(), &addr(0x41));
    assert_eq!(acc.account_type(), AccountType::Normal);
    assert_eq!(acc.account_type().type_value(), contract.type_value());
    assert_eq!(acc.name(), b"N");
    assert_eq!(acc.balance(), 0);
  }

  #[test]
  fn from_address_and_name_keeps_name() {
    let acc = AccountCapsule::from_address_and_name(
      addr(2),
      b"named".to_vec(),
      AccountType::Contract,
    );
    assert_eq!(acc.address(), &addr(2));
    assert_eq!(acc.account_type(), AccountType::Contract);
    assert_eq!(acc.name(), b"named");
    assert_eq!(acc.balance(), 0);
  }

  #[test]
  fn wraps_existing_account() {
    let account = Account::new(b"".to_vec(), AccountType::AssetIssue, addr(4), 7);
    let acc = AccountCapsule::from_account(account.clone());
    assert_eq!(acc.instance(), &account);
    assert_eq!(acc.into_inner(), account);
  }

  #[test]
  fn from_bytes_roundtrip_and_failure() -> anyhow::Result<()> {
    let mut acc = capsule();
    acc.add_vote(addr(9), 3);
    acc.add_asset_amount(&AssetId::from_name("X"), 11)?;

    let decoded = AccountCapsule::from_bytes(&acc.to_bytes()?)?;
    assert_eq!(decoded, acc);

    assert!(AccountCapsule::from_bytes(&[0x92, 0x01]).is_err());
    Ok(())
  }
}
