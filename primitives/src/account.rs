use {
  crate::Address,
  serde::{Deserialize, Serialize},
  std::{
    collections::BTreeMap,
    fmt::{Debug, Display},
  },
};

/// The kind of an account, fixed when the account is created.
#[derive(
  Debug,
  Default,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  PartialOrd,
  Ord,
  Serialize,
  Deserialize,
)]
#[serde(try_from = "i32", into = "i32")]
pub enum AccountType {
  #[default]
  Normal,
  AssetIssue,
  Contract,
}

impl AccountType {
  /// Raw numeric tag of this type as it appears on the wire.
  pub const fn type_value(self) -> i32 {
    match self {
      AccountType::Normal => 0,
      AccountType::AssetIssue => 1,
      AccountType::Contract => 2,
    }
  }
}

impl TryFrom<i32> for AccountType {
  type Error = i32;

  fn try_from(value: i32) -> Result<Self, Self::Error> {
    match value {
      0 => Ok(AccountType::Normal),
      1 => Ok(AccountType::AssetIssue),
      2 => Ok(AccountType::Contract),
      other => Err(other),
    }
  }
}

impl From<AccountType> for i32 {
  fn from(value: AccountType) -> Self {
    value.type_value()
  }
}

/// A stake allocation from this account to a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vote {
  pub vote_address: Address,
  pub vote_count: i64,
}

impl Vote {
  pub fn new(vote_address: Address, vote_count: i64) -> Self {
    Self {
      vote_address,
      vote_count,
    }
  }
}

/// Key of an entry in the per-account asset map.
///
/// Assets are keyed by the lowercase hex form of the asset name bytes,
/// use [`AssetId::from_name`] to derive a key from a raw asset name.
#[derive(
  Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AssetId(String);

impl AssetId {
  pub fn new(key: impl Into<String>) -> Self {
    Self(key.into())
  }

  pub fn from_name(name: impl AsRef<[u8]>) -> Self {
    Self(hex::encode(name))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl Display for AssetId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for AssetId {
  fn from(value: &str) -> Self {
    Self::new(value)
  }
}

impl From<String> for AssetId {
  fn from(value: String) -> Self {
    Self(value)
  }
}

/// State of a single ledger account.
///
/// This is a plain value. Identity fields (address and type) have no
/// setters, everything else is changed through
/// [`AccountCapsule`](crate::AccountCapsule), which swaps in a new
/// snapshot on every write.
#[derive(Clone, PartialEq, Eq)]
pub struct Account {
  pub(crate) address: Address,
  pub(crate) account_type: AccountType,
  pub(crate) name: Vec<u8>,
  pub(crate) balance: i64,
  pub(crate) votes: Vec<Vote>,
  pub(crate) assets: BTreeMap<AssetId, i64>,
  pub(crate) latest_operation_time: i64,
}

impl Account {
  /// A fresh account with no votes, no assets and a zero timestamp.
  pub fn new(
    name: impl Into<Vec<u8>>,
    account_type: AccountType,
    address: Address,
    balance: i64,
  ) -> Self {
    Self {
      address,
      account_type,
      name: name.into(),
      balance,
      votes: Vec::new(),
      assets: BTreeMap::new(),
      latest_operation_time: 0,
    }
  }

  /// Sets the last-operation timestamp while building an account.
  pub fn with_latest_operation_time(mut self, millis: i64) -> Self {
    self.latest_operation_time = millis;
    self
  }

  pub fn address(&self) -> &Address {
    &self.address
  }

  pub fn account_type(&self) -> AccountType {
    self.account_type
  }

  /// Account label, empty when the account was created without one.
  pub fn name(&self) -> &[u8] {
    &self.name
  }

  pub fn balance(&self) -> i64 {
    self.balance
  }

  /// Voting weight of the account, equal to its native balance.
  pub fn share(&self) -> i64 {
    self.balance
  }

  pub fn latest_operation_time(&self) -> i64 {
    self.latest_operation_time
  }

  /// Votes in the order they were cast. Empty if none were cast.
  pub fn votes(&self) -> &[Vote] {
    &self.votes
  }

  pub fn assets(&self) -> &BTreeMap<AssetId, i64> {
    &self.assets
  }

  pub fn asset_amount(&self, asset: &AssetId) -> Option<i64> {
    self.assets.get(asset).copied()
  }
}

impl Debug for Account {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Account")
      .field("address", &self.address)
      .field("type", &self.account_type)
      .field("name", &String::from_utf8_lossy(&self.name))
      .field("balance", &self.balance)
      .field("votes", &self.votes)
      .field("assets", &self.assets)
      .field("latest_operation_time", &self.latest_operation_time)
      .finish()
  }
}
