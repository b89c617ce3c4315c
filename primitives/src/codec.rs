//! Binary encoding of accounts.
//!
//! Accounts are stored as MessagePack maps keyed by field name. A record
//! written by an older or newer schema still decodes: absent fields take
//! their default values and fields this version does not know about are
//! skipped. Everything that decodes is validated before an [`Account`] is
//! handed out, so a corrupted record never turns into a half-initialized
//! account.

use {
  crate::{
    account::{Account, AccountType, AssetId, Vote},
    address::{self, Address},
  },
  serde::{Deserialize, Serialize},
  std::{collections::BTreeMap, io::Cursor},
  thiserror::Error,
};

#[derive(Debug, Error)]
pub enum Error {
  #[error("malformed account record: {0}")]
  Decode(#[from] rmp_serde::decode::Error),

  #[error("failed to encode account: {0}")]
  Encode(#[from] rmp_serde::encode::Error),

  #[error("{0} unexpected bytes after the account record")]
  TrailingBytes(usize),

  #[error("invalid address in account record: {0}")]
  InvalidAddress(#[from] address::Error),

  #[error("unknown account type tag {0}")]
  UnknownAccountType(i32),
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct VoteRecord {
  #[serde(with = "serde_bytes")]
  vote_address: Vec<u8>,
  vote_count: i64,
}

/// Wire layout of an account.
///
/// The type tag is carried as its raw number so that a record with a tag
/// this version does not know fails with [`Error::UnknownAccountType`]
/// instead of a generic parse error.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct AccountRecord {
  #[serde(with = "serde_bytes")]
  address: Vec<u8>,
  #[serde(with = "serde_bytes")]
  account_name: Vec<u8>,
  #[serde(rename = "type")]
  type_value: i32,
  balance: i64,
  votes: Vec<VoteRecord>,
  asset: BTreeMap<String, i64>,
  latest_operation_time: i64,
}

impl From<&Account> for AccountRecord {
  fn from(acc: &Account) -> Self {
    Self {
      address: acc.address.to_vec(),
      account_name: acc.name.clone(),
      type_value: acc.account_type.type_value(),
      balance: acc.balance,
      votes: acc
        .votes
        .iter()
        .map(|v| VoteRecord {
          vote_address: v.vote_address.to_vec(),
          vote_count: v.vote_count,
        })
        .collect(),
      asset: acc
        .assets
        .iter()
        .map(|(k, v)| (k.as_str().to_owned(), *v))
        .collect(),
      latest_operation_time: acc.latest_operation_time,
    }
  }
}

impl TryFrom<AccountRecord> for Account {
  type Error = Error;

  fn try_from(record: AccountRecord) -> Result<Self, Self::Error> {
    let votes = record
      .votes
      .into_iter()
      .map(|v| -> Result<Vote, Error> {
        Ok(Vote::new(
          Address::try_from(v.vote_address.as_slice())?,
          v.vote_count,
        ))
      })
      .collect::<Result<Vec<_>, _>>()?;

    Ok(Account {
      address: Address::try_from(record.address.as_slice())?,
      account_type: AccountType::try_from(record.type_value)
        .map_err(Error::UnknownAccountType)?,
      name: record.account_name,
      balance: record.balance,
      votes,
      assets: record
        .asset
        .into_iter()
        .map(|(k, v)| (AssetId::from(k), v))
        .collect(),
      latest_operation_time: record.latest_operation_time,
    })
  }
}

/// Serializes an account into its stored form.
///
/// The output is deterministic: the same account always produces
/// the same bytes.
pub fn encode(account: &Account) -> Result<Vec<u8>, Error> {
  Ok(rmp_serde::to_vec_named(&AccountRecord::from(account))?)
}

/// Parses and validates a stored account.
///
/// The whole buffer must be consumed by exactly one record.
pub fn decode(bytes: &[u8]) -> Result<Account, Error> {
  let mut cursor = Cursor::new(bytes);
  let record = {
    let mut de = rmp_serde::Deserializer::new(&mut cursor);
    AccountRecord::deserialize(&mut de)?
  };

  let consumed = cursor.position() as usize;
  if consumed != bytes.len() {
    return Err(Error::TrailingBytes(bytes.len() - consumed));
  }

  Account::try_from(record)
}
