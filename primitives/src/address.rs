use {
  serde::{Deserialize, Serialize},
  std::{
    fmt::{Debug, Display},
    ops::Deref,
    str::FromStr,
  },
  thiserror::Error,
};

/// Number of bytes in every account address.
pub const ADDRESS_LENGTH: usize = 21;

#[derive(Debug, Error)]
pub enum Error {
  #[error("address must be 21 bytes long, got {0}")]
  InvalidLength(usize),

  #[error("invalid base58 address: {0}")]
  Base58(#[from] bs58::decode::Error),

  #[error("invalid hex address: {0}")]
  Hex(#[from] hex::FromHexError),
}

/// Identifies an account in the ledger.
///
/// The address is the primary key under which the encoded account
/// lives in the state store. It is assigned when the account is first
/// created and never changes afterwards, every vote record also points
/// at its candidate through one of these.
#[derive(
  Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Address([u8; ADDRESS_LENGTH]);

impl Address {
  pub const fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
    Self(bytes)
  }

  pub fn from_hex(s: &str) -> Result<Self, Error> {
    Self::try_from(hex::decode(s)?.as_slice())
  }

  pub fn to_hex(&self) -> String {
    hex::encode(self.0)
  }

  pub fn to_bytes(&self) -> [u8; ADDRESS_LENGTH] {
    self.0
  }
}

impl AsRef<[u8]> for Address {
  fn as_ref(&self) -> &[u8] {
    &self.0
  }
}

impl Deref for Address {
  type Target = [u8];

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl Display for Address {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", bs58::encode(self.0).into_string())
  }
}

impl Debug for Address {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "address({})", bs58::encode(self.0).into_string())
  }
}

impl From<Address> for String {
  fn from(addr: Address) -> Self {
    bs58::encode(addr.0).into_string()
  }
}

impl From<[u8; ADDRESS_LENGTH]> for Address {
  fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
    Self(bytes)
  }
}

impl TryFrom<&[u8]> for Address {
  type Error = Error;

  fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
    let bytes: [u8; ADDRESS_LENGTH] = value
      .try_into()
      .map_err(|_| Error::InvalidLength(value.len()))?;
    Ok(Self(bytes))
  }
}

impl FromStr for Address {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let bytes = bs58::decode(s).into_vec()?;
    Self::try_from(bytes.as_slice())
  }
}

impl TryFrom<&str> for Address {
  type Error = Error;

  fn try_from(value: &str) -> Result<Self, Self::Error> {
    FromStr::from_str(value)
  }
}
