use {
  anyhow::Context,
  clap::{Parser, Subcommand, ValueEnum},
  tron_primitives::{AccountCapsule, AccountType, Address, AssetId},
};

/// Inspect and edit encoded ledger accounts.
///
/// Accounts are passed around as hex strings of their stored form,
/// exactly as they sit in the state store.
#[derive(Debug, Parser)]
#[clap(name = "tron-account")]
pub struct CliOptions {
  #[clap(subcommand)]
  pub command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TypeArg {
  Normal,
  AssetIssue,
  Contract,
}

impl From<TypeArg> for AccountType {
  fn from(value: TypeArg) -> Self {
    match value {
      TypeArg::Normal => AccountType::Normal,
      TypeArg::AssetIssue => AccountType::AssetIssue,
      TypeArg::Contract => AccountType::Contract,
    }
  }
}

#[derive(Debug, Subcommand)]
pub enum Command {
  /// Print a decoded account
  Decode {
    #[clap(value_name = "HEX")]
    account: String,
  },

  /// Create a new account and print its encoded form
  Create {
    /// Base58 address of the account
    #[clap(long)]
    address: Address,

    #[clap(long = "type", value_enum, default_value = "normal")]
    account_type: TypeArg,

    #[clap(long, default_value = "")]
    name: String,

    #[clap(long, default_value_t = 0, allow_negative_numbers = true)]
    balance: i64,
  },

  /// Credit an asset and print the updated account
  AddAsset {
    #[clap(value_name = "HEX")]
    account: String,

    /// Asset name, the map key is derived from it
    #[clap(long)]
    asset: String,

    #[clap(long, allow_negative_numbers = true)]
    amount: i64,
  },

  /// Withdraw an asset and print the updated account
  ReduceAsset {
    #[clap(value_name = "HEX")]
    account: String,

    /// Asset name, the map key is derived from it
    #[clap(long)]
    asset: String,

    #[clap(long, allow_negative_numbers = true)]
    amount: i64,
  },

  /// Append a vote and print the updated account
  Vote {
    #[clap(value_name = "HEX")]
    account: String,

    /// Base58 address of the candidate
    #[clap(long)]
    candidate: Address,

    #[clap(long, allow_negative_numbers = true)]
    count: i64,
  },
}

fn decode(account: &str) -> anyhow::Result<AccountCapsule> {
  let bytes = hex::decode(account.trim()).context("account is not hex")?;
  AccountCapsule::from_bytes(&bytes).context("account does not decode")
}

fn encode(account: &AccountCapsule) -> anyhow::Result<String> {
  Ok(hex::encode(account.to_bytes()?))
}

impl Command {
  /// Runs the command and returns what should be printed.
  pub fn execute(self) -> anyhow::Result<String> {
    match self {
      Command::Decode { account } => Ok(format!("{:#?}", decode(&account)?)),
      Command::Create {
        address,
        account_type,
        name,
        balance,
      } => encode(&AccountCapsule::new(
        name.into_bytes(),
        account_type.into(),
        address,
        balance,
      )),
      Command::AddAsset {
        account,
        asset,
        amount,
      } => {
        let mut capsule = decode(&account)?;
        capsule.add_asset_amount(&AssetId::from_name(&asset), amount)?;
        encode(&capsule)
      }
      Command::ReduceAsset {
        account,
        asset,
        amount,
      } => {
        let mut capsule = decode(&account)?;
        capsule.reduce_asset_amount(&AssetId::from_name(&asset), amount)?;
        encode(&capsule)
      }
      Command::Vote {
        account,
        candidate,
        count,
      } => {
        let mut capsule = decode(&account)?;
        capsule.add_vote(candidate, count);
        encode(&capsule)
      }
    }
  }
}
