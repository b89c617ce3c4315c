use {
  crate::{SeedNode, SeedNodes},
  serde::{Deserialize, Serialize},
  tracing::debug,
};

/// Network wide configuration of a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Identifier of the network this node joins. Peers on
  /// different networks ignore each other.
  pub network_id: String,

  /// Peers contacted first when joining the network.
  pub seed_nodes: SeedNodes,
}

impl Config {
  pub fn with_seed_nodes(mut self, seed_nodes: Vec<SeedNode>) -> Self {
    self.set_seed_nodes(seed_nodes);
    self
  }

  pub fn seed_nodes(&self) -> &[SeedNode] {
    self.seed_nodes.seed_nodes()
  }

  pub fn set_seed_nodes(&mut self, seed_nodes: Vec<SeedNode>) {
    let previous = self.seed_nodes.set_seed_nodes(seed_nodes);
    debug!(
      network = %self.network_id,
      "replaced {} seed nodes with {}",
      previous.len(),
      self.seed_nodes.len()
    );
  }
}

impl Default for Config {
  fn default() -> Self {
    Self {
      network_id: "localnet".into(),
      seed_nodes: SeedNodes::default(),
    }
  }
}
