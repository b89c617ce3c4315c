use serde::{Deserialize, Serialize};

/// A known peer used as the first contact when joining the network.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeedNode {
  /// Identifier of the peer, as advertised by the peer itself.
  pub id: String,

  /// Where the peer can be reached. Kept verbatim, it is up to the
  /// transport to interpret it.
  pub uri: String,
}

impl SeedNode {
  pub fn new(id: impl Into<String>, uri: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      uri: uri.into(),
    }
  }
}

/// Ordered list of seed peers.
///
/// Order is preserved so that operators can put their preferred
/// bootstrap peers first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeedNodes {
  seed_nodes: Vec<SeedNode>,
}

impl SeedNodes {
  pub fn new(seed_nodes: Vec<SeedNode>) -> Self {
    Self { seed_nodes }
  }

  pub fn seed_nodes(&self) -> &[SeedNode] {
    &self.seed_nodes
  }

  /// Replaces the whole list, returning the previous one.
  pub fn set_seed_nodes(&mut self, seed_nodes: Vec<SeedNode>) -> Vec<SeedNode> {
    std::mem::replace(&mut self.seed_nodes, seed_nodes)
  }

  pub fn len(&self) -> usize {
    self.seed_nodes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.seed_nodes.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &SeedNode> {
    self.seed_nodes.iter()
  }
}

impl FromIterator<SeedNode> for SeedNodes {
  fn from_iter<T: IntoIterator<Item = SeedNode>>(iter: T) -> Self {
    Self::new(iter.into_iter().collect())
  }
}

impl IntoIterator for SeedNodes {
  type Item = SeedNode;
  type IntoIter = std::vec::IntoIter<SeedNode>;

  fn into_iter(self) -> Self::IntoIter {
    self.seed_nodes.into_iter()
  }
}
