//! Stand-in network broadcaster
//!
//! No sockets: broadcasting serializes the message once and logs a line per
//! registered node. Exists so demo drivers have the same call shape a real
//! gossip layer would offer.

use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NetworkMessage {
    NewBlock { hash: String },
    NewTransaction { id: String },
}

#[derive(Debug, Clone, Default)]
pub struct Network {
    nodes: Vec<String>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, address: &str) {
        self.nodes.push(address.to_string());
    }

    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn broadcast(&self, message: &NetworkMessage) {
        let payload = serde_json::to_string(message)
            .expect("network messages always serialize to JSON");
        for node in &self.nodes {
            info!("Broadcasting to {}: {}", node, payload);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_wire_shape() {
        let msg = NetworkMessage::NewBlock { hash: "abc123".to_string() };
        let payload = serde_json::to_string(&msg).unwrap();
        assert_eq!(payload, r#"{"type":"new_block","hash":"abc123"}"#);

        let back: NetworkMessage = serde_json::from_str(&payload).unwrap();
        assert!(matches!(back, NetworkMessage::NewBlock { hash } if hash == "abc123"));
    }

    #[test]
    fn test_broadcast_to_empty_network_is_a_noop() {
        let network = Network::new();
        network.broadcast(&NetworkMessage::NewTransaction { id: "t1".to_string() });
        assert!(network.nodes().is_empty());
    }
}
