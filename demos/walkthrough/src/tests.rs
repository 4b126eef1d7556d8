//! Tests for the walkthrough helpers.

#[cfg(test)]
mod endpoints {
    use manet_core::{NodeId, SimConfig};
    use manet_sim::SimBuilder;

    use crate::last_node;

    #[test]
    fn last_node_is_highest_identity() {
        let sim = SimBuilder::new(SimConfig::reactive()).build_reactive().unwrap();
        assert_eq!(last_node(&sim), Some(NodeId(SimConfig::reactive().node_count as u32)));
    }

    #[test]
    fn empty_network_has_no_endpoint() {
        let config = SimConfig { node_count: 0, ..SimConfig::proactive() };
        let sim = SimBuilder::new(config).build_proactive().unwrap();
        assert!(sim.topology.is_empty());
        assert_eq!(last_node(&sim), None);
    }
}
