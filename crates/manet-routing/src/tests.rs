//! Unit tests for manet-routing.
//!
//! Hand-built graphs pin down exact paths and tie-breaks; seeded random
//! placements are checked against an all-pairs distance computed the slow
//! way.

#[cfg(test)]
mod helpers {
    use manet_core::{Bounds, NodeId, Point, SimRng};
    use manet_topology::{NeighborGraph, Topology};

    pub fn n(id: u32) -> NodeId {
        NodeId(id)
    }

    pub fn ids(raw: &[u32]) -> Vec<NodeId> {
        raw.iter().copied().map(NodeId).collect()
    }

    /// 1:(0,0)  2:(10,0)  3:(20,0)  4:(1000,1000), range 15.
    pub fn line_graph() -> NeighborGraph {
        Topology::from_positions(
            [
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(20.0, 0.0),
                Point::new(1000.0, 1000.0),
            ],
            15.0,
        )
        .unwrap()
        .snapshot()
    }

    /// Two equal-length routes 1→4: via 2 and via 3.
    ///
    ///     1 ── 2 ── 4
    ///      └── 3 ──┘
    pub fn diamond() -> NeighborGraph {
        NeighborGraph::from_edges(4, &[(n(1), n(2)), (n(1), n(3)), (n(2), n(4)), (n(3), n(4))])
    }

    pub fn random_graph(seed: u64, count: usize, range: f64) -> NeighborGraph {
        let mut rng = SimRng::new(seed);
        Topology::place(count, Bounds::new(50.0, 50.0, 700.0, 400.0), range, &mut rng).snapshot()
    }

    /// Floyd–Warshall hop distances, indexed by slot.
    pub fn all_pairs(graph: &NeighborGraph) -> Vec<Vec<Option<u32>>> {
        let count = graph.node_count();
        let mut d = vec![vec![None; count]; count];
        for (u, v) in graph.edges() {
            let (a, b) = (u.slot().unwrap(), v.slot().unwrap());
            d[a][b] = Some(1);
            d[b][a] = Some(1);
        }
        for (i, row) in d.iter_mut().enumerate() {
            row[i] = Some(0);
        }
        for k in 0..count {
            for i in 0..count {
                for j in 0..count {
                    if let (Some(a), Some(b)) = (d[i][k], d[k][j]) {
                        if d[i][j].is_none_or(|cur| a + b < cur) {
                            d[i][j] = Some(a + b);
                        }
                    }
                }
            }
        }
        d
    }
}

// ── Path ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod path {
    use super::helpers::{ids, n};
    use crate::Path;

    #[test]
    fn empty_sequence_is_rejected() {
        assert!(Path::new(Vec::new()).is_none());
    }

    #[test]
    fn accessors() {
        let p = Path::new(ids(&[1, 2, 3])).unwrap();
        assert_eq!(p.source(), n(1));
        assert_eq!(p.destination(), n(3));
        assert_eq!(p.hop_count(), 2);
        assert_eq!(p.hops().collect::<Vec<_>>(), [(n(1), n(2)), (n(2), n(3))]);
        assert_eq!(p.to_string(), "Node 1 -> Node 2 -> Node 3");
    }

    #[test]
    fn trivial_path_has_zero_hops() {
        let p = Path::trivial(n(5));
        assert_eq!(p.nodes(), &[n(5)]);
        assert_eq!(p.hop_count(), 0);
        assert_eq!(p.hops().count(), 0);
    }
}

// ── Search ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod search {
    use manet_core::Point;
    use manet_topology::{NeighborGraph, Topology};

    use super::helpers::{all_pairs, diamond, ids, line_graph, n, random_graph};
    use crate::{RoutingError, find_path, find_path_traced, hop_count};

    #[test]
    fn line_scenario() {
        let g = line_graph();
        let p = find_path(&g, n(1), n(3)).unwrap().unwrap();
        assert_eq!(p.nodes(), ids(&[1, 2, 3]).as_slice());
        assert_eq!(p.hop_count(), 2);
        assert_eq!(find_path(&g, n(1), n(4)).unwrap(), None);
        assert_eq!(hop_count(&g, n(1), n(4)).unwrap(), None);
    }

    #[test]
    fn single_node_network() {
        let g = Topology::from_positions([Point::new(100.0, 100.0)], 150.0)
            .unwrap()
            .snapshot();
        let p = find_path(&g, n(1), n(1)).unwrap().unwrap();
        assert_eq!(p.nodes(), &[n(1)]);
        assert_eq!(hop_count(&g, n(1), n(1)).unwrap(), Some(0));
    }

    #[test]
    fn source_equals_destination_skips_search() {
        let g = line_graph();
        let mut forwarded = 0;
        let p = find_path_traced(&g, n(4), n(4), |_| forwarded += 1).unwrap().unwrap();
        assert_eq!(p.hop_count(), 0);
        assert_eq!(forwarded, 0);
    }

    #[test]
    fn unknown_endpoints_are_errors() {
        let g = line_graph();
        assert_eq!(find_path(&g, n(9), n(1)), Err(RoutingError::UnknownNode(n(9))));
        assert_eq!(find_path(&g, n(1), n(0)), Err(RoutingError::UnknownNode(n(0))));
    }

    #[test]
    fn ties_go_to_the_earlier_created_neighbor() {
        let p = find_path(&diamond(), n(1), n(4)).unwrap().unwrap();
        assert_eq!(p.nodes(), ids(&[1, 2, 4]).as_slice());
    }

    #[test]
    fn edgeless_graph_only_reaches_itself() {
        let g = NeighborGraph::from_edges(3, &[]);
        assert_eq!(find_path(&g, n(1), n(2)).unwrap(), None);
        assert!(find_path(&g, n(2), n(2)).unwrap().is_some());
    }

    #[test]
    fn paths_are_minimal_and_walk_real_edges() {
        for seed in 0..20 {
            let g = random_graph(seed, 15, 150.0);
            let dist = all_pairs(&g);
            for s in g.node_ids() {
                for d in g.node_ids() {
                    let expected = dist[s.slot().unwrap()][d.slot().unwrap()];
                    let found = find_path(&g, s, d).unwrap();
                    assert_eq!(found.as_ref().map(|p| p.hop_count()), expected, "seed {seed}: {s}→{d}");
                    if let Some(p) = found {
                        assert_eq!(p.source(), s);
                        assert_eq!(p.destination(), d);
                        assert!(p.hops().all(|(a, b)| g.are_neighbors(a, b)));
                        let mut seen = p.nodes().to_vec();
                        seen.sort();
                        seen.dedup();
                        assert_eq!(seen.len(), p.nodes().len(), "path revisits a node");
                    }
                }
            }
        }
    }

    #[test]
    fn rreq_trace_follows_expansion_order() {
        // 1 ── 2 ── 3 ── 5
        //  └── 4
        let g = NeighborGraph::from_edges(
            5,
            &[(n(1), n(2)), (n(1), n(4)), (n(2), n(3)), (n(3), n(5))],
        );
        let mut trace = Vec::new();
        let p = find_path_traced(&g, n(1), n(5), |r| trace.push((r.from.0, r.to.0, r.hop)))
            .unwrap()
            .unwrap();
        assert_eq!(p.nodes(), ids(&[1, 2, 3, 5]).as_slice());
        assert_eq!(trace, [(1, 2, 1), (1, 4, 1), (2, 3, 2), (3, 5, 3)]);
    }

    #[test]
    fn unreachable_flood_covers_the_component() {
        let g = line_graph();
        let mut reached = Vec::new();
        assert_eq!(find_path_traced(&g, n(1), n(4), |r| reached.push(r.to)).unwrap(), None);
        assert_eq!(reached, ids(&[2, 3]));
    }
}

// ── Proactive ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod proactive {
    use manet_core::{Point, ProtocolKind};
    use manet_topology::Topology;

    use super::helpers::{line_graph, n};
    use crate::{DEFAULT_HOLD_TIME, ProactiveRouting, RoutingProtocol};

    #[test]
    fn seeding_installs_direct_routes() {
        let g = line_graph();
        let p = ProactiveRouting::seeded(&g);
        for (node, table) in p.tables().iter() {
            assert_eq!(table.len(), 3);
            assert!(table.entry(node).is_none());
            for (dest, entry) in table.iter() {
                assert_eq!(entry.next_hop, dest);
                assert_eq!(entry.hold_time, DEFAULT_HOLD_TIME);
            }
        }
        assert!(!p.is_stale(&g));
    }

    #[test]
    fn one_round_of_propagation() {
        let g = line_graph();
        let mut p = ProactiveRouting::seeded(&g);
        assert_eq!(p.propagate(&g), 8);
        assert_eq!(p.rounds(), 1);

        let t1 = p.routing_table(n(1)).unwrap();
        assert_eq!(t1.next_hop(n(2)), Some(n(2)));
        assert_eq!(t1.next_hop(n(3)), Some(n(2)));
        assert_eq!(t1.next_hop(n(4)), Some(n(2)));

        // Node 2 hears from 1 then 3; the later neighbor overwrites.
        let t2 = p.routing_table(n(2)).unwrap();
        assert_eq!(t2.next_hop(n(1)), Some(n(3)));
        assert_eq!(t2.next_hop(n(3)), Some(n(1)));
        assert_eq!(t2.next_hop(n(4)), Some(n(3)));

        // Isolated node keeps its seeded routes.
        let t4 = p.routing_table(n(4)).unwrap();
        assert_eq!(t4.next_hop(n(1)), Some(n(1)));
    }

    #[test]
    fn tables_go_stale_when_nodes_move() {
        let mut topo = Topology::from_positions(
            [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(20.0, 0.0)],
            15.0,
        )
        .unwrap();
        let mut p = ProactiveRouting::seeded(topo.graph());
        p.propagate(topo.graph());
        let before = p.tables().clone();

        topo.set_position(n(3), Point::new(500.0, 500.0)).unwrap();
        topo.recompute_neighbors(15.0);
        assert!(p.is_stale(topo.graph()));
        assert_eq!(p.tables(), &before);

        p.propagate(topo.graph());
        assert!(!p.is_stale(topo.graph()));
    }

    #[test]
    fn report_carries_current_hop_counts() {
        let g = line_graph();
        let p = ProactiveRouting::seeded(&g);
        let rows = p.report(&g).unwrap();
        assert_eq!(rows.len(), 12);
        let hops = |a: u32, b: u32| {
            rows.iter().find(|r| r.node == n(a) && r.destination == n(b)).unwrap().hops
        };
        assert_eq!(hops(1, 2), Some(1));
        assert_eq!(hops(1, 3), Some(2));
        assert_eq!(hops(1, 4), None);
    }

    #[test]
    fn send_uses_search_without_requests() {
        let g = line_graph();
        let mut p = ProactiveRouting::seeded(&g);
        assert_eq!(p.kind(), ProtocolKind::Proactive);
        let d = p.send(&g, n(3), n(1)).unwrap();
        assert_eq!(d.hop_count(), Some(2));
        assert!(d.requests.is_empty());
        assert!(!p.send(&g, n(3), n(4)).unwrap().is_delivered());
    }
}

// ── Reactive ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod reactive {
    use manet_core::ProtocolKind;

    use super::helpers::{line_graph, n};
    use crate::{ReactiveRouting, RoutingError, RoutingProtocol};

    #[test]
    fn starts_with_empty_tables() {
        let p = ReactiveRouting::new(&line_graph());
        assert_eq!(p.kind(), ProtocolKind::Reactive);
        assert_eq!(p.tables().len(), 4);
        assert_eq!(p.tables().entry_count(), 0);
    }

    #[test]
    fn discovery_installs_forward_and_reverse_routes() {
        let g = line_graph();
        let mut p = ReactiveRouting::new(&g);
        let d = p.send(&g, n(1), n(3)).unwrap();
        assert!(d.is_delivered());
        assert_eq!(d.requests.len(), 2);
        assert_eq!(p.discoveries(), 1);

        assert_eq!(p.routing_table(n(1)).unwrap().next_hop(n(3)), Some(n(2)));
        assert_eq!(p.routing_table(n(2)).unwrap().next_hop(n(3)), Some(n(3)));
        assert_eq!(p.routing_table(n(3)).unwrap().next_hop(n(1)), Some(n(2)));
        assert_eq!(p.routing_table(n(2)).unwrap().next_hop(n(1)), Some(n(1)));
        assert!(p.routing_table(n(4)).unwrap().is_empty());
    }

    #[test]
    fn failed_discovery_installs_nothing() {
        let g = line_graph();
        let mut p = ReactiveRouting::new(&g);
        let d = p.send(&g, n(1), n(4)).unwrap();
        assert!(!d.is_delivered());
        assert_eq!(d.requests.len(), 2);
        assert_eq!(p.tables().entry_count(), 0);
    }

    #[test]
    fn unknown_node_is_reported() {
        let g = line_graph();
        let mut p = ReactiveRouting::new(&g);
        assert_eq!(p.send(&g, n(1), n(7)).unwrap_err(), RoutingError::UnknownNode(n(7)));
        assert_eq!(p.discoveries(), 0);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tables {
    use super::helpers::{line_graph, n};
    use crate::{ProactiveRouting, RoutingProtocol, RoutingTables};

    #[test]
    fn propagated_tables_survive_json() {
        let g = line_graph();
        let mut p = ProactiveRouting::seeded(&g);
        p.propagate(&g);

        let json = serde_json::to_string(p.tables()).unwrap();
        let back: RoutingTables = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, p.tables());
        assert_eq!(back.get(n(1)).unwrap().next_hop(n(3)), Some(n(2)));
    }
}
