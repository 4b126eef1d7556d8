//! walkthrough — headless tour of both MANET routing variants.
//!
//! Builds the proactive and the reactive simulation from their default
//! configs (or a single one from a JSON config file given as the first
//! argument), sends a message across the network, lets the nodes move for a
//! few ticks, sends again and prints the routing tables.  Snapshots and
//! deliveries are written as CSV under `output/walkthrough/<protocol>/`.
//!
//! Status lines go through `log`; set `RUST_LOG=debug` to also see graph
//! recomputations and every RREQ forwarding step.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use manet_core::{NodeId, ProtocolKind, SimConfig, Tick};
use manet_output::{CsvWriter, SimOutputObserver};
use manet_routing::{Delivery, RouteRequest, RoutingProtocol};
use manet_sim::{LogObserver, SimBuilder, SimObserver, Simulation};
use manet_topology::Topology;

// ── Constants ─────────────────────────────────────────────────────────────────

const MOVEMENT_TICKS: u64 = 5;
const OUTPUT_ROOT:    &str = "output/walkthrough";

// ── Observer fan-out ──────────────────────────────────────────────────────────

/// Forwards every callback to the log and to the CSV recorder.
struct Tee {
    log: LogObserver,
    csv: SimOutputObserver<CsvWriter>,
}

impl SimObserver for Tee {
    fn on_tick_start(&mut self, tick: Tick) {
        self.log.on_tick_start(tick);
        self.csv.on_tick_start(tick);
    }

    fn on_tick_end(&mut self, tick: Tick, edges: usize) {
        self.log.on_tick_end(tick, edges);
        self.csv.on_tick_end(tick, edges);
    }

    fn on_snapshot(&mut self, tick: Tick, topology: &Topology) {
        self.log.on_snapshot(tick, topology);
        self.csv.on_snapshot(tick, topology);
    }

    fn on_route_request(&mut self, tick: Tick, request: &RouteRequest) {
        self.log.on_route_request(tick, request);
        self.csv.on_route_request(tick, request);
    }

    fn on_delivery(&mut self, tick: Tick, delivery: &Delivery) {
        self.log.on_delivery(tick, delivery);
        self.csv.on_delivery(tick, delivery);
    }

    fn on_tables_propagated(&mut self, tick: Tick, writes: usize) {
        self.log.on_tables_propagated(tick, writes);
        self.csv.on_tables_propagated(tick, writes);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.log.on_sim_end(final_tick);
        self.csv.on_sim_end(final_tick);
    }
}

impl Tee {
    fn open(kind: ProtocolKind) -> Result<Self> {
        let dir = PathBuf::from(OUTPUT_ROOT).join(kind.as_str());
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
        let writer = CsvWriter::new(&dir)?;
        Ok(Self { log: LogObserver, csv: SimOutputObserver::new(writer) })
    }

    fn close(mut self) -> Result<()> {
        if let Some(e) = self.csv.take_error() {
            return Err(e).context("writing CSV output");
        }
        Ok(())
    }
}

// ── Shared steps ──────────────────────────────────────────────────────────────

fn load_config(path: &Path) -> Result<SimConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: SimConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

fn print_layout<P: RoutingProtocol>(sim: &Simulation<P>) {
    println!(
        "{} nodes, {} links (range {})",
        sim.topology.len(),
        sim.topology.graph().edge_count(),
        sim.topology.range()
    );
    for node in sim.topology.nodes() {
        let neighbors: Vec<String> = sim
            .topology
            .neighbors_of(node.id)
            .unwrap_or_default()
            .iter()
            .map(|n| n.0.to_string())
            .collect();
        println!("  {:<8} {:<22} [{}]", node.id, node.pos.to_string(), neighbors.join(", "));
    }
}

/// The most recently created node, or `None` when nothing was placed.
fn last_node<P: RoutingProtocol>(sim: &Simulation<P>) -> Option<NodeId> {
    sim.topology.len().checked_sub(1).map(NodeId::from_slot)
}

/// Select `source` then `destination` and send.
fn send_between<P: RoutingProtocol>(
    sim:         &mut Simulation<P>,
    obs:         &mut Tee,
    source:      NodeId,
    destination: NodeId,
) -> Result<()> {
    // Selection is empty or complete here, so this pick starts a new pair.
    sim.select(source)?;
    sim.select(destination)?;
    match sim.send(obs)? {
        Some(path) => println!("{source} → {destination}: {path} ({} hops)", path.hop_count()),
        None => println!("{source} → {destination}: unreachable"),
    }
    Ok(())
}

fn print_table<P: RoutingProtocol>(sim: &Simulation<P>, node: NodeId) {
    let Some(table) = sim.protocol.routing_table(node) else {
        return;
    };
    println!("Routing table of {node} ({} entries)", table.len());
    println!("  {:<12} {:<12} {:<5}", "Destination", "Next hop", "Hold");
    for (dest, entry) in table.iter() {
        println!("  {:<12} {:<12} {:<5}", dest.to_string(), entry.next_hop.to_string(), entry.hold_time);
    }
}

// ── Variants ──────────────────────────────────────────────────────────────────

fn run_proactive(config: SimConfig) -> Result<()> {
    println!("=== proactive routing ===");
    let mut sim = SimBuilder::new(config).build_proactive()?;
    let mut obs = Tee::open(ProtocolKind::Proactive)?;
    obs.csv.record_topology(sim.current_tick(), &sim.topology);
    print_layout(&sim);

    sim.propagate_tables(&mut obs);
    let Some(last) = last_node(&sim) else {
        println!("no nodes placed, nothing to send");
        sim.finish(&mut obs);
        return obs.close();
    };
    send_between(&mut sim, &mut obs, NodeId(1), last)?;

    sim.start_movement();
    sim.run_ticks(MOVEMENT_TICKS, &mut obs);
    sim.stop_movement();
    println!(
        "after {MOVEMENT_TICKS} movement ticks and {} table round(s) the tables are stale: {}",
        sim.protocol.rounds(),
        sim.tables_stale()
    );
    send_between(&mut sim, &mut obs, NodeId(1), last)?;

    println!();
    println!("{:<8} {:<8} {:<8} {:<5} {:<5}", "Node", "Dest", "Next", "Hold", "Hops");
    for row in sim.table_report()?.iter().filter(|r| r.node == NodeId(1)) {
        let hops = row.hops.map_or_else(|| "-".to_owned(), |h| h.to_string());
        println!(
            "{:<8} {:<8} {:<8} {:<5} {:<5}",
            row.node.0, row.destination.0, row.next_hop.0, row.hold_time, hops
        );
    }

    sim.finish(&mut obs);
    obs.close()
}

fn run_reactive(config: SimConfig) -> Result<()> {
    println!("=== reactive routing ===");
    let mut sim = SimBuilder::new(config).build_reactive()?;
    let mut obs = Tee::open(ProtocolKind::Reactive)?;
    obs.csv.record_topology(sim.current_tick(), &sim.topology);
    print_layout(&sim);

    let Some(last) = last_node(&sim) else {
        println!("no nodes placed, nothing to send");
        sim.finish(&mut obs);
        return obs.close();
    };
    send_between(&mut sim, &mut obs, NodeId(1), last)?;
    print_table(&sim, NodeId(1));

    sim.start_movement();
    sim.run_ticks(MOVEMENT_TICKS, &mut obs);
    sim.stop_movement();
    send_between(&mut sim, &mut obs, last, NodeId(1))?;
    print_table(&sim, last);
    println!("{} route discoveries", sim.protocol.discoveries());

    sim.finish(&mut obs);
    obs.close()
}

#[cfg(test)]
mod tests;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match std::env::args_os().nth(1) {
        Some(path) => {
            let config = load_config(Path::new(&path))?;
            match config.protocol {
                ProtocolKind::Proactive => run_proactive(config)?,
                ProtocolKind::Reactive  => run_reactive(config)?,
            }
        }
        None => {
            run_proactive(SimConfig::proactive())?;
            println!();
            run_reactive(SimConfig::reactive())?;
        }
    }

    log::info!("output written under {OUTPUT_ROOT}/");
    Ok(())
}
