//! Integration tests for manet-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{DeliveryRow, NodeSnapshotRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(node_id: u32, tick: u64) -> NodeSnapshotRow {
        NodeSnapshotRow { tick, node_id, x: 100.0 + node_id as f64, y: 50.5, degree: 2 }
    }

    fn headers(path: std::path::PathBuf) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created_with_headers() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(headers(dir.path().join("node_snapshots.csv")), ["tick", "node_id", "x", "y", "degree"]);
        assert_eq!(
            headers(dir.path().join("deliveries.csv")),
            ["tick", "source", "destination", "delivered", "hops", "path", "requests"]
        );
    }

    #[test]
    fn csv_snapshot_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(1, 4), snap_row(2, 4)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("node_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "4");       // tick
        assert_eq!(&rows[0][1], "1");       // node_id
        assert_eq!(&rows[0][2], "101.000"); // x
        assert_eq!(&rows[1][3], "50.500");  // y
        assert_eq!(&rows[1][4], "2");       // degree
    }

    #[test]
    fn csv_delivery_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_delivery(&DeliveryRow {
            tick: 0, source: 1, destination: 3, delivered: true,
            hops: Some(2), path: vec![1, 2, 3], requests: 2,
        })
        .unwrap();
        w.write_delivery(&DeliveryRow {
            tick: 1, source: 1, destination: 4, delivered: false,
            hops: None, path: Vec::new(), requests: 0,
        })
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("deliveries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(&rows[0][3], "1");
        assert_eq!(&rows[0][4], "2");
        assert_eq!(&rows[0][5], "1 2 3");
        assert_eq!(&rows[1][3], "0");
        assert_eq!(&rows[1][4], "");
        assert_eq!(&rows[1][5], "");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("does/not/exist")).is_err());
    }
}

#[cfg(test)]
mod observer_tests {
    use manet_core::{NodeId, Point, SimConfig};
    use manet_sim::SimBuilder;

    use crate::row::{DeliveryRow, NodeSnapshotRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult, SimOutputObserver};

    /// In-memory writer; fails every call once `fail` is set.
    #[derive(Default)]
    struct MemWriter {
        snapshots:  Vec<NodeSnapshotRow>,
        deliveries: Vec<DeliveryRow>,
        finished:   usize,
        fail:       bool,
    }

    impl MemWriter {
        fn check(&self) -> OutputResult<()> {
            if self.fail {
                Err(OutputError::Io(std::io::Error::other("disk full")))
            } else {
                Ok(())
            }
        }
    }

    impl OutputWriter for MemWriter {
        fn write_snapshots(&mut self, rows: &[NodeSnapshotRow]) -> OutputResult<()> {
            self.check()?;
            self.snapshots.extend_from_slice(rows);
            Ok(())
        }
        fn write_delivery(&mut self, row: &DeliveryRow) -> OutputResult<()> {
            self.check()?;
            self.deliveries.push(row.clone());
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            self.check()
        }
    }

    fn line_sim() -> manet_sim::Simulation<manet_routing::ReactiveRouting> {
        let config = SimConfig { node_count: 3, communication_range: 15.0, ..SimConfig::reactive() };
        SimBuilder::new(config)
            .positions(vec![
                Point::new(100.0, 100.0),
                Point::new(110.0, 100.0),
                Point::new(120.0, 100.0),
            ])
            .build_reactive()
            .unwrap()
    }

    #[test]
    fn records_ticks_and_deliveries() {
        let mut sim = line_sim();
        let mut obs = SimOutputObserver::new(MemWriter::default());
        obs.record_topology(sim.current_tick(), &sim.topology);

        sim.select(NodeId(1)).unwrap();
        sim.select(NodeId(3)).unwrap();
        sim.send(&mut obs).unwrap();

        sim.start_movement();
        sim.run_ticks(2, &mut obs);
        sim.finish(&mut obs);
        assert!(obs.take_error().is_none());

        let w = obs.into_writer();
        assert_eq!(w.snapshots.len(), 3 * 3);
        assert_eq!(w.snapshots[1].degree, 2);
        assert_eq!(w.deliveries.len(), 1);
        assert_eq!(w.deliveries[0].path, [1, 2, 3]);
        assert_eq!(w.deliveries[0].requests, 2);
        assert_eq!(w.finished, 1);
    }

    #[test]
    fn first_error_is_kept() {
        let mut sim = line_sim();
        let mut obs = SimOutputObserver::new(MemWriter { fail: true, ..MemWriter::default() });
        sim.start_movement();
        sim.run_ticks(3, &mut obs);
        sim.finish(&mut obs);
        assert!(matches!(obs.take_error(), Some(OutputError::Io(_))));
        assert!(obs.take_error().is_none());
    }
}
