//! Routing protocol variant selector shared by the routing and sim crates.

/// Which presentational routing variant a simulation runs.
///
/// Both variants find paths with the same breadth-first search; they differ
/// only in the routing-table bookkeeping that accompanies it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ProtocolKind {
    /// Tables pre-seeded for every destination and exchanged on request.
    #[default]
    Proactive,
    /// Routes discovered on demand with a logged route-request flood.
    Reactive,
}

impl ProtocolKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ProtocolKind::Proactive => "proactive",
            ProtocolKind::Reactive  => "reactive",
        }
    }
}

impl std::fmt::Display for ProtocolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
