//! Dependency-graph export for sampler graphs.
//!
//! [`get_secondary_properties`](crate::sampler::AuxiliarySampler::get_secondary_properties)
//! optionally registers the sampler graph's nodes and edges here, so an
//! external tool can render the wiring without this crate depending on a
//! visualization library. [`DependencyGraph::to_dot`] emits Graphviz DOT.

/// A node in the exported sampler graph.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphNode {
    /// The sampler (or observed-quantity) name.
    pub name: String,
    /// Whether this node represents an observed quantity.
    pub observed: bool,
}

/// A directed edge collection describing sampler dependencies.
///
/// Nodes are deduplicated by name; edges are kept in insertion order.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DependencyGraph {
    nodes: Vec<GraphNode>,
    edges: Vec<(String, String)>,
}

impl DependencyGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node, ignoring the call if a node of that name exists.
    pub fn add_node(&mut self, name: &str, observed: bool) {
        if !self.nodes.iter().any(|n| n.name == name) {
            self.nodes.push(GraphNode {
                name: name.to_string(),
                observed,
            });
        }
    }

    /// Adds a directed edge, creating missing endpoint nodes on the way.
    pub fn add_edge(&mut self, from: &str, to: &str) {
        self.add_node(from, false);
        self.add_node(to, false);
        let edge = (from.to_string(), to.to_string());
        if !self.edges.contains(&edge) {
            self.edges.push(edge);
        }
    }

    /// Returns the registered nodes.
    #[must_use]
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// Returns the registered edges as `(from, to)` pairs.
    #[must_use]
    pub fn edges(&self) -> &[(String, String)] {
        &self.edges
    }

    /// Returns `true` if an edge `from -> to` is registered.
    #[must_use]
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.edges.iter().any(|(f, t)| f == from && t == to)
    }

    /// Renders the graph as Graphviz DOT.
    ///
    /// Observed-quantity nodes are drawn as boxes, latent quantities as
    /// ellipses. The output is stable: nodes and edges appear in the order
    /// they were registered.
    #[must_use]
    pub fn to_dot(&self) -> String {
        let mut out = String::from("digraph samplers {\n");
        for node in &self.nodes {
            let shape = if node.observed { "box" } else { "ellipse" };
            out.push_str(&format!("    \"{}\" [shape={shape}];\n", node.name));
        }
        for (from, to) in &self.edges {
            out.push_str(&format!("    \"{from}\" -> \"{to}\";\n"));
        }
        out.push_str("}\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nodes_are_deduplicated() {
        let mut g = DependencyGraph::new();
        g.add_node("demo", false);
        g.add_node("demo", true);
        assert_eq!(g.nodes().len(), 1);
        assert!(!g.nodes()[0].observed);
    }

    #[test]
    fn edges_create_endpoints() {
        let mut g = DependencyGraph::new();
        g.add_edge("demo", "demo2");
        assert_eq!(g.nodes().len(), 2);
        assert!(g.has_edge("demo", "demo2"));
        assert!(!g.has_edge("demo2", "demo"));
    }

    #[test]
    fn dot_output_contains_nodes_and_edges() {
        let mut g = DependencyGraph::new();
        g.add_node("demo_obs", true);
        g.add_edge("demo", "demo2");
        let dot = g.to_dot();
        assert!(dot.starts_with("digraph samplers {"));
        assert!(dot.contains("\"demo_obs\" [shape=box];"));
        assert!(dot.contains("\"demo\" -> \"demo2\";"));
    }
}
