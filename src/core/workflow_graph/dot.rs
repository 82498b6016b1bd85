use crate::core::workflow_graph::schema::Dependencies;
use petgraph::dot::{Config, Dot};
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Node weight carrying the task name.
pub struct DepNode {
    pub name: String,
}

impl fmt::Display for DepNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Unlabeled dependency edge.
pub struct DepEdge;

impl fmt::Display for DepEdge {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

/// Materialize a dependency index into a directed graph. For each
/// `(name, deps)` entry an edge `dep -> name` is added per dependency,
/// deduplicated. Dependency names with no matching task entry still become
/// nodes of their own, they just contribute no outgoing edges themselves.
/// Cycles are not rejected here; topological validity is the orchestrator's
/// concern at execution time.
pub fn dependency_graph(
    index: &[(String, Option<Dependencies>)],
) -> (DiGraph<DepNode, DepEdge>, HashMap<String, NodeIndex>) {
    let mut graph = DiGraph::new();
    let mut node_map: HashMap<String, NodeIndex> = HashMap::new();
    let mut seen_edges: HashSet<(NodeIndex, NodeIndex)> = HashSet::new();

    fn node_for(
        graph: &mut DiGraph<DepNode, DepEdge>,
        node_map: &mut HashMap<String, NodeIndex>,
        name: &str,
    ) -> NodeIndex {
        *node_map.entry(name.to_string()).or_insert_with(|| {
            graph.add_node(DepNode {
                name: name.to_string(),
            })
        })
    }

    for (name, deps) in index {
        let to = node_for(&mut graph, &mut node_map, name);
        let Some(deps) = deps else { continue };
        for dep in deps.names() {
            let from = node_for(&mut graph, &mut node_map, dep);
            if seen_edges.insert((from, to)) {
                graph.add_edge(from, to, DepEdge);
            }
        }
    }

    (graph, node_map)
}

/// Render the dependency graph as a Graphviz DOT string using petgraph.
pub fn dependency_graph_to_dot(index: &[(String, Option<Dependencies>)]) -> String {
    let (graph, _) = dependency_graph(index);
    format!("{}", Dot::with_config(&graph, &[Config::EdgeNoLabel]))
}
