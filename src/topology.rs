// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! A graph representation of the galvanically separate subnets of a grid
//! and the transformers connecting them.

use std::collections::{BTreeSet, HashMap};

use petgraph::graph::{NodeIndex, UnGraph};
use uuid::Uuid;

use crate::container::{GraphicElements, RawGridElements, SubGridContainer, SystemParticipants};
use crate::model::{GraphicElement, RawGridElement, SystemParticipant, Transformer2W, Transformer3W};
use crate::Error;

/// A transformer coupling two subnets, stored on the edges of a
/// [`SubGridTopologyGraph`].
#[derive(Clone, Debug, PartialEq)]
pub enum TransformerEdge {
    TwoWinding(Transformer2W),
    ThreeWinding(Transformer3W),
}

impl TransformerEdge {
    /// Returns the uuid of the wrapped transformer.
    pub fn uuid(&self) -> Uuid {
        match self {
            TransformerEdge::TwoWinding(transformer) => transformer.uuid,
            TransformerEdge::ThreeWinding(transformer) => transformer.uuid,
        }
    }
}

/// `SubGridContainer`s stored in an `UnGraph` instance can be addressed with
/// `NodeIndex`es.
///
/// `SubnetIndexMap` stores the corresponding `NodeIndex` for any subnet
/// number, so that sub-grids can be retrieved from their subnet numbers.
type SubnetIndexMap = HashMap<i32, NodeIndex>;

/// The dependency graph between the galvanically separate subnets of a grid.
///
/// Every vertex holds the per-subnet container view of one subnet; every
/// edge is a transformer whose ports belong to different subnets.  Isolated
/// vertices are legal, since some grids are legitimately unconnected at the
/// electrical level being modeled.
#[derive(Clone, Debug)]
pub struct SubGridTopologyGraph {
    graph: UnGraph<SubGridContainer, TransformerEdge>,
    subnet_indices: SubnetIndexMap,
}

impl SubGridTopologyGraph {
    /// Derives the topology graph for the given grid.
    ///
    /// Returns an error if the grid has no nodes, if a transformer port
    /// carries a subnet number no node carries, or if one of the per-subnet
    /// views cannot be assembled.
    pub fn try_new(
        grid_name: &str,
        raw_grid: &RawGridElements,
        participants: &SystemParticipants,
        graphics: &GraphicElements,
    ) -> Result<Self, Error> {
        let subnets: BTreeSet<i32> = raw_grid.nodes().iter().map(|n| n.subnet).collect();
        if subnets.is_empty() {
            return Err(Error::invalid_grid(
                "Cannot derive a sub-grid topology for a grid without nodes.",
            ));
        }

        let mut graph = UnGraph::new_undirected();
        let mut subnet_indices = SubnetIndexMap::new();
        for &subnet in &subnets {
            let sub_grid = filter_for_subnet(grid_name, subnet, raw_grid, participants, graphics)?;
            subnet_indices.insert(subnet, graph.add_node(sub_grid));
        }

        let vertex_of = |subnet: i32, transformer_uuid: Uuid| {
            subnet_indices.get(&subnet).copied().ok_or_else(|| {
                Error::invalid_grid(format!(
                    "Transformer {transformer_uuid} references subnet {subnet}, which no node \
                     carries."
                ))
            })
        };

        for transformer in raw_grid.transformers_2w() {
            let (subnet_a, subnet_b) = (transformer.node_a.subnet, transformer.node_b.subnet);
            if subnet_a != subnet_b {
                graph.add_edge(
                    vertex_of(subnet_a, transformer.uuid)?,
                    vertex_of(subnet_b, transformer.uuid)?,
                    TransformerEdge::TwoWinding(transformer.clone()),
                );
            }
        }
        for transformer in raw_grid.transformers_3w() {
            let ports = [
                transformer.node_a.subnet,
                transformer.node_b.subnet,
                transformer.node_c.subnet,
            ];
            for (subnet_a, subnet_b) in [(ports[0], ports[1]), (ports[0], ports[2]), (ports[1], ports[2])]
            {
                if subnet_a != subnet_b {
                    graph.add_edge(
                        vertex_of(subnet_a, transformer.uuid)?,
                        vertex_of(subnet_b, transformer.uuid)?,
                        TransformerEdge::ThreeWinding(transformer.clone()),
                    );
                }
            }
        }

        Ok(Self {
            graph,
            subnet_indices,
        })
    }

    /// Returns the number of subnets in the graph.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the subnet numbers of the graph, in ascending order.
    pub fn subnets(&self) -> Vec<i32> {
        let mut subnets: Vec<i32> = self.subnet_indices.keys().copied().collect();
        subnets.sort_unstable();
        subnets
    }

    /// Returns the container view of the given subnet, if it exists.
    pub fn sub_grid(&self, subnet: i32) -> Result<&SubGridContainer, Error> {
        self.subnet_indices
            .get(&subnet)
            .map(|&index| &self.graph[index])
            .ok_or_else(|| {
                Error::entity_not_found(format!("Sub-grid for subnet {subnet} not found."))
            })
    }

    /// Returns an iterator over the container views in ascending subnet
    /// order.
    pub fn sub_grids(&self) -> SubGrids<'_> {
        let indices: Vec<NodeIndex> = self
            .subnets()
            .into_iter()
            .map(|subnet| self.subnet_indices[&subnet])
            .collect();
        SubGrids {
            graph: &self.graph,
            iter: indices.into_iter(),
        }
    }

    /// Returns an iterator over the transformers coupling different
    /// subnets.  A three winding transformer spanning three subnets shows
    /// up once per coupled subnet pair.
    pub fn interconnections(&self) -> Interconnections<'_> {
        Interconnections {
            iter: self.graph.raw_edges().iter(),
        }
    }
}

/// An iterator over the sub-grids of a `SubGridTopologyGraph`.
pub struct SubGrids<'a> {
    graph: &'a UnGraph<SubGridContainer, TransformerEdge>,
    iter: std::vec::IntoIter<NodeIndex>,
}

impl<'a> Iterator for SubGrids<'a> {
    type Item = &'a SubGridContainer;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|index| &self.graph[index])
    }
}

/// An iterator over the inter-subnet transformers of a
/// `SubGridTopologyGraph`.
pub struct Interconnections<'a> {
    iter: std::slice::Iter<'a, petgraph::graph::Edge<TransformerEdge>>,
}

impl<'a> Iterator for Interconnections<'a> {
    type Item = &'a TransformerEdge;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|edge| &edge.weight)
    }
}

/// Builds the container view of one subnet: the subnet's own nodes and
/// intra-subnet connectors, the boundary transformers touching it together
/// with all of their port nodes, and the participants and graphics attached
/// to the subnet's nodes.
///
/// The internal nodes of three winding transformers are deliberately left
/// out of the node set; the slack promotion transform adds them when a
/// sub-grid is prepared for power-flow calculation.
fn filter_for_subnet(
    grid_name: &str,
    subnet: i32,
    raw_grid: &RawGridElements,
    participants: &SystemParticipants,
    graphics: &GraphicElements,
) -> Result<SubGridContainer, Error> {
    let mut elements: Vec<RawGridElement> = vec![];
    let mut line_uuids: BTreeSet<Uuid> = BTreeSet::new();

    for node in raw_grid.nodes() {
        if node.subnet == subnet {
            elements.push(RawGridElement::Node(node.clone()));
        }
    }
    for line in raw_grid.lines() {
        if line.node_a.subnet == subnet && line.node_b.subnet == subnet {
            line_uuids.insert(line.uuid);
            elements.push(RawGridElement::Line(line.clone()));
        }
    }
    for transformer in raw_grid.transformers_2w() {
        if transformer.node_a.subnet == subnet || transformer.node_b.subnet == subnet {
            elements.push(RawGridElement::Node(transformer.node_a.clone()));
            elements.push(RawGridElement::Node(transformer.node_b.clone()));
            elements.push(RawGridElement::Transformer2W(transformer.clone()));
        }
    }
    for transformer in raw_grid.transformers_3w() {
        let ports = [
            &transformer.node_a,
            &transformer.node_b,
            &transformer.node_c,
        ];
        if ports.iter().any(|port| port.subnet == subnet) {
            for port in ports {
                elements.push(RawGridElement::Node(port.clone()));
            }
            elements.push(RawGridElement::Transformer3W(transformer.clone()));
        }
    }
    for switch in raw_grid.switches() {
        if switch.node_a.subnet == subnet && switch.node_b.subnet == subnet {
            elements.push(RawGridElement::Switch(switch.clone()));
        }
    }
    for unit in raw_grid.measurement_units() {
        if unit.node.subnet == subnet {
            elements.push(RawGridElement::MeasurementUnit(unit.clone()));
        }
    }

    let filtered_participants: Vec<SystemParticipant> = participants
        .all_elements()
        .into_iter()
        .filter(|participant| participant.node().subnet == subnet)
        .collect();

    let filtered_graphics: Vec<GraphicElement> = graphics
        .all_elements()
        .into_iter()
        .filter(|graphic| match graphic {
            GraphicElement::Node(graphic) => graphic.node.subnet == subnet,
            GraphicElement::Line(graphic) => line_uuids.contains(&graphic.line.uuid),
        })
        .collect();

    SubGridContainer::try_new(
        grid_name,
        subnet,
        RawGridElements::from_elements(elements)?,
        SystemParticipants::from_participants(filtered_participants)?,
        GraphicElements::from_graphics(filtered_graphics)?,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::test_utils::{
        lv, mv, test_node, three_winding_grid, two_subnet_grid,
    };
    use crate::container::GridContainer;
    use crate::model::{Node, RawGridElement};

    fn referenced_nodes(raw_grid: &RawGridElements) -> Vec<Node> {
        let mut nodes = vec![];
        for line in raw_grid.lines() {
            nodes.extend([line.node_a.clone(), line.node_b.clone()]);
        }
        for transformer in raw_grid.transformers_2w() {
            nodes.extend([transformer.node_a.clone(), transformer.node_b.clone()]);
        }
        for transformer in raw_grid.transformers_3w() {
            nodes.extend([
                transformer.node_a.clone(),
                transformer.node_b.clone(),
                transformer.node_c.clone(),
            ]);
        }
        for switch in raw_grid.switches() {
            nodes.extend([switch.node_a.clone(), switch.node_b.clone()]);
        }
        for unit in raw_grid.measurement_units() {
            nodes.push(unit.node.clone());
        }
        nodes
    }

    #[test]
    fn test_vertex_count_matches_subnets() -> Result<(), Error> {
        let (raw, participants, graphics) = two_subnet_grid();
        let topology = SubGridTopologyGraph::try_new("test_grid", &raw, &participants, &graphics)?;

        assert_eq!(topology.vertex_count(), 2);
        assert_eq!(topology.subnets(), vec![1, 2]);
        assert_eq!(topology.interconnections().count(), 1);
        Ok(())
    }

    #[test]
    fn test_three_winding_edges() -> Result<(), Error> {
        let (raw, participants, graphics) = three_winding_grid();
        let topology = SubGridTopologyGraph::try_new("test_grid", &raw, &participants, &graphics)?;

        assert_eq!(topology.vertex_count(), 3);
        // One edge per port pair with differing subnet numbers.
        assert_eq!(topology.interconnections().count(), 3);
        assert!(topology
            .interconnections()
            .all(|edge| matches!(edge, TransformerEdge::ThreeWinding(_))));
        Ok(())
    }

    #[test]
    fn test_sub_grid_views() -> Result<(), Error> {
        let (raw, participants, graphics) = two_subnet_grid();
        let topology = SubGridTopologyGraph::try_new("test_grid", &raw, &participants, &graphics)?;

        let mv_grid = topology.sub_grid(1)?;
        assert_eq!(mv_grid.subnet(), 1);
        assert_eq!(mv_grid.predominant_voltage_level(), &mv());
        // Both own nodes plus the boundary node on the LV side of the
        // transformer.
        assert_eq!(mv_grid.raw_grid().nodes().len(), 3);
        assert_eq!(mv_grid.raw_grid().lines().len(), 1);
        assert_eq!(mv_grid.raw_grid().transformers_2w().len(), 1);
        assert_eq!(mv_grid.participants().loads().len(), 1);
        assert!(mv_grid.participants().fixed_feed_ins().is_empty());
        assert_eq!(mv_grid.graphics().node_graphics().len(), 1);
        assert_eq!(mv_grid.graphics().line_graphics().len(), 1);

        let lv_grid = topology.sub_grid(2)?;
        assert_eq!(lv_grid.predominant_voltage_level(), &lv());
        assert_eq!(lv_grid.raw_grid().nodes().len(), 3);
        assert_eq!(lv_grid.participants().fixed_feed_ins().len(), 1);
        assert!(lv_grid.graphics().node_graphics().is_empty());
        assert!(lv_grid.graphics().line_graphics().is_empty());

        assert_eq!(
            topology.sub_grid(9),
            Err(Error::entity_not_found("Sub-grid for subnet 9 not found."))
        );
        Ok(())
    }

    #[test]
    fn test_referential_closure_of_views() -> Result<(), Error> {
        let (raw, participants, graphics) = three_winding_grid();
        let topology = SubGridTopologyGraph::try_new("test_grid", &raw, &participants, &graphics)?;

        for sub_grid in topology.sub_grids() {
            for node in referenced_nodes(sub_grid.raw_grid()) {
                assert_eq!(sub_grid.raw_grid().node(node.uuid), Ok(&node));
            }
            for participant in sub_grid.participants().all_elements() {
                assert!(sub_grid.raw_grid().node(participant.node().uuid).is_ok());
            }
        }
        Ok(())
    }

    #[test]
    fn test_unconnected_subnets_are_accepted() -> Result<(), Error> {
        // Two subnets without any coupling transformer form a graph with
        // two isolated vertices.
        let raw = RawGridElements::from_elements([
            RawGridElement::Node(test_node("a", mv(), 1)),
            RawGridElement::Node(test_node("b", lv(), 2)),
        ])?;
        let topology = SubGridTopologyGraph::try_new(
            "test_grid",
            &raw,
            &SystemParticipants::from_participants([])?,
            &GraphicElements::from_graphics([])?,
        )?;

        assert_eq!(topology.vertex_count(), 2);
        assert_eq!(topology.interconnections().count(), 0);
        Ok(())
    }

    #[test]
    fn test_empty_grid_is_rejected() -> Result<(), Error> {
        let result = SubGridTopologyGraph::try_new(
            "test_grid",
            &RawGridElements::from_elements([])?,
            &SystemParticipants::from_participants([])?,
            &GraphicElements::from_graphics([])?,
        );

        assert_eq!(
            result.err(),
            Some(Error::invalid_grid(
                "Cannot derive a sub-grid topology for a grid without nodes."
            ))
        );
        Ok(())
    }
}
