// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains builders for the fixture grids and type catalogs
//! that are shared by the test modules across the crate.

use uuid::Uuid;

use crate::container::{GraphicElements, RawGridElements, SystemParticipants};
use crate::model::{
    FixedFeedIn, GraphicElement, Line, LineGraphic, LineType, Load, Node, NodeGraphic,
    RawGridElement, Storage, Switch, SystemParticipant, Transformer2W, Transformer2WType,
    Transformer3W, Transformer3WType,
};
use crate::quantity::{Amperes, KilowattHours, Kilovoltamperes, Kilovolts, PerUnit};
use crate::update::TypeCatalog;
use crate::voltage_level::VoltageLevel;

pub(crate) fn lv() -> VoltageLevel {
    VoltageLevel::new("LV", Kilovolts::new(0.4))
}

pub(crate) fn lv2() -> VoltageLevel {
    VoltageLevel::new("LV2", Kilovolts::new(0.69))
}

pub(crate) fn mv() -> VoltageLevel {
    VoltageLevel::new("MV", Kilovolts::new(20.0))
}

pub(crate) fn hv() -> VoltageLevel {
    VoltageLevel::new("HV", Kilovolts::new(110.0))
}

pub(crate) fn test_node(id: &str, voltage_level: VoltageLevel, subnet: i32) -> Node {
    Node::new(
        Uuid::new_v4(),
        id,
        PerUnit::new(1.0),
        false,
        None,
        voltage_level,
        subnet,
    )
}

/// The line types referenced by the fixture grids, rated for the spec'd
/// update scenarios: 100 A and 150 A classes per voltage level.
pub(crate) fn line_types() -> Vec<LineType> {
    vec![
        LineType::new(Uuid::new_v4(), "lv_100", Kilovolts::new(0.4), Amperes::new(100.0)),
        LineType::new(Uuid::new_v4(), "lv_150", Kilovolts::new(0.4), Amperes::new(150.0)),
        LineType::new(Uuid::new_v4(), "lv2_100", Kilovolts::new(0.69), Amperes::new(100.0)),
        LineType::new(Uuid::new_v4(), "lv2_150", Kilovolts::new(0.69), Amperes::new(150.0)),
        LineType::new(Uuid::new_v4(), "mv_100", Kilovolts::new(20.0), Amperes::new(100.0)),
        LineType::new(Uuid::new_v4(), "mv_150", Kilovolts::new(20.0), Amperes::new(150.0)),
    ]
}

pub(crate) fn transformer_2w_types() -> Vec<Transformer2WType> {
    vec![
        Transformer2WType::new(
            Uuid::new_v4(),
            "mv_lv_630",
            Kilovolts::new(20.0),
            Kilovolts::new(0.4),
            Kilovoltamperes::new(630.0),
        ),
        Transformer2WType::new(
            Uuid::new_v4(),
            "mv_lv2_630",
            Kilovolts::new(20.0),
            Kilovolts::new(0.69),
            Kilovoltamperes::new(630.0),
        ),
        Transformer2WType::new(
            Uuid::new_v4(),
            "hv_mv_40000",
            Kilovolts::new(110.0),
            Kilovolts::new(20.0),
            Kilovoltamperes::new(40_000.0),
        ),
    ]
}

pub(crate) fn transformer_3w_types() -> Vec<Transformer3WType> {
    vec![Transformer3WType::new(
        Uuid::new_v4(),
        "hv_mv_lv_40000",
        Kilovolts::new(110.0),
        Kilovolts::new(20.0),
        Kilovolts::new(0.4),
        Kilovoltamperes::new(40_000.0),
        Kilovoltamperes::new(30_000.0),
        Kilovoltamperes::new(10_000.0),
    )]
}

pub(crate) fn test_catalog() -> TypeCatalog {
    TypeCatalog {
        line_types: line_types(),
        transformer_2w_types: transformer_2w_types(),
        transformer_3w_types: transformer_3w_types(),
    }
}

fn line_type_for(voltage_level: &VoltageLevel) -> LineType {
    line_types()
        .into_iter()
        .find(|t| t.rated_voltage == voltage_level.nominal_voltage && t.id.ends_with("150"))
        .unwrap_or_else(|| {
            LineType::new(
                Uuid::new_v4(),
                format!("{}_150", voltage_level.id.to_lowercase()),
                voltage_level.nominal_voltage,
                Amperes::new(150.0),
            )
        })
}

pub(crate) fn line_between(node_a: &Node, node_b: &Node) -> Line {
    Line::new(
        Uuid::new_v4(),
        format!("line_{}_{}", node_a.id, node_b.id),
        node_a.clone(),
        node_b.clone(),
        line_type_for(&node_a.voltage_level),
        0.5,
        1,
    )
}

/// A two winding transformer between a 20 kV and a 0.4 kV node.
pub(crate) fn transformer_between(node_hv: &Node, node_lv: &Node) -> Transformer2W {
    Transformer2W::new(
        Uuid::new_v4(),
        format!("transformer_{}_{}", node_hv.id, node_lv.id),
        node_hv.clone(),
        node_lv.clone(),
        transformer_2w_types()
            .into_iter()
            .find(|t| t.id == "mv_lv_630")
            .unwrap(),
        0,
        1,
    )
}

pub(crate) fn test_switch(node_a: &Node, node_b: &Node) -> Switch {
    Switch::new(
        Uuid::new_v4(),
        format!("switch_{}_{}", node_a.id, node_b.id),
        node_a.clone(),
        node_b.clone(),
        true,
    )
}

pub(crate) fn test_load(node: &Node) -> Load {
    Load::new(
        Uuid::new_v4(),
        format!("load_{}", node.id),
        node.clone(),
        Kilovoltamperes::new(10.0),
        0.95,
    )
}

pub(crate) fn test_feed_in(node: &Node) -> FixedFeedIn {
    FixedFeedIn::new(
        Uuid::new_v4(),
        format!("feed_in_{}", node.id),
        node.clone(),
        Kilovoltamperes::new(25.0),
        1.0,
    )
}

pub(crate) fn test_storage(node: &Node) -> Storage {
    Storage::new(
        Uuid::new_v4(),
        format!("storage_{}", node.id),
        node.clone(),
        Kilovoltamperes::new(17.0),
        KilowattHours::new(34.0),
    )
}

pub(crate) fn node_graphic(node: &Node) -> NodeGraphic {
    NodeGraphic::new(Uuid::new_v4(), "main", None, node.clone())
}

pub(crate) fn line_graphic(line: &Line) -> LineGraphic {
    LineGraphic::new(Uuid::new_v4(), "main", vec![], line.clone())
}

/// A joint grid with two subnets: an MV subnet 1 (nodes `a`, `b`, one line)
/// and an LV subnet 2 (nodes `c`, `d`, one line), coupled by one two winding
/// transformer between `b` and `c`.  A load sits at `a`, a feed-in at `d`;
/// `a` and the MV line carry graphic annotations.
pub(crate) fn two_subnet_grid() -> (RawGridElements, SystemParticipants, GraphicElements) {
    let a = test_node("a", mv(), 1);
    let b = test_node("b", mv(), 1);
    let c = test_node("c", lv(), 2);
    let d = test_node("d", lv(), 2);

    let line_ab = line_between(&a, &b);
    let line_cd = line_between(&c, &d);
    let transformer = transformer_between(&b, &c);

    let raw = RawGridElements::from_elements([
        RawGridElement::Node(a.clone()),
        RawGridElement::Node(b),
        RawGridElement::Node(c),
        RawGridElement::Node(d.clone()),
        RawGridElement::Line(line_ab.clone()),
        RawGridElement::Line(line_cd),
        RawGridElement::Transformer2W(transformer),
    ])
    .unwrap();

    let participants = SystemParticipants::from_participants([
        SystemParticipant::Load(test_load(&a)),
        SystemParticipant::FixedFeedIn(test_feed_in(&d)),
    ])
    .unwrap();

    let graphics = GraphicElements::from_graphics([
        GraphicElement::Node(node_graphic(&a)),
        GraphicElement::Line(line_graphic(&line_ab)),
    ])
    .unwrap();

    (raw, participants, graphics)
}

/// A joint grid with three subnets coupled by one three winding transformer:
/// HV subnet 1 (nodes `p`, `p2`), MV subnet 2 (nodes `s`, `s2`) and LV
/// subnet 3 (node `t`).  The transformer's internal node belongs to the
/// primary port's subnet but is not part of the node set.
pub(crate) fn three_winding_grid() -> (RawGridElements, SystemParticipants, GraphicElements) {
    let p = test_node("p", hv(), 1);
    let p2 = test_node("p2", hv(), 1);
    let s = test_node("s", mv(), 2);
    let s2 = test_node("s2", mv(), 2);
    let t = test_node("t", lv(), 3);
    let internal = test_node("internal", hv(), 1);

    let transformer = Transformer3W::new(
        Uuid::new_v4(),
        "transformer_p_s_t",
        p.clone(),
        s.clone(),
        t.clone(),
        internal,
        transformer_3w_types().remove(0),
        0,
        1,
    );

    let raw = RawGridElements::from_elements([
        RawGridElement::Node(p.clone()),
        RawGridElement::Node(p2.clone()),
        RawGridElement::Node(s.clone()),
        RawGridElement::Node(s2.clone()),
        RawGridElement::Node(t),
        RawGridElement::Line(line_between(&p, &p2)),
        RawGridElement::Line(line_between(&s, &s2)),
        RawGridElement::Transformer3W(transformer),
    ])
    .unwrap();

    let participants =
        SystemParticipants::from_participants([SystemParticipant::Load(test_load(&s2))]).unwrap();

    let graphics =
        GraphicElements::from_graphics([GraphicElement::Node(node_graphic(&s))]).unwrap();

    (raw, participants, graphics)
}
