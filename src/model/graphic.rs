// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Visualization metadata referencing nodes and lines.  Graphic annotations
//! carry no electrical semantics.

use uuid::Uuid;

use crate::model::connector::Line;
use crate::model::node::{GeoPosition, Node};

/// Drawing information for a single node.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeGraphic {
    pub uuid: Uuid,
    /// The layer the annotation is drawn on, e.g. "main".
    pub graphic_layer: String,
    pub point: Option<GeoPosition>,
    pub node: Node,
}

impl NodeGraphic {
    pub fn new(
        uuid: Uuid,
        graphic_layer: impl Into<String>,
        point: Option<GeoPosition>,
        node: Node,
    ) -> Self {
        Self {
            uuid,
            graphic_layer: graphic_layer.into(),
            point,
            node,
        }
    }

    /// Returns a copy of this annotation referencing the given node.
    pub fn with_node(&self, node: Node) -> Self {
        Self {
            node,
            ..self.clone()
        }
    }
}

/// Drawing information for a single line.
#[derive(Clone, Debug, PartialEq)]
pub struct LineGraphic {
    pub uuid: Uuid,
    pub graphic_layer: String,
    pub path: Vec<GeoPosition>,
    pub line: Line,
}

impl LineGraphic {
    pub fn new(
        uuid: Uuid,
        graphic_layer: impl Into<String>,
        path: Vec<GeoPosition>,
        line: Line,
    ) -> Self {
        Self {
            uuid,
            graphic_layer: graphic_layer.into(),
            path,
            line,
        }
    }

    /// Returns a copy of this annotation referencing the given line.
    pub fn with_line(&self, line: Line) -> Self {
        Self {
            line,
            ..self.clone()
        }
    }
}

/// One of the graphic annotations of a grid model.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphicElement {
    Node(NodeGraphic),
    Line(LineGraphic),
}

impl GraphicElement {
    /// Returns the uuid of the wrapped annotation.
    pub fn uuid(&self) -> Uuid {
        match self {
            GraphicElement::Node(graphic) => graphic.uuid,
            GraphicElement::Line(graphic) => graphic.uuid,
        }
    }
}
