//! The derived tree the treemap is laid out from.
//!
//! A [`Hierarchy`] is an arena of [`Node`]s built from a [`RawRecord`]
//! document. Building happens in three passes:
//!
//! 1. Pre-order: every node receives its dotted-path id
//!    (`id(child) = id(parent) + "." + name(child)`).
//! 2. Post-order: aggregate values and heights are computed bottom-up.
//! 3. Every node's children are stable-sorted by descending height, then by
//!    descending aggregate value.
//!
//! Nodes are addressed by [`NodeIndex`]. Node `0` is always the root and
//! indices follow the pre-order of the source document, so a parent's index is
//! always smaller than its children's.

use std::{cmp::Ordering, collections::HashSet};

use log::{debug, warn};

use quilt_core::{geometry::Bounds, record::RawRecord};

/// Handle to a node inside a [`Hierarchy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(usize);

impl NodeIndex {
    /// Returns the position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single node of the hierarchy.
#[derive(Debug, Clone)]
pub struct Node {
    id: String,
    name: String,
    category: Option<String>,
    value: f64,
    depth: usize,
    height: usize,
    parent: Option<NodeIndex>,
    children: Vec<NodeIndex>,
    bounds: Bounds,
}

impl Node {
    /// Dotted path from the root down to this node.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Aggregate value: a leaf's own value, or the sum over all leaves below.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Distance from the root (the root has depth 0).
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Distance to the deepest leaf below (leaves have height 0).
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    /// Children in sorted order.
    pub fn children(&self) -> &[NodeIndex] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Rectangle assigned by the last layout pass.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub(crate) fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }
}

/// Arena of hierarchy nodes rooted at [`Hierarchy::root`].
#[derive(Debug, Clone)]
pub struct Hierarchy {
    nodes: Vec<Node>,
}

impl Hierarchy {
    /// Builds the hierarchy for a document.
    ///
    /// A leaf without a value counts as 0; a negative value is clamped to 0
    /// with a warning. A node whose `children` list is empty is a leaf and
    /// keeps its own value. Siblings sharing a name get `-2`, `-3`, ... path
    /// suffixes so that ids stay unique.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quilt::hierarchy::Hierarchy;
    /// # use quilt_core::record::RawRecord;
    /// let record = RawRecord::branch("root", vec![
    ///     RawRecord::branch("X", vec![
    ///         RawRecord::leaf("A", "c1", 10.0),
    ///         RawRecord::leaf("B", "c2", 20.0),
    ///     ]),
    /// ]);
    /// let hierarchy = Hierarchy::build(&record);
    ///
    /// assert_eq!(hierarchy.node(hierarchy.root()).value(), 30.0);
    /// let ids: Vec<_> = hierarchy
    ///     .leaves()
    ///     .into_iter()
    ///     .map(|leaf| hierarchy.node(leaf).id().to_string())
    ///     .collect();
    /// assert_eq!(ids, ["root.X.B", "root.X.A"]);
    /// ```
    pub fn build(record: &RawRecord) -> Self {
        let mut hierarchy = Self {
            nodes: Vec::new(),
        };
        hierarchy.assign_ids(record);
        hierarchy.aggregate();
        hierarchy.sort_children();

        debug!(
            nodes = hierarchy.nodes.len(),
            leaves = hierarchy.leaves().len(),
            total = hierarchy.node(hierarchy.root()).value();
            "Hierarchy built"
        );
        hierarchy
    }

    /// The root node, always present.
    pub fn root(&self) -> NodeIndex {
        NodeIndex(0)
    }

    /// # Panics
    ///
    /// Panics if `index` does not belong to this hierarchy.
    pub fn node(&self, index: NodeIndex) -> &Node {
        &self.nodes[index.0]
    }

    pub(crate) fn node_mut(&mut self, index: NodeIndex) -> &mut Node {
        &mut self.nodes[index.0]
    }

    pub fn children(&self, index: NodeIndex) -> &[NodeIndex] {
        self.node(index).children()
    }

    pub fn parent(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.node(index).parent()
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a hierarchy holds at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in pre-order, following the sorted child order.
    pub fn descendants(&self) -> Vec<NodeIndex> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root()];
        while let Some(index) = stack.pop() {
            order.push(index);
            stack.extend(self.children(index).iter().rev());
        }
        order
    }

    /// Leaves in pre-order, following the sorted child order.
    pub fn leaves(&self) -> Vec<NodeIndex> {
        self.descendants()
            .into_iter()
            .filter(|&index| self.node(index).is_leaf())
            .collect()
    }

    /// Iterates over every node together with its index, in arena order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeIndex(index), node))
    }

    /// First pass: walk the document in pre-order and create the nodes.
    fn assign_ids(&mut self, record: &RawRecord) {
        struct Pending<'r> {
            record: &'r RawRecord,
            parent: Option<NodeIndex>,
            segment: String,
            depth: usize,
        }

        let mut stack = vec![Pending {
            record,
            parent: None,
            segment: record.name().to_string(),
            depth: 0,
        }];

        while let Some(Pending {
            record,
            parent,
            segment,
            depth,
        }) = stack.pop()
        {
            let index = NodeIndex(self.nodes.len());
            let id = match parent {
                Some(parent) => {
                    self.nodes[parent.0].children.push(index);
                    format!("{}.{segment}", self.nodes[parent.0].id)
                }
                None => segment,
            };

            let segments = sibling_segments(&id, record.children());
            for (child, segment) in record.children().iter().zip(segments).rev() {
                stack.push(Pending {
                    record: child,
                    parent: Some(index),
                    segment,
                    depth: depth + 1,
                });
            }

            self.nodes.push(Node {
                id,
                name: record.name().to_string(),
                category: record.category().map(str::to_string),
                value: record.value().unwrap_or(0.0),
                depth,
                height: 0,
                parent,
                children: Vec::new(),
                bounds: Bounds::default(),
            });
        }
    }

    /// Second pass: children always follow their parent in the arena, so a
    /// reverse scan visits every child before its parent.
    fn aggregate(&mut self) {
        for position in (0..self.nodes.len()).rev() {
            let (value, height) = if self.nodes[position].children.is_empty() {
                let node = &self.nodes[position];
                if node.value < 0.0 {
                    warn!(id = node.id, value = node.value; "Negative value clamped to 0");
                }
                (node.value.max(0.0), 0)
            } else {
                let children = &self.nodes[position].children;
                let value = children.iter().map(|child| self.nodes[child.0].value).sum();
                let height = children
                    .iter()
                    .map(|child| self.nodes[child.0].height)
                    .max()
                    .unwrap_or(0)
                    + 1;
                (value, height)
            };

            let node = &mut self.nodes[position];
            node.value = value;
            node.height = height;
        }
    }

    /// Third pass: order siblings for layout.
    fn sort_children(&mut self) {
        for position in 0..self.nodes.len() {
            let mut children = std::mem::take(&mut self.nodes[position].children);
            children.sort_by(|&a, &b| {
                let (a, b) = (&self.nodes[a.0], &self.nodes[b.0]);
                b.height
                    .cmp(&a.height)
                    .then_with(|| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal))
            });
            self.nodes[position].children = children;
        }
    }
}

/// Path segments for a list of siblings, disambiguating repeated names.
fn sibling_segments(parent_id: &str, children: &[RawRecord]) -> Vec<String> {
    let mut used = HashSet::with_capacity(children.len());
    children
        .iter()
        .map(|child| {
            let name = child.name();
            let mut segment = name.to_string();
            let mut suffix = 2;
            while used.contains(&segment) {
                segment = format!("{name}-{suffix}");
                suffix += 1;
            }
            if segment != name {
                warn!(parent = parent_id, name, segment; "Duplicate sibling name renamed");
            }
            used.insert(segment.clone());
            segment
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn sample() -> RawRecord {
        RawRecord::branch("root", vec![
            RawRecord::branch("Wii", vec![
                RawRecord::leaf("Wii Sports", "Wii", 82.53),
                RawRecord::leaf("Mario Kart Wii", "Wii", 35.52),
            ]),
            RawRecord::branch("DS", vec![RawRecord::leaf(
                "New Super Mario Bros.",
                "DS",
                29.8,
            )]),
            RawRecord::leaf("Loose", "Misc", 1.0),
        ])
    }

    fn ids(hierarchy: &Hierarchy, indices: &[NodeIndex]) -> Vec<String> {
        indices
            .iter()
            .map(|&index| hierarchy.node(index).id().to_string())
            .collect()
    }

    #[test]
    fn test_root_is_first() {
        let hierarchy = Hierarchy::build(&sample());
        let root = hierarchy.node(hierarchy.root());
        assert_eq!(root.id(), "root");
        assert_eq!(root.depth(), 0);
        assert!(root.parent().is_none());
        assert_eq!(hierarchy.len(), 7);
        assert!(!hierarchy.is_empty());
    }

    #[test]
    fn test_aggregate_values() {
        let hierarchy = Hierarchy::build(&sample());
        let root = hierarchy.node(hierarchy.root());
        assert_approx_eq!(f64, root.value(), 82.53 + 35.52 + 29.8 + 1.0, epsilon = 1e-9);

        let wii = hierarchy.children(hierarchy.root())[0];
        assert_eq!(hierarchy.node(wii).id(), "root.Wii");
        assert_approx_eq!(f64, hierarchy.node(wii).value(), 118.05, epsilon = 1e-9);
    }

    #[test]
    fn test_heights() {
        let hierarchy = Hierarchy::build(&sample());
        assert_eq!(hierarchy.node(hierarchy.root()).height(), 2);
        for leaf in hierarchy.leaves() {
            assert_eq!(hierarchy.node(leaf).height(), 0);
        }
    }

    #[test]
    fn test_children_sorted_by_height_then_value() {
        let hierarchy = Hierarchy::build(&sample());
        let children = ids(&hierarchy, hierarchy.children(hierarchy.root()));
        // Both platforms have height 1, the loose leaf has height 0.
        assert_eq!(children, ["root.Wii", "root.DS", "root.Loose"]);
    }

    #[test]
    fn test_leaves_in_sorted_pre_order() {
        let hierarchy = Hierarchy::build(&sample());
        assert_eq!(ids(&hierarchy, &hierarchy.leaves()), [
            "root.Wii.Wii Sports",
            "root.Wii.Mario Kart Wii",
            "root.DS.New Super Mario Bros.",
            "root.Loose",
        ]);
    }

    #[test]
    fn test_stable_sort_on_ties() {
        let record = RawRecord::branch("root", vec![
            RawRecord::leaf("first", "c", 5.0),
            RawRecord::leaf("second", "c", 5.0),
            RawRecord::leaf("third", "c", 5.0),
        ]);
        let hierarchy = Hierarchy::build(&record);
        assert_eq!(ids(&hierarchy, &hierarchy.leaves()), [
            "root.first",
            "root.second",
            "root.third"
        ]);
    }

    #[test]
    fn test_missing_value_counts_as_zero() {
        let record = RawRecord::branch("root", vec![
            RawRecord::leaf("a", "c", 3.0),
            RawRecord::leaf("b", "c", 0.0).with_value(None),
        ]);
        let hierarchy = Hierarchy::build(&record);
        assert_approx_eq!(f64, hierarchy.node(hierarchy.root()).value(), 3.0);
    }

    #[test]
    fn test_negative_value_clamped() {
        let record = RawRecord::branch("root", vec![
            RawRecord::leaf("a", "c", 3.0),
            RawRecord::leaf("b", "c", -2.0),
        ]);
        let hierarchy = Hierarchy::build(&record);
        assert_approx_eq!(f64, hierarchy.node(hierarchy.root()).value(), 3.0);
    }

    #[test]
    fn test_internal_value_ignored() {
        let record = RawRecord::branch("root", vec![RawRecord::leaf("a", "c", 3.0)])
            .with_value(Some(100.0));
        let hierarchy = Hierarchy::build(&record);
        assert_approx_eq!(f64, hierarchy.node(hierarchy.root()).value(), 3.0);
    }

    #[test]
    fn test_empty_children_is_leaf() {
        let record = RawRecord::branch("root", vec![
            RawRecord::branch("empty", Vec::new()).with_value(Some(4.0)),
        ]);
        let hierarchy = Hierarchy::build(&record);
        let leaves = hierarchy.leaves();
        assert_eq!(leaves.len(), 1);
        assert_approx_eq!(f64, hierarchy.node(leaves[0]).value(), 4.0);
        assert_eq!(hierarchy.node(leaves[0]).height(), 0);
    }

    #[test]
    fn test_lone_root_is_a_leaf() {
        let hierarchy = Hierarchy::build(&RawRecord::leaf("solo", "c", 7.0));
        assert_eq!(hierarchy.len(), 1);
        assert_eq!(hierarchy.leaves(), vec![hierarchy.root()]);
    }

    #[test]
    fn test_duplicate_sibling_names_get_suffix() {
        let record = RawRecord::branch("root", vec![
            RawRecord::leaf("A", "c", 3.0),
            RawRecord::leaf("A", "c", 2.0),
            RawRecord::leaf("A-2", "c", 1.0),
        ]);
        let hierarchy = Hierarchy::build(&record);
        let mut leaf_ids = ids(&hierarchy, &hierarchy.leaves());
        leaf_ids.sort();
        assert_eq!(leaf_ids, ["root.A", "root.A-2", "root.A-2-2"]);
    }

    #[test]
    fn test_parent_links() {
        let hierarchy = Hierarchy::build(&sample());
        for (index, node) in hierarchy.iter() {
            for &child in node.children() {
                assert_eq!(hierarchy.parent(child), Some(index));
                assert_eq!(hierarchy.node(child).depth(), node.depth() + 1);
            }
        }
    }

    fn record_strategy() -> impl Strategy<Value = RawRecord> {
        let leaf = ("[a-d]", 0usize..4, 0u32..500)
            .prop_map(|(name, category, value)| {
                RawRecord::leaf(name, format!("c{category}"), f64::from(value))
            });
        leaf.prop_recursive(4, 48, 5, |inner| {
            ("[a-d]", prop::collection::vec(inner, 1..5))
                .prop_map(|(name, children)| RawRecord::branch(name, children))
        })
    }

    fn leaf_sum(record: &RawRecord) -> f64 {
        if record.is_leaf() {
            record.value().unwrap_or(0.0)
        } else {
            record.children().iter().map(leaf_sum).sum()
        }
    }

    proptest! {
        #[test]
        fn test_root_value_is_leaf_sum(record in record_strategy()) {
            let hierarchy = Hierarchy::build(&record);
            let root = hierarchy.node(hierarchy.root()).value();
            prop_assert!((root - leaf_sum(&record)).abs() < 1e-6);

            let leaves: f64 = hierarchy.leaves().iter().map(|&l| hierarchy.node(l).value()).sum();
            prop_assert!((root - leaves).abs() < 1e-6);
        }

        #[test]
        fn test_ids_unique_and_dotted(record in record_strategy()) {
            let hierarchy = Hierarchy::build(&record);
            let mut seen = HashSet::new();
            for (index, node) in hierarchy.iter() {
                prop_assert!(seen.insert(node.id().to_string()), "duplicate id {}", node.id());
                match hierarchy.parent(index) {
                    None => prop_assert_eq!(node.id(), node.name()),
                    Some(parent) => {
                        let prefix = format!("{}.", hierarchy.node(parent).id());
                        let segment = node.id().strip_prefix(&prefix);
                        prop_assert!(segment.is_some());
                        let segment = segment.unwrap_or_default();
                        let suffixed = format!("{}-", node.name());
                        let matches_name =
                            segment == node.name() || segment.starts_with(&suffixed);
                        prop_assert!(matches_name, "bad segment {} for {}", segment, node.name());
                    }
                }
            }
        }

        #[test]
        fn test_every_node_listed_once(record in record_strategy()) {
            let hierarchy = Hierarchy::build(&record);
            let mut order = hierarchy.descendants();
            prop_assert_eq!(order.len(), hierarchy.len());
            order.sort();
            order.dedup();
            prop_assert_eq!(order.len(), hierarchy.len());
        }
    }
}
