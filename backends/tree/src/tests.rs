//! View tree tests: frames, batching and reactive re-layout.

use trellis_core::{Edge, LayoutHint, Size};
use trellis_layout::{ChildViewLayoutOptions, HORIZONTAL_STACK, VERTICAL_STACK};

use crate::{DirtyReason, LayoutEngine, NodeId, TreeError, ViewNode, ViewTree};

fn viewport() -> Size {
    Size::new(800.0, 600.0)
}

fn toolbar(tree: &mut ViewTree) -> (NodeId, [NodeId; 3]) {
    let root = tree
        .set_root(
            ViewNode::new(LayoutHint::new().left(10.0).top(20.0).bottom(20.0))
                .with_child_view_layout(HORIZONTAL_STACK, ChildViewLayoutOptions::default()),
        )
        .unwrap();
    let a = tree
        .insert_child(root, ViewNode::new(LayoutHint::new().width(100.0)))
        .unwrap();
    let b = tree
        .insert_child(root, ViewNode::new(LayoutHint::new().width(50.0).border(1.0)))
        .unwrap();
    let c = tree
        .insert_child(
            root,
            ViewNode::new(LayoutHint::new().right(10.0).top(10.0).width(120.0)),
        )
        .unwrap();
    (root, [a, b, c])
}

fn x(tree: &ViewTree, id: NodeId) -> f32 {
    tree.frame(id).unwrap().x()
}

fn width(tree: &ViewTree, id: NodeId) -> f32 {
    tree.frame(id).unwrap().width()
}

#[test]
fn engine_stacks_and_resizes_root() {
    let mut tree = ViewTree::new(viewport());
    let (root, [a, b, c]) = toolbar(&mut tree);

    let run = LayoutEngine::new(&mut tree).run();

    assert!(run.settled);
    assert_eq!(run.completed, 1);
    assert_eq!(x(&tree, a), 0.0);
    assert_eq!(x(&tree, b), 100.0);
    assert_eq!(x(&tree, c), 150.0);
    assert_eq!(tree.node(root).unwrap().hint().width, Some(270.0));
    assert_eq!(width(&tree, root), 270.0);
    assert_eq!(tree.frame(root).unwrap().x(), 10.0);
}

#[test]
fn settled_tree_is_not_laid_out_again() {
    let mut tree = ViewTree::new(viewport());
    let (root, _) = toolbar(&mut tree);
    LayoutEngine::new(&mut tree).run();
    let writes = tree.adjustment_count();

    let idle = LayoutEngine::new(&mut tree).run();
    assert_eq!(idle.completed, 0);

    tree.mark_dirty(root, DirtyReason::Layout);
    let forced = LayoutEngine::new(&mut tree).run();
    assert_eq!(forced.completed, 1);
    assert_eq!(tree.adjustment_count(), writes);
}

#[test]
fn margin_binding_triggers_relayout() {
    let mut tree = ViewTree::new(viewport());
    let (root, [_, b, c]) = toolbar(&mut tree);
    LayoutEngine::new(&mut tree).run();

    let margin = tree.node(b).unwrap().margin_before_binding().clone();
    margin.set(Some(30.0));
    let run = LayoutEngine::new(&mut tree).run();

    assert_eq!(run.completed, 1);
    assert_eq!(x(&tree, b), 130.0);
    assert_eq!(x(&tree, c), 180.0);
    assert_eq!(width(&tree, root), 300.0);
}

#[test]
fn hiding_a_child_closes_the_gap() {
    let mut tree = ViewTree::new(viewport());
    let (root, [_, b, c]) = toolbar(&mut tree);
    LayoutEngine::new(&mut tree).run();

    tree.node(b).unwrap().is_visible_binding().set(false);
    LayoutEngine::new(&mut tree).run();

    assert_eq!(x(&tree, c), 100.0);
    assert_eq!(width(&tree, root), 220.0);
}

#[test]
fn absolute_flag_removes_child_from_stack() {
    let mut tree = ViewTree::new(viewport());
    let (root, [a, _, c]) = toolbar(&mut tree);
    LayoutEngine::new(&mut tree).run();

    tree.set_absolute(a, true).unwrap();
    LayoutEngine::new(&mut tree).run();

    assert_eq!(x(&tree, c), 50.0);
    assert_eq!(width(&tree, root), 170.0);
}

#[test]
fn fixed_root_shares_space_and_follows_resizes() {
    let mut tree = ViewTree::new(viewport());
    let options = ChildViewLayoutOptions::spaced(5.0)
        .padding(10.0, 20.0)
        .resize_to_fit(false);
    let root = tree
        .set_root(
            ViewNode::new(LayoutHint::new().left(10.0).width(500.0))
                .with_child_view_layout(HORIZONTAL_STACK, options),
        )
        .unwrap();
    tree.insert_child(root, ViewNode::new(LayoutHint::new().width(100.0)))
        .unwrap();
    let b = tree
        .insert_child(
            root,
            ViewNode::new(LayoutHint::new().border(1.0)).with_fill_ratio(1.0),
        )
        .unwrap();
    let c = tree
        .insert_child(root, ViewNode::new(LayoutHint::new()).with_fill_ratio(2.0))
        .unwrap();

    LayoutEngine::new(&mut tree).run();

    assert_eq!(x(&tree, b), 115.0);
    assert_eq!(width(&tree, b), 120.0);
    assert_eq!(x(&tree, c), 240.0);
    assert_eq!(width(&tree, c), 240.0);
    assert_eq!(tree.node(root).unwrap().hint().width, Some(500.0));

    tree.set_layout(root, LayoutHint::new().left(10.0).width(800.0))
        .unwrap();
    LayoutEngine::new(&mut tree).run();

    assert_eq!(width(&tree, b), 220.0);
    assert_eq!(x(&tree, c), 340.0);
    assert_eq!(width(&tree, c), 440.0);
    assert_eq!(tree.node(c).unwrap().hint().right, Some(20.0));
}

#[test]
fn unsized_fixed_root_is_deferred() {
    let mut tree = ViewTree::new(viewport());
    let root = tree
        .set_root(
            ViewNode::new(LayoutHint::new().width(0.0)).with_child_view_layout(
                HORIZONTAL_STACK,
                ChildViewLayoutOptions::default().resize_to_fit(false),
            ),
        )
        .unwrap();
    tree.insert_child(root, ViewNode::new(LayoutHint::new()))
        .unwrap();

    let run = LayoutEngine::new(&mut tree).run();

    assert_eq!(run.deferred, 1);
    assert_eq!(tree.adjustment_count(), 0);
}

#[test]
fn configuration_error_is_counted_not_fatal() {
    let mut tree = ViewTree::new(viewport());
    let root = tree
        .set_root(
            ViewNode::new(LayoutHint::new())
                .with_child_view_layout(HORIZONTAL_STACK, ChildViewLayoutOptions::default()),
        )
        .unwrap();
    tree.insert_child(root, ViewNode::new(LayoutHint::new().width(40.0)))
        .unwrap();
    tree.insert_child(root, ViewNode::new(LayoutHint::new()))
        .unwrap();

    let run = LayoutEngine::new(&mut tree).run();

    assert_eq!(run.failed, 1);
    assert!(run.settled);
    assert_eq!(tree.adjustment_count(), 0);
    assert_eq!(tree.node(root).unwrap().hint().width, None);
}

#[test]
fn nested_stacks_settle() {
    let mut tree = ViewTree::new(viewport());
    let root = tree
        .set_root(
            ViewNode::new(LayoutHint::new())
                .with_child_view_layout(HORIZONTAL_STACK, ChildViewLayoutOptions::default()),
        )
        .unwrap();
    let inner = tree
        .insert_child(
            root,
            ViewNode::new(LayoutHint::new().min_width(0.0))
                .with_child_view_layout(HORIZONTAL_STACK, ChildViewLayoutOptions::default()),
        )
        .unwrap();
    tree.insert_child(inner, ViewNode::new(LayoutHint::new().width(30.0)))
        .unwrap();
    tree.insert_child(inner, ViewNode::new(LayoutHint::new().width(40.0)))
        .unwrap();
    let tail = tree
        .insert_child(root, ViewNode::new(LayoutHint::new().width(10.0)))
        .unwrap();

    let run = LayoutEngine::new(&mut tree).run();

    assert!(run.settled);
    assert!(run.passes >= 2);
    assert_eq!(width(&tree, inner), 70.0);
    assert_eq!(x(&tree, tail), 70.0);
    assert_eq!(width(&tree, root), 80.0);
}

#[test]
fn vertical_root_stacks_by_height() {
    let mut tree = ViewTree::new(viewport());
    let root = tree
        .set_root(
            ViewNode::new(LayoutHint::new().width(200.0)).with_child_view_layout(
                VERTICAL_STACK,
                ChildViewLayoutOptions::spaced(6.0),
            ),
        )
        .unwrap();
    let first = tree
        .insert_child(root, ViewNode::new(LayoutHint::new().height(24.0)))
        .unwrap();
    let second = tree
        .insert_child(
            root,
            ViewNode::new(LayoutHint::new().height(24.0)).with_margins(Some(12.0), None),
        )
        .unwrap();

    LayoutEngine::new(&mut tree).run();

    assert_eq!(tree.frame(first).unwrap().y(), 0.0);
    assert_eq!(tree.frame(second).unwrap().y(), 36.0);
    assert_eq!(tree.frame(root).unwrap().height(), 66.0);
}

#[test]
fn batch_defers_notifications() {
    let mut tree = ViewTree::new(viewport());
    let root = tree.set_root(ViewNode::new(LayoutHint::new())).unwrap();
    let child = tree
        .insert_child(root, ViewNode::new(LayoutHint::new().width(10.0)))
        .unwrap();
    tree.drain_dirty().for_each(drop);

    tree.batch(|tree| {
        tree.adjust(child, Edge::Left, 5.0).unwrap();
        tree.adjust(child, Edge::Top, 5.0).unwrap();
        assert!(!tree.is_dirty(child, DirtyReason::Frame));
    });

    assert!(tree.is_dirty(child, DirtyReason::Frame));
    assert_eq!(tree.drain_dirty().count(), 1);
    assert_eq!(tree.adjustment_count(), 2);
}

#[test]
fn structure_is_frozen_inside_a_batch() {
    let mut tree = ViewTree::new(viewport());
    let root = tree.set_root(ViewNode::new(LayoutHint::new())).unwrap();

    let result = tree.batch(|tree| tree.insert_child(root, ViewNode::new(LayoutHint::new())));

    assert_eq!(result, Err(TreeError::BatchOpen));
    assert!(tree.children(root).is_empty());
}

#[test]
fn unknown_nodes_are_reported() {
    let mut tree = ViewTree::new(viewport());
    let missing = NodeId::new(7);

    assert_eq!(
        tree.adjust(missing, Edge::Left, 1.0),
        Err(TreeError::UnknownNode(missing))
    );
    assert_eq!(
        TreeError::UnknownNode(missing).to_string(),
        "unknown node NodeId(7)"
    );
}
