//! Drives child view layouts over the view tree.

use trellis_layout::LayoutOutcome;

use crate::ViewTree;

/// Upper bound on invalidation rounds in one [`LayoutEngine::run`].
///
/// Nested stacks settle in a few rounds; hitting the bound means two
/// containers keep invalidating each other.
pub const MAX_LAYOUT_PASSES: usize = 32;

/// Counters describing one [`LayoutEngine::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutRun {
    /// Containers whose layout completed.
    pub completed: usize,
    /// Containers skipped because their extent was unknown.
    pub deferred: usize,
    /// Containers whose children carried invalid hints.
    pub failed: usize,
    /// Invalidation rounds performed.
    pub passes: usize,
    /// Whether the tree ran out of invalid containers.
    pub settled: bool,
}

/// Layout executor that runs child view layouts until the tree is clean.
#[derive(Debug)]
pub struct LayoutEngine<'a> {
    tree: &'a mut ViewTree,
}

impl<'a> LayoutEngine<'a> {
    /// Creates a new engine bound to the provided tree.
    pub const fn new(tree: &'a mut ViewTree) -> Self {
        Self { tree }
    }

    /// Lays out every invalid container, repeating while layouts invalidate
    /// further containers.
    ///
    /// Configuration errors are logged and counted; they never stop the run.
    pub fn run(&mut self) -> LayoutRun {
        let mut run = LayoutRun::default();
        self.tree.poll_signals();

        while run.passes < MAX_LAYOUT_PASSES {
            let containers = self.tree.take_layout_dirty();
            if containers.is_empty() {
                run.settled = true;
                return run;
            }
            run.passes += 1;

            for id in containers {
                match self.tree.run_child_view_layout(id) {
                    Some(Ok(LayoutOutcome::Complete(report))) => {
                        tracing::debug!(target: "trellis::tree", ?id, ?report, "laid out container");
                        run.completed += 1;
                    }
                    Some(Ok(LayoutOutcome::Deferred)) => run.deferred += 1,
                    Some(Err(error)) => {
                        tracing::warn!(target: "trellis::tree", ?id, "layout failed: {error}");
                        run.failed += 1;
                    }
                    None => {}
                }
            }

            self.tree.poll_signals();
        }

        if !self.tree.has_pending_layout() {
            run.settled = true;
            return run;
        }
        tracing::warn!(
            target: "trellis::tree",
            passes = run.passes,
            "layout did not settle"
        );
        run
    }
}
