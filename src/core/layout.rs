//! Render plan for the root shell.
//!
//! The page distinguishes two ways of taking a child off screen: the splash
//! screen is *unmounted* (removed from the tree, its own state is dropped),
//! the explore view is only *hidden* (kept in the tree, its state survives).
//! [`ShellLayout`] spells that decision out per child; [`RenderTree`] builds
//! the resulting page outline for host-side checks and the CLI.

use serde::Serialize;
use std::fmt::Write as _;

use crate::config::ShellConfig;
use crate::run::RunDescriptor;
use crate::shell::ShellState;
use crate::view::MainView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "slot", rename_all = "lowercase")]
pub enum Slot {
    Unmounted,
    Mounted { visible: bool },
}

impl Slot {
    pub const SHOWN: Slot = Slot::Mounted { visible: true };
    pub const HIDDEN: Slot = Slot::Mounted { visible: false };

    pub fn is_mounted(self) -> bool {
        matches!(self, Slot::Mounted { .. })
    }

    pub fn is_visible(self) -> bool {
        matches!(self, Slot::Mounted { visible: true })
    }

    /// CSS `display` value for a mounted slot.
    pub fn display(self) -> &'static str {
        if self.is_visible() {
            "block"
        } else {
            "none"
        }
    }
}

/// Mount/visibility decision for every child of the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShellLayout {
    pub header: Slot,
    pub splash: Slot,
    pub explore: Slot,
    pub footer: Slot,
}

impl ShellLayout {
    pub fn for_view(view: MainView) -> Self {
        Self {
            header: Slot::SHOWN,
            // Unmounted, not hidden: leaving splash drops its state.
            splash: if view == MainView::Splash {
                Slot::SHOWN
            } else {
                Slot::Unmounted
            },
            // Always mounted so exploration state survives the toggle.
            explore: Slot::Mounted {
                visible: view == MainView::Explore,
            },
            footer: Slot::SHOWN,
        }
    }

    pub fn from_state(state: &ShellState) -> Self {
        Self::for_view(state.current_main_view())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Component {
    Shell,
    Header,
    RunInfoBox,
    SplashScreen,
    ExploreView,
    Footer,
}

impl Component {
    pub fn tag(self) -> &'static str {
        match self {
            Component::Shell => "shell",
            Component::Header => "header",
            Component::RunInfoBox => "run-info-box",
            Component::SplashScreen => "splash-screen",
            Component::ExploreView => "explore-view",
            Component::Footer => "footer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderNode {
    pub component: Component,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// The `run-info` input, for children that receive the current run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_info: Option<RunDescriptor>,
    pub hidden: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RenderNode>,
}

impl RenderNode {
    fn leaf(component: Component) -> Self {
        Self {
            component,
            text: None,
            run_info: None,
            hidden: false,
            children: Vec::new(),
        }
    }

    fn find(&self, component: Component) -> Option<&RenderNode> {
        if self.component == component {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(component))
    }
}

/// The page as it would be rendered for a given state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderTree {
    pub root: RenderNode,
}

impl RenderTree {
    pub fn build(state: &ShellState, config: &ShellConfig) -> Self {
        let layout = ShellLayout::from_state(state);
        let run = state.current_run();

        let mut children = Vec::with_capacity(4);
        if let Some(mut header) = place(Component::Header, layout.header) {
            header.text = Some(config.title.clone());
            header.children.push(RenderNode::leaf(Component::RunInfoBox));
            children.push(header);
        }
        if let Some(mut splash) = place(Component::SplashScreen, layout.splash) {
            splash.run_info = Some(run.clone());
            children.push(splash);
        }
        if let Some(mut explore) = place(Component::ExploreView, layout.explore) {
            explore.run_info = Some(run.clone());
            children.push(explore);
        }
        if let Some(mut footer) = place(Component::Footer, layout.footer) {
            footer.text = Some(config.footer.clone());
            children.push(footer);
        }

        let mut root = RenderNode::leaf(Component::Shell);
        root.children = children;
        Self { root }
    }

    /// Structural presence; a hidden node still counts.
    pub fn contains(&self, component: Component) -> bool {
        self.root.find(component).is_some()
    }

    pub fn node(&self, component: Component) -> Option<&RenderNode> {
        self.root.find(component)
    }

    pub fn is_visible(&self, component: Component) -> bool {
        self.node(component).is_some_and(|n| !n.hidden)
    }

    /// Indented outline, one node per line.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        write_node(&mut out, &self.root, 0);
        out
    }
}

fn place(component: Component, slot: Slot) -> Option<RenderNode> {
    match slot {
        Slot::Unmounted => None,
        Slot::Mounted { visible } => {
            let mut node = RenderNode::leaf(component);
            node.hidden = !visible;
            Some(node)
        }
    }
}

fn write_node(out: &mut String, node: &RenderNode, depth: usize) {
    let _ = write!(out, "{:indent$}{}", "", node.component.tag(), indent = depth * 2);
    if node.hidden {
        out.push_str(" [hidden]");
    }
    if let Some(text) = &node.text {
        let _ = write!(out, " {text:?}");
    }
    if let Some(run) = &node.run_info {
        let _ = write!(out, " run-info={run}");
    }
    out.push('\n');
    for child in &node.children {
        write_node(out, child, depth + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::ShellSignal;
    use serde_json::json;

    #[test]
    fn splash_layout_mounts_splash_and_hides_explore() {
        let layout = ShellLayout::for_view(MainView::Splash);
        assert_eq!(layout.splash, Slot::SHOWN);
        assert_eq!(layout.explore, Slot::HIDDEN);
        assert_eq!(layout.explore.display(), "none");
        assert!(layout.header.is_visible() && layout.footer.is_visible());
    }

    #[test]
    fn explore_layout_unmounts_splash() {
        let layout = ShellLayout::for_view(MainView::Explore);
        assert_eq!(layout.splash, Slot::Unmounted);
        assert!(!layout.splash.is_mounted());
        assert_eq!(layout.explore, Slot::SHOWN);
        assert_eq!(layout.explore.display(), "block");
    }

    #[test]
    fn splash_is_absent_from_tree_after_all_done() {
        let cfg = ShellConfig::default();
        let mut state = ShellState::new();

        let before = RenderTree::build(&state, &cfg);
        assert!(before.contains(Component::SplashScreen));
        assert!(before.contains(Component::ExploreView));
        assert!(!before.is_visible(Component::ExploreView));

        state.apply(ShellSignal::AllDone);
        let after = RenderTree::build(&state, &cfg);
        // Absence, not just hidden.
        assert!(!after.contains(Component::SplashScreen));
        assert!(after.node(Component::SplashScreen).is_none());
        assert!(after.is_visible(Component::ExploreView));
        assert!(after.contains(Component::RunInfoBox));
    }

    #[test]
    fn children_receive_current_run() {
        let cfg = ShellConfig::default();
        let mut state = ShellState::new();
        state.apply(ShellSignal::run_changed(json!({ "id": "run-1" })));

        let tree = RenderTree::build(&state, &cfg);
        for c in [Component::SplashScreen, Component::ExploreView] {
            let node = tree.node(c).unwrap();
            assert_eq!(node.run_info.as_ref().unwrap().as_value(), &json!({ "id": "run-1" }));
        }
        assert!(tree.node(Component::RunInfoBox).unwrap().run_info.is_none());
    }

    #[test]
    fn outline_lists_hidden_explore_view() {
        let cfg = ShellConfig::default();
        let text = RenderTree::build(&ShellState::new(), &cfg).render_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "shell");
        assert!(lines[1].starts_with("  header \"neural-ir-explorer\""));
        assert_eq!(lines[2], "    run-info-box");
        assert_eq!(lines[3], "  splash-screen run-info={}");
        assert_eq!(lines[4], "  explore-view [hidden] run-info={}");
        assert!(lines[5].starts_with("  footer "));
        assert_eq!(lines.len(), 6);
    }
}
