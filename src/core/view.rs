//! The `splash`/`explore` main view state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ShellError;

/// Which main view the page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MainView {
    #[default]
    Splash,
    Explore,
}

impl MainView {
    pub fn label(self) -> &'static str {
        match self {
            MainView::Splash => "splash",
            MainView::Explore => "explore",
        }
    }

    /// `explore` has no outgoing transition.
    pub fn is_terminal(self) -> bool {
        matches!(self, MainView::Explore)
    }

    pub fn all() -> &'static [MainView] {
        &[MainView::Splash, MainView::Explore]
    }
}

impl fmt::Display for MainView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MainView {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "splash" => Ok(MainView::Splash),
            "explore" => Ok(MainView::Explore),
            _ => Err(ShellError::UnknownView(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_inventory_is_stable() {
        let all = MainView::all();
        assert_eq!(all.len(), 2);
        assert_eq!(MainView::default(), MainView::Splash);
        assert!(!MainView::Splash.is_terminal());
        assert!(MainView::Explore.is_terminal());
    }

    #[test]
    fn labels_parse_back() {
        for &v in MainView::all() {
            assert_eq!(v.label().parse::<MainView>().unwrap(), v);
        }
        assert_eq!(" Explore ".parse::<MainView>().unwrap(), MainView::Explore);
        assert!(matches!(
            "results".parse::<MainView>(),
            Err(ShellError::UnknownView(s)) if s == "results"
        ));
    }

    #[test]
    fn serde_uses_lowercase_labels() {
        assert_eq!(serde_json::to_string(&MainView::Explore).unwrap(), r#""explore""#);
        let v: MainView = serde_json::from_str(r#""splash""#).unwrap();
        assert_eq!(v, MainView::Splash);
    }
}
