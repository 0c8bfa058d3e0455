//! Status area rendering
//!
//! The status area is the bottom five rows of the screen: three rows that
//! describe whatever is under the cursor and a help line on the very last row.

use super::{DrawOp, blank_line};
use crate::tui::app::state::{CollapseState, ViewportState};
use crate::tui::keybindings::help_line;
use crate::tui::positions::Entity;
use crate::tui::theme::Theme;

/// Render the status area for the entity under the cursor
pub fn render_status_area(
    entity: Option<Entity<'_>>,
    collapse: &CollapseState,
    viewport: &ViewportState,
    theme: &Theme,
    show_help: bool,
) -> Vec<DrawOp> {
    let height = viewport.height;
    let bg = theme.background;
    let mut ops = Vec::new();

    // Blank everything above the help line first
    let blank = blank_line(viewport.width);
    for y in viewport.status_area_start()..height.saturating_sub(1) {
        ops.push(DrawOp::new(blank.clone(), 0, y, theme.text_primary, bg));
    }

    let lines = describe(entity, collapse);
    let first_row = height.saturating_sub(4);
    for (offset, (label, value)) in lines.into_iter().enumerate() {
        let y = first_row + offset as u16;
        if y >= height.saturating_sub(1) {
            break;
        }
        let label_len = label.chars().count() as u16;
        ops.push(DrawOp::new(label, 0, y, theme.status_label, bg));
        ops.push(DrawOp::new(value, label_len + 1, y, theme.text_primary, bg));
    }

    if show_help && height > 0 {
        ops.push(DrawOp::new(help_line(), 0, height - 1, theme.help_text, bg));
    }

    ops
}

/// (label, value) lines describing an entity
fn describe(entity: Option<Entity<'_>>, collapse: &CollapseState) -> Vec<(String, String)> {
    match entity {
        Some(Entity::Namespace(ns)) => {
            let state = if collapse.is_folded(&ns.name) {
                "folded"
            } else {
                "unfolded"
            };
            let mut lines = vec![
                ("Namespace:".to_string(), ns.name.clone()),
                (
                    "Pods:".to_string(),
                    format!("{} ({})", ns.pods.len(), state),
                ),
            ];
            if let Some(ref error) = ns.error {
                lines.push(("Error:".to_string(), error.clone()));
            }
            lines
        }
        Some(Entity::Pod(pod)) => vec![
            ("Pod:".to_string(), format!("{}/{}", pod.namespace, pod.name)),
            (
                "Ready:".to_string(),
                format!(
                    "{}  Status: {}  Restarts: {}  Age: {}",
                    pod.ready_label(),
                    pod.status,
                    pod.restarts,
                    pod.age
                ),
            ),
            ("Health:".to_string(), pod.health().to_string()),
        ],
        Some(Entity::Error(message)) => vec![("Error:".to_string(), message.to_string())],
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Namespace, Pod};

    fn texts(ops: &[DrawOp], y: u16) -> Vec<String> {
        ops.iter()
            .filter(|op| op.y == y && !op.text.trim().is_empty())
            .map(|op| op.text.clone())
            .collect()
    }

    #[test]
    fn test_blanks_status_rows() {
        let viewport = ViewportState::new(10, 24);
        let ops = render_status_area(
            None,
            &CollapseState::default(),
            &viewport,
            &Theme::default(),
            false,
        );
        let blank_rows: Vec<_> = ops.iter().map(|op| op.y).collect();
        assert_eq!(blank_rows, vec![19, 20, 21, 22]);
        assert!(ops.iter().all(|op| op.text == "          "));
    }

    #[test]
    fn test_help_line_on_last_row() {
        let viewport = ViewportState::new(80, 24);
        let ops = render_status_area(
            None,
            &CollapseState::default(),
            &viewport,
            &Theme::default(),
            true,
        );
        let last = ops.last().unwrap();
        assert_eq!(last.y, 23);
        assert_eq!(last.text, help_line());
    }

    #[test]
    fn test_describes_namespace() {
        let ns = Namespace::new("default", vec![]);
        let mut collapse = CollapseState::default();
        collapse.set("default", true);
        let viewport = ViewportState::new(80, 24);
        let ops = render_status_area(
            Some(Entity::Namespace(&ns)),
            &collapse,
            &viewport,
            &Theme::default(),
            false,
        );
        assert_eq!(texts(&ops, 20), vec!["Namespace:", "default"]);
        assert_eq!(texts(&ops, 21), vec!["Pods:", "0 (folded)"]);
    }

    #[test]
    fn test_describes_pod() {
        let pod = Pod {
            namespace: "default".to_string(),
            name: "web".to_string(),
            ready: 0,
            total: 1,
            status: "Pending".to_string(),
            restarts: "2".to_string(),
            age: "5m".to_string(),
        };
        let viewport = ViewportState::new(80, 24);
        let ops = render_status_area(
            Some(Entity::Pod(&pod)),
            &CollapseState::default(),
            &viewport,
            &Theme::default(),
            false,
        );
        assert_eq!(texts(&ops, 20), vec!["Pod:", "default/web"]);
        assert_eq!(
            texts(&ops, 21),
            vec!["Ready:", "0/1  Status: Pending  Restarts: 2  Age: 5m"]
        );
        assert_eq!(texts(&ops, 22), vec!["Health:", "failing"]);
    }

    #[test]
    fn test_describes_error() {
        let viewport = ViewportState::new(80, 24);
        let ops = render_status_area(
            Some(Entity::Error("timeout")),
            &CollapseState::default(),
            &viewport,
            &Theme::default(),
            false,
        );
        assert_eq!(texts(&ops, 20), vec!["Error:", "timeout"]);
    }
}
