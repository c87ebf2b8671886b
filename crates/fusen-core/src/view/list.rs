//! List rendering: a pure function from snapshot to text.
//!
//! もともと 2 つあった表示バリアント（アイコン / テキストラベル）は
//! LabelStyle 1 つに統合した。描画はスナップショットに対する純関数で、
//! collection には触れない。

use crate::domain::Task;

/// Control labels for a row: icons or plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelStyle {
    #[default]
    Text,
    Icons,
}

impl LabelStyle {
    fn toggle_label(self, completed: bool) -> &'static str {
        match (self, completed) {
            (LabelStyle::Text, false) => "Complete",
            (LabelStyle::Text, true) => "Undo",
            (LabelStyle::Icons, false) => "✔ Complete",
            (LabelStyle::Icons, true) => "✔ Undo",
        }
    }

    fn edit_label(self) -> &'static str {
        match self {
            LabelStyle::Text => "Edit",
            LabelStyle::Icons => "✎ Edit",
        }
    }

    fn delete_label(self) -> &'static str {
        match self {
            LabelStyle::Text => "Delete",
            LabelStyle::Icons => "✖ Delete",
        }
    }
}

// Strikethrough + dim for completed titles.
const DONE_ON: &str = "\x1b[9;2m";
const DONE_OFF: &str = "\x1b[0m";

/// Render the collection, one row per task, in insertion order.
///
/// Completed titles are struck through and dimmed. Each row carries the
/// toggle/edit/delete control hints for that row's id. No pagination,
/// sorting, or filtering.
pub fn render_list(tasks: &[Task], style: LabelStyle) -> String {
    if tasks.is_empty() {
        return "  (no tasks)\n".to_string();
    }

    let mut out = String::new();
    for task in tasks {
        let title = if task.completed {
            format!("{DONE_ON}{}{DONE_OFF}", task.title)
        } else {
            task.title.clone()
        };
        out.push_str(&format!(
            "  [{}] {}  ({} | {} | {})\n",
            task.id,
            title,
            style.toggle_label(task.completed),
            style.edit_label(),
            style.delete_label(),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskId;

    fn task(id: i64, title: &str) -> Task {
        Task::new(TaskId::new(id), title)
    }

    #[test]
    fn empty_collection_has_a_placeholder() {
        assert_eq!(render_list(&[], LabelStyle::Text), "  (no tasks)\n");
    }

    #[test]
    fn rows_keep_insertion_order() {
        let out = render_list(&[task(1, "first"), task(2, "second")], LabelStyle::Text);
        let first = out.find("first").unwrap();
        let second = out.find("second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn completed_titles_are_struck_through() {
        let mut done = task(1, "done");
        done.completed = true;

        let out = render_list(&[done, task(2, "open")], LabelStyle::Text);
        assert!(out.contains(&format!("{DONE_ON}done{DONE_OFF}")));
        assert!(!out.contains(&format!("{DONE_ON}open")));
    }

    #[test]
    fn toggle_label_flips_with_completion() {
        let mut done = task(1, "done");
        done.completed = true;

        let out = render_list(&[done], LabelStyle::Text);
        assert!(out.contains("Undo"));

        let out = render_list(&[task(2, "open")], LabelStyle::Text);
        assert!(out.contains("Complete"));
    }

    #[test]
    fn icon_style_adds_icons_only() {
        let text = render_list(&[task(1, "A")], LabelStyle::Text);
        let icons = render_list(&[task(1, "A")], LabelStyle::Icons);
        assert!(!text.contains('✔'));
        assert!(icons.contains('✔'));
        assert!(icons.contains('✎'));
        assert!(icons.contains('✖'));
    }
}
