//! Task Checklist
//!
//! Ordered list of tasks in insertion order. Tasks are only ever added or
//! toggled, so positions are stable for the lifetime of the list.

use serde::{Deserialize, Serialize};

use crate::error::OasisError;
use crate::models::Task;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    /// Append an open task. Blank text (after trimming) is rejected and
    /// the list is left as it was; otherwise the text is kept as typed.
    pub fn add_task(&mut self, text: &str) -> Result<&Task, OasisError> {
        if text.trim().is_empty() {
            return Err(OasisError::BlankTask);
        }
        self.tasks.push(Task {
            text: text.to_string(),
            completed: false,
        });
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Flip the completed flag of the task at `index`.
    ///
    /// # Panics
    /// If `index` is out of bounds. Indices come from iterating this list.
    pub fn toggle_task(&mut self, index: usize) {
        let task = &mut self.tasks[index];
        task.completed = !task.completed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_is_ignored() {
        let mut list = TaskList::new();
        assert_eq!(list.add_task(""), Err(OasisError::BlankTask));
        assert_eq!(list.add_task("   "), Err(OasisError::BlankTask));
        assert_eq!(list.add_task("\t\n"), Err(OasisError::BlankTask));
        assert!(list.is_empty());
    }

    #[test]
    fn test_add_appends_open_task_at_end() {
        let mut list = TaskList::new();
        list.add_task("write report").unwrap();
        let added = list.add_task("buy milk").unwrap().clone();

        assert_eq!(added, Task { text: "buy milk".into(), completed: false });
        assert_eq!(list.len(), 2);
        assert_eq!(list.tasks()[0].text, "write report");
        assert_eq!(list.tasks()[1], added);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut list = TaskList::new();
        list.add_task("a").unwrap();
        list.add_task("b").unwrap();

        list.toggle_task(1);
        assert!(list.tasks()[1].completed);
        assert!(!list.tasks()[0].completed);
        assert_eq!(list.completed_count(), 1);

        list.toggle_task(1);
        assert!(!list.tasks()[1].completed);
        assert_eq!(list.tasks()[1].text, "b");
    }

    #[test]
    #[should_panic]
    fn test_toggle_out_of_range_panics() {
        let mut list = TaskList::new();
        list.toggle_task(0);
    }
}
