//! Task records.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{TaskId, TeamMemberId, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub priority: TaskPriority,
    pub completed: bool,
    pub assigned_to: TeamMemberId,
}

impl Task {
    /// Returns a copy with `completed` flipped.
    pub fn toggled(&self) -> Task {
        Task {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

/// Input for creating a task. New tasks start open.
#[derive(Debug, Clone)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub priority: TaskPriority,
    pub assigned_to: String,
}

impl TaskForm {
    pub fn into_record(self) -> Result<Task, ValidationError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::empty_field("title"));
        }

        Ok(Task {
            id: TaskId::generate(),
            title,
            description: self.description.trim().to_string(),
            due_date: self.due_date.trim().to_string(),
            priority: self.priority,
            completed: false,
            assigned_to: TeamMemberId::new(self.assigned_to.trim())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> TaskForm {
        TaskForm {
            title: "Enviar proposta".to_string(),
            description: String::new(),
            due_date: "30/10/2023".to_string(),
            priority: TaskPriority::High,
            assigned_to: "1".to_string(),
        }
    }

    #[test]
    fn new_tasks_start_open() {
        let task = form().into_record().unwrap();
        assert!(!task.completed);
        assert_eq!(task.priority, TaskPriority::High);
    }

    #[test]
    fn toggled_flips_completion_only() {
        let task = form().into_record().unwrap();
        let done = task.toggled();
        assert!(done.completed);
        assert_eq!(done.title, task.title);
        assert!(!done.toggled().completed);
    }

    #[test]
    fn blank_title_or_assignee_is_rejected() {
        assert!(TaskForm {
            title: "".to_string(),
            ..form()
        }
        .into_record()
        .is_err());
        assert!(TaskForm {
            assigned_to: " ".to_string(),
            ..form()
        }
        .into_record()
        .is_err());
    }
}
