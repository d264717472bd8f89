use super::actions::Action;
use crate::backend::ContactBackend;
use crate::dashboard::Command;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

/// Runs backend requests off the UI loop and reports each outcome as an
/// [`Action`] on the channel returned by [`TaskManager::new`].
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Spawn the request described by `command`
    pub fn spawn_command(&mut self, backend: Arc<dyn ContactBackend>, command: Command) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let action_sender = self.action_sender.clone();
        let description = describe(&command);
        log::debug!("Background: spawning task {} ({})", task_id, description);

        let handle = tokio::spawn(async move {
            let action = match command {
                Command::FetchContacts => Action::ContactsLoaded(backend.fetch_contacts().await),
                Command::FetchGroups => Action::GroupsLoaded(backend.fetch_groups().await),
                Command::FetchUsers => Action::UsersLoaded(backend.fetch_users().await),
                Command::UpdateContact(update) => {
                    let contact_id = update.contact_id.clone();
                    let result = backend.update_contact(update).await;
                    Action::ContactUpdated { contact_id, result }
                }
                Command::DeleteContact(contact_id) => {
                    let result = backend.delete_contact(contact_id.clone()).await;
                    Action::ContactDeleted { contact_id, result }
                }
            };
            // The receiver is gone only during shutdown.
            let _ = action_sender.send(action);
        });

        let task = BackgroundTask {
            id: task_id,
            handle,
            description,
            started_at: std::time::Instant::now(),
        };

        self.tasks.insert(task_id, task);
        task_id
    }

    /// Forget finished tasks, returning their ids. Their results were already
    /// sent over the action channel.
    pub fn cleanup_finished_tasks(&mut self) -> Vec<TaskId> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        for task_id in &finished {
            if let Some(task) = self.tasks.remove(task_id) {
                log::debug!(
                    "Background: task {} ({}) finished after {:?}",
                    task.id,
                    task.description,
                    task.started_at.elapsed()
                );
            }
        }

        finished
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.values().filter(|task| !task.handle.is_finished()).count()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        self.cancel_all_tasks();
    }
}

fn describe(command: &Command) -> String {
    match command {
        Command::FetchContacts => "getContacts".to_string(),
        Command::FetchGroups => "getGroups".to_string(),
        Command::FetchUsers => "getUsers".to_string(),
        Command::UpdateContact(update) => format!("updateContact {}", update.contact_id),
        Command::DeleteContact(contact_id) => format!("deleteContact {}", contact_id),
    }
}
