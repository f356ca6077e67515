//! Refetching Actions
//!
//! Every mutation is followed by a full refetch of the affected collection;
//! the caller replaces its snapshot with what comes back. There is no
//! optimistic patching.

use crate::api::{ApiError, ApiResult, ChoreApi};
use crate::forms::{NewRoommate, NewTask};
use crate::models::{Roommate, Task, TaskStatus};

/// Refetch even when the backend rejected the mutation: a task deleted
/// elsewhere simply disappears from the list.
fn tolerate_rejection(action: &str, result: ApiResult<()>) -> ApiResult<()> {
    match result {
        Err(ApiError::Rejected { status, message }) => {
            log::warn!("{} rejected ({}): {}", action, status, message);
            Ok(())
        }
        other => other,
    }
}

/// Set a task's status to done, then refetch tasks
pub async fn mark_done<A: ChoreApi + ?Sized>(api: &A, id: u32) -> ApiResult<Vec<Task>> {
    log::info!("marking task {} done", id);
    tolerate_rejection("mark done", api.update_task_status(id, TaskStatus::Done).await)?;
    api.list_tasks().await
}

/// Delete a task, then refetch tasks
pub async fn delete_task<A: ChoreApi + ?Sized>(api: &A, id: u32) -> ApiResult<Vec<Task>> {
    log::info!("deleting task {}", id);
    tolerate_rejection("delete task", api.delete_task(id).await)?;
    api.list_tasks().await
}

/// Create a task, then refetch tasks. Creation is assumed to succeed.
pub async fn create_task<A: ChoreApi + ?Sized>(api: &A, task: &NewTask) -> ApiResult<Vec<Task>> {
    log::info!("creating task {:?}", task.title);
    tolerate_rejection("create task", api.create_task(task).await)?;
    api.list_tasks().await
}

/// Create a roommate, then refetch roommates. A rejection is returned so
/// the caller can show the server's message.
pub async fn create_roommate<A: ChoreApi + ?Sized>(api: &A, roommate: &NewRoommate) -> ApiResult<Vec<Roommate>> {
    log::info!("creating roommate {:?}", roommate.name);
    api.create_roommate(roommate).await?;
    api.list_roommates().await
}

/// Delete a roommate, then refetch roommates
pub async fn delete_roommate<A: ChoreApi + ?Sized>(api: &A, id: u32) -> ApiResult<Vec<Roommate>> {
    log::info!("deleting roommate {}", id);
    tolerate_rejection("delete roommate", api.delete_roommate(id).await)?;
    api.list_roommates().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{StatusFilter, TaskFilters};
    use crate::models::{Priority, Room};
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};

    /// In-memory backend mirroring the REST semantics
    #[derive(Default)]
    struct MemoryApi {
        tasks: RefCell<Vec<Task>>,
        roommates: RefCell<Vec<Roommate>>,
        next_id: Cell<u32>,
        offline: Cell<bool>,
    }

    impl MemoryApi {
        fn with_tasks(tasks: Vec<Task>) -> Self {
            let api = MemoryApi::default();
            api.next_id.set(100);
            *api.tasks.borrow_mut() = tasks;
            api
        }

        fn check_online(&self) -> ApiResult<()> {
            if self.offline.get() {
                return Err(ApiError::Transport("connection refused".to_string()));
            }
            Ok(())
        }

        fn allocate_id(&self) -> u32 {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            id
        }
    }

    #[async_trait(?Send)]
    impl ChoreApi for MemoryApi {
        async fn list_rooms(&self) -> ApiResult<Vec<Room>> {
            self.check_online()?;
            Ok(Vec::new())
        }

        async fn list_roommates(&self) -> ApiResult<Vec<Roommate>> {
            self.check_online()?;
            Ok(self.roommates.borrow().clone())
        }

        async fn create_roommate(&self, roommate: &NewRoommate) -> ApiResult<()> {
            self.check_online()?;
            if roommate.name.is_empty() {
                return Err(ApiError::rejected(400, r#"{"error": "Name is required"}"#));
            }
            let id = self.allocate_id();
            self.roommates.borrow_mut().push(Roommate {
                id,
                name: roommate.name.clone(),
                email: roommate.email.clone(),
            });
            Ok(())
        }

        async fn delete_roommate(&self, id: u32) -> ApiResult<()> {
            self.check_online()?;
            self.roommates.borrow_mut().retain(|r| r.id != id);
            Ok(())
        }

        async fn list_tasks(&self) -> ApiResult<Vec<Task>> {
            self.check_online()?;
            Ok(self.tasks.borrow().clone())
        }

        async fn create_task(&self, task: &NewTask) -> ApiResult<()> {
            self.check_online()?;
            let id = self.allocate_id();
            self.tasks.borrow_mut().push(Task {
                id,
                title: task.title.clone(),
                description: Some(task.description.clone()),
                roommate_id: task.roommate_id,
                room_id: task.room_id,
                room_name: None,
                priority: task.priority,
                due_date: task.due_date,
                status: TaskStatus::Pending,
            });
            Ok(())
        }

        async fn update_task_status(&self, id: u32, status: TaskStatus) -> ApiResult<()> {
            self.check_online()?;
            let mut tasks = self.tasks.borrow_mut();
            let task = tasks
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or_else(|| ApiError::rejected(404, ""))?;
            task.status = status;
            Ok(())
        }

        async fn delete_task(&self, id: u32) -> ApiResult<()> {
            self.check_online()?;
            self.tasks.borrow_mut().retain(|t| t.id != id);
            Ok(())
        }
    }

    fn make_task(id: u32) -> Task {
        Task {
            id,
            title: format!("Task {}", id),
            description: None,
            roommate_id: None,
            room_id: None,
            room_name: None,
            priority: Priority::Medium,
            due_date: None,
            status: TaskStatus::Pending,
        }
    }

    fn ids_under(tasks: &[Task], status: StatusFilter) -> Vec<u32> {
        let filters = TaskFilters { status, ..Default::default() };
        filters.apply(tasks).iter().map(|t| t.id).collect()
    }

    #[tokio::test]
    async fn test_mark_done_moves_task_to_done() {
        let api = MemoryApi::with_tasks(vec![make_task(1), make_task(2)]);

        let tasks = mark_done(&api, 1).await.expect("mark done failed");

        assert_eq!(ids_under(&tasks, StatusFilter::Pending), vec![2]);
        assert_eq!(ids_under(&tasks, StatusFilter::Done), vec![1]);
    }

    #[tokio::test]
    async fn test_delete_removes_id() {
        let api = MemoryApi::with_tasks(vec![make_task(1), make_task(2), make_task(3)]);

        let tasks = delete_task(&api, 2).await.expect("delete failed");

        assert_eq!(tasks.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[tokio::test]
    async fn test_missing_task_still_refetches() {
        let api = MemoryApi::with_tasks(vec![make_task(1)]);

        let tasks = mark_done(&api, 42).await.expect("rejection should be tolerated");
        assert_eq!(tasks.len(), 1);

        let tasks = delete_task(&api, 42).await.expect("delete of unknown id");
        assert_eq!(tasks.len(), 1);
    }

    #[tokio::test]
    async fn test_transport_failure_is_returned() {
        let api = MemoryApi::with_tasks(vec![make_task(1)]);
        api.offline.set(true);

        let err = mark_done(&api, 1).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[tokio::test]
    async fn test_create_task_appears_after_refetch() {
        let api = MemoryApi::with_tasks(Vec::new());
        let task = NewTask {
            title: "Water plants".to_string(),
            description: String::new(),
            roommate_id: Some(1),
            room_id: None,
            priority: Priority::High,
            due_date: None,
        };

        let tasks = create_task(&api, &task).await.expect("create failed");

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Water plants");
        assert_eq!(tasks[0].status, TaskStatus::Pending);
    }

    #[tokio::test]
    async fn test_create_roommate_surfaces_server_error() {
        let api = MemoryApi::with_tasks(Vec::new());
        let empty = NewRoommate { name: String::new(), email: "a@b".to_string() };

        let err = create_roommate(&api, &empty).await.unwrap_err();
        assert_eq!(err.to_string(), "Name is required");

        let ok = NewRoommate { name: "Robin".to_string(), email: "robin@home".to_string() };
        let roommates = create_roommate(&api, &ok).await.expect("create failed");
        assert_eq!(roommates.len(), 1);

        let roommates = delete_roommate(&api, roommates[0].id).await.expect("delete failed");
        assert!(roommates.is_empty());
    }
}
