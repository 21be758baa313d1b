//! Application services: one use case per task workflow.

mod create_task;
mod delete_task;
mod dto;
mod error;
mod get_all_tasks;
mod get_task_by_id;
mod title;
mod update_task;
mod use_cases;

pub use create_task::CreateTaskUseCase;
pub use delete_task::DeleteTaskUseCase;
pub use dto::{
    CreateTaskRequest, FieldUpdate, MAX_TITLE_CHARS, TaskResponse, UpdateTaskRequest,
    ValidationErrors,
};
pub use error::{TaskServiceError, TaskServiceResult};
pub use get_all_tasks::GetAllTasksUseCase;
pub use get_task_by_id::GetTaskByIdUseCase;
pub use update_task::UpdateTaskUseCase;
pub use use_cases::TaskUseCases;
