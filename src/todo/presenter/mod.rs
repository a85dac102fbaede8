//! Presenters shaping storage results for the console views.

mod todo;
mod todo_list;

pub use todo::{NewTodoRequest, TodoPresenter, TodoPresenterError, TodoPresenterResult};
pub use todo_list::TodoListPresenter;
