use thiserror::Error;

/// Errors raised while building menu data from user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    #[error("menu item id must not be empty")]
    EmptyId,
    #[error("duplicate menu item id '{0}'")]
    DuplicateId(String),
    #[error("unknown course '{0}', expected starter, main or dessert")]
    UnknownCourse(String),
}
