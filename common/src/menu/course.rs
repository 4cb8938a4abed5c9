use std::fmt;
use std::str::FromStr;

use crate::menu::MenuError;

/// The courses a dish can belong to.
///
/// The declaration order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Course {
    Starter,
    Main,
    Dessert,
}

impl Course {
    pub const COUNT: usize = 3;

    /// Every course in display order.
    pub const ALL: [Course; Course::COUNT] = [Course::Starter, Course::Main, Course::Dessert];

    pub fn label(&self) -> &'static str {
        match self {
            Course::Starter => "Starter",
            Course::Main => "Main",
            Course::Dessert => "Dessert",
        }
    }

    /// Position of the course in [`Course::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Course {
    type Err = MenuError;

    /// Parses a course name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "starter" | "starters" => Ok(Course::Starter),
            "main" | "mains" => Ok(Course::Main),
            "dessert" | "desserts" => Ok(Course::Dessert),
            _ => Err(MenuError::UnknownCourse(s.to_string())),
        }
    }
}
