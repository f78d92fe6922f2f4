pub mod overtime;
pub mod worked;

pub use overtime::overtime_hours;
pub use worked::worked_hours;
