use crate::shapes::{
    enums::AttendanceMark,
    stats::{compute_stats, AttendanceStats},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PlayerEntry {
    pub id: u32,
    pub name: String,
    /// One slot per training date, in the same order as the roster dates.
    pub attendance: Vec<Option<AttendanceMark>>,
}

impl PlayerEntry {
    pub fn new(id: u32, name: String, slots: usize) -> Self {
        Self {
            id,
            name,
            attendance: vec![None; slots],
        }
    }

    pub fn stats(&self) -> AttendanceStats {
        compute_stats(&self.attendance)
    }
}

impl std::fmt::Display for PlayerEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (#{})", self.name, self.id)
    }
}
