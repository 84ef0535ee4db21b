use crate::{
    errors::{AppError, SyncError, ValidationError},
    localization::current_labels,
    shapes::{enums::AttendanceMark, player::PlayerEntry, stats::AttendanceStats},
};
use chrono::NaiveDate;
use std::collections::HashSet;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Date suggested for the first training when the roster has none.
pub fn fallback_training_date() -> NaiveDate {
    ymd(2025, 8, 1)
}

/// A user intent that changes the roster.
#[derive(Debug, Clone, PartialEq)]
pub enum RosterAction {
    AddPlayer,
    RemovePlayer(u32),
    RenamePlayer(u32, String),
    SetAttendance(u32, usize, Option<AttendanceMark>),
    CycleAttendance(u32, usize),
    AddTrainingDate(NaiveDate),
    RemoveTrainingDate(NaiveDate),
    ReplaceAll(Vec<PlayerEntry>, Vec<NaiveDate>),
}

/// The players and the training dates their attendance is indexed by.
///
/// A `Roster` is an immutable value: every operation returns a new roster
/// and leaves `self` untouched, so a rejected operation never leaves a
/// half-applied change behind. The following holds for every value that can
/// be observed from outside this module:
///
/// - each player has exactly one attendance slot per training date, and
///   slot `i` refers to `training_dates[i]`;
/// - training dates are sorted ascending and contain no duplicates;
/// - player ids are unique.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Roster {
    players: Vec<PlayerEntry>,
    training_dates: Vec<NaiveDate>,
}

impl Roster {
    /// The example roster shown on first start.
    pub fn seeded() -> Self {
        use AttendanceMark::*;
        Self {
            players: vec![
                PlayerEntry {
                    id: 1,
                    name: "Ana García".to_string(),
                    attendance: vec![Some(Present), Some(Present), Some(Absent)],
                },
                PlayerEntry {
                    id: 2,
                    name: "Juan Pérez".to_string(),
                    attendance: vec![Some(Present), Some(Absent), Some(Injured)],
                },
                PlayerEntry {
                    id: 3,
                    name: "María López".to_string(),
                    attendance: vec![Some(Present), Some(Present), Some(Present)],
                },
            ],
            training_dates: vec![ymd(2025, 8, 1), ymd(2025, 8, 2), ymd(2025, 8, 3)],
        }
    }

    /// Builds a roster from untrusted parts, rejecting anything that breaks
    /// the alignment, ordering or id invariants.
    pub fn replace_all(
        players: Vec<PlayerEntry>,
        training_dates: Vec<NaiveDate>,
    ) -> Result<Self, AppError> {
        if let Some(pair) = training_dates.windows(2).find(|w| w[0] >= w[1]) {
            return Err(malformed(format!(
                "training dates must be sorted and unique ({} before {})",
                pair[0], pair[1]
            )));
        }
        let mut ids = HashSet::with_capacity(players.len());
        for p in &players {
            if !ids.insert(p.id) {
                return Err(malformed(format!("duplicate player id {}", p.id)));
            }
            if p.attendance.len() != training_dates.len() {
                return Err(malformed(format!(
                    "player {} has {} attendance slots, expected {}",
                    p.id,
                    p.attendance.len(),
                    training_dates.len()
                )));
            }
        }
        Ok(Self {
            players,
            training_dates,
        })
    }

    pub fn players(&self) -> &[PlayerEntry] {
        &self.players
    }

    pub fn training_dates(&self) -> &[NaiveDate] {
        &self.training_dates
    }

    pub fn find_player(&self, player_id: u32) -> Option<&PlayerEntry> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn totals(&self) -> Vec<(u32, AttendanceStats)> {
        self.players.iter().map(|p| (p.id, p.stats())).collect()
    }

    fn next_player_id(&self) -> u32 {
        self.players.iter().map(|p| p.id).max().map_or(1, |id| id + 1)
    }

    fn position(&self, player_id: u32) -> Result<usize, AppError> {
        self.players
            .iter()
            .position(|p| p.id == player_id)
            .ok_or(AppError::Validation(ValidationError::PlayerNotFound(
                player_id,
            )))
    }

    pub fn apply(&self, action: RosterAction) -> Result<Self, AppError> {
        match action {
            RosterAction::AddPlayer => Ok(self.add_player()),
            RosterAction::RemovePlayer(id) => self.remove_player(id),
            RosterAction::RenamePlayer(id, name) => self.rename_player(id, &name),
            RosterAction::SetAttendance(id, index, mark) => self.set_attendance(id, index, mark),
            RosterAction::CycleAttendance(id, index) => self.cycle_attendance(id, index),
            RosterAction::AddTrainingDate(date) => self.add_training_date(date),
            RosterAction::RemoveTrainingDate(date) => Ok(self.remove_training_date(date)),
            RosterAction::ReplaceAll(players, dates) => Self::replace_all(players, dates),
        }
    }

    pub fn add_player(&self) -> Self {
        let name = format!(
            "{} {}",
            current_labels().default_player_name,
            self.players.len() + 1
        );
        let mut next = self.clone();
        next.players.push(PlayerEntry::new(
            self.next_player_id(),
            name,
            self.training_dates.len(),
        ));
        next
    }

    pub fn remove_player(&self, player_id: u32) -> Result<Self, AppError> {
        let position = self.position(player_id)?;
        let mut next = self.clone();
        next.players.remove(position);
        Ok(next)
    }

    /// Renames a player. A blank name keeps the previous one.
    pub fn rename_player(&self, player_id: u32, name: &str) -> Result<Self, AppError> {
        let position = self.position(player_id)?;
        let name = name.trim();
        let mut next = self.clone();
        if !name.is_empty() {
            next.players[position].name = name.to_string();
        }
        Ok(next)
    }

    pub fn set_attendance(
        &self,
        player_id: u32,
        date_index: usize,
        mark: Option<AttendanceMark>,
    ) -> Result<Self, AppError> {
        let position = self.position(player_id)?;
        self.check_date_index(date_index)?;
        let mut next = self.clone();
        next.players[position].attendance[date_index] = mark;
        Ok(next)
    }

    pub fn cycle_attendance(&self, player_id: u32, date_index: usize) -> Result<Self, AppError> {
        let position = self.position(player_id)?;
        self.check_date_index(date_index)?;
        let current = self.players[position].attendance[date_index];
        self.set_attendance(player_id, date_index, AttendanceMark::cycle(current))
    }

    pub fn add_training_date(&self, date: NaiveDate) -> Result<Self, AppError> {
        match self.training_dates.binary_search(&date) {
            Ok(_) => Err(AppError::Validation(ValidationError::DuplicateDate(date))),
            Err(index) => {
                let mut next = self.clone();
                next.training_dates.insert(index, date);
                for p in next.players.iter_mut() {
                    p.attendance.insert(index, None);
                }
                Ok(next)
            }
        }
    }

    /// Removes a training date and its slot from every player. Unknown dates
    /// leave the roster unchanged.
    pub fn remove_training_date(&self, date: NaiveDate) -> Self {
        let mut next = self.clone();
        if let Ok(index) = self.training_dates.binary_search(&date) {
            next.training_dates.remove(index);
            for p in next.players.iter_mut() {
                p.attendance.remove(index);
            }
        }
        next
    }

    /// The day after the latest training, or the fallback date when there
    /// are no trainings yet.
    pub fn next_suggested_date(&self) -> NaiveDate {
        match self.training_dates.last() {
            Some(last) => last.succ_opt().unwrap_or(*last),
            None => fallback_training_date(),
        }
    }

    fn check_date_index(&self, date_index: usize) -> Result<(), AppError> {
        if date_index < self.training_dates.len() {
            Ok(())
        } else {
            Err(AppError::Validation(ValidationError::DateIndexOutOfRange {
                index: date_index,
                len: self.training_dates.len(),
            }))
        }
    }
}

fn malformed(message: String) -> AppError {
    AppError::Sync(SyncError::MalformedPayload(message))
}
