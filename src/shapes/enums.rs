use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{
    errors::{AppError, IOError},
    localization::current_labels,
};

/// The outcome recorded for a player on a training date.
///
/// A slot that has not been recorded yet is represented as `None` wherever a
/// mark is optional, so a slot has four states in total:
///
/// - **Present**: the player attended the session.
/// - **Absent**: the player missed the session.
/// - **Injured**: the player could not train because of an injury.
/// - *unset*: nothing recorded yet.
///
/// On the wire the marks travel as integers (`0`, `1`, `2`), unset as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum AttendanceMark {
    Present,
    Absent,
    Injured,
}

impl AttendanceMark {
    pub const ALL: [AttendanceMark; 3] = [
        AttendanceMark::Present,
        AttendanceMark::Absent,
        AttendanceMark::Injured,
    ];

    /// Advances a slot through `unset → Present → Absent → Injured → unset`.
    pub fn cycle(current: Option<AttendanceMark>) -> Option<AttendanceMark> {
        match current {
            None => Some(AttendanceMark::Present),
            Some(AttendanceMark::Present) => Some(AttendanceMark::Absent),
            Some(AttendanceMark::Absent) => Some(AttendanceMark::Injured),
            Some(AttendanceMark::Injured) => None,
        }
    }

    /// Single letter used in the spreadsheet export and in the table.
    pub fn symbol(mark: Option<AttendanceMark>) -> &'static str {
        match mark {
            Some(AttendanceMark::Present) => "P",
            Some(AttendanceMark::Absent) => "A",
            Some(AttendanceMark::Injured) => "L",
            None => "",
        }
    }

    pub fn friendly_name(&self) -> &'static str {
        match self {
            AttendanceMark::Present => current_labels().present,
            AttendanceMark::Absent => current_labels().absent,
            AttendanceMark::Injured => current_labels().injured,
        }
    }
}

impl fmt::Display for AttendanceMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AttendanceMark::Present => "present",
            AttendanceMark::Absent => "absent",
            AttendanceMark::Injured => "injured",
        };
        write!(f, "{}", label)
    }
}

impl From<AttendanceMark> for u8 {
    fn from(mark: AttendanceMark) -> Self {
        match mark {
            AttendanceMark::Present => 0,
            AttendanceMark::Absent => 1,
            AttendanceMark::Injured => 2,
        }
    }
}

impl TryFrom<u8> for AttendanceMark {
    type Error = String;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AttendanceMark::Present),
            1 => Ok(AttendanceMark::Absent),
            2 => Ok(AttendanceMark::Injured),
            _ => Err(format!("invalid attendance mark: {}", value)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageEnum {
    En,
    Es,
}

impl LanguageEnum {
    pub const ALL: [LanguageEnum; 2] = [LanguageEnum::En, LanguageEnum::Es];
}

impl fmt::Display for LanguageEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LanguageEnum::En => "English",
            LanguageEnum::Es => "Español",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for LanguageEnum {
    type Err = AppError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(LanguageEnum::En),
            "es" => Ok(LanguageEnum::Es),
            _ => Err(AppError::IO(IOError::EncodingError(format!(
                "invalid language: {}",
                s
            )))),
        }
    }
}

/// Every user intent a screen can bind to a key combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenActionEnum {
    Quit,
    Back,
    Confirm,
    Up,
    Down,
    Previous,
    Next,
    CycleMark,
    NewPlayer,
    RenamePlayer,
    RemovePlayer,
    AddTrainingDate,
    RemoveTrainingDate,
    SignIn,
    SignOut,
    SaveToDrive,
    LoadFromDrive,
    ExportToSheets,
    ExportCsv,
    Settings,
}

impl ScreenActionEnum {
    pub const ALL: [ScreenActionEnum; 20] = [
        ScreenActionEnum::Quit,
        ScreenActionEnum::Back,
        ScreenActionEnum::Confirm,
        ScreenActionEnum::Up,
        ScreenActionEnum::Down,
        ScreenActionEnum::Previous,
        ScreenActionEnum::Next,
        ScreenActionEnum::CycleMark,
        ScreenActionEnum::NewPlayer,
        ScreenActionEnum::RenamePlayer,
        ScreenActionEnum::RemovePlayer,
        ScreenActionEnum::AddTrainingDate,
        ScreenActionEnum::RemoveTrainingDate,
        ScreenActionEnum::SignIn,
        ScreenActionEnum::SignOut,
        ScreenActionEnum::SaveToDrive,
        ScreenActionEnum::LoadFromDrive,
        ScreenActionEnum::ExportToSheets,
        ScreenActionEnum::ExportCsv,
        ScreenActionEnum::Settings,
    ];

    pub fn description(&self) -> &'static str {
        let labels = current_labels();
        match self {
            ScreenActionEnum::Quit => labels.quit,
            ScreenActionEnum::Back => labels.back,
            ScreenActionEnum::Confirm => labels.confirm,
            ScreenActionEnum::Up => labels.up,
            ScreenActionEnum::Down => labels.down,
            ScreenActionEnum::Previous => labels.previous,
            ScreenActionEnum::Next => labels.next,
            ScreenActionEnum::CycleMark => labels.cycle_mark,
            ScreenActionEnum::NewPlayer => labels.new_player,
            ScreenActionEnum::RenamePlayer => labels.rename_player,
            ScreenActionEnum::RemovePlayer => labels.remove_player,
            ScreenActionEnum::AddTrainingDate => labels.add_training_date,
            ScreenActionEnum::RemoveTrainingDate => labels.remove_training_date,
            ScreenActionEnum::SignIn => labels.sign_in,
            ScreenActionEnum::SignOut => labels.sign_out,
            ScreenActionEnum::SaveToDrive => labels.save_to_drive,
            ScreenActionEnum::LoadFromDrive => labels.load_from_drive,
            ScreenActionEnum::ExportToSheets => labels.export_to_sheets,
            ScreenActionEnum::ExportCsv => labels.export_csv,
            ScreenActionEnum::Settings => labels.settings,
        }
    }
}
