use crate::shapes::enums::AttendanceMark;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AttendanceStats {
    pub present: usize,
    pub absent: usize,
    pub injured: usize,
    /// `present / recorded`, in `[0, 1]`.
    pub percentage: f64,
}

impl AttendanceStats {
    /// Sessions with a mark. Unset slots never count.
    pub fn recorded(&self) -> usize {
        self.present + self.absent + self.injured
    }

    /// Whole-number percentage, e.g. `"67%"`.
    pub fn percentage_label(&self) -> String {
        format!("{}%", (self.percentage * 100.0).round() as u32)
    }
}

/// Counts the marks of a single player and derives the attendance ratio.
///
/// Absences and injuries both count as recorded sessions and lower the
/// ratio. Slots with no mark are left out of the denominator.
pub fn compute_stats(attendance: &[Option<AttendanceMark>]) -> AttendanceStats {
    let mut stats = attendance
        .iter()
        .flatten()
        .fold(AttendanceStats::default(), |mut acc, mark| {
            match mark {
                AttendanceMark::Present => acc.present += 1,
                AttendanceMark::Absent => acc.absent += 1,
                AttendanceMark::Injured => acc.injured += 1,
            }
            acc
        });
    let recorded = stats.recorded();
    stats.percentage = if recorded == 0 {
        0.0
    } else {
        stats.present as f64 / recorded as f64
    };
    stats
}
