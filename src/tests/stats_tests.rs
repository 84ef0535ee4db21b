#[cfg(test)]
mod tests {
    use crate::shapes::{
        enums::AttendanceMark::{self, *},
        stats::compute_stats,
    };

    #[test]
    fn one_of_each_mark() {
        let stats = compute_stats(&[Some(Present), Some(Absent), Some(Injured)]);
        assert_eq!((stats.present, stats.absent, stats.injured), (1, 1, 1));
        assert!((stats.percentage - 1.0 / 3.0).abs() < f64::EPSILON);
        assert_eq!(stats.percentage_label(), "33%");
    }

    #[test]
    fn empty_and_unset_sequences_yield_zero() {
        for attendance in [vec![], vec![None, None]] {
            let stats = compute_stats(&attendance);
            assert_eq!(stats.recorded(), 0);
            assert_eq!(stats.percentage, 0.0);
            assert_eq!(stats.percentage_label(), "0%");
        }
    }

    #[test]
    fn unset_slots_are_left_out_of_the_ratio() {
        let stats = compute_stats(&[Some(Present), None, None, Some(Present)]);
        assert_eq!(stats.recorded(), 2);
        assert_eq!(stats.percentage, 1.0);
        assert_eq!(stats.percentage_label(), "100%");
    }

    #[test]
    fn injuries_lower_the_ratio() {
        let stats = compute_stats(&[Some(Present), Some(Injured)]);
        assert_eq!(stats.percentage, 0.5);
        assert_eq!(stats.percentage_label(), "50%");
    }

    #[test]
    fn label_rounds_to_nearest_integer() {
        let stats = compute_stats(&[Some(Present), Some(Present), Some(Absent)]);
        assert_eq!(stats.percentage_label(), "67%");
    }

    #[test]
    fn counts_and_ratio_stay_in_bounds() {
        let marks: [Option<AttendanceMark>; 4] = [None, Some(Present), Some(Absent), Some(Injured)];
        // every sequence of length 0..=4 over the four slot states
        for len in 0..=4u32 {
            for n in 0..4usize.pow(len) {
                let attendance: Vec<Option<AttendanceMark>> = (0..len)
                    .map(|i| marks[(n / 4usize.pow(i)) % 4])
                    .collect();
                let stats = compute_stats(&attendance);
                assert!(stats.recorded() <= attendance.len());
                assert!((0.0..=1.0).contains(&stats.percentage));
                if stats.recorded() == 0 {
                    assert_eq!(stats.percentage, 0.0);
                }
            }
        }
    }
}
