#[cfg(test)]
mod tests {
    use crate::{
        localization::labels_for,
        shapes::{enums::LanguageEnum, roster::Roster},
        sync::sheet::{to_tabular_export, write_csv},
    };
    use std::fs::{read_to_string, remove_file};

    #[test]
    fn header_row_lists_dates_between_name_and_totals() {
        let grid = to_tabular_export(&Roster::seeded(), labels_for(LanguageEnum::En));
        assert_eq!(
            grid[0],
            vec![
                "Player Name",
                "01/08/25",
                "02/08/25",
                "03/08/25",
                "Total Present",
                "Total Absent",
                "Total Injured",
                "% Attendance"
            ]
        );
    }

    #[test]
    fn one_row_per_player_with_symbols_and_totals() {
        let roster = Roster::seeded().add_player();
        let grid = to_tabular_export(&roster, labels_for(LanguageEnum::En));
        assert_eq!(grid.len(), 5);
        assert_eq!(
            grid[2],
            vec!["Juan Pérez", "P", "A", "L", "1", "1", "1", "33%"]
        );
        assert_eq!(grid[3][1..], ["P", "P", "P", "3", "0", "0", "100%"]);
        assert_eq!(grid[4][1..], ["", "", "", "0", "0", "0", "0%"]);
    }

    #[test]
    fn empty_roster_exports_only_the_header() {
        let grid = to_tabular_export(&Roster::default(), labels_for(LanguageEnum::En));
        assert_eq!(grid.len(), 1);
        assert_eq!(grid[0].len(), 5);
    }

    #[test]
    fn csv_file_contains_every_row() {
        let path = std::env::temp_dir().join(format!(
            "attend4all-sheet-test-{}.csv",
            std::process::id()
        ));
        let grid = to_tabular_export(&Roster::seeded(), labels_for(LanguageEnum::En));
        write_csv(&grid, &path).expect("expected the csv to be written");
        let content = read_to_string(&path).expect("expected the csv to be readable");
        let _ = remove_file(&path);
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Player Name,01/08/25"));
        assert_eq!(lines[1], "Ana García,P,P,A,2,1,0,67%");
    }
}
