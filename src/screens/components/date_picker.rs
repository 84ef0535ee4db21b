use chrono::{Datelike, NaiveDate};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use crate::errors::{AppError, ValidationError};

/// A `yyyy-mm-dd` input that only accepts digits forming a real date.
#[derive(Debug)]
pub struct DatePicker {
    year: String,
    month: String,
    day: String,
    label: String,
    pub writing_mode: bool,
}

impl DatePicker {
    pub fn new(label: String, writing_mode: bool, initial: Option<NaiveDate>) -> Self {
        let (year, month, day) = match initial {
            Some(date) => (
                format!("{:04}", date.year()),
                format!("{:02}", date.month()),
                format!("{:02}", date.day()),
            ),
            None => (String::new(), String::new(), String::new()),
        };
        Self {
            year,
            month,
            day,
            label,
            writing_mode,
        }
    }

    fn placeholder(value: &str, width: usize) -> String {
        format!("{}{}", value, "_".repeat(width.saturating_sub(value.len())))
    }

    pub fn render(&self, f: &mut Frame, container: Rect) {
        let text = format!(
            "{} (yyyy-mm-dd): {}-{}-{}",
            self.label,
            Self::placeholder(&self.year, 4),
            Self::placeholder(&self.month, 2),
            Self::placeholder(&self.day, 2),
        );
        let widget = Paragraph::new(text).style(if self.writing_mode {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        });
        f.render_widget(widget, container);
    }

    pub fn handle_backspace(&mut self) {
        if !self.writing_mode {
            return;
        }
        if !self.day.is_empty() {
            self.day.pop();
        } else if !self.month.is_empty() {
            self.month.pop();
        } else {
            self.year.pop();
        }
    }

    pub fn handle_char(&mut self, c: char) {
        if !self.writing_mode || !c.is_ascii_digit() {
            return;
        }
        if self.year.len() < 4 {
            if !(self.year.is_empty() && c == '0') {
                self.year.push(c);
            }
        } else if self.month.len() < 2 {
            self.push_month(c);
        } else if self.day.len() < 2 {
            self.push_day(c);
        }
    }

    fn push_month(&mut self, c: char) {
        match (self.month.chars().next(), c) {
            (None, '0' | '1') => self.month.push(c),
            (None, '2'..='9') => {
                self.month.push('0');
                self.month.push(c);
            }
            (Some('0'), '1'..='9') | (Some('1'), '0'..='2') => self.month.push(c),
            _ => {}
        }
    }

    fn push_day(&mut self, c: char) {
        let year: i32 = self.year.parse().unwrap_or(0);
        let month: u32 = self.month.parse().unwrap_or(0);
        let Some(max_days) = days_in_month(year, month) else {
            return;
        };
        if self.day.is_empty() {
            match c {
                '0'..='2' => self.day.push(c),
                '3' if max_days >= 30 => self.day.push('3'),
                _ => self.day.push_str(&format!("0{}", c)),
            }
        } else {
            let value = format!("{}{}", self.day, c);
            if value
                .parse::<u32>()
                .is_ok_and(|val| (1..=max_days).contains(&val))
            {
                self.day.push(c);
            }
        }
    }

    /// The typed date, once every field is complete.
    pub fn get_selected_value(&self) -> Result<NaiveDate, AppError> {
        let s = format!("{}-{}-{}", self.year, self.month, self.day);
        if self.year.len() != 4 || self.month.len() != 2 || self.day.len() != 2 {
            return Err(AppError::Validation(ValidationError::InvalidDate(s)));
        }
        NaiveDate::parse_from_str(&s, "%Y-%m-%d")
            .map_err(|_| AppError::Validation(ValidationError::InvalidDate(s)))
    }
}

fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}
