use crate::api::Student;
use anyhow::Context;
use chrono::{NaiveDate, SecondsFormat};

pub const UPDATE_FAILED: &str = "Failed to update attendance. Please try again.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Present,
    Absent,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [StatusFilter::All, StatusFilter::Present, StatusFilter::Absent];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Present => "present",
            StatusFilter::Absent => "absent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All Students",
            StatusFilter::Present => "Present",
            StatusFilter::Absent => "Absent",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "present" => StatusFilter::Present,
            "absent" => StatusFilter::Absent,
            _ => StatusFilter::All,
        }
    }

    pub fn matches(&self, student: &Student) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Present => student.has_attended,
            StatusFilter::Absent => !student.has_attended,
        }
    }
}

/// Case-insensitive substring match on name or roll number.
pub fn matches_query(student: &Student, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    needle.is_empty()
        || student.name.to_lowercase().contains(&needle)
        || student.roll_no.to_lowercase().contains(&needle)
}

pub fn filter_students(students: &[Student], query: &str, filter: StatusFilter) -> Vec<Student> {
    students
        .iter()
        .filter(|s| filter.matches(s) && matches_query(s, query))
        .cloned()
        .collect()
}

pub fn status_label(has_attended: bool) -> &'static str {
    if has_attended {
        "Present"
    } else {
        "Absent"
    }
}

/// Row editor. At most one row is edited; saving needs an explicit choice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditState {
    pub editing_id: Option<String>,
    pub selection: Option<bool>,
}

impl EditState {
    pub fn start(&mut self, id: &str) {
        self.editing_id = Some(id.to_string());
        self.selection = None;
    }

    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    /// Accepts the `<select>` value: `""`, `"present"` or `"absent"`.
    pub fn select(&mut self, value: &str) {
        self.selection = match value {
            "present" => Some(true),
            "absent" => Some(false),
            _ => None,
        };
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.editing_id.as_deref() == Some(id)
    }

    pub fn can_save(&self) -> bool {
        self.editing_id.is_some() && self.selection.is_some()
    }

    pub fn pending_save(&self) -> Option<(String, bool)> {
        match (&self.editing_id, self.selection) {
            (Some(id), Some(value)) => Some((id.clone(), value)),
            _ => None,
        }
    }
}

/// Prefixes cells a spreadsheet would evaluate as a formula.
fn guard_formula(value: &str) -> std::borrow::Cow<'_, str> {
    if matches!(value.chars().next(), Some('=' | '+' | '-' | '@')) {
        format!("'{}", value).into()
    } else {
        value.into()
    }
}

pub fn roster_csv(students: &[Student]) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["Name", "Roll No", "Class", "Status", "Time"])?;
    for student in students {
        let time = student
            .attended_at
            .map(|at| at.to_rfc3339_opts(SecondsFormat::Secs, true))
            .unwrap_or_else(|| "N/A".to_string());
        writer.write_record([
            &*guard_formula(&student.name),
            &*guard_formula(&student.roll_no),
            &*guard_formula(&student.class_name),
            status_label(student.has_attended),
            time.as_str(),
        ])?;
    }
    writer.flush()?;
    let bytes = writer
        .into_inner()
        .map_err(|err| err.into_error())
        .context("failed to finish CSV buffer")?;
    String::from_utf8(bytes).context("CSV output is not UTF-8")
}

pub fn report_filename(date: NaiveDate) -> String {
    format!("Attendance_Report_{}.csv", date.format("%Y-%m-%d"))
}
