use crate::model::LogicalField;

pub(crate) fn aliases(field: LogicalField) -> &'static [&'static str] {
    match field {
        LogicalField::EmployeeId => &["Employee ID", "Punch ID", "User ID"],
        LogicalField::Date => &["Date", "Shift Date", "Business Date"],
        LogicalField::FirstName => &["First Name", "First"],
        LogicalField::LastName => &["Last Name", "Last"],
        LogicalField::InTime => &["Clock In", "Start Time", "Scheduled Start"],
        LogicalField::OutTime => &["Clock Out", "End Time", "Scheduled End"],
        LogicalField::Role => &["Role", "Department"],
        LogicalField::Location => &["Location", "Store"],
    }
}
