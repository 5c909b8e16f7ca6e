use crate::model::LogicalField;

pub(crate) fn aliases(field: LogicalField) -> &'static [&'static str] {
    match field {
        LogicalField::EmployeeId => &["HS ID", "Employee ID", "POS ID"],
        LogicalField::Date => &["Schedule Date", "Date", "Day"],
        LogicalField::FirstName => &["First Name", "First"],
        LogicalField::LastName => &["Last Name", "Last"],
        LogicalField::InTime => &["In Time", "Scheduled In", "Punch In"],
        LogicalField::OutTime => &["Out Time", "Scheduled Out", "Punch Out"],
        LogicalField::Role => &["Job", "Role"],
        LogicalField::Location => &["Unit", "Location"],
    }
}
