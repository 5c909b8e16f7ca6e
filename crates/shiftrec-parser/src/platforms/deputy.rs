use crate::model::LogicalField;

pub(crate) fn aliases(field: LogicalField) -> &'static [&'static str] {
    match field {
        LogicalField::EmployeeId => &["Employee Id", "Payroll ID", "Employee Export Code"],
        LogicalField::Date => &["Date", "Shift Date"],
        LogicalField::FirstName => &["First Name"],
        LogicalField::LastName => &["Last Name"],
        LogicalField::InTime => &["Actual Start", "Rostered Start", "Start"],
        LogicalField::OutTime => &["Actual End", "Rostered End", "End"],
        LogicalField::Role => &["Area", "Role"],
        LogicalField::Location => &["Location", "Venue"],
    }
}
