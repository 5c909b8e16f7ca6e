use crate::model::LogicalField;

pub(crate) fn aliases(field: LogicalField) -> &'static [&'static str] {
    match field {
        LogicalField::EmployeeId => &["W2W Employee ID", "Employee Number", "Emp ID"],
        LogicalField::Date => &["Day Date", "Date"],
        LogicalField::FirstName => &["First Name", "Given Name"],
        LogicalField::LastName => &["Last Name", "Surname"],
        LogicalField::InTime => &["Shift Start", "Time In", "Start"],
        LogicalField::OutTime => &["Shift End", "Time Out", "End"],
        LogicalField::Role => &["Position", "Category"],
        LogicalField::Location => &["Schedule", "Location"],
    }
}
