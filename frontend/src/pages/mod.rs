pub mod add_employee;
pub mod attendance;
pub mod dashboard;
pub mod employee_detail;
pub mod employees;
pub mod not_found;

pub use add_employee::AddEmployeePage;
pub use attendance::AttendancePage;
pub use dashboard::DashboardPage;
pub use employee_detail::EmployeeDetailPage;
pub use employees::EmployeesPage;
pub use not_found::NotFoundPage;
