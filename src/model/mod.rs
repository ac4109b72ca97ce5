pub mod attendance;
pub mod employee;

pub use attendance::{
    AttendanceRecord, AttendanceStatus, AttendanceSummary, AttendanceUpdate, NewAttendance,
};
pub use employee::{Employee, EmployeeUpdate, NewEmployee};
