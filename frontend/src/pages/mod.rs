pub mod admin;
pub mod admin_login;
pub mod attendance;
pub mod login;
pub mod signup;

pub use admin::AdminDashboardPage;
pub use admin_login::AdminLoginPage;
pub use attendance::AttendancePage;
pub use login::LoginPage;
pub use signup::SignupPage;
